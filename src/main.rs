// This file is part of the slidetab library.
// Copyright (C) 2025 The slidetab developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Writes the slider attack tables.
//!
//! Without arguments, the Rust artifact is written to
//! `generated/slider_tables.rs`.

use std::{error::Error, path::PathBuf};

use clap::Parser;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use slidetab::{
    generator::{self, Config},
    Format,
};

#[derive(Debug, Parser)]
#[command(version, about = "Generate sliding piece attack tables")]
struct Opt {
    /// Output file [default: generated/slider_tables.rs, or .hpp for cpp]
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format: rust or cpp
    #[arg(long, default_value_t = Format::Rust)]
    format: Format,
    /// Log table statistics
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();

    TermLogger::init(
        if opt.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut config = Config::default().with_format(opt.format);
    if let Some(output) = opt.output {
        config = config.with_output(output);
    }

    let report = generator::generate(&config)?;
    println!(
        "{} ({} bytes, rook {} + bishop {} entries)",
        report.output.display(),
        report.bytes,
        report.entries.rook,
        report.entries.bishop
    );
    Ok(())
}
