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

//! Driver that builds all tables and writes the artifact.

use std::{
    fs::{self, File},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    emit::{self, Format},
    errors::{GenerateError, GenerateResult},
    mask::{max_relevant_bits, relevant_mask},
    slider::{BySlider, Slider},
    square::{self, Square},
    table::{check_width, Tables},
};

/// Default artifact location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "generated/slider_tables.rs";

/// Settings of a generation run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub output: PathBuf,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: Format::Rust,
        }
    }
}

impl Config {
    /// Switches the format, and the extension of the output path with it.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Config {
        self.output.set_extension(format.extension());
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Config {
        self.output = output.into();
        self
    }
}

/// Summary of a successful run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub output: PathBuf,
    pub bytes: usize,
    /// Largest number of relevant squares found per slider.
    pub max_relevant_bits: BySlider<u32>,
    /// Number of valid attack sets per slider.
    pub entries: BySlider<usize>,
}

/// Declared row widths of the emitted arrays.
fn declared_widths() -> BySlider<usize> {
    BySlider::new_with(Slider::max_width)
}

/// Checks that no square needs a wider row than `max_widths` allows, and
/// returns the largest number of relevant squares per slider.
///
/// Declared widths larger than needed are accepted.
fn verify_widths(max_widths: &BySlider<usize>) -> GenerateResult<BySlider<u32>> {
    BySlider::try_new_with(|slider| {
        let bits = max_relevant_bits(slider);
        let square = Square::all()
            .find(|&sq| relevant_mask(sq, slider).count() == bits)
            .unwrap_or(square::A1);
        let max_width = *max_widths.get(slider);
        debug!(%slider, bits, %square, max_width, "relevant bits");
        check_width(slider, square, 1 << bits, max_width)?;
        Ok(bits)
    })
}

fn render_with(
    format: Format,
    max_widths: &BySlider<usize>,
) -> GenerateResult<(Tables, Vec<u8>, BySlider<u32>)> {
    let bits = verify_widths(max_widths)?;
    let tables = Tables::build_with_max_widths(max_widths)?;
    let bytes = emit::to_bytes(&tables, format);
    Ok((tables, bytes, bits))
}

/// Computes all tables and renders them. Nothing is written to disk.
pub fn render(format: Format) -> GenerateResult<(Tables, Vec<u8>)> {
    let (tables, bytes, _) = render_with(format, &declared_widths())?;
    Ok((tables, bytes))
}

fn temporary_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    output.with_file_name(name)
}

/// Writes `bytes` next to `output`, then moves the file into place, so that
/// `output` is never left partially written.
fn write_atomically(output: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let tmp = temporary_path(output);
    let result = (|| {
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, output)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Runs the whole pipeline: mask, enumerate, attack, assemble, serialize,
/// and finally write the artifact to `config.output`.
///
/// All invariants are checked before the output file is touched.
pub fn generate(config: &Config) -> GenerateResult<Report> {
    generate_with(config, &declared_widths())
}

fn generate_with(config: &Config, max_widths: &BySlider<usize>) -> GenerateResult<Report> {
    let (tables, bytes, max_relevant_bits) = render_with(config.format, max_widths)?;

    write_atomically(&config.output, &bytes).map_err(|error| GenerateError::Io {
        path: config.output.clone(),
        error,
    })?;

    info!(
        output = %config.output.display(),
        format = %config.format,
        bytes = bytes.len(),
        "wrote slider tables"
    );

    Ok(Report {
        output: config.output.clone(),
        bytes: bytes.len(),
        max_relevant_bits,
        entries: BySlider::new_with(|slider| tables.get(slider).len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_format() {
        let config = Config::default().with_format(Format::Cpp);
        assert_eq!(config.output, PathBuf::from("generated/slider_tables.hpp"));
        assert_eq!(config.format, Format::Cpp);
    }

    #[test]
    fn test_temporary_path() {
        assert_eq!(
            temporary_path(Path::new("out/tables.rs")),
            PathBuf::from("out/tables.rs.tmp")
        );
    }

    #[test]
    fn test_verify_widths() {
        let bits = verify_widths(&declared_widths()).unwrap();
        assert_eq!(bits, BySlider { rook: 12, bishop: 9 });

        assert!(matches!(
            verify_widths(&BySlider {
                rook: 4096,
                bishop: 256
            }),
            Err(GenerateError::WidthExceeded {
                slider: Slider::Bishop,
                width: 512,
                max_width: 256,
                ..
            })
        ));
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("slidetab-unit-{}", std::process::id()));
        let config = Config::default().with_output(dir.join("tables.rs"));

        let result = generate_with(
            &config,
            &BySlider {
                rook: 2048,
                bishop: 512,
            },
        );
        assert!(matches!(
            result,
            Err(GenerateError::WidthExceeded {
                slider: Slider::Rook,
                ..
            })
        ));
        assert!(!config.output.exists());
        assert!(!temporary_path(&config.output).exists());
    }

    #[test]
    fn test_render_is_deterministic() {
        let (_, a) = render(Format::Rust).unwrap();
        let (_, b) = render(Format::Rust).unwrap();
        assert_eq!(a, b);
    }
}
