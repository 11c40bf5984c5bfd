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

//! Rendering tables as constant data declarations.
//!
//! For each slider, in [`Slider::ALL`] order, two arrays are emitted:
//!
//! * `<SLIDER>_MASKS`: 64 relevant masks, indexed by square.
//! * `<SLIDER>_ATTACKS`: 64 rows of [`Slider::max_width()`] attack sets.
//!   Slots at or beyond `2^popcount(mask)` are zero and must not be read.
//!
//! Every value is a 16 digit hexadecimal literal, so output is identical
//! across runs.

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

use crate::{
    bitboard::Bitboard,
    slider::Slider,
    square::Square,
    table::{SliderTable, Tables},
};

const VALUES_PER_MASK_LINE: usize = 8;

const CONTRACT: &[&str] = &[
    "Sliding piece attack tables. Generated by slidetab, do not edit.",
    "",
    "To look up the attacks of a slider on square `sq` with board occupancy",
    "`occupied`:",
    "",
    "  1. Let `mask = <SLIDER>_MASKS[sq]`.",
    "  2. Number the squares of `mask` 0, 1, 2, ... in ascending square order",
    "     (a1 = 0, b1 = 1, ..., h8 = 63).",
    "  3. The occupancy index has bit k set if and only if the k-th square of",
    "     `mask` is occupied (a parallel bit extract of `occupied` by `mask`).",
    "  4. The attacks are `<SLIDER>_ATTACKS[sq][index]`.",
    "",
    "Only the first 2^popcount(mask) slots of a row are valid. The remaining",
    "slots are zero padding.",
];

/// Output language of the emitted artifact.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Format {
    /// `pub static` arrays for `include!`.
    #[default]
    Rust,
    /// `inline constexpr uint64_t` arrays for a C++ header.
    Cpp,
}

impl Format {
    /// Conventional file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Rust => "rs",
            Format::Cpp => "hpp",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Format::Rust => "rust",
            Format::Cpp => "cpp",
        }
    }

    fn write_preamble<W: Write>(self, w: &mut W) -> io::Result<()> {
        for line in CONTRACT {
            if line.is_empty() {
                writeln!(w, "//")?;
            } else {
                writeln!(w, "// {line}")?;
            }
        }
        writeln!(w)?;
        if self == Format::Cpp {
            writeln!(w, "#pragma once")?;
            writeln!(w)?;
            writeln!(w, "#include <cstdint>")?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_value<W: Write>(self, w: &mut W, Bitboard(value): Bitboard) -> io::Result<()> {
        match self {
            Format::Rust => write!(w, "0x{value:016x}"),
            Format::Cpp => write!(w, "0x{value:016X}ULL"),
        }
    }

    fn open(self) -> char {
        match self {
            Format::Rust => '[',
            Format::Cpp => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Format::Rust => ']',
            Format::Cpp => '}',
        }
    }

    fn declare_1d<W: Write>(self, w: &mut W, name: &str, len: usize) -> io::Result<()> {
        match self {
            Format::Rust => write!(w, "pub static {name}: [u64; {len}] = "),
            Format::Cpp => write!(w, "inline constexpr uint64_t {name}[{len}] = "),
        }
    }

    fn declare_2d<W: Write>(
        self,
        w: &mut W,
        name: &str,
        rows: usize,
        width: usize,
    ) -> io::Result<()> {
        match self {
            Format::Rust => write!(w, "pub static {name}: [[u64; {width}]; {rows}] = "),
            Format::Cpp => write!(w, "inline constexpr uint64_t {name}[{rows}][{width}] = "),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an unknown format name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFormatError;

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid format (expected rust or cpp)")
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Format, ParseFormatError> {
        Ok(match s {
            "rust" | "rs" => Format::Rust,
            "cpp" | "c++" | "hpp" => Format::Cpp,
            _ => return Err(ParseFormatError),
        })
    }
}

/// Name of the mask array of `slider`, e.g. `ROOK_MASKS`.
pub fn masks_name(slider: Slider) -> String {
    format!("{}_MASKS", slider.const_prefix())
}

/// Name of the attack array of `slider`, e.g. `ROOK_ATTACKS`.
pub fn attacks_name(slider: Slider) -> String {
    format!("{}_ATTACKS", slider.const_prefix())
}

fn write_masks<W: Write>(w: &mut W, table: &SliderTable, format: Format) -> io::Result<()> {
    let masks = table.masks();
    format.declare_1d(w, &masks_name(table.slider()), masks.len())?;
    writeln!(w, "{}", format.open())?;
    for line in masks.chunks(VALUES_PER_MASK_LINE) {
        write!(w, "   ")?;
        for &mask in line {
            write!(w, " ")?;
            format.write_value(w, mask)?;
            write!(w, ",")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "{};", format.close())?;
    writeln!(w)
}

fn write_attacks<W: Write>(w: &mut W, table: &SliderTable, format: Format) -> io::Result<()> {
    let slider = table.slider();
    let width = slider.max_width();
    format.declare_2d(w, &attacks_name(slider), table.masks().len(), width)?;
    writeln!(w, "{}", format.open())?;
    for sq in Square::all() {
        let row = table.row(sq);
        write!(w, "    {}", format.open())?;
        for i in 0..width {
            if i > 0 {
                write!(w, ", ")?;
            }
            format.write_value(w, row.get(i).copied().unwrap_or(Bitboard(0)))?;
        }
        writeln!(w, "{},", format.close())?;
    }
    writeln!(w, "{};", format.close())?;
    writeln!(w)
}

/// Writes all tables to `w`.
pub fn write_tables<W: Write>(w: &mut W, tables: &Tables, format: Format) -> io::Result<()> {
    format.write_preamble(w)?;
    for table in tables.iter() {
        write_masks(w, table, format)?;
        write_attacks(w, table, format)?;
    }
    Ok(())
}

/// Renders all tables into a byte buffer.
pub fn to_bytes(tables: &Tables, format: Format) -> Vec<u8> {
    let mut buf = Vec::new();
    write_tables(&mut buf, tables, format).expect("writing to Vec<u8> is infallible");
    buf
}
