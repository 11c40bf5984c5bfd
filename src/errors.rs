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

use std::{error::Error, fmt, io, path::PathBuf};

use crate::{slider::Slider, square::Square};

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error when generating tables.
///
/// All variants except `Io` are internal invariant violations. They are
/// detected before the output file is created.
#[derive(Debug)]
pub enum GenerateError {
    /// A square needs a wider table row than declared for the slider.
    WidthExceeded {
        #[allow(missing_docs)]
        slider: Slider,
        #[allow(missing_docs)]
        square: Square,
        #[allow(missing_docs)]
        width: usize,
        #[allow(missing_docs)]
        max_width: usize,
    },
    /// A mask has more squares than an occupancy index can distribute.
    TooManyBits {
        #[allow(missing_docs)]
        bits: u32,
        #[allow(missing_docs)]
        max_bits: u32,
    },
    /// Writing the artifact failed.
    Io {
        #[allow(missing_docs)]
        path: PathBuf,
        #[allow(missing_docs)]
        error: io::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::WidthExceeded {
                slider,
                square,
                width,
                max_width,
            } => write!(
                f,
                "{slider} table row for {square} needs {width} entries, but only {max_width} are declared"
            ),
            GenerateError::TooManyBits { bits, max_bits } => write!(
                f,
                "mask has {bits} relevant squares, occupancy index supports at most {max_bits}"
            ),
            GenerateError::Io { path, error } => {
                write!(f, "i/o error writing {}: {error}", path.display())
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Error when reading an emitted artifact back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseArtifactError {
    /// Declaration of a required array was not found.
    MissingArray {
        #[allow(missing_docs)]
        name: String,
    },
    /// Unexpected byte in an array initializer.
    UnexpectedToken {
        #[allow(missing_docs)]
        offset: usize,
    },
    /// Hexadecimal literal could not be parsed.
    InvalidLiteral {
        #[allow(missing_docs)]
        offset: usize,
    },
    /// Array has the wrong number of elements.
    Shape {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A padding slot past the valid row length is not zero.
    NonZeroPadding {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        square: Square,
        #[allow(missing_docs)]
        index: usize,
    },
    /// Emitted mask differs from the relevant mask of the square.
    MaskMismatch {
        #[allow(missing_docs)]
        slider: Slider,
        #[allow(missing_docs)]
        square: Square,
    },
}

impl fmt::Display for ParseArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseArtifactError::MissingArray { name } => write!(f, "array {name} not found"),
            ParseArtifactError::UnexpectedToken { offset } => {
                write!(f, "unexpected token at byte {offset}")
            }
            ParseArtifactError::InvalidLiteral { offset } => {
                write!(f, "invalid hexadecimal literal at byte {offset}")
            }
            ParseArtifactError::Shape {
                name,
                expected,
                found,
            } => write!(f, "array {name} has {found} entries, expected {expected}"),
            ParseArtifactError::NonZeroPadding {
                name,
                square,
                index,
            } => write!(f, "{name}[{square}][{index}] is padding but not zero"),
            ParseArtifactError::MaskMismatch { slider, square } => {
                write!(f, "emitted {slider} mask for {square} is not the relevant mask")
            }
        }
    }
}

impl Error for ParseArtifactError {}
