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

use std::{error::Error, fmt, str::FromStr};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Ray geometry of a sliding piece: `Rook` or `Bishop`.
///
/// Queens move along both and are handled by composition.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    /// `Rook` and `Bishop`, in this order. This is also the order in which
    /// tables are emitted.
    pub const ALL: [Slider; 2] = [Slider::Rook, Slider::Bishop];

    /// Direction vectors as `(file, rank)` steps.
    #[inline]
    pub const fn directions(self) -> &'static [(i8, i8); 4] {
        match self {
            Slider::Rook => &ROOK_DIRECTIONS,
            Slider::Bishop => &BISHOP_DIRECTIONS,
        }
    }

    /// Declared width of a table row, i.e. the number of occupancy indices
    /// reserved per square.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetab::Slider;
    ///
    /// assert_eq!(Slider::Rook.max_width(), 4096);
    /// assert_eq!(Slider::Bishop.max_width(), 512);
    /// ```
    #[inline]
    pub const fn max_width(self) -> usize {
        1 << self.max_relevant_bits()
    }

    /// Declared number of relevant blocker squares for the busiest square.
    #[inline]
    pub const fn max_relevant_bits(self) -> u32 {
        match self {
            Slider::Rook => 12,
            Slider::Bishop => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slider::Rook => "rook",
            Slider::Bishop => "bishop",
        }
    }

    /// Prefix of emitted constant names, e.g. `ROOK_MASKS`.
    pub const fn const_prefix(self) -> &'static str {
        match self {
            Slider::Rook => "ROOK",
            Slider::Bishop => "BISHOP",
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an invalid slider name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSliderError;

impl fmt::Display for ParseSliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid slider name (expected rook or bishop)")
    }
}

impl Error for ParseSliderError {}

impl FromStr for Slider {
    type Err = ParseSliderError;

    fn from_str(s: &str) -> Result<Slider, ParseSliderError> {
        Ok(match s {
            "rook" => Slider::Rook,
            "bishop" => Slider::Bishop,
            _ => return Err(ParseSliderError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Slider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Slider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SliderVisitor;

        impl serde::de::Visitor<'_> for SliderVisitor {
            type Value = Slider;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("rook or bishop")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SliderVisitor)
    }
}

/// Container with values for each [`Slider`].
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySlider<T> {
    pub rook: T,
    pub bishop: T,
}

impl<T> BySlider<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySlider<T>
    where
        F: FnMut(Slider) -> T,
    {
        BySlider {
            rook: init(Slider::Rook),
            bishop: init(Slider::Bishop),
        }
    }

    /// Like [`BySlider::new_with()`], but stops at the first error.
    pub fn try_new_with<E, F>(mut init: F) -> Result<BySlider<T>, E>
    where
        F: FnMut(Slider) -> Result<T, E>,
    {
        Ok(BySlider {
            rook: init(Slider::Rook)?,
            bishop: init(Slider::Bishop)?,
        })
    }

    #[inline]
    pub const fn get(&self, slider: Slider) -> &T {
        match slider {
            Slider::Rook => &self.rook,
            Slider::Bishop => &self.bishop,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> BySlider<U>
    where
        F: FnMut(T) -> U,
    {
        BySlider {
            rook: f(self.rook),
            bishop: f(self.bishop),
        }
    }

    /// Iterates over `(slider, value)` pairs in [`Slider::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Slider, &T)> {
        Slider::ALL.into_iter().map(move |slider| (slider, self.get(slider)))
    }
}
