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

//! Assembled attack tables.
//!
//! # Examples
//!
//! ```
//! use slidetab::{square, Bitboard, Slider, SliderTable};
//!
//! let table = SliderTable::build(Slider::Rook)?;
//! assert_eq!(table.width(square::A1), 4096);
//! assert_eq!(table.width(square::D4), 1024);
//!
//! let occupied = Bitboard(0).with(square::A4).with(square::E1);
//! let attacks = table.attacks(square::A1, occupied);
//! assert!(attacks.contains(square::A4));
//! assert!(!attacks.contains(square::A5));
//! # Ok::<_, slidetab::GenerateError>(())
//! ```

use tracing::{debug, warn};

use crate::{
    attacks::sliding_attacks,
    bitboard::Bitboard,
    errors::{GenerateError, GenerateResult},
    mask::relevant_mask,
    occupancy::{index_from_occupancy, Occupancies},
    slider::{BySlider, Slider},
    square::Square,
};

/// Fails if a row of `width` entries does not fit into `max_width` slots.
pub(crate) fn check_width(
    slider: Slider,
    square: Square,
    width: usize,
    max_width: usize,
) -> GenerateResult<()> {
    if width > max_width {
        return Err(GenerateError::WidthExceeded {
            slider,
            square,
            width,
            max_width,
        });
    }
    Ok(())
}

/// Attack sets of one slider for every square and every occupancy index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SliderTable {
    slider: Slider,
    masks: [Bitboard; 64],
    rows: Vec<Vec<Bitboard>>,
}

impl SliderTable {
    /// Computes the table for `slider`.
    ///
    /// Row `sq` has `2^popcount(mask)` entries, where entry `i` holds the
    /// attacks from `sq` with the blockers selected by occupancy index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::WidthExceeded`] if a row would be wider than
    /// [`Slider::max_width()`], or [`GenerateError::TooManyBits`] if a mask
    /// cannot be enumerated.
    pub fn build(slider: Slider) -> GenerateResult<SliderTable> {
        SliderTable::build_with_max_width(slider, slider.max_width())
    }

    /// Like [`SliderTable::build()`], but checks rows against `max_width`
    /// instead of the declared width of the slider.
    pub(crate) fn build_with_max_width(
        slider: Slider,
        max_width: usize,
    ) -> GenerateResult<SliderTable> {
        let mut masks = [Bitboard(0); 64];
        let mut rows = Vec::with_capacity(Square::COUNT);

        for sq in Square::all() {
            let mask = relevant_mask(sq, slider);
            let occupancies = Occupancies::new(mask)?;

            let width = occupancies.len();
            check_width(slider, sq, width, max_width)?;

            let mut row = vec![Bitboard(0); width];
            for (index, occupied) in occupancies {
                row[index] = sliding_attacks(sq, slider, occupied);
            }

            masks[sq.index()] = mask;
            rows.push(row);
        }

        let table = SliderTable {
            slider,
            masks,
            rows,
        };

        debug!(
            %slider,
            entries = table.len(),
            max_width = table.max_width(),
            "built attack table"
        );
        if table.max_width() < max_width {
            warn!(
                %slider,
                declared = max_width,
                needed = table.max_width(),
                "declared table width is larger than any square needs"
            );
        }

        Ok(table)
    }

    /// Reassembles a table from its parts. Callers must ensure each row is
    /// `2^popcount(mask)` entries long.
    pub(crate) fn from_parts(
        slider: Slider,
        masks: [Bitboard; 64],
        rows: Vec<Vec<Bitboard>>,
    ) -> SliderTable {
        debug_assert_eq!(rows.len(), Square::COUNT);
        debug_assert!(masks
            .iter()
            .zip(&rows)
            .all(|(mask, row)| row.len() == 1 << mask.count()));
        SliderTable {
            slider,
            masks,
            rows,
        }
    }

    #[inline]
    pub fn slider(&self) -> Slider {
        self.slider
    }

    #[inline]
    pub fn mask(&self, sq: Square) -> Bitboard {
        self.masks[sq.index()]
    }

    #[inline]
    pub fn masks(&self) -> &[Bitboard; 64] {
        &self.masks
    }

    /// Attack sets of `sq`, indexed by occupancy index.
    #[inline]
    pub fn row(&self, sq: Square) -> &[Bitboard] {
        &self.rows[sq.index()]
    }

    #[inline]
    pub fn width(&self, sq: Square) -> usize {
        self.rows[sq.index()].len()
    }

    #[inline]
    pub fn relevant_bits(&self, sq: Square) -> u32 {
        self.mask(sq).count()
    }

    /// Widest row of the table.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of attack sets over all squares.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the attacks from `sq` given the full board occupancy.
    #[inline]
    pub fn attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        let mask = self.mask(sq);
        self.rows[sq.index()][index_from_occupancy(occupied & mask, mask)]
    }
}

/// Attack tables for both sliders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tables {
    by_slider: BySlider<SliderTable>,
}

impl Tables {
    /// Builds the rook table, then the bishop table.
    pub fn build() -> GenerateResult<Tables> {
        Tables::build_with_max_widths(&BySlider::new_with(Slider::max_width))
    }

    pub(crate) fn build_with_max_widths(max_widths: &BySlider<usize>) -> GenerateResult<Tables> {
        Ok(Tables {
            by_slider: BySlider::try_new_with(|slider| {
                SliderTable::build_with_max_width(slider, *max_widths.get(slider))
            })?,
        })
    }

    pub(crate) fn from_tables(by_slider: BySlider<SliderTable>) -> Tables {
        Tables { by_slider }
    }

    #[inline]
    pub fn get(&self, slider: Slider) -> &SliderTable {
        self.by_slider.get(slider)
    }

    /// Iterates over the tables in [`Slider::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &SliderTable> {
        self.by_slider.iter().map(|(_, table)| table)
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.by_slider.rook.attacks(sq, occupied)
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.by_slider.bishop.attacks(sq, occupied)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook_attacks(sq, occupied) | self.bishop_attacks(sq, occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attacks, occupancy::occupancy_from_index, square};

    #[test]
    fn test_row_widths() {
        let table = SliderTable::build(Slider::Bishop).unwrap();
        for sq in Square::all() {
            assert_eq!(table.width(sq), 1 << table.relevant_bits(sq));
        }
        assert_eq!(table.max_width(), 512);
        assert_eq!(table.width(square::A1), 64);
        assert_eq!(table.width(square::B1), 32);
        assert_eq!(table.len(), 5248);
    }

    #[test]
    fn test_check_width() {
        assert!(check_width(Slider::Rook, square::A1, 4096, 4096).is_ok());
        assert!(matches!(
            check_width(Slider::Rook, square::A1, 4096, 2048),
            Err(GenerateError::WidthExceeded {
                slider: Slider::Rook,
                square: square::A1,
                width: 4096,
                max_width: 2048,
            })
        ));
    }

    #[test]
    fn test_build_rejects_narrow_rows() {
        // d4 is the first square whose bishop mask has 9 squares.
        assert!(matches!(
            SliderTable::build_with_max_width(Slider::Bishop, 256),
            Err(GenerateError::WidthExceeded {
                slider: Slider::Bishop,
                square: square::D4,
                width: 512,
                max_width: 256,
            })
        ));
        assert!(matches!(
            Tables::build_with_max_widths(&BySlider {
                rook: 2048,
                bishop: 512
            }),
            Err(GenerateError::WidthExceeded {
                slider: Slider::Rook,
                square: square::A1,
                ..
            })
        ));
    }

    #[test]
    fn test_rook_total() {
        let table = SliderTable::build(Slider::Rook).unwrap();
        assert_eq!(table.max_width(), 4096);
        assert_eq!(table.len(), 102_400);
    }

    #[test]
    fn test_rows_match_ray_casting() {
        let table = SliderTable::build(Slider::Rook).unwrap();
        for sq in [square::A1, square::D6, square::H3] {
            let mask = table.mask(sq);
            for (index, &attack) in table.row(sq).iter().enumerate() {
                let occupied = occupancy_from_index(index, mask);
                assert_eq!(attack, attacks::rook_attacks(sq, occupied));
            }
        }
    }

    #[test]
    fn test_lookup() {
        let tables = Tables::build().unwrap();
        let occupied = Bitboard(0x3f7f_2880_2826_f5b9);
        for sq in Square::all() {
            assert_eq!(
                tables.rook_attacks(sq, occupied),
                attacks::rook_attacks(sq, occupied)
            );
            assert_eq!(
                tables.bishop_attacks(sq, occupied),
                attacks::bishop_attacks(sq, occupied)
            );
            assert_eq!(
                tables.queen_attacks(sq, occupied),
                attacks::queen_attacks(sq, occupied)
            );
        }
        assert_eq!(
            tables.rook_attacks(square::D6, occupied),
            Bitboard(0x0008_3708_0800_0000)
        );
    }

    #[test]
    fn test_empty_occupancy_entry() {
        let table = SliderTable::build(Slider::Rook).unwrap();
        assert_eq!(
            table.row(square::A1)[0],
            (Bitboard::rank(0) | Bitboard::file(0)).without(square::A1)
        );
    }
}
