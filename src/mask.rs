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

//! Relevant blocker masks.

use crate::{attacks::sliding_attacks, bitboard::Bitboard, slider::Slider, square::Square};

/// Squares whose occupancy can change the attacks of `slider` on `sq`.
///
/// This is the empty board attack set without the last square of each ray:
/// a blocker on the board edge hides nothing, so its occupancy is
/// irrelevant. The mask never contains `sq` itself.
///
/// # Examples
///
/// ```
/// use slidetab::{mask, square, Slider};
///
/// let mask = mask::relevant_mask(square::A1, Slider::Rook);
/// // . . . . . . . .
/// // 1 . . . . . . .
/// // 1 . . . . . . .
/// // 1 . . . . . . .
/// // 1 . . . . . . .
/// // 1 . . . . . . .
/// // 1 . . . . . . .
/// // . 1 1 1 1 1 1 .
///
/// assert_eq!(mask.count(), 12);
/// ```
pub fn relevant_mask(sq: Square, slider: Slider) -> Bitboard {
    let edges = ((Bitboard::rank(0) | Bitboard::rank(7)) & !Bitboard::rank(sq.rank()))
        | ((Bitboard::file(0) | Bitboard::file(7)) & !Bitboard::file(sq.file()));

    sliding_attacks(sq, slider, Bitboard(0)) & !edges
}

/// Relevant masks of all 64 squares, indexed by square.
pub fn masks(slider: Slider) -> [Bitboard; 64] {
    let mut masks = [Bitboard(0); 64];
    for sq in Square::all() {
        masks[sq.index()] = relevant_mask(sq, slider);
    }
    masks
}

/// Largest number of relevant squares of any square, found by scanning the
/// whole board.
pub fn max_relevant_bits(slider: Slider) -> u32 {
    Square::all()
        .map(|sq| relevant_mask(sq, slider).count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    #[test]
    fn test_excludes_origin_and_ray_ends() {
        for slider in Slider::ALL {
            for sq in Square::all() {
                let mask = relevant_mask(sq, slider);
                assert!(!mask.contains(sq));

                for &(df, dr) in slider.directions() {
                    let mut last = None;
                    let mut s = sq;
                    while let Some(next) = s.offset(df, dr) {
                        last = Some(next);
                        s = next;
                    }
                    if let Some(terminal) = last {
                        assert!(!mask.contains(terminal), "{slider} {sq:?} {terminal:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mask_inside_empty_attacks() {
        for slider in Slider::ALL {
            for sq in Square::all() {
                assert!(relevant_mask(sq, slider)
                    .is_subset(sliding_attacks(sq, slider, Bitboard(0))));
            }
        }
    }

    #[test]
    fn test_rook_on_edge_keeps_own_line() {
        // Edge squares on the rook's own file still count, except the ray ends.
        let mask = relevant_mask(square::A4, Slider::Rook);
        assert!(mask.contains(square::A2));
        assert!(mask.contains(square::A7));
        assert!(!mask.contains(square::A1));
        assert!(!mask.contains(square::A8));
        assert!(!mask.contains(square::H4));
        assert_eq!(mask.count(), 11);
    }

    #[test]
    fn test_max_relevant_bits() {
        assert_eq!(max_relevant_bits(Slider::Rook), 12);
        assert_eq!(max_relevant_bits(Slider::Bishop), 9);
        for slider in Slider::ALL {
            assert_eq!(max_relevant_bits(slider), slider.max_relevant_bits());
        }
    }

    #[test]
    fn test_central_bishop() {
        assert_eq!(relevant_mask(square::D4, Slider::Bishop).count(), 9);
        assert_eq!(relevant_mask(square::E5, Slider::Bishop).count(), 9);
        assert_eq!(relevant_mask(square::A1, Slider::Bishop).count(), 6);
        assert_eq!(
            masks(Slider::Bishop)[square::D4.index()],
            relevant_mask(square::D4, Slider::Bishop)
        );
    }
}
