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

//! Ray casting for sliding pieces.
//!
//! These functions walk the board square by square and are used to fill the
//! precomputed [tables](crate::table). Lookups at runtime should go through
//! [`SliderTable::attacks()`](crate::SliderTable::attacks) instead.
//!
//! # Examples
//!
//! ```
//! use slidetab::{attacks, square, Bitboard};
//!
//! let occupied = Bitboard::rank(5); // blocking pieces
//! let attacks = attacks::bishop_attacks(square::C2, occupied);
//! // . . . . . . . .
//! // . . . . . . . .
//! // 0 0 0 0 0 0 1 0
//! // . . . . . 1 . .
//! // 1 . . . 1 . . .
//! // . 1 . 1 . . . .
//! // . . . . . . . .
//! // . 1 . 1 . . . .
//!
//! assert!(attacks.contains(square::G6));
//! assert!(!attacks.contains(square::H7));
//! ```

use crate::{bitboard::Bitboard, slider::Slider, square::Square};

/// Squares attacked by `slider` from `sq`, given the `occupied` squares.
///
/// Each ray includes the first occupied square it meets and nothing behind
/// it. Bits of `occupied` that are not on one of the rays have no effect, so
/// the occupancy does not need to be masked.
pub fn sliding_attacks(sq: Square, slider: Slider, occupied: Bitboard) -> Bitboard {
    let mut attack = Bitboard(0);

    for &(df, dr) in slider.directions() {
        let mut previous = sq;

        while let Some(s) = previous.offset(df, dr) {
            attack.add(s);

            if occupied.contains(s) {
                break;
            }

            previous = s;
        }
    }

    attack
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, Slider::Rook, occupied)
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, Slider::Bishop, occupied)
}

/// Queen attacks are the union of rook and bishop attacks.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::{self, distance};

    #[test]
    fn test_sliding_rook_attacks() {
        let attack = rook_attacks(square::D6, Bitboard(0x3f7f_2880_2826_f5b9));
        assert_eq!(attack, Bitboard(0x0008_3708_0800_0000));
    }

    #[test]
    fn test_empty_board_corner() {
        let attack = rook_attacks(square::A1, Bitboard(0));
        assert_eq!(
            attack,
            (Bitboard::rank(0) | Bitboard::file(0)).without(square::A1)
        );
        assert_eq!(attack.count(), 14);
    }

    #[test]
    fn test_blocker_is_included() {
        let occupied = Bitboard::from(square::F6);
        let attack = bishop_attacks(square::D4, occupied);
        assert!(attack.contains(square::E5));
        assert!(attack.contains(square::F6));
        assert!(!attack.contains(square::G7));
        assert!(!attack.contains(square::H8));
        // Other diagonals run to the edge.
        assert!(attack.contains(square::A7));
        assert!(attack.contains(square::A1));
        assert!(attack.contains(square::G1));
        assert_eq!(attack.count(), 11);
    }

    #[test]
    fn test_full_occupancy_is_king_step() {
        for sq in Square::all() {
            for slider in Slider::ALL {
                for s in sliding_attacks(sq, slider, Bitboard::FULL) {
                    assert_eq!(distance(sq, s), 1);
                }
            }
        }
    }

    #[test]
    fn test_queen_is_union() {
        let occupied = Bitboard(0x0000_1824_0042_0000);
        for sq in Square::all() {
            assert_eq!(
                queen_attacks(sq, occupied),
                rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
            );
            assert!(!queen_attacks(sq, occupied).contains(sq));
        }
    }

    #[test]
    fn test_no_wrap_around() {
        let attack = rook_attacks(square::H4, Bitboard(0));
        assert!(!attack.contains(square::A5));
        assert!(attack.contains(square::A4));
        let attack = bishop_attacks(square::H4, Bitboard(0));
        assert!(!attack.contains(square::A6));
        assert!(!attack.contains(square::A2));
    }
}
