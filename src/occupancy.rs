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

//! Correspondence between occupancy indices and blocker subsets of a mask.
//!
//! The squares of a mask are numbered in ascending square order. Bit `k` of
//! an occupancy index is set if and only if the `k`-th square of the mask is
//! occupied. Generators and consumers of the tables must agree on this
//! ordering bit for bit.
//!
//! # Examples
//!
//! ```
//! use slidetab::{occupancy, square, Bitboard};
//!
//! let mask = Bitboard(0).with(square::B1).with(square::D1).with(square::F1);
//!
//! // Index 0b101 selects the first and third mask square.
//! let occupied = occupancy::occupancy_from_index(0b101, mask);
//! assert_eq!(occupied, Bitboard(0).with(square::B1).with(square::F1));
//!
//! assert_eq!(occupancy::index_from_occupancy(occupied, mask), 0b101);
//! ```

use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::{
    bitboard::Bitboard,
    errors::{GenerateError, GenerateResult},
    square::Square,
};

/// Widest mask accepted by [`Occupancies`]. Rows are indexed by `usize`
/// and hold `2^MAX_INDEX_BITS` entries at most.
pub const MAX_INDEX_BITS: usize = 16;

/// Distributes the bits of `index` onto the squares of `mask`, in ascending
/// square order.
///
/// `index` must be below `2^mask.count()`. Higher bits are ignored.
pub fn occupancy_from_index(index: usize, mask: Bitboard) -> Bitboard {
    debug_assert!(
        mask.count() as usize >= usize::BITS as usize || index >> mask.count() == 0
    );
    distribute(index, mask)
}

/// Sets the `k`-th of `squares` if bit `k` of `index` is set.
fn distribute<I>(index: usize, squares: I) -> Bitboard
where
    I: IntoIterator<Item = Square>,
{
    let mut occupied = Bitboard(0);
    for (k, sq) in squares.into_iter().enumerate() {
        if index & (1 << k) != 0 {
            occupied.add(sq);
        }
    }
    occupied
}

/// Gathers the squares of `occupied` that are in `mask` into an occupancy
/// index. Squares outside of `mask` are ignored, so a full board occupancy
/// can be passed as is.
///
/// This is the inverse of [`occupancy_from_index()`].
pub fn index_from_occupancy(occupied: Bitboard, mask: Bitboard) -> usize {
    let mut index = 0;
    for (k, sq) in mask.into_iter().enumerate() {
        if occupied.contains(sq) {
            index |= 1 << k;
        }
    }
    index
}

/// Iterator over all `(index, occupancy)` pairs of a mask, in index order.
#[derive(Debug, Clone)]
pub struct Occupancies {
    squares: ArrayVec<Square, MAX_INDEX_BITS>,
    next: usize,
    end: usize,
}

impl Occupancies {
    /// Prepares enumeration of the `2^mask.count()` subsets of `mask`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TooManyBits`] if the mask has more than
    /// [`MAX_INDEX_BITS`] squares.
    pub fn new(mask: Bitboard) -> GenerateResult<Occupancies> {
        let mut squares = ArrayVec::new();
        for sq in mask {
            squares.try_push(sq).map_err(|_| GenerateError::TooManyBits {
                bits: mask.count(),
                max_bits: MAX_INDEX_BITS as u32,
            })?;
        }

        Ok(Occupancies {
            end: 1 << squares.len(),
            squares,
            next: 0,
        })
    }
}

impl Iterator for Occupancies {
    type Item = (usize, Bitboard);

    fn next(&mut self) -> Option<(usize, Bitboard)> {
        if self.next < self.end {
            let index = self.next;
            self.next += 1;
            Some((index, distribute(index, self.squares.iter().copied())))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Occupancies {
    fn len(&self) -> usize {
        self.end - self.next
    }
}

impl FusedIterator for Occupancies {}
