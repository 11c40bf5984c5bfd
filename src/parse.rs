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

//! Reading emitted artifacts back into [`Tables`].
//!
//! Accepts both [output formats](crate::emit::Format).
//!
//! # Examples
//!
//! ```
//! use slidetab::{emit, parse, Format, Tables};
//!
//! let tables = Tables::build()?;
//! let text = String::from_utf8(emit::to_bytes(&tables, Format::Cpp))?;
//! assert_eq!(parse::read_tables(&text)?, tables);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use crate::{
    bitboard::Bitboard,
    emit::{attacks_name, masks_name},
    errors::ParseArtifactError,
    mask::relevant_mask,
    slider::{BySlider, Slider},
    square::Square,
    table::{SliderTable, Tables},
};

/// Artifacts nest at most two levels deep: rows inside a table.
const MAX_DEPTH: usize = 2;

#[derive(Debug, Clone, Eq, PartialEq)]
enum Node {
    Value(u64),
    List(Vec<Node>),
}

struct Reader<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn new(src: &[u8], pos: usize) -> Reader<'_> {
        Reader { src, pos }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, prefix: &[u8]) -> bool {
        if self.src[self.pos..].starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn unexpected(&self) -> ParseArtifactError {
        ParseArtifactError::UnexpectedToken { offset: self.pos }
    }

    fn read_node(&mut self, depth: usize) -> Result<Node, ParseArtifactError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'[' | b'{') if depth >= MAX_DEPTH => Err(self.unexpected()),
            Some(open @ (b'[' | b'{')) => {
                self.pos += 1;
                self.read_list(if open == b'[' { b']' } else { b'}' }, depth + 1)
            }
            Some(b'0') => self.read_value(),
            _ => Err(self.unexpected()),
        }
    }

    fn read_list(&mut self, close: u8, depth: usize) -> Result<Node, ParseArtifactError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(Node::List(items));
            }

            items.push(self.read_node(depth)?);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(ch) if ch == close => (),
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn read_value(&mut self) -> Result<Node, ParseArtifactError> {
        let start = self.pos;
        if !self.eat(b"0x") && !self.eat(b"0X") {
            return Err(self.unexpected());
        }

        let digits_start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_hexdigit() || ch == b'_') {
            self.pos += 1;
        }
        let digits: Vec<u8> = self.src[digits_start..self.pos]
            .iter()
            .copied()
            .filter(|&ch| ch != b'_')
            .collect();

        let value = btoi::btou_radix::<u64>(&digits, 16)
            .map_err(|_| ParseArtifactError::InvalidLiteral { offset: start })?;

        // Integer suffixes of either language.
        let _ = self.eat(b"ULL") || self.eat(b"ull") || self.eat(b"u64");

        Ok(Node::Value(value))
    }
}

/// Finds the initializer of the array declared as `name` and parses it.
fn read_array(text: &str, name: &str) -> Result<Node, ParseArtifactError> {
    let missing = || ParseArtifactError::MissingArray {
        name: name.to_owned(),
    };

    let decl = [format!(" {name}:"), format!(" {name}[")]
        .iter()
        .filter_map(|pattern| text.find(pattern.as_str()))
        .min()
        .ok_or_else(missing)?;
    let eq = text[decl..].find('=').ok_or_else(missing)? + decl;

    Reader::new(text.as_bytes(), eq + 1).read_node(0)
}

fn expect_list(node: Node, name: &str, len: usize) -> Result<Vec<Node>, ParseArtifactError> {
    match node {
        Node::List(items) if items.len() == len => Ok(items),
        Node::List(items) => Err(ParseArtifactError::Shape {
            name: name.to_owned(),
            expected: len,
            found: items.len(),
        }),
        Node::Value(_) => Err(ParseArtifactError::Shape {
            name: name.to_owned(),
            expected: len,
            found: 0,
        }),
    }
}

fn expect_values(node: Node, name: &str, len: usize) -> Result<Vec<u64>, ParseArtifactError> {
    expect_list(node, name, len)?
        .into_iter()
        .map(|item| match item {
            Node::Value(value) => Ok(value),
            Node::List(items) => Err(ParseArtifactError::Shape {
                name: name.to_owned(),
                expected: 1,
                found: items.len(),
            }),
        })
        .collect()
}

fn read_slider_table(text: &str, slider: Slider) -> Result<SliderTable, ParseArtifactError> {
    let name = masks_name(slider);
    let values = expect_values(read_array(text, &name)?, &name, Square::COUNT)?;

    let mut masks = [Bitboard(0); 64];
    for (sq, value) in Square::all().zip(values) {
        let mask = Bitboard(value);
        if mask != relevant_mask(sq, slider) {
            return Err(ParseArtifactError::MaskMismatch { slider, square: sq });
        }
        masks[sq.index()] = mask;
    }

    let name = attacks_name(slider);
    let width = slider.max_width();
    let rows = expect_list(read_array(text, &name)?, &name, Square::COUNT)?;

    let mut table = Vec::with_capacity(Square::COUNT);
    for (sq, row) in Square::all().zip(rows) {
        let mut values = expect_values(row, &name, width)?;
        let valid = 1 << masks[sq.index()].count();
        if valid > width {
            return Err(ParseArtifactError::Shape {
                name,
                expected: valid,
                found: width,
            });
        }
        if let Some(index) = (valid..width).find(|&i| values[i] != 0) {
            return Err(ParseArtifactError::NonZeroPadding {
                name,
                square: sq,
                index,
            });
        }
        values.truncate(valid);
        table.push(values.into_iter().map(Bitboard).collect());
    }

    Ok(SliderTable::from_parts(slider, masks, table))
}

/// Parses an artifact written by [`emit::write_tables()`](crate::emit::write_tables).
///
/// Masks are checked against the relevant masks, rows must have the declared
/// width, and padding slots must be zero.
pub fn read_tables(text: &str) -> Result<Tables, ParseArtifactError> {
    Ok(Tables::from_tables(BySlider::try_new_with(|slider| {
        read_slider_table(text, slider)
    })?))
}
