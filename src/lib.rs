//! Precomputed attack tables for sliding chess pieces.
//!
//! For every square and every arrangement of blockers on the squares that
//! matter, the tables hold the squares a rook or bishop attacks. Queens use
//! the union of both. Tables are indexed directly by an occupancy index,
//! without magic multiplication.
//!
//! The pipeline runs in five steps:
//!
//! 1. [`mask::relevant_mask()`] selects the squares whose occupancy can
//!    change the attacks (rays without their final square).
//! 2. [`occupancy::occupancy_from_index()`] maps an index onto a subset of
//!    the mask, numbering mask squares in ascending order.
//! 3. [`attacks::sliding_attacks()`] casts the rays for one subset.
//! 4. [`SliderTable::build()`] collects the results for every square.
//! 5. [`emit::write_tables()`] renders constant data.
//!
//! # Examples
//!
//! Build the tables and look up attacks:
//!
//! ```
//! use slidetab::{square, Bitboard, Tables};
//!
//! let tables = Tables::build()?;
//!
//! let occupied = Bitboard(0).with(square::D6).with(square::F4);
//! let attacks = tables.queen_attacks(square::D4, occupied);
//! assert!(attacks.contains(square::D6));
//! assert!(!attacks.contains(square::D7));
//! assert!(attacks.contains(square::H8));
//! # Ok::<_, slidetab::GenerateError>(())
//! ```
//!
//! Write the artifact:
//!
//! ```no_run
//! use slidetab::generator::{self, Config};
//!
//! let report = generator::generate(&Config::default())?;
//! println!("wrote {} bytes to {}", report.bytes, report.output.display());
//! # Ok::<_, slidetab::GenerateError>(())
//! ```
//!
//! # Index contract
//!
//! Consumers of the emitted tables must compute the occupancy index exactly
//! like [`occupancy::index_from_occupancy()`]: bit `k` of the index is the
//! occupancy of the `k`-th square of the mask, in ascending square order.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Square`], [`Bitboard`] and [`Slider`].

#![doc(html_root_url = "https://docs.rs/slidetab/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod errors;
mod slider;
mod table;

pub mod attacks;
pub mod bitboard;
pub mod emit;
pub mod generator;
pub mod mask;
pub mod occupancy;
pub mod parse;
pub mod square;

pub use bitboard::Bitboard;
pub use emit::{Format, ParseFormatError};
pub use errors::{GenerateError, GenerateResult, ParseArtifactError};
pub use slider::{BySlider, ParseSliderError, Slider};
pub use square::{ParseSquareError, Square};
pub use table::{SliderTable, Tables};
