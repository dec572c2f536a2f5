//! Encoder and decoder for CELL coordinates.
//!
//! CELL addresses a cell on a multi-dimensional board with a short ASCII
//! string. Dimensions cycle through three numeral forms:
//!
//! | Dimension     | Form                         | Index 0 | Index 26 |
//! |---------------|------------------------------|---------|----------|
//! | 1st, 4th, ... | lowercase letters            | `a`     | `aa`     |
//! | 2nd, 5th, ... | one-based decimal            | `1`     | `27`     |
//! | 3rd, 6th, ... | uppercase letters            | `A`     | `AA`     |
//!
//! so the chess square e4 is `[4, 3]` and `a1A` is the corner of a 3D board.
//!
//! # Overview
//!
//! - [`Codec`]: decode, encode and validate under one [`Profile`].
//!   [`Codec::decode_big`] and [`Codec::encode_big`] handle indices wider
//!   than a `u64`.
//! - [`Profile`]: ceilings on dimensions, index values and input length.
//!   [`Profile::BOUNDED`] (3 dimensions, indices 0-255, 7 characters) is
//!   the default; [`Profile::UNBOUNDED`] must be chosen explicitly.
//! - [`Coordinate`]: an immutable, hashable decoded coordinate.
//! - [`Segments`]: the decoding state machine, one item per dimension.
//! - [`CellError`]: why a string or index sequence was rejected.
//!
//! The free functions in this crate use the bounded profile.
//!
//! # Examples
//!
//! ```
//! use cell_core::{CellError, Codec};
//!
//! assert_eq!(cell_core::decode("e4")?.indices(), &[4, 3]);
//! assert_eq!(cell_core::encode(&[0, 0, 0])?, "a1A");
//! assert!(!cell_core::is_valid("a0"));
//! assert_eq!(cell_core::validate(""), Err(CellError::EmptyInput));
//!
//! // Larger boards need an explicit opt-in.
//! assert!(cell_core::decode("h8Hh8").is_err());
//! assert_eq!(Codec::UNBOUNDED.decode("h8Hh8")?.dimensions(), 5);
//! # Ok::<(), CellError>(())
//! ```

pub use self::{
    codec::Codec,
    coordinate::Coordinate,
    dimension::DimensionClass,
    error::{CellError, ConstructionError},
    profile::{MAX_DIMENSIONS, MAX_INDEX_VALUE, MAX_STRING_LENGTH, Profile},
    segments::{Segment, Segments},
};

mod codec;
mod coordinate;
mod dimension;
mod error;
mod formatter;
mod profile;
mod segments;

/// Decodes a CELL string under the bounded profile.
///
/// # Errors
///
/// See [`Codec::decode`].
pub fn decode(text: &str) -> Result<Coordinate, CellError> {
    Codec::BOUNDED.decode(text)
}

/// Encodes indices under the bounded profile.
///
/// # Errors
///
/// See [`Codec::encode`].
pub fn encode(indices: &[u64]) -> Result<String, CellError> {
    Codec::BOUNDED.encode(indices)
}

/// Checks a CELL string under the bounded profile.
///
/// # Errors
///
/// See [`Codec::validate`].
pub fn validate(text: &str) -> Result<(), CellError> {
    Codec::BOUNDED.validate(text)
}

/// Returns `true` if `text` is valid under the bounded profile.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    Codec::BOUNDED.is_valid(text)
}

/// Returns the number of dimensions of `text` under the bounded profile, or
/// 0 if it is invalid.
#[must_use]
pub fn dimension_count(text: &str) -> usize {
    Codec::BOUNDED.dimension_count(text)
}

/// Splits a CELL string into its per-dimension numerals under the bounded
/// profile.
///
/// # Errors
///
/// See [`Codec::split`].
pub fn split(text: &str) -> Result<Vec<&str>, CellError> {
    Codec::BOUNDED.split(text)
}
