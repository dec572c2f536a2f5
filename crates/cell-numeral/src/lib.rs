//! Per-dimension numerals of the CELL coordinate notation.
//!
//! Every dimension of a CELL coordinate is written in one of three numeral
//! forms, selected by the dimension's position:
//!
//! - [`letters`] with [`LetterCase::Lower`]: `a`, `b`, ..., `z`, `aa`, `ab`, ...
//! - [`decimal`]: `1`, `2`, ..., `9`, `10`, ... (one-based)
//! - [`letters`] with [`LetterCase::Upper`]: `A`, `B`, ..., `Z`, `AA`, ...
//!
//! All three map a zero-based `u64` index to exactly one string and back.
//! The `_big` variants do the same for [`BigUint`](num_bigint::BigUint)
//! indices of any magnitude.
//! The letter forms use bijective base-26 (spreadsheet column numbering), so
//! there is no symbol for zero and no two strings share a value.
//!
//! # Examples
//!
//! ```
//! use cell_numeral::{LetterCase, decode_decimal, decode_letters, encode_decimal, encode_letters};
//!
//! assert_eq!(encode_letters(0, LetterCase::Lower), "a");
//! assert_eq!(encode_letters(26, LetterCase::Upper), "AA");
//! assert_eq!(decode_letters("zz", LetterCase::Lower), Ok(701));
//!
//! assert_eq!(encode_decimal(0), "1");
//! assert_eq!(decode_decimal("256"), Ok(255));
//! assert!(decode_decimal("01").is_err());
//! ```

pub mod decimal;
mod error;
pub mod letters;

pub use self::{
    decimal::{
        decimal_width, decode_decimal, decode_decimal_big, encode_decimal, push_decimal,
        push_decimal_big,
    },
    error::NumeralError,
    letters::{
        LetterCase, RADIX, decode_letters, decode_letters_big, encode_letters, letters_width,
        push_letters, push_letters_big,
    },
};
