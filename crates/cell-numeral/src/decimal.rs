//! One-based decimal numerals.
//!
//! Index `0` is written `1`, index `255` is written `256`. A numeral never
//! starts with `0`, so `"0"`, `"01"` and `"007"` are all rejected.

use num_bigint::BigUint;

use crate::NumeralError;

/// Returns the number of digits needed to write `index`.
#[must_use]
pub fn decimal_width(index: u64) -> usize {
    let mut n = u128::from(index) + 1;
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Appends the decimal numeral of `index` to `buf`.
pub fn push_decimal(buf: &mut String, index: u64) {
    // `index + 1` overflows `u64` for the largest index.
    buf.push_str(&(u128::from(index) + 1).to_string());
}

/// Returns the decimal numeral of `index`.
///
/// # Examples
///
/// ```
/// use cell_numeral::decimal::encode_decimal;
///
/// assert_eq!(encode_decimal(0), "1");
/// assert_eq!(encode_decimal(9), "10");
/// assert_eq!(encode_decimal(u64::MAX), "18446744073709551616");
/// ```
#[must_use]
pub fn encode_decimal(index: u64) -> String {
    let mut buf = String::with_capacity(decimal_width(index));
    push_decimal(&mut buf, index);
    buf
}

/// Decodes a run of digits into its zero-based index.
///
/// # Errors
///
/// - [`NumeralError::Empty`] if `text` is empty.
/// - [`NumeralError::LeadingZero`] if `text` starts with `0`, including the
///   lone numeral `"0"`.
/// - [`NumeralError::InvalidSymbol`] if `text` contains a non-digit.
/// - [`NumeralError::Overflow`] if the index does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use cell_numeral::{NumeralError, decimal::decode_decimal};
///
/// assert_eq!(decode_decimal("8"), Ok(7));
/// assert_eq!(decode_decimal("0"), Err(NumeralError::LeadingZero));
/// assert_eq!(decode_decimal("007"), Err(NumeralError::LeadingZero));
/// ```
pub fn decode_decimal(text: &str) -> Result<u64, NumeralError> {
    match text.as_bytes() {
        [] => return Err(NumeralError::Empty),
        [b'0', ..] => return Err(NumeralError::LeadingZero),
        _ => {}
    }
    let mut value: u128 = 0;
    for (offset, found) in text.char_indices() {
        let digit = found
            .to_digit(10)
            .ok_or(NumeralError::InvalidSymbol { found, offset })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or(NumeralError::Overflow)?;
    }
    u64::try_from(value - 1).map_err(|_| NumeralError::Overflow)
}

/// Appends the decimal numeral of an index of any magnitude to `buf`.
pub fn push_decimal_big(buf: &mut String, index: &BigUint) {
    buf.push_str(&(index + 1_u32).to_string());
}

/// Decodes a run of digits into its zero-based index, without an upper
/// bound.
///
/// # Errors
///
/// The same as [`decode_decimal`], except that there is no
/// [`NumeralError::Overflow`].
///
/// # Examples
///
/// ```
/// use cell_numeral::decimal::decode_decimal_big;
/// use num_bigint::BigUint;
///
/// let index = decode_decimal_big("18446744073709551617").unwrap();
/// assert_eq!(index, BigUint::from(u64::MAX) + 1_u32);
/// ```
pub fn decode_decimal_big(text: &str) -> Result<BigUint, NumeralError> {
    match text.as_bytes() {
        [] => return Err(NumeralError::Empty),
        [b'0', ..] => return Err(NumeralError::LeadingZero),
        _ => {}
    }
    let mut value = BigUint::ZERO;
    for (offset, found) in text.char_indices() {
        let digit = found
            .to_digit(10)
            .ok_or(NumeralError::InvalidSymbol { found, offset })?;
        value = value * 10_u32 + digit;
    }
    Ok(value - 1_u32)
}
