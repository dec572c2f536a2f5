//! Bijective base-26 letter numerals.
//!
//! Single letters cover indices 0-25, two letters 26-701, three letters
//! 702-18277, and so on. Unlike plain base-26 there is no zero symbol, so
//! `a`, `aa` and `aaa` are distinct values and every run of letters decodes
//! to exactly one index.
//!
//! # Examples
//!
//! ```
//! use cell_numeral::letters::{LetterCase, decode_letters, encode_letters, letters_width};
//!
//! assert_eq!(encode_letters(25, LetterCase::Lower), "z");
//! assert_eq!(encode_letters(702, LetterCase::Lower), "aaa");
//! assert_eq!(letters_width(701), 2);
//! assert_eq!(decode_letters("IV", LetterCase::Upper), Ok(255));
//! ```

use num_bigint::BigUint;

use crate::NumeralError;

/// Number of symbols in each letter alphabet.
pub const RADIX: u64 = 26;

// `u64::MAX` needs 14 letters: the sum of 26^k for k in 1..=13 is below 2^64.
const MAX_WIDTH: usize = 14;

/// Alphabet used by a letter numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// `a`-`z`.
    Lower,
    /// `A`-`Z`.
    Upper,
}

impl LetterCase {
    const fn first(self) -> u8 {
        match self {
            LetterCase::Lower => b'a',
            LetterCase::Upper => b'A',
        }
    }

    /// Returns `true` if `c` belongs to this alphabet.
    ///
    /// Only the 26 ASCII letters of the matching case are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_numeral::LetterCase;
    ///
    /// assert!(LetterCase::Lower.contains('q'));
    /// assert!(!LetterCase::Lower.contains('Q'));
    /// assert!(!LetterCase::Upper.contains('\u{0430}'));
    /// ```
    #[must_use]
    #[inline]
    pub const fn contains(self, c: char) -> bool {
        match self {
            LetterCase::Lower => c.is_ascii_lowercase(),
            LetterCase::Upper => c.is_ascii_uppercase(),
        }
    }

    /// Returns the zero-based position of `c` in this alphabet.
    #[inline]
    fn ordinal(self, c: char) -> Option<u8> {
        if !self.contains(c) {
            return None;
        }
        u8::try_from(c).ok().map(|b| b - self.first())
    }
}

/// Returns the number of letters needed to write `index`.
#[must_use]
pub const fn letters_width(index: u64) -> usize {
    let mut n = index;
    let mut width = 1;
    while n >= RADIX {
        n = n / RADIX - 1;
        width += 1;
    }
    width
}

/// Appends the letter numeral of `index` to `buf`.
pub fn push_letters(buf: &mut String, index: u64, case: LetterCase) {
    let mut symbols = [0_u8; MAX_WIDTH];
    let mut len = 0;
    let mut n = index;
    loop {
        let digit = (n % RADIX) as u8;
        symbols[len] = case.first() + digit;
        len += 1;
        if n < RADIX {
            break;
        }
        n = n / RADIX - 1;
    }
    buf.extend(symbols[..len].iter().rev().copied().map(char::from));
}

/// Returns the letter numeral of `index`.
///
/// # Examples
///
/// ```
/// use cell_numeral::letters::{LetterCase, encode_letters};
///
/// assert_eq!(encode_letters(0, LetterCase::Lower), "a");
/// assert_eq!(encode_letters(27, LetterCase::Lower), "ab");
/// assert_eq!(encode_letters(52, LetterCase::Upper), "BA");
/// ```
#[must_use]
pub fn encode_letters(index: u64, case: LetterCase) -> String {
    let mut buf = String::with_capacity(letters_width(index));
    push_letters(&mut buf, index, case);
    buf
}

/// Decodes a run of letters into its zero-based index.
///
/// # Errors
///
/// - [`NumeralError::Empty`] if `text` is empty.
/// - [`NumeralError::InvalidSymbol`] if `text` contains anything other than
///   letters of `case`.
/// - [`NumeralError::Overflow`] if the index does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use cell_numeral::{NumeralError, letters::{LetterCase, decode_letters}};
///
/// assert_eq!(decode_letters("aa", LetterCase::Lower), Ok(26));
/// assert_eq!(
///     decode_letters("aB", LetterCase::Lower),
///     Err(NumeralError::InvalidSymbol { found: 'B', offset: 1 }),
/// );
/// ```
pub fn decode_letters(text: &str, case: LetterCase) -> Result<u64, NumeralError> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }
    // Accumulates `index + 1`, which exceeds `u64` for the largest index.
    let mut value: u128 = 0;
    for (offset, found) in text.char_indices() {
        let ordinal = case
            .ordinal(found)
            .ok_or(NumeralError::InvalidSymbol { found, offset })?;
        value = value
            .checked_mul(u128::from(RADIX))
            .and_then(|v| v.checked_add(u128::from(ordinal) + 1))
            .ok_or(NumeralError::Overflow)?;
    }
    u64::try_from(value - 1).map_err(|_| NumeralError::Overflow)
}

/// Appends the letter numeral of an index of any magnitude to `buf`.
///
/// # Examples
///
/// ```
/// use cell_numeral::letters::{LetterCase, push_letters_big};
/// use num_bigint::BigUint;
///
/// let mut buf = String::new();
/// push_letters_big(&mut buf, &(BigUint::from(u64::MAX) + 1_u32), LetterCase::Lower);
/// assert_eq!(buf, "gkgwbylwrxtlpq");
/// ```
pub fn push_letters_big(buf: &mut String, index: &BigUint, case: LetterCase) {
    if let Some(small) = to_u64(index) {
        push_letters(buf, small, case);
        return;
    }
    let radix = BigUint::from(RADIX);
    let mut symbols = Vec::new();
    let mut n = index.clone();
    loop {
        let digit = (&n % &radix).to_bytes_le().first().copied().unwrap_or(0);
        symbols.push(case.first() + digit);
        if n < radix {
            break;
        }
        n = n / &radix - 1_u32;
    }
    buf.extend(symbols.iter().rev().copied().map(char::from));
}

/// Decodes a run of letters into its zero-based index, without an upper
/// bound.
///
/// # Errors
///
/// - [`NumeralError::Empty`] if `text` is empty.
/// - [`NumeralError::InvalidSymbol`] if `text` contains anything other than
///   letters of `case`.
///
/// # Examples
///
/// ```
/// use cell_numeral::letters::{LetterCase, decode_letters_big};
/// use num_bigint::BigUint;
///
/// let index = decode_letters_big("zzzzzzzzzzzzzz", LetterCase::Lower).unwrap();
/// assert!(index > BigUint::from(u64::MAX));
/// ```
pub fn decode_letters_big(text: &str, case: LetterCase) -> Result<BigUint, NumeralError> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }
    let mut value = BigUint::ZERO;
    for (offset, found) in text.char_indices() {
        let ordinal = case
            .ordinal(found)
            .ok_or(NumeralError::InvalidSymbol { found, offset })?;
        value = value * RADIX + (u32::from(ordinal) + 1);
    }
    Ok(value - 1_u32)
}

pub(crate) fn to_u64(n: &BigUint) -> Option<u64> {
    match n.to_u64_digits().as_slice() {
        [] => Some(0),
        [low] => Some(*low),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_encode_boundaries() {
        let cases = [
            (0, "a"),
            (4, "e"),
            (25, "z"),
            (26, "aa"),
            (27, "ab"),
            (51, "az"),
            (52, "ba"),
            (255, "iv"),
            (701, "zz"),
            (702, "aaa"),
            (18_277, "zzz"),
            (18_278, "aaaa"),
        ];
        for (index, text) in cases {
            assert_eq!(encode_letters(index, LetterCase::Lower), text);
            assert_eq!(
                encode_letters(index, LetterCase::Upper),
                text.to_ascii_uppercase()
            );
            assert_eq!(decode_letters(text, LetterCase::Lower), Ok(index));
            assert_eq!(
                decode_letters(&text.to_ascii_uppercase(), LetterCase::Upper),
                Ok(index)
            );
        }
    }

    #[test]
    fn test_push_appends() {
        let mut buf = String::from("x");
        push_letters(&mut buf, 26, LetterCase::Upper);
        assert_eq!(buf, "xAA");
    }

    #[test]
    fn test_largest_index() {
        let text = encode_letters(u64::MAX, LetterCase::Lower);
        assert_eq!(text.len(), MAX_WIDTH);
        assert_eq!(letters_width(u64::MAX), MAX_WIDTH);
        assert_eq!(decode_letters(&text, LetterCase::Lower), Ok(u64::MAX));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode_letters("", LetterCase::Lower), Err(NumeralError::Empty));
        assert_eq!(
            decode_letters("A", LetterCase::Lower),
            Err(NumeralError::InvalidSymbol {
                found: 'A',
                offset: 0
            })
        );
        assert_eq!(
            decode_letters("ab1", LetterCase::Lower),
            Err(NumeralError::InvalidSymbol {
                found: '1',
                offset: 2
            })
        );
        assert_eq!(
            decode_letters("\u{0430}", LetterCase::Lower),
            Err(NumeralError::InvalidSymbol {
                found: '\u{0430}',
                offset: 0
            })
        );
        assert_eq!(
            decode_letters("zzzzzzzzzzzzzz", LetterCase::Lower),
            Err(NumeralError::Overflow)
        );
        assert!(
            decode_letters(&"a".repeat(64), LetterCase::Lower).is_err_and(|e| e.is_overflow())
        );
    }

    #[test]
    fn test_big_agrees_with_u64() {
        for index in [0, 25, 26, 701, 702, 18_278, u64::MAX] {
            let text = encode_letters(index, LetterCase::Upper);
            let mut buf = String::new();
            push_letters_big(&mut buf, &BigUint::from(index), LetterCase::Upper);
            assert_eq!(buf, text);
            assert_eq!(
                decode_letters_big(&text, LetterCase::Upper),
                Ok(BigUint::from(index))
            );
        }
    }

    #[test]
    fn test_big_past_u64() {
        let run = "z".repeat(14);
        let index = decode_letters_big(&run, LetterCase::Lower).unwrap();
        assert!(index > BigUint::from(u64::MAX));
        let mut buf = String::new();
        push_letters_big(&mut buf, &index, LetterCase::Lower);
        assert_eq!(buf, run);

        let long = "a".repeat(40);
        let index = decode_letters_big(&long, LetterCase::Lower).unwrap();
        buf.clear();
        push_letters_big(&mut buf, &index, LetterCase::Lower);
        assert_eq!(buf, long);
        assert_eq!(
            decode_letters_big("zZ", LetterCase::Lower),
            Err(NumeralError::InvalidSymbol {
                found: 'Z',
                offset: 1
            })
        );
    }

    proptest! {
        #[test]
        fn test_round_trip(index in any::<u64>()) {
            let lower = encode_letters(index, LetterCase::Lower);
            let upper = encode_letters(index, LetterCase::Upper);
            prop_assert_eq!(lower.len(), letters_width(index));
            prop_assert_eq!(&upper, &lower.to_ascii_uppercase());
            prop_assert_eq!(decode_letters(&lower, LetterCase::Lower), Ok(index));
            prop_assert_eq!(decode_letters(&upper, LetterCase::Upper), Ok(index));
        }

        #[test]
        fn test_width_is_monotonic(a in 0..1_000_000_u64, b in 0..1_000_000_u64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(letters_width(lo) <= letters_width(hi));
        }

        #[test]
        fn test_decode_accepts_every_run(text in "[a-z]{1,13}") {
            let index = decode_letters(&text, LetterCase::Lower).unwrap();
            prop_assert_eq!(encode_letters(index, LetterCase::Lower), text);
        }

        #[test]
        fn test_big_accepts_every_run(text in "[A-Z]{1,40}") {
            let index = decode_letters_big(&text, LetterCase::Upper).unwrap();
            let mut buf = String::new();
            push_letters_big(&mut buf, &index, LetterCase::Upper);
            prop_assert_eq!(buf, text);
        }
    }
}
