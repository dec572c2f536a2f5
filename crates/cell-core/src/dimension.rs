//! Character classes of CELL dimensions.

use cell_numeral::{LetterCase, NumeralError};
use num_bigint::BigUint;

/// The numeral form used by a dimension.
///
/// The class is fully determined by the dimension's 1-based position `n`:
///
/// | `n % 3` | Class                            | Example |
/// |---------|----------------------------------|---------|
/// | 1       | [`Lowercase`](Self::Lowercase)   | `e`     |
/// | 2       | [`Decimal`](Self::Decimal)       | `4`     |
/// | 0       | [`Uppercase`](Self::Uppercase)   | `B`     |
///
/// Both parsing and formatting go through [`DimensionClass::for_dimension`],
/// so the two directions cannot disagree.
///
/// # Examples
///
/// ```
/// use cell_core::DimensionClass;
///
/// assert_eq!(DimensionClass::for_dimension(1), DimensionClass::Lowercase);
/// assert_eq!(DimensionClass::for_dimension(5), DimensionClass::Decimal);
/// assert_eq!(DimensionClass::for_dimension(6), DimensionClass::Uppercase);
/// assert_eq!(DimensionClass::Uppercase.next(), DimensionClass::Lowercase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DimensionClass {
    /// Bijective base-26 over `a`-`z`.
    #[display("lowercase letter")]
    Lowercase,
    /// One-based decimal digits.
    #[display("digit")]
    Decimal,
    /// Bijective base-26 over `A`-`Z`.
    #[display("uppercase letter")]
    Uppercase,
}

impl DimensionClass {
    /// Returns the class of the 1-based `dimension`.
    #[must_use]
    pub const fn for_dimension(dimension: usize) -> Self {
        match dimension % 3 {
            1 => Self::Lowercase,
            2 => Self::Decimal,
            _ => Self::Uppercase,
        }
    }

    /// Returns the class of the dimension that follows one of this class.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Lowercase => Self::Decimal,
            Self::Decimal => Self::Uppercase,
            Self::Uppercase => Self::Lowercase,
        }
    }

    /// Returns the classes of dimensions 1, 2, 3, ... in order.
    pub fn cycle() -> impl Iterator<Item = Self> {
        (1..).map(Self::for_dimension)
    }

    /// Returns `true` if `c` can appear in a numeral of this class.
    #[must_use]
    #[inline]
    pub const fn contains(self, c: char) -> bool {
        match self {
            Self::Lowercase => LetterCase::Lower.contains(c),
            Self::Decimal => c.is_ascii_digit(),
            Self::Uppercase => LetterCase::Upper.contains(c),
        }
    }

    /// Decodes a numeral of this class into its zero-based index.
    ///
    /// # Errors
    ///
    /// Returns the [`NumeralError`] reported by the underlying numeral codec.
    pub fn decode(self, text: &str) -> Result<u64, NumeralError> {
        match self {
            Self::Lowercase => cell_numeral::decode_letters(text, LetterCase::Lower),
            Self::Decimal => cell_numeral::decode_decimal(text),
            Self::Uppercase => cell_numeral::decode_letters(text, LetterCase::Upper),
        }
    }

    /// Appends the numeral of `index` in this class to `buf`.
    pub fn push(self, buf: &mut String, index: u64) {
        match self {
            Self::Lowercase => cell_numeral::push_letters(buf, index, LetterCase::Lower),
            Self::Decimal => cell_numeral::push_decimal(buf, index),
            Self::Uppercase => cell_numeral::push_letters(buf, index, LetterCase::Upper),
        }
    }

    /// Decodes a numeral of this class into an index of any magnitude.
    ///
    /// # Errors
    ///
    /// Returns the [`NumeralError`] reported by the underlying numeral codec.
    pub fn decode_big(self, text: &str) -> Result<BigUint, NumeralError> {
        match self {
            Self::Lowercase => cell_numeral::decode_letters_big(text, LetterCase::Lower),
            Self::Decimal => cell_numeral::decode_decimal_big(text),
            Self::Uppercase => cell_numeral::decode_letters_big(text, LetterCase::Upper),
        }
    }

    /// Appends the numeral of an index of any magnitude in this class to
    /// `buf`.
    pub fn push_big(self, buf: &mut String, index: &BigUint) {
        match self {
            Self::Lowercase => cell_numeral::push_letters_big(buf, index, LetterCase::Lower),
            Self::Decimal => cell_numeral::push_decimal_big(buf, index),
            Self::Uppercase => cell_numeral::push_letters_big(buf, index, LetterCase::Upper),
        }
    }

    /// Returns the length of the numeral of `index` in this class.
    #[must_use]
    pub fn width(self, index: u64) -> usize {
        match self {
            Self::Lowercase | Self::Uppercase => cell_numeral::letters_width(index),
            Self::Decimal => cell_numeral::decimal_width(index),
        }
    }
}
