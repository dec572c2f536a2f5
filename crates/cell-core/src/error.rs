use crate::DimensionClass;

/// Errors that can occur when decoding or encoding a CELL coordinate.
///
/// Every rejection carries a machine-distinguishable kind; the [`Display`]
/// output is the human-readable reason.
///
/// [`Display`]: std::fmt::Display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum CellError {
    /// The input string is empty.
    #[display("empty input")]
    EmptyInput,
    /// The input is longer than the profile allows.
    #[display("input exceeds {max} characters")]
    TooLong {
        /// Length of the input (or of the encoded output), in characters.
        len: usize,
        /// Length ceiling of the profile.
        max: usize,
    },
    /// The first character is not a lowercase ASCII letter.
    #[display("must start with lowercase letter")]
    MustStartLowercase {
        /// The first character of the input.
        found: char,
    },
    /// A character does not belong to the class expected at its position.
    #[display("unexpected character {found:?} at offset {offset}, expected {expected}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of `found` within the input.
        offset: usize,
        /// The class a new dimension must start with at this position.
        expected: DimensionClass,
    },
    /// A decimal numeral starts with `0`.
    #[display("leading zero")]
    LeadingZero {
        /// Byte offset of the numeral within the input.
        offset: usize,
    },
    /// The coordinate has more dimensions than the profile allows.
    #[display("exceeds {max} dimensions")]
    DimensionOverflow {
        /// Dimension ceiling of the profile.
        max: usize,
    },
    /// An index is larger than the profile allows.
    #[display("index exceeds {max}")]
    IndexOverflow {
        /// 1-based dimension holding the index.
        dimension: usize,
        /// Index ceiling of the profile, or `u64::MAX` without one.
        max: u64,
    },
    /// A [`Coordinate`](crate::Coordinate) could not be built from indices.
    #[display("{_0}")]
    InvalidConstruction(#[error(source)] ConstructionError),
}

impl From<ConstructionError> for CellError {
    fn from(err: ConstructionError) -> Self {
        Self::InvalidConstruction(err)
    }
}

/// Reasons an index sequence is rejected under a profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ConstructionError {
    /// The sequence is empty.
    #[display("at least one index required")]
    NoIndices,
    /// The sequence is longer than the dimension ceiling.
    #[display("exceeds {max} dimensions")]
    TooManyDimensions {
        /// Number of indices supplied.
        count: usize,
        /// Dimension ceiling of the profile.
        max: usize,
    },
    /// An index is larger than the index ceiling.
    #[display("index exceeds {max}")]
    IndexOutOfRange {
        /// 1-based dimension holding the index.
        dimension: usize,
        /// The offending index.
        index: u64,
        /// Index ceiling of the profile.
        max: u64,
    },
    /// The formatted coordinate would be longer than the length ceiling.
    #[display("formatted coordinate exceeds {max} characters")]
    TooLong {
        /// Length of the formatted coordinate, in characters.
        len: usize,
        /// Length ceiling of the profile.
        max: usize,
    },
}

impl ConstructionError {
    /// Converts a rejection of indices passed to an encoder into the error
    /// kind the decoder reports for the same condition.
    pub(crate) fn into_encode_error(self) -> CellError {
        match self {
            Self::NoIndices => CellError::InvalidConstruction(self),
            Self::TooManyDimensions { max, .. } => CellError::DimensionOverflow { max },
            Self::IndexOutOfRange { dimension, max, .. } => {
                CellError::IndexOverflow { dimension, max }
            }
            Self::TooLong { len, max } => CellError::TooLong { len, max },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CellError::EmptyInput.to_string(), "empty input");
        assert_eq!(
            CellError::TooLong { len: 8, max: 7 }.to_string(),
            "input exceeds 7 characters"
        );
        assert_eq!(
            CellError::MustStartLowercase { found: 'A' }.to_string(),
            "must start with lowercase letter"
        );
        assert_eq!(
            CellError::UnexpectedCharacter {
                found: 'A',
                offset: 1,
                expected: DimensionClass::Decimal,
            }
            .to_string(),
            "unexpected character 'A' at offset 1, expected digit"
        );
        assert_eq!(CellError::LeadingZero { offset: 1 }.to_string(), "leading zero");
        assert_eq!(
            CellError::DimensionOverflow { max: 3 }.to_string(),
            "exceeds 3 dimensions"
        );
        assert_eq!(
            CellError::IndexOverflow {
                dimension: 2,
                max: 255
            }
            .to_string(),
            "index exceeds 255"
        );
        assert_eq!(
            CellError::from(ConstructionError::NoIndices).to_string(),
            "at least one index required"
        );
    }

    #[test]
    fn test_construction_error_is_source() {
        let err = CellError::from(ConstructionError::TooManyDimensions { count: 4, max: 3 });
        assert!(err.is_invalid_construction());
        assert!(err.source().is_some());
        assert!(CellError::EmptyInput.source().is_none());
    }

    #[test]
    fn test_into_encode_error() {
        assert_eq!(
            ConstructionError::TooManyDimensions { count: 4, max: 3 }.into_encode_error(),
            CellError::DimensionOverflow { max: 3 }
        );
        assert_eq!(
            ConstructionError::IndexOutOfRange {
                dimension: 1,
                index: 256,
                max: 255
            }
            .into_encode_error(),
            CellError::IndexOverflow {
                dimension: 1,
                max: 255
            }
        );
        assert_eq!(
            ConstructionError::NoIndices.into_encode_error(),
            CellError::InvalidConstruction(ConstructionError::NoIndices)
        );
    }
}
