//! The decoding state machine.
//!
//! A CELL string is consumed left to right, one dimension at a time. Each
//! dimension is the maximal run of characters of the class expected at its
//! position; the next dimension must start with a character of the next
//! class in the cycle. Input may only end right after a run.
//!
//! ```text
//! coordinate := lower (number upper lower)* (number upper?)?
//! lower      := [a-z]+
//! upper      := [A-Z]+
//! number     := [1-9][0-9]*
//! ```

use std::iter::FusedIterator;

use cell_numeral::NumeralError;
use num_bigint::BigUint;

use crate::{CellError, DimensionClass, Profile};

/// One dimension of a CELL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 1-based dimension number.
    pub dimension: usize,
    /// Class of the dimension.
    pub class: DimensionClass,
    /// The numeral as written in the input.
    pub text: &'a str,
    /// Byte offset of `text` within the input.
    pub offset: usize,
    /// The decoded zero-based index, or `None` if it does not fit in a
    /// `u64`. That can only happen without an index ceiling.
    pub index: Option<u64>,
}

impl Segment<'_> {
    /// Returns the decoded zero-based index at any magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::Codec;
    /// use num_bigint::BigUint;
    ///
    /// let text = format!("a{}", "9".repeat(25));
    /// let second = Codec::UNBOUNDED.segments(&text).nth(1).unwrap()?;
    /// assert_eq!(second.index, None);
    /// assert_eq!(second.big_index().to_string(), "9".repeat(24) + "8");
    /// # Ok::<(), cell_core::CellError>(())
    /// ```
    #[must_use]
    pub fn big_index(&self) -> BigUint {
        match self.index {
            Some(index) => BigUint::from(index),
            // The scanner only yields well-formed numerals.
            None => self.class.decode_big(self.text).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet.
    Start,
    /// A run of the given class has just been closed.
    Closed(DimensionClass),
    Done,
    Rejected,
}

/// Iterator over the dimensions of a CELL string.
///
/// Yields one [`Segment`] per dimension. On the first rejection it yields the
/// error and then stops; it never yields a segment after an error.
///
/// Created by [`Codec::segments`](crate::Codec::segments).
///
/// # Examples
///
/// ```
/// use cell_core::{Codec, DimensionClass};
///
/// let mut segments = Codec::BOUNDED.segments("e4B");
/// let first = segments.next().unwrap()?;
/// assert_eq!((first.text, first.index), ("e", Some(4)));
/// let second = segments.next().unwrap()?;
/// assert_eq!(second.class, DimensionClass::Decimal);
/// assert_eq!(second.index, Some(3));
/// assert_eq!(segments.next().unwrap()?.text, "B");
/// assert!(segments.next().is_none());
/// # Ok::<(), cell_core::CellError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    profile: Profile,
    offset: usize,
    dimensions: usize,
    state: State,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(text: &'a str, profile: Profile) -> Self {
        Self {
            text,
            profile,
            offset: 0,
            dimensions: 0,
            state: State::Start,
        }
    }

    /// Checks that apply to the input as a whole, before any run is consumed.
    fn check_input(&self) -> Result<(), CellError> {
        let Some(first) = self.text.chars().next() else {
            return Err(CellError::EmptyInput);
        };
        if let Some(max) = self.profile.max_length()
            && self.text.chars().nth(max).is_some()
        {
            return Err(CellError::TooLong {
                len: self.text.chars().count(),
                max,
            });
        }
        if !DimensionClass::Lowercase.contains(first) {
            return Err(CellError::MustStartLowercase { found: first });
        }
        Ok(())
    }

    fn step(&mut self) -> Result<Option<Segment<'a>>, CellError> {
        let expected = match self.state {
            State::Start => {
                self.check_input()?;
                DimensionClass::Lowercase
            }
            State::Closed(class) => class.next(),
            State::Done | State::Rejected => return Ok(None),
        };

        let source = self.text;
        let offset = self.offset;
        let rest = &source[offset..];
        let Some(found) = rest.chars().next() else {
            self.state = State::Done;
            return Ok(None);
        };

        if let Some(max) = self.profile.max_dimensions()
            && self.dimensions >= max
        {
            return Err(CellError::DimensionOverflow { max });
        }
        if !expected.contains(found) {
            return Err(CellError::UnexpectedCharacter {
                found,
                offset,
                expected,
            });
        }

        let len = rest.find(|c: char| !expected.contains(c)).unwrap_or(rest.len());
        let text = &rest[..len];
        let dimension = self.dimensions + 1;
        let max_index = self.profile.max_index();

        let index = match expected.decode(text) {
            Ok(index) => Some(index),
            // Wider than `u64`: above any ceiling, but fine without one.
            Err(NumeralError::Overflow) => match max_index {
                Some(max) => return Err(CellError::IndexOverflow { dimension, max }),
                None => None,
            },
            Err(NumeralError::LeadingZero) => return Err(CellError::LeadingZero { offset }),
            Err(NumeralError::InvalidSymbol { found, offset: at }) => {
                return Err(CellError::UnexpectedCharacter {
                    found,
                    offset: offset + at,
                    expected,
                });
            }
            Err(NumeralError::Empty) => {
                return Err(CellError::UnexpectedCharacter {
                    found,
                    offset,
                    expected,
                });
            }
        };
        if let (Some(max), Some(index)) = (max_index, index)
            && index > max
        {
            return Err(CellError::IndexOverflow { dimension, max });
        }

        self.offset += len;
        self.dimensions = dimension;
        self.state = State::Closed(expected);
        Ok(Some(Segment {
            dimension,
            class: expected,
            text,
            offset,
            index,
        }))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, CellError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(segment) => segment.map(Ok),
            Err(err) => {
                self.state = State::Rejected;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, profile: Profile) -> Result<Vec<&str>, CellError> {
        Segments::new(text, profile).map(|s| s.map(|s| s.text)).collect()
    }

    #[test]
    fn test_runs_are_maximal() {
        assert_eq!(texts("foobar", Profile::UNBOUNDED), Ok(vec!["foobar"]));
        assert_eq!(
            texts("aa10AAb", Profile::UNBOUNDED),
            Ok(vec!["aa", "10", "AA", "b"])
        );
        assert_eq!(
            texts("h8Hh8", Profile::UNBOUNDED),
            Ok(vec!["h", "8", "H", "h", "8"])
        );
    }

    #[test]
    fn test_segment_fields() {
        let segments: Vec<_> = Segments::new("iv256IV", Profile::BOUNDED)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            segments[1],
            Segment {
                dimension: 2,
                class: DimensionClass::Decimal,
                text: "256",
                offset: 2,
                index: Some(255),
            }
        );
        assert_eq!(segments[2].offset, 5);
        assert_eq!(segments[2].index, Some(255));
    }

    #[test]
    fn test_start_rejections() {
        fn first(text: &str) -> Option<Result<Segment<'_>, CellError>> {
            Segments::new(text, Profile::BOUNDED).next()
        }

        assert_eq!(first(""), Some(Err(CellError::EmptyInput)));
        assert_eq!(
            first("iv256IVa"),
            Some(Err(CellError::TooLong { len: 8, max: 7 }))
        );
        assert_eq!(
            first("A"),
            Some(Err(CellError::MustStartLowercase { found: 'A' }))
        );
        // The length ceiling counts characters, not bytes.
        assert!(first("a\u{e9}\u{e9}\u{e9}\u{e9}").is_some_and(|r| r.is_ok()));
        assert_eq!(
            first("a\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"),
            Some(Err(CellError::TooLong { len: 8, max: 7 }))
        );
        assert_eq!(
            first(" a1"),
            Some(Err(CellError::MustStartLowercase { found: ' ' }))
        );
        assert_eq!(
            first("\u{0430}"),
            Some(Err(CellError::MustStartLowercase { found: '\u{0430}' }))
        );
    }

    #[test]
    fn test_class_order() {
        assert_eq!(
            texts("aA", Profile::UNBOUNDED),
            Err(CellError::UnexpectedCharacter {
                found: 'A',
                offset: 1,
                expected: DimensionClass::Decimal,
            })
        );
        assert_eq!(
            texts("a1a", Profile::UNBOUNDED),
            Err(CellError::UnexpectedCharacter {
                found: 'a',
                offset: 2,
                expected: DimensionClass::Uppercase,
            })
        );
        assert_eq!(
            texts("a1A1", Profile::UNBOUNDED),
            Err(CellError::UnexpectedCharacter {
                found: '1',
                offset: 3,
                expected: DimensionClass::Lowercase,
            })
        );
        // The dimension ceiling is hit before the class is examined.
        assert_eq!(
            texts("a1A1", Profile::BOUNDED),
            Err(CellError::DimensionOverflow { max: 3 })
        );
        assert_eq!(
            texts("a\u{200b}1", Profile::BOUNDED),
            Err(CellError::UnexpectedCharacter {
                found: '\u{200b}',
                offset: 1,
                expected: DimensionClass::Decimal,
            })
        );
    }

    #[test]
    fn test_leading_zero() {
        for text in ["a0", "a01", "a007"] {
            assert_eq!(
                texts(text, Profile::BOUNDED),
                Err(CellError::LeadingZero { offset: 1 })
            );
        }
        assert_eq!(
            texts("b2Bc0", Profile::UNBOUNDED),
            Err(CellError::LeadingZero { offset: 4 })
        );
    }

    #[test]
    fn test_index_ceiling() {
        assert_eq!(
            texts("a257", Profile::BOUNDED),
            Err(CellError::IndexOverflow {
                dimension: 2,
                max: 255
            })
        );
        assert_eq!(
            texts("iw", Profile::BOUNDED),
            Err(CellError::IndexOverflow {
                dimension: 1,
                max: 255
            })
        );
        assert_eq!(
            texts("a1IW", Profile::BOUNDED),
            Err(CellError::IndexOverflow {
                dimension: 3,
                max: 255
            })
        );
        assert_eq!(
            texts("a18446744073709551617", Profile::UNBOUNDED.with_max_index(Some(u64::MAX))),
            Err(CellError::IndexOverflow {
                dimension: 2,
                max: u64::MAX
            })
        );
    }

    #[test]
    fn test_no_index_ceiling_accepts_any_magnitude() {
        let digits = format!("a{}", "9".repeat(25));
        let letters = "z".repeat(14);
        for text in [digits.as_str(), letters.as_str(), "a18446744073709551617"] {
            assert_eq!(texts(text, Profile::UNBOUNDED).map(|t| t.concat()), Ok(text.to_owned()));
        }

        let segments: Vec<_> = Segments::new(&digits, Profile::UNBOUNDED)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(segments[0].index, Some(0));
        assert_eq!(segments[1].index, None);
        assert_eq!(segments[1].big_index().to_string(), "9".repeat(24) + "8");

        let segment = Segments::new(&letters, Profile::UNBOUNDED)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(segment.index, None);
        assert!(segment.big_index() > BigUint::from(u64::MAX));

        // Magnitude still matters once a ceiling is set.
        assert_eq!(
            texts(&letters, Profile::UNBOUNDED.with_max_index(Some(1000))),
            Err(CellError::IndexOverflow {
                dimension: 1,
                max: 1000
            })
        );
    }

    #[test]
    fn test_fused_after_error() {
        let mut segments = Segments::new("a1!", Profile::BOUNDED);
        assert!(segments.next().unwrap().is_ok());
        assert!(segments.next().unwrap().is_ok());
        assert!(segments.next().unwrap().is_err());
        assert_eq!(segments.next(), None);
        assert_eq!(segments.next(), None);
    }
}
