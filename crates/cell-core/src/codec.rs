use num_bigint::BigUint;

use crate::{
    CellError, ConstructionError, Coordinate, Profile, Segments, coordinate::Indices, formatter,
};

/// The CELL encoder/decoder for one [`Profile`].
///
/// All operations are pure and run in time linear in the input. A `Codec` is
/// `Copy` and holds nothing but its profile.
///
/// # Examples
///
/// ```
/// use cell_core::{CellError, Codec};
///
/// let codec = Codec::BOUNDED;
/// assert_eq!(codec.decode("a1A")?.indices(), &[0, 0, 0]);
/// assert_eq!(codec.encode(&[4, 3])?, "e4");
/// assert!(!codec.is_valid("h8Hh8"));
/// assert_eq!(codec.validate("a1Aa"), Err(CellError::DimensionOverflow { max: 3 }));
///
/// let codec = Codec::UNBOUNDED;
/// assert_eq!(codec.decode("h8Hh8")?.indices(), &[7, 7, 7, 7, 7]);
/// assert_eq!(codec.dimension_count("h8Hh8"), 5);
/// # Ok::<(), CellError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codec {
    profile: Profile,
}

impl Codec {
    /// Codec for [`Profile::BOUNDED`].
    pub const BOUNDED: Self = Self::new(Profile::BOUNDED);

    /// Codec for [`Profile::UNBOUNDED`].
    pub const UNBOUNDED: Self = Self::new(Profile::UNBOUNDED);

    /// Creates a codec applying the ceilings of `profile`.
    #[must_use]
    pub const fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Returns the profile of this codec.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Returns an iterator over the dimensions of `text`.
    ///
    /// This is the lowest-level view of the decoder; the other decoding
    /// operations are built on it.
    #[must_use]
    pub fn segments<'a>(&self, text: &'a str) -> Segments<'a> {
        Segments::new(text, self.profile)
    }

    /// Decodes a CELL string.
    ///
    /// # Errors
    ///
    /// Returns the first reason `text` is rejected, checked in this order:
    /// [`EmptyInput`], [`TooLong`], [`MustStartLowercase`], then for each
    /// dimension [`DimensionOverflow`], [`UnexpectedCharacter`],
    /// [`LeadingZero`] and [`IndexOverflow`].
    ///
    /// [`EmptyInput`]: CellError::EmptyInput
    /// [`TooLong`]: CellError::TooLong
    /// [`MustStartLowercase`]: CellError::MustStartLowercase
    /// [`DimensionOverflow`]: CellError::DimensionOverflow
    /// [`UnexpectedCharacter`]: CellError::UnexpectedCharacter
    /// [`LeadingZero`]: CellError::LeadingZero
    /// [`IndexOverflow`]: CellError::IndexOverflow
    ///
    /// A [`Coordinate`] holds `u64` indices. Without an index ceiling a valid
    /// string may hold a wider index; it is reported as [`IndexOverflow`] with
    /// `max` set to `u64::MAX`. Use [`Codec::decode_big`] for such strings.
    pub fn decode(&self, text: &str) -> Result<Coordinate, CellError> {
        self.segments(text)
            .map(|segment| {
                let segment = segment?;
                segment.index.ok_or(CellError::IndexOverflow {
                    dimension: segment.dimension,
                    max: u64::MAX,
                })
            })
            .collect::<Result<Indices, _>>()
            .map(Coordinate::from_checked)
            .inspect_err(|err| log::trace!("rejected CELL string {text:?}: {err}"))
    }

    /// Encodes indices into their canonical CELL string.
    ///
    /// Nothing is produced unless every ceiling is met.
    ///
    /// # Errors
    ///
    /// - [`CellError::InvalidConstruction`] if `indices` is empty.
    /// - [`CellError::DimensionOverflow`] if there are too many indices.
    /// - [`CellError::IndexOverflow`] if an index is above the ceiling.
    /// - [`CellError::TooLong`] if the string would exceed the length ceiling.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::{CellError, Codec};
    ///
    /// assert_eq!(Codec::BOUNDED.encode(&[701, 0]), Err(CellError::IndexOverflow { dimension: 1, max: 255 }));
    /// assert_eq!(Codec::UNBOUNDED.encode(&[701, 0])?, "zz1");
    /// assert_eq!(Codec::UNBOUNDED.encode(&[702, 0])?, "aaa1");
    /// # Ok::<(), CellError>(())
    /// ```
    pub fn encode(&self, indices: &[u64]) -> Result<String, CellError> {
        let len = formatter::check_indices(indices, self.profile)
            .map_err(ConstructionError::into_encode_error)
            .inspect_err(|err| log::trace!("cannot encode {indices:?}: {err}"))?;
        let mut buf = String::with_capacity(len);
        formatter::push_cell(&mut buf, indices);
        Ok(buf)
    }

    /// Decodes a CELL string into indices of any magnitude.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`Codec::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::Codec;
    /// use num_bigint::BigUint;
    ///
    /// let indices = Codec::UNBOUNDED.decode_big("a18446744073709551617")?;
    /// assert_eq!(indices, [BigUint::ZERO, BigUint::from(u64::MAX) + 1_u32]);
    /// # Ok::<(), cell_core::CellError>(())
    /// ```
    pub fn decode_big(&self, text: &str) -> Result<Vec<BigUint>, CellError> {
        self.segments(text)
            .map(|segment| segment.map(|s| s.big_index()))
            .collect::<Result<_, _>>()
            .inspect_err(|err| log::trace!("rejected CELL string {text:?}: {err}"))
    }

    /// Encodes indices of any magnitude into their canonical CELL string.
    ///
    /// # Errors
    ///
    /// The same as [`Codec::encode`].
    pub fn encode_big(&self, indices: &[BigUint]) -> Result<String, CellError> {
        self.try_encode_big(indices)
            .inspect_err(|err| log::trace!("cannot encode {indices:?}: {err}"))
    }

    fn try_encode_big(&self, indices: &[BigUint]) -> Result<String, CellError> {
        formatter::check_count(indices.len(), self.profile)
            .map_err(ConstructionError::into_encode_error)?;
        if let Some(max) = self.profile.max_index()
            && let Some(i) = indices.iter().position(|index| *index > BigUint::from(max))
        {
            return Err(CellError::IndexOverflow {
                dimension: i + 1,
                max,
            });
        }
        let mut buf = String::new();
        formatter::push_big_cell(&mut buf, indices);
        // Every numeral is ASCII, so bytes and characters agree.
        if let Some(max) = self.profile.max_length()
            && buf.len() > max
        {
            return Err(CellError::TooLong { len: buf.len(), max });
        }
        Ok(buf)
    }

    /// Creates a [`Coordinate`] from indices checked against this codec's
    /// profile.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidConstruction`] if `indices` violates any
    /// ceiling.
    pub fn coordinate(&self, indices: &[u64]) -> Result<Coordinate, CellError> {
        Coordinate::with_profile(indices, self.profile)
    }

    /// Checks a CELL string, reporting why it is invalid.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`Codec::decode`].
    pub fn validate(&self, text: &str) -> Result<(), CellError> {
        self.segments(text)
            .try_for_each(|segment| segment.map(|_| ()))
            .inspect_err(|err| log::trace!("rejected CELL string {text:?}: {err}"))
    }

    /// Returns `true` if `text` is a valid CELL string.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.segments(text).all(|segment| segment.is_ok())
    }

    /// Returns the number of dimensions of `text`, or 0 if it is invalid.
    ///
    /// The string is fully validated; a prefix that looks well-formed does
    /// not count.
    #[must_use]
    pub fn dimension_count(&self, text: &str) -> usize {
        self.segments(text)
            .try_fold(0, |count, segment| segment.map(|_| count + 1))
            .unwrap_or(0)
    }

    /// Splits a CELL string into its per-dimension numerals.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`Codec::decode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::Codec;
    ///
    /// assert_eq!(Codec::UNBOUNDED.split("h8Hh8")?, ["h", "8", "H", "h", "8"]);
    /// assert_eq!(Codec::UNBOUNDED.split("foobar")?, ["foobar"]);
    /// assert!(Codec::UNBOUNDED.split("invalid!").is_err());
    /// # Ok::<(), cell_core::CellError>(())
    /// ```
    pub fn split<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, CellError> {
        self.segments(text)
            .map(|segment| segment.map(|s| s.text))
            .collect()
    }
}
