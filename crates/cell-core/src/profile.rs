//! Ceilings applied by the codec.

/// Maximum number of dimensions accepted by [`Profile::BOUNDED`].
pub const MAX_DIMENSIONS: usize = 3;

/// Maximum index accepted by [`Profile::BOUNDED`].
pub const MAX_INDEX_VALUE: u64 = 255;

/// Maximum input length accepted by [`Profile::BOUNDED`].
///
/// This is the length of `"iv256IV"`, the widest bounded coordinate.
pub const MAX_STRING_LENGTH: usize = 7;

/// A set of ceilings governing which coordinates are accepted.
///
/// Each ceiling is optional; `None` disables it. Without an index ceiling the
/// grammar alone decides validity, and indices wider than a `u64` are
/// available through [`Codec::decode_big`](crate::Codec::decode_big).
///
/// The bounded profile is the default. It caps the work done on any input at
/// [`MAX_STRING_LENGTH`] characters, which makes it the right choice for
/// untrusted input.
///
/// # Examples
///
/// ```
/// use cell_core::Profile;
///
/// let profile = Profile::default();
/// assert_eq!(profile, Profile::BOUNDED);
/// assert_eq!(profile.max_dimensions(), Some(3));
///
/// // Two-dimensional boards up to 1000x1000.
/// let board = Profile::UNBOUNDED
///     .with_max_dimensions(Some(2))
///     .with_max_index(Some(999));
/// assert_eq!(board.max_length(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    dimensions: Option<usize>,
    index: Option<u64>,
    length: Option<usize>,
}

impl Profile {
    /// At most 3 dimensions, indices 0-255, at most 7 characters.
    pub const BOUNDED: Self = Self::new(
        Some(MAX_DIMENSIONS),
        Some(MAX_INDEX_VALUE),
        Some(MAX_STRING_LENGTH),
    );

    /// No ceilings.
    pub const UNBOUNDED: Self = Self::new(None, None, None);

    /// Creates a profile from explicit ceilings.
    #[must_use]
    pub const fn new(
        max_dimensions: Option<usize>,
        max_index: Option<u64>,
        max_length: Option<usize>,
    ) -> Self {
        Self {
            dimensions: max_dimensions,
            index: max_index,
            length: max_length,
        }
    }

    /// Returns a copy of this profile with a different dimension ceiling.
    #[must_use]
    pub const fn with_max_dimensions(mut self, max: Option<usize>) -> Self {
        self.dimensions = max;
        self
    }

    /// Returns a copy of this profile with a different index ceiling.
    #[must_use]
    pub const fn with_max_index(mut self, max: Option<u64>) -> Self {
        self.index = max;
        self
    }

    /// Returns a copy of this profile with a different length ceiling.
    #[must_use]
    pub const fn with_max_length(mut self, max: Option<usize>) -> Self {
        self.length = max;
        self
    }

    /// Maximum number of dimensions.
    #[must_use]
    pub const fn max_dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    /// Maximum value of a single index.
    #[must_use]
    pub const fn max_index(&self) -> Option<u64> {
        self.index
    }

    /// Maximum length of a CELL string, in characters.
    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        self.length
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::BOUNDED
    }
}
