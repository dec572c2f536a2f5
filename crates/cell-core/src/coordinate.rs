use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use tinyvec::TinyVec;

use crate::{CellError, Codec, MAX_DIMENSIONS, Profile, formatter};

/// Inline storage for the indices of a coordinate.
pub(crate) type Indices = TinyVec<[u64; MAX_DIMENSIONS]>;

/// A parsed CELL coordinate.
///
/// Holds one zero-based index per dimension, dimension 1 first. A coordinate
/// is immutable and always has at least one dimension. It can only be
/// obtained by decoding a CELL string or from indices checked against a
/// [`Profile`].
///
/// Equality, ordering and hashing all follow the index sequence, so
/// coordinates can be used as set elements and map keys. [`Display`] writes
/// the canonical CELL string.
///
/// # Examples
///
/// ```
/// use cell_core::Coordinate;
///
/// let coord: Coordinate = "e4".parse()?;
/// assert_eq!(coord.indices(), &[4, 3]);
/// assert_eq!(coord.dimensions(), 2);
/// assert_eq!(coord.to_string(), "e4");
/// assert_eq!(format!("{coord:?}"), "Coordinate(4, 3)");
///
/// let coord = Coordinate::new(&[0, 0, 0])?;
/// assert_eq!(coord.to_string(), "a1A");
/// # Ok::<(), cell_core::CellError>(())
/// ```
#[derive(Clone)]
pub struct Coordinate {
    indices: Indices,
}

impl Coordinate {
    /// Creates a coordinate from indices under the bounded profile.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidConstruction`] if `indices` is empty, has
    /// more than 3 elements, or contains an index above 255.
    pub fn new(indices: &[u64]) -> Result<Self, CellError> {
        Self::with_profile(indices, Profile::BOUNDED)
    }

    /// Creates a coordinate from indices under `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidConstruction`] if `indices` violates any
    /// ceiling of `profile`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::{CellError, ConstructionError, Coordinate, Profile};
    ///
    /// let coord = Coordinate::with_profile(&[7, 7, 7, 7, 7], Profile::UNBOUNDED)?;
    /// assert_eq!(coord.to_string(), "h8Hh8");
    ///
    /// assert_eq!(
    ///     Coordinate::with_profile(&[], Profile::UNBOUNDED),
    ///     Err(CellError::InvalidConstruction(ConstructionError::NoIndices)),
    /// );
    /// # Ok::<(), CellError>(())
    /// ```
    pub fn with_profile(indices: &[u64], profile: Profile) -> Result<Self, CellError> {
        formatter::check_indices(indices, profile)?;
        Ok(Self::from_checked(indices.iter().copied().collect()))
    }

    /// Wraps indices that have already been checked against a profile.
    pub(crate) fn from_checked(indices: Indices) -> Self {
        debug_assert!(!indices.is_empty());
        Self { indices }
    }

    /// Parses a CELL string under the bounded profile.
    ///
    /// # Errors
    ///
    /// Returns the reason the string was rejected; see [`Codec::decode`].
    pub fn parse(text: &str) -> Result<Self, CellError> {
        Codec::BOUNDED.decode(text)
    }

    /// Returns the indices, dimension 1 first.
    #[must_use]
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.indices.len()
    }

    /// Returns the index of the 1-based `dimension`, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use cell_core::Coordinate;
    ///
    /// let coord = Coordinate::parse("c3B")?;
    /// assert_eq!(coord.get(1), Some(2));
    /// assert_eq!(coord.get(3), Some(1));
    /// assert_eq!(coord.get(0), None);
    /// assert_eq!(coord.get(4), None);
    /// # Ok::<(), cell_core::CellError>(())
    /// ```
    #[must_use]
    pub fn get(&self, dimension: usize) -> Option<u64> {
        let i = dimension.checked_sub(1)?;
        self.indices.get(i).copied()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(formatter::formatted_len(&self.indices));
        formatter::push_cell(&mut buf, &self.indices);
        f.write_str(&buf)
    }
}

impl Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coordinate");
        for index in self.indices() {
            tuple.field(index);
        }
        tuple.finish()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.indices() == other.indices()
    }
}

impl Eq for Coordinate {}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.indices().cmp(other.indices())
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.indices().hash(state);
    }
}

impl FromStr for Coordinate {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u64]> for Coordinate {
    type Error = CellError;

    fn try_from(indices: &[u64]) -> Result<Self, Self::Error> {
        Self::new(indices)
    }
}

impl AsRef<[u64]> for Coordinate {
    fn as_ref(&self) -> &[u64] {
        self.indices()
    }
}

impl From<Coordinate> for Vec<u64> {
    fn from(coord: Coordinate) -> Self {
        coord.indices.to_vec()
    }
}
