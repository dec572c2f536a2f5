//! The encoding direction: index sequence to CELL string.
//!
//! Formatting is a fold over the indices, each written in the class of its
//! position. All ceilings are checked by [`check_indices`] before anything
//! is written.

use num_bigint::BigUint;

use crate::{ConstructionError, DimensionClass, Profile};

/// Checks `indices` against the ceilings of `profile`.
///
/// Returns the length of the formatted coordinate on success.
pub(crate) fn check_indices(
    indices: &[u64],
    profile: Profile,
) -> Result<usize, ConstructionError> {
    check_count(indices.len(), profile)?;
    if let Some(max) = profile.max_index()
        && let Some((i, &index)) = indices.iter().enumerate().find(|&(_, &index)| index > max)
    {
        return Err(ConstructionError::IndexOutOfRange {
            dimension: i + 1,
            index,
            max,
        });
    }
    let len = formatted_len(indices);
    if let Some(max) = profile.max_length()
        && len > max
    {
        return Err(ConstructionError::TooLong { len, max });
    }
    Ok(len)
}

/// Checks the number of indices against the dimension ceiling of `profile`.
pub(crate) fn check_count(count: usize, profile: Profile) -> Result<(), ConstructionError> {
    if count == 0 {
        return Err(ConstructionError::NoIndices);
    }
    if let Some(max) = profile.max_dimensions()
        && count > max
    {
        return Err(ConstructionError::TooManyDimensions { count, max });
    }
    Ok(())
}

/// Returns the length of the CELL string of `indices`.
pub(crate) fn formatted_len(indices: &[u64]) -> usize {
    DimensionClass::cycle()
        .zip(indices)
        .map(|(class, &index)| class.width(index))
        .sum()
}

/// Appends the CELL string of `indices` to `buf`.
pub(crate) fn push_cell(buf: &mut String, indices: &[u64]) {
    for (class, &index) in DimensionClass::cycle().zip(indices) {
        class.push(buf, index);
    }
}

/// Appends the CELL string of indices of any magnitude to `buf`.
pub(crate) fn push_big_cell(buf: &mut String, indices: &[BigUint]) {
    for (class, index) in DimensionClass::cycle().zip(indices) {
        class.push_big(buf, index);
    }
}
