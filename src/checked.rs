//! Validating wrappers around the core routines.
//!
//! The core routines leave argument validation to the caller. The functions in this
//! module check the preconditions first and report a violation as [`NumbersError`]
//! instead of panicking, then delegate to the unchecked routine. Rejected arguments are
//! logged at warning level.

use crate::frame::{ceil_divide, frame_align};
use crate::gcd::gcd_unsigned;
#[cfg(feature = "vector-find")]
use crate::vector::{find_equal_int16, find_max_abs_int32, find_min_int16};

/// Error returned by the checked routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumbersError {
    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An argument that must be non-zero was zero.
    #[error("argument `{0}` must be non-zero")]
    ZeroArgument(&'static str),

    /// A vector that must contain at least one element was empty.
    #[error("input vector is empty")]
    EmptyInput,

    /// The result does not fit the return type.
    #[error("result overflows the return type")]
    Overflow,

    /// The output buffer cannot hold every result.
    #[error("output buffer too small: {needed} entries needed, capacity is {capacity}")]
    OutputTooSmall {
        /// Number of entries that would be written.
        needed: usize,
        /// Length of the supplied buffer.
        capacity: usize,
    },
}

/// Checked [`frame_align`]. Rejects zero arguments and results that do not fit `u32`.
pub fn checked_frame_align(
    byte_align: u32,
    frame_align_req: u32,
    frame_size: u32,
) -> Result<u32, NumbersError> {
    for (name, value) in [
        ("byte_align", byte_align),
        ("frame_align_req", frame_align_req),
        ("frame_size", frame_size),
    ] {
        if value == 0 {
            log::warn!("frame_align: {name} is zero");
            return Err(NumbersError::ZeroArgument(name));
        }
    }

    let frame_num = byte_align / gcd_unsigned(byte_align, frame_size);
    let lcm = (frame_num as u64) * (frame_align_req as u64)
        / gcd_unsigned(frame_num, frame_align_req) as u64;

    if lcm > u32::MAX as u64 {
        log::warn!(
            "frame_align({byte_align}, {frame_align_req}, {frame_size}) overflows: {lcm}"
        );
        return Err(NumbersError::Overflow);
    }

    Ok(frame_align(byte_align, frame_align_req, frame_size))
}

/// Checked [`ceil_divide`]. Rejects a zero divisor and `i32::MIN / -1`.
pub fn checked_ceil_divide(a: i32, b: i32) -> Result<i32, NumbersError> {
    if b == 0 {
        log::warn!("ceil_divide: {a} / 0");
        return Err(NumbersError::DivisionByZero);
    }

    if a == i32::MIN && b == -1 {
        log::warn!("ceil_divide: {a} / {b} overflows");
        return Err(NumbersError::Overflow);
    }

    Ok(ceil_divide(a, b))
}

/// Checked [`find_equal_int16`]. Fails without writing anything if `out_idx` is too
/// small for the requested matches.
#[cfg(feature = "vector-find")]
pub fn checked_find_equal_int16(
    out_idx: &mut [usize],
    vec: &[i16],
    n: i16,
    max_results: i32,
) -> Result<usize, NumbersError> {
    let matches = vec.iter().filter(|&&value| value == n).count();
    let needed = if max_results > 0 {
        matches.min(max_results as usize)
    } else {
        matches
    };

    if needed > out_idx.len() {
        log::warn!(
            "find_equal_int16: {needed} matches for {n}, buffer holds {}",
            out_idx.len()
        );
        return Err(NumbersError::OutputTooSmall {
            needed,
            capacity: out_idx.len(),
        });
    }

    Ok(find_equal_int16(out_idx, vec, n, max_results))
}

/// Checked [`find_min_int16`]. Rejects an empty vector.
#[cfg(feature = "vector-find")]
pub fn checked_find_min_int16(vec: &[i16]) -> Result<i16, NumbersError> {
    if vec.is_empty() {
        log::warn!("find_min_int16: empty input");
        return Err(NumbersError::EmptyInput);
    }

    Ok(find_min_int16(vec))
}

/// Checked [`find_max_abs_int32`]. Rejects an empty vector.
#[cfg(feature = "vector-find")]
pub fn checked_find_max_abs_int32(vec: &[i32]) -> Result<i32, NumbersError> {
    if vec.is_empty() {
        log::warn!("find_max_abs_int32: empty input");
        return Err(NumbersError::EmptyInput);
    }

    Ok(find_max_abs_int32(vec))
}
