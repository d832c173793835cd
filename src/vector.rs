//! Fixed-point vector search.
//!
//! Single pass, read-only scans over sample buffers. None of these routines allocate.

use crate::sat::sat_int32;

/// Searches `vec` for elements equal to `n` and writes their indices to `out_idx` in
/// ascending order. Returns the number of matches written.
///
/// The scan stops once `max_results` matches were found. A `max_results` of 0 or less
/// (or at least `vec.len()`) collects every match; 1 returns only the first one.
///
/// `out_idx` must hold every match that can be written, otherwise this panics.
pub fn find_equal_int16(out_idx: &mut [usize], vec: &[i16], n: i16, max_results: i32) -> usize {
    let mut nresults = 0;

    for (i, &value) in vec.iter().enumerate() {
        if value == n {
            out_idx[nresults] = i;
            nresults += 1;
            if max_results > 0 && nresults == max_results as usize {
                break;
            }
        }
    }

    nresults
}

/// Returns the smallest value in `vec`.
///
/// `vec` must not be empty, otherwise this panics.
#[inline]
pub fn find_min_int16(vec: &[i16]) -> i16 {
    let mut min = vec[0];

    for &value in &vec[1..] {
        if value < min {
            min = value;
        }
    }

    min
}

/// Returns the largest absolute value in `vec`.
///
/// The magnitude is tracked in 64 bits and saturated on return, so `i32::MIN` yields
/// `i32::MAX`.
///
/// `vec` must not be empty, otherwise this panics.
#[inline]
pub fn find_max_abs_int32(vec: &[i32]) -> i32 {
    let mut amax = (vec[0] as i64).abs();

    for &value in &vec[1..] {
        amax = amax.max((value as i64).abs());
    }

    sat_int32(amax)
}
