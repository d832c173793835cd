//! Normalization shift count.

/// Returns how many bits `val` can be shifted left without overflowing `i32`.
///
/// The value is shifted right arithmetically until only sign bits remain (-1 for
/// negative values, 0 otherwise); the result is 31 minus the number of shifts. Both 0
/// and -1 give 31, `i32::MIN` gives 0.
#[inline]
pub fn norm_int32(mut val: i32) -> i32 {
    let mut c = 0;

    while val != -1 && val != 0 {
        val >>= 1;
        c += 1;
    }

    31 - c
}
