//! Frame and buffer alignment.
//!
//! Helpers used when sizing audio buffers: a frame count that satisfies both a byte
//! alignment and a frame alignment, rounding division and round-to-multiple.

use num_traits::{PrimInt, Unsigned};

use crate::gcd::gcd_unsigned;

/// Returns the smallest frame count that meets both the `byte_align` requirement and
/// the `frame_align_req` requirement for frames of `frame_size` bytes.
///
/// The result is the least common multiple of `frame_align_req` and the smallest
/// frame count whose byte size is a multiple of `byte_align`.
///
/// Arguments are not validated. A zero `frame_size` or `frame_align_req` still gives a
/// defined result (`frame_align(4, 2, 0)` is 2, `frame_align(4, 0, 3)` is 0). Only a zero
/// `byte_align` combined with a second zero argument divides by zero and panics. The
/// multiplication wraps if the true result does not fit `u32`.
#[inline]
pub fn frame_align(byte_align: u32, frame_align_req: u32, frame_size: u32) -> u32 {
    let frame_num = byte_align / gcd_unsigned(byte_align, frame_size);

    // `frame_num` is an exact multiple of the gcd, so dividing first loses nothing.
    (frame_num / gcd_unsigned(frame_num, frame_align_req)).wrapping_mul(frame_align_req)
}

/// Divides `a` by `b`, rounding towards positive infinity.
///
/// Panics if `b` is zero.
#[inline]
pub fn ceil_divide(a: i32, b: i32) -> i32 {
    let c = a.wrapping_div(b);

    // Truncation already rounded up for quotients with opposite signs.
    if (a ^ b) >= 0 && c.wrapping_mul(b) != a {
        c + 1
    } else {
        c
    }
}

/// Rounds `value` up to the next multiple of `alignment`.
///
/// Panics if `alignment` is zero.
#[inline]
pub fn align_up<T: PrimInt + Unsigned>(value: T, alignment: T) -> T {
    let rem = value % alignment;
    if rem.is_zero() {
        value
    } else {
        value + (alignment - rem)
    }
}

/// Rounds `value` down to the previous multiple of `alignment`.
///
/// Panics if `alignment` is zero.
#[inline]
pub fn align_down<T: PrimInt + Unsigned>(value: T, alignment: T) -> T {
    value - value % alignment
}

/// Returns `true` if `value` is a multiple of `alignment`.
///
/// Panics if `alignment` is zero.
#[inline]
pub fn is_aligned<T: PrimInt>(value: T, alignment: T) -> bool {
    (value % alignment).is_zero()
}
