//! Saturation to fixed-point sample ranges.
//!
//! Out of range values are clamped to the nearest representable boundary instead of
//! wrapping.

/// Largest signed 24-bit value.
pub const INT24_MAX: i32 = 8_388_607;

/// Smallest signed 24-bit value.
pub const INT24_MIN: i32 = -8_388_608;

/// Saturates a 64-bit value to the `i32` range.
#[inline]
pub fn sat_int32(x: i64) -> i32 {
    x.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Saturates a 32-bit value to the signed 24-bit range.
#[inline]
pub fn sat_int24(x: i32) -> i32 {
    x.clamp(INT24_MIN, INT24_MAX)
}

/// Saturates a 32-bit value to the `i16` range.
#[inline]
pub fn sat_int16(x: i32) -> i16 {
    x.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
