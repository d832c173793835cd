#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod bits;
pub mod crc;
pub mod frame;
pub mod gcd;
pub mod sat;

#[cfg(feature = "norm")]
pub mod norm;

#[cfg(feature = "vector-find")]
pub mod vector;

#[cfg(feature = "checked")]
pub mod checked;

pub use bits::fls;
pub use crc::{crc32, crc32_table};
pub use frame::{align_down, align_up, ceil_divide, frame_align, is_aligned};
pub use gcd::{gcd, gcd_unsigned};
pub use sat::{sat_int16, sat_int24, sat_int32};

#[cfg(feature = "norm")]
pub use norm::norm_int32;

#[cfg(feature = "vector-find")]
pub use vector::{find_equal_int16, find_max_abs_int32, find_min_int16};

#[cfg(feature = "checked")]
pub use checked::NumbersError;
