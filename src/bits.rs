//! Bit scanning.

/// Returns the 1-based position of the most significant set bit of `x`.
///
/// `fls(0)` is 0, `fls(1)` is 1 and `fls(0x8000_0000)` is 32.
///
/// The scan narrows the position in five fixed steps (16, 8, 4, 2 and 1 bits) instead
/// of testing one bit at a time.
#[inline]
pub fn fls(mut x: u32) -> u32 {
    if x == 0 {
        return 0;
    }

    let mut r = 32;

    if x & 0xFFFF_0000 == 0 {
        x <<= 16;
        r -= 16;
    }
    if x & 0xFF00_0000 == 0 {
        x <<= 8;
        r -= 8;
    }
    if x & 0xF000_0000 == 0 {
        x <<= 4;
        r -= 4;
    }
    if x & 0xC000_0000 == 0 {
        x <<= 2;
        r -= 2;
    }
    if x & 0x8000_0000 == 0 {
        r -= 1;
    }

    r
}
