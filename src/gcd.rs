//! Binary greatest common divisor.
//!
//! Only shifts, comparisons and subtraction are used, so the routines stay cheap on
//! targets without a hardware divider.

/// Returns the greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, 0)` is 0, `gcd(0, b)` is `|b|` and `gcd(a, 0)` is `|a|`, because every
/// integer divides 0.
///
/// The magnitudes are computed without overflow. The only result that does not fit
/// `i32` is `2^31` (from `gcd(i32::MIN, 0)` or `gcd(i32::MIN, i32::MIN)`), which wraps
/// to `i32::MIN`.
#[inline]
pub fn gcd(a: i32, b: i32) -> i32 {
    gcd_unsigned(a.unsigned_abs(), b.unsigned_abs()) as i32
}

/// Unsigned variant of [`gcd`].
pub fn gcd_unsigned(mut a: u32, mut b: u32) -> u32 {
    if a == 0 {
        return b;
    }

    if b == 0 {
        return a;
    }

    // Common power of two.
    let mut k = 0;
    while (a | b) & 1 == 0 {
        a >>= 1;
        b >>= 1;
        k += 1;
    }

    while a & 1 == 0 {
        a >>= 1;
    }

    loop {
        while b & 1 == 0 {
            b >>= 1;
        }

        // Both odd here, so the difference is even.
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }

        b -= a;

        if b == 0 {
            break;
        }
    }

    a << k
}
