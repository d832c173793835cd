//! CRC-32 checksum (ISO-HDLC, reflected polynomial `0xEDB88320`).
//!
//! Both routines take the previous checksum as `base`, so a stream can be processed in
//! pieces by feeding each result into the next call. A `base` of 0 starts a new
//! checksum.

use spin::Once;

/// Reversed representation of the CRC-32 polynomial `0x04C11DB7`.
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: Once<[u32; 256]> = Once::new();

/// Runs the 8 polynomial division steps for one byte.
#[inline]
fn byte_remainder(mut cur: u32) -> u32 {
    for _ in 0..8 {
        cur = if cur & 1 != 0 {
            (cur >> 1) ^ CRC32_POLYNOMIAL
        } else {
            cur >> 1
        };
    }

    cur
}

/// Computes the CRC-32 of `data` bit by bit, continuing from `base`.
pub fn crc32(base: u32, data: &[u8]) -> u32 {
    let mut crc = !base;

    for &byte in data {
        let cur = byte_remainder((crc ^ byte as u32) & 0xFF);
        crc = cur ^ (crc >> 8);
    }

    !crc
}

/// Same result as [`crc32`], using a 256-entry lookup table.
///
/// The table is built on first use. This trades 1 KiB of memory for roughly eight
/// times fewer operations per byte.
pub fn crc32_table(base: u32, data: &[u8]) -> u32 {
    let table = TABLE.call_once(|| {
        let mut table = [0; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = byte_remainder(i as u32);
        }
        table
    });

    let mut crc = !base;

    for &byte in data {
        crc = table[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }

    !crc
}
