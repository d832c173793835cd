//! Tests for the CRC-32 checksum

use dsp_numbers::crc::*;

const CHECK_INPUT: &[u8] = b"123456789";

#[test]
fn standard_check_value() {
    assert_eq!(crc32(0, CHECK_INPUT), 0xCBF4_3926);
    assert_eq!(crc32_table(0, CHECK_INPUT), 0xCBF4_3926);
}

#[test]
fn known_values() {
    assert_eq!(crc32(0, b""), 0);
    assert_eq!(crc32(0, b"a"), 0xE8B7_BE43);
    assert_eq!(
        crc32(0, b"The quick brown fox jumps over the lazy dog"),
        0x414F_A339
    );
}

#[test]
fn empty_input_returns_base() {
    assert_eq!(crc32(0x1234_5678, &[]), 0x1234_5678);
    assert_eq!(crc32_table(0x1234_5678, &[]), 0x1234_5678);
}

#[test]
fn chaining_matches_single_pass() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let whole = crc32(0, &data);

    for k in [0, 1, 7, 8, 255, 500, 999, 1000] {
        let head = crc32(0, &data[..k]);
        assert_eq!(crc32(head, &data[k..]), whole, "split at {k}");
    }

    let mut crc = 0;
    for chunk in data.chunks(24) {
        crc = crc32(crc, chunk);
    }
    assert_eq!(crc, whole);
}

#[test]
fn table_matches_bitwise() {
    let data: Vec<u8> = (0..4096u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();

    for len in [0, 1, 3, 64, 1000, 4096] {
        assert_eq!(crc32_table(0, &data[..len]), crc32(0, &data[..len]));
        assert_eq!(
            crc32_table(0xDEAD_BEEF, &data[..len]),
            crc32(0xDEAD_BEEF, &data[..len])
        );
    }
}
