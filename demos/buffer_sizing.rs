//! Buffer sizing for a few common stream formats.
//!
//! Computes the aligned period size for each format, fills a period with a test
//! signal, then reports its checksum, peak and headroom.

use simple_logger::SimpleLogger;

use dsp_numbers::checked::{checked_find_max_abs_int32, checked_frame_align};
use dsp_numbers::{align_up, crc32, norm_int32};

/// Byte alignment required by the DMA engine.
const BYTE_ALIGN: u32 = 64;

/// Frames processed per period must be a multiple of this.
const FRAME_ALIGN_REQ: u32 = 4;

/// Approximate period length in frames (1 ms at 48 kHz).
const PERIOD_FRAMES: u32 = 48;

struct Format {
    name: &'static str,
    channels: u32,
    sample_bytes: u32,
}

const FORMATS: [Format; 4] = [
    Format {
        name: "S16_LE stereo",
        channels: 2,
        sample_bytes: 2,
    },
    Format {
        name: "S24_3LE stereo",
        channels: 2,
        sample_bytes: 3,
    },
    Format {
        name: "S32_LE 6ch",
        channels: 6,
        sample_bytes: 4,
    },
    Format {
        name: "S24_3LE 5ch",
        channels: 5,
        sample_bytes: 3,
    },
];

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    for format in FORMATS.iter() {
        let frame_size = format.channels * format.sample_bytes;
        let frames = match checked_frame_align(BYTE_ALIGN, FRAME_ALIGN_REQ, frame_size) {
            Ok(frames) => frames,
            Err(err) => {
                log::error!("{}: {err}", format.name);
                continue;
            }
        };
        let period = align_up(PERIOD_FRAMES, frames);

        log::info!(
            "{}: frame {} bytes, align {} frames, period {} frames ({} bytes)",
            format.name,
            frame_size,
            frames,
            period,
            period * frame_size
        );

        // Triangle wave, one cycle per period.
        let samples: Vec<i32> = (0..period * format.channels)
            .map(|i| {
                let phase = (i / format.channels) as i64 * 4 * (1 << 22) / period as i64;
                let value = if phase < 1 << 23 { phase } else { (1 << 24) - phase };
                (value - (1 << 22)) as i32
            })
            .collect();
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

        let peak = checked_find_max_abs_int32(&samples).unwrap();
        log::debug!(
            "{}: crc32 {:#010x}, peak {}, headroom {} bits",
            format.name,
            crc32(0, &bytes),
            peak,
            norm_int32(peak)
        );
    }
}
