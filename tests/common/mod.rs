//! In-memory PNG fixtures.
//!
//! Builds minimal PNG files with uncompressed (stored) deflate blocks so
//! tests need no binary assets and no encoder dependency.

#![allow(dead_code)]

use std::path::Path;

pub const COLOR_GRAY: u8 = 0;
pub const COLOR_RGB: u8 = 2;
pub const COLOR_GRAY_ALPHA: u8 = 4;
pub const COLOR_RGBA: u8 = 6;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in bytes {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

fn adler32(bytes: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in bytes {
        a = (a + byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

fn zlib_stored(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x01];
    let blocks: Vec<&[u8]> = if data.is_empty() {
        vec![&[][..]]
    } else {
        data.chunks(65535).collect()
    };
    for (i, block) in blocks.iter().enumerate() {
        out.push(if i == blocks.len() - 1 { 1 } else { 0 });
        let len = block.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);
    }
    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let mut body = kind.to_vec();
    body.extend_from_slice(data);
    out.extend_from_slice(&body);
    out.extend_from_slice(&crc32(&body).to_be_bytes());
}

pub const COLOR_PALETTE: u8 = 3;

/// Build a PNG from raw, unfiltered samples in row-major order.
///
/// `samples` holds big-endian bytes for 16-bit images.
pub fn png(width: u32, height: u32, color_type: u8, bit_depth: u8, samples: &[u8]) -> Vec<u8> {
    png_with_chunks(width, height, color_type, bit_depth, &[], samples)
}

/// Like [`png`], with extra chunks (PLTE, tRNS, ...) placed between IHDR
/// and IDAT in the given order.
///
/// `samples` holds packed rows for depths below 8 bits.
pub fn png_with_chunks(
    width: u32,
    height: u32,
    color_type: u8,
    bit_depth: u8,
    chunks: &[(&[u8; 4], &[u8])],
    samples: &[u8],
) -> Vec<u8> {
    let row_bytes = samples.len() / height as usize;
    let mut raw = Vec::with_capacity(samples.len() + height as usize);
    for row in samples.chunks(row_bytes) {
        raw.push(0); // filter: none
        raw.extend_from_slice(row);
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);

    let mut out = SIGNATURE.to_vec();
    chunk(&mut out, b"IHDR", &ihdr);
    for (kind, data) in chunks {
        chunk(&mut out, kind, data);
    }
    chunk(&mut out, b"IDAT", &zlib_stored(&raw));
    chunk(&mut out, b"IEND", &[]);
    out
}

/// 8-bit RGBA PNG.
pub fn rgba_png(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    png(width, height, COLOR_RGBA, 8, rgba)
}

pub fn write_png(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn crc32_known_value() {
    assert_eq!(crc32(b"IEND"), 0xAE42_6082);
}

#[test]
fn adler32_known_value() {
    assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
}
