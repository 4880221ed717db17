//! Unit tests for the sprite encoder.
//!
//! These tests verify the properties of the sprite text format:
//! - Opacity rule and RGB packing
//! - Output shape (lines and tokens per line)
//! - Row-major fidelity
//! - Input contract violations

use png2spr::sprite::*;

/// Deterministic pseudo-random pixels with a mix of alpha values.
fn make_pixels(count: usize) -> Vec<Pixel> {
    let mut state = 0x2545_F491u32;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, a] = state.to_le_bytes();
            let a = match a % 3 {
                0 => 0,
                1 => 255,
                _ => a,
            };
            Pixel::new(r, g, b, a)
        })
        .collect()
}

fn parse(text: &str) -> Vec<Vec<i32>> {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|t| t.parse().unwrap())
                .collect()
        })
        .collect()
}

// ==================== Reference Boundaries ====================

#[test]
fn test_fully_transparent_image() {
    let pixels = [Pixel::new(10, 20, 30, 0), Pixel::new(40, 50, 60, 0)];
    assert_eq!(encode(&pixels, 2, 1).unwrap(), "-1 -1 \n");
}

#[test]
fn test_fully_opaque_image() {
    let pixels = [Pixel::new(255, 0, 0, 255), Pixel::new(0, 255, 0, 255)];
    assert_eq!(encode(&pixels, 1, 2).unwrap(), "16711680 \n65280 \n");
}

#[test]
fn test_mixed_row() {
    let pixels = [
        Pixel::new(0, 0, 0, 255),
        Pixel::new(255, 255, 255, 255),
        Pixel::new(1, 2, 3, 128),
    ];
    assert_eq!(encode(&pixels, 3, 1).unwrap(), "0 16777215 -1 \n");
}

#[test]
fn test_without_trailing_space() {
    let pixels = [
        Pixel::opaque(0, 0, 1),
        Pixel::opaque(0, 0, 2),
        Pixel::opaque(0, 0, 3),
        Pixel::new(0, 0, 4, 0),
    ];
    let options = EncodeOptions {
        trailing_space: false,
    };
    assert_eq!(encode_with(&pixels, 2, 2, options).unwrap(), "1 2\n3 -1\n");
}

// ==================== Properties ====================

#[test]
fn test_deterministic() {
    let pixels = make_pixels(7 * 5);
    assert_eq!(encode(&pixels, 7, 5).unwrap(), encode(&pixels, 7, 5).unwrap());
}

#[test]
fn test_shape() {
    for (width, height) in [(1, 1), (1, 9), (9, 1), (4, 3), (16, 16)] {
        let pixels = make_pixels((width * height) as usize);
        let text = encode(&pixels, width, height).unwrap();
        assert!(text.ends_with('\n'));

        let rows = parse(&text);
        assert_eq!(rows.len(), height as usize, "{}x{}", width, height);
        for row in rows {
            assert_eq!(row.len(), width as usize, "{}x{}", width, height);
        }
    }
}

#[test]
fn test_every_line_has_trailing_space() {
    let pixels = make_pixels(6);
    let text = encode(&pixels, 3, 2).unwrap();
    for line in text.lines() {
        assert!(line.ends_with(' '), "line {:?} should end with a space", line);
        assert!(!line.contains("  "), "line {:?} has a double space", line);
    }
}

#[test]
fn test_opacity_rule_and_row_major_fidelity() {
    let (width, height) = (6u32, 4u32);
    let pixels = make_pixels((width * height) as usize);
    let rows = parse(&encode(&pixels, width, height).unwrap());

    for (y, row) in rows.iter().enumerate() {
        for (x, &token) in row.iter().enumerate() {
            let p = pixels[y * width as usize + x];
            if p.a == 255 {
                let expected = ((p.r as i32) << 16) | ((p.g as i32) << 8) | p.b as i32;
                assert_eq!(token, expected, "pixel ({}, {})", x, y);
                assert!((0..=MAX_COLOR_TOKEN).contains(&token));
            } else {
                assert_eq!(token, TRANSPARENT_TOKEN, "pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_packing_matches_hex_concatenation() {
    for p in make_pixels(64).into_iter().map(|p| Pixel::opaque(p.r, p.g, p.b)) {
        let hex = format!("{:02x}{:02x}{:02x}", p.r, p.g, p.b);
        let expected = i32::from_str_radix(&hex, 16).unwrap();
        assert_eq!(p.token().value(), expected);
    }
}

#[test]
fn test_streaming_matches_in_memory() {
    let pixels = make_pixels(5 * 3);
    for trailing_space in [true, false] {
        let options = EncodeOptions { trailing_space };
        let mut sink = Vec::new();
        encode_to(&pixels, 5, 3, options, &mut sink).unwrap();
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            encode_with(&pixels, 5, 3, options).unwrap()
        );
    }
}

// ==================== Contract Violations ====================

#[test]
fn test_shape_mismatch() {
    let pixels = make_pixels(5);
    let err = encode(&pixels, 2, 3).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::ShapeMismatch {
            expected: 6,
            actual: 5
        }
    ));
}

#[test]
fn test_zero_width() {
    let err = encode(&[], 0, 1).unwrap_err();
    assert!(matches!(err, EncodeError::InvalidDimension { width: 0, .. }));
}

#[test]
fn test_zero_height() {
    let err = encode(&[], 3, 0).unwrap_err();
    assert!(matches!(err, EncodeError::InvalidDimension { height: 0, .. }));
}

#[test]
fn test_streaming_writes_nothing_on_invalid_input() {
    let pixels = make_pixels(3);
    let mut sink = Vec::new();
    let result = encode_to(&pixels, 2, 2, EncodeOptions::default(), &mut sink);
    assert!(matches!(result, Err(EncodeError::ShapeMismatch { .. })));
    assert!(sink.is_empty());
}

#[test]
fn test_streaming_io_error_surfaces() {
    struct FailingWriter;
    impl std::io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let pixels = make_pixels(4);
    let err = encode_to(&pixels, 2, 2, EncodeOptions::default(), &mut FailingWriter).unwrap_err();
    assert!(matches!(err, EncodeError::Io(_)));
    assert!(err.to_string().contains("disk full"));
}
