//! Deterministic texture generators shared by the integration tests.

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { 32u8 } else { 220u8 };
        }
    }
    img
}

/// Generates a constant-intensity image.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates vertical stripes alternating every `period / 2` columns.
pub fn vertical_stripes_u8(width: usize, height: usize, period: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(period >= 2, "stripe period must be at least 2");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = if x % period < period / 2 { 40u8 } else { 210u8 };
        }
    }
    img
}

/// Generates a horizontal intensity ramp, darkest at the left edge.
pub fn ramp_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = (x * 255 / (width - 1)) as u8;
        }
    }
    img
}
