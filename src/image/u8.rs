/// Borrowed view over an 8-bit grayscale pixel buffer.
///
/// `stride` is the distance in bytes between the starts of consecutive rows;
/// it equals `w` for tightly packed buffers.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Intensity at `(x, y)`. Both coordinates must be in-bounds; the LBP
    /// scan derives that guarantee from its edge margin.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(
            x < self.w && y < self.h,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.w,
            self.h
        );
        self.data[y * self.stride + x]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageU8;

    #[test]
    fn get_addresses_by_stride() {
        let data = [1u8, 2, 3, 0, 4, 5, 6, 0];
        let img = ImageU8 {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        assert_eq!(img.get(0, 0), 1);
        assert_eq!(img.get(2, 0), 3);
        assert_eq!(img.get(1, 1), 5);
    }
}
