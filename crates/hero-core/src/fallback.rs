//! Synthetic images used when no real asset decodes in time.
//!
//! Everything here is deterministic so the page looks the same on every
//! failed load, and so the bitmaps can be checked on the host.

use crate::constants::{
    FALLBACK_BITMAP_SIZE, FALLBACK_PALETTES, FALLBACK_TEXTURE_GRADIENT, FALLBACK_TEXTURE_SIZE,
};

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, rgb: [u8; 3], alpha: u8) {
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&[rgb[0], rgb[1], rgb[2], alpha]);
    }
}

/// The four gradient discs that stand in for the hero photo pool.
pub fn fallback_set() -> Vec<Bitmap> {
    FALLBACK_PALETTES
        .iter()
        .map(|stops| gradient_disc(FALLBACK_BITMAP_SIZE, stops))
        .collect()
}

/// Square texture used by the GPU hero when its logo fails to load.
pub fn fallback_texture() -> Bitmap {
    gradient_square(FALLBACK_TEXTURE_SIZE, &FALLBACK_TEXTURE_GRADIENT)
}

/// Filled circle spanning the bitmap, painted with a top-left → bottom-right
/// gradient. Outside the circle is transparent; the rim is one pixel of
/// coverage-based alpha.
pub fn gradient_disc(size: u32, stops: &[[u8; 3]]) -> Bitmap {
    let mut bmp = Bitmap::transparent(size, size);
    let radius = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let rgb = sample_stops(stops, diagonal_t(x, y, size));
            bmp.put(x, y, rgb, (coverage * 255.0).round() as u8);
        }
    }
    bmp
}

pub fn gradient_square(size: u32, stops: &[[u8; 3]]) -> Bitmap {
    let mut bmp = Bitmap::transparent(size, size);
    for y in 0..size {
        for x in 0..size {
            bmp.put(x, y, sample_stops(stops, diagonal_t(x, y, size)), 255);
        }
    }
    bmp
}

// Position along the (0,0) → (size,size) gradient axis, sampled at pixel centers.
#[inline]
fn diagonal_t(x: u32, y: u32, size: u32) -> f32 {
    ((x as f32 + 0.5 + y as f32 + 0.5) / (2.0 * size as f32)).clamp(0.0, 1.0)
}

// Evenly spaced stops, linear in sRGB like a canvas gradient.
fn sample_stops(stops: &[[u8; 3]], t: f32) -> [u8; 3] {
    match stops.len() {
        0 => [255, 255, 255],
        1 => stops[0],
        n => {
            let span = t * (n - 1) as f32;
            let i = (span.floor() as usize).min(n - 2);
            let local = span - i as f32;
            let (a, b) = (stops[i], stops[i + 1]);
            let mix = |c0: u8, c1: u8| (c0 as f32 + (c1 as f32 - c0 as f32) * local).round() as u8;
            [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_four_discs() {
        let set = fallback_set();
        assert_eq!(set.len(), 4);
        for bmp in &set {
            assert_eq!((bmp.width, bmp.height), (128, 128));
            assert_eq!(bmp.pixels.len(), 128 * 128 * 4);
            // corners are outside the circle, the center is solid
            assert_eq!(bmp.pixel(0, 0)[3], 0);
            assert_eq!(bmp.pixel(127, 127)[3], 0);
            assert_eq!(bmp.pixel(64, 64)[3], 255);
        }
    }

    #[test]
    fn fallback_set_is_deterministic() {
        assert_eq!(fallback_set(), fallback_set());
    }

    #[test]
    fn gradient_runs_from_first_to_last_stop() {
        let sq = gradient_square(64, &[[0, 0, 0], [255, 255, 255]]);
        let start = sq.pixel(0, 0);
        let end = sq.pixel(63, 63);
        assert!(start[0] < 8, "top-left should be near the first stop: {:?}", start);
        assert!(end[0] > 247, "bottom-right should be near the last stop: {:?}", end);
        assert_eq!(start[3], 255);
    }

    #[test]
    fn three_stop_midpoint_hits_middle_color() {
        let stops = [[0, 0, 0], [200, 100, 50], [255, 255, 255]];
        assert_eq!(sample_stops(&stops, 0.5), [200, 100, 50]);
        assert_eq!(sample_stops(&stops, 1.0), [255, 255, 255]);
    }
}
