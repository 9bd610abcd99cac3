//! luminance mask extraction

use image::{GrayImage, Luma, Rgb32FImage};
use ndarray::Array2;

pub const MASK_MIN: u8 = 0;
pub const MASK_MAX: u8 = u8::MAX;

/// Derive the paintable region of an icon: every pixel whose mean over the
/// color channels falls strictly below `threshold` is marked [`MASK_MAX`],
/// everything else [`MASK_MIN`].
///
/// The near-black pixels of the icon artwork are the area the flag fills in.
pub fn luminance_mask(icon: &Rgb32FImage, threshold: f32) -> GrayImage {
    let (width, height) = icon.dimensions();
    let (width, height) = (width as usize, height as usize);

    // mean over the color channels of each pixel
    let mean_mat = Array2::<f32>::from_shape_fn((width, height), |(x, y)| {
        icon.get_pixel(x as _, y as _).0.iter().sum::<f32>() / 3.
    });

    GrayImage::from_fn(width as _, height as _, |x, y| {
        let value = if mean_mat[[x as _, y as _]] < threshold {
            MASK_MAX
        } else {
            MASK_MIN
        };
        Luma([value])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn black_pixels_are_paintable() {
        let icon = Rgb32FImage::from_pixel(10, 10, Rgb([0., 0., 0.]));
        let mask = luminance_mask(&icon, 0.1);
        assert!(mask.pixels().all(|p| p[0] == MASK_MAX));
    }

    #[test]
    fn white_pixels_are_not_paintable() {
        let icon = Rgb32FImage::from_pixel(10, 10, Rgb([1., 1., 1.]));
        let mask = luminance_mask(&icon, 0.1);
        assert!(mask.pixels().all(|p| p[0] == MASK_MIN));
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // pixel mean sits exactly at the threshold, so it stays unmasked
        let icon = Rgb32FImage::from_pixel(1, 1, Rgb([0.5, 0.5, 0.5]));
        let mask = luminance_mask(&icon, 0.5);
        assert_eq!(mask.get_pixel(0, 0)[0], MASK_MIN);
    }

    #[test]
    fn mask_follows_pixel_positions() {
        let mut icon = Rgb32FImage::from_pixel(3, 2, Rgb([1., 1., 1.]));
        icon.put_pixel(2, 1, Rgb([0., 0., 0.]));
        let mask = luminance_mask(&icon, 0.1);
        assert_eq!(mask.get_pixel(2, 1)[0], MASK_MAX);
        assert_eq!(mask.get_pixel(0, 0)[0], MASK_MIN);
    }
}
