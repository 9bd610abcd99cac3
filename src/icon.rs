//! base icon loading

use std::path::Path;

use image::{DynamicImage, GrayImage, Rgb32FImage};

use crate::imageops::to_unit_rgb;
use crate::mask::luminance_mask;

/// The icon artwork that every flag is blended into, together with its
/// paintable-pixel mask. Loaded once per batch and shared read-only.
///
/// The artwork is stored on disk a quarter turn away from its working
/// orientation, so pixels are rotated 90 degrees clockwise on load; the
/// compositor rotates the finished image back before it is written.
pub struct BaseIcon {
    pub pixels: Rgb32FImage,
    pub mask: GrayImage,
}

impl BaseIcon {
    /// Load the base icon from disk. There is no batch without it, so any
    /// read or decode failure propagates.
    pub fn load(path: impl AsRef<Path>, mask_threshold: f32) -> crate::error::Result<Self> {
        Ok(Self::from_image(&image::open(path)?, mask_threshold))
    }

    pub fn from_image(image: &DynamicImage, mask_threshold: f32) -> Self {
        let pixels = image::imageops::rotate90(&to_unit_rgb(image));
        let mask = luminance_mask(&pixels, mask_threshold);
        Self { pixels, mask }
    }

    /// Dimensions of the working (rotated) orientation. The mask always has
    /// the same dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    use crate::mask::{MASK_MAX, MASK_MIN};

    #[test]
    fn load_fails_for_missing_file() {
        assert!(BaseIcon::load("/nonexistent/ship.png", 0.1).is_err());
    }

    #[test]
    fn mask_matches_pixel_dimensions() {
        let art = RgbImage::from_pixel(6, 4, Rgb([0, 0, 0]));
        let icon = BaseIcon::from_image(&DynamicImage::ImageRgb8(art), 0.1);
        assert_eq!(icon.dimensions(), icon.mask.dimensions());
    }

    #[test]
    fn artwork_is_rotated_into_the_working_orientation() {
        // a 2x1 strip: black on the left, white on the right. A clockwise
        // quarter turn puts the black pixel at the top of a 1x2 column.
        let mut art = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        art.put_pixel(0, 0, Rgb([0, 0, 0]));

        let icon = BaseIcon::from_image(&DynamicImage::ImageRgb8(art), 0.1);
        assert_eq!(icon.dimensions(), (1, 2));
        assert_eq!(icon.mask.get_pixel(0, 0)[0], MASK_MAX);
        assert_eq!(icon.mask.get_pixel(0, 1)[0], MASK_MIN);
    }
}
