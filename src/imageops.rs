//! pixel encoding normalization

use image::{DynamicImage, Rgb, Rgb32FImage, RgbImage};

/// Convert any decoded image into the working representation: three channels
/// of unit-range floats. Integer samples are scaled by 1/255, float samples
/// are taken as already unit-range, and an alpha channel is dropped.
///
/// Both the base icon and every flag go through this exact conversion.
pub fn to_unit_rgb(image: &DynamicImage) -> Rgb32FImage {
    image.to_rgb32f()
}

/// Quantize a unit-range float image back to 8 bits for persistence. Values
/// are scaled by 255 and truncated; anything outside [0,1] saturates.
pub fn to_rgb8(image: &Rgb32FImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(image.get_pixel(x, y).0.map(|c| (c * 255.) as u8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn eight_bit_samples_scale_to_unit_range() {
        let source = RgbImage::from_pixel(2, 2, Rgb([51, 255, 0]));
        let unit = to_unit_rgb(&DynamicImage::ImageRgb8(source));
        let [r, g, b] = unit.get_pixel(0, 0).0;
        assert!((r - 0.2).abs() < 1e-6);
        assert_eq!(g, 1.);
        assert_eq!(b, 0.);
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 128]));
        let unit = to_unit_rgb(&DynamicImage::ImageRgba8(source));
        assert_eq!(unit.get_pixel(0, 0), &Rgb([1., 0., 0.]));
    }

    #[test]
    fn float_samples_pass_through() {
        let source = Rgb32FImage::from_pixel(1, 1, Rgb([0.25, 0.5, 0.75]));
        let unit = to_unit_rgb(&DynamicImage::ImageRgb32F(source));
        assert_eq!(unit.get_pixel(0, 0), &Rgb([0.25, 0.5, 0.75]));
    }

    #[test]
    fn quantization_truncates_and_saturates() {
        let unit = Rgb32FImage::from_pixel(1, 1, Rgb([0.5, 1.5, -0.25]));
        let quantized = to_rgb8(&unit);
        assert_eq!(quantized.get_pixel(0, 0), &Rgb([127, 255, 0]));
    }
}
