//! flag-into-icon compositing

use image::imageops::FilterType;
use image::{DynamicImage, Rgb32FImage, RgbImage};

use crate::icon::BaseIcon;
use crate::imageops::{to_rgb8, to_unit_rgb};
use crate::mask::MASK_MAX;

/// Blend one flag into the base icon.
///
/// The flag is resampled to the icon's exact working dimensions, painted into
/// the masked pixels channel by channel, rotated back into the icon's on-disk
/// orientation and quantized to 8 bits. Pixels outside the mask keep the
/// icon's own values.
pub fn composite(base: &BaseIcon, flag: &DynamicImage, filter: FilterType) -> RgbImage {
    let (width, height) = base.dimensions();

    let flag = to_unit_rgb(&flag.resize_exact(width, height, filter));

    let blended = Rgb32FImage::from_fn(width, height, |x, y| {
        if base.mask.get_pixel(x, y)[0] == MASK_MAX {
            *flag.get_pixel(x, y)
        } else {
            *base.pixels.get_pixel(x, y)
        }
    });

    to_rgb8(&image::imageops::rotate270(&blended))
}
