//! batch configuration

use std::path::PathBuf;

use image::imageops::FilterType;

use crate::remap::RemapTable;

/// Everything one batch run needs to know. Defaults reproduce the standard
/// data layout used by the plotting assets.
#[derive(Debug, Clone)]
pub struct Config {
    /// The icon artwork whose dark pixels receive the flag.
    pub icon_path: PathBuf,
    /// Where finished icons are written, one `{code}.png` per flag.
    pub output_dir: PathBuf,
    /// Channel-mean threshold below which an icon pixel counts as paintable.
    pub mask_threshold: f32,
    /// Filter used to resample flags to the icon dimensions.
    pub filter: FilterType,
    pub remap: RemapTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_path: "data/ship.png".into(),
            output_dir: "flag_icons".into(),
            mask_threshold: 0.1,
            filter: FilterType::Lanczos3,
            remap: RemapTable::default(),
        }
    }
}
