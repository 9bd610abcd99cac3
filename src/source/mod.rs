//! flag discovery strategies

pub mod dataset;
pub mod directory;

use std::path::PathBuf;

use image::DynamicImage;

/// One discovered flag: its uppercase alpha-2 country code and the file
/// holding its pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    pub code: String,
    pub path: PathBuf,
}

impl FlagEntry {
    /// Decode the flag pixels. Deferred until the entry is actually
    /// composited so an unreadable file only fails its own entry.
    pub fn load(&self) -> crate::error::Result<DynamicImage> {
        Ok(image::open(&self.path)?)
    }
}

/// A strategy for finding flags and the country codes they belong to. The
/// rest of the pipeline treats every strategy identically.
pub trait FlagSource {
    /// Enumerate the available flags, sorted by code. Enumeration itself
    /// failing (unreadable directory, missing lookup table) aborts the
    /// batch; individual flags are not opened here.
    fn entries(&self) -> crate::error::Result<Vec<FlagEntry>>;
}
