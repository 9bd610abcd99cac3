use std::fs;
use std::path::PathBuf;

use itertools::Itertools;

use super::{FlagEntry, FlagSource};

/// Flags stored as `<alpha-2 code>.png` files in a single directory, like
/// the standard `data/128x96` flag set.
pub struct DirectorySource {
    pub dir: PathBuf,
}

impl FlagSource for DirectorySource {
    fn entries(&self) -> crate::error::Result<Vec<FlagEntry>> {
        let entries = fs::read_dir(&self.dir)?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| matches!(path.extension().and_then(|ext| ext.to_str()), Some("png")))
            .filter_map(|path| {
                let code = path.file_stem()?.to_str()?.to_uppercase();
                Some(FlagEntry { code, path })
            })
            .sorted_by(|a, b| a.code.cmp(&b.code))
            .collect();

        Ok(entries)
    }
}
