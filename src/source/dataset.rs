use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use super::{FlagEntry, FlagSource};

/// Country-name to alpha-2 lookup, loaded from a delimited text file whose
/// header row names at least a `country` and an `alpha2` column.
pub struct Alpha2Table {
    codes: HashMap<String, String>,
}

impl Alpha2Table {
    pub fn from_path(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    fn parse(text: &str) -> crate::error::Result<Self> {
        let mut lines = text.lines();

        let header: Vec<_> = lines
            .next()
            .ok_or("alpha-2 table is empty")?
            .split(',')
            .map(str::trim)
            .collect();
        let country_col = header
            .iter()
            .position(|&column| column == "country")
            .ok_or("alpha-2 table has no `country` column")?;
        let code_col = header
            .iter()
            .position(|&column| column == "alpha2")
            .ok_or("alpha-2 table has no `alpha2` column")?;

        let codes = lines
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let fields: Vec<_> = line.split(',').map(str::trim).collect();
                let country = fields.get(country_col)?;
                let code = fields.get(code_col)?;
                Some((country.to_string(), code.to_uppercase()))
            })
            .collect();

        Ok(Self { codes })
    }

    pub fn lookup(&self, country: &str) -> Option<&str> {
        self.codes.get(country).map(String::as_str)
    }
}

/// Flags obtained from an external dataset that keys images by full country
/// name rather than code. Each name is joined against the alpha-2 table;
/// names the table does not know are skipped.
pub struct DatasetSource {
    pub dir: PathBuf,
    pub table: Alpha2Table,
}

impl FlagSource for DatasetSource {
    fn entries(&self) -> crate::error::Result<Vec<FlagEntry>> {
        let entries = fs::read_dir(&self.dir)?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| matches!(path.extension().and_then(|ext| ext.to_str()), Some("png")))
            .filter_map(|path| {
                let country = path.file_stem()?.to_str()?.to_owned();
                match self.table.lookup(&country) {
                    Some(code) => Some(FlagEntry {
                        code: code.to_owned(),
                        path,
                    }),
                    None => {
                        log::warn!("No alpha-2 code for {:?}, skipping", country);
                        None
                    }
                }
            })
            .sorted_by(|a, b| a.code.cmp(&b.code))
            .collect();

        Ok(entries)
    }
}
