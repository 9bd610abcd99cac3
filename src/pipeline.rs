//! the batch loop

use std::fs;
use std::path::PathBuf;

use crate::compose;
use crate::config::Config;
use crate::icon::BaseIcon;
use crate::source::{FlagEntry, FlagSource};

/// What a run accomplished. The batch is best-effort: success is measured by
/// `produced` against `discovered`, never all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub discovered: usize,
    pub produced: usize,
}

/// Run the whole batch: load the icon once, then blend and write every flag
/// the source yields. A failing entry is logged under its code and skipped;
/// only a missing base icon, an unusable output directory or a failing
/// enumeration abort the run.
pub fn run(config: &Config, source: &dyn FlagSource) -> crate::error::Result<BatchSummary> {
    let base = BaseIcon::load(&config.icon_path, config.mask_threshold)?;

    fs::create_dir_all(&config.output_dir)?;

    let entries = source.entries()?;
    log::info!("Found {} flags", entries.len());

    let mut produced = 0;
    for entry in &entries {
        let code = config.remap.apply(&entry.code);
        if code != entry.code {
            log::info!("Renaming {} to {}", entry.code, code);
        }

        match process(&base, config, entry, code) {
            Ok(path) => {
                produced += 1;
                log::debug!("Saved blended flag for {} to {:?}", code, path);
            }
            Err(e) => log::error!("Error processing {}: {}", code, e),
        }
    }

    log::info!(
        "Wrote {} of {} icons to {:?}",
        produced,
        entries.len(),
        config.output_dir
    );

    Ok(BatchSummary {
        discovered: entries.len(),
        produced,
    })
}

fn process(
    base: &BaseIcon,
    config: &Config,
    entry: &FlagEntry,
    code: &str,
) -> crate::error::Result<PathBuf> {
    let flag = entry.load()?;
    let icon = compose::composite(base, &flag, config.filter);

    let path = config.output_dir.join(format!("{code}.png"));
    icon.save(&path)?;

    Ok(path)
}
