use clap::Parser;
use flagship::config::Config;
use flagship::pipeline;
use flagship::source::FlagSource;
use flagship::source::dataset::{Alpha2Table, DatasetSource};
use flagship::source::directory::DirectorySource;

use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The directory of flag images named by alpha-2 country code
    #[arg(long, default_value = "data/128x96")]
    flag_dir: PathBuf,

    /// The base icon whose dark pixels receive the flag
    #[arg(long, default_value = "data/ship.png")]
    icon: PathBuf,

    /// The directory to write the finished icons into
    #[arg(short, long, default_value = "flag_icons")]
    output_dir: PathBuf,

    /// Channel-mean threshold below which an icon pixel is painted
    #[arg(long, default_value_t = 0.1)]
    threshold: f32,

    /// Where flags come from: "directory" or "dataset"
    #[arg(short, long, default_value = "directory")]
    mode: String,

    /// Country name to alpha-2 code table (dataset mode)
    #[arg(long, default_value = "data/alpha2.csv")]
    alpha2: PathBuf,

    /// The directory of dataset flag images named by country (dataset mode)
    #[arg(long, default_value = "data/flags")]
    dataset_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        icon_path: args.icon,
        output_dir: args.output_dir,
        mask_threshold: args.threshold,
        ..Config::default()
    };

    let source: Box<dyn FlagSource> = match args.mode.as_str() {
        "dataset" => Box::new(DatasetSource {
            dir: args.dataset_dir,
            table: Alpha2Table::from_path(&args.alpha2)?,
        }),
        _ => Box::new(DirectorySource { dir: args.flag_dir }),
    };

    let summary = pipeline::run(&config, source.as_ref())?;
    println!(
        "Number of flags in {}: {}",
        config.output_dir.display(),
        summary.produced
    );

    Ok(())
}
