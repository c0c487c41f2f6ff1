use std::path::PathBuf;

use clap::Parser;

use thin_categories_core::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(name = "thin-categories")]
#[command(about = "Find word categories with too few items for the 4x4 grid game")]
#[command(version)]
pub struct Cli {
    /// Word dataset (JSON object: word -> list of categories)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the thin categories report (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}
