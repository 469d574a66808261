use anyhow::Result;
use clap::Parser;
use lock_icons::icon_gen::{self, ICON_DIR};
use std::path::Path;

/// Takes no options: the sizes and output directory are fixed.
#[derive(Debug, Parser)]
#[clap(
    name = "lock-icons",
    version,
    about = "Generate the 16, 48 and 128 px padlock icons into ./icons"
)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();

    icon_gen::generate_icons(Path::new(ICON_DIR))?;
    Ok(())
}
