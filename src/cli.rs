//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use pngtrim_core::TrimOptions;

pub const USAGE: &str = "Usage: pngtrim [--keep-going] [--skip-blank] <FOLDER>";

#[derive(Parser, Debug)]
#[command(
    name = "pngtrim",
    version,
    about = "Trim transparent padding from every PNG in a folder, in place"
)]
pub struct Cli {
    /// Folder to search recursively for .png files
    pub folder: Option<PathBuf>,

    /// Keep going after a file fails instead of stopping the batch
    #[arg(long)]
    pub keep_going: bool,

    /// Leave fully transparent images untouched instead of failing on them
    #[arg(long)]
    pub skip_blank: bool,
}

impl Cli {
    pub fn options(&self) -> TrimOptions {
        TrimOptions::new()
            .with_keep_going(self.keep_going)
            .with_skip_blank(self.skip_blank)
    }
}
