use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "zk",
    about = concat!("zikr v", env!("CARGO_PKG_VERSION"), " - a dhikr counter for the terminal"),
    version
)]
pub struct Cli {
    /// Use a specific config file instead of the platform default
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable the completion chime for this run
    #[arg(long)]
    pub muted: bool,

    /// Start on the archive list
    #[arg(long)]
    pub archive: bool,
}
