use std::path::PathBuf;

use clap::Parser;

/// Command line of the tray helper, as launched by the Syncany daemon.
#[derive(Parser, Debug)]
#[command(name = "syncany-tray")]
#[command(version, about = "System tray helper for the Syncany client")]
pub struct Cli {
    /// Directory holding the tray icons and the notification logo
    pub resource_dir: PathBuf,

    /// Status line shown until the daemon sends one
    pub status_text: String,
}
