use clap::Parser;
use std::path::PathBuf;

/// Arguments for the release command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  First release (no history):\n    scriptpack release\n\n\
                  Release against the previous manifest:\n    scriptpack release --prev-hashes dist/hashes.json\n\n\
                  Dry run in a sandbox copy:\n    scriptpack --test release --prev-hashes dist/hashes.json")]
pub struct ReleaseArgs {
    /// Path to the previous hashes.json manifest; missing file means no history
    #[arg(long)]
    pub prev_hashes: Option<PathBuf>,
}
