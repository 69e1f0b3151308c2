//! Release command implementation
//!
//! Change-detected release of every script against a previous manifest.

use console::Style;

use crate::cli::ReleaseArgs;
use crate::config::PackConfig;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::packager;

/// Run release command
pub fn run(config: &PackConfig, args: ReleaseArgs) -> Result<()> {
    println!("{}", Style::new().bold().apply_to("Release mode"));
    println!();

    // Missing manifest is no history; an unreadable one aborts the run
    let baseline = match &args.prev_hashes {
        Some(path) => Manifest::load(path)?,
        None => None,
    };

    if baseline.is_none() {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("No previous manifest; every script counts as a first release")
        );
        println!();
    }

    packager::run_batch(config, baseline.as_ref(), false)?;
    Ok(())
}
