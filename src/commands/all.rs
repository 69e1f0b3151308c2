//! Force-all command implementation
//!
//! Republishes every script as a first release, ignoring any history.

use console::Style;

use crate::config::PackConfig;
use crate::error::Result;
use crate::packager;

/// Run force-all command
pub fn run(config: &PackConfig) -> Result<()> {
    println!(
        "{}",
        Style::new().bold().apply_to("Force mode: republishing every script")
    );
    println!();

    packager::run_batch(config, None, true)?;
    Ok(())
}
