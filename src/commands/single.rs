//! Single-script pack command implementation
//!
//! Packages exactly one named script with force semantics and writes a
//! manifest containing only that script. The output directory is created
//! but never cleared in this mode.

use console::Style;

use crate::cli::PackArgs;
use crate::config::PackConfig;
use crate::error::{PackError, Result};
use crate::manifest::Manifest;
use crate::packager;
use crate::resolver::PackStatus;

/// Run single-script pack command
pub fn run(config: &PackConfig, args: PackArgs) -> Result<()> {
    let name = args.name;

    if !config.script_dir(&name).is_dir() {
        return Err(PackError::ScriptNotFound { name });
    }

    println!(
        "{} {}",
        Style::new().bold().apply_to("Packaging script:"),
        Style::new().bold().yellow().apply_to(&name)
    );
    println!();

    std::fs::create_dir_all(&config.output_dir)?;

    let result = packager::process_script(config, &name, None, true)?;

    if result.status == PackStatus::Skipped {
        println!(
            "{} declared version {} has a non-zero patch",
            Style::new().yellow().apply_to("Skipped:"),
            result.version
        );
        return Ok(());
    }

    Manifest::new(vec![result.release_record()]).save(&config.output_dir)?;

    println!(
        "{} {} v{} -> {}",
        Style::new().bold().green().apply_to("Done!"),
        name,
        result.version,
        config.archive_path(&name).display()
    );

    Ok(())
}
