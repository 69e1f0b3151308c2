//! List command implementation
//!
//! Lists every discovered script with its declared version and whether it
//! is in a releasable state (declared patch must be 0).

use console::Style;

use crate::config::PackConfig;
use crate::descriptor::ScriptDescriptor;
use crate::error::Result;
use crate::packager;

/// Run list command
pub fn run(config: &PackConfig) -> Result<()> {
    let scripts = packager::discover_scripts(config)?;

    if scripts.is_empty() {
        println!("No scripts found.");
        return Ok(());
    }

    println!("Available scripts ({}):", scripts.len());
    println!();

    for name in &scripts {
        display_script(config, name);
    }

    Ok(())
}

fn display_script(config: &PackConfig, name: &str) {
    let styled_name = Style::new().bold().yellow().apply_to(name);

    match ScriptDescriptor::load(&config.script_dir(name)) {
        Ok(descriptor) => {
            let flag = if descriptor.declared_version().is_release_ready() {
                Style::new().green().apply_to("release-ready".to_string())
            } else {
                Style::new()
                    .yellow()
                    .apply_to("patch must be 0".to_string())
            };
            println!("  {} (v{}) {}", styled_name, descriptor.version, flag);
        }
        Err(e) => {
            // A broken descriptor keeps the script visible; release would
            // report the same failure per script
            println!("  {} {}", styled_name, Style::new().red().apply_to(e.to_string()));
        }
    }
}
