//! scriptpack - release packager for script bundles
//!
//! Fingerprints each script directory, derives the next published version
//! from the declared version and the previous release manifest, stamps a
//! stable release identifier into the descriptor, and emits one archive per
//! script plus a hashes.json manifest.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod config;
mod descriptor;
mod error;
mod fingerprint;
mod fsutil;
mod manifest;
mod packager;
mod progress;
mod resolver;
mod version;

use cli::{Cli, Commands};
use config::PackConfig;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let Cli {
        scripts_dir,
        output_dir,
        test,
        command,
    } = cli;

    match command {
        // No filesystem roots needed, and no sandbox copy either
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Version => commands::version::run(),

        command => {
            let mut config = PackConfig::new(scripts_dir, output_dir);
            if test {
                config = config.sandboxed()?;
            }

            match command {
                Commands::List => commands::list::run(&config),
                Commands::Release(args) => commands::release::run(&config, args),
                Commands::All => commands::all::run(&config),
                Commands::Pack(args) => commands::single::run(&config, args),
                Commands::Completions(_) | Commands::Version => Ok(()),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
