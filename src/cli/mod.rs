//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - release: Release command arguments
//! - pack: Single-script pack command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod pack;
pub mod release;

pub use completions::CompletionsArgs;
pub use pack::PackArgs;
pub use release::ReleaseArgs;

/// scriptpack - release packager for script bundles
///
/// Packages a directory of script bundles for release: detects content
/// changes, derives the next published version, and produces archives plus
/// a hashes.json manifest.
#[derive(Parser, Debug)]
#[command(
    name = "scriptpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Release packager for script bundles",
    long_about = "scriptpack packages a directory of script bundles for release. It fingerprints \
                  each script's content, derives the next published version from the declared \
                  version and the previous release manifest, stamps a stable release identifier \
                  into the descriptor, and emits one archive per script plus a hashes.json manifest.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  scriptpack list                               \x1b[90m# Scripts with declared versions\x1b[0m\n   \
                  scriptpack release --prev-hashes hashes.json  \x1b[90m# Change-detected release\x1b[0m\n   \
                  scriptpack all                                \x1b[90m# Force-republish everything\x1b[0m\n   \
                  scriptpack pack clock-widget                  \x1b[90m# Package one script\x1b[0m\n   \
                  scriptpack --test release                     \x1b[90m# Dry run in a sandbox copy\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Scripts root directory (one sub-directory per script)
    #[arg(
        long,
        short = 's',
        global = true,
        env = "SCRIPTPACK_SCRIPTS_DIR",
        default_value = "scripts"
    )]
    pub scripts_dir: PathBuf,

    /// Output directory for archives and the manifest
    #[arg(
        long,
        short = 'o',
        global = true,
        env = "SCRIPTPACK_OUTPUT_DIR",
        default_value = "dist"
    )]
    pub output_dir: PathBuf,

    /// Operate on a sandbox copy of the scripts tree (never mutates real files)
    #[arg(long, global = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List scripts with their declared version and release readiness
    List,

    /// Release every script, detecting changes against a previous manifest
    Release(ReleaseArgs),

    /// Force-republish every script as if no history existed
    All,

    /// Package a single script (force semantics)
    Pack(PackArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
