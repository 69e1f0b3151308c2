//! Per-script packaging pipeline and batch orchestration
//!
//! Scripts are processed strictly one at a time: fingerprint, resolve,
//! descriptor rewrite, archive. Each script runs inside its own error
//! boundary; a failure is reported and excluded from the manifest without
//! aborting the batch. Only discovery of the scripts root is fatal.

use console::Style;

use crate::archive;
use crate::config::PackConfig;
use crate::descriptor::ScriptDescriptor;
use crate::error::{PackError, Result};
use crate::fingerprint;
use crate::manifest::{Manifest, ReleaseRecord};
use crate::progress::ProgressDisplay;
use crate::resolver::{self, PackStatus};

/// Outcome of processing one script in one run
#[derive(Debug, Clone)]
pub struct PackResult {
    pub name: String,
    pub version: String,
    pub uuid: String,
    pub content_hash: String,
    pub status: PackStatus,
}

impl PackResult {
    fn skipped(name: &str, declared: &str) -> Self {
        Self {
            name: name.to_string(),
            version: declared.to_string(),
            uuid: String::new(),
            content_hash: String::new(),
            status: PackStatus::Skipped,
        }
    }

    pub fn release_record(&self) -> ReleaseRecord {
        ReleaseRecord {
            name: self.name.clone(),
            version: self.version.clone(),
            uuid: self.uuid.clone(),
            content_hash: self.content_hash.clone(),
        }
    }
}

/// Aggregated counts for a batch run
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Enumerate script directories under the scripts root
///
/// Dot-prefixed entries and plain files are ignored. Names are sorted so
/// processing order and manifest row order are stable across platforms.
pub fn discover_scripts(config: &PackConfig) -> Result<Vec<String>> {
    let entries =
        std::fs::read_dir(&config.scripts_dir).map_err(|e| PackError::ScriptsDirUnreadable {
            path: config.scripts_dir.display().to_string(),
            reason: e.to_string(),
        })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackError::ScriptsDirUnreadable {
            path: config.scripts_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// Run the full pipeline for one script
///
/// The declared patch must be 0; otherwise the script is skipped before
/// any hashing happens. All other outcomes rewrite the descriptor with the
/// resolved version/identifier and archive the directory.
pub fn process_script(
    config: &PackConfig,
    name: &str,
    prev: Option<&ReleaseRecord>,
    force: bool,
) -> Result<PackResult> {
    let script_dir = config.script_dir(name);
    let mut descriptor = ScriptDescriptor::load(&script_dir)?;

    let declared = descriptor.declared_version();
    if !declared.is_release_ready() {
        return Ok(PackResult::skipped(name, &descriptor.version));
    }

    let content_hash = fingerprint::fingerprint_dir(&script_dir)?;
    let resolution = resolver::resolve(declared, &content_hash, prev, force);

    descriptor.set_release(&resolution.version, &resolution.uuid);
    descriptor.save(&script_dir)?;

    archive::archive_dir(&script_dir, &config.archive_path(name)).map_err(|e| {
        PackError::ArchiveFailed {
            name: name.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(PackResult {
        name: name.to_string(),
        version: resolution.version.to_string(),
        uuid: resolution.uuid,
        content_hash,
        status: resolution.status,
    })
}

fn status_line(result: &PackResult) -> String {
    match result.status {
        PackStatus::Updated => format!(
            "  {} {} -> {}",
            Style::new().bold().yellow().apply_to(&result.name),
            Style::new().green().apply_to("updated"),
            result.version
        ),
        PackStatus::Unchanged => format!(
            "  {} {} ({})",
            Style::new().bold().yellow().apply_to(&result.name),
            Style::new().dim().apply_to("unchanged"),
            result.version
        ),
        PackStatus::Skipped => format!(
            "  {} {}: declared version {} has a non-zero patch",
            Style::new().bold().yellow().apply_to(&result.name),
            Style::new().yellow().apply_to("skipped"),
            result.version
        ),
    }
}

/// Process every discovered script against an optional baseline manifest
///
/// Clears and recreates the output directory, packages each script in
/// order, writes the manifest when at least one script was packaged, and
/// prints the run summary.
pub fn run_batch(config: &PackConfig, baseline: Option<&Manifest>, force: bool) -> Result<RunSummary> {
    let scripts = discover_scripts(config)?;

    if config.output_dir.exists() {
        std::fs::remove_dir_all(&config.output_dir)?;
    }
    std::fs::create_dir_all(&config.output_dir)?;

    let prev_records = baseline.map(Manifest::by_name);

    let mut summary = RunSummary::default();
    let mut published = Vec::new();

    let total = scripts.len();
    let progress = ProgressDisplay::new(total as u64);

    for (index, name) in scripts.iter().enumerate() {
        progress.update_script(name, index + 1, total);

        let prev = prev_records
            .as_ref()
            .and_then(|records| records.get(name.as_str()).copied());

        match process_script(config, name, prev, force) {
            Ok(result) => {
                progress.println(&status_line(&result));
                match result.status {
                    PackStatus::Updated => summary.updated += 1,
                    PackStatus::Unchanged => summary.unchanged += 1,
                    PackStatus::Skipped => summary.skipped += 1,
                }
                if result.status != PackStatus::Skipped {
                    published.push(result.release_record());
                }
            }
            Err(e) => {
                progress.println(&format!(
                    "  {} {}: {}",
                    Style::new().bold().yellow().apply_to(name),
                    Style::new().red().apply_to("failed"),
                    e
                ));
                summary.failed += 1;
            }
        }

        progress.inc();
    }

    progress.finish();

    if !published.is_empty() {
        let path = Manifest::new(published).save(&config.output_dir)?;
        println!(
            "{} {}",
            Style::new().bold().apply_to("Manifest:"),
            path.display()
        );
    }

    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    let mut line = format!(
        "{} updated: {}, unchanged: {}, skipped: {}",
        Style::new().bold().green().apply_to("Done!"),
        summary.updated,
        summary.unchanged,
        summary.skipped
    );
    if summary.failed > 0 {
        line.push_str(&format!(
            ", {}",
            Style::new().red().apply_to(format!("failed: {}", summary.failed))
        ));
    }
    println!();
    println!("{line}");
}
