use crate::agents::{DocsConfigEditor, VersionsReaderAgent, WebsiteInfo, WebsiteScannerAgent};
use crate::docs::{DocsVersion, VersionsBlock};
use crate::error::{ConfigRegion, DocverError, Result};
use colored::Colorize;
use std::path::Path;

/// Everything `docver <VERSION>` was invoked with.
#[derive(Debug, Clone)]
pub struct SetVersionOptions<'a> {
    pub version: Option<&'a str>,
    pub website_dir: &'a Path,
    pub config_file: &'a Path,
    pub versions_file: &'a Path,
    pub sync: SyncOptions,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub lenient: bool,
    pub dry_run: bool,
}

/// Outcome of one sync run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub block: VersionsBlock,
    pub skipped: Vec<String>,
    pub unmatched: Vec<ConfigRegion>,
    pub changed: bool,
    pub written: bool,
}

/// Validates the version argument. Nothing touches the disk before this passes.
pub fn parse_version(raw: Option<&str>) -> Result<DocsVersion> {
    match raw {
        Some(raw) => DocsVersion::parse(raw),
        None => Err(DocverError::InvalidVersion(String::new())),
    }
}

/// Execute the set-version workflow
pub fn execute_set_version(options: &SetVersionOptions<'_>) -> Result<()> {
    let version = parse_version(options.version)?;

    println!(
        "{}",
        format!("Setting current docs version to {version}...")
            .cyan()
            .bold()
    );

    println!("\n{}", "1. Resolving website files...".yellow());
    let info = WebsiteScannerAgent::new(options.website_dir)
        .with_config_file(options.config_file)
        .with_versions_file(options.versions_file)
        .resolve()?;
    print_website_info(&info);
    println!("{}", "✓ Website directory is valid".green());

    let report = sync_docs_version(
        &version,
        &info.config_path,
        &info.versions_path,
        options.sync,
    )?;

    print_sync_report(&report);

    if report.written {
        println!(
            "\n{}",
            format!(
                "Updated {}: current label '{}', versions synced with {}.",
                info.config_name(),
                version,
                info.versions_name()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "Dry run: {} not written (current label '{}', versions from {}).",
                info.config_name(),
                version,
                info.versions_name()
            )
            .yellow()
            .bold()
        );
    }

    Ok(())
}

/// Rewrites the current label and versions block of `config_path`.
///
/// Only the two paths given are read; `versions_path` may be absent.
pub fn sync_docs_version(
    version: &DocsVersion,
    config_path: &Path,
    versions_path: &Path,
    options: SyncOptions,
) -> Result<SyncReport> {
    let editor = DocsConfigEditor::new(config_path).lenient(options.lenient);

    println!("\n{}", "2. Reading docs config...".yellow());
    let mut edit = editor.load()?;
    println!("{}", "✓ Config loaded".green());

    println!("\n{}", "3. Updating current version label...".yellow());
    if editor.set_current_label(&mut edit, version)? {
        println!("{}", format!("✓ current.label set to '{version}'").green());
    } else {
        print_unmatched(ConfigRegion::CurrentLabel);
    }

    println!("\n{}", "4. Loading archived versions...".yellow());
    let archived = VersionsReaderAgent::new(versions_path).read();
    println!("   Found {} archived version(s)", archived.labels.len());
    if std::env::var("DOCVER_VERBOSE").is_ok() {
        for label in &archived.labels {
            println!("   • {}", label.bright_cyan());
        }
        for entry in &archived.skipped {
            println!("   {} {}", "skipped".dimmed(), entry.dimmed());
        }
    }

    println!("\n{}", "5. Rebuilding versions block...".yellow());
    let block = VersionsBlock::new(version.clone(), archived.labels);
    if editor.replace_versions_block(&mut edit, &block)? {
        println!(
            "{}",
            format!("✓ versions block now lists {} entries", block.entry_count()).green()
        );
    } else {
        print_unmatched(ConfigRegion::VersionsBlock);
    }

    let written = if options.dry_run {
        println!("\n{}", "6. Dry run, skipping write".yellow());
        false
    } else {
        println!("\n{}", "6. Writing docs config...".yellow());
        editor.write(&edit)?;
        println!("{}", "✓ Config written".green());
        true
    };

    Ok(SyncReport {
        block,
        skipped: archived.skipped,
        unmatched: edit.unmatched().to_vec(),
        changed: edit.is_changed(),
        written,
    })
}

fn print_website_info(info: &WebsiteInfo) {
    if std::env::var("DOCVER_VERBOSE").is_ok() {
        let dim = |path: &Path| path.display().to_string().dimmed();
        println!("   website:  {}", dim(&info.website_dir));
        println!("   config:   {}", dim(&info.config_path));
        println!("   versions: {}", dim(&info.versions_path));
    }
}

fn print_unmatched(region: ConfigRegion) {
    println!(
        "{}",
        format!("⚠ Pattern {region} not found, leaving it unchanged").red()
    );
}

fn print_sync_report(report: &SyncReport) {
    println!("\n{}", "Summary:".cyan().bold());
    println!(
        "  current: {}",
        report.block.current().as_str().green().bold()
    );
    if report.block.archived().is_empty() {
        println!("  archived: {}", "(none)".dimmed());
    } else {
        println!("  archived: {}", report.block.archived().join(", ").cyan());
    }

    if !report.skipped.is_empty() {
        let skipped = report.skipped.len();
        let message = format!("{skipped} unusable versions.json entries skipped");
        println!("  {}", message.yellow());
    }

    if !report.unmatched.is_empty() {
        println!(
            "  {}",
            format!("{} region(s) not found in config", report.unmatched.len()).yellow()
        );
    }

    if !report.changed {
        println!("  {}", "Config already up to date".dimmed());
    }
}
