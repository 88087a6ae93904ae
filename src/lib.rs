use clap::Parser;
use std::path::{Path, PathBuf};
use crate::catalog::{builtin_mapping, DEFAULT_ROOT};
use crate::config::{load_mapping, mapping_to_yaml};
use crate::domain::{AssetMapping, Report};
use crate::materialize::{materialize, Options};

pub mod catalog;
pub mod config;
pub mod domain;
pub mod fs;
pub mod materialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fill in missing game assets with placeholder copies", long_about = None)]
pub struct Args {
    /// Asset root that mapping paths are relative to
    #[arg(short, long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// YAML mapping to use instead of the built-in tables
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Report what would be created without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the effective mapping as YAML and exit
    #[arg(long)]
    pub print_mapping: bool,
}

pub fn resolve_mapping(mapping: Option<&Path>) -> std::io::Result<AssetMapping> {
    match mapping {
        Some(path) => load_mapping(path),
        None => Ok(builtin_mapping()),
    }
}

pub fn run(args: &Args) -> std::io::Result<Option<Report>> {
    let mapping = resolve_mapping(args.mapping.as_deref())?;

    if args.print_mapping {
        print!("{}", mapping_to_yaml(&mapping)?);
        return Ok(None);
    }

    println!(
        "Materializing {} placeholders in {}",
        mapping.placeholder_count(),
        args.root.display()
    );
    let report = materialize(&args.root, &mapping, Options { dry_run: args.dry_run })?;
    println!("{}", summary(&report));
    Ok(Some(report))
}

/// Optional bases are counted apart from the ones that were warned about.
pub fn summary(report: &Report) -> String {
    let mut line = format!(
        "Done: {} created, {} already present, {} missing base(s)",
        report.created.len(),
        report.skipped.len(),
        report.missing_sources.len()
    );
    if !report.silenced_sources.is_empty() {
        line.push_str(&format!(
            ", {} optional base(s) absent",
            report.silenced_sources.len()
        ));
    }
    line.push('.');
    line
}
