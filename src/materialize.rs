use owo_colors::{OwoColorize, Stream};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{AssetMapping, Report};
use crate::fs::{copy_placeholder, exists};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub dry_run: bool,
}

/// Copies each group's base asset over every destination that does not exist
/// yet. Existing files are never touched. The first failed copy aborts the run.
///
/// A dry run reports the same outcome a real run would: paths it would have
/// created count as present for the rest of the run.
pub fn materialize(root: &Path, mapping: &AssetMapping, options: Options) -> std::io::Result<Report> {
    let mut report = Report::default();
    let mut created: HashSet<PathBuf> = HashSet::new();
    let present = |path: &Path, created: &HashSet<PathBuf>| exists(path) || created.contains(path);

    for group in &mapping.groups {
        let src = root.join(&group.source);
        if !present(&src, &created) {
            if group.optional {
                report.silenced_sources.push(group.source.clone());
            } else {
                warn_missing(&src);
                report.missing_sources.push(group.source.clone());
            }
            continue;
        }

        for dst_name in &group.destinations {
            let dst = root.join(dst_name);
            if present(&dst, &created) {
                report.skipped.push(dst_name.clone());
                continue;
            }
            if options.dry_run {
                println!("Would create {}", dst_name.display());
            } else {
                copy_placeholder(&src, &dst)?;
                println!("Created {}", dst_name.display());
            }
            report.created.push(dst_name.clone());
            created.insert(dst);
        }
    }

    Ok(report)
}

fn warn_missing(src: &Path) {
    eprintln!(
        "{} Missing base: {}",
        "Warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
        src.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetGroup;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn arena_mapping() -> AssetMapping {
        AssetMapping::new(vec![AssetGroup::new(
            "images/bg_arena.png",
            ["bg/arena_bronze.png", "bg/arena_silver.png", "bg/arena_gold.png"],
        )])
    }

    #[test]
    fn test_creates_missing_destinations() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/bg_arena.png"), b"arena bytes").unwrap();

        let report = materialize(dir.path(), &arena_mapping(), Options::default()).unwrap();

        assert_eq!(report.created.len(), 3);
        for name in ["arena_bronze", "arena_silver", "arena_gold"] {
            let data = fs::read(dir.path().join(format!("bg/{name}.png"))).unwrap();
            assert_eq!(data, b"arena bytes");
        }
    }

    #[test]
    fn test_existing_destination_untouched() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::create_dir_all(dir.path().join("bg")).unwrap();
        fs::write(dir.path().join("images/bg_arena.png"), b"arena bytes").unwrap();
        fs::write(dir.path().join("bg/arena_silver.png"), b"real silver art").unwrap();

        let report = materialize(dir.path(), &arena_mapping(), Options::default()).unwrap();

        assert_eq!(report.skipped, vec![PathBuf::from("bg/arena_silver.png")]);
        assert_eq!(report.created.len(), 2);
        assert_eq!(
            fs::read(dir.path().join("bg/arena_silver.png")).unwrap(),
            b"real silver art"
        );
    }

    #[test]
    fn test_missing_source_skips_whole_group() {
        let dir = TempDir::new().unwrap();

        let report = materialize(dir.path(), &arena_mapping(), Options::default()).unwrap();

        assert!(report.is_noop());
        assert_eq!(report.missing_sources, vec![PathBuf::from("images/bg_arena.png")]);
        assert!(report.silenced_sources.is_empty());
        assert!(!dir.path().join("bg").exists());
    }

    #[test]
    fn test_second_run_is_noop() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/bg_arena.png"), b"arena bytes").unwrap();

        let first = materialize(dir.path(), &arena_mapping(), Options::default()).unwrap();
        let second = materialize(dir.path(), &arena_mapping(), Options::default()).unwrap();

        assert_eq!(first.created.len(), 3);
        assert!(second.is_noop());
        assert_eq!(second.skipped.len(), 3);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/bg_arena.png"), b"arena bytes").unwrap();

        let report = materialize(dir.path(), &arena_mapping(), Options { dry_run: true }).unwrap();

        assert_eq!(report.created.len(), 3);
        assert!(!dir.path().join("bg").exists());
    }

    #[test]
    fn test_optional_group_missing_source() {
        let dir = TempDir::new().unwrap();
        let mapping = AssetMapping::new(vec![
            AssetGroup::new("lobby_bg.png", ["shop_bg.png"]).optional(),
        ]);

        let report = materialize(dir.path(), &mapping, Options::default()).unwrap();

        assert!(report.is_noop());
        assert!(report.missing_sources.is_empty());
        assert_eq!(report.silenced_sources, vec![PathBuf::from("lobby_bg.png")]);
        assert!(!dir.path().join("shop_bg.png").exists());
    }

    #[test]
    fn test_dry_run_matches_real_run() {
        // a.png is listed twice and is also the base of the next group
        let mapping = AssetMapping::new(vec![
            AssetGroup::new("base.png", ["a.png", "a.png"]),
            AssetGroup::new("a.png", ["b.png"]),
        ]);
        let dry_dir = TempDir::new().unwrap();
        let real_dir = TempDir::new().unwrap();
        fs::write(dry_dir.path().join("base.png"), b"base").unwrap();
        fs::write(real_dir.path().join("base.png"), b"base").unwrap();

        let dry = materialize(dry_dir.path(), &mapping, Options { dry_run: true }).unwrap();
        let real = materialize(real_dir.path(), &mapping, Options::default()).unwrap();

        assert_eq!(dry, real);
        assert_eq!(real.created, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(real.skipped, vec![PathBuf::from("a.png")]);
        assert!(dry.missing_sources.is_empty());
        assert!(!dry_dir.path().join("a.png").exists());
        assert_eq!(fs::read(real_dir.path().join("b.png")).unwrap(), b"base");
    }

    #[test]
    fn test_copy_failure_propagates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.png"), b"x").unwrap();
        // a plain file where a parent directory is needed
        fs::write(dir.path().join("blocker"), b"").unwrap();
        let mapping = AssetMapping::new(vec![AssetGroup::new(
            "base.png",
            ["blocker/out.png"],
        )]);

        assert!(materialize(dir.path(), &mapping, Options::default()).is_err());
    }
}
