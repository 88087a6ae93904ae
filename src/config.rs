use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Component, Path};

use crate::domain::AssetMapping;

pub fn load_mapping(path: &Path) -> std::io::Result<AssetMapping> {
    let text = fs::read_to_string(path)?;
    parse_mapping(&text).map_err(|e| {
        Error::new(
            e.kind(),
            format!("Invalid mapping file {}: {e}", path.display()),
        )
    })
}

pub fn parse_mapping(text: &str) -> std::io::Result<AssetMapping> {
    let mapping: AssetMapping = serde_yaml::from_str(text)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;
    validate(&mapping)?;
    Ok(mapping)
}

pub fn mapping_to_yaml(mapping: &AssetMapping) -> std::io::Result<String> {
    serde_yaml::to_string(mapping).map_err(|e| {
        Error::new(
            ErrorKind::Other,
            format!("Failed to serialize mapping: {e}"),
        )
    })
}

/// Every path must stay below the asset root.
fn validate(mapping: &AssetMapping) -> std::io::Result<()> {
    for group in &mapping.groups {
        for path in std::iter::once(&group.source).chain(&group.destinations) {
            let escapes = path.as_os_str().is_empty()
                || path.components().any(|c| {
                    matches!(
                        c,
                        Component::ParentDir | Component::RootDir | Component::Prefix(_)
                    )
                });
            if escapes {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("path must be relative to the asset root: {:?}", path),
                ));
            }
        }
    }
    Ok(())
}
