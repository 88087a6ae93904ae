use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One base asset and the placeholders it stands in for.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssetGroup {
    pub source: PathBuf,
    /// Optional groups are skipped quietly when the source is missing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    pub destinations: Vec<PathBuf>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl AssetGroup {
    pub fn new<S, D, I>(source: S, destinations: I) -> Self
    where
        S: Into<PathBuf>,
        D: Into<PathBuf>,
        I: IntoIterator<Item = D>,
    {
        AssetGroup {
            source: source.into(),
            optional: false,
            destinations: destinations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssetMapping {
    pub groups: Vec<AssetGroup>,
}

impl AssetMapping {
    pub fn new(groups: Vec<AssetGroup>) -> Self {
        AssetMapping { groups }
    }

    pub fn extend(&mut self, other: AssetMapping) {
        self.groups.extend(other.groups);
    }

    pub fn placeholder_count(&self) -> usize {
        self.groups.iter().map(|g| g.destinations.len()).sum()
    }
}

/// What a run did, destination by destination.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Required bases that were absent; each one was warned about.
    pub missing_sources: Vec<PathBuf>,
    /// Absent bases of optional groups, skipped without a warning.
    pub silenced_sources: Vec<PathBuf>,
}

impl Report {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}
