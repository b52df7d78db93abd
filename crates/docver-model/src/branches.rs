//! Ordered list of branches that have hosted documentation builds.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Branches published for the cohydra documentation, in display order.
pub const COHYDRA_BRANCHES: [&str; 9] = [
    "master",
    "bugfix/sumo-gui",
    "docker-pull-optional",
    "feature/lxd-nodes",
    "feature/non-root-user",
    "feature/sumo/step-length",
    "feature/wifi_802_11p",
    "gh-pages",
    "travis-basic-example",
];

/// Branch names in display order.
///
/// Duplicates are tolerated; they render as repeated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchList(Vec<String>);

impl BranchList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn cohydra() -> Self {
        Self::new(COHYDRA_BRANCHES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|branch| branch == name)
    }

    /// Names that occur more than once, in order of their second appearance.
    #[must_use]
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut reported = BTreeSet::new();
        let mut out = Vec::new();
        for name in self.iter() {
            if !seen.insert(name) && reported.insert(name) {
                out.push(name);
            }
        }
        out
    }

    /// Reject blank names.
    pub fn validate(&self) -> Result<()> {
        for (position, name) in self.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ModelError::BlankBranch { position });
            }
        }
        Ok(())
    }
}

impl Default for BranchList {
    fn default() -> Self {
        Self::cohydra()
    }
}
