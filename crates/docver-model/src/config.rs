//! Switcher configuration stored as `docver.toml`.
//!
//! Every field is optional; missing fields take the cohydra defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branches::BranchList;
use crate::error::{ModelError, Result};
use crate::release::{DEFAULT_BRANCH, ParsedVersion};

/// Base URL under which each branch's documentation is hosted.
pub const DEFAULT_BASE_URL: &str = "https://osmhpi.github.io/cohydra/";

/// Class of the sidebar element in Read the Docs themed pages.
pub const DEFAULT_SIDEBAR_CLASS: &str = "wy-nav-side";

/// Environment variable that overrides [`SwitcherConfig::base_url`].
pub const BASE_URL_ENV: &str = "DOCS_BASE_URL";

/// Everything the widget needs besides the release string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Prefix for branch links, always ending in `/`.
    pub base_url: String,
    /// Branch assumed when the release names none.
    pub default_branch: String,
    /// Class used to locate the sidebar container.
    pub sidebar_class: String,
    /// Branches listed in the widget.
    pub branches: BranchList,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            sidebar_class: DEFAULT_SIDEBAR_CLASS.to_string(),
            branches: BranchList::default(),
        }
    }
}

impl SwitcherConfig {
    /// Default configuration with a different branch list.
    #[must_use]
    pub fn with_branches(branches: BranchList) -> Self {
        Self {
            branches,
            ..Self::default()
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ModelError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), branches = config.branches.len(), "loaded config");
        config.normalized()
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the config as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ModelError::WriteConfig {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ModelError::WriteConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the base URL when an override (usually `DOCS_BASE_URL`) is set.
    #[must_use]
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.base_url = normalize_base_url(url);
        }
        self
    }

    /// Validate fields and normalize the base URL.
    pub fn normalized(mut self) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            return Err(ModelError::EmptyBaseUrl);
        }
        if self.default_branch.is_empty() {
            return Err(ModelError::EmptyDefaultBranch);
        }
        if self.sidebar_class.trim().is_empty() {
            return Err(ModelError::EmptySidebarClass);
        }
        self.branches.validate()?;
        self.base_url = normalize_base_url(&self.base_url);
        Ok(self)
    }

    /// Parse a release string using this config's default branch.
    #[must_use]
    pub fn parse_release(&self, release: &str) -> ParsedVersion {
        ParsedVersion::parse_with_default(release, &self.default_branch)
    }

    /// Link to the hosted documentation of `branch`.
    #[must_use]
    pub fn branch_url(&self, branch: &str) -> String {
        format!("{}{branch}", normalize_base_url(&self.base_url))
    }
}

/// Trim whitespace and force exactly one trailing slash.
#[must_use]
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}
