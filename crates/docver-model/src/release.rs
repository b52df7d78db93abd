//! Parsing of the release string published by the documentation host.
//!
//! The host publishes a single value such as `1.2.0` or
//! `1.2.0 - feature/lxd-nodes`. Everything before the first separator is the
//! version; everything after it is the branch, which falls back to a default
//! when absent or empty.

use serde::{Deserialize, Serialize};

/// Literal separator between the version and branch tokens.
pub const RELEASE_SEPARATOR: &str = " - ";

/// Branch assumed when the release string names none.
pub const DEFAULT_BRANCH: &str = "master";

/// A release string split into its version and branch parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVersion {
    /// Text before the first separator (may be empty).
    pub version: String,
    /// Text after the first separator, never empty.
    pub branch: String,
}

impl ParsedVersion {
    /// Parse a release string, defaulting the branch to [`DEFAULT_BRANCH`].
    #[must_use]
    pub fn parse(release: &str) -> Self {
        Self::parse_with_default(release, DEFAULT_BRANCH)
    }

    /// Parse a release string with a caller-supplied default branch.
    ///
    /// The separator may appear inside the branch name; only the first
    /// occurrence splits. An empty `default_branch` is replaced by
    /// [`DEFAULT_BRANCH`] so the parsed branch is never empty.
    #[must_use]
    pub fn parse_with_default(release: &str, default_branch: &str) -> Self {
        let (version, branch) = match release.split_once(RELEASE_SEPARATOR) {
            Some((version, rest)) => (version, rest),
            None => (release, ""),
        };
        let branch = if !branch.is_empty() {
            branch
        } else if !default_branch.is_empty() {
            default_branch
        } else {
            DEFAULT_BRANCH
        };
        Self {
            version: version.to_string(),
            branch: branch.to_string(),
        }
    }

    /// True when `name` is the branch this release was built from.
    #[must_use]
    pub fn is_current(&self, name: &str) -> bool {
        self.branch == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_only_defaults_to_master() {
        let parsed = ParsedVersion::parse("1.2.0");
        assert_eq!(parsed.version, "1.2.0");
        assert_eq!(parsed.branch, "master");
    }

    #[test]
    fn version_and_branch() {
        let parsed = ParsedVersion::parse("1.2.0 - feature/wifi_802_11p");
        assert_eq!(parsed.version, "1.2.0");
        assert_eq!(parsed.branch, "feature/wifi_802_11p");
    }

    #[test]
    fn separator_inside_branch_is_kept() {
        let parsed = ParsedVersion::parse("0.3 - topic - part two");
        assert_eq!(parsed.version, "0.3");
        assert_eq!(parsed.branch, "topic - part two");
    }

    #[test]
    fn trailing_separator_falls_back() {
        let parsed = ParsedVersion::parse("0.3 - ");
        assert_eq!(parsed.version, "0.3");
        assert_eq!(parsed.branch, "master");
    }

    #[test]
    fn empty_release() {
        let parsed = ParsedVersion::parse("");
        assert_eq!(parsed.version, "");
        assert_eq!(parsed.branch, "master");
    }

    #[test]
    fn custom_default_branch() {
        let parsed = ParsedVersion::parse_with_default("2.0", "main");
        assert_eq!(parsed.branch, "main");
        let parsed = ParsedVersion::parse_with_default("2.0", "");
        assert_eq!(parsed.branch, "master");
    }

    #[test]
    fn hyphen_without_spaces_is_not_a_separator() {
        let parsed = ParsedVersion::parse("1.0-rc1");
        assert_eq!(parsed.version, "1.0-rc1");
        assert_eq!(parsed.branch, "master");
    }
}
