//! Page injection and config handling shared by the `docver` commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use docver_model::{BASE_URL_ENV, SwitcherConfig};
use docver_widget::inject_widget;

use crate::git::DiscoveredBranches;
use crate::types::{InjectResult, PageOutcome};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "docver.toml";

/// Mount the widget for `release` into every page, recording each outcome.
pub fn inject_pages(pages: &[PathBuf], release: &str, config: &SwitcherConfig) -> InjectResult {
    let pages = pages
        .iter()
        .map(|path| inject_page(path, release, config))
        .collect();
    let result = InjectResult {
        release: release.to_string(),
        pages,
    };
    info!(
        pages = result.pages.len(),
        failed = result.failed(),
        "injection complete"
    );
    result
}

/// Failures are recorded per page so one broken page does not stop the run.
fn inject_page(path: &Path, release: &str, config: &SwitcherConfig) -> PageOutcome {
    let span = info_span!("page", page = %path.display());
    let _guard = span.enter();
    match try_inject_page(path, release, config) {
        Ok(bytes_added) => {
            info!(bytes_added, "widget mounted");
            PageOutcome {
                path: path.to_path_buf(),
                bytes_added,
                error: None,
            }
        }
        Err(error) => {
            warn!(error = %format!("{error:#}"), "page skipped");
            PageOutcome {
                path: path.to_path_buf(),
                bytes_added: 0,
                error: Some(format!("{error:#}")),
            }
        }
    }
}

fn try_inject_page(path: &Path, release: &str, config: &SwitcherConfig) -> Result<usize> {
    let page = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let updated = inject_widget(&page, release, config)?;
    fs::write(path, &updated).with_context(|| format!("write {}", path.display()))?;
    Ok(updated.len() - page.len())
}

/// Replace the branch list and default branch in `config` and save it.
///
/// Every other setting in `config` is written back unchanged.
pub fn store_branches(
    path: &Path,
    mut config: SwitcherConfig,
    discovered: DiscoveredBranches,
) -> Result<SwitcherConfig> {
    config.default_branch = discovered.default_branch;
    config.branches = discovered.branches;
    config
        .save_to(path)
        .with_context(|| format!("save {}", path.display()))?;
    info!(
        config = %path.display(),
        default_branch = %config.default_branch,
        branch_count = config.branches.len(),
        "branch list stored"
    );
    Ok(config)
}

/// Load the switcher config and apply the `DOCS_BASE_URL` override.
pub fn load_config(path: Option<&Path>) -> Result<SwitcherConfig> {
    resolve_config(path, base_url_override().as_deref())
}

/// Load the switcher config and apply an explicit base URL override.
///
/// Without `path`, `docver.toml` in the working directory is used when it
/// exists and the defaults otherwise.
pub fn resolve_config(path: Option<&Path>, base_url: Option<&str>) -> Result<SwitcherConfig> {
    let config = match path {
        Some(path) => SwitcherConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            SwitcherConfig::load_or_default(&path)
                .with_context(|| format!("load config {}", path.display()))?
        }
    };
    let config = config.with_base_url_override(base_url);
    let duplicates = config.branches.duplicates();
    if !duplicates.is_empty() {
        warn!(?duplicates, "branch list contains duplicates");
    }
    Ok(config)
}

/// Value of `DOCS_BASE_URL`, when set.
pub fn base_url_override() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok()
}
