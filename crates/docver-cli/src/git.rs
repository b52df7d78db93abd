//! Discovery of branches with published documentation.
//!
//! Every branch on the documentation remote gets a build, so the switcher
//! lists the remote's branches with the default branch first.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use docver_model::BranchList;
use tracing::{debug, trace};

/// Result of inspecting a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredBranches {
    pub default_branch: String,
    pub branches: BranchList,
}

/// List the branches of `remote` in the repository at `repo`.
pub fn discover_branches(repo: &Path, remote: &str) -> Result<DiscoveredBranches> {
    let head = run_git(
        repo,
        &[
            "symbolic-ref",
            "--short",
            &format!("refs/remotes/{remote}/HEAD"),
        ],
    )?;
    let default_branch = parse_default_branch(&head, remote)
        .with_context(|| format!("remote `{remote}` has no HEAD branch"))?;

    let refs = run_git(
        repo,
        &[
            "for-each-ref",
            "--format=%(refname:lstrip=3)",
            &format!("refs/remotes/{remote}/"),
        ],
    )?;
    let branches = assemble_branches(&default_branch, &refs);
    debug!(
        remote,
        default_branch = %default_branch,
        branch_count = branches.len(),
        "discovered branches"
    );
    Ok(DiscoveredBranches {
        default_branch,
        branches,
    })
}

/// Extract the branch name from `git symbolic-ref --short` output such as `origin/master`.
pub fn parse_default_branch(output: &str, remote: &str) -> Option<String> {
    let short = output.trim();
    let branch = short
        .strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(short);
    if branch.is_empty() {
        None
    } else {
        Some(branch.to_string())
    }
}

/// Default branch first, then the remaining refs in git's order.
///
/// `HEAD` and blank lines are skipped, as is any repeat of the default branch.
pub fn assemble_branches(default_branch: &str, refs_output: &str) -> BranchList {
    let others = refs_output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "HEAD" && *name != default_branch);
    BranchList::new(std::iter::once(default_branch).chain(others))
}

fn run_git(repo: &Path, args: &[&str]) -> Result<String> {
    trace!(repo = %repo.display(), ?args, "running git");
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .context("failed to run git")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }
    String::from_utf8(output.stdout).context("git produced non-UTF-8 output")
}
