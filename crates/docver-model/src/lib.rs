pub mod branches;
pub mod config;
pub mod error;
pub mod release;

pub use branches::{BranchList, COHYDRA_BRANCHES};
pub use config::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_SIDEBAR_CLASS, SwitcherConfig, normalize_base_url,
};
pub use error::{ModelError, Result};
pub use release::{DEFAULT_BRANCH, ParsedVersion, RELEASE_SEPARATOR};
