//! Property tests for release string parsing.

use docver_model::{ParsedVersion, RELEASE_SEPARATOR};
use proptest::prelude::*;

proptest! {
    #[test]
    fn branch_is_everything_after_first_separator(
        version in "[0-9a-z.]{0,8}",
        branch in "[a-z_/]{1,12}( - [a-z]{1,6})?",
    ) {
        let release = format!("{version}{RELEASE_SEPARATOR}{branch}");
        let parsed = ParsedVersion::parse(&release);
        prop_assert_eq!(parsed.version, version);
        prop_assert_eq!(parsed.branch, branch);
    }

    #[test]
    fn without_separator_branch_is_master(release in "[0-9a-zA-Z._/-]{0,20}") {
        prop_assume!(!release.contains(RELEASE_SEPARATOR));
        let parsed = ParsedVersion::parse(&release);
        prop_assert_eq!(parsed.version, release);
        prop_assert_eq!(parsed.branch, "master");
    }

    #[test]
    fn branch_never_empty(release in ".{0,24}") {
        let parsed = ParsedVersion::parse(&release);
        prop_assert!(!parsed.branch.is_empty());
    }
}
