//! Pure construction of the version switcher tree.
//!
//! The produced markup follows the Read the Docs theme's "versions" flyout so
//! the theme stylesheet and toggle script pick it up unchanged:
//!
//! ```text
//! div.rst-versions
//! ├── span.rst-current-version   (book icon, release text, caret)
//! └── div.rst-other-versions
//!     ├── dl  "Versions"  -> strong > dd > a   (parsed version)
//!     └── dl  "Branches"  -> [strong >] dd > a[href]  per branch
//! ```

use docver_model::{BranchList, ParsedVersion, SwitcherConfig};
use tracing::debug;

use crate::dom::{Element, Node};

pub const VERSIONS_CLASS: &str = "rst-versions";
pub const CURRENT_VERSION_CLASS: &str = "rst-current-version";
pub const OTHER_VERSIONS_CLASS: &str = "rst-other-versions";

const ICON_LABEL: &str = " Other Versions";

/// Build the widget for `release` with the default base URL and default branch.
pub fn build_widget(release: &str, branches: &BranchList) -> Node {
    build_widget_with(release, &SwitcherConfig::with_branches(branches.clone()))
}

/// Build the widget for `release` using every setting in `config`.
pub fn build_widget_with(release: &str, config: &SwitcherConfig) -> Node {
    let parsed = config.parse_release(release);
    debug!(
        release,
        version = %parsed.version,
        branch = %parsed.branch,
        branch_count = config.branches.len(),
        "building version switcher"
    );

    Element::new("div")
        .attr("class", VERSIONS_CLASS)
        .attr("data-toggle", VERSIONS_CLASS)
        .attr("role", "note")
        .attr("aria-label", "versions")
        .child(current_version(release))
        .child(
            Element::new("div")
                .attr("class", OTHER_VERSIONS_CLASS)
                .child(versions_list(&parsed))
                .child(branches_list(&parsed, config)),
        )
        .into()
}

fn current_version(release: &str) -> Element {
    Element::new("span")
        .attr("class", CURRENT_VERSION_CLASS)
        .attr("data-toggle", CURRENT_VERSION_CLASS)
        .child(
            Element::new("span")
                .attr("class", "fa fa-book")
                .text_child(ICON_LABEL),
        )
        .text_child(format!("{release} "))
        .child(Element::new("span").attr("class", "fa fa-caret-down"))
}

fn versions_list(parsed: &ParsedVersion) -> Element {
    let entry = Element::new("dd").child(Element::new("a").text_child(parsed.version.as_str()));
    Element::new("dl")
        .child(Element::new("dt").text_child("Versions"))
        .child(Element::new("strong").child(entry))
}

fn branches_list(parsed: &ParsedVersion, config: &SwitcherConfig) -> Element {
    let mut list = Element::new("dl").child(Element::new("dt").text_child("Branches"));
    for name in config.branches.iter() {
        let entry = Element::new("dd").child(
            Element::new("a")
                .attr("href", config.branch_url(name))
                .text_child(name),
        );
        if parsed.is_current(name) {
            list.append_child(Element::new("strong").child(entry));
        } else {
            list.append_child(entry);
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(node: &Node) -> &Element {
        node.as_element().unwrap()
    }

    #[test]
    fn container_carries_theme_attributes() {
        let widget = build_widget("1.0", &BranchList::cohydra());
        let root = root(&widget);
        assert_eq!(root.tag, "div");
        assert_eq!(root.attribute("class"), Some("rst-versions"));
        assert_eq!(root.attribute("data-toggle"), Some("rst-versions"));
        assert_eq!(root.attribute("role"), Some("note"));
        assert_eq!(root.attribute("aria-label"), Some("versions"));
    }

    #[test]
    fn current_label_contains_release_verbatim() {
        let release = "1.2.0 - feature/wifi_802_11p";
        let widget = build_widget(release, &BranchList::cohydra());
        let label = root(&widget).find_by_class(CURRENT_VERSION_CLASS).unwrap();
        assert_eq!(label.text_content(), format!("{ICON_LABEL}{release} "));
    }

    #[test]
    fn version_entry_is_emphasized() {
        let widget = build_widget("1.2.0 - gh-pages", &BranchList::cohydra());
        let other = root(&widget).find_by_class(OTHER_VERSIONS_CLASS).unwrap();
        let lists: Vec<&Element> = other.child_elements().collect();
        let strong = lists[0].child_elements().nth(1).unwrap();
        assert_eq!(strong.tag, "strong");
        assert_eq!(strong.text_content(), "1.2.0");
    }

    #[test]
    fn one_link_per_branch_plus_version() {
        let widget = build_widget("1.0", &BranchList::cohydra());
        let links = root(&widget).descendants_by_tag("a");
        assert_eq!(links.len(), 10);
        assert!(links[0].attribute("href").is_none());
        assert!(links[1..].iter().all(|link| link.attribute("href").is_some()));
    }

    #[test]
    fn empty_branch_list_renders_header_only() {
        let widget = build_widget("1.0", &BranchList::new(Vec::<String>::new()));
        let other = root(&widget).find_by_class(OTHER_VERSIONS_CLASS).unwrap();
        let branches = other.child_elements().nth(1).unwrap();
        assert_eq!(branches.children.len(), 1);
    }
}
