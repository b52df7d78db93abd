//! Minimal in-memory DOM used to describe and mount the widget.
//!
//! Attributes keep insertion order so rendering is deterministic.

use serde::{Deserialize, Serialize};

/// A node in the tree: either an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text { .. } => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing value in place.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text_child(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// True when the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|token| token == class))
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first, pre-order search including `self`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find_by_class(class))
    }

    /// Mutable variant of [`Element::find_by_class`].
    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.find_by_class_mut(class))
    }

    /// All descendant elements (excluding `self`) with the given tag, in document order.
    pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_by_tag(tag, &mut out);
        out
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_by_tag(tag, out);
        }
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Element {
        Element::new("body")
            .child(
                Element::new("nav")
                    .attr("class", "wy-nav-side stickynav")
                    .child(Element::new("div").attr("class", "wy-side-scroll")),
            )
            .child(Element::new("section").attr("class", "wy-nav-content-wrap"))
    }

    #[test]
    fn class_match_uses_whole_tokens() {
        let nav = Element::new("nav").attr("class", "wy-nav-side stickynav");
        assert!(nav.has_class("wy-nav-side"));
        assert!(nav.has_class("stickynav"));
        assert!(!nav.has_class("wy-nav"));
    }

    #[test]
    fn find_by_class_returns_first_match() {
        let body = page();
        let found = body.find_by_class("wy-nav-side").unwrap();
        assert_eq!(found.tag, "nav");
        assert!(body.find_by_class("missing").is_none());
    }

    #[test]
    fn set_attribute_replaces_in_place() {
        let element = Element::new("a")
            .attr("href", "x")
            .attr("class", "c")
            .attr("href", "y");
        assert_eq!(
            element.attributes,
            vec![
                ("href".to_string(), "y".to_string()),
                ("class".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let element = Element::new("p")
            .text_child("a")
            .child(Element::new("b").text_child("c"))
            .text_child("d");
        assert_eq!(element.text_content(), "acd");
    }
}
