//! HTML and JSON serialization of widget trees.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::dom::{Element, Node};
use crate::error::Result;

/// Render `node` as a single line of HTML.
///
/// Every element is written with an explicit end tag, so empty elements such
/// as the caret `span` stay valid HTML. Text and attribute values are escaped.
pub fn render_html(node: &Node) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_node(&mut writer, node)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render `node` as pretty-printed JSON.
pub fn render_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Text { text } => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Node::Element(element) => write_element(writer, element)?,
    }
    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_elements_keep_end_tag() {
        let node: Node = Element::new("span").attr("class", "fa fa-caret-down").into();
        assert_eq!(
            render_html(&node).unwrap(),
            r#"<span class="fa fa-caret-down"></span>"#
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let node: Node = Element::new("a")
            .attr("href", "https://x.test/?a=1&b=2")
            .text_child("<b>bold</b>")
            .into();
        assert_eq!(
            render_html(&node).unwrap(),
            r#"<a href="https://x.test/?a=1&amp;b=2">&lt;b&gt;bold&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn json_tags_node_kinds() {
        let node: Node = Element::new("dt").text_child("Versions").into();
        let json: serde_json::Value = serde_json::from_str(&render_json(&node).unwrap()).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "dt");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["text"], "Versions");
    }
}
