//! Attaching a built widget to a container.
//!
//! Mounting never deduplicates: mounting twice leaves two sibling widgets.

use tracing::debug;

use crate::dom::{Element, Node};
use crate::error::{Result, WidgetError};

/// Append `widget` as the last child of `container`.
pub fn mount(widget: Node, container: &mut Element) {
    debug!(container = %container.tag, "mounting widget");
    container.append_child(widget);
}

/// Mount into the first element under `root` (inclusive) carrying `class`.
pub fn mount_by_class(widget: Node, root: &mut Element, class: &str) -> Result<()> {
    let container = root
        .find_by_class_mut(class)
        .ok_or_else(|| WidgetError::ContainerNotFound {
            class: class.to_string(),
        })?;
    mount(widget, container);
    Ok(())
}
