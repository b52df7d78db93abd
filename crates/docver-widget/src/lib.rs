//! Version switcher widget for Read the Docs themed documentation.
//!
//! Construction is pure ([`build_widget`]); attaching the result is a separate
//! step, either into an in-memory tree ([`mount`]) or into the sidebar of a
//! generated HTML page ([`inject_widget`]).

pub mod builder;
pub mod dom;
pub mod error;
pub mod html;
pub mod inject;
pub mod mount;

pub use builder::{
    CURRENT_VERSION_CLASS, OTHER_VERSIONS_CLASS, VERSIONS_CLASS, build_widget, build_widget_with,
};
pub use dom::{Element, Node};
pub use error::{Result, WidgetError};
pub use html::{render_html, render_json};
pub use inject::{inject_into_page, inject_widget, insertion_offset};
pub use mount::{mount, mount_by_class};
