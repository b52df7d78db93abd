//! Mounting a rendered widget into the sidebar of an HTML page on disk.
//!
//! The page is scanned with `quick-xml` in a lenient mode that tolerates HTML
//! (void elements and valueless attributes). The fragment is spliced
//! in right before the end tag of the first element whose `class` contains
//! the sidebar class. The rest of the page is copied byte for byte.

use docver_model::SwitcherConfig;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::builder::build_widget_with;
use crate::error::{Result, WidgetError};
use crate::html::render_html;

/// Elements whose bodies are raw text and must not be tokenized as markup.
const RAW_TEXT_ELEMENTS: [&[u8]; 2] = [b"script", b"style"];

/// Build, render and inject the widget for `release` into `page`.
pub fn inject_widget(page: &str, release: &str, config: &SwitcherConfig) -> Result<String> {
    let fragment = render_html(&build_widget_with(release, config))?;
    inject_into_page(page, &config.sidebar_class, &fragment)
}

/// Insert `fragment` as the last child of the first element with `class`.
pub fn inject_into_page(page: &str, class: &str, fragment: &str) -> Result<String> {
    let offset = insertion_offset(page, class)?;
    debug!(class, offset, fragment_len = fragment.len(), "injecting fragment");
    let mut out = String::with_capacity(page.len() + fragment.len());
    out.push_str(&page[..offset]);
    out.push_str(fragment);
    out.push_str(&page[offset..]);
    Ok(out)
}

/// Byte offset of the end tag closing the first element with `class`.
///
/// The body of a `script` or `style` element runs to the first matching end
/// tag and is never tokenized. Scanning resumes from that end tag.
pub fn insertion_offset(page: &str, class: &str) -> Result<usize> {
    let lower = page.to_ascii_lowercase();
    // Offset of the reader's input within `page`.
    let mut base = 0;
    let mut reader = lenient_reader(page);

    // Tag name of the container and how many same-named elements are open.
    let mut open: Option<(Vec<u8>, usize)> = None;
    loop {
        let before = base + offset_of(reader.buffer_position());
        let event = reader.read_event().map_err(|source| WidgetError::Markup {
            position: reader
                .error_position()
                .saturating_add(u64::try_from(base).unwrap_or(u64::MAX)),
            source,
        })?;
        let mut resume_at = None;
        match event {
            Event::Start(start) => {
                let name = start.name().as_ref().to_ascii_lowercase();
                match open.as_mut() {
                    Some((open_name, depth)) => {
                        if *open_name == name {
                            *depth += 1;
                        }
                    }
                    None => {
                        if start_has_class(&start, class) {
                            open = Some((name.clone(), 1));
                        }
                    }
                }
                if RAW_TEXT_ELEMENTS.contains(&name.as_slice()) {
                    let body_start = base + offset_of(reader.buffer_position());
                    resume_at = Some(raw_text_end(&lower, body_start, &name));
                }
            }
            Event::End(end) => {
                if let Some((name, depth)) = open.as_mut() {
                    if name.eq_ignore_ascii_case(end.name().as_ref()) {
                        *depth -= 1;
                        if *depth == 0 {
                            return Ok(before);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        if let Some(position) = resume_at {
            base = position;
            reader = lenient_reader(&page[position..]);
        }
    }

    match open {
        Some(_) => Err(WidgetError::UnclosedContainer {
            class: class.to_string(),
        }),
        None => Err(WidgetError::ContainerNotFound {
            class: class.to_string(),
        }),
    }
}

fn lenient_reader(input: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    config.allow_dangling_amp = true;
    reader
}

fn offset_of(position: u64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}

/// Start of the end tag closing a raw text body, or the end of the page.
fn raw_text_end(lower: &str, body_start: usize, tag: &[u8]) -> usize {
    let mut close_tag = b"</".to_vec();
    close_tag.extend_from_slice(tag);
    lower.as_bytes()[body_start..]
        .windows(close_tag.len())
        .position(|window| window == close_tag.as_slice())
        .map_or(lower.len(), |found| body_start + found)
}

fn start_has_class(start: &BytesStart<'_>, class: &str) -> bool {
    let mut attributes = start.html_attributes();
    attributes.with_checks(false);
    attributes.flatten().any(|attr| {
        attr.key.as_ref().eq_ignore_ascii_case(b"class")
            && std::str::from_utf8(&attr.value)
                .is_ok_and(|value| value.split_ascii_whitespace().any(|token| token == class))
    })
}
