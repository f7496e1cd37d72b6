//! `title` attribute extraction from SVG assets.
//!
//! Each icon asset carries its human-readable name as a `title` attribute on
//! the `<svg>` element:
//!
//! ```xml
//! <svg xmlns="http://www.w3.org/2000/svg" title="Python" viewBox="0 0 256 256">...</svg>
//! ```
//!
//! Only the attribute is read. `<title>` child elements are ignored.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use skills_core::{Error, Result};

const SVG_ELEMENT: &[u8] = b"svg";
const TITLE_ATTRIBUTE: &[u8] = b"title";

/// Read the `title` attribute of the first `<svg>` element in a document.
///
/// Returns `Ok(None)` when the element has no `title` attribute or the
/// document contains no `<svg>` element at all. Markup that fails to parse
/// before the element is reached is reported as
/// [`Error::MalformedPayload`].
///
/// # Example
///
/// ```rust
/// use skills_content::svg::extract_svg_title;
///
/// let svg = r#"<?xml version="1.0"?><svg title="Docker &amp; Compose"/>"#;
/// assert_eq!(extract_svg_title(svg).unwrap().as_deref(), Some("Docker & Compose"));
///
/// assert_eq!(extract_svg_title("<svg></svg>").unwrap(), None);
/// ```
pub fn extract_svg_title(svg: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                if element.local_name().as_ref() == SVG_ELEMENT {
                    return title_attribute(&element);
                }
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {}
            Err(e) => {
                return Err(Error::malformed(
                    "svg",
                    format!("at byte {}: {e}", reader.error_position()),
                ));
            }
        }
    }
}

fn title_attribute(element: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::malformed("svg", e.to_string()))?;
        if attr.key.local_name().as_ref() == TITLE_ATTRIBUTE {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::malformed("svg", e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Pick the display name for an icon: its title, or the id when the title is
/// missing or blank.
///
/// # Example
///
/// ```rust
/// use skills_content::svg::display_name;
///
/// assert_eq!(display_name("python", Some("Python".to_string())), "Python");
/// assert_eq!(display_name("foo", None), "foo");
/// assert_eq!(display_name("foo", Some("  ".to_string())), "foo");
/// ```
pub fn display_name(id: &str, title: Option<String>) -> String {
    match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => id.to_string(),
    }
}
