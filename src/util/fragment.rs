//! Detail-fragment extraction from a fetched HTML document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The project modal shows one element (the first carrying the detail class)
//! from a standalone project page. That page links back to the index, which
//! is meaningless inside a modal, so matching back links are cut out of the
//! returned markup.
//!
//! In the browser the fetched document is parsed by `DOMParser`, so the
//! fragment matches what the page would render. `scan_detail` is a lenient
//! tokenizer scan that follows the same element boundaries for the markup a
//! project page uses.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::SiteError;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// Elements whose body is raw text: markup inside them is not parsed.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailFragment {
    pub html: String,
    pub removed_back_links: usize,
}

/// Extract the first element whose class list contains `detail_class`,
/// removing every `<a href="{back_href}">` inside it.
///
/// In the browser the document goes through the native HTML parser; the
/// tokenizer scan is used natively and when no `DOMParser` is available.
///
/// # Errors
///
/// `MissingDetail` when no element carries the class, `Parse` when the
/// markup cannot be read.
pub fn extract_detail(html: &str, detail_class: &str, back_href: &str) -> Result<DetailFragment, SiteError> {
    #[cfg(feature = "csr")]
    {
        match web_sys::DomParser::new() {
            Ok(parser) => return parse_with_browser(&parser, html, detail_class, back_href),
            Err(e) => log::warn!("DOMParser unavailable, scanning markup instead: {e:?}"),
        }
    }
    scan_detail(html, detail_class, back_href)
}

#[cfg(feature = "csr")]
fn parse_with_browser(
    parser: &web_sys::DomParser,
    html: &str,
    detail_class: &str,
    back_href: &str,
) -> Result<DetailFragment, SiteError> {
    let doc = parser
        .parse_from_string(html, web_sys::SupportedType::TextHtml)
        .map_err(|e| SiteError::Parse(format!("{e:?}")))?;
    let detail = doc
        .get_elements_by_class_name(detail_class)
        .item(0)
        .ok_or_else(|| SiteError::MissingDetail(detail_class.to_owned()))?;

    let anchors = detail.get_elements_by_tag_name("a");
    let back_links: Vec<web_sys::Element> = (0..anchors.length())
        .filter_map(|i| anchors.item(i))
        .filter(|a| a.get_attribute("href").as_deref() == Some(back_href))
        .collect();
    for link in &back_links {
        link.remove();
    }
    Ok(DetailFragment { html: detail.outer_html(), removed_back_links: back_links.len() })
}

/// Tokenizer scan for the detail element.
///
/// Open elements inside the detail element are tracked on a stack. An end
/// tag closes everything opened after its matching start tag, so omitted
/// end tags (`<p>`, `<li>`, `<td>`, ...) close with their parent. End tags
/// with no open match are ignored, void elements never open a scope, and
/// raw-text bodies are skipped unread. An element left open at end of input
/// runs to the end of the document.
///
/// # Errors
///
/// `MissingDetail` when no element carries the class, `Parse` when the
/// markup cannot be tokenized before the fragment starts.
pub fn scan_detail(html: &str, detail_class: &str, back_href: &str) -> Result<DetailFragment, SiteError> {
    let mut base = 0usize;
    let mut reader = reader_at(html, base);

    let mut start: Option<usize> = None;
    let mut open: Vec<String> = Vec::new();
    // Start offset and stack index of an open back link.
    let mut open_link: Option<(usize, usize)> = None;
    let mut cuts: Vec<(usize, usize)> = Vec::new();

    loop {
        let before = base + position(&reader, html.len() - base);
        let event = match reader.read_event() {
            Ok(event) => event,
            // Inside the fragment a tokenizer error ends the document early.
            Err(_) if start.is_some() => break,
            Err(e) => return Err(SiteError::Parse(e.to_string())),
        };
        let after = base + position(&reader, html.len() - base);

        match event {
            Event::Start(tag) => {
                let name = tag_name(tag.name().as_ref());
                let void = is_void(&name);
                if start.is_some() {
                    if open_link.is_none() && name == "a" && has_attr(&tag, b"href", back_href) {
                        open_link = Some((before, open.len()));
                    }
                    if !void {
                        open.push(name.clone());
                    }
                } else if has_class(&tag, detail_class) {
                    if void {
                        return Ok(splice(html, before, after, cuts));
                    }
                    start = Some(before);
                    open.push(name.clone());
                }
                if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    base = raw_text_end(html, after, &name);
                    reader = reader_at(html, base);
                }
            }
            Event::Empty(tag) => {
                let name = tag_name(tag.name().as_ref());
                if start.is_some() {
                    if name == "a" && has_attr(&tag, b"href", back_href) {
                        cuts.push((before, after));
                    }
                } else if has_class(&tag, detail_class) {
                    return Ok(splice(html, before, after, cuts));
                }
            }
            Event::End(tag) => {
                let Some(detail_start) = start else { continue };
                let name = tag_name(tag.name().as_ref());
                let Some(index) = open.iter().rposition(|n| *n == name) else { continue };
                open.truncate(index);
                if let Some((link_start, link_index)) = open_link {
                    if open.len() <= link_index {
                        // A back link closed by an ancestor's end tag stops before it.
                        let link_end = if index == link_index { after } else { before };
                        cuts.push((link_start, link_end));
                        open_link = None;
                    }
                }
                if open.is_empty() {
                    return Ok(splice(html, detail_start, after, cuts));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match start {
        Some(detail_start) => {
            if let Some((link_start, _)) = open_link {
                cuts.push((link_start, html.len()));
            }
            Ok(splice(html, detail_start, html.len(), cuts))
        }
        None => Err(SiteError::MissingDetail(detail_class.to_owned())),
    }
}

fn reader_at(html: &str, offset: usize) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(&html[offset..]);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    reader
}

/// Offset of the `</name` that closes a raw-text body starting at `from`.
fn raw_text_end(html: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{name}");
    html[from..].to_ascii_lowercase().find(&needle).map_or(html.len(), |i| from + i)
}

fn position(reader: &Reader<&[u8]>, len: usize) -> usize {
    usize::try_from(reader.buffer_position()).map_or(len, |pos| pos.min(len))
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn attr_value(tag: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    tag.html_attributes()
        .flatten()
        .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(key))
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn has_attr(tag: &BytesStart<'_>, key: &[u8], expected: &str) -> bool {
    attr_value(tag, key).is_some_and(|value| value == expected)
}

fn has_class(tag: &BytesStart<'_>, class: &str) -> bool {
    attr_value(tag, b"class").is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}

fn splice(html: &str, start: usize, end: usize, mut cuts: Vec<(usize, usize)>) -> DetailFragment {
    cuts.sort_unstable();
    let mut out = String::with_capacity(end - start);
    let mut cursor = start;
    let mut applied = 0;
    for &(cut_start, cut_end) in &cuts {
        if cut_start < cursor || cut_start >= end {
            continue;
        }
        out.push_str(&html[cursor..cut_start]);
        cursor = cut_end.min(end);
        applied += 1;
    }
    out.push_str(&html[cursor..end]);
    DetailFragment { html: out, removed_back_links: applied }
}
