//! Release year extraction
//!
//! The start year sits in the `yearReleasedSec` node. When the release is a
//! range, the end year is a bare text node right after it (`"- 2013"`); when
//! it is a single year, the next sibling is a `<br>` whose text is empty.

use scraper::node::Node;
use scraper::{ElementRef, Html};

use super::{ExtractError, ExtractResult, ReleaseYears, element_text, selector};

/// Read the release year(s) from the anchor node and its next sibling.
pub fn release_years(doc: &Html) -> ExtractResult<ReleaseYears> {
    let anchor = doc
        .select(&selector("#yearReleasedSec"))
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound("release year anchor".into()))?;

    let start = element_text(&anchor);

    // The sibling may be a bare text node or an element; only its trimmed
    // text matters.
    let end = match anchor.next_sibling() {
        Some(node) => match node.value() {
            Node::Text(text) => text.trim().to_string(),
            Node::Element(_) => ElementRef::wrap(node)
                .map(|el| element_text(&el))
                .unwrap_or_default(),
            _ => String::new(),
        },
        None => String::new(),
    };

    if end.is_empty() {
        Ok(ReleaseYears::Single(start))
    } else {
        Ok(ReleaseYears::Range { start, end })
    }
}
