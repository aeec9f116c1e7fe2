//! Theme and subtheme extraction
//!
//! The only mention of the themes is the breadcrumb link trail at the top of
//! the page: the first table inside the `innercontent` container, whose full
//! text reads like `"Catalog: Minifigures: NINJAGO: Rise of the Snakes: ..."`.
//! The segment count decides the shape; an unexpected count is absence, not
//! an error.

use scraper::Html;
use tracing::warn;

use super::{ExtractError, ExtractResult, ThemeInfo, element_text, selector};

/// Read theme/subtheme from the breadcrumb table.
///
/// Exactly 5 colon-delimited segments: theme = segment 2, subtheme =
/// segment 3. Exactly 4: theme = segment 2, subtheme = the literal `"N/A"`.
/// Any other count: both absent, with a diagnostic so the silent data loss
/// stays observable.
pub fn theme_subtheme(doc: &Html) -> ExtractResult<Option<ThemeInfo>> {
    let container = doc
        .select(&selector("div.innercontent"))
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound("innercontent container".into()))?;

    let title_table = container
        .select(&selector("table"))
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound("breadcrumb title table".into()))?;

    let title_text = element_text(&title_table);
    let segments: Vec<&str> = title_text.split(':').collect();

    let themes = match segments.len() {
        5 => Some(ThemeInfo {
            theme: segments[2].trim().to_string(),
            subtheme: segments[3].trim().to_string(),
        }),
        4 => Some(ThemeInfo {
            theme: segments[2].trim().to_string(),
            subtheme: "N/A".to_string(),
        }),
        n => {
            warn!(
                "Breadcrumb text has {} colon-delimited segments (expected 4 or 5), \
                 leaving theme/subtheme unset: {:?}",
                n, title_text
            );
            None
        }
    };

    Ok(themes)
}
