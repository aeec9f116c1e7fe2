//! Appearance category flags
//!
//! The catalog page summarizes cross-references in a cell reading e.g.
//! `"Item Appears In 2 Sets 1 Book"`. The site omits a category entirely
//! rather than stating a zero count, so a flag is either set or unset, never
//! an explicit zero.

use scraper::Html;
use tracing::{debug, warn};

use super::{ExtractError, ExtractResult, element_text, selector};
use crate::utils::constants::APPEARS_IN_MARKER;

/// Which cross-reference categories the catalog page lists.
///
/// The source never states a zero count, so each flag is really ternary:
/// set, or unset because the category was absent from the summary cell.
/// `false` here always means unset — nothing ever writes an explicit
/// "not in any sets" — and an unset flag means the corresponding listing
/// page is never fetched, which is what keeps the record-level
/// `None`/empty-`Vec` distinction intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceFlags {
    pub sets: bool,
    pub books: bool,
}

/// Locate the appearance summary cell and read the category flags from it.
///
/// The marker text recurs in every ancestor of the nested table markup, so
/// the last match is the innermost table, and likewise the innermost cell.
pub fn appearance_flags(doc: &Html) -> ExtractResult<AppearanceFlags> {
    let table = doc
        .select(&selector("table"))
        .filter(|t| element_text(t).contains(APPEARS_IN_MARKER))
        .last()
        .ok_or_else(|| ExtractError::StructureNotFound("appearance summary table".into()))?;

    let cell = table
        .select(&selector("td"))
        .filter(|td| element_text(td).starts_with(APPEARS_IN_MARKER))
        .last()
        .ok_or_else(|| ExtractError::StructureNotFound("appearance summary cell".into()))?;

    let summary = element_text(&cell);
    let flags = AppearanceFlags {
        sets: summary.contains("Set"),
        books: summary.contains("Book"),
    };

    if !flags.sets && !flags.books {
        warn!("Appearance summary lists neither sets nor books: {:?}", summary);
    } else {
        debug!(sets = flags.sets, books = flags.books, "Appearance flags");
    }

    Ok(flags)
}
