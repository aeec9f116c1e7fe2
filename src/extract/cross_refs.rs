//! Cross-reference listing extraction
//!
//! The listing pages for sets and books share one layout: an anchor-text
//! table (no class, no id) whose header row reads "Appears As Regular:",
//! followed by one row per containing item. The two categories differ only
//! in the query they are fetched with and in a trailing "Catalog:" label
//! glued onto book names.

use regex::Regex;
use scraper::{ElementRef, Html};

use super::{AppearanceItem, ExtractError, ExtractResult, element_text, selector};
use crate::utils::constants::{APPEARS_AS_REGULAR_MARKER, CATALOG_SUFFIX_MARKER};

/// Cross-reference category of a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sets,
    Books,
}

impl Category {
    /// Query value of the `in=` parameter on the listing URL.
    pub fn query(self) -> &'static str {
        match self {
            Category::Sets => "S",
            Category::Books => "B",
        }
    }

    /// Singular noun used in report headers.
    pub fn noun(self) -> &'static str {
        match self {
            Category::Sets => "Set",
            Category::Books => "Book",
        }
    }
}

/// Parse every `{name, number}` pair out of a listing page, in row order.
///
/// The anchor table is the last one containing the marker (nested wrappers
/// repeat it); the data rows start right after the first row containing the
/// marker. Row layout shifts slightly between documents, which is why the
/// start row is searched for rather than assumed.
pub fn appearance_items(doc: &Html, category: Category) -> ExtractResult<Vec<AppearanceItem>> {
    let table = doc
        .select(&selector("table"))
        .filter(|t| element_text(t).contains(APPEARS_AS_REGULAR_MARKER))
        .last()
        .ok_or_else(|| ExtractError::TableNotFound(category.noun().to_string()))?;

    let rows: Vec<ElementRef> = table.select(&selector("tr")).collect();

    let start = rows
        .iter()
        .position(|row| element_text(row).contains(APPEARS_AS_REGULAR_MARKER))
        .ok_or_else(|| ExtractError::RowNotFound(category.noun().to_string()))?
        + 1;

    let leading_non_digit = Regex::new(r"^[^\d]+").expect("static regex");

    let mut items = Vec::new();
    for row in &rows[start..] {
        items.push(appearance_item(row, category, &leading_non_digit)?);
    }
    Ok(items)
}

/// One listing row: the item number is the 3rd cell truncated at its
/// parenthetical inventory link, the item name is the leading non-digit run
/// of the 4th cell (the cell continues with piece counts and other numbers).
fn appearance_item(
    row: &ElementRef,
    category: Category,
    leading_non_digit: &Regex,
) -> ExtractResult<AppearanceItem> {
    let cells: Vec<ElementRef> = row.select(&selector("td")).collect();
    if cells.len() < 4 {
        return Err(ExtractError::StructureNotFound(format!(
            "{} listing row with {} cells (expected at least 4)",
            category.noun(),
            cells.len()
        )));
    }

    let number_text = element_text(&cells[2]);
    let number = number_text
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let name_text = element_text(&cells[3]);
    let matched = leading_non_digit.find(&name_text).ok_or_else(|| {
        ExtractError::ParseMismatch(format!(
            "no leading non-digit run in item name {name_text:?}"
        ))
    })?;
    let mut name = matched.as_str().trim().to_string();

    if category == Category::Books {
        if let Some(prefix) = name.split(CATALOG_SUFFIX_MARKER).next() {
            name = prefix.trim_end().to_string();
        }
    }

    Ok(AppearanceItem { name, number })
}
