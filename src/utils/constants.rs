//! Shared constants: BrickLink URLs and the anchor strings that locate
//! otherwise unidentified regions of its markup.

/// Chrome user agent string presented to the site
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Catalog page for one minifig, price guide tab preselected so a single
/// fetch carries the metadata and the price tables.
pub fn catalog_item_url(identifier: &str) -> String {
    format!("https://www.bricklink.com/v2/catalog/catalogitem.page?M={identifier}#T=P")
}

/// Cross-reference listing: every item of the given category the minifig
/// appears in. `category_query` is "S" (sets) or "B" (books).
pub fn catalog_item_in_url(identifier: &str, category_query: &str) -> String {
    format!("https://www.bricklink.com/catalogItemIn.asp?M={identifier}&in={category_query}")
}

/// Label of the cookie consent button dismissed before extraction
pub const CONSENT_BUTTON_TEXT: &str = "Just necessary";

/// Marker text of the appearance summary table/cell on the catalog page
pub const APPEARS_IN_MARKER: &str = "Item Appears In";

/// Marker text of the listing table header row on cross-reference pages
pub const APPEARS_AS_REGULAR_MARKER: &str = "Appears As Regular:";

/// Trailing label glued onto book names in listing rows
pub const CATALOG_SUFFIX_MARKER: &str = "Catalog:";

/// Shared class of the four price guide summary tables
pub const PRICE_SUMMARY_TABLE_CLASS: &str = "pcipgSummaryTable";

/// Ordinal of the Current/Used summary among the four same-styled tables
pub const CURRENT_USED_TABLE_INDEX: usize = 3;
