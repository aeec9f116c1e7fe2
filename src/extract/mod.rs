//! Extraction of a minifig's product record from BrickLink markup
//!
//! BrickLink exposes no stable machine-readable schema for the fields of
//! interest, so each extractor locates its region by anchor text or fixed
//! ordinals. Every positional heuristic lives behind one named lookup with a
//! single failure path; where the site omits data instead of stating a zero
//! count, the extractors model absence rather than failing.

pub mod appearances;
pub mod cross_refs;
pub mod prices;
pub mod themes;
pub mod years;

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::session::Session;
use cross_refs::Category;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Expected structure not found: {0}")]
    StructureNotFound(String),

    #[error("{0} appearance table not found")]
    TableNotFound(String),

    #[error("{0} listing start row not found")]
    RowNotFound(String),

    #[error("Text did not match expected pattern: {0}")]
    ParseMismatch(String),
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Theme and subtheme, always resolved together. A subtheme of `"N/A"` is a
/// resolved value (the page listed no subtheme segment), distinct from the
/// whole pair being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    pub theme: String,
    pub subtheme: String,
}

/// Release year of the minifig: one year or a range, never both.
///
/// The range's `end` token is carried verbatim from the page (it includes
/// the joining dash, e.g. `"- 2013"`) and is rendered space-joined after the
/// start year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseYears {
    Single(String),
    Range { start: String, end: String },
}

impl ReleaseYears {
    pub fn is_range(&self) -> bool {
        matches!(self, ReleaseYears::Range { .. })
    }
}

/// Min/avg/max observed price, currency tokens verbatim from the page,
/// stamped with the date of the extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSummary {
    pub min: String,
    pub avg: String,
    pub max: String,
    pub as_of: String,
}

/// One cross-referenced catalog item the minifig appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceItem {
    pub name: String,
    pub number: String,
}

/// The assembled product record. Built once per run, read-only after.
///
/// `set_appearances`/`book_appearances` are `None` when the catalog page
/// never listed the category (the listing page is not even fetched); an
/// empty `Vec` means the listing was fetched and held no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub identifier: String,
    pub name: String,
    pub themes: Option<ThemeInfo>,
    pub release_years: ReleaseYears,
    pub weight: String,
    pub prices: PriceSummary,
    pub set_appearances: Option<Vec<AppearanceItem>>,
    pub book_appearances: Option<Vec<AppearanceItem>>,
}

/// Display name from its id-labeled heading. Required, non-empty.
pub fn item_name(doc: &Html) -> ExtractResult<String> {
    let heading = doc
        .select(&selector("#item-name-title"))
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound("item name heading".into()))?;

    let name = element_text(&heading);
    if name.is_empty() {
        return Err(ExtractError::StructureNotFound("item name text".into()));
    }
    Ok(name)
}

/// Weight as free text, unit embedded (e.g. `"3.5g"`).
pub fn item_weight(doc: &Html) -> ExtractResult<String> {
    let node = doc
        .select(&selector("#item-weight-info"))
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound("item weight info".into()))?;
    Ok(element_text(&node))
}

/// Run every extractor against the catalog page, fetch the gated
/// cross-reference listings, and merge the results into one record.
///
/// Strictly sequential; the two listing fetches only happen when the
/// corresponding appearance flag was set on the catalog page.
pub async fn extract_record(session: &Session, identifier: &str) -> Result<ProductRecord> {
    let doc = session.catalog_page(identifier).await?;

    let name = item_name(&doc)?;
    let themes = themes::theme_subtheme(&doc)?;
    let release_years = years::release_years(&doc)?;
    let weight = item_weight(&doc)?;
    let flags = appearances::appearance_flags(&doc)?;
    let prices = prices::price_summary(&doc, run_date())?;
    drop(doc);

    let set_appearances = if flags.sets {
        let listing = session.appearance_page(identifier, Category::Sets).await?;
        Some(cross_refs::appearance_items(&listing, Category::Sets)?)
    } else {
        None
    };

    let book_appearances = if flags.books {
        let listing = session.appearance_page(identifier, Category::Books).await?;
        Some(cross_refs::appearance_items(&listing, Category::Books)?)
    } else {
        None
    };

    Ok(ProductRecord {
        identifier: identifier.to_string(),
        name,
        themes,
        release_years,
        weight,
        prices,
        set_appearances,
        book_appearances,
    })
}

/// Date the prices were read, `%m/%d/%Y`.
fn run_date() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

/// Parse a selector known valid at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Concatenated descendant text of a node, trimmed.
pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name_reads_id_labeled_heading() {
        let doc = Html::parse_document(
            r#"<h1 id="item-name-title">Lloyd Garmadon</h1>"#,
        );
        assert_eq!(item_name(&doc).unwrap(), "Lloyd Garmadon");
    }

    #[test]
    fn item_name_requires_the_heading() {
        let doc = Html::parse_document("<h1>Unlabeled</h1>");
        assert!(matches!(
            item_name(&doc),
            Err(ExtractError::StructureNotFound(_))
        ));
    }

    #[test]
    fn item_name_rejects_empty_text() {
        let doc = Html::parse_document(r#"<h1 id="item-name-title">  </h1>"#);
        assert!(matches!(
            item_name(&doc),
            Err(ExtractError::StructureNotFound(_))
        ));
    }

    #[test]
    fn item_weight_is_verbatim_free_text() {
        let doc = Html::parse_document(r#"<span id="item-weight-info">3.5g</span>"#);
        assert_eq!(item_weight(&doc).unwrap(), "3.5g");
    }

    #[test]
    fn release_years_discriminator_matches_variant() {
        assert!(!ReleaseYears::Single("2012".into()).is_range());
        assert!(
            ReleaseYears::Range {
                start: "2012".into(),
                end: "- 2013".into()
            }
            .is_range()
        );
    }

    const CATALOG_FIXTURE: &str = r#"
        <div class="innercontent"><table><tr>
         <td>Catalog: Minifigures: NINJAGO: Rise of the Snakes: Lloyd</td>
        </tr></table></div>
        <h1 id="item-name-title">Lloyd Garmadon</h1>
        <span id="yearReleasedSec">2012</span> - 2013<br>
        <span id="item-weight-info">3.5g</span>
        <table><tr><td>Item Appears In 1 Set</td></tr></table>
        <table class="pcipgSummaryTable"><tr><td>past new</td></tr></table>
        <table class="pcipgSummaryTable"><tr><td>past used</td></tr></table>
        <table class="pcipgSummaryTable"><tr><td>current new</td></tr></table>
        <table class="pcipgSummaryTable">
         <tr><td colspan="2">Current Items For Sale</td></tr>
         <tr><td>Times Sold:</td><td>34</td></tr>
         <tr><td>Min Price:</td><td>US $1.00</td></tr>
         <tr><td>Avg Price:</td><td>US $2.40</td></tr>
         <tr><td>Qty Avg Price:</td><td>US $2.10</td></tr>
         <tr><td>Max Price:</td><td>US $5.00</td></tr>
        </table>"#;

    const SET_LISTING_FIXTURE: &str = r#"
        <table>
         <tr><td>Appears As Regular:</td></tr>
         <tr><td>img</td><td>qty</td><td>9450-1 (Inv)</td>
             <td>Epic Dragon Battle915 pieces</td></tr>
        </table>"#;

    /// The assembler's merge, minus the browser: every field extractor run
    /// against fixed documents, listings gated on the flags.
    fn record_from(catalog: &Html, set_listing: &Html, as_of: &str) -> ProductRecord {
        let flags = appearances::appearance_flags(catalog).unwrap();
        ProductRecord {
            identifier: "njo0047".into(),
            name: item_name(catalog).unwrap(),
            themes: themes::theme_subtheme(catalog).unwrap(),
            release_years: years::release_years(catalog).unwrap(),
            weight: item_weight(catalog).unwrap(),
            prices: prices::price_summary(catalog, as_of.into()).unwrap(),
            set_appearances: flags
                .sets
                .then(|| cross_refs::appearance_items(set_listing, Category::Sets).unwrap()),
            book_appearances: flags
                .books
                .then(|| cross_refs::appearance_items(set_listing, Category::Books).unwrap()),
        }
    }

    #[test]
    fn repeated_extraction_yields_an_identical_record() {
        let catalog = Html::parse_document(CATALOG_FIXTURE);
        let set_listing = Html::parse_document(SET_LISTING_FIXTURE);

        let first = record_from(&catalog, &set_listing, "01/02/2026");
        let second = record_from(&catalog, &set_listing, "01/02/2026");

        assert_eq!(first, second);

        // The fixture exercises every variant-bearing field
        assert_eq!(
            first.themes,
            Some(ThemeInfo {
                theme: "NINJAGO".into(),
                subtheme: "Rise of the Snakes".into()
            })
        );
        assert!(first.release_years.is_range());
        assert_eq!(
            first.set_appearances,
            Some(vec![AppearanceItem {
                name: "Epic Dragon Battle".into(),
                number: "9450-1".into()
            }])
        );
        assert_eq!(first.book_appearances, None);
    }

    #[test]
    fn only_the_date_varies_between_runs() {
        let catalog = Html::parse_document(CATALOG_FIXTURE);
        let set_listing = Html::parse_document(SET_LISTING_FIXTURE);

        let mut earlier = record_from(&catalog, &set_listing, "01/02/2026");
        let later = record_from(&catalog, &set_listing, "01/03/2026");

        assert_ne!(earlier, later);
        earlier.prices.as_of = later.prices.as_of.clone();
        assert_eq!(earlier, later);
    }
}
