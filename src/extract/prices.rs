//! Price guide summary extraction
//!
//! The four summary tables (New/Used x Past/Current) share one presentational
//! class and appear in a constant order; the Current/Used table is the one at
//! a fixed ordinal. Row positions inside it are equally fixed, so each read
//! double-checks the row label to turn a layout shift into an explicit
//! failure instead of a silent misread.

use scraper::{ElementRef, Html};

use super::{ExtractError, ExtractResult, PriceSummary, element_text, selector};
use crate::utils::constants::{CURRENT_USED_TABLE_INDEX, PRICE_SUMMARY_TABLE_CLASS};

const MIN_ROW: usize = 2;
const AVG_ROW: usize = 3;
const MAX_ROW: usize = 5;

/// Read min/avg/max from the Current/Used price summary table.
pub fn price_summary(doc: &Html, as_of: String) -> ExtractResult<PriceSummary> {
    let table_selector = selector(&format!("table.{PRICE_SUMMARY_TABLE_CLASS}"));
    let tables: Vec<ElementRef> = doc.select(&table_selector).collect();

    let table = tables.get(CURRENT_USED_TABLE_INDEX).ok_or_else(|| {
        ExtractError::StructureNotFound(format!(
            "current/used price summary table (found {} of {} expected)",
            tables.len(),
            CURRENT_USED_TABLE_INDEX + 1
        ))
    })?;

    let rows: Vec<ElementRef> = table.select(&selector("tbody tr")).collect();

    Ok(PriceSummary {
        min: labeled_price(&rows, MIN_ROW, "Min")?,
        avg: labeled_price(&rows, AVG_ROW, "Avg")?,
        max: labeled_price(&rows, MAX_ROW, "Max")?,
        as_of,
    })
}

/// Second cell of the row at a fixed position, with the first cell checked
/// against the expected label.
fn labeled_price(rows: &[ElementRef], index: usize, label: &str) -> ExtractResult<String> {
    let row = rows
        .get(index)
        .ok_or_else(|| ExtractError::StructureNotFound(format!("price summary row {index}")))?;

    let cells: Vec<ElementRef> = row.select(&selector("td")).collect();

    let label_cell = cells.first().ok_or_else(|| {
        ExtractError::StructureNotFound(format!("label cell of price summary row {index}"))
    })?;
    if !element_text(label_cell).contains(label) {
        return Err(ExtractError::StructureNotFound(format!(
            "price summary row {index} is not labeled {label:?}"
        )));
    }

    let value_cell = cells.get(1).ok_or_else(|| {
        ExtractError::StructureNotFound(format!("value cell of price summary row {index}"))
    })?;
    Ok(element_text(value_cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_USED: &str = r#"
        <table class="pcipgSummaryTable">
         <tr><td colspan="2">Current Items For Sale</td></tr>
         <tr><td>Times Sold:</td><td>34</td></tr>
         <tr><td>Min Price:</td><td>US $1.00</td></tr>
         <tr><td>Avg Price:</td><td>US $2.40</td></tr>
         <tr><td>Qty Avg Price:</td><td>US $2.10</td></tr>
         <tr><td>Max Price:</td><td>US $5.00</td></tr>
        </table>"#;

    fn guide_doc(fourth_table: &str) -> Html {
        let decoy = r#"<table class="pcipgSummaryTable"><tr><td>other period</td></tr></table>"#;
        Html::parse_document(&format!("{decoy}{decoy}{decoy}{fourth_table}"))
    }

    #[test]
    fn reads_min_avg_max_from_fixed_rows() {
        let prices = price_summary(&guide_doc(CURRENT_USED), "01/02/2026".into()).unwrap();
        assert_eq!(prices.min, "US $1.00");
        assert_eq!(prices.avg, "US $2.40");
        assert_eq!(prices.max, "US $5.00");
        assert_eq!(prices.as_of, "01/02/2026");
    }

    #[test]
    fn too_few_summary_tables_is_a_structure_failure() {
        let doc = Html::parse_document(
            r#"<table class="pcipgSummaryTable"><tr><td>only one</td></tr></table>"#,
        );
        assert!(matches!(
            price_summary(&doc, String::new()),
            Err(ExtractError::StructureNotFound(_))
        ));
    }

    #[test]
    fn mislabeled_row_is_a_structure_failure() {
        // Row 2 reads "Qty:" instead of a Min label: the layout shifted
        let shifted = r#"
            <table class="pcipgSummaryTable">
             <tr><td colspan="2">Current Items For Sale</td></tr>
             <tr><td>Times Sold:</td><td>34</td></tr>
             <tr><td>Qty:</td><td>51</td></tr>
             <tr><td>Avg Price:</td><td>US $2.40</td></tr>
             <tr><td>Qty Avg Price:</td><td>US $2.10</td></tr>
             <tr><td>Max Price:</td><td>US $5.00</td></tr>
            </table>"#;
        let err = price_summary(&guide_doc(shifted), String::new()).unwrap_err();
        assert!(err.to_string().contains("not labeled"));
    }

    #[test]
    fn missing_value_cell_is_a_structure_failure() {
        let truncated = r#"
            <table class="pcipgSummaryTable">
             <tr><td colspan="2">Current Items For Sale</td></tr>
             <tr><td>Times Sold:</td><td>34</td></tr>
             <tr><td>Min Price:</td></tr>
             <tr><td>Avg Price:</td><td>US $2.40</td></tr>
             <tr><td>Qty Avg Price:</td><td>US $2.10</td></tr>
             <tr><td>Max Price:</td><td>US $5.00</td></tr>
            </table>"#;
        assert!(matches!(
            price_summary(&guide_doc(truncated), String::new()),
            Err(ExtractError::StructureNotFound(_))
        ));
    }
}
