//! Plain text rendering of an assembled product record
//!
//! Line order is fixed; the year label and the appearance headers switch
//! between singular and plural forms, and an appearance section is only
//! emitted when its listing was actually fetched.

use crate::extract::cross_refs::Category;
use crate::extract::{AppearanceItem, ProductRecord, ReleaseYears};

/// Render the record as the final report, one field per line.
pub fn render(record: &ProductRecord) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Minifig Name: {}", record.name));
    lines.push(format!("Item Number: {}", record.identifier));

    match &record.themes {
        Some(themes) => {
            lines.push(format!("Theme: {}", themes.theme));
            lines.push(format!("Subtheme: {}", themes.subtheme));
        }
        None => {
            lines.push("Theme: Unknown".to_string());
            lines.push("Subtheme: Unknown".to_string());
        }
    }

    match &record.release_years {
        ReleaseYears::Single(year) => lines.push(format!("Year Released: {year}")),
        ReleaseYears::Range { start, end } => {
            lines.push(format!("Years Released: {start} {end}"));
        }
    }

    lines.push(format!("Weight: {}", record.weight));

    lines.push(format!("Current Prices as of {}", record.prices.as_of));
    lines.push(format!("Min Price: {}", record.prices.min));
    lines.push(format!("Avg Price: {}", record.prices.avg));
    lines.push(format!("Max Price: {}", record.prices.max));

    appearance_section(&mut lines, Category::Sets, record.set_appearances.as_deref());
    appearance_section(&mut lines, Category::Books, record.book_appearances.as_deref());

    lines.join("\n")
}

/// Header plus one `name - number` line per item; nothing at all when the
/// category was never fetched.
fn appearance_section(lines: &mut Vec<String>, category: Category, items: Option<&[AppearanceItem]>) {
    let Some(items) = items else {
        return;
    };

    if items.len() == 1 {
        lines.push(format!("Appears in 1 {}:", category.noun()));
    } else {
        lines.push(format!("Appears in {} {}s:", items.len(), category.noun()));
    }

    for item in items {
        lines.push(format!("{} - {}", item.name, item.number));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{PriceSummary, ThemeInfo};

    fn record() -> ProductRecord {
        ProductRecord {
            identifier: "njo0047".into(),
            name: "Lloyd Garmadon".into(),
            themes: Some(ThemeInfo {
                theme: "NINJAGO".into(),
                subtheme: "Rise of the Snakes".into(),
            }),
            release_years: ReleaseYears::Single("2012".into()),
            weight: "3.5g".into(),
            prices: PriceSummary {
                min: "US $1.00".into(),
                avg: "US $2.40".into(),
                max: "US $5.00".into(),
                as_of: "01/02/2026".into(),
            },
            set_appearances: None,
            book_appearances: None,
        }
    }

    fn item(name: &str, number: &str) -> AppearanceItem {
        AppearanceItem {
            name: name.into(),
            number: number.into(),
        }
    }

    #[test]
    fn scalar_fields_render_in_fixed_order() {
        let report = render(&record());
        assert_eq!(
            report,
            "Minifig Name: Lloyd Garmadon\n\
             Item Number: njo0047\n\
             Theme: NINJAGO\n\
             Subtheme: Rise of the Snakes\n\
             Year Released: 2012\n\
             Weight: 3.5g\n\
             Current Prices as of 01/02/2026\n\
             Min Price: US $1.00\n\
             Avg Price: US $2.40\n\
             Max Price: US $5.00"
        );
    }

    #[test]
    fn year_range_uses_plural_label_space_joined() {
        let mut r = record();
        r.release_years = ReleaseYears::Range {
            start: "2012".into(),
            end: "- 2013".into(),
        };
        assert!(render(&r).contains("Years Released: 2012 - 2013"));
        assert!(!render(&r).contains("Year Released:"));
    }

    #[test]
    fn absent_themes_render_as_unknown() {
        let mut r = record();
        r.themes = None;
        let report = render(&r);
        assert!(report.contains("Theme: Unknown"));
        assert!(report.contains("Subtheme: Unknown"));
    }

    #[test]
    fn single_item_header_is_singular() {
        let mut r = record();
        r.set_appearances = Some(vec![item("Clown", "71019-1")]);
        let report = render(&r);
        assert!(report.contains("Appears in 1 Set:"));
        assert!(report.contains("Clown - 71019-1"));
    }

    #[test]
    fn multiple_items_pluralize_the_header() {
        let mut r = record();
        r.book_appearances = Some(vec![
            item("Ninjago Character Encyclopedia", "b13tlnj-1"),
            item("LEGO Minifigure Year by Year", "b13other-1"),
        ]);
        let report = render(&r);
        assert!(report.contains("Appears in 2 Books:"));
        assert!(report.contains("Ninjago Character Encyclopedia - b13tlnj-1"));
        assert!(report.contains("LEGO Minifigure Year by Year - b13other-1"));
    }

    #[test]
    fn unfetched_category_renders_no_header() {
        let report = render(&record());
        assert!(!report.contains("Appears in"));
    }

    #[test]
    fn empty_fetched_listing_pluralizes_zero() {
        let mut r = record();
        r.set_appearances = Some(vec![]);
        assert!(render(&r).contains("Appears in 0 Sets:"));
    }

    #[test]
    fn sets_section_precedes_books_section() {
        let mut r = record();
        r.set_appearances = Some(vec![item("Clown", "71019-1")]);
        r.book_appearances = Some(vec![item("Encyclopedia", "b13tlnj-1")]);
        let report = render(&r);
        let sets_at = report.find("Appears in 1 Set:").unwrap();
        let books_at = report.find("Appears in 1 Book:").unwrap();
        assert!(sets_at < books_at);
    }
}
