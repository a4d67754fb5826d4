//! Selector-driven extraction shared by the per-site profiles.
//!
//! Every site page has the same three parts we care about: an `h1` title,
//! a two-column spec table, and a run of `img` tags of which only some
//! show the vehicle. The profile decides which selectors and markers apply.

use crate::domain::{ListingRecord, SpecField};
use crate::scrape::{ScraperError, SiteProfile};
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// Build a record from a listing page using the given site profile.
pub fn extract_listing(html: &str, profile: &SiteProfile) -> Result<ListingRecord, ScraperError> {
    let doc = Html::parse_document(html);

    let mut record = ListingRecord::new(first_text(&doc, profile.title_selector)?);
    fill_spec_fields(&doc, profile.spec_rows, &mut record)?;
    record.images = image_sources(&doc, profile.image_marker)?;

    Ok(record)
}

/// Trimmed text of the first match, `None` when absent or blank.
pub fn first_text(doc: &Html, css: &str) -> Result<Option<String>, ScraperError> {
    let sel = selector(css)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .filter(|t| !t.is_empty()))
}

/// Scan label/value rows. Rows without exactly two cells are skipped,
/// and a field keeps the first value it was given.
pub fn fill_spec_fields(
    doc: &Html,
    rows_css: &str,
    record: &mut ListingRecord,
) -> Result<(), ScraperError> {
    let rows = selector(rows_css)?;
    let cell = selector("td")?;

    for row in doc.select(&rows) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell).collect();
        if cells.len() != 2 {
            continue;
        }

        let Some(field) = SpecField::from_label(&element_text(cells[0])) else {
            continue;
        };

        let slot = field.slot(record);
        if slot.is_none() {
            *slot = Some(element_text(cells[1]).trim().to_string());
        }
    }

    Ok(())
}

/// `src` of every image whose URL contains `marker`, in document order.
pub fn image_sources(doc: &Html, marker: &str) -> Result<Vec<String>, ScraperError> {
    let img = selector("img[src]")?;
    Ok(doc
        .select(&img)
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| src.contains(marker))
        .map(str::to_string)
        .collect())
}
