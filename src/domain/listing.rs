use serde::Serialize;

/// Title used when a page has no `h1`.
pub const UNTITLED: &str = "Untitled";

/// One auction listing as it moves through the pipeline.
///
/// Extraction fills `title`, the spec fields and `images`; `description`
/// and `price` are filled later by the generator and the estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub title: String,

    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub fuel_type: Option<String>,
    pub grade: Option<String>,

    // Document order, duplicates kept.
    pub images: Vec<String>,

    pub description: Option<String>,
    pub price: Option<i64>,
}

impl ListingRecord {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| UNTITLED.to_string()),
            make: None,
            model: None,
            year: None,
            mileage: None,
            fuel_type: None,
            grade: None,
            images: Vec::new(),
            description: None,
            price: None,
        }
    }
}

/// The labelled fields an extractor can find in a spec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecField {
    Make,
    Model,
    Year,
    Mileage,
    FuelType,
    Grade,
}

impl SpecField {
    /// Label keywords in match order. A label claims the first keyword it contains,
    /// so "Model Year" is read as a model row.
    pub const KEYWORDS: [(&'static str, SpecField); 6] = [
        ("make", SpecField::Make),
        ("model", SpecField::Model),
        ("year", SpecField::Year),
        ("mileage", SpecField::Mileage),
        ("fuel", SpecField::FuelType),
        ("grade", SpecField::Grade),
    ];

    /// Case-insensitive keyword match against a table label.
    pub fn from_label(label: &str) -> Option<SpecField> {
        let label = label.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(kw, _)| label.contains(kw))
            .map(|(_, field)| *field)
    }

    pub fn slot<'a>(&self, record: &'a mut ListingRecord) -> &'a mut Option<String> {
        match self {
            SpecField::Make => &mut record.make,
            SpecField::Model => &mut record.model,
            SpecField::Year => &mut record.year,
            SpecField::Mileage => &mut record.mileage,
            SpecField::FuelType => &mut record.fuel_type,
            SpecField::Grade => &mut record.grade,
        }
    }
}
