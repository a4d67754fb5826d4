// src/domain/pricing.rs

use crate::domain::listing::ListingRecord;

pub const BASE_PRICE: i64 = 3000;
pub const GRADE_FOUR_BONUS: i64 = 500;
pub const DIESEL_BONUS: i64 = 300;

/// Flat-rate price estimate for a listing.
///
/// Only the auction grade and fuel type move the price, and the two
/// adjustments stack independently. Comparisons are exact: grade "4.5"
/// or fuel "diesel" earn nothing.
pub fn estimate_price(listing: &ListingRecord) -> i64 {
    let mut price = BASE_PRICE;

    if listing.grade.as_deref() == Some("4") {
        price += GRADE_FOUR_BONUS;
    }
    if listing.fuel_type.as_deref() == Some("Diesel") {
        price += DIESEL_BONUS;
    }

    price
}
