//! Registry extraction from rulebook text
//!
//! Scans text extracted from the declaration rulebook for the country
//! table (Box 15а) and the customs-office table (Box 29). Extraction is
//! best-effort: the table layout repeats each country code four times per
//! line, and office entries carry an `MKnnnnnn` code after the office
//! name.

mod countries;
mod offices;

#[cfg(test)]
mod tests;

pub use countries::{extract_countries, extracted_country_list};
pub use offices::{extract_offices, extracted_office_list};
