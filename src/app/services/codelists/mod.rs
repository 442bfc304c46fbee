//! Static code-list generation
//!
//! Builds the code lists used by declaration dropdowns and validation:
//! LON-specific lists, the complete declaration lists keyed by SAD box
//! number, ISO currency and country lists, and the curated country and
//! customs-office registries. All data is authored here; generation is
//! deterministic apart from the document timestamp.

mod declaration;
mod iso;
mod lon;
mod registries;

#[cfg(test)]
mod tests;

pub use declaration::complete_document;
pub use iso::{country_iso_list, currency_list};
pub use lon::lon_lists;
pub use registries::{country_registry, office_registry};
