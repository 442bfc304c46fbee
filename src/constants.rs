//! Application constants for the customs KB tool
//!
//! This module contains artifact names, output filenames, default values,
//! and mappings used throughout the reference-data jobs.

// =============================================================================
// Artifact Names and Output Filenames
// =============================================================================

/// Artifact names accepted by the generate command
pub const ARTIFACT_NAMES: &[&str] = &["codelists", "complete", "iso", "rules"];

/// LON code-list artifact filename
pub const LON_CODELISTS_FILENAME: &str = "lon_codelists.json";

/// Complete declaration code-list artifact filename
pub const COMPLETE_CODELISTS_FILENAME: &str = "lon_codelists_complete.json";

/// ISO currency list artifact filename (Box 22)
pub const CURRENCIES_FILENAME: &str = "currencies_box22_iso.json";

/// ISO country list artifact filename (Box 15a)
pub const COUNTRIES_ISO_FILENAME: &str = "countries_box15a_iso.json";

/// Extracted/curated country registry filename (Box 15a)
pub const COUNTRIES_REGISTRY_FILENAME: &str = "countries_box15a.json";

/// Customs-office registry filename (Box 29)
pub const OFFICES_REGISTRY_FILENAME: &str = "customs_offices_box29.json";

/// Validation-rule artifact filename
pub const VALIDATION_RULES_FILENAME: &str = "lon_validation_rules.json";

/// Tariff import artifact filename
pub const TARIFF_DATA_FILENAME: &str = "taric_data.json";

/// Regulation import artifact filename
pub const REGULATION_DATA_FILENAME: &str = "regulations_data.json";

/// Default output directory for generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "kb/processed";

// =============================================================================
// Import Configuration
// =============================================================================

/// Default field delimiter for delimited imports and the city pipeline
pub const DEFAULT_DELIMITER: u8 = b';';

/// Required length of a full TARIC tariff number
pub const TARIFF_NUMBER_LEN: usize = 10;

/// Progress reporting interval for tariff rows
pub const TARIFF_PROGRESS_INTERVAL: usize = 1000;

/// Progress reporting interval for regulation rows
pub const REGULATION_PROGRESS_INTERVAL: usize = 200;

/// Date format used in official-gazette references (e.g. "17.09.2020")
pub const GAZETTE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Complete code-list document source reference
pub const CODELIST_SOURCE: &str =
    "Правилник за начинот на пополнување на царинската декларација - Поглавје II Шифри";

/// Complete code-list document version
pub const CODELIST_VERSION: &str = "2.0";

// =============================================================================
// Script and Box Constants
// =============================================================================

/// Inclusive bounds of the Unicode Cyrillic block (U+0400..=U+04FF)
pub const CYRILLIC_BLOCK_START: char = '\u{0400}';
pub const CYRILLIC_BLOCK_END: char = '\u{04FF}';

/// Box numbers used by the registry artifacts
pub const BOX_COUNTRY: &str = "15а";
pub const BOX_CUSTOMS_OFFICE: &str = "29";
pub const BOX_CURRENCY: &str = "22";

/// Country codes already curated by hand and skipped during extraction
pub const EXTRACTION_SKIP_CODES: &[&str] = &["BR", "CI", "IO"];

/// Country-name length bounds accepted by the registry extractor
pub const COUNTRY_NAME_MIN_CHARS: usize = 3;
pub const COUNTRY_NAME_MAX_CHARS: usize = 60;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a string contains any code point in the Cyrillic block
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars()
        .any(|c| (CYRILLIC_BLOCK_START..=CYRILLIC_BLOCK_END).contains(&c))
}

/// Check whether a tariff number has the full 10-character form
pub fn is_full_tariff_number(tariff: &str) -> bool {
    tariff.chars().count() == TARIFF_NUMBER_LEN
}
