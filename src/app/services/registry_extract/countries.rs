//! Country-table extraction (Box 15а)

use crate::app::models::{CodeEntry, CodeList};
use crate::constants::{
    BOX_COUNTRY, COUNTRY_NAME_MAX_CHARS, COUNTRY_NAME_MIN_CHARS, EXTRACTION_SKIP_CODES,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// One country row: Macedonian name followed by the ISO code repeated in
/// four table columns. The repeats are captured separately and compared
/// afterwards, which filters out column misalignments in the text.
static COUNTRY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([А-ШЃЌЈЏЧЖЊЉ][а-шѓќјџчжњљ\s()]+?)\s{2,}([A-Z]{2})\s+([A-Z]{2})\s+([A-Z]{2})\s+([A-Z]{2})",
    )
    .unwrap_or_else(|e| panic!("invalid country row pattern: {e}"))
});

/// Extract country entries from rulebook text
pub fn extract_countries(text: &str) -> Vec<CodeEntry> {
    let mut entries = Vec::new();

    for captures in COUNTRY_ROW.captures_iter(text) {
        let name = captures[1].trim();
        let code = &captures[2];

        if captures[3] != *code || captures[4] != *code || captures[5] != *code {
            continue;
        }

        let name_chars = name.chars().count();
        if !(COUNTRY_NAME_MIN_CHARS..=COUNTRY_NAME_MAX_CHARS).contains(&name_chars) {
            continue;
        }
        if EXTRACTION_SKIP_CODES.contains(&code) {
            continue;
        }

        entries.push(CodeEntry::mk_only(code, name));
    }

    debug!("Extracted {} countries", entries.len());
    entries
}

/// Wrap extracted country entries into the Box 15а registry list
pub fn extracted_country_list(entries: Vec<CodeEntry>) -> CodeList {
    CodeList::new("Box15a_CountryCode", Some(BOX_COUNTRY), entries).with_descriptions(
        "Шифра на земја (ISO 3166-1 alpha-2)",
        "Country Code (ISO 3166-1 alpha-2)",
    )
}
