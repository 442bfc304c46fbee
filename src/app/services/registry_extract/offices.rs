//! Customs-office extraction (Box 29)

use crate::app::models::{CodeEntry, CodeList};
use crate::constants::BOX_CUSTOMS_OFFICE;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// One office row: office kind, name, then the `MKnnnnnn` office code.
/// The central administration header is sometimes typeset with a Latin
/// capital A, hence the `[АA]` class.
static OFFICE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Царинска испостава|Царинарница|ЦЕНТРАЛНА УПР[АA])\s+([А-ШЃЌЈЏЧЖЊЉ\s.0-9–-]+?)\s+(MK\d{6})",
    )
    .unwrap_or_else(|e| panic!("invalid office row pattern: {e}"))
});

/// Extract customs-office entries from rulebook text
pub fn extract_offices(text: &str) -> Vec<CodeEntry> {
    let mut entries = Vec::new();

    for captures in OFFICE_ROW.captures_iter(text) {
        let office_kind = captures[1].trim();
        let office_name = captures[2].trim();
        let code = &captures[3];

        let full_name = format!("{office_kind} {office_name}");
        entries.push(CodeEntry::mk_only(code, full_name.trim()));
    }

    debug!("Extracted {} customs offices", entries.len());
    entries
}

/// Wrap extracted office entries into the Box 29 registry list
pub fn extracted_office_list(entries: Vec<CodeEntry>) -> CodeList {
    CodeList::new("Box29_CustomsOffice", Some(BOX_CUSTOMS_OFFICE), entries)
        .with_descriptions("Излезен/влезен царински орган", "Exit/Entry Customs Office")
}
