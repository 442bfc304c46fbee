//! Curated country and customs-office registries
//!
//! The hand-maintained fallback registries used when no rulebook text is
//! supplied to the extraction job: the key trading-partner countries
//! (Box 15а) and the national customs offices (Box 29).

use crate::app::models::{CodeEntry, CodeList};
use crate::constants::{BOX_COUNTRY, BOX_CUSTOMS_OFFICE};

/// Build the curated key-country registry
pub fn country_registry() -> CodeList {
    let codes = [
        ("MK", "Северна Македонија", "North Macedonia"),
        ("AL", "Албанија", "Albania"),
        ("BG", "Бугарија", "Bulgaria"),
        ("GR", "Грција", "Greece"),
        ("RS", "Србија", "Serbia"),
        ("XK", "Косово", "Kosovo"),
        ("ME", "Црна Гора", "Montenegro"),
        ("HR", "Хрватска", "Croatia"),
        ("SI", "Словенија", "Slovenia"),
        ("BA", "Босна и Херцеговина", "Bosnia and Herzegovina"),
        ("TR", "Турција", "Turkey"),
        ("DE", "Германија", "Germany"),
        ("IT", "Италија", "Italy"),
        ("FR", "Франција", "France"),
        ("GB", "Голема Британија", "United Kingdom"),
        ("US", "Соединети Американски Држави", "United States"),
        ("CN", "Кина", "China"),
        ("RU", "Русија", "Russia"),
        ("AT", "Австрија", "Austria"),
        ("CH", "Швајцарија", "Switzerland"),
    ];
    CodeList::new(
        "Box15a_CountryCode",
        Some(BOX_COUNTRY),
        codes
            .iter()
            .map(|(code, mk, en)| CodeEntry::new(code, mk, en))
            .collect(),
    )
    .with_descriptions(
        "Шифра на земја (ISO 3166-1 alpha-2)",
        "Country Code (ISO 3166-1 alpha-2)",
    )
}

/// Build the curated customs-office registry
pub fn office_registry() -> CodeList {
    let codes = [
        ("MK009000", "Централна управа на царинска управа", "Central Customs Administration"),
        ("MK001000", "Царинарница Скопје", "Customs Office Skopje"),
        ("MK001010", "Царинска испостава Скопје 1", "Customs Branch Skopje 1"),
        ("MK001013", "Царинска испостава Скопје 3", "Customs Branch Skopje 3"),
        ("MK001014", "Царинска испостава Скопје 4", "Customs Branch Skopje 4"),
        (
            "MK001050",
            "Царинска испостава Аеродром Скопје - Стоков промет",
            "Customs Branch Airport Skopje - Goods",
        ),
        ("MK002000", "Царинарница Куманово", "Customs Office Kumanovo"),
        (
            "MK002010",
            "Царинска испостава Табановце - Стоков промет",
            "Customs Branch Tabanovce - Goods",
        ),
        ("MK003000", "Царинарница Штип", "Customs Office Stip"),
        ("MK004000", "Царинарница Гевгелија", "Customs Office Gevgelija"),
        ("MK004020", "Царинска испостава Гевгелија", "Customs Branch Gevgelija"),
        (
            "MK004060",
            "Царинска испостава Ново Село - Стоков промет",
            "Customs Branch Novo Selo - Goods",
        ),
        ("MK005000", "Царинарница Битола", "Customs Office Bitola"),
        (
            "MK005020",
            "Царинска испостава Меџитлија - Стоков промет",
            "Customs Branch Medjitlija - Goods",
        ),
        ("MK006000", "Царинарница Тетово", "Customs Office Tetovo"),
        (
            "MK006010",
            "Царинска испостава Блаце - Стоков промет",
            "Customs Branch Blace - Goods",
        ),
    ];
    CodeList::new(
        "Box29_CustomsOffice",
        Some(BOX_CUSTOMS_OFFICE),
        codes
            .iter()
            .map(|(code, mk, en)| CodeEntry::new(code, mk, en))
            .collect(),
    )
    .with_descriptions("Излезен/влезен царински орган", "Exit/Entry Customs Office")
}
