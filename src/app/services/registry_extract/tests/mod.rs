use super::{extract_countries, extract_offices, extracted_country_list, extracted_office_list};

#[test]
fn test_extract_countries_from_table_text() {
    let text = "Албанија    AL AL AL AL\nБугарија    BG BG BG BG\n";
    let entries = extract_countries(text);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].code, "AL");
    assert_eq!(entries[0].description_mk, "Албанија");
    assert_eq!(entries[1].code, "BG");
}

#[test]
fn test_extract_countries_requires_repeated_code() {
    // Misaligned columns produce differing codes and are dropped
    let text = "Албанија    AL AL BG AL\nГрција    GR GR GR GR\n";
    let entries = extract_countries(text);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code, "GR");
}

#[test]
fn test_extract_countries_skips_curated_codes() {
    let text = "Бразил    BR BR BR BR\nСрбија    RS RS RS RS\n";
    let entries = extract_countries(text);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code, "RS");
}

#[test]
fn test_extract_countries_rejects_overlong_names() {
    let long_name = format!("Д{}", "а".repeat(70));
    let text = format!("{long_name}    ZZ ZZ ZZ ZZ\n");
    assert!(extract_countries(&text).is_empty());
}

#[test]
fn test_extract_offices_from_table_text() {
    let text = "Царинска испостава СКОПЈЕ 1 MK001010\nЦаринарница ГЕВГЕЛИЈА MK004000\n";
    let entries = extract_offices(text);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].code, "MK001010");
    assert_eq!(entries[0].description_mk, "Царинска испостава СКОПЈЕ 1");
    assert_eq!(entries[1].code, "MK004000");
    assert_eq!(entries[1].description_mk, "Царинарница ГЕВГЕЛИЈА");
}

#[test]
fn test_extract_offices_ignores_prose() {
    let text = "Во рубриката 29 се внесува шифрата на царинскиот орган.\n";
    assert!(extract_offices(text).is_empty());
}

#[test]
fn test_extracted_lists_carry_registry_metadata() {
    let countries = extracted_country_list(extract_countries("Албанија    AL AL AL AL\n"));
    assert_eq!(countries.list_type, "Box15a_CountryCode");
    assert_eq!(countries.box_number.as_deref(), Some("15а"));
    assert_eq!(countries.total_codes, 1);
    assert_eq!(countries.codes[0].sort_order, 1);
    assert_eq!(countries.codes[0].box_number.as_deref(), Some("15а"));

    let offices = extracted_office_list(extract_offices("Царинарница БИТОЛА MK005000\n"));
    assert_eq!(offices.list_type, "Box29_CustomsOffice");
    assert_eq!(offices.total_codes, 1);
}
