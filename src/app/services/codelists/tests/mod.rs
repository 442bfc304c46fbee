use super::{complete_document, country_iso_list, country_registry, currency_list, lon_lists, office_registry};
use crate::constants::{BOX_COUNTRY, BOX_CURRENCY, BOX_CUSTOMS_OFFICE};

#[test]
fn test_lon_lists_shape() {
    let lists = lon_lists();
    assert_eq!(lists.len(), 7);

    let names: Vec<&str> = lists.iter().map(|l| l.list_type.as_str()).collect();
    assert!(names.contains(&"ProcedureCode"));
    assert!(names.contains(&"DocumentType"));
    assert!(names.contains(&"AuthorizationStatus"));

    for list in &lists {
        assert_eq!(list.total_codes, list.codes.len());
        assert!(!list.codes.is_empty());
    }
}

#[test]
fn test_lon_procedure_flags() {
    let lists = lon_lists();
    let procedures = lists.iter().find(|l| l.list_type == "ProcedureCode").unwrap();

    let suspension = procedures.codes.iter().find(|c| c.code == "42 00").unwrap();
    assert_eq!(suspension.valid_for_lon, Some(true));
    assert_eq!(suspension.requires_authorization, Some(true));
    assert_eq!(suspension.requires_guarantee, Some(true));

    let drawback = procedures.codes.iter().find(|c| c.code == "51 00").unwrap();
    assert_eq!(drawback.requires_guarantee, Some(false));

    let re_export = procedures.codes.iter().find(|c| c.code == "31 51").unwrap();
    assert_eq!(re_export.requires_previous_mrn, Some(true));

    let regular = procedures.codes.iter().find(|c| c.code == "40 00").unwrap();
    assert_eq!(regular.valid_for_lon, Some(false));
    assert_eq!(regular.requires_authorization, None);
}

#[test]
fn test_lon_mandatory_documents() {
    let lists = lon_lists();
    let documents = lists.iter().find(|l| l.list_type == "DocumentType").unwrap();

    let authorization = documents.codes.iter().find(|c| c.code == "N730").unwrap();
    assert_eq!(
        authorization.mandatory_for_procedures,
        Some(vec!["42 00".to_string(), "51 00".to_string()])
    );

    let export_licence = documents.codes.iter().find(|c| c.code == "N785").unwrap();
    assert_eq!(
        export_licence.mandatory_for_procedures,
        Some(vec!["31 51".to_string()])
    );
}

#[test]
fn test_complete_document_metadata() {
    let doc = complete_document();

    assert_eq!(doc.metadata.total_codelists, doc.codelists.len());
    let sum: usize = doc.codelists.iter().map(|l| l.total_codes).sum();
    assert_eq!(doc.metadata.total_codes, sum);
    assert_eq!(doc.codelists.len(), 14);
}

#[test]
fn test_complete_document_box_numbers() {
    let doc = complete_document();

    for list in &doc.codelists {
        if let Some(box_number) = &list.box_number {
            for entry in &list.codes {
                assert_eq!(entry.box_number.as_ref(), Some(box_number));
            }
        } else {
            // LON-specific lists have no box number
            assert!(list.list_type.starts_with("LON_"), "{}", list.list_type);
        }
    }
}

#[test]
fn test_complete_document_sort_orders_sequential() {
    let doc = complete_document();
    for list in &doc.codelists {
        for (i, entry) in list.codes.iter().enumerate() {
            assert_eq!(entry.sort_order as usize, i + 1);
        }
    }
}

#[test]
fn test_iso_lists() {
    let currencies = currency_list();
    assert_eq!(currencies.list_type, "Box22_Currency");
    assert_eq!(currencies.box_number.as_deref(), Some(BOX_CURRENCY));
    assert_eq!(currencies.total_codes, 38);
    assert!(currencies.codes.iter().any(|c| c.code == "MKD"));

    let countries = country_iso_list();
    assert_eq!(countries.list_type, "Box15a_CountryCode");
    assert_eq!(countries.box_number.as_deref(), Some(BOX_COUNTRY));
    assert_eq!(countries.total_codes, 50);
    assert_eq!(countries.codes[0].code, "MK");
}

#[test]
fn test_curated_registries() {
    let countries = country_registry();
    assert_eq!(countries.total_codes, 20);
    assert!(countries.description_mk.is_some());

    let offices = office_registry();
    assert_eq!(offices.list_type, "Box29_CustomsOffice");
    assert_eq!(offices.box_number.as_deref(), Some(BOX_CUSTOMS_OFFICE));
    assert_eq!(offices.total_codes, 16);
    assert!(offices.codes.iter().all(|c| c.code.starts_with("MK")));
    assert_eq!(offices.codes[0].code, "MK009000");
}
