//! Integration tests for JSON artifact generation
//!
//! These tests write the generated artifacts into a temporary directory
//! and parse them back as raw JSON to verify the field names and shapes
//! the declaration support system consumes.

use customs_kb::app::adapters::filesystem::write_json_artifact;
use customs_kb::app::services::{codelists, validation_rules};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read artifact");
    serde_json::from_str(&text).expect("Artifact should be valid JSON")
}

/// Test that the LON code-list artifact round-trips through disk
///
/// Purpose: Validate the on-disk shape of the LON lists
/// Benefit: Ensures consumers see the camelCase field names they expect
#[test]
fn test_lon_codelists_artifact_shape() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lon_codelists.json");

    let lists = codelists::lon_lists();
    let bytes = write_json_artifact(&path, &lists).expect("Write should succeed");
    assert!(bytes > 0);

    let json = read_json(&path);
    let lists = json.as_array().expect("Artifact should be a JSON array");
    assert_eq!(lists.len(), 7);

    let procedures = lists
        .iter()
        .find(|l| l["listType"] == "ProcedureCode")
        .expect("ProcedureCode list should be present");
    assert_eq!(
        procedures["totalCodes"].as_u64().expect("totalCodes"),
        procedures["codes"].as_array().expect("codes").len() as u64
    );

    let first = &procedures["codes"][0];
    assert!(first["code"].is_string());
    assert!(first["descriptionMK"].is_string());
    assert_eq!(first["sortOrder"], 1);
}

/// Test the complete declaration code-list document on disk
///
/// Purpose: Validate metadata totals and box-number stamping end to end
#[test]
fn test_complete_codelists_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lon_codelists_complete.json");

    let document = codelists::complete_document();
    write_json_artifact(&path, &document).expect("Write should succeed");

    let json = read_json(&path);
    let metadata = &json["metadata"];
    let codelists = json["codelists"].as_array().expect("codelists array");

    assert_eq!(metadata["totalCodelists"].as_u64(), Some(codelists.len() as u64));
    assert_eq!(metadata["version"], "2.0");
    assert!(metadata["generated"].is_string());

    let summed: u64 = codelists
        .iter()
        .map(|l| l["totalCodes"].as_u64().expect("totalCodes"))
        .sum();
    assert_eq!(metadata["totalCodes"].as_u64(), Some(summed));

    // Box-keyed lists carry the box number on the list and on every entry
    let currencies = codelists
        .iter()
        .find(|l| l["listType"] == "Box22_Currency")
        .expect("Box22_Currency list should be present");
    assert_eq!(currencies["boxNumber"], "22");
    for entry in currencies["codes"].as_array().expect("codes") {
        assert_eq!(entry["boxNumber"], "22");
    }
}

/// Test the ISO currency and country artifacts
#[test]
fn test_iso_artifacts() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let currencies_path = dir.path().join("currencies_box22_iso.json");
    write_json_artifact(&currencies_path, &codelists::currency_list())
        .expect("Write should succeed");
    let currencies = read_json(&currencies_path);
    assert_eq!(currencies["totalCodes"], 38);
    let mkd = currencies["codes"]
        .as_array()
        .expect("codes")
        .iter()
        .find(|c| c["code"] == "MKD")
        .expect("MKD should be present");
    assert!(mkd["descriptionMK"].as_str().expect("descriptionMK").contains("денар"));

    let countries_path = dir.path().join("countries_box15a_iso.json");
    write_json_artifact(&countries_path, &codelists::country_iso_list())
        .expect("Write should succeed");
    let countries = read_json(&countries_path);
    assert_eq!(countries["totalCodes"], 50);
    assert_eq!(countries["boxNumber"], "15а");
}

/// Test the validation-rules artifact on disk
///
/// Purpose: Validate rule count, field names and enum serialization
#[test]
fn test_validation_rules_artifact() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lon_validation_rules.json");

    write_json_artifact(&path, &validation_rules::build_rules()).expect("Write should succeed");

    let json = read_json(&path);
    let rules = json.as_array().expect("Artifact should be a JSON array");
    assert_eq!(rules.len(), 17);

    let format_rule = rules
        .iter()
        .find(|r| r["ruleCode"] == "BOX33_FORMAT")
        .expect("BOX33_FORMAT should be present");
    assert_eq!(format_rule["ruleType"], "Format");
    assert_eq!(format_rule["severity"], "Error");
    assert!(format_rule["errorMessageMK"].is_string());
    assert!(format_rule["errorMessageEN"].is_string());

    let warnings = rules.iter().filter(|r| r["severity"] == "Warning").count();
    assert_eq!(warnings, 4);
}

/// Test the curated registry artifacts
#[test]
fn test_registry_artifacts() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let countries_path = dir.path().join("countries_box15a.json");
    write_json_artifact(&countries_path, &codelists::country_registry())
        .expect("Write should succeed");
    let countries = read_json(&countries_path);
    assert_eq!(countries["totalCodes"], 20);
    assert!(countries["descriptionMK"].is_string());

    let offices_path = dir.path().join("customs_offices_box29.json");
    write_json_artifact(&offices_path, &codelists::office_registry())
        .expect("Write should succeed");
    let offices = read_json(&offices_path);
    assert_eq!(offices["totalCodes"], 16);
    assert_eq!(offices["boxNumber"], "29");
    assert_eq!(offices["codes"][0]["code"], "MK009000");
}
