//! Data models for reference-data artifacts
//!
//! These types mirror the JSON artifacts consumed by the declaration
//! support system, so serde renames follow the artifact field names
//! (`descriptionMK`, `boxNumber`, `sortOrder`, ...) rather than Rust
//! conventions.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a code list
///
/// The LON-specific flags are optional and omitted from serialized output
/// when absent, so declaration lists and LON lists share one entry type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,

    #[serde(rename = "descriptionMK")]
    pub description_mk: String,

    #[serde(rename = "descriptionEN", skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    #[serde(rename = "boxNumber", skip_serializing_if = "Option::is_none")]
    pub box_number: Option<String>,

    #[serde(rename = "sortOrder")]
    pub sort_order: u32,

    #[serde(rename = "validForLON", skip_serializing_if = "Option::is_none")]
    pub valid_for_lon: Option<bool>,

    #[serde(
        rename = "requiresAuthorization",
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_authorization: Option<bool>,

    #[serde(rename = "requiresGuarantee", skip_serializing_if = "Option::is_none")]
    pub requires_guarantee: Option<bool>,

    #[serde(rename = "requiresPreviousMRN", skip_serializing_if = "Option::is_none")]
    pub requires_previous_mrn: Option<bool>,

    #[serde(
        rename = "requiresMinistryNotification",
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_ministry_notification: Option<bool>,

    #[serde(
        rename = "mandatoryForProcedures",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandatory_for_procedures: Option<Vec<String>>,
}

impl CodeEntry {
    /// Create a bilingual entry; box number and sort order are assigned
    /// when the entry is placed into a list
    pub fn new(code: &str, description_mk: &str, description_en: &str) -> Self {
        Self {
            code: code.to_string(),
            description_mk: description_mk.to_string(),
            description_en: Some(description_en.to_string()),
            tooltip: None,
            box_number: None,
            sort_order: 0,
            valid_for_lon: None,
            requires_authorization: None,
            requires_guarantee: None,
            requires_previous_mrn: None,
            requires_ministry_notification: None,
            mandatory_for_procedures: None,
        }
    }

    /// Create an entry with a Macedonian description only, as produced by
    /// registry extraction
    pub fn mk_only(code: &str, description_mk: &str) -> Self {
        Self {
            description_en: None,
            ..Self::new(code, description_mk, "")
        }
    }

    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = Some(tooltip.to_string());
        self
    }

    pub fn valid_for_lon(mut self, valid: bool) -> Self {
        self.valid_for_lon = Some(valid);
        self
    }

    pub fn requires_authorization(mut self) -> Self {
        self.requires_authorization = Some(true);
        self
    }

    pub fn requires_guarantee(mut self, required: bool) -> Self {
        self.requires_guarantee = Some(required);
        self
    }

    pub fn requires_previous_mrn(mut self) -> Self {
        self.requires_previous_mrn = Some(true);
        self
    }

    pub fn requires_ministry_notification(mut self) -> Self {
        self.requires_ministry_notification = Some(true);
        self
    }

    pub fn mandatory_for(mut self, procedures: &[&str]) -> Self {
        self.mandatory_for_procedures =
            Some(procedures.iter().map(|p| p.to_string()).collect());
        self
    }
}

/// A named code list with its entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeList {
    #[serde(rename = "listType")]
    pub list_type: String,

    #[serde(rename = "boxNumber", skip_serializing_if = "Option::is_none")]
    pub box_number: Option<String>,

    #[serde(rename = "descriptionMK", skip_serializing_if = "Option::is_none")]
    pub description_mk: Option<String>,

    #[serde(rename = "descriptionEN", skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,

    #[serde(rename = "totalCodes")]
    pub total_codes: usize,

    pub codes: Vec<CodeEntry>,
}

impl CodeList {
    /// Build a list, stamping box number and 1-based sort order onto every
    /// entry
    pub fn new(list_type: &str, box_number: Option<&str>, mut codes: Vec<CodeEntry>) -> Self {
        for (i, entry) in codes.iter_mut().enumerate() {
            entry.box_number = box_number.map(|b| b.to_string());
            entry.sort_order = (i + 1) as u32;
        }
        Self {
            list_type: list_type.to_string(),
            box_number: box_number.map(|b| b.to_string()),
            description_mk: None,
            description_en: None,
            total_codes: codes.len(),
            codes,
        }
    }

    /// Attach bilingual list-level descriptions, as carried by the
    /// registry artifacts
    pub fn with_descriptions(mut self, description_mk: &str, description_en: &str) -> Self {
        self.description_mk = Some(description_mk.to_string());
        self.description_en = Some(description_en.to_string());
        self
    }
}

/// Metadata header of the complete code-list document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub generated: String,
    #[serde(rename = "totalCodelists")]
    pub total_codelists: usize,
    #[serde(rename = "totalCodes")]
    pub total_codes: usize,
    pub version: String,
    pub notes: Vec<String>,
}

/// The complete declaration code-list artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodelistDocument {
    pub metadata: DocumentMetadata,
    pub codelists: Vec<CodeList>,
}

impl CodelistDocument {
    pub fn new(source: &str, version: &str, notes: &[&str], codelists: Vec<CodeList>) -> Self {
        let total_codes = codelists.iter().map(|l| l.total_codes).sum();
        Self {
            metadata: DocumentMetadata {
                source: source.to_string(),
                generated: Utc::now().to_rfc3339(),
                total_codelists: codelists.len(),
                total_codes,
                version: version.to_string(),
                notes: notes.iter().map(|n| n.to_string()).collect(),
            },
            codelists,
        }
    }
}

/// One TARIC tariff record imported from the spreadsheet export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffRecord {
    #[serde(rename = "tariffNumber")]
    pub tariff_number: String,
    pub tarbr: String,
    pub taroz1: String,
    pub taroz2: String,
    pub taroz3: String,
    pub description: String,
    #[serde(rename = "customsRate")]
    pub customs_rate: Option<f64>,
    #[serde(rename = "unitMeasure")]
    pub unit_measure: Option<String>,
    pub fi: Option<String>,
    pub fu: Option<String>,
    pub pv: Option<String>,
    #[serde(rename = "vatRate")]
    pub vat_rate: Option<f64>,
    pub ex: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// One regulation record imported from the regulations export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationRecord {
    #[serde(rename = "celexNumber")]
    pub celex_number: String,
    #[serde(rename = "officialGazetteRef")]
    pub official_gazette_ref: Option<String>,
    #[serde(rename = "tariffNumber")]
    pub tariff_number: Option<String>,
    #[serde(rename = "descriptionEN")]
    pub description_en: Option<String>,
    #[serde(rename = "descriptionMK")]
    pub description_mk: Option<String>,
    #[serde(rename = "legalBasis")]
    pub legal_basis: Option<String>,
    #[serde(rename = "effectiveDate")]
    pub effective_date: Option<NaiveDateTime>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Kind of check a validation rule performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleType {
    Required,
    Format,
    ValueList,
    CrossTable,
    Calculation,
}

/// Severity of a validation-rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// One declaration validation rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "ruleCode")]
    pub rule_code: String,
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(rename = "ruleType")]
    pub rule_type: RuleType,
    #[serde(rename = "validationLogic")]
    pub validation_logic: String,
    #[serde(rename = "errorMessageMK")]
    pub error_message_mk: String,
    #[serde(rename = "errorMessageEN")]
    pub error_message_en: String,
    pub severity: Severity,
    #[serde(rename = "referenceDocument")]
    pub reference_document: String,
    #[serde(rename = "procedureCode")]
    pub procedure_code: Option<String>,
    pub priority: u32,
}

/// One row of the city translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRow {
    pub id: String,
    pub original: String,
    pub translated: String,
}
