//! Declaration validation rules
//!
//! Builds the rule set applied to customs declarations before submission:
//! required-field checks, format checks, cross-table lookups against the
//! TARIC and MRN registries, and LON-specific calculations. Rules carry
//! bilingual error messages and a priority used for evaluation order.

use crate::app::models::{RuleType, Severity, ValidationRule};

#[cfg(test)]
mod tests;

struct RuleSpec {
    rule_code: &'static str,
    field_name: &'static str,
    rule_type: RuleType,
    validation_logic: &'static str,
    error_message_mk: &'static str,
    error_message_en: &'static str,
    severity: Severity,
    reference_document: &'static str,
    procedure_code: Option<&'static str>,
    priority: u32,
}

impl From<&RuleSpec> for ValidationRule {
    fn from(spec: &RuleSpec) -> Self {
        ValidationRule {
            rule_code: spec.rule_code.to_string(),
            field_name: spec.field_name.to_string(),
            rule_type: spec.rule_type,
            validation_logic: spec.validation_logic.to_string(),
            error_message_mk: spec.error_message_mk.to_string(),
            error_message_en: spec.error_message_en.to_string(),
            severity: spec.severity,
            reference_document: spec.reference_document.to_string(),
            procedure_code: spec.procedure_code.map(|p| p.to_string()),
            priority: spec.priority,
        }
    }
}

/// Build all validation rules in priority order
pub fn build_rules() -> Vec<ValidationRule> {
    RULE_SPECS.iter().map(ValidationRule::from).collect()
}

const RULE_SPECS: &[RuleSpec] = &[
    RuleSpec {
        rule_code: "BOX01_REQUIRED",
        field_name: "DeclarationType",
        rule_type: RuleType::Required,
        validation_logic: "NOT NULL AND LENGTH > 0",
        error_message_mk: "Box 01: Вид на декларација е задолжителен",
        error_message_en: "Box 01: Declaration type is required",
        severity: Severity::Error,
        reference_document: "Правилник, Член 7",
        procedure_code: None,
        priority: 10,
    },
    RuleSpec {
        rule_code: "BOX33_FORMAT",
        field_name: "TariffCode",
        rule_type: RuleType::Format,
        validation_logic: "REGEX: ^\\d{10}$",
        error_message_mk: "Box 33: Тарифната ознака мора да биде точно 10 цифри",
        error_message_en: "Box 33: Tariff code must be exactly 10 digits",
        severity: Severity::Error,
        reference_document: "Правилник, Член 15",
        procedure_code: None,
        priority: 15,
    },
    RuleSpec {
        rule_code: "BOX33_TARIC_EXISTS",
        field_name: "TariffCode",
        rule_type: RuleType::CrossTable,
        validation_logic: "EXISTS IN TariffCodes WHERE TariffNumber = {value} AND IsActive = TRUE",
        error_message_mk: "Box 33: Тарифната ознака не постои во TARIC базата",
        error_message_en: "Box 33: Tariff code does not exist in TARIC database",
        severity: Severity::Error,
        reference_document: "TARIC база",
        procedure_code: None,
        priority: 16,
    },
    RuleSpec {
        rule_code: "BOX37_LON_PROCEDURES",
        field_name: "ProcedureCode",
        rule_type: RuleType::ValueList,
        validation_logic: "IN ('42 00', '51 00', '31 51')",
        error_message_mk: "Box 37: За LON се дозволени само процедури 42 00, 51 00 или 31 51",
        error_message_en: "Box 37: Only procedures 42 00, 51 00 or 31 51 are allowed for LON",
        severity: Severity::Error,
        reference_document: "Упатство LON, стр. 3",
        procedure_code: None,
        priority: 20,
    },
    RuleSpec {
        rule_code: "LON_AUTHORIZATION_REQUIRED",
        field_name: "LONAuthorizationId",
        rule_type: RuleType::Required,
        validation_logic: "NOT NULL WHEN ProcedureCode IN ('42 00', '51 00')",
        error_message_mk: "Процедури 42 00 и 51 00 бараат одобрение за увоз за облагородување (N730)",
        error_message_en: "Procedures 42 00 and 51 00 require inward processing authorization (N730)",
        severity: Severity::Error,
        reference_document: "Упатство LON, точка 12",
        procedure_code: Some("42 00|51 00"),
        priority: 21,
    },
    RuleSpec {
        rule_code: "LON_GUARANTEE_REQUIRED_4200",
        field_name: "GuaranteeReference",
        rule_type: RuleType::Required,
        validation_logic: "NOT NULL WHEN ProcedureCode = '42 00'",
        error_message_mk: "Процедура 42 00 бара инструмент за обезбедување (гаранција)",
        error_message_en: "Procedure 42 00 requires security instrument (guarantee)",
        severity: Severity::Error,
        reference_document: "Упатство LON, точка 12-13",
        procedure_code: Some("42 00"),
        priority: 22,
    },
    RuleSpec {
        rule_code: "BOX40_MATCH_TARIC",
        field_name: "DutyRate",
        rule_type: RuleType::CrossTable,
        validation_logic: "MATCH TariffCodes.CustomsRate WHERE TariffNumber = {TariffCode}",
        error_message_mk: "Box 40: Царинската стапка не одговара на TARIC базата за оваа тарифна ознака",
        error_message_en: "Box 40: Customs rate does not match TARIC database for this tariff code",
        severity: Severity::Warning,
        reference_document: "TARIC база, Правилник Член 47",
        procedure_code: None,
        priority: 40,
    },
    RuleSpec {
        rule_code: "BOX40_ZERO_FOR_4200",
        field_name: "DutyRate",
        rule_type: RuleType::Calculation,
        validation_logic: "DutyRate = 0 WHEN ProcedureCode = '42 00'",
        error_message_mk: "Box 40: За процедура 42 00 (одложено плаќање) царинската стапка мора да биде 0%",
        error_message_en: "Box 40: For procedure 42 00 (suspension system) customs rate must be 0%",
        severity: Severity::Error,
        reference_document: "Упатство LON, стр. 2",
        procedure_code: Some("42 00"),
        priority: 41,
    },
    RuleSpec {
        rule_code: "DOC_N730_REQUIRED",
        field_name: "Documents",
        rule_type: RuleType::Required,
        validation_logic: "EXISTS Document WHERE DocumentType = 'N730' AND ProcedureCode IN ('42 00', '51 00')",
        error_message_mk: "Документ N730 (Одобрение за LON) е задолжителен за процедури 42 00 и 51 00",
        error_message_en: "Document N730 (LON Authorization) is mandatory for procedures 42 00 and 51 00",
        severity: Severity::Error,
        reference_document: "Упатство LON, точка 17",
        procedure_code: Some("42 00|51 00"),
        priority: 44,
    },
    RuleSpec {
        rule_code: "DOC_N380_REQUIRED",
        field_name: "Documents",
        rule_type: RuleType::Required,
        validation_logic: "EXISTS Document WHERE DocumentType = 'N380' AND ProcedureCode IN ('42 00', '51 00')",
        error_message_mk: "Документ N380 (Проформа фактура) е задолжителен за процедури 42 00 и 51 00",
        error_message_en: "Document N380 (Pro forma invoice) is mandatory for procedures 42 00 and 51 00",
        severity: Severity::Error,
        reference_document: "Упатство LON",
        procedure_code: Some("42 00|51 00"),
        priority: 44,
    },
    RuleSpec {
        rule_code: "DOC_N785_REQUIRED_REEXPORT",
        field_name: "Documents",
        rule_type: RuleType::Required,
        validation_logic: "EXISTS Document WHERE DocumentType = 'N785' AND ProcedureCode = '31 51'",
        error_message_mk: "Документ N785 (Извозна дозвола) е задолжителен за повторен извоз (31 51)",
        error_message_en: "Document N785 (Export licence) is mandatory for re-exportation (31 51)",
        severity: Severity::Error,
        reference_document: "Повторен извоз - насока, стр. 2",
        procedure_code: Some("31 51"),
        priority: 44,
    },
    RuleSpec {
        rule_code: "MRN_REQUIRED_REEXPORT",
        field_name: "PreviousMRN",
        rule_type: RuleType::Required,
        validation_logic: "NOT NULL WHEN ProcedureCode = '31 51'",
        error_message_mk: "За повторен извоз (31 51) е задолжителен MRN на претходна увозна декларација",
        error_message_en: "For re-exportation (31 51) MRN of previous import declaration is required",
        severity: Severity::Error,
        reference_document: "Повторен извоз - насока",
        procedure_code: Some("31 51"),
        priority: 50,
    },
    RuleSpec {
        rule_code: "MRN_EXISTS_IN_REGISTRY",
        field_name: "PreviousMRN",
        rule_type: RuleType::CrossTable,
        validation_logic: "EXISTS IN MRNRegistry WHERE MRN = {value} AND IsActive = TRUE",
        error_message_mk: "MRN на претходна декларација не постои во регистарот",
        error_message_en: "MRN of previous declaration does not exist in registry",
        severity: Severity::Error,
        reference_document: "Систем за следење MRN",
        procedure_code: Some("31 51"),
        priority: 51,
    },
    RuleSpec {
        rule_code: "MRN_SUFFICIENT_QUANTITY",
        field_name: "Quantity",
        rule_type: RuleType::Calculation,
        validation_logic: "SUM(UsedQuantity) + {Quantity} <= TotalQuantity FROM MRNRegistry WHERE MRN = {PreviousMRN}",
        error_message_mk: "Количината надминува достапното количество од претходната декларација",
        error_message_en: "Quantity exceeds available quantity from previous declaration",
        severity: Severity::Error,
        reference_document: "Систем за следење MRN",
        procedure_code: Some("31 51"),
        priority: 52,
    },
    RuleSpec {
        rule_code: "LON_COMPLETION_PERIOD",
        field_name: "DueDate",
        rule_type: RuleType::Calculation,
        validation_logic: "DueDate <= DeclarationDate + LONAuthorization.CompletionPeriodDays WHEN ProcedureCode IN ('42 00', '51 00')",
        error_message_mk: "Рокот за завршување надминува период утврден во одобрението",
        error_message_en: "Completion period exceeds period specified in authorization",
        severity: Severity::Warning,
        reference_document: "Упатство LON, точка 15",
        procedure_code: Some("42 00|51 00"),
        priority: 60,
    },
    RuleSpec {
        rule_code: "LON_INVENTORY_REQUIRED",
        field_name: "Documents",
        rule_type: RuleType::Required,
        validation_logic: "EXISTS Document WHERE DocumentType = 'N954'",
        error_message_mk: "Имателот на одобрение е должен да води евиденција за стока (N954)",
        error_message_en: "Authorization holder must maintain inventory records (N954)",
        severity: Severity::Warning,
        reference_document: "Упатство LON, точка 15",
        procedure_code: Some("42 00|51 00"),
        priority: 70,
    },
    RuleSpec {
        rule_code: "LON_YIELD_RATE_CHECK",
        field_name: "Quantity",
        rule_type: RuleType::Calculation,
        validation_logic: "CompensatingQuantity <= ImportQuantity * LONAuthorizationItem.YieldRate * (1 + AllowedWastePercentage)",
        error_message_mk: "Количината на компензациски производ надминува дозволен принос",
        error_message_en: "Compensating product quantity exceeds allowed yield rate",
        severity: Severity::Warning,
        reference_document: "Упатство LON",
        procedure_code: Some("31 51"),
        priority: 80,
    },
];
