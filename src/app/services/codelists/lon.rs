//! LON-specific code lists
//!
//! Lists used by inward-processing (LON) procedures: procedure codes with
//! authorization and guarantee flags, mandatory documents, transport and
//! package types, processing operations, economic conditions and
//! authorization statuses.

use crate::app::models::{CodeEntry, CodeList};

/// Build all LON code lists in presentation order
pub fn lon_lists() -> Vec<CodeList> {
    vec![
        procedure_codes(),
        document_types(),
        transport_modes(),
        package_types(),
        processing_operations(),
        economic_conditions(),
        authorization_statuses(),
    ]
}

fn procedure_codes() -> CodeList {
    CodeList::new(
        "ProcedureCode",
        None,
        vec![
            CodeEntry::new(
                "40 00",
                "Пуштање во слободен промет",
                "Release for free circulation",
            )
            .valid_for_lon(false),
            CodeEntry::new(
                "42 00",
                "Увоз за облагородување - систем на одложено плаќање",
                "Inward processing - suspension system",
            )
            .valid_for_lon(true)
            .requires_authorization()
            .requires_guarantee(true),
            CodeEntry::new(
                "51 00",
                "Увоз за облагородување - систем на враќање",
                "Inward processing - drawback system",
            )
            .valid_for_lon(true)
            .requires_authorization()
            .requires_guarantee(false),
            CodeEntry::new("21 00", "Привремен увоз", "Temporary admission").valid_for_lon(false),
            CodeEntry::new("10 00", "Извоз", "Export").valid_for_lon(false),
            CodeEntry::new(
                "31 51",
                "Повторен извоз по облагородување (од 42 00)",
                "Re-exportation following inward processing (from 42 00)",
            )
            .valid_for_lon(true)
            .requires_previous_mrn(),
        ],
    )
}

fn document_types() -> CodeList {
    CodeList::new(
        "DocumentType",
        None,
        vec![
            CodeEntry::new("N380", "Проформа фактура", "Pro forma invoice")
                .valid_for_lon(true)
                .mandatory_for(&["42 00", "51 00"]),
            CodeEntry::new(
                "N730",
                "Одобрение за увоз за облагородување",
                "Authorisation for inward processing",
            )
            .valid_for_lon(true)
            .mandatory_for(&["42 00", "51 00"]),
            CodeEntry::new("N703", "Трговски договор", "Commercial contract")
                .valid_for_lon(true)
                .mandatory_for(&["42 00", "51 00"]),
            CodeEntry::new("N785", "Извозна дозвола", "Export licence")
                .valid_for_lon(true)
                .mandatory_for(&["31 51"]),
            CodeEntry::new("N954", "Евиденција за стока", "Inventory record").valid_for_lon(true),
            CodeEntry::new("N235", "Пакинг листа", "Packing list").valid_for_lon(true),
            CodeEntry::new(
                "Y921",
                "Превозен документ (CMR, коносман, ...)",
                "Transport document (CMR, B/L, ...)",
            )
            .valid_for_lon(true),
        ],
    )
}

fn transport_modes() -> CodeList {
    CodeList::new(
        "TransportMode",
        None,
        vec![
            CodeEntry::new("1", "Поморски транспорт", "Maritime transport"),
            CodeEntry::new("2", "Железнички транспорт", "Rail transport"),
            CodeEntry::new("3", "Друмски транспорт", "Road transport"),
            CodeEntry::new("4", "Воздушен транспорт", "Air transport"),
            CodeEntry::new("5", "Пошта", "Postal consignment"),
            CodeEntry::new("7", "Фиксирани транспортни средства", "Fixed transport installations"),
            CodeEntry::new("8", "Внатрешни водни патишта", "Inland waterway transport"),
            CodeEntry::new("9", "Непознато", "Not known"),
        ],
    )
}

fn package_types() -> CodeList {
    CodeList::new(
        "PackageType",
        None,
        vec![
            CodeEntry::new("BX", "Кутија", "Box"),
            CodeEntry::new("CT", "Картон", "Carton"),
            CodeEntry::new("PK", "Пакет", "Package"),
            CodeEntry::new("PA", "Палета", "Pallet"),
            CodeEntry::new("DR", "Буре", "Drum"),
            CodeEntry::new("BG", "Вреќа", "Bag"),
            CodeEntry::new("CN", "Контејнер", "Container"),
            CodeEntry::new("NE", "Без пакување", "Unpacked"),
        ],
    )
}

fn processing_operations() -> CodeList {
    CodeList::new(
        "InwardProcessingOperation",
        None,
        vec![
            CodeEntry::new(
                "OBR",
                "Обработка (механичка, хемиска, монтажа, демонтажа)",
                "Processing (mechanical, chemical, assembly, disassembly)",
            ),
            CodeEntry::new("PRE", "Преработка на стока", "Transformation of goods"),
            CodeEntry::new("POP", "Поправка на стока", "Repair of goods"),
            CodeEntry::new(
                "POM",
                "Употреба на помошни средства за производство",
                "Use of auxiliary materials for production",
            ),
        ],
    )
}

fn economic_conditions() -> CodeList {
    CodeList::new(
        "EconomicCondition",
        None,
        vec![
            CodeEntry::new(
                "10",
                "Условот е исполнет ако компензациските производи се наменети за извоз",
                "Condition met if compensating products are intended for export",
            )
            .requires_ministry_notification(),
            CodeEntry::new(
                "11",
                "Условот е исполнет ако облагородувањето придонесува за зголемување на економската активност",
                "Condition met if processing contributes to increased economic activity",
            )
            .requires_ministry_notification(),
            CodeEntry::new(
                "12",
                "Условот е исполнет ако нема негативно влијание врз суштинските интереси на домашни производители",
                "Condition met if no adverse effect on essential interests of domestic producers",
            )
            .requires_ministry_notification(),
        ],
    )
}

fn authorization_statuses() -> CodeList {
    CodeList::new(
        "AuthorizationStatus",
        None,
        vec![
            CodeEntry::new("ACTIVE", "Активно", "Active"),
            CodeEntry::new("SUSPENDED", "Суспендирано", "Suspended"),
            CodeEntry::new("REVOKED", "Повлечено", "Revoked"),
            CodeEntry::new("EXPIRED", "Истечено", "Expired"),
            CodeEntry::new("PENDING", "Во обработка", "Pending"),
        ],
    )
}
