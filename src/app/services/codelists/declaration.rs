//! Complete declaration code lists keyed by SAD box number
//!
//! Transcribed from the rulebook on filling in the customs declaration,
//! chapter II (codes). Every list carries its box number and per-entry
//! tooltips for contextual help in dropdowns.

use crate::app::models::{CodeEntry, CodeList, CodelistDocument};
use crate::constants::{CODELIST_SOURCE, CODELIST_VERSION};

/// Build the complete code-list document with metadata header
pub fn complete_document() -> CodelistDocument {
    CodelistDocument::new(
        CODELIST_SOURCE,
        CODELIST_VERSION,
        &[
            "Сите шифрарници со Box број за dropdown UI елементи",
            "Tooltip текст за контекстуална помош",
            "Опис на македонски и англиски јазик",
            "ISO стандарди за земји, валути, транспорт",
        ],
        vec![
            declaration_types(),
            declarant_statuses(),
            container_codes(),
            inco_terms(),
            invoice_currencies(),
            transaction_natures(),
            border_transport_modes(),
            package_types(),
            procedure_codes(),
            document_types(),
            calculation_methods(),
            lon_operation_types(),
            lon_economic_conditions(),
            lon_authorization_statuses(),
        ],
    )
}

fn declaration_types() -> CodeList {
    CodeList::new(
        "Box01_DeclarationType",
        Some("1"),
        vec![
            CodeEntry::new(
                "AA",
                "Царинска декларација во редовна постапка",
                "Regular customs declaration",
            )
            .with_tooltip("Член 72 од Законот"),
            CodeEntry::new("BB", "Непотполна декларација", "Incomplete declaration")
                .with_tooltip("Поедноставена постапка - член 88 став (1) точка (а)"),
            CodeEntry::new("CC", "Поедноставена декларација", "Simplified declaration")
                .with_tooltip("Поедноставена постапка - член 88 став (1) точка (б)"),
            CodeEntry::new(
                "DD",
                "Редовна декларација пред ставање на увид",
                "Regular declaration before presentation",
            )
            .with_tooltip("Поднесување пред декларантот да ја стави стоката на увид"),
            CodeEntry::new(
                "EE",
                "Непотполна декларација пред ставање на увид",
                "Incomplete declaration before presentation",
            )
            .with_tooltip("Поднесување пред декларантот да ја стави стоката на увид"),
            CodeEntry::new(
                "FF",
                "Поедноставена декларација пред ставање на увид",
                "Simplified declaration before presentation",
            )
            .with_tooltip("Поднесување пред декларантот да ја стави стоката на увид"),
            CodeEntry::new(
                "XX",
                "Дополнителна декларација (BB/EE)",
                "Supplementary declaration (BB/EE)",
            )
            .with_tooltip("Дополнителна декларација во рамки на поедноставена постапка B и E"),
            CodeEntry::new(
                "YY",
                "Дополнителна декларација (CC/FF)",
                "Supplementary declaration (CC/FF)",
            )
            .with_tooltip("Дополнителна декларација во рамки на поедноставена постапка C и F"),
            CodeEntry::new(
                "ZZ",
                "Декларација со запишување во евиденцијата",
                "Declaration by entry in records",
            )
            .with_tooltip("Поедноставена постапка - член 88 став (1) точка (в)"),
            CodeEntry::new("IM", "Увоз", "Import")
                .with_tooltip("Друга подрубрика - вид на декларација"),
            CodeEntry::new("EX", "Извоз", "Export")
                .with_tooltip("Друга подрубрика - вид на декларација"),
            CodeEntry::new("T1", "Стока со статус T1 - странска стока", "T1 status goods - non-EU goods")
                .with_tooltip("Трета подрубрика - транзит"),
            CodeEntry::new("T2", "Стока со статус T2 - стока на ЕУ", "T2 status goods - EU goods")
                .with_tooltip("Трета подрубрика - транзит"),
        ],
    )
}

fn declarant_statuses() -> CodeList {
    CodeList::new(
        "Box14_DeclarantStatus",
        Some("14"),
        vec![
            CodeEntry::new("1", "Декларант", "Declarant")
                .with_tooltip("Лицето кое поднесува декларација"),
            CodeEntry::new("2", "Застапник (директно застапување)", "Agent (direct representation)")
                .with_tooltip("Член 5 став (2) точка а) од Законот"),
            CodeEntry::new(
                "3",
                "Застапник (индиректно застапување)",
                "Agent (indirect representation)",
            )
            .with_tooltip("Член 5 став (2) точка б) од Законот"),
        ],
    )
}

fn container_codes() -> CodeList {
    CodeList::new(
        "Box19_Container",
        Some("19"),
        vec![
            CodeEntry::new(
                "0",
                "Стока која не е натоварена во контејнер",
                "Goods not loaded in container",
            )
            .with_tooltip("Без контејнер"),
            CodeEntry::new(
                "1",
                "Стока која е натоварена во контејнер",
                "Goods loaded in container",
            )
            .with_tooltip("Со контејнер"),
        ],
    )
}

fn inco_terms() -> CodeList {
    CodeList::new(
        "Box20_IncoTerms",
        Some("20"),
        vec![
            CodeEntry::new("EXW", "Франко фабрика", "Ex Works")
                .with_tooltip("Било кој транспорт - назначено место"),
            CodeEntry::new("FCA", "Франко превозник", "Free Carrier")
                .with_tooltip("Било кој транспорт - назначено место"),
            CodeEntry::new("FAS", "Франко покрај бокот на бродот", "Free Alongside Ship")
                .with_tooltip("Морски и речен транспорт - назначено испратно пристаниште"),
            CodeEntry::new("FOB", "Франко на палубата на бродот", "Free On Board")
                .with_tooltip("Морски и речен транспорт - назначено испратно пристаниште"),
            CodeEntry::new("CFR", "Трошоци и возарина", "Cost and Freight")
                .with_tooltip("Морски и речен транспорт - назначено одредишно пристаниште"),
            CodeEntry::new("CIF", "Трошоци, осигурување и возарина", "Cost, Insurance and Freight")
                .with_tooltip("Морски и речен транспорт - назначено одредишно пристаниште"),
            CodeEntry::new("CPT", "Превозни трошоци платени до", "Carriage Paid To")
                .with_tooltip("Било кој транспорт - назначено одредиште"),
            CodeEntry::new(
                "CIP",
                "Превозни трошоци и осигурување платени до",
                "Carriage and Insurance Paid To",
            )
            .with_tooltip("Било кој транспорт - назначено одредиште"),
            CodeEntry::new("DAP", "Испорачано на место", "Delivered At Place")
                .with_tooltip("Било кој транспорт - назначено одредиште"),
            CodeEntry::new("DPU", "Испорачано на место, истоварено", "Delivered at Place Unloaded")
                .with_tooltip("Било кој транспорт - назначено одредиште"),
            CodeEntry::new("DDP", "Испорачано оцаринето", "Delivered Duty Paid")
                .with_tooltip("Било кој транспорт - назначено одредиште"),
        ],
    )
}

fn invoice_currencies() -> CodeList {
    CodeList::new(
        "Box22_Currency",
        Some("22"),
        vec![
            CodeEntry::new("EUR", "Евро", "Euro"),
            CodeEntry::new("USD", "САД долар", "US Dollar"),
            CodeEntry::new("GBP", "Британска фунта", "British Pound"),
            CodeEntry::new("CHF", "Швајцарски франк", "Swiss Franc"),
            CodeEntry::new("MKD", "Македонски денар", "Macedonian Denar"),
            CodeEntry::new("BGN", "Бугарски лев", "Bulgarian Lev"),
            CodeEntry::new("HRK", "Хрватска куна", "Croatian Kuna"),
            CodeEntry::new("TRY", "Турска лира", "Turkish Lira"),
            CodeEntry::new("RUB", "Руска рубља", "Russian Ruble"),
            CodeEntry::new("CNY", "Кинески јуан", "Chinese Yuan"),
            CodeEntry::new("JPY", "Јапонски јен", "Japanese Yen"),
            CodeEntry::new("CAD", "Канадски долар", "Canadian Dollar"),
            CodeEntry::new("AUD", "Австралиски долар", "Australian Dollar"),
            CodeEntry::new("SEK", "Шведска круна", "Swedish Krona"),
            CodeEntry::new("NOK", "Норвешка круна", "Norwegian Krone"),
            CodeEntry::new("DKK", "Данска круна", "Danish Krone"),
            CodeEntry::new("CZK", "Чешка круна", "Czech Koruna"),
            CodeEntry::new("HUF", "Унгарска форинта", "Hungarian Forint"),
            CodeEntry::new("PLN", "Полска злота", "Polish Zloty"),
            CodeEntry::new("RON", "Нов романски реу", "Romanian Leu"),
        ],
    )
}

fn transaction_natures() -> CodeList {
    CodeList::new(
        "Box24_NatureOfTransaction",
        Some("24"),
        vec![
            CodeEntry::new("11", "Конечно купување/продажба", "Outright purchase/sale")
                .with_tooltip("Трансакција со промена на сопственост со плаќање"),
            CodeEntry::new(
                "12",
                "Набавка за продажба на пробен период или консигнација",
                "Supply for sale on approval or consignment",
            )
            .with_tooltip("Трансакција со промена на сопственост со плаќање"),
            CodeEntry::new("13", "Бартер трговија (компензација)", "Barter trade")
                .with_tooltip("Трансакција со промена на сопственост со плаќање"),
            CodeEntry::new("14", "Финансиски лизинг (изнајмување на отплата)", "Financial leasing")
                .with_tooltip("Трансакција со промена на сопственост со плаќање"),
            CodeEntry::new("19", "Друго", "Other")
                .with_tooltip("Трансакција со промена на сопственост - друго"),
            CodeEntry::new("21", "Враќање на стока", "Return of goods")
                .with_tooltip("Враќање и замена без надоместок"),
            CodeEntry::new("22", "Замена на вратена стока", "Replacement for returned goods")
                .with_tooltip("Враќање и замена без надоместок"),
            CodeEntry::new(
                "23",
                "Замена (гаранција) на стока која не е вратена",
                "Replacement (warranty) of goods not returned",
            )
            .with_tooltip("Враќање и замена без надоместок"),
            CodeEntry::new("29", "Друго", "Other").with_tooltip("Враќање и замена - друго"),
            CodeEntry::new(
                "30",
                "Трансакција без финансиски надоместок (хуманитарни пратки)",
                "Transaction without financial compensation",
            )
            .with_tooltip("Промена на сопственост без надоместок"),
            CodeEntry::new(
                "41",
                "Стока за облагородување (ќе се врати)",
                "Goods for processing (to be returned)",
            )
            .with_tooltip("Постапки со цел облагородување - со враќање"),
            CodeEntry::new(
                "42",
                "Стока за облагородување (нема да се врати)",
                "Goods for processing (not to be returned)",
            )
            .with_tooltip("Постапки со цел облагородување - без враќање"),
            CodeEntry::new(
                "51",
                "Стока после облагородување (се враќа)",
                "Goods after processing (returning)",
            )
            .with_tooltip("Постапки после облагородување - враќање"),
            CodeEntry::new(
                "52",
                "Стока после облагородување (не се враќа)",
                "Goods after processing (not returning)",
            )
            .with_tooltip("Постапки после облагородување - без враќање"),
            CodeEntry::new(
                "61",
                "Привремен увоз/извоз заради закуп (оперативен лизинг < 2 години)",
                "Temporary import/export for hire/lease (< 2 years)",
            )
            .with_tooltip("Специфични трансакции"),
            CodeEntry::new(
                "62",
                "Друг привремен увоз/извоз (< 2 години)",
                "Other temporary import/export (< 2 years)",
            )
            .with_tooltip("Специфични трансакции"),
            CodeEntry::new("63", "Странско вложување", "Foreign investment")
                .with_tooltip("Специфични трансакции"),
            CodeEntry::new("64", "Поправка и одржување со плаќање", "Repair and maintenance with payment")
                .with_tooltip("Специфични трансакции"),
            CodeEntry::new(
                "65",
                "Работи кои следат после поправка и одржување со плаќање",
                "Goods following repair/maintenance with payment",
            )
            .with_tooltip("Специфични трансакции"),
            CodeEntry::new("66", "Бесплатна поправка и одржување", "Free repair and maintenance")
                .with_tooltip("Специфични трансакции"),
            CodeEntry::new(
                "67",
                "Работи кои следат после бесплатна поправка и одржување",
                "Goods following free repair/maintenance",
            )
            .with_tooltip("Специфични трансакции"),
            CodeEntry::new(
                "68",
                "Враќање во непроменета состојба на несоодветни стоки",
                "Return in unchanged state of unsuitable goods",
            )
            .with_tooltip("Специфични трансакции"),
            CodeEntry::new(
                "70",
                "Трансакција во врска со заеднички одбранбени/производни програми",
                "Transaction related to joint defense/production programs",
            )
            .with_tooltip("Меѓувладини програми"),
            CodeEntry::new(
                "80",
                "Набавка на градежен материјал во рамки на генерален договор",
                "Supply of construction materials under general contract",
            )
            .with_tooltip("Генерални договори за изградба"),
            CodeEntry::new(
                "91",
                "Изнајмување, позајмување и оперативен лизинг (> 24 месеци)",
                "Hire, loan and operational leasing (> 24 months)",
            )
            .with_tooltip("Други трансакции"),
            CodeEntry::new("99", "Друго", "Other").with_tooltip("Други трансакции"),
        ],
    )
}

fn border_transport_modes() -> CodeList {
    CodeList::new(
        "Box25_TransportMode",
        Some("25"),
        vec![
            CodeEntry::new("10", "Поморски транспорт", "Maritime transport")
                .with_tooltip("Основен код 1"),
            CodeEntry::new(
                "12",
                "Железнички вагон на поморски пловен објект",
                "Rail wagon on maritime vessel",
            )
            .with_tooltip("Проширен код 1"),
            CodeEntry::new(
                "16",
                "Моторно возило на поморски пловен објект",
                "Motor vehicle on maritime vessel",
            )
            .with_tooltip("Проширен код 1"),
            CodeEntry::new(
                "17",
                "Приколка или полу-приколка на поморски пловен објект",
                "Trailer or semi-trailer on maritime vessel",
            )
            .with_tooltip("Проширен код 1"),
            CodeEntry::new(
                "18",
                "Пловило за внатрешен воден сообраќај на поморски пловен објект",
                "Inland waterway vessel on maritime vessel",
            )
            .with_tooltip("Проширен код 1"),
            CodeEntry::new("20", "Железнички транспорт", "Rail transport")
                .with_tooltip("Основен код 2"),
            CodeEntry::new("30", "Друмски транспорт", "Road transport").with_tooltip("Основен код 3"),
            CodeEntry::new("40", "Воздушен транспорт", "Air transport").with_tooltip("Основен код 4"),
            CodeEntry::new("50", "Поштенски транспорт", "Postal transport")
                .with_tooltip("Основен код 5"),
            CodeEntry::new(
                "70",
                "Посебни видови на транспорт (цевовод или електрични водови)",
                "Fixed transport installations (pipelines, power lines)",
            )
            .with_tooltip("Основен код 7"),
            CodeEntry::new("80", "Внатрешен воден транспорт", "Inland waterway transport")
                .with_tooltip("Основен код 8"),
            CodeEntry::new("90", "Сопствен погон", "Self-propulsion").with_tooltip("Основен код 9"),
        ],
    )
}

fn package_types() -> CodeList {
    CodeList::new(
        "Box31_PackageType",
        Some("31"),
        vec![
            CodeEntry::new("CT", "Картон", "Carton"),
            CodeEntry::new("PK", "Пакет", "Package"),
            CodeEntry::new("BX", "Кутија", "Box"),
            CodeEntry::new("PL", "Палета", "Pallet"),
            CodeEntry::new("DR", "Буре", "Drum"),
            CodeEntry::new("CS", "Кашон", "Case"),
            CodeEntry::new("BA", "Вреќа", "Bag"),
            CodeEntry::new("BL", "Бала, компримирана", "Bale, compressed"),
            CodeEntry::new("BN", "Бала, некомпримирана", "Bale, not compressed"),
            CodeEntry::new("LE", "Багаж", "Luggage"),
            CodeEntry::new("AP", "Ампула, заштитена", "Ampoule, protected"),
            CodeEntry::new("AM", "Ампула, незаштитена", "Ampoule, not protected"),
            CodeEntry::new("IA", "Амбалажа, составна, дрвена", "Package, composite, wooden"),
            CodeEntry::new("IC", "Амбалажа, составна, пластична", "Package, composite, plastic"),
            CodeEntry::new("IF", "Амбалажа, цевчеста", "Package, tubular"),
            CodeEntry::new("AT", "Атомизер (распрскувач)", "Atomizer (spray)"),
            CodeEntry::new("BP", "Балон, заштитен", "Balloon, protected"),
            CodeEntry::new("BF", "Балон, незаштитен", "Balloon, not protected"),
            CodeEntry::new("CP", "Балон (сад) плетен, заштитен", "Cylinder, protected"),
            CodeEntry::new("CO", "Балон (сад) плетен, незаштитен", "Cylinder, not protected"),
            CodeEntry::new("OK", "Блок", "Block"),
            CodeEntry::new("SO", "Бобина", "Spool"),
            CodeEntry::new("JG", "Бокал", "Jug"),
            CodeEntry::new("GB", "Боца за плин", "Gas bottle"),
            CodeEntry::new("TI", "Буре (190 литри)", "Drum (190 litres)"),
            CodeEntry::new("BU", "Буре големо (490,96 л)", "Barrel (490.96 l)"),
            CodeEntry::new("CK", "Буре за вино, пиво", "Cask"),
            CodeEntry::new("1G", "Буре од влакна", "Fibre drum"),
            CodeEntry::new("1D", "Буре од шпертплоча", "Plywood drum"),
            CodeEntry::new("1W", "Буре, дрвено", "Wooden drum"),
        ],
    )
}

fn procedure_codes() -> CodeList {
    CodeList::new(
        "Box37_ProcedureCode",
        Some("37"),
        vec![
            CodeEntry::new("40 00", "Пуштање во слободен промет", "Release for free circulation")
                .with_tooltip("Нормален увоз со плаќање на сите давачки"),
            CodeEntry::new(
                "42 00",
                "Увоз за облагородување - Одложено плаќање",
                "Inward processing - Suspension system",
            )
            .with_tooltip("LON - Без плаќање на давачки при увоз, реекспорт задолжителен"),
            CodeEntry::new(
                "51 00",
                "Увоз за облагородување - Враќање на давачки",
                "Inward processing - Drawback system",
            )
            .with_tooltip("LON - Плаќање на давачки, враќање при реекспорт"),
            CodeEntry::new(
                "31 51",
                "Реекспорт на стока увезена за облагородување",
                "Re-export of goods imported for inward processing",
            )
            .with_tooltip("LON - Реекспорт на компензациски производи"),
            CodeEntry::new("10 00", "Извоз со трајно отстранување", "Export with permanent removal")
                .with_tooltip("Нормален извоз"),
            CodeEntry::new("21 00", "Привремен извоз", "Temporary export")
                .with_tooltip("Извоз со намера за враќање"),
            CodeEntry::new("53 00", "Царински складови", "Customs warehousing")
                .with_tooltip("Складирање со одложено плаќање на давачки"),
            CodeEntry::new("61 00", "Привремен увоз", "Temporary admission")
                .with_tooltip("Делумно или целосно ослободување од увозни давачки"),
            CodeEntry::new("63 00", "Реекспорт", "Re-export")
                .with_tooltip("Извоз на стока претходно увезена привремено"),
            CodeEntry::new("71 00", "Транзит - Комунитарна стока", "Transit - Community goods")
                .with_tooltip("T2 режим"),
            CodeEntry::new("91 00", "Транзит - Странска стока", "Transit - Non-community goods")
                .with_tooltip("T1 режим"),
        ],
    )
}

fn document_types() -> CodeList {
    CodeList::new(
        "Box44_DocumentType",
        Some("44"),
        vec![
            CodeEntry::new(
                "N730",
                "Дозвола за увоз за облагородување",
                "Inward processing authorization",
            )
            .with_tooltip("Задолжително за процедури 42 00, 51 00"),
            CodeEntry::new("N380", "Профактура", "Proforma invoice")
                .with_tooltip("Привремена фактура"),
            CodeEntry::new("N703", "Договор", "Contract").with_tooltip("Тргувачки договор"),
            CodeEntry::new("N785", "Извозна дозвола", "Export licence")
                .with_tooltip("За ограничени стоки"),
            CodeEntry::new("N935", "Увозна дозвола", "Import licence")
                .with_tooltip("За ограничени стоки"),
            CodeEntry::new(
                "N954",
                "Сертификат за здравствена инспекција",
                "Sanitary certificate",
            )
            .with_tooltip("За храна, растенија, животни"),
            CodeEntry::new("C505", "Декларација за вредност", "Declaration of value")
                .with_tooltip("DV1 образец"),
            CodeEntry::new("C644", "Сертификат за потекло", "Certificate of origin")
                .with_tooltip("EUR.1, Form A, CO"),
            CodeEntry::new(
                "Y024",
                "Декларација за потекло врз фактура",
                "Origin declaration on invoice",
            )
            .with_tooltip("За овластени извозници"),
            CodeEntry::new("C001", "Комерцијална фактура", "Commercial invoice")
                .with_tooltip("Задолжителен документ"),
            CodeEntry::new("N704", "Транспортен документ", "Transport document")
                .with_tooltip("CMR, AWB, B/L"),
        ],
    )
}

fn calculation_methods() -> CodeList {
    CodeList::new(
        "Box47_CalculationMethod",
        Some("47"),
        vec![
            CodeEntry::new("1", "Метод 1 - Трансакциска вредност", "Method 1 - Transaction value")
                .with_tooltip("Цена навистина платена или за плаќање"),
            CodeEntry::new(
                "2",
                "Метод 2 - Трансакциска вредност на идентични стоки",
                "Method 2 - Transaction value of identical goods",
            )
            .with_tooltip("Алтернативен метод"),
            CodeEntry::new(
                "3",
                "Метод 3 - Трансакциска вредност на слични стоки",
                "Method 3 - Transaction value of similar goods",
            )
            .with_tooltip("Алтернативен метод"),
            CodeEntry::new("4", "Метод 4 - Дедуктивен метод", "Method 4 - Deductive method")
                .with_tooltip("Врз основа на продажна цена"),
            CodeEntry::new("5", "Метод 5 - Компутативен метод", "Method 5 - Computed method")
                .with_tooltip("Врз основа на производни трошоци"),
            CodeEntry::new("6", "Метод 6 - Резервен метод", "Method 6 - Fall-back method")
                .with_tooltip("Флексибилна примена на други методи"),
        ],
    )
}

fn lon_operation_types() -> CodeList {
    CodeList::new(
        "LON_OperationType",
        None,
        vec![
            CodeEntry::new("Обработка", "Обработка", "Processing")
                .with_tooltip("Операции со кои се менува природата на стоката"),
            CodeEntry::new("Преработка", "Преработка", "Manufacturing")
                .with_tooltip("Операции со кои се добиваат нови производи"),
            CodeEntry::new("Склопување", "Склопување", "Assembly")
                .with_tooltip("Операции со кои се составуваат комплетни производи од делови"),
            CodeEntry::new("Поправка", "Поправка", "Repair")
                .with_tooltip("Операции со кои се враќа функционалноста на оштетени стоки"),
        ],
    )
}

fn lon_economic_conditions() -> CodeList {
    CodeList::new(
        "LON_EconomicCondition",
        None,
        vec![
            CodeEntry::new("A1", "Активно облагородување", "Active processing")
                .with_tooltip("Облагородувачот врши обработка во свои капацитети"),
            CodeEntry::new("B1", "Подизведување", "Subcontracting")
                .with_tooltip("Облагородувачот ангажира трети лица за обработка"),
            CodeEntry::new("C1", "Редовен извоз", "Standard export").with_tooltip("Без посебни услови"),
        ],
    )
}

fn lon_authorization_statuses() -> CodeList {
    CodeList::new(
        "LON_AuthorizationStatus",
        None,
        vec![
            CodeEntry::new("Draft", "Нацрт", "Draft")
                .with_tooltip("Авторизацијата е во подготовка"),
            CodeEntry::new("Submitted", "Поднесена", "Submitted")
                .with_tooltip("Авторизацијата е поднесена на царинската управа"),
            CodeEntry::new("Approved", "Одобрена", "Approved")
                .with_tooltip("Авторизацијата е одобрена и активна"),
            CodeEntry::new("Rejected", "Одбиена", "Rejected")
                .with_tooltip("Авторизацијата е одбиена од царинската управа"),
            CodeEntry::new("Expired", "Истечена", "Expired")
                .with_tooltip("Авторизацијата повеќе не важи"),
        ],
    )
}
