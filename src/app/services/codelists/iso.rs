//! ISO reference lists
//!
//! ISO 4217 currencies (Box 22) and ISO 3166-1 alpha-2 countries
//! (Box 15а), limited to the codes that actually appear in declarations.

use crate::app::models::{CodeEntry, CodeList};
use crate::constants::{BOX_COUNTRY, BOX_CURRENCY};

/// Build the ISO 4217 currency list
pub fn currency_list() -> CodeList {
    let codes = [
        ("EUR", "Евро", "Euro"),
        ("USD", "САД долар", "US Dollar"),
        ("GBP", "Британска фунта", "British Pound"),
        ("CHF", "Швајцарски франк", "Swiss Franc"),
        ("MKD", "Македонски денар", "Macedonian Denar"),
        ("JPY", "Јапонски јен", "Japanese Yen"),
        ("CNY", "Кинески јуан", "Chinese Yuan"),
        ("CAD", "Канадски долар", "Canadian Dollar"),
        ("AUD", "Австралиски долар", "Australian Dollar"),
        ("BGN", "Бугарски лев", "Bulgarian Lev"),
        ("HRK", "Хрватска куна", "Croatian Kuna"),
        ("CZK", "Чешка круна", "Czech Koruna"),
        ("DKK", "Данска круна", "Danish Krone"),
        ("HUF", "Унгарска форинта", "Hungarian Forint"),
        ("NOK", "Норвешка круна", "Norwegian Krone"),
        ("PLN", "Полска злота", "Polish Zloty"),
        ("RON", "Нов романски реу", "Romanian Leu"),
        ("RUB", "Руска рубља", "Russian Ruble"),
        ("SEK", "Шведска круна", "Swedish Krona"),
        ("TRY", "Турска лира", "Turkish Lira"),
        ("INR", "Индиска рупија", "Indian Rupee"),
        ("BRL", "Бразилски реал", "Brazilian Real"),
        ("ZAR", "Јужноафрички ранд", "South African Rand"),
        ("KRW", "Јужнокорејски вон", "South Korean Won"),
        ("MXN", "Мексиканско песо", "Mexican Peso"),
        ("SGD", "Сингапурски долар", "Singapore Dollar"),
        ("HKD", "Хонконшки долар", "Hong Kong Dollar"),
        ("NZD", "Новозеландски долар", "New Zealand Dollar"),
        ("THB", "Тајландски бахт", "Thai Baht"),
        ("MYR", "Малезиски рингит", "Malaysian Ringgit"),
        ("IDR", "Индонезиска рупија", "Indonesian Rupiah"),
        ("PHP", "Филипинско песо", "Philippine Peso"),
        ("ILS", "Израелски шекел", "Israeli Shekel"),
        ("AED", "Дирхам на Обединети Арапски Емирати", "UAE Dirham"),
        ("SAR", "Саудиски ријал", "Saudi Riyal"),
        ("RSD", "Српски динар", "Serbian Dinar"),
        ("ALL", "Албански лек", "Albanian Lek"),
        ("BAM", "Конвертибилна марка", "Bosnia-Herzegovina Convertible Mark"),
    ];
    CodeList::new(
        "Box22_Currency",
        Some(BOX_CURRENCY),
        codes
            .iter()
            .map(|(code, mk, en)| CodeEntry::new(code, mk, en))
            .collect(),
    )
}

/// Build the ISO 3166-1 alpha-2 country list
pub fn country_iso_list() -> CodeList {
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
        ("NL", "Холандија", "Netherlands"),
        ("BE", "Белгија", "Belgium"),
        ("ES", "Шпанија", "Spain"),
        ("PT", "Португалија", "Portugal"),
        ("PL", "Полска", "Poland"),
        ("CZ", "Чешка Република", "Czech Republic"),
        ("SK", "Словачка", "Slovakia"),
        ("HU", "Унгарија", "Hungary"),
        ("RO", "Романија", "Romania"),
        ("UA", "Украина", "Ukraine"),
        ("SE", "Шведска", "Sweden"),
        ("NO", "Норвешка", "Norway"),
        ("DK", "Данска", "Denmark"),
        ("FI", "Финска", "Finland"),
        ("IE", "Ирска", "Ireland"),
        ("JP", "Јапонија", "Japan"),
        ("KR", "Кореа", "South Korea"),
        ("IN", "Индија", "India"),
        ("AU", "Австралија", "Australia"),
        ("CA", "Канада", "Canada"),
        ("BR", "Бразил", "Brazil"),
        ("MX", "Мексико", "Mexico"),
        ("AR", "Аргентина", "Argentina"),
        ("ZA", "Јужна Африка", "South Africa"),
        ("EG", "Египет", "Egypt"),
        ("SA", "Саудиска Арабија", "Saudi Arabia"),
        ("AE", "Обединети Арапски Емирати", "United Arab Emirates"),
        ("IL", "Израел", "Israel"),
        ("TH", "Таиланд", "Thailand"),
        ("MY", "Малезија", "Malaysia"),
    ];
    CodeList::new(
        "Box15a_CountryCode",
        Some(BOX_COUNTRY),
        codes
            .iter()
            .map(|(code, mk, en)| CodeEntry::new(code, mk, en))
            .collect(),
    )
}
