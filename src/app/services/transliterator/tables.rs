//! Transliteration tables: overrides, substitution rules, character map

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Curated name overrides, checked before any rule-based transliteration.
///
/// Covers names whose conventional Macedonian form differs from a
/// letter-by-letter rendering (major cities, legacy registry entries) and
/// a handful of case normalizations for Cyrillic inputs.
pub const OVERRIDES: &[(&str, &str)] = &[
    // Legacy registry entries
    ("Orion", "Орион"),
    ("Unknown", "Непознато"),
    ("НЕПОЗНАТ", "Непознато"),
    ("Prince Albert", "Принс Алберт"),
    ("Edinburgh of the Seven Seas", "Единбург на Седумте Мориња"),
    ("Belo Horizonte", "Бело Хоризонте"),
    ("El Prat de Llobregat", "Ел Прат де Љобрегат"),
    ("A Coruña", "Ла Коруња"),
    ("Don Torcuato", "Дон Торкуато"),
    ("Ad Diwem", "Ад Дивем"),
    ("Waltham Abbey", "Волтам Ебеј"),
    ("Tha Maka", "Та Мака"),
    ("San Quintin", "Сан Квинтин"),
    ("Qal'at an Nakhl", "Калат ан Нахл"),
    ("Torre Maggiore", "Торе Мађоре"),
    // Major cities with an established Macedonian exonym
    ("London", "Лондон"),
    ("Paris", "Париз"),
    ("Rome", "Рим"),
    ("Naples", "Неапол"),
    ("Venice", "Венеција"),
    ("Vienna", "Виена"),
    ("Athens", "Атина"),
    ("Brussels", "Брисел"),
    ("Lisbon", "Лисабон"),
    ("Warsaw", "Варшава"),
    ("Prague", "Прага"),
    ("Budapest", "Будимпешта"),
    ("Bucharest", "Букурешт"),
    ("Belgrade", "Белград"),
    ("Sofia", "Софија"),
    ("Tirana", "Тирана"),
    ("Zagreb", "Загреб"),
    ("Ljubljana", "Љубљана"),
    ("Sarajevo", "Сараево"),
    ("Thessaloniki", "Солун"),
    ("Istanbul", "Истанбул"),
    ("Munich", "Минхен"),
    ("Cologne", "Келн"),
    ("Zurich", "Цирих"),
    ("Geneva", "Женева"),
    ("Copenhagen", "Копенхаген"),
    ("The Hague", "Хаг"),
    ("New York", "Њујорк"),
    ("Beijing", "Пекинг"),
    ("Cairo", "Каиро"),
];

/// Ordered multi-character substitution rules.
///
/// Matched case-insensitively, longest patterns first so digraphs are
/// consumed before their constituent letters. Replacements are lowercase;
/// casing is restored by the capitalization pass. The bare `c` rule must
/// stay last so `ch`/`ck`/`sch` win over it.
pub const RULES: &[(&str, &str)] = &[
    ("tion", "шн"),
    ("sch", "ш"),
    ("tch", "ч"),
    ("sh", "ш"),
    ("ch", "ч"),
    ("ck", "к"),
    ("zh", "ж"),
    ("dz", "џ"),
    ("dj", "џ"),
    ("kj", "ќ"),
    ("gj", "ѓ"),
    ("lj", "љ"),
    ("nj", "њ"),
    ("ph", "ф"),
    ("th", "т"),
    ("kh", "х"),
    ("qu", "кв"),
    ("x", "кс"),
    ("ll", "л"),
    ("nn", "н"),
    ("mm", "м"),
    ("tt", "т"),
    ("ss", "с"),
    ("pp", "п"),
    ("rr", "р"),
    ("dd", "д"),
    ("bb", "б"),
    ("ff", "ф"),
    ("gg", "г"),
    ("c", "к"),
];

static OVERRIDE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| OVERRIDES.iter().copied().collect());

/// Compiled case-insensitive regexes for the substitution rules, in rule
/// order
pub static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, replacement)| {
            // Patterns are ASCII literals, so compilation cannot fail
            let regex = Regex::new(&format!("(?i){}", regex::escape(pattern)))
                .unwrap_or_else(|e| panic!("invalid rule pattern '{pattern}': {e}"));
            (regex, *replacement)
        })
        .collect()
});

/// Look up a curated override for a name
pub fn override_for(name: &str) -> Option<&'static str> {
    OVERRIDE_MAP.get(name).copied()
}

/// Map a single Latin letter to its lowercase Cyrillic counterpart.
///
/// Non-Latin characters (digits, punctuation, already-Cyrillic letters)
/// pass through unchanged.
pub fn map_latin_char(c: char) -> char {
    match c.to_ascii_lowercase() {
        'a' => 'а',
        'b' => 'б',
        'd' => 'д',
        'e' => 'е',
        'f' => 'ф',
        'g' => 'г',
        'h' => 'х',
        'i' => 'и',
        'j' => 'ј',
        'k' => 'к',
        'l' => 'л',
        'm' => 'м',
        'n' => 'н',
        'o' => 'о',
        'p' => 'п',
        'q' => 'к',
        'r' => 'р',
        's' => 'с',
        't' => 'т',
        'u' => 'у',
        'v' => 'в',
        'w' => 'в',
        'y' => 'ј',
        'z' => 'з',
        other => other,
    }
}
