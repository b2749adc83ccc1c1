// Lexical exception tables
//
// All keys are lowercase. Tables are read-only and consulted by exact match
// unless the name says otherwise.

// ---------------------------------------------------------------------------
// Stems and classification
// ---------------------------------------------------------------------------

/// Nouns whose stem drops the vowel before the final consonant: "пёс" -> "пс".
pub const FLEETING_STEM_WORDS: &[&str] = &["пес", "пёс", "шов"];

/// Masculine "-ень" nouns that keep the vowel: "олень" -> "оленя", not "олня".
pub const EN_KEEPS_VOWEL: &[&str] = &["ясень", "бюллетень", "олень", "гордень", "пельмень", "ячмень"];

/// Neuter nouns of the irregular class alongside "путь".
pub const IRREGULAR_NEUTER: &[&str] = &["дитя", "полудитя"];

// ---------------------------------------------------------------------------
// Class 1 patterns
// ---------------------------------------------------------------------------

/// "-ток" words that take the "-к-" infix paradigm ("желтка").
pub const OK_WORDS_TOK: &[&str] = &["лапоток", "желток"];

/// "-ток" words that keep the vowel ("потока").
pub const OK_EXCLUDED_TOK: &[&str] = &[
    "поток", "приток", "переток", "проток", "биоток", "электроток", "восток", "водосток",
    "водоток", "воток", "знаток",
];

/// Endings declined with hard adjectival endings (-ого/-ому/-ым/-ом).
pub const HARD_ADJECTIVE_ENDINGS: &[&str] = &["ое", "нький", "ский", "евой", "овой"];

/// Velar and hushing "-ой" endings of stressed adjectives ("лихой", "большой").
pub const STRESSED_OY_ENDINGS: &[&str] = &["гой", "кой", "хой", "жой", "шой"];

/// Nouns that look like stressed "-ой" adjectives but are not.
pub const STRESSED_OY_EXCLUDED: &[&str] = &["покой", "изгой", "упокой"];

/// Hushing "-ий" endings of adjectives and participles ("лесничий").
pub const HUSHING_IY_ENDINGS: &[&str] = &["жий", "ший", "чий", "щий"];

/// "-ц" nouns that keep the vowel before "ц" ("кузнеца", "месяца").
pub const TS_KEEPS_VOWEL: &[&str] = &[
    "близнец", "жнец", "жрец", "кузнец", "льстец", "месяц", "мертвец", "мудрец", "паяц", "хитрец",
    "храбрец", "чтец",
];

/// "-ц" nouns stressed on the ending outside the nominative singular:
/// "отцом", "отцов", against "немцем", "немцев".
pub const TS_STRESSED_ENDING: &[&str] = &[
    "беглец", "близнец", "боец", "борец", "венец", "глупец", "гонец", "гребец", "дворец", "делец",
    "жеребец", "жнец", "жрец", "зубец", "истец", "конец", "косец", "кузнец", "купец", "ларец",
    "леденец", "ловец", "льстец", "малец", "мертвец", "молодец", "мудрец", "наглец", "образец",
    "огурец", "отец", "певец", "песец", "писец", "пловец", "продавец", "резец", "рубец", "самец",
    "скворец", "слепец", "столбец", "стрелец", "творец", "удалец", "хитрец", "храбрец", "чепец",
    "чтец",
];

/// Masculine "-ей" nouns with a fleeting "е" ("чирей" -> "чирья").
pub const FLEETING_EY_WORDS: &[&str] = &["воробей", "муравей", "репей", "ручей", "соловей", "улей", "чирей"];

/// Locative forms that are not built from the stem.
pub const SPECIAL_LOCATIVES: &[(&str, &str)] = &[
    ("ветер", "ветру"),
    ("лоб", "лбу"),
    ("лёд", "льду"),
    ("лед", "льду"),
    ("мох", "мху"),
    ("угол", "углу"),
];

/// Nouns with a stressed "-у"/"-ю" locative ("в снегу", "в раю").
pub const U_LOCATIVE_WORDS: &[&str] = &[
    "ад", "бок", "бор", "бред", "быт", "верх", "вид", "глаз", "горб", "гроб", "долг", "дым",
    "зад", "клей", "край", "круг", "лад", "лес", "луг", "мёд", "мед", "мел", "мех", "мозг",
    "низ", "нос", "плен", "пол", "полк", "порт", "пух", "рай", "род", "сад", "снег", "строй",
    "тыл", "ход", "шкаф", "яр",
];

/// Feminine adjectives in "-жая"/"-шая" with a stressed ending ("большой").
pub const STRESSED_AYA_WORDS: &[&str] = &["большая", "чужая"];

// ---------------------------------------------------------------------------
// Class 3
// ---------------------------------------------------------------------------

/// Nouns that decline from an extended stem outside the nominative and
/// accusative.
pub const EXTENDED_STEMS: &[(&str, &str)] = &[("дочь", "дочерь"), ("мать", "матерь")];

// ---------------------------------------------------------------------------
// Nominative plural
// ---------------------------------------------------------------------------

/// Class 1 nouns pluralized with a softened stem and "-я" ("друзья").
pub const SOFT_YA_PLURALS: &[&str] = &[
    "зять", "друг", "брат", "собрат", "лист", "стул", "брус", "обод", "полоз", "струп",
    "подмастерье", "перо", "шило",
];

/// Masculine nouns with both "-ы/-и" and soft "-ья" plurals ("пруты", "прутья").
pub const DUAL_YA_PLURALS: &[&str] = &["лоскут", "повод", "прут", "сук"];

/// Masculine nouns with a stressed "-а/-я" plural ("города").
pub const A_PLURALS: &[&str] = &[
    "адрес", "берег", "бок", "век", "вес", "вечер", "лес", "снег", "глаз", "город", "дом",
    "детдом", "счет", "счёт",
];

/// Endings that take the stressed "-а" plural ("поезда", "цеха").
pub const A_PLURAL_ENDINGS: &[&str] = &["поезд", "цех"];

/// Masculine nouns with both "-а/-я" and "-ы/-и" plurals ("года", "годы").
pub const DUAL_A_PLURALS: &[&str] = &["год", "вексель"];

/// Fully lexical nominative plurals.
pub const IRREGULAR_PLURALS: &[(&str, &[&str])] = &[
    ("человек", &["люди"]),
    ("сын", &["сыновья", "сыны"]),
    ("ветер", &["ветры", "ветра"]),
    ("ухо", &["уши"]),
    ("око", &["очи"]),
    ("дно", &["донья"]),
    ("чудо", &["чудеса", "чуда"]),
    ("заря", &["зори"]),
];

/// "-анин" look-alikes that keep the suffix in the plural.
pub const ANIN_PLURALS: &[&str] = &["барин", "боярин"];

/// "-енок" words that are not animal young ("коленок", "венок").
pub const ENOK_EXCLUDED: &[&str] = &["коленок", "стенок", "венок", "ценок"];

/// Neuter words with a "-ья" plural ("деревья").
pub const NEUTER_YA_PLURAL_ENDINGS: &[&str] = &["дерево", "звено", "крыло"];

/// Neuter nouns whose plural moves the stress onto a "ё" ("стёкла").
pub const YO_SHIFT_PLURALS: &[&str] = &["тесло", "стекло", "бедро", "берцо", "чело", "стегно", "стебло"];

/// "-ко" neuter nouns that pluralize in "-а" ("войска").
pub const KO_EXCLUDED: &[&str] = &["войско", "облако"];

// ---------------------------------------------------------------------------
// Oblique plural
// ---------------------------------------------------------------------------

/// Genitive plurals keyed by the nominative plural.
pub const IRREGULAR_GENITIVE_PLURALS: &[(&str, &str)] = &[
    ("люди", "людей"),
    ("дети", "детей"),
    ("дяди", "дядей"),
    ("очи", "очей"),
    ("уши", "ушей"),
    ("сыновья", "сыновей"),
    ("друзья", "друзей"),
    ("чудеса", "чудес"),
    ("донья", "доньев"),
    ("зори", "зорь"),
    ("облака", "облаков"),
];

/// "-ьё" neuters with a genitive plural in "-ей" ("ружей"), keyed without ё.
pub const NEUTER_EY_GENITIVES: &[&str] = &["ружье", "питье"];

/// Instrumental plurals keyed by the nominative plural.
pub const IRREGULAR_INSTRUMENTAL_PLURALS: &[(&str, &[&str])] = &[
    ("люди", &["людьми"]),
    ("дети", &["детьми"]),
    ("лошади", &["лошадьми", "лошадями"]),
    ("дочери", &["дочерьми", "дочерями"]),
    ("двери", &["дверями", "дверьми"]),
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

pub fn contains(table: &[&str], key: &str) -> bool {
    table.contains(&key)
}

pub fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
