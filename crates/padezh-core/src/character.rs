// Character classification for the Russian alphabet

// ---------------------------------------------------------------------------
// Russian phonological constants
// ---------------------------------------------------------------------------

/// Russian vowels (lowercase): а о у э ы я ё ю е и
pub const VOWELS: &[char] = &['а', 'о', 'у', 'э', 'ы', 'я', 'ё', 'ю', 'е', 'и'];

/// Russian consonants (lowercase) excluding й.
pub const CONSONANTS_EXCEPT_J: &[char] = &[
    'б', 'в', 'г', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш',
    'щ',
];

/// Velar consonants: г к х
pub const VELARS: &[char] = &['г', 'к', 'х'];

/// Hushing consonants: ж ш ч щ
pub const HUSHING: &[char] = &['ж', 'ш', 'ч', 'щ'];

/// Sonorant consonants that attract a fleeting vowel in consonant clusters.
pub const SONORANTS: &[char] = &['л', 'м', 'н', 'р'];

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Convert a character to lowercase (single-char mapping only).
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to uppercase (single-char mapping only).
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Returns true for a Russian vowel in either case.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

/// Returns true for a Russian consonant other than й, in either case.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS_EXCEPT_J.contains(&simple_lower(c))
}

pub fn is_velar(c: char) -> bool {
    VELARS.contains(&simple_lower(c))
}

pub fn is_hushing(c: char) -> bool {
    HUSHING.contains(&simple_lower(c))
}

pub fn is_sonorant(c: char) -> bool {
    SONORANTS.contains(&simple_lower(c))
}

/// Returns true for a letter of the basic Russian alphabet range а-я / А-Я.
///
/// The letters ё and Ё lie outside the contiguous block and are not matched.
pub fn is_basic_cyrillic(c: char) -> bool {
    ('а'..='я').contains(&c) || ('А'..='Я').contains(&c)
}

/// Count syllables as the number of vowels in the word.
pub fn syllable_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}
