/// Bengali digit glyphs (U+09E6..=U+09EF) paired with their ASCII digits.
pub const BENGALI_DIGITS: [(char, char); 10] = [
    ('০', '0'),
    ('১', '1'),
    ('২', '2'),
    ('৩', '3'),
    ('৪', '4'),
    ('৫', '5'),
    ('৬', '6'),
    ('৭', '7'),
    ('৮', '8'),
    ('৯', '9'),
];

pub fn bengali_digit_to_ascii(ch: char) -> Option<char> {
    BENGALI_DIGITS
        .iter()
        .find(|(glyph, _)| *glyph == ch)
        .map(|(_, ascii)| *ascii)
}

/// Replaces Bengali digits with ASCII digits one character at a time.
/// Everything else is copied through, so the character count never changes.
pub fn convert_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| bengali_digit_to_ascii(ch).unwrap_or(ch))
        .collect()
}
