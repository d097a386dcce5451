//! Cyrillic to Latin homoglyph table.
//!
//! Only letters that render identically to a Latin capital are listed. Anything
//! else (other Cyrillic letters, accented Latin, other scripts) is left to the
//! uppercase + filter steps, which delete it.

/// Cyrillic homoglyph → Latin letter. Keys are matched case-sensitively, so both
/// cases are listed explicitly.
pub const TRANSLITERATION: &[(char, char)] = &[
    ('А', 'A'),
    ('В', 'B'),
    ('Е', 'E'),
    ('К', 'K'),
    ('М', 'M'),
    ('Н', 'H'),
    ('О', 'O'),
    ('Р', 'P'),
    ('С', 'C'),
    ('Т', 'T'),
    ('У', 'Y'),
    ('Х', 'X'),
    ('а', 'A'),
    ('в', 'B'),
    ('е', 'E'),
    ('к', 'K'),
    ('м', 'M'),
    ('н', 'H'),
    ('о', 'O'),
    ('р', 'P'),
    ('с', 'C'),
    ('т', 'T'),
    ('у', 'Y'),
    ('х', 'X'),
];

/// Look up the Latin homoglyph for a Cyrillic letter.
pub fn transliterate_char(c: char) -> Option<char> {
    TRANSLITERATION
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}
