//! Person name normalization.
//!
//! A name is normalized exactly once, at the boundary: Unicode NFD
//! decomposition, combining marks dropped, common ligatures expanded,
//! uppercased, and anything outside A-Z removed. Calculators only ever see
//! the resulting ASCII letters.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::InputError;
use crate::letters::is_vowel;

/// A validated name: original text plus its ASCII-letter working form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    original: String,
    letters: String,
}

impl PersonName {
    /// Validate and normalize a raw name.
    ///
    /// Fails on empty/whitespace input, or when no Latin letter survives
    /// normalization (e.g. `"123"` or a name in a non-Latin script).
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyName);
        }
        let letters = normalize_letters(trimmed);
        if letters.is_empty() {
            return Err(InputError::NoLetters(trimmed.to_string()));
        }
        Ok(Self {
            original: trimmed.to_string(),
            letters,
        })
    }

    /// The name as supplied, trimmed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Uppercase A-Z working form.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Vowels of the working form, in order.
    pub fn vowels(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars().filter(|&c| is_vowel(c))
    }

    /// Non-vowel letters of the working form, in order.
    pub fn consonants(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars().filter(|&c| !is_vowel(c))
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

/// Letters that do not decompose under NFD but have a conventional
/// Latin spelling.
fn expand_ligature(ch: char) -> Option<&'static str> {
    match ch {
        'ß' | 'ẞ' => Some("SS"),
        'æ' | 'Æ' => Some("AE"),
        'œ' | 'Œ' => Some("OE"),
        'ø' | 'Ø' => Some("O"),
        'ł' | 'Ł' => Some("L"),
        'đ' | 'Đ' => Some("D"),
        'þ' | 'Þ' => Some("TH"),
        'ı' => Some("I"),
        _ => None,
    }
}

/// Strip diacritics, expand ligatures, uppercase, and keep only A-Z.
pub fn normalize_letters(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if let Some(expanded) = expand_ligature(ch) {
            out.push_str(expanded);
        } else if ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_uppercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii() {
        let n = PersonName::parse("John Smith").unwrap();
        assert_eq!(n.letters(), "JOHNSMITH");
        assert_eq!(n.original(), "John Smith");
    }

    #[test]
    fn accents_stripped() {
        assert_eq!(normalize_letters("Élodie Müller"), "ELODIEMULLER");
        assert_eq!(normalize_letters("François"), "FRANCOIS");
        assert_eq!(normalize_letters("Ñúñez"), "NUNEZ");
    }

    #[test]
    fn ligatures_expanded() {
        assert_eq!(normalize_letters("Straße"), "STRASSE");
        assert_eq!(normalize_letters("Ærø"), "AERO");
        assert_eq!(normalize_letters("Łukasz"), "LUKASZ");
    }

    #[test]
    fn punctuation_and_digits_dropped() {
        assert_eq!(normalize_letters("O'Brien-Smith 3rd"), "OBRIENSMITHRD");
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        assert_eq!(PersonName::parse(""), Err(InputError::EmptyName));
        assert_eq!(PersonName::parse("   \t"), Err(InputError::EmptyName));
    }

    #[test]
    fn no_letters_rejected() {
        assert_eq!(
            PersonName::parse("1234"),
            Err(InputError::NoLetters("1234".into()))
        );
        assert!(matches!(
            PersonName::parse("Иван"),
            Err(InputError::NoLetters(_))
        ));
    }

    #[test]
    fn vowel_consonant_split() {
        let n = PersonName::parse("Maya").unwrap();
        assert_eq!(n.vowels().collect::<String>(), "AA");
        assert_eq!(n.consonants().collect::<String>(), "MY");
    }
}
