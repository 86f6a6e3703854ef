//! Letter value tables.
//!
//! Three independent mappings, each used by a specific calculator:
//! - Pythagorean table: letter position `p` (A=1) maps to `((p-1) mod 9) + 1`
//! - Heart table: A=1, E=5, I=9, O=6, U=3, Y=7, every other consonant 0
//! - Karmic cycle position: `((ch - 'A') mod 9) + 1`, used only for the
//!   missing-digit analysis over a name
//!
//! All functions accept either case and return 0 for anything outside A-Z.

/// Vowels used for the soul/personality split. Y is a consonant here.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Letters counted by the heart number: the vowels plus Y, with their
/// Pythagorean weights.
pub const HEART_TABLE: [(char, u32); 6] = [
    ('A', 1),
    ('E', 5),
    ('I', 9),
    ('O', 6),
    ('U', 3),
    ('Y', 7),
];

/// 1-based alphabet position (A=1..Z=26), or `None` outside A-Z.
const fn alphabet_position(ch: char) -> Option<u32> {
    let up = ch.to_ascii_uppercase();
    if up.is_ascii_uppercase() {
        Some(up as u32 - 'A' as u32 + 1)
    } else {
        None
    }
}

/// Pythagorean value 1..=9 of a letter, 0 for non-letters.
pub const fn letter_value(ch: char) -> u32 {
    match alphabet_position(ch) {
        Some(p) => (p - 1) % 9 + 1,
        None => 0,
    }
}

/// True for A, E, I, O, U (either case).
pub const fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Heart-table weight of a letter, 0 when the letter is not in the table.
pub const fn heart_value(ch: char) -> u32 {
    match ch.to_ascii_uppercase() {
        'A' => 1,
        'E' => 5,
        'I' => 9,
        'O' => 6,
        'U' => 3,
        'Y' => 7,
        _ => 0,
    }
}

/// Karmic cycle position 1..=9 of a letter, 0 for non-letters.
pub const fn karmic_cycle_value(ch: char) -> u32 {
    let up = ch.to_ascii_uppercase();
    if up.is_ascii_uppercase() {
        (up as u32 - 'A' as u32) % 9 + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_band() {
        let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        for (i, ch) in ('A'..='I').enumerate() {
            assert_eq!(letter_value(ch), expected[i], "letter {ch}");
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        for ch in 'a'..='z' {
            assert_eq!(letter_value(ch), letter_value(ch.to_ascii_uppercase()));
        }
    }

    #[test]
    fn non_letters_are_zero() {
        for ch in [' ', '-', '\'', '3', 'é', 'ß'] {
            assert_eq!(letter_value(ch), 0, "char {ch:?}");
            assert_eq!(heart_value(ch), 0, "char {ch:?}");
            assert_eq!(karmic_cycle_value(ch), 0, "char {ch:?}");
        }
    }

    #[test]
    fn vowels_exact() {
        let vowels: Vec<char> = ('A'..='Z').filter(|&c| is_vowel(c)).collect();
        assert_eq!(vowels, VOWELS.to_vec());
        assert!(!is_vowel('Y'));
    }

    #[test]
    fn heart_table_matches_function() {
        for (ch, v) in HEART_TABLE {
            assert_eq!(heart_value(ch), v);
        }
        assert_eq!(heart_value('B'), 0);
    }

    #[test]
    fn heart_table_covers_y_and_no_other_consonant() {
        // Weights agree with the Pythagorean table; the letter set does not.
        for (ch, v) in HEART_TABLE {
            assert_eq!(v, letter_value(ch), "{ch}");
        }
        assert_eq!(heart_value('Y'), 7);
        assert!(!is_vowel('Y'));
        for ch in 'A'..='Z' {
            if !is_vowel(ch) && ch != 'Y' {
                assert_eq!(heart_value(ch), 0, "{ch}");
            }
        }
    }

    #[test]
    fn karmic_cycle_range() {
        for ch in 'A'..='Z' {
            let v = karmic_cycle_value(ch);
            assert!((1..=9).contains(&v), "{ch} -> {v}");
        }
        assert_eq!(karmic_cycle_value('A'), 1);
        assert_eq!(karmic_cycle_value('J'), 1);
        assert_eq!(karmic_cycle_value('Z'), 8);
    }

    #[test]
    fn karmic_cycle_agrees_with_letter_table() {
        for ch in 'A'..='Z' {
            assert_eq!(karmic_cycle_value(ch), letter_value(ch), "{ch}");
        }
    }
}
