//! Error types for numerology calculations.

use anka_math::InputError;

/// Errors from core, cycle and karmic calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Malformed birth date or name.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// A vowel-based calculator found no vowels in the name.
    #[error("no vowels found in name {0:?}")]
    NoVowels(String),

    /// A consonant-based calculator found no consonants in the name.
    #[error("no consonants found in name {0:?}")]
    NoConsonants(String),
}

/// Errors from loading a content store.
///
/// Missing records are not errors; only a malformed source is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContentError {
    /// Source text is not valid JSON of the expected shape.
    #[error("content parse error: {0}")]
    Parse(String),

    /// A top-level key does not name a known topic.
    #[error("unknown content topic: {0:?}")]
    UnknownTopic(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_wraps() {
        let e: NumerologyError = InputError::EmptyName.into();
        assert_eq!(e, NumerologyError::Input(InputError::EmptyName));
        assert_eq!(e.to_string(), "invalid input: name is empty");
    }

    #[test]
    fn no_vowels_message() {
        let e = NumerologyError::NoVowels("LYNN".into());
        assert_eq!(e.to_string(), "no vowels found in name \"LYNN\"");
    }
}
