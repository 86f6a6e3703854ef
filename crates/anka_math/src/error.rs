//! Error types for boundary input parsing.

/// Errors raised while parsing a birth date or a person name.
///
/// These are always deterministic: the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    /// Date string does not match the fixed `YYYY-MM-DD` shape.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Day component outside 1..=31.
    #[error("day out of range: {0} (must be 1..=31)")]
    DayOutOfRange(u32),

    /// Month component outside 1..=12.
    #[error("month out of range: {0} (must be 1..=12)")]
    MonthOutOfRange(u32),

    /// Year component outside the supported range.
    #[error("year out of range: {0} (must be 1900..=2100)")]
    YearOutOfRange(u32),

    /// Components are individually in range but the date does not exist.
    #[error("date does not exist: {year:04}-{month:02}-{day:02}")]
    NonexistentDate {
        /// Year component.
        year: u32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Name is empty or whitespace only.
    #[error("name is empty")]
    EmptyName,

    /// Name has no Latin letters left after normalization.
    #[error("name contains no letters: {0:?}")]
    NoLetters(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format_error() {
        let e = InputError::InvalidDateFormat("1990/03/15".into());
        assert_eq!(
            e.to_string(),
            "invalid date format: \"1990/03/15\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn display_nonexistent_pads_components() {
        let e = InputError::NonexistentDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "date does not exist: 2023-02-29");
    }
}
