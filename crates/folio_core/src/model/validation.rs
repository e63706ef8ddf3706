//! Field validation shared by all entity kinds.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constraint violation raised when assigning an entity field.
///
/// Display strings are stable and name the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Book title is blank after trimming.
    Title,
    /// Author name is blank after trimming.
    Name,
    /// Contract author does not reference a registered author.
    Author,
    /// Contract book does not reference a registered book.
    Book,
    /// Contract date is blank after trimming.
    Date,
    /// Contract royalties are negative.
    Royalties(i64),
    /// Summing royalties exceeded `u64::MAX`.
    RoyaltiesOverflow,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title must be a non-empty string"),
            Self::Name => write!(f, "name must be a non-empty string"),
            Self::Author => write!(f, "author must be an instance of Author"),
            Self::Book => write!(f, "book must be an instance of Book"),
            Self::Date => write!(f, "date must be a non-empty string"),
            Self::Royalties(_) => write!(f, "royalties must be a non-negative integer"),
            Self::RoyaltiesOverflow => write!(f, "royalties total exceeds u64 range"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it with `err` when nothing is left.
pub(crate) fn non_empty_trimmed(
    value: &str,
    err: ValidationError,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

/// Converts caller-supplied royalties into the stored unsigned form.
pub(crate) fn non_negative_royalties(value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::Royalties(value))
}

#[cfg(test)]
mod tests {
    use super::{non_empty_trimmed, non_negative_royalties, ValidationError};

    #[test]
    fn non_empty_trimmed_strips_surrounding_whitespace() {
        let value = non_empty_trimmed("  Dune \n", ValidationError::Title).unwrap();
        assert_eq!(value, "Dune");
    }

    #[test]
    fn non_empty_trimmed_rejects_blank_with_given_error() {
        assert_eq!(
            non_empty_trimmed(" \t ", ValidationError::Date),
            Err(ValidationError::Date)
        );
        assert_eq!(non_empty_trimmed("", ValidationError::Name), Err(ValidationError::Name));
    }

    #[test]
    fn royalties_accept_zero_and_reject_negative() {
        assert_eq!(non_negative_royalties(0), Ok(0));
        assert_eq!(non_negative_royalties(42), Ok(42));
        assert_eq!(
            non_negative_royalties(-1),
            Err(ValidationError::Royalties(-1))
        );
    }

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            ValidationError::Author.to_string(),
            "author must be an instance of Author"
        );
        assert_eq!(
            ValidationError::Book.to_string(),
            "book must be an instance of Book"
        );
        assert_eq!(
            ValidationError::Royalties(-5).to_string(),
            "royalties must be a non-negative integer"
        );
    }
}
