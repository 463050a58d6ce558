//! URL slug type.
//!
//! Slugs are the sole external addressing key for products, categories, and
//! blog posts; every `/product/{slug}`-style route parameter passes through
//! [`Slug::parse`] before it reaches the content store.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A URL key for a content-store document.
///
/// ## Constraints
///
/// - Length: 1-96 characters (the content store's slug limit)
/// - Characters: lowercase ASCII letters, digits, and hyphens
///
/// ## Examples
///
/// ```
/// use franemm_core::Slug;
///
/// assert!(Slug::parse("hair-guide").is_ok());
/// assert!(Slug::parse("soap-a").is_ok());
///
/// assert!(Slug::parse("").is_err());          // empty
/// assert!(Slug::parse("Hair Guide").is_err()); // uppercase and space
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug (content-store schema limit).
    pub const MAX_LENGTH: usize = 96;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 96 characters, or
    /// contains a character outside `[a-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(bad));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for s in ["soap-a", "kids-products", "2024-recap", "x"] {
            assert!(Slug::parse(s).is_ok(), "{s} should parse");
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "a".repeat(97);
        assert!(matches!(
            Slug::parse(&long),
            Err(SlugError::TooLong { max: 96 })
        ));
        assert!(Slug::parse(&"a".repeat(96)).is_ok());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(
            Slug::parse("Hair-Guide"),
            Err(SlugError::InvalidCharacter('H'))
        );
        assert_eq!(
            Slug::parse("hair guide"),
            Err(SlugError::InvalidCharacter(' '))
        );
        assert_eq!(
            Slug::parse("hair/guide"),
            Err(SlugError::InvalidCharacter('/'))
        );
    }
}
