//! Field constraints shared by all domain records.
//!
//! # Invariants
//! - Lengths are measured in Unicode scalar values, not bytes.
//! - "Empty" means zero characters; whitespace is accepted as content.

use crate::model::id::ArticleId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive lower bound for article title length.
pub const TITLE_MIN_CHARS: usize = 5;
/// Inclusive upper bound for article title length.
pub const TITLE_MAX_CHARS: usize = 50;
/// Inclusive lower bound for magazine name length.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Inclusive upper bound for magazine name length.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Construction-time rejection of malformed record input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Article title is shorter than 5 or longer than 50 characters.
    TitleLength { chars: usize },
    /// Author name has no characters.
    EmptyAuthorName,
    /// Magazine name is shorter than 2 or longer than 16 characters.
    MagazineNameLength { chars: usize },
    /// Magazine category has no characters.
    EmptyCategory,
    /// A caller-provided id is the nil UUID.
    NilId,
    /// A decoded author or magazine already lists article ids; links are
    /// only created by the repository.
    PrelinkedArticles { count: usize },
}

impl ValidationError {
    /// Stable machine-readable code, safe for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TitleLength { .. } => "title_length",
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::NilId => "nil_id",
            Self::PrelinkedArticles { .. } => "prelinked_articles",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleLength { chars } => write!(
                f,
                "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "category must be a non-empty string"),
            Self::NilId => write!(f, "id must not be nil"),
            Self::PrelinkedArticles { count } => write!(
                f,
                "record must not list articles before they are stored, got {count}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let chars = title.chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(ValidationError::TitleLength { chars })
    }
}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.chars().count();
    if (MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(ValidationError::MagazineNameLength { chars })
    }
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn require_non_nil(is_nil: bool) -> Result<(), ValidationError> {
    if is_nil {
        return Err(ValidationError::NilId);
    }
    Ok(())
}

pub(crate) fn require_unlinked(articles: &[ArticleId]) -> Result<(), ValidationError> {
    if !articles.is_empty() {
        return Err(ValidationError::PrelinkedArticles {
            count: articles.len(),
        });
    }
    Ok(())
}
