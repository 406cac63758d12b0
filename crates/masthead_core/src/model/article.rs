//! Article domain model.
//!
//! # Responsibility
//! - Link exactly one author and one magazine under a title.
//!
//! # Invariants
//! - `author`, `magazine` and `title` never change after construction.
//! - `title` is 5..=50 characters long.

use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::validation::{require_non_nil, validate_title, ValidationError};
use serde::{Deserialize, Serialize};

/// One authored piece published in one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    uuid: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

#[derive(Deserialize)]
struct ArticleRecord {
    uuid: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(value: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.uuid, value.author, value.magazine, value.title)
    }
}

impl Article {
    /// Creates an article with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside 5..=50 characters.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ArticleId::new(), author, magazine, title)
    }

    /// Creates an article with a caller-provided id.
    ///
    /// # Errors
    /// - `ValidationError::NilId` when `uuid` is nil.
    /// - `ValidationError::TitleLength` when `title` is outside 5..=50 characters.
    pub fn with_id(
        uuid: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        require_non_nil(uuid.is_nil())?;
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            uuid,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.uuid
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
