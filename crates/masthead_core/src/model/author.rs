//! Author domain model.
//!
//! # Responsibility
//! - Hold an author's name and the ordered ids of articles they wrote.
//!
//! # Invariants
//! - `name` is non-empty and immutable.
//! - `articles` keeps insertion order and only grows.
//! - Only articles whose `author` equals this id are appended; the
//!   repository layer is the sole writer.

use crate::model::id::{ArticleId, AuthorId};
use crate::model::validation::{
    require_non_nil, require_unlinked, validate_author_name, ValidationError,
};
use serde::{Deserialize, Serialize};

/// A person who writes articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    uuid: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

#[derive(Deserialize)]
struct AuthorRecord {
    uuid: AuthorId,
    name: String,
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorRecord) -> Result<Self, Self::Error> {
        require_unlinked(&value.articles)?;
        Self::with_id(value.uuid, value.name)
    }
}

impl Author {
    /// Creates an author with a generated id and no articles.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::new(), name)
    }

    /// Creates an author with a caller-provided id and no articles.
    pub fn with_id(uuid: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        require_non_nil(uuid.is_nil())?;
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            uuid,
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Article ids in the order they were added.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn push_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
