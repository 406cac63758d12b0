//! Magazine domain model.
//!
//! # Responsibility
//! - Hold a publication's name, category and the ordered ids of articles
//!   published in it.
//!
//! # Invariants
//! - `name` is 2..=16 characters, `category` is non-empty; both immutable.
//! - `articles` keeps insertion order and only grows.

use crate::model::id::{ArticleId, MagazineId};
use crate::model::validation::{
    require_non_nil, require_unlinked, validate_category, validate_magazine_name,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// A publication venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    uuid: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

#[derive(Deserialize)]
struct MagazineRecord {
    uuid: MagazineId,
    name: String,
    category: String,
    #[serde(default)]
    articles: Vec<ArticleId>,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(value: MagazineRecord) -> Result<Self, Self::Error> {
        require_unlinked(&value.articles)?;
        Self::with_id(value.uuid, value.name, value.category)
    }
}

impl Magazine {
    /// Creates a magazine with a generated id and no articles.
    ///
    /// Registration happens when the magazine is handed to a repository, not
    /// here.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside 2..=16 characters.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(MagazineId::new(), name, category)
    }

    /// Creates a magazine with a caller-provided id and no articles.
    pub fn with_id(
        uuid: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        require_non_nil(uuid.is_nil())?;
        let name = name.into();
        validate_magazine_name(&name)?;
        let category = category.into();
        validate_category(&category)?;
        Ok(Self {
            uuid,
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Article ids in the order they were published.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub(crate) fn push_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
