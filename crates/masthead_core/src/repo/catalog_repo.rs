//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store authors, magazines and articles keyed by stable id.
//! - Preserve magazine registration order for cross-magazine queries.
//!
//! # Invariants
//! - `insert_article` appends to both the author's and the magazine's
//!   sequences or to neither.
//! - Records enter the repository with empty article sequences; articles are
//!   only linked through `insert_article`.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error for catalog storage and query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Record input violated a field constraint.
    Validation(ValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
    /// A record with the same id is already stored.
    DuplicateId(String),
    /// Record cannot be stored without breaking a linkage invariant.
    InconsistentState(&'static str),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateId(id) => write!(f, "id already stored: {id}"),
            Self::InconsistentState(details) => write!(f, "inconsistent catalog state: {details}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage interface for catalog records.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> CatalogResult<AuthorId>;
    /// Stores and registers a magazine at the end of the registry.
    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId>;
    /// Stores an article and appends it to its author and magazine.
    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId>;
    fn author(&self, id: AuthorId) -> Option<&Author>;
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn article(&self, id: ArticleId) -> Option<&Article>;
    /// Every registered magazine in registration order.
    fn magazines(&self) -> Vec<&Magazine>;
    /// Drops every stored record, registry included.
    fn clear(&mut self);
}

/// Process-local catalog storage.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    registry: Vec<MagazineId>,
    articles: HashMap<ArticleId, Article>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.registry.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> CatalogResult<AuthorId> {
        if !author.articles().is_empty() {
            return Err(CatalogError::InconsistentState(
                "author must be stored before its articles",
            ));
        }
        let id = author.id();
        if self.authors.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        self.authors.insert(id, author);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId> {
        if !magazine.articles().is_empty() {
            return Err(CatalogError::InconsistentState(
                "magazine must be stored before its articles",
            ));
        }
        let id = magazine.id();
        if self.magazines.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        self.magazines.insert(id, magazine);
        self.registry.push(id);
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId> {
        let id = article.id();
        if self.articles.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        if !self.magazines.contains_key(&article.magazine()) {
            return Err(CatalogError::MagazineNotFound(article.magazine()));
        }
        let author = self
            .authors
            .get_mut(&article.author())
            .ok_or(CatalogError::AuthorNotFound(article.author()))?;
        author.push_article(id);
        if let Some(magazine) = self.magazines.get_mut(&article.magazine()) {
            magazine.push_article(id);
        }
        self.articles.insert(id, article);
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    fn magazines(&self) -> Vec<&Magazine> {
        self.registry
            .iter()
            .filter_map(|id| self.magazines.get(id))
            .collect()
    }

    fn clear(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.registry.clear();
        self.articles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, CatalogRepository, InMemoryCatalogRepository};
    use crate::model::article::Article;
    use crate::model::author::Author;
    use crate::model::id::{AuthorId, MagazineId};
    use crate::model::magazine::Magazine;

    #[test]
    fn registry_keeps_registration_order() {
        let mut repo = InMemoryCatalogRepository::new();
        let first = repo
            .insert_magazine(Magazine::new("Zeta", "Science").unwrap())
            .unwrap();
        let second = repo
            .insert_magazine(Magazine::new("Alpha", "Art").unwrap())
            .unwrap();

        let ids: Vec<_> = repo.magazines().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn insert_article_links_both_sides() {
        let mut repo = InMemoryCatalogRepository::new();
        let author = repo.insert_author(Author::new("Ann").unwrap()).unwrap();
        let magazine = repo
            .insert_magazine(Magazine::new("Daily", "News").unwrap())
            .unwrap();

        let article = repo
            .insert_article(Article::new(author, magazine, "Morning brief").unwrap())
            .unwrap();

        assert_eq!(repo.author(author).unwrap().articles(), &[article]);
        assert_eq!(repo.magazine(magazine).unwrap().articles(), &[article]);
        assert_eq!(repo.article_count(), 1);
    }

    #[test]
    fn insert_article_with_unknown_side_changes_nothing() {
        let mut repo = InMemoryCatalogRepository::new();
        let author = repo.insert_author(Author::new("Ann").unwrap()).unwrap();
        let magazine = repo
            .insert_magazine(Magazine::new("Daily", "News").unwrap())
            .unwrap();

        let missing_magazine = MagazineId::new();
        let err = repo
            .insert_article(Article::new(author, missing_magazine, "Lost piece").unwrap())
            .unwrap_err();
        assert_eq!(err, CatalogError::MagazineNotFound(missing_magazine));

        let missing_author = AuthorId::new();
        let err = repo
            .insert_article(Article::new(missing_author, magazine, "Orphan piece").unwrap())
            .unwrap_err();
        assert_eq!(err, CatalogError::AuthorNotFound(missing_author));

        assert!(repo.author(author).unwrap().articles().is_empty());
        assert!(repo.magazine(magazine).unwrap().articles().is_empty());
        assert_eq!(repo.article_count(), 0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut repo = InMemoryCatalogRepository::new();
        let author = Author::new("Ann").unwrap();
        repo.insert_author(author.clone()).unwrap();
        assert!(matches!(
            repo.insert_author(author),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn clear_empties_registry() {
        let mut repo = InMemoryCatalogRepository::new();
        repo.insert_author(Author::new("Ann").unwrap()).unwrap();
        repo.insert_magazine(Magazine::new("Daily", "News").unwrap())
            .unwrap();

        repo.clear();
        assert!(repo.magazines().is_empty());
        assert_eq!(repo.author_count(), 0);
        assert_eq!(repo.magazine_count(), 0);
    }
}
