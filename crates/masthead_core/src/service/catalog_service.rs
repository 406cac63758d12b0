//! Catalog use-case service.
//!
//! # Responsibility
//! - Create authors and magazines, and link them through articles.
//! - Answer derived queries: distinct magazines and topic areas of an
//!   author; contributors, titles and frequent contributors of a magazine;
//!   the registry-wide top publisher.
//!
//! # Invariants
//! - Validation errors reach the caller unchanged as
//!   `CatalogError::Validation`.
//! - Distinct-entity results are deduplicated by id and listed in order of
//!   first appearance.
//! - `top_publisher` ties resolve to the earliest registered magazine.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::{CatalogError, CatalogRepository, CatalogResult};
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap, HashSet};

/// An author needs strictly more articles than this in one magazine to count
/// as a contributing author of it.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

/// Use-case service wrapper for catalog operations.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Validates and stores a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).map_err(|err| {
            warn!(
                "event=author_create module=catalog status=error reason={}",
                err.code()
            );
            err
        })?;
        let id = self.repo.insert_author(author)?;
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Validates, stores and registers a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category).map_err(|err| {
            warn!(
                "event=magazine_create module=catalog status=error reason={}",
                err.code()
            );
            err
        })?;
        let id = self.repo.insert_magazine(magazine)?;
        debug!(
            "event=magazine_create module=catalog status=ok magazine_id={id} registry_size={}",
            self.repo.magazines().len()
        );
        Ok(id)
    }

    /// Writes a new article by `author` into `magazine`.
    ///
    /// # Contract
    /// - Appends exactly one id to the author's and the magazine's sequences.
    /// - Returns the stored article.
    ///
    /// # Errors
    /// - `CatalogError::Validation` when `title` is outside 5..=50 characters.
    /// - `CatalogError::AuthorNotFound` / `MagazineNotFound` for unknown ids.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<Article> {
        let article = Article::new(author, magazine, title).map_err(|err| {
            warn!(
                "event=article_add module=catalog status=error reason={}",
                err.code()
            );
            err
        })?;
        let stored = article.clone();
        let id = self.repo.insert_article(article)?;
        debug!(
            "event=article_add module=catalog status=ok article_id={id} author_id={author} magazine_id={magazine}"
        );
        Ok(stored)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.author(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.magazine(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.article(id)
    }

    /// Every registered magazine in registration order.
    pub fn magazines(&self) -> Vec<&Magazine> {
        self.repo.magazines()
    }

    /// Articles written by `author`, in insertion order.
    pub fn author_articles(&self, author: AuthorId) -> CatalogResult<Vec<&Article>> {
        let author = self.require_author(author)?;
        self.resolve_articles(author.articles())
    }

    /// Distinct magazines `author` has written for.
    pub fn author_magazines(&self, author: AuthorId) -> CatalogResult<Vec<&Magazine>> {
        let articles = self.author_articles(author)?;
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in articles {
            if seen.insert(article.magazine()) {
                magazines.push(self.require_magazine(article.magazine())?);
            }
        }
        Ok(magazines)
    }

    /// Distinct categories of the magazines `author` has written for.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self, author: AuthorId) -> CatalogResult<Option<BTreeSet<&str>>> {
        let magazines = self.author_magazines(author)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        Ok(Some(magazines.into_iter().map(Magazine::category).collect()))
    }

    /// Articles published in `magazine`, in insertion order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> CatalogResult<Vec<&Article>> {
        let magazine = self.require_magazine(magazine)?;
        self.resolve_articles(magazine.articles())
    }

    pub fn article_count(&self, magazine: MagazineId) -> CatalogResult<usize> {
        Ok(self.require_magazine(magazine)?.article_count())
    }

    /// Distinct authors with at least one article in `magazine`.
    pub fn contributors(&self, magazine: MagazineId) -> CatalogResult<Vec<&Author>> {
        let articles = self.magazine_articles(magazine)?;
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in articles {
            if seen.insert(article.author()) {
                authors.push(self.require_author(article.author())?);
            }
        }
        Ok(authors)
    }

    /// Titles published in `magazine`, in insertion order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<&str>>> {
        let articles = self.magazine_articles(magazine)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(articles.into_iter().map(Article::title).collect()))
    }

    /// Authors with more than two articles in `magazine`.
    pub fn contributing_authors(&self, magazine: MagazineId) -> CatalogResult<Vec<&Author>> {
        let articles = self.magazine_articles(magazine)?;
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author()).or_default() += 1;
        }

        let mut authors = Vec::new();
        for article in &articles {
            let author = article.author();
            if counts.remove(&author).unwrap_or(0) > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE {
                authors.push(self.require_author(author)?);
            }
        }
        Ok(authors)
    }

    /// Registered magazine with the most articles.
    ///
    /// Returns `None` when no magazine is registered. Among magazines sharing
    /// the maximum count the earliest registered one wins.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut top: Option<&Magazine> = None;
        for magazine in self.repo.magazines() {
            match top {
                Some(current) if magazine.article_count() <= current.article_count() => {}
                _ => top = Some(magazine),
            }
        }
        top
    }

    /// Drops every author, magazine and article, registry included.
    pub fn reset(&mut self) {
        self.repo.clear();
        debug!("event=catalog_reset module=catalog status=ok");
    }

    fn require_author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.repo.author(id).ok_or(CatalogError::AuthorNotFound(id))
    }

    fn require_magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.repo
            .magazine(id)
            .ok_or(CatalogError::MagazineNotFound(id))
    }

    fn resolve_articles(&self, ids: &[ArticleId]) -> CatalogResult<Vec<&Article>> {
        ids.iter()
            .map(|id| self.repo.article(*id).ok_or(CatalogError::ArticleNotFound(*id)))
            .collect()
    }
}
