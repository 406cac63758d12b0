//! Core domain logic for Masthead.
//! Authors and magazines joined through articles, plus derived queries.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::id::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::{
    ValidationError, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use repo::catalog_repo::{
    CatalogError, CatalogRepository, CatalogResult, InMemoryCatalogRepository,
};
pub use service::catalog_service::{CatalogService, CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
