//! Domain model for the author/magazine/article relationship.
//!
//! # Responsibility
//! - Define the three canonical records and their typed identifiers.
//! - Enforce field constraints at construction time.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil id.
//! - Records are never constructed in an invalid state, including through
//!   deserialization.
//! - Article collections are append-only.

pub mod article;
pub mod author;
pub mod id;
pub mod magazine;
pub mod validation;
