//! Core use-case services.
//!
//! # Responsibility
//! - Expose author/magazine operations on top of a repository.
//! - Keep callers decoupled from storage details.

pub mod catalog_service;
