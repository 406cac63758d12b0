//! Repository layer: ownership and lookup of domain records.
//!
//! # Responsibility
//! - Define the storage contract the catalog service is written against.
//! - Own the magazine registry explicitly so callers can inject and reset it.
//!
//! # Invariants
//! - The magazine registry keeps registration order and is never pruned
//!   except by an explicit `clear`.
//! - An article is linked into its author and magazine atomically.

pub mod catalog_repo;
