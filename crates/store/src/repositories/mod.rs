//! CRUD operations over the [`MemoryStore`](crate::MemoryStore) collections.
//!
//! Lookups are linear scans in insertion order. Validation runs before the
//! write lock is taken; every read-modify-write holds the lock throughout.

pub mod client_repo;
pub mod debt_repo;

pub use client_repo::ClientRepo;
pub use debt_repo::DebtRepo;
