//! Test utilities
//!
//! Fixtures and fake repositories for unit testing.
//!
//! Service ports are mocked with mockall (`Mock*Service`) in handler tests.
//! Repositories are faked by hand: the in-memory adapter covers the happy
//! paths and `FailingCatalogRepository` covers storage errors.

pub mod fixtures;
pub mod mocks;

pub use crate::adapters::memory::InMemoryCatalogRepository;
pub use fixtures::*;
pub use mocks::*;
