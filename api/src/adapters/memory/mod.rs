//! In-memory adapters
//!
//! Catalog storage held in process memory, optionally seeded from a JSON file.

pub mod repository;
pub mod seed;

pub use repository::InMemoryCatalogRepository;
pub use seed::CatalogSeed;
