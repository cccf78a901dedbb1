//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Catalog value records
//! - `operation_result` / `pagination` / `spec_params`: the service contract
//! - `ports`: Trait definitions for services and storage

pub mod entities;
pub mod operation_result;
pub mod pagination;
pub mod ports;
pub mod spec_params;
