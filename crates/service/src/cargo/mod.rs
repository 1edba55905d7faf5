//! Cargo module: three-layer architecture (domain, repository, service) plus
//! the filter builder used by the search operations.

pub mod domain;
pub mod filter;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CargoService;
