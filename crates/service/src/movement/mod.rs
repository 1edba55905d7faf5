//! Cargo movement tracking: dated transfers of a cargo between locations.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CargoMovementService;
