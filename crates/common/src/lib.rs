//! Shared building blocks for the delivery service crates.

pub mod pagination;
pub mod utils;
