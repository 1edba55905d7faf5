//! Service layer for cargo tracking on top of `models`.
//! - Cargo CRUD with vehicle resolution by registration number.
//! - Filtered search, paginated or complete, via structured predicates.
//! - Movement history per cargo.
//! - Repositories are traits with SeaORM and in-memory implementations.

pub mod errors;
pub mod cargo;
pub mod vehicle;
pub mod movement;
#[cfg(test)]
pub mod test_support;
