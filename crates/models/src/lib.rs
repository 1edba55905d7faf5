//! sea-orm entities for the delivery service plus connection helpers.

pub mod errors;
pub mod db;
pub mod search;
pub mod vehicle;
pub mod cargo;
pub mod cargo_movement;

#[cfg(test)]
mod tests;
