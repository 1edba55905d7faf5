//! Vehicle lookup: the one capability this crate needs from the vehicle
//! subsystem, resolving a vehicle by its number.

pub mod lookup;
pub mod seaorm;

pub use lookup::{Vehicle, VehicleLookup};
