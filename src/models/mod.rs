//! Core data models for the jurisdiction lookup.

pub mod contact;
pub mod jurisdiction;

pub use contact::{AgencyInfo, AgencyKind, CityContact, CountyContact};
pub use jurisdiction::{Coordinates, JurisdictionKind, JurisdictionResult};
