//! Bluebonnet - Texas law-enforcement jurisdiction lookup
//!
//! Resolves a coordinate to the city or county that covers it via public
//! ArcGIS boundary services, then returns contact details for the police
//! department or sheriff's office with jurisdiction.

pub mod arbiter;
pub mod config;
pub mod directory;
pub mod error;
pub mod gis;
pub mod guesser;
pub mod http;
pub mod models;
pub mod service;

pub use config::Config;
pub use error::{GisError, JurisdictionError};
pub use models::{AgencyInfo, CityContact, CountyContact, JurisdictionKind, JurisdictionResult};
pub use service::JurisdictionService;
