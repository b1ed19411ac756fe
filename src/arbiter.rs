//! Picks the agency with jurisdiction from the city and county results.

use chrono::Utc;

use crate::models::{
    AgencyInfo, CityContact, Coordinates, CountyContact, JurisdictionKind, JurisdictionResult,
};

/// A resolved city always wins, whether or not it is in the directory; the
/// county is attached either way.
pub fn decide(
    coordinates: Coordinates,
    city: Option<CityContact>,
    county: CountyContact,
) -> JurisdictionResult {
    let (jurisdiction, primary_agency) = match &city {
        Some(city) => (JurisdictionKind::City, AgencyInfo::police(city)),
        None => (JurisdictionKind::County, AgencyInfo::sheriff(&county)),
    };

    JurisdictionResult {
        coordinates,
        city,
        county,
        jurisdiction,
        primary_agency,
        resolved_at: Utc::now(),
    }
}
