//! Jurisdiction lookup result types.

use chrono::{DateTime, Utc};
use geo::{coord, Contains, Point, Rect};
use serde::{Deserialize, Serialize};

use super::contact::{AgencyInfo, CityContact, CountyContact};

/// WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within the valid lat/lon ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Rough check against the Texas bounding box.
    pub fn is_within_texas_bbox(&self) -> bool {
        let bbox = Rect::new(
            coord! { x: TEXAS_BBOX[0], y: TEXAS_BBOX[1] },
            coord! { x: TEXAS_BBOX[2], y: TEXAS_BBOX[3] },
        );
        bbox.contains(&Point::new(self.longitude, self.latitude))
    }
}

/// minLon, minLat, maxLon, maxLat
const TEXAS_BBOX: [f64; 4] = [-106.65, 25.84, -93.51, 36.5];

/// Which level of government holds jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JurisdictionKind {
    City,
    County,
}

/// Final answer for a coordinate lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionResult {
    pub coordinates: Coordinates,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityContact>,

    /// Always present; attached for reference even when a city has jurisdiction
    pub county: CountyContact,

    pub jurisdiction: JurisdictionKind,

    pub primary_agency: AgencyInfo,

    pub resolved_at: DateTime<Utc>,
}
