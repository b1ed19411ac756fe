//! Ordered-fallback place resolution over several feature services.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::client::{FeatureSource, GisFeature};
use super::fields::{
    first_string_field, CITY_COUNTY_HINT_FIELDS, CITY_NAME_FIELDS, COUNTY_NAME_FIELDS,
};
use super::normalize::{normalize_city_name, normalize_county_name};
use crate::error::GisError;
use crate::models::Coordinates;

/// Which boundary layer a resolver queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    City,
    County,
}

impl PlaceKind {
    fn name_fields(&self) -> &'static [&'static str] {
        match self {
            PlaceKind::City => CITY_NAME_FIELDS,
            PlaceKind::County => COUNTY_NAME_FIELDS,
        }
    }

    fn normalize(&self, raw: &str) -> String {
        match self {
            PlaceKind::City => normalize_city_name(raw),
            PlaceKind::County => normalize_county_name(raw),
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceKind::City => write!(f, "city"),
            PlaceKind::County => write!(f, "county"),
        }
    }
}

/// A normalized place name pulled out of a boundary feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlace {
    pub name: String,
    /// County label carried on a city feature, when the provider has one
    pub county_hint: Option<String>,
    /// Position of the endpoint that answered
    pub endpoint_index: usize,
}

/// Result of trying a single endpoint
#[derive(Debug)]
pub enum ResolveOutcome {
    Found(ResolvedPlace),
    /// Endpoint answered but had no usable feature
    NotFound,
    TransientError(GisError),
}

/// Resolves a coordinate to a place name by trying each endpoint in order
pub struct GisResolver {
    source: Arc<dyn FeatureSource>,
    kind: PlaceKind,
    endpoints: Vec<String>,
}

impl GisResolver {
    pub fn new(source: Arc<dyn FeatureSource>, kind: PlaceKind, endpoints: Vec<String>) -> Self {
        Self {
            source,
            kind,
            endpoints,
        }
    }

    /// First usable place name across all endpoints, or `None` once every
    /// endpoint has failed or come back empty.
    pub async fn resolve(&self, coords: Coordinates) -> Option<ResolvedPlace> {
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            debug!(
                "Trying {} endpoint {}/{}: {}",
                self.kind,
                index + 1,
                self.endpoints.len(),
                endpoint
            );

            match self.try_endpoint(index, endpoint, coords).await {
                ResolveOutcome::Found(place) => {
                    info!(
                        "Resolved {} '{}' from endpoint {}",
                        self.kind,
                        place.name,
                        index + 1
                    );
                    return Some(place);
                }
                ResolveOutcome::NotFound => {
                    debug!("No {} at endpoint {}", self.kind, index + 1);
                }
                ResolveOutcome::TransientError(e) => {
                    warn!("{} endpoint {} failed: {}", self.kind, index + 1, e);
                }
            }
        }

        info!(
            "No {} found at ({}, {})",
            self.kind, coords.latitude, coords.longitude
        );
        None
    }

    /// Query one endpoint and interpret its first feature
    pub async fn try_endpoint(
        &self,
        index: usize,
        endpoint: &str,
        coords: Coordinates,
    ) -> ResolveOutcome {
        let features = match self.source.query_point(endpoint, coords).await {
            Ok(features) => features,
            Err(e) => return ResolveOutcome::TransientError(e),
        };

        // Overlapping polygons are not disambiguated
        match features.first() {
            Some(feature) => match self.extract(feature, index) {
                Some(place) => ResolveOutcome::Found(place),
                None => ResolveOutcome::NotFound,
            },
            None => ResolveOutcome::NotFound,
        }
    }

    fn extract(&self, feature: &GisFeature, endpoint_index: usize) -> Option<ResolvedPlace> {
        let (field, raw) = first_string_field(&feature.attributes, self.kind.name_fields())?;
        debug!("Found {} name in field '{}': {}", self.kind, field, raw);

        let county_hint = match self.kind {
            PlaceKind::City => first_string_field(&feature.attributes, CITY_COUNTY_HINT_FIELDS)
                .map(|(_, county)| county),
            PlaceKind::County => None,
        };

        Some(ResolvedPlace {
            name: self.kind.normalize(&raw),
            county_hint,
            endpoint_index,
        })
    }
}
