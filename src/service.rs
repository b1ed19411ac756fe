//! Jurisdiction lookup: GIS resolution, directory lookup, guessing and
//! arbitration wired together.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::arbiter;
use crate::config::Config;
use crate::directory::Directory;
use crate::error::{JurisdictionError, Result};
use crate::gis::{ArcGisClient, FeatureSource, GisResolver, PlaceKind, ResolvedPlace};
use crate::guesser::{ContactGuesser, HttpProbe, SiteProbe};
use crate::http::build_client;
use crate::models::{CityContact, Coordinates, CountyContact, JurisdictionResult};

const UNKNOWN_COUNTY: &str = "Unknown County";

pub struct JurisdictionService {
    directory: Arc<Directory>,
    city_resolver: GisResolver,
    county_resolver: GisResolver,
    guesser: ContactGuesser,
    lookup_timeout: Option<Duration>,
}

impl JurisdictionService {
    /// Service talking to the configured ArcGIS endpoints over HTTP
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = build_client(&config.gis)?;
        Ok(Self::with_parts(
            Arc::new(Directory::texas()),
            Arc::new(ArcGisClient::new(client.clone())),
            Arc::new(HttpProbe::new(client)),
            config,
        ))
    }

    /// Service over caller-supplied feature source and site probe
    pub fn with_parts(
        directory: Arc<Directory>,
        source: Arc<dyn FeatureSource>,
        probe: Arc<dyn SiteProbe>,
        config: &Config,
    ) -> Self {
        let city_resolver = GisResolver::new(
            source.clone(),
            PlaceKind::City,
            config.gis.city_endpoints.clone(),
        );
        let county_resolver = GisResolver::new(
            source,
            PlaceKind::County,
            config.gis.county_endpoints.clone(),
        );
        let guesser = ContactGuesser::new(directory.clone(), probe, config.guesser.cache_capacity)
            .with_phone_scraping(config.guesser.scrape_phone);

        Self {
            directory,
            city_resolver,
            county_resolver,
            guesser,
            lookup_timeout: config.gis.lookup_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Bound the total time of a lookup
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Number of memoized contact guesses
    pub fn cached_guesses(&self) -> usize {
        self.guesser.cache().len()
    }

    pub async fn get_jurisdiction_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<JurisdictionResult> {
        let coords = Coordinates::new(latitude, longitude);
        if !coords.is_valid() {
            return Err(JurisdictionError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        info!("Jurisdiction lookup at ({}, {})", latitude, longitude);
        if !coords.is_within_texas_bbox() {
            warn!(
                "({}, {}) is outside Texas; results will likely be the statewide fallback",
                latitude, longitude
            );
        }

        match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, self.lookup(coords))
                .await
                .map_err(|_| {
                    JurisdictionError::Failed(format!("lookup timed out after {:?}", limit))
                }),
            None => Ok(self.lookup(coords).await),
        }
    }

    async fn lookup(&self, coords: Coordinates) -> JurisdictionResult {
        let (city_place, county_place) = tokio::join!(
            self.city_resolver.resolve(coords),
            self.county_resolver.resolve(coords)
        );

        let county = self.county_contact(county_place);
        let city = match city_place {
            Some(place) => Some(self.city_contact(place, &county).await),
            None => None,
        };

        let result = arbiter::decide(coords, city, county);
        info!(
            "Jurisdiction: {:?} ({})",
            result.jurisdiction, result.primary_agency.name
        );
        result
    }

    fn county_contact(&self, place: Option<ResolvedPlace>) -> CountyContact {
        let Some(place) = place else {
            info!("No county found, using statewide fallback");
            return CountyContact::statewide_fallback();
        };

        match self.directory.county_by_name(&place.name) {
            Some(county) => county.clone(),
            None => {
                debug!("{} not in directory", place.name);
                CountyContact::unlisted(place.name)
            }
        }
    }

    async fn city_contact(&self, place: ResolvedPlace, county: &CountyContact) -> CityContact {
        // Prefer the county polygon answer over whatever label the city layer carries
        let county_label = if county.is_statewide_fallback() {
            place
                .county_hint
                .clone()
                .unwrap_or_else(|| UNKNOWN_COUNTY.to_string())
        } else {
            county.name.clone()
        };

        let guess = self.guesser.guess_contact(&place.name, &county_label).await;
        debug!(
            "Contact for {} via {:?} ({:?} confidence)",
            place.name, guess.method, guess.confidence
        );
        guess.contact
    }
}
