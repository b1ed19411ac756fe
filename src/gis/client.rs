//! ArcGIS REST feature-service client.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::GisError;
use crate::models::Coordinates;

/// A single feature returned by a spatial query. Attribute schemas differ
/// between providers, so the attributes stay untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GisFeature {
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<GisFeature>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Source of point-in-polygon query results
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Features at `endpoint` whose geometry contains `coords`
    async fn query_point(
        &self,
        endpoint: &str,
        coords: Coordinates,
    ) -> Result<Vec<GisFeature>, GisError>;
}

/// Query parameters for a "within" point query returning attributes only
pub fn point_query_params(coords: Coordinates) -> [(&'static str, String); 8] {
    [
        ("f", "json".to_string()),
        (
            "geometry",
            format!("{},{}", coords.longitude, coords.latitude),
        ),
        ("geometryType", "esriGeometryPoint".to_string()),
        ("inSR", "4326".to_string()),
        ("spatialRel", "esriSpatialRelWithin".to_string()),
        ("outFields", "*".to_string()),
        ("returnGeometry", "false".to_string()),
        ("where", "1=1".to_string()),
    ]
}

/// Build the full query URL for an endpoint
pub fn point_query_url(endpoint: &str, coords: Coordinates) -> Result<Url, GisError> {
    let params = point_query_params(coords);
    Ok(Url::parse_with_params(endpoint, params.iter())?)
}

/// Feature source backed by ArcGIS REST `/query` endpoints
#[derive(Clone)]
pub struct ArcGisClient {
    client: Client,
}

impl ArcGisClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeatureSource for ArcGisClient {
    async fn query_point(
        &self,
        endpoint: &str,
        coords: Coordinates,
    ) -> Result<Vec<GisFeature>, GisError> {
        let url = point_query_url(endpoint, coords)?;

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GisError::Status(status.as_u16()));
        }

        let data: QueryResponse = response.json().await?;

        if let Some(err) = data.error {
            return Err(GisError::Service {
                code: err.code,
                message: err.message,
            });
        }

        debug!(
            "{} returned {} features; first: {:?}",
            endpoint,
            data.features.len(),
            data.features.first().map(|f| &f.attributes)
        );

        Ok(data.features)
    }
}
