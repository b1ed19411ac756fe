//! Query server for jurisdiction lookups.
//!
//! Exposes the lookup over HTTP: `GET /v1/jurisdiction?point.lat=..&point.lon=..`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bluebonnet::{Config, JurisdictionError, JurisdictionResult, JurisdictionService};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Texas jurisdiction lookup server")]
struct Args {
    /// Listen address (overrides server.listen from the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Application state shared across handlers
struct AppState {
    service: JurisdictionService,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_ref())?;
    let listen = args.listen.unwrap_or_else(|| config.server.listen.clone());

    info!("Bluebonnet Query Server");
    info!(
        "City endpoints: {}, county endpoints: {}",
        config.gis.city_endpoints.len(),
        config.gis.county_endpoints.len()
    );

    let service = JurisdictionService::new(&config).context("Failed to create HTTP client")?;
    let app = router(Arc::new(AppState { service }));

    info!("Starting server on {}", listen);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/jurisdiction", get(jurisdiction_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cached_guesses: state.service.cached_guesses(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    cached_guesses: usize,
}

/// Jurisdiction for a point
async fn jurisdiction_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JurisdictionQueryParams>,
) -> Result<Json<JurisdictionResult>, (StatusCode, String)> {
    state
        .service
        .get_jurisdiction_by_coordinates(params.point_lat, params.point_lon)
        .await
        .map(Json)
        .map_err(|e| match e {
            JurisdictionError::InvalidCoordinates { .. } => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            JurisdictionError::Failed(_) => {
                tracing::error!("Jurisdiction lookup failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        })
}

#[derive(Deserialize)]
struct JurisdictionQueryParams {
    /// Point latitude
    #[serde(rename = "point.lat")]
    point_lat: f64,
    /// Point longitude
    #[serde(rename = "point.lon")]
    point_lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use bluebonnet::directory::Directory;
    use bluebonnet::gis::{FeatureSource, GisFeature};
    use bluebonnet::guesser::SiteProbe;
    use bluebonnet::models::Coordinates;
    use bluebonnet::GisError;
    use serde_json::{json, Value};

    /// Answers every endpoint with the same Houston feature
    struct HoustonSource {
        delay: Option<Duration>,
    }

    #[async_trait]
    impl FeatureSource for HoustonSource {
        async fn query_point(
            &self,
            _endpoint: &str,
            _coords: Coordinates,
        ) -> std::result::Result<Vec<GisFeature>, GisError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let feature = json!({
                "attributes": { "CITY_NM": "Houston", "CNTY_NM": "Harris" }
            });
            Ok(vec![serde_json::from_value(feature).unwrap()])
        }
    }

    struct NoSites;

    #[async_trait]
    impl SiteProbe for NoSites {
        async fn exists(&self, _url: &str) -> bool {
            false
        }

        async fn fetch_text(&self, _url: &str) -> Option<String> {
            None
        }
    }

    fn service(delay: Option<Duration>) -> JurisdictionService {
        JurisdictionService::with_parts(
            Arc::new(Directory::texas()),
            Arc::new(HoustonSource { delay }),
            Arc::new(NoSites),
            &Config::default(),
        )
    }

    async fn serve(service: JurisdictionService) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(Arc::new(AppState { service }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_jurisdiction_ok() {
        let base = serve(service(None)).await;

        let response = reqwest::get(format!(
            "{}/v1/jurisdiction?point.lat=29.7604&point.lon=-95.3698",
            base
        ))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["jurisdiction"], "city");
        assert_eq!(body["primaryAgency"]["name"], "Houston Police Department");
        assert_eq!(body["primaryAgency"]["phone"], "(713) 884-3131");
        assert_eq!(body["county"]["name"], "Harris County");
    }

    #[tokio::test]
    async fn test_invalid_coordinates_are_bad_request() {
        let base = serve(service(None)).await;

        let response = reqwest::get(format!(
            "{}/v1/jurisdiction?point.lat=200&point.lon=-95.3698",
            base
        ))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.text().await.unwrap().contains("invalid coordinates"));
    }

    #[tokio::test]
    async fn test_timed_out_lookup_is_server_error() {
        let svc = service(Some(Duration::from_secs(30)))
            .with_lookup_timeout(Duration::from_millis(50));
        let base = serve(svc).await;

        let response = reqwest::get(format!(
            "{}/v1/jurisdiction?point.lat=29.7604&point.lon=-95.3698",
            base
        ))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response
            .text()
            .await
            .unwrap()
            .starts_with("failed to determine jurisdiction"));
    }

    #[tokio::test]
    async fn test_health_reports_cache_size() {
        let base = serve(service(None)).await;

        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["cachedGuesses"], 0);
    }
}
