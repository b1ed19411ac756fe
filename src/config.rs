//! TOML configuration. Every field has a default, so an empty file (or no
//! file at all) gives the built-in endpoints and settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const TXDOT_CITIES_URL: &str = "https://services.arcgis.com/KTcxiTD9dsQw4r7Z/arcgis/rest/services/TxDOT_City_Boundaries/FeatureServer/0/query";
pub const FALLBACK_CITIES_URL: &str =
    "https://maps.dot.state.tx.us/arcgis/rest/services/General/Cities/MapServer/0/query";
pub const CENSUS_PLACES_URL: &str = "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/Places_CouSub_ConCity_SubMCD/MapServer/0/query";

pub const TXDOT_COUNTIES_URL: &str = "https://services.arcgis.com/KTcxiTD9dsQw4r7Z/arcgis/rest/services/Texas_County_Boundaries_Detailed/FeatureServer/0/query";
pub const FALLBACK_COUNTIES_URL: &str =
    "https://maps.dot.state.tx.us/arcgis/rest/services/Boundaries/MapServer/1/query";
pub const CENSUS_COUNTIES_URL: &str =
    "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/State_County/MapServer/1/query";

pub const DEFAULT_USER_AGENT: &str = "Texas Law Enforcement Jurisdiction App";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub gis: GisConfig,
    pub guesser: GuesserConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GisConfig {
    /// Tried in order; first usable answer wins
    pub city_endpoints: Vec<String>,
    pub county_endpoints: Vec<String>,
    pub user_agent: String,
    /// Per-request timeout. Unset means the HTTP client's default (none).
    pub timeout_secs: Option<u64>,
    /// Upper bound on a whole lookup
    pub lookup_timeout_secs: Option<u64>,
}

impl Default for GisConfig {
    fn default() -> Self {
        Self {
            city_endpoints: vec![
                TXDOT_CITIES_URL.to_string(),
                FALLBACK_CITIES_URL.to_string(),
                CENSUS_PLACES_URL.to_string(),
            ],
            county_endpoints: vec![
                TXDOT_COUNTIES_URL.to_string(),
                FALLBACK_COUNTIES_URL.to_string(),
                CENSUS_COUNTIES_URL.to_string(),
            ],
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            lookup_timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GuesserConfig {
    /// Maximum number of memoized guesses
    pub cache_capacity: usize,
    /// Fetch the guessed police page and pull a phone number out of it
    pub scrape_phone: bool,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1024,
            scrape_phone: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.gis.city_endpoints.is_empty() {
            anyhow::bail!("gis.city_endpoints must list at least one endpoint");
        }
        if self.gis.county_endpoints.is_empty() {
            anyhow::bail!("gis.county_endpoints must list at least one endpoint");
        }
        if self.guesser.cache_capacity == 0 {
            anyhow::bail!("guesser.cache_capacity must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.gis.city_endpoints.len(), 3);
        assert_eq!(config.gis.county_endpoints[0], TXDOT_COUNTIES_URL);
        assert_eq!(config.guesser.cache_capacity, 1024);
        assert!(!config.guesser.scrape_phone);
        assert_eq!(config.server.listen, "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[gis]
city_endpoints = ["http://localhost:8080/cities/query"]
timeout_secs = 5

[guesser]
scrape_phone = true
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(
            config.gis.city_endpoints,
            vec!["http://localhost:8080/cities/query".to_string()]
        );
        assert_eq!(config.gis.county_endpoints.len(), 3);
        assert_eq!(config.gis.timeout_secs, Some(5));
        assert!(config.guesser.scrape_phone);
        assert_eq!(config.guesser.cache_capacity, 1024);
    }

    #[test]
    fn test_rejects_empty_endpoint_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gis]\ncounty_endpoints = []").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/bluebonnet.toml").is_err());
        assert!(Config::load_or_default(None::<&str>).is_ok());
    }
}
