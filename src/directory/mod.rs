//! Embedded directory of Texas sheriff's offices and police departments.
//!
//! Keys are normalized slugs: cities by lowercased name ("port arthur"),
//! counties by lowercased name without the "County" suffix, spaces
//! replaced with underscores ("fort_bend").

mod data;

use hashbrown::HashMap;
use tracing::debug;

use crate::models::{CityContact, CountyContact};

/// Immutable county/city contact tables, built once at startup
#[derive(Debug, Clone)]
pub struct Directory {
    counties: HashMap<String, CountyContact>,
    cities: HashMap<String, CityContact>,
}

impl Directory {
    /// Build the directory from the embedded Texas tables
    pub fn texas() -> Self {
        let counties: HashMap<String, CountyContact> = data::COUNTIES
            .iter()
            .map(|(key, name, phone, website)| {
                (key.to_string(), CountyContact::new(*name, phone, website))
            })
            .collect();

        let cities: HashMap<String, CityContact> = data::CITIES
            .iter()
            .map(|(key, name, county, phone, website)| {
                (
                    key.to_string(),
                    CityContact::new(name, county, phone, website),
                )
            })
            .collect();

        debug!(
            "Loaded directory with {} counties and {} cities",
            counties.len(),
            cities.len()
        );

        Self { counties, cities }
    }

    /// Look up a county by its directory key
    pub fn county(&self, key: &str) -> Option<&CountyContact> {
        self.counties.get(key)
    }

    /// Look up a city by its directory key
    pub fn city(&self, key: &str) -> Option<&CityContact> {
        self.cities.get(key)
    }

    /// Look up a county by display name ("Jefferson County" or "Jefferson")
    pub fn county_by_name(&self, name: &str) -> Option<&CountyContact> {
        self.county(&county_key(name))
    }

    /// Look up a city by display name, case-insensitively
    pub fn city_by_name(&self, name: &str) -> Option<&CityContact> {
        self.city(&city_key(name))
    }

    pub fn cities(&self) -> impl Iterator<Item = &CityContact> {
        self.cities.values()
    }

    pub fn county_count(&self) -> usize {
        self.counties.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

/// Directory key for a city name
pub fn city_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Directory key for a county name: "Fort Bend County" -> "fort_bend"
pub fn county_key(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let base = lower.strip_suffix(" county").unwrap_or(&lower);
    base.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_key() {
        assert_eq!(county_key("Jefferson County"), "jefferson");
        assert_eq!(county_key("Fort Bend County"), "fort_bend");
        assert_eq!(county_key("bexar"), "bexar");
    }

    #[test]
    fn test_city_key() {
        assert_eq!(city_key("Port Arthur"), "port arthur");
        assert_eq!(city_key(" Houston "), "houston");
    }

    #[test]
    fn test_texas_directory() {
        let dir = Directory::texas();
        assert_eq!(dir.county_count(), 11);
        assert_eq!(dir.city_count(), 12);

        let jefferson = dir.county_by_name("Jefferson County").unwrap();
        assert_eq!(jefferson.sheriff_phone.as_deref(), Some("(409) 835-8411"));

        let houston = dir.city_by_name("HOUSTON").unwrap();
        assert_eq!(houston.county, "Harris County");
        assert_eq!(houston.police_phone.as_deref(), Some("(713) 884-3131"));

        assert!(dir.city_by_name("Nederland").is_none());
        assert!(dir.county_by_name("Hardin County").is_none());
    }

    #[test]
    fn test_every_city_names_a_county() {
        let dir = Directory::texas();
        for (_, city) in dir.cities.iter() {
            assert!(city.county.ends_with(" County"), "{}", city.name);
        }
    }
}
