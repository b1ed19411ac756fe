//! Attribute-name aliases used by the various boundary providers.

use serde_json::{Map, Value};

/// City name fields (TxDOT, TIGERweb, older census vintages)
pub const CITY_NAME_FIELDS: &[&str] = &[
    "CITY_NM",
    "NAME",
    "CITY_NAME",
    "City",
    "CITYNAME",
    "NAMELSAD",
    "NAME10",
    "GEONAME",
    "CITY_FIPS",
    "PLACE_NAME",
    "FULLNAME",
];

/// County name fields on a county boundary feature
pub const COUNTY_NAME_FIELDS: &[&str] = &[
    "CNTY_NM",
    "NAME",
    "COUNTY_NAME",
    "County",
    "COUNTYNAME",
    "NAMELSAD",
    "NAME10",
    "GEONAME",
    "FULLNAME",
    "COUNTY_FIPS",
];

/// County fields sometimes carried on a city boundary feature
pub const CITY_COUNTY_HINT_FIELDS: &[&str] = &[
    "CNTY_NM",
    "COUNTY",
    "COUNTY_NAME",
    "County",
    "COUNTYNAME",
    "COUNTYFP",
    "CNTY_FIPS",
    "STATEFP",
];

/// First alias holding a non-blank string, with that alias and the trimmed value
pub fn first_string_field<'a>(
    attributes: &Map<String, Value>,
    aliases: &[&'a str],
) -> Option<(&'a str, String)> {
    aliases.iter().find_map(|alias| {
        attributes
            .get(*alias)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| (*alias, value.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_alias_priority() {
        let a = attrs(json!({ "NAME": "Nederland", "CITY_NM": "Port Neches" }));
        assert_eq!(
            first_string_field(&a, CITY_NAME_FIELDS),
            Some(("CITY_NM", "Port Neches".to_string()))
        );
    }

    #[test]
    fn test_skips_blank_and_non_string() {
        let a = attrs(json!({
            "CITY_NM": "   ",
            "NAME": null,
            "CITY_NAME": 42,
            "City": "  Vidor "
        }));
        assert_eq!(
            first_string_field(&a, CITY_NAME_FIELDS),
            Some(("City", "Vidor".to_string()))
        );
    }

    #[test]
    fn test_no_match() {
        let a = attrs(json!({ "OBJECTID": 1 }));
        assert_eq!(first_string_field(&a, COUNTY_NAME_FIELDS), None);
    }
}
