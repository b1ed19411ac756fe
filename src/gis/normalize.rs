//! Place-name cleanup for names returned by the boundary services.

const STATE_SUFFIXES: &[&str] = &[", TX", ", Texas"];

fn strip_state_suffixes(name: &str) -> &str {
    STATE_SUFFIXES
        .iter()
        .fold(name, |acc, suffix| acc.strip_suffix(suffix).unwrap_or(acc))
}

/// "City of Plano, TX" -> "Plano"
pub fn normalize_city_name(raw: &str) -> String {
    let name = strip_state_suffixes(raw.trim());
    let name = name.strip_prefix("City of ").unwrap_or(name);

    if name.to_lowercase().contains("port arthur") {
        return "Port Arthur".to_string();
    }

    name.to_string()
}

/// "Jefferson County, TX" or "Jefferson" -> "Jefferson County"
pub fn normalize_county_name(raw: &str) -> String {
    let name = strip_state_suffixes(raw.trim());
    let name = name.strip_suffix(" County").unwrap_or(name);

    if name.to_lowercase().contains("county") {
        name.to_string()
    } else {
        format!("{} County", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_names() {
        assert_eq!(normalize_city_name("City of Plano, TX"), "Plano");
        assert_eq!(normalize_city_name("Houston, Texas"), "Houston");
        assert_eq!(normalize_city_name("Lumberton"), "Lumberton");
        assert_eq!(normalize_city_name("PORT ARTHUR (ETJ)"), "Port Arthur");
    }

    #[test]
    fn test_county_names() {
        assert_eq!(normalize_county_name("Jefferson County"), "Jefferson County");
        assert_eq!(normalize_county_name("Jefferson"), "Jefferson County");
        assert_eq!(normalize_county_name("Fort Bend County, TX"), "Fort Bend County");
        assert_eq!(normalize_county_name("HARDIN COUNTY"), "HARDIN COUNTY");
    }

    #[test]
    fn test_county_name_to_directory_key() {
        let name = normalize_county_name("Jefferson County");
        assert_eq!(crate::directory::county_key(&name), "jefferson");
    }
}
