//! URL patterns for guessing municipal websites.

use url::Url;

/// Leading candidates that are the usual shapes for a Texas city's own
/// site; a hit on one of these is reported with higher confidence.
pub const OFFICIAL_SITE_PATTERNS: usize = 3;

/// Common police sub-pages, tried in order against a site's origin
pub const POLICE_PATHS: &[&str] = &[
    "/police",
    "/departments/police",
    "/police-department",
    "/public-safety/police",
    "/services/police",
    "/government/departments/police",
];

/// Lowercase alphanumeric slug: "Port Neches" -> "portneches"
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Candidate city websites in probe order
pub fn candidate_sites(slug: &str) -> Vec<String> {
    vec![
        format!("https://www.cityof{}.com", slug),
        format!("https://www.{}tx.gov", slug),
        format!("https://www.{}.tx.us", slug),
        format!("https://www.city{}.org", slug),
        format!("https://www.{}.org", slug),
        format!("https://www.cityof{}.net", slug),
    ]
}

/// Police sub-page candidates on the origin of `site`
pub fn police_page_candidates(site: &str) -> Vec<String> {
    let Ok(url) = Url::parse(site) else {
        return Vec::new();
    };
    let origin = url.origin().ascii_serialization();

    POLICE_PATHS
        .iter()
        .map(|path| format!("{}{}", origin, path))
        .collect()
}

/// Best-guess website when nothing could be probed
pub fn fallback_website(slug: &str) -> String {
    format!("https://www.cityof{}.com", slug)
}

/// Human-actionable stand-in for an unknown phone number
pub fn search_suggestion(place: &str) -> String {
    format!("Search \"{} Texas police department phone\"", place)
}
