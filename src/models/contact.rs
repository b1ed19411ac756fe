//! Agency contact records for counties and cities.

use serde::{Deserialize, Serialize};

/// Sheriff's office contact details for a county
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyContact {
    /// Display name, e.g. "Jefferson County"
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheriff_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheriff_website: Option<String>,
}

impl CountyContact {
    pub fn new(name: impl Into<String>, phone: &str, website: &str) -> Self {
        Self {
            name: name.into(),
            sheriff_phone: Some(phone.to_string()),
            sheriff_website: Some(website.to_string()),
        }
    }

    /// A county we know the name of but have no contact data for
    pub fn unlisted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheriff_phone: None,
            sheriff_website: None,
        }
    }

    /// Statewide record used when no county polygon contains the point.
    ///
    /// Points outside every county silently become "Texas" here rather than
    /// an explicit unresolved state.
    pub fn statewide_fallback() -> Self {
        Self::new(STATEWIDE_NAME, STATEWIDE_PHONE, STATEWIDE_WEBSITE)
    }

    pub fn is_statewide_fallback(&self) -> bool {
        self.name == STATEWIDE_NAME
    }
}

pub const STATEWIDE_NAME: &str = "Texas";
pub const STATEWIDE_PHONE: &str = "(512) 463-2000";
pub const STATEWIDE_WEBSITE: &str = "https://www.dps.texas.gov";

/// Police department contact details for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityContact {
    pub name: String,

    /// Owning county by name (a label, not a reference into the directory)
    pub county: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub police_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub police_website: Option<String>,
}

impl CityContact {
    pub fn new(name: &str, county: &str, phone: &str, website: &str) -> Self {
        Self {
            name: name.to_string(),
            county: county.to_string(),
            police_phone: Some(phone.to_string()),
            police_website: Some(website.to_string()),
        }
    }
}

/// Kind of agency holding jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgencyKind {
    #[serde(rename = "Police Department")]
    PoliceDepartment,
    #[serde(rename = "Sheriff's Office")]
    SheriffsOffice,
}

impl AgencyKind {
    pub fn label(&self) -> &'static str {
        match self {
            AgencyKind::PoliceDepartment => "Police Department",
            AgencyKind::SheriffsOffice => "Sheriff's Office",
        }
    }
}

impl std::fmt::Display for AgencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The agency to contact for a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyInfo {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AgencyKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl AgencyInfo {
    pub fn police(city: &CityContact) -> Self {
        Self {
            name: format!("{} {}", city.name, AgencyKind::PoliceDepartment),
            kind: AgencyKind::PoliceDepartment,
            phone: city.police_phone.clone(),
            website: city.police_website.clone(),
        }
    }

    pub fn sheriff(county: &CountyContact) -> Self {
        Self {
            name: format!("{} {}", county.name, AgencyKind::SheriffsOffice),
            kind: AgencyKind::SheriffsOffice,
            phone: county.sheriff_phone.clone(),
            website: county.sheriff_website.clone(),
        }
    }
}
