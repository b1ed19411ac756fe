//! GIS place resolution.
//!
//! Resolves a coordinate to a city or county name by running a
//! point-in-polygon query against a prioritized list of ArcGIS feature
//! services, reading the name from whichever attribute the provider uses.

mod client;
mod fields;
mod normalize;
mod resolver;

pub use client::{point_query_params, point_query_url, ArcGisClient, FeatureSource, GisFeature};
pub use fields::{
    first_string_field, CITY_COUNTY_HINT_FIELDS, CITY_NAME_FIELDS, COUNTY_NAME_FIELDS,
};
pub use normalize::{normalize_city_name, normalize_county_name};
pub use resolver::{GisResolver, PlaceKind, ResolveOutcome, ResolvedPlace};

#[cfg(test)]
pub(crate) use resolver::tests::ScriptedSource;
