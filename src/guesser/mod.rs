//! Contact guessing for cities missing from the directory.
//!
//! Tiers, first success wins:
//! 1. exact directory match
//! 2. probe a fixed list of likely municipal domains
//! 3. probe police sub-pages on the site that answered
//! 4. optionally scrape a phone number from that page
//! 5. a deterministic placeholder (search hint + best-guess URL)
//!
//! Tiers 2-5 are memoized per place name. See [`probe`] for why a "found"
//! website may not actually exist.

mod cache;
mod patterns;
mod phone;
mod probe;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::directory::{city_key, Directory};
use crate::models::CityContact;

pub use cache::GuessCache;
pub use patterns::{
    candidate_sites, fallback_website, police_page_candidates, search_suggestion, slug,
    OFFICIAL_SITE_PATTERNS, POLICE_PATHS,
};
pub use phone::PhoneExtractor;
pub use probe::{HttpProbe, SiteProbe};

/// How a guess was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    Directory,
    OfficialWebsite,
    CommonPatterns,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Exact,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactGuess {
    pub contact: CityContact,
    pub method: SearchMethod,
    pub confidence: Confidence,
}

pub struct ContactGuesser {
    directory: Arc<Directory>,
    probe: Arc<dyn SiteProbe>,
    cache: GuessCache,
    phone: Option<PhoneExtractor>,
}

impl ContactGuesser {
    pub fn new(
        directory: Arc<Directory>,
        probe: Arc<dyn SiteProbe>,
        cache_capacity: usize,
    ) -> Self {
        Self {
            directory,
            probe,
            cache: GuessCache::new(cache_capacity),
            phone: None,
        }
    }

    /// Fetch guessed police pages and look for a phone number in them
    pub fn with_phone_scraping(mut self, enabled: bool) -> Self {
        self.phone = enabled.then(PhoneExtractor::new);
        self
    }

    pub fn cache(&self) -> &GuessCache {
        &self.cache
    }

    /// Contact details for `place`. Never fails: the last tier is a
    /// placeholder with a search hint and a constructed website.
    pub async fn guess_contact(&self, place: &str, county: &str) -> ContactGuess {
        if let Some(city) = self.directory.city_by_name(place) {
            debug!("Found {} in directory", city.name);
            return ContactGuess {
                contact: city.clone(),
                method: SearchMethod::Directory,
                confidence: Confidence::Exact,
            };
        }

        let key = city_key(place);
        if let Some(cached) = self.cache.get(&key) {
            debug!("Using cached guess for {}", place);
            return cached;
        }

        let guess = self.search(place, county).await;
        self.cache.insert(key, guess.clone());
        guess
    }

    async fn search(&self, place: &str, county: &str) -> ContactGuess {
        info!("Searching for {} police department contact info", place);
        let slug = slug(place);

        let Some((index, site)) = self.find_site(&slug).await else {
            let website = fallback_website(&slug);
            info!("No site found for {}, falling back to {}", place, website);
            return ContactGuess {
                contact: CityContact {
                    name: place.to_string(),
                    county: county.to_string(),
                    police_phone: Some(search_suggestion(place)),
                    police_website: Some(website),
                },
                method: SearchMethod::Fallback,
                confidence: Confidence::Low,
            };
        };

        let (method, confidence) = if index < OFFICIAL_SITE_PATTERNS {
            (SearchMethod::OfficialWebsite, Confidence::High)
        } else {
            (SearchMethod::CommonPatterns, Confidence::Medium)
        };

        let website = self.find_police_page(&site).await.unwrap_or(site);
        let phone = match &self.phone {
            Some(extractor) => self
                .probe
                .fetch_text(&website)
                .await
                .and_then(|body| extractor.extract(&body)),
            None => None,
        };

        info!(
            "Guessed {} police contact: website={}, phone={:?}",
            place, website, phone
        );

        ContactGuess {
            contact: CityContact {
                name: place.to_string(),
                county: county.to_string(),
                police_phone: phone,
                police_website: Some(website),
            },
            method,
            confidence,
        }
    }

    /// First candidate site that answers, with its position in the list
    async fn find_site(&self, slug: &str) -> Option<(usize, String)> {
        if slug.is_empty() {
            return None;
        }

        for (index, url) in candidate_sites(slug).into_iter().enumerate() {
            if self.probe.exists(&url).await {
                debug!("Found potential city website: {}", url);
                return Some((index, url));
            }
        }
        None
    }

    async fn find_police_page(&self, site: &str) -> Option<String> {
        for url in police_page_candidates(site) {
            if self.probe.exists(&url).await {
                debug!("Found potential police page: {}", url);
                return Some(url);
            }
        }
        None
    }
}
