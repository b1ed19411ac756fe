//! Website existence probes.
//!
//! A probe only tells us that *something* answered at the URL. Any HTTP
//! response counts as existence, including 403/404/5xx and parked-domain
//! pages; only a transport failure (DNS, connect, TLS) counts as absence.
//! Expect false positives: a "found" site is a guess, not a verified one.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

#[async_trait]
pub trait SiteProbe: Send + Sync {
    /// Whether anything answered at `url`
    async fn exists(&self, url: &str) -> bool;

    /// Body of `url`, if it could be fetched
    async fn fetch_text(&self, url: &str) -> Option<String>;
}

/// Probe using HEAD requests over the shared HTTP client
#[derive(Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SiteProbe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                debug!("HEAD {} -> {}", url, response.status());
                true
            }
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }

    async fn fetch_text(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("GET {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("GET {} -> {}", url, response.status());
            return None;
        }

        response.text().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_any_response_counts_as_existing() {
        let app = Router::new()
            .route("/police", get(|| async { "Call (409) 722-4965" }))
            .route("/forbidden", get(|| async { (StatusCode::FORBIDDEN, "nope") }));
        let base = serve(app).await;
        let probe = HttpProbe::new(Client::new());

        assert!(probe.exists(&format!("{}/police", base)).await);
        assert!(probe.exists(&format!("{}/forbidden", base)).await);
        assert!(probe.exists(&format!("{}/missing", base)).await);

        assert_eq!(
            probe.fetch_text(&format!("{}/police", base)).await.as_deref(),
            Some("Call (409) 722-4965")
        );
        assert!(probe.fetch_text(&format!("{}/forbidden", base)).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = HttpProbe::new(Client::new());
        assert!(!probe.exists(&format!("http://{}/", addr)).await);
    }
}
