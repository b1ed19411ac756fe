//! Shared outbound HTTP client.

use std::time::Duration;

use reqwest::Client;

use crate::config::GisConfig;

/// Build the client used for feature-service queries and site probes
pub fn build_client(config: &GisConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}
