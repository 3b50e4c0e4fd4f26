//! HTTP fetch of the indicators snapshot from the agent.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use url::Url;

use crate::error::FetchError;
use crate::types::IndicatorSnapshot;

/// Fixed path of the indicators endpoint, resolved against the base URL.
pub const INDICATORS_PATH: &str = "/api/indicadores";

/// Anything that can produce a fresh snapshot. The poller only talks to this.
pub trait IndicatorSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<IndicatorSnapshot, FetchError>> + Send;
}

pub struct HttpSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = endpoint_url(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub fn endpoint_url(base_url: &str) -> Result<Url, url::ParseError> {
    Url::parse(base_url)?.join(INDICATORS_PATH)
}

impl IndicatorSource for HttpSource {
    async fn fetch(&self) -> Result<IndicatorSnapshot, FetchError> {
        fetch_indicators(&self.client, &self.endpoint).await
    }
}

// Always observe live server state: ask every cache on the way to stay out.
pub async fn fetch_indicators(
    client: &reqwest::Client,
    endpoint: &Url,
) -> Result<IndicatorSnapshot, FetchError> {
    let resp = client
        .get(endpoint.clone())
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(FetchError::transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.bytes().await.map_err(FetchError::transport)?;
    serde_json::from_slice::<IndicatorSnapshot>(&body).map_err(FetchError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_rooted_at_host() {
        let u = endpoint_url("http://127.0.0.1:3000").unwrap();
        assert_eq!(u.as_str(), "http://127.0.0.1:3000/api/indicadores");
        let u = endpoint_url("http://fleet.local:8080/dashboard/motos").unwrap();
        assert_eq!(u.as_str(), "http://fleet.local:8080/api/indicadores");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(HttpSource::new("not a url", Duration::from_secs(1)).is_err());
    }
}
