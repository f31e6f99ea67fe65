//! HTTP client for the Carbon Intensity API.

use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    endpoint::Operation,
    path::{RenderedRequest, DEFAULT_HEADERS},
    Error,
};

/// HTTP client for the Carbon Intensity API.
///
/// Wraps a single `reqwest::Client`, so clones share one connection pool.
/// Calls are independent: dropping an in-flight future cancels that request
/// only. Nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.carbonintensity.org.uk`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate validation is disabled; do not use in production");
        }
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Encoding(format!("invalid URL {}{}: {}", self.base_api_url, path, e))
        })
    }

    /// Renders `operation` with `params` and executes it.
    pub async fn call(&self, operation: Operation, params: &[&str]) -> Result<Value, Error> {
        let request = RenderedRequest::new(operation, params).map_err(|e| {
            tracing::error!("Failed to render {}: {}", operation, e);
            e
        })?;
        self.execute(&request).await
    }

    /// Sends one rendered request and classifies the outcome.
    ///
    /// Only `200 OK` counts as success; its body must be JSON. Redirects are
    /// not followed, so a 3xx comes back as [`Error::Http`].
    pub async fn execute(&self, request: &RenderedRequest) -> Result<Value, Error> {
        let url = self.get_url(&request.path)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.to_reqwest(), url);
        for (name, value) in DEFAULT_HEADERS {
            builder = builder.header(name, value);
        }
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(describe_transport_error(&e))
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            // The status is the outcome; a body that fails to arrive only loses the snippet.
            let body = resp.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error body for status {}: {}", status, e);
                String::new()
            });
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Http {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(describe_transport_error(&e))
        })?;

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    // -- Intensity --

    /// `GET /intensity`
    pub async fn get_current_intensity(&self) -> Result<Value, Error> {
        self.call(Operation::CurrentIntensity, &[]).await
    }

    /// `GET /intensity/date`
    pub async fn get_todays_intensity(&self) -> Result<Value, Error> {
        self.call(Operation::TodaysIntensity, &[]).await
    }

    /// `GET /intensity/date/{date}`
    pub async fn get_intensity_for_date(&self, date: &str) -> Result<Value, Error> {
        self.call(Operation::IntensityForDate, &[date]).await
    }

    /// `GET /intensity/date/{date}/{period}`
    pub async fn get_intensity_for_date_period(
        &self,
        date: &str,
        period: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::IntensityForDatePeriod, &[date, period])
            .await
    }

    /// `GET /intensity/factors`
    pub async fn get_intensity_factors(&self) -> Result<Value, Error> {
        self.call(Operation::IntensityFactors, &[]).await
    }

    /// `GET /intensity/{from}`
    pub async fn get_intensity_for_timepoint(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::IntensityAt, &[from]).await
    }

    /// `GET /intensity/{from}/fw24h`
    pub async fn get_intensity_24h_forward(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Intensity24hForward, &[from]).await
    }

    /// `GET /intensity/{from}/fw48h`
    pub async fn get_intensity_48h_forward(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Intensity48hForward, &[from]).await
    }

    /// `GET /intensity/{from}/pt24h`
    pub async fn get_intensity_24h_past(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Intensity24hPast, &[from]).await
    }

    /// `GET /intensity/{from}/{to}`
    pub async fn get_intensity_between(&self, from: &str, to: &str) -> Result<Value, Error> {
        self.call(Operation::IntensityBetween, &[from, to]).await
    }

    /// `GET /intensity/stats/{from}/{to}`
    pub async fn get_intensity_stats(&self, from: &str, to: &str) -> Result<Value, Error> {
        self.call(Operation::IntensityStats, &[from, to]).await
    }

    /// `GET /intensity/stats/{from}/{to}/{block}`, with `block` in hours.
    pub async fn get_intensity_stats_block(
        &self,
        from: &str,
        to: &str,
        block: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::IntensityStatsBlock, &[from, to, block])
            .await
    }

    // -- Generation --

    /// `GET /generation`
    pub async fn get_current_generation(&self) -> Result<Value, Error> {
        self.call(Operation::CurrentGeneration, &[]).await
    }

    /// `GET /generation/{from}/pt24h`
    pub async fn get_generation_24h_past(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Generation24hPast, &[from]).await
    }

    /// `GET /generation/{from}/{to}`
    pub async fn get_generation_between(&self, from: &str, to: &str) -> Result<Value, Error> {
        self.call(Operation::GenerationBetween, &[from, to]).await
    }

    // -- Regional --

    /// `GET /regional`
    pub async fn get_regional_current(&self) -> Result<Value, Error> {
        self.call(Operation::RegionalCurrent, &[]).await
    }

    /// `GET /regional/england`
    pub async fn get_regional_england(&self) -> Result<Value, Error> {
        self.call(Operation::RegionalEngland, &[]).await
    }

    /// `GET /regional/scotland`
    pub async fn get_regional_scotland(&self) -> Result<Value, Error> {
        self.call(Operation::RegionalScotland, &[]).await
    }

    /// `GET /regional/wales`
    pub async fn get_regional_wales(&self) -> Result<Value, Error> {
        self.call(Operation::RegionalWales, &[]).await
    }

    /// `GET /regional/postcode/{postcode}`
    pub async fn get_regional_by_postcode(&self, postcode: &str) -> Result<Value, Error> {
        self.call(Operation::RegionalPostcode, &[postcode]).await
    }

    /// `GET /regional/regionid/{regionid}`
    pub async fn get_regional_by_regionid(&self, regionid: &str) -> Result<Value, Error> {
        self.call(Operation::RegionalRegionId, &[regionid]).await
    }

    /// `GET /regional/intensity/{from}/fw24h`
    pub async fn get_regional_24h_forward(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Regional24hForward, &[from]).await
    }

    /// `GET /regional/intensity/{from}/fw24h/postcode/{postcode}`
    pub async fn get_regional_24h_forward_postcode(
        &self,
        from: &str,
        postcode: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional24hForwardPostcode, &[from, postcode])
            .await
    }

    /// `GET /regional/intensity/{from}/fw24h/regionid/{regionid}`
    pub async fn get_regional_24h_forward_regionid(
        &self,
        from: &str,
        regionid: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional24hForwardRegionId, &[from, regionid])
            .await
    }

    /// `GET /regional/intensity/{from}/fw48h`
    pub async fn get_regional_48h_forward(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Regional48hForward, &[from]).await
    }

    /// `GET /regional/intensity/{from}/fw48h/postcode/{postcode}`
    pub async fn get_regional_48h_forward_postcode(
        &self,
        from: &str,
        postcode: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional48hForwardPostcode, &[from, postcode])
            .await
    }

    /// `GET /regional/intensity/{from}/fw48h/regionid/{regionid}`
    pub async fn get_regional_48h_forward_regionid(
        &self,
        from: &str,
        regionid: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional48hForwardRegionId, &[from, regionid])
            .await
    }

    /// `GET /regional/intensity/{from}/pt24h`
    pub async fn get_regional_24h_past(&self, from: &str) -> Result<Value, Error> {
        self.call(Operation::Regional24hPast, &[from]).await
    }

    /// `GET /regional/intensity/{from}/pt24h/postcode/{postcode}`
    pub async fn get_regional_24h_past_postcode(
        &self,
        from: &str,
        postcode: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional24hPastPostcode, &[from, postcode])
            .await
    }

    /// `GET /regional/intensity/{from}/pt24h/regionid/{regionid}`
    pub async fn get_regional_24h_past_regionid(
        &self,
        from: &str,
        regionid: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::Regional24hPastRegionId, &[from, regionid])
            .await
    }

    /// `GET /regional/intensity/{from}/{to}`
    pub async fn get_regional_between(&self, from: &str, to: &str) -> Result<Value, Error> {
        self.call(Operation::RegionalBetween, &[from, to]).await
    }

    /// `GET /regional/intensity/{from}/{to}/postcode/{postcode}`
    pub async fn get_regional_between_postcode(
        &self,
        from: &str,
        to: &str,
        postcode: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::RegionalBetweenPostcode, &[from, to, postcode])
            .await
    }

    /// `GET /regional/intensity/{from}/{to}/regionid/{regionid}`
    pub async fn get_regional_between_regionid(
        &self,
        from: &str,
        to: &str,
        regionid: &str,
    ) -> Result<Value, Error> {
        self.call(Operation::RegionalBetweenRegionId, &[from, to, regionid])
            .await
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = Client::with_base_url("http://localhost:1234/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
        let url = client.get_url("/intensity").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/intensity");
    }

    #[test]
    fn encoded_path_survives_url_parsing() {
        let client = Client::with_base_url("http://localhost:1234").unwrap();
        let url = client
            .get_url("/intensity/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z")
            .unwrap();
        assert_eq!(url.path(), "/intensity/2023-01-01T00%3A00Z/2023-01-02T00%3A00Z");
    }

    #[test]
    fn bad_base_url_is_reported_as_encoding_error() {
        let client = Client::with_base_url("not a url").unwrap();
        let err = client.get_url("/intensity").unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() < body.len());
    }

    #[test]
    fn insecure_client_still_builds() {
        let config = ClientConfig::default().danger_accept_invalid_certs(true);
        assert!(Client::with_config(config).is_ok());
    }
}
