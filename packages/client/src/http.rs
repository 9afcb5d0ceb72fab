//! `reqwest`-backed implementation of [`StatsService`].

use std::time::Duration;

use access_map_trends_models::{TrendsPayload, Viewport};
use async_trait::async_trait;
use serde_json::Value;

use crate::{CenterLocation, ClientError, StatsService, retry};

/// Per-request timeout.
///
/// The upstream service has no SLA; without a timeout a hung request would
/// leave the display stuck on "loading" indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`StatsService`].
pub struct HttpStatsService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatsService {
    /// Creates a client for the statistics service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[async_trait]
impl StatsService for HttpStatsService {
    async fn stats_in_view(
        &self,
        viewport: Viewport,
        zoom: f64,
        value_column: &str,
    ) -> Result<TrendsPayload, ClientError> {
        let url = self.url("stats_in_view");
        let value = retry::send_json(|| {
            self.client
                .get(&url)
                .query(&viewport_params(viewport, zoom))
                .query(&[("value_column", value_column)])
        })
        .await?;
        payload_from_value(value)
    }

    async fn reverse_geocode(&self, viewport: Viewport, zoom: f64) -> Result<String, ClientError> {
        let url = self.url("reverse_geocode");
        let value = retry::send_json(|| {
            self.client
                .get(&url)
                .query(&viewport_params(viewport, zoom))
        })
        .await?;
        response_field(&value)
    }

    async fn locate_center(
        &self,
        lat: f64,
        lon: f64,
        zoom: f64,
    ) -> Result<CenterLocation, ClientError> {
        let url = self.url("get_state");
        let value = retry::send_json(|| {
            self.client
                .get(&url)
                .query(&[("lat", lat), ("lon", lon), ("zoom", zoom)])
        })
        .await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Viewport query parameters in the upstream's screen-edge naming.
fn viewport_params(viewport: Viewport, zoom: f64) -> [(&'static str, f64); 5] {
    [
        ("screenLeft", viewport.left),
        ("screenBottom", viewport.bottom),
        ("screenRight", viewport.right),
        ("screenTop", viewport.top),
        ("zoom", zoom),
    ]
}

/// Decodes a trends payload from the raw response JSON.
fn payload_from_value(value: Value) -> Result<TrendsPayload, ClientError> {
    Ok(serde_json::from_value(value)?)
}

/// Extracts the `response` string from a reverse-geocode reply.
fn response_field(value: &Value) -> Result<String, ClientError> {
    value
        .get("response")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or(ClientError::MissingField { field: "response" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use access_map_trends_models::RegionKey;
    use serde_json::json;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let service = HttpStatsService::new("http://localhost:5000/").unwrap();
        assert_eq!(
            service.url("stats_in_view"),
            "http://localhost:5000/stats_in_view"
        );
    }

    #[test]
    fn decodes_a_full_payload() {
        let payload = payload_from_value(json!({
            "trends": {
                "NW": { "high": ["NW", "N", "W"], "low": [] },
                "horizontal": { "high": [], "low": ["W", "C", "E"] }
            },
            "min": { "text": "Loving County", "value": 0.1, "section": "SE" },
            "max": { "text": "New York County", "value": 74781.6 },
            "average": 262.9,
            "geocode": "Texas and surrounding states"
        }))
        .unwrap();

        assert!(payload.trends[&RegionKey::Nw].is_high());
        assert!(payload.trends[&RegionKey::Horizontal].is_low());
        assert_eq!(payload.min.unwrap().section, Some(RegionKey::Se));
        assert_eq!(payload.max.unwrap().section, None);
        assert_eq!(payload.geocode.as_deref(), Some("Texas and surrounding states"));
    }

    #[test]
    fn decodes_a_partial_payload() {
        let payload = payload_from_value(json!({
            "trends": {},
            "average": 0.04
        }))
        .unwrap();
        assert!(payload.trends.is_empty());
        assert!(payload.min.is_none());
        assert!(payload.max.is_none());
    }

    #[test]
    fn extracts_boundary_response_field() {
        let value = json!({ "response": "King County, Washington" });
        assert_eq!(response_field(&value).unwrap(), "King County, Washington");
    }

    #[test]
    fn missing_boundary_response_is_an_error() {
        let value = json!({ "status": "ok" });
        assert!(matches!(
            response_field(&value),
            Err(ClientError::MissingField { field: "response" })
        ));
    }
}
