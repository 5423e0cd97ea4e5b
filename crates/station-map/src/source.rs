//! Station data sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use station_common::{
    FilterBounds, FilterRange, StationMapError, StationMapResult, StationRecord,
};
use tracing::{debug, instrument, warn};

/// Query sent to a station source: the four filter bounds.
///
/// Commute-time bounds travel as whole minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationQuery {
    pub price_min: f64,
    pub price_max: f64,
    pub time_min: i64,
    pub time_max: i64,
}

impl StationQuery {
    pub fn to_query_string(&self) -> String {
        format!(
            "price_min={}&price_max={}&time_min={}&time_max={}",
            self.price_min, self.price_max, self.time_min, self.time_max
        )
    }

    /// The bounds this query filters by.
    pub fn bounds(&self) -> FilterBounds {
        FilterBounds::new(
            FilterRange::new(self.price_min, self.price_max),
            FilterRange::new(self.time_min as f64, self.time_max as f64),
        )
    }
}

impl From<FilterBounds> for StationQuery {
    fn from(bounds: FilterBounds) -> Self {
        Self {
            price_min: bounds.price.min,
            price_max: bounds.price.max,
            time_min: bounds.commute_time.min.trunc() as i64,
            time_max: bounds.commute_time.max.trunc() as i64,
        }
    }
}

/// Anything that can return the stations matching a query.
#[async_trait]
pub trait StationSource: Send + Sync {
    async fn fetch_stations(&self, query: &StationQuery) -> StationMapResult<Vec<StationRecord>>;
}

/// Client for `GET {base_url}/api/stations`.
#[derive(Debug, Clone)]
pub struct HttpStationSource {
    client: Client,
    base_url: String,
}

impl HttpStationSource {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> StationMapResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| StationMapError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stations_url(&self, query: &StationQuery) -> String {
        format!(
            "{}/api/stations?{}",
            self.base_url.trim_end_matches('/'),
            query.to_query_string()
        )
    }
}

#[async_trait]
impl StationSource for HttpStationSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_stations(&self, query: &StationQuery) -> StationMapResult<Vec<StationRecord>> {
        let url = self.stations_url(query);
        debug!(url = %url, "Fetching stations");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StationMapError::Fetch {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Station endpoint returned an error status");
            return Err(StationMapError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| StationMapError::Fetch {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let records = parse_station_body(&body)?;
        debug!(records = records.len(), "Fetched stations");
        Ok(records)
    }
}

/// Decode a station response body.
///
/// An empty body and a JSON `null` both mean "no stations".
pub fn parse_station_body(body: &[u8]) -> StationMapResult<Vec<StationRecord>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let records: Option<Vec<StationRecord>> = serde_json::from_slice(body)?;
    Ok(records.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_default_bounds() {
        let query = StationQuery::from(FilterBounds::default());
        assert_eq!(
            query.to_query_string(),
            "price_min=0&price_max=9999&time_min=0&time_max=9999"
        );
    }

    #[test]
    fn test_query_keeps_price_decimals_and_truncates_time() {
        let bounds = FilterBounds::new(FilterRange::new(5.5, 12.25), FilterRange::new(10.9, 45.2));
        let query = StationQuery::from(bounds);
        assert_eq!(
            query.to_query_string(),
            "price_min=5.5&price_max=12.25&time_min=10&time_max=45"
        );
    }

    #[test]
    fn test_stations_url_trims_trailing_slash() {
        let source = HttpStationSource::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        let url = source.stations_url(&StationQuery::from(FilterBounds::default()));
        assert_eq!(
            url,
            "http://localhost:5000/api/stations?price_min=0&price_max=9999&time_min=0&time_max=9999"
        );
    }

    #[test]
    fn test_parse_empty_bodies() {
        assert!(parse_station_body(b"").unwrap().is_empty());
        assert!(parse_station_body(b"  \n").unwrap().is_empty());
        assert!(parse_station_body(b"null").unwrap().is_empty());
        assert!(parse_station_body(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_station_body(b"<html>oops</html>").unwrap_err();
        assert!(err.is_parse_failure());

        let err = parse_station_body(br#"{"station": "not an array"}"#).unwrap_err();
        assert!(err.is_parse_failure());
    }
}
