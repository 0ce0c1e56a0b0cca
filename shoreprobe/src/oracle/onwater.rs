//! Water/land classification via the onwater.io results endpoint.
//!
//! # Wire format
//!
//! Request: `POST {endpoint}?access_token={token}` (token URL-encoded) with a JSON array of
//! `"lat, lng"` strings.
//!
//! Response: a JSON array of objects carrying `lat`, `lon` and `water`.
//! Entries where `water` is `false` are land. Entries missing any of the
//! three fields are ignored.
//!
//! The service bills per submitted coordinate, so callers batch their
//! candidates into a single request.

use serde_json::Value;

use super::http::HttpClient;
use super::types::{ClassificationEntry, OracleError, WaterOracle};
use crate::geo::Coordinate;

/// Default classification endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.onwater.io/api/v1/results";

/// Batched water/land classifier backed by an HTTP endpoint.
///
/// # Example
///
/// ```no_run
/// use shoreprobe::oracle::{OnWaterOracle, ReqwestClient, WaterOracle};
/// use shoreprobe::geo::Coordinate;
///
/// let client = ReqwestClient::new().unwrap();
/// let oracle = OnWaterOracle::new(client, "YOUR_TOKEN".to_string());
/// let land = oracle.classify(&[Coordinate::new(54.3241, 10.1230)]);
/// ```
pub struct OnWaterOracle<C: HttpClient> {
    http_client: C,
    endpoint: String,
    access_token: String,
}

impl<C: HttpClient> OnWaterOracle<C> {
    /// Creates an oracle against the default endpoint.
    pub fn new(http_client: C, access_token: String) -> Self {
        Self::with_endpoint(http_client, DEFAULT_ENDPOINT.to_string(), access_token)
    }

    /// Creates an oracle against a custom endpoint.
    pub fn with_endpoint(http_client: C, endpoint: String, access_token: String) -> Self {
        Self {
            http_client,
            endpoint,
            access_token,
        }
    }

    fn build_url(&self) -> Result<String, OracleError> {
        let params = [("access_token", self.access_token.as_str())];
        reqwest::Url::parse_with_params(&self.endpoint, &params)
            .map(String::from)
            .map_err(|e| OracleError::Http(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }

    fn build_body(points: &[Coordinate]) -> Result<String, OracleError> {
        let queries: Vec<String> = points.iter().map(Coordinate::to_query_string).collect();
        serde_json::to_string(&queries).map_err(|e| OracleError::Parse(e.to_string()))
    }

    fn parse_response(body: &[u8]) -> Result<Vec<Coordinate>, OracleError> {
        let entries: Vec<Value> =
            serde_json::from_slice(body).map_err(|e| OracleError::Parse(e.to_string()))?;

        let land = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<ClassificationEntry>(entry).ok())
            .filter_map(|entry| entry.land_point())
            .collect();

        Ok(land)
    }
}

impl<C: HttpClient> WaterOracle for OnWaterOracle<C> {
    fn try_classify(&self, points: &[Coordinate]) -> Result<Vec<Coordinate>, OracleError> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        let body = Self::build_body(points)?;
        let response = self.http_client.post(&self.build_url()?, body)?;
        let land = Self::parse_response(&response)?;

        tracing::trace!(
            submitted = points.len(),
            land = land.len(),
            "Classification response parsed"
        );

        Ok(land)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MockHttpClient;

    fn oracle(body: &str) -> OnWaterOracle<MockHttpClient> {
        OnWaterOracle::new(MockHttpClient::responding(body), "token123".to_string())
    }

    fn candidates() -> Vec<Coordinate> {
        vec![
            Coordinate::new(54.323525, 10.1228),
            Coordinate::new(54.323435, 10.1228),
            Coordinate::new(54.323615, 10.1228),
        ]
    }

    #[test]
    fn test_request_url_and_body() {
        let oracle = oracle("[]");
        oracle.try_classify(&candidates()).unwrap();

        let requests = oracle.http_client.requests.lock();
        assert_eq!(requests.len(), 1, "one batched request per round");
        assert_eq!(
            requests[0].0,
            "https://api.onwater.io/api/v1/results?access_token=token123"
        );
        assert_eq!(
            requests[0].1,
            r#"["54.323525, 10.1228","54.323435, 10.1228","54.323615, 10.1228"]"#
        );
    }

    #[test]
    fn test_custom_endpoint() {
        let oracle = OnWaterOracle::with_endpoint(
            MockHttpClient::responding("[]"),
            "http://localhost:9000/results".to_string(),
            "t".to_string(),
        );
        assert_eq!(
            oracle.build_url().unwrap(),
            "http://localhost:9000/results?access_token=t"
        );
    }

    #[test]
    fn test_access_token_is_url_encoded() {
        let oracle = OnWaterOracle::new(
            MockHttpClient::responding("[]"),
            "ab&c=d#e+f".to_string(),
        );
        oracle.try_classify(&candidates()).unwrap();

        let requests = oracle.http_client.requests.lock();
        let url = reqwest::Url::parse(&requests[0].0).unwrap();
        let tokens: Vec<String> = url
            .query_pairs()
            .filter(|(key, _)| key == "access_token")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(tokens, vec!["ab&c=d#e+f".to_string()]);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_invalid_endpoint_is_an_error() {
        let oracle = OnWaterOracle::with_endpoint(
            MockHttpClient::responding("[]"),
            "not a url".to_string(),
            "t".to_string(),
        );
        assert!(matches!(
            oracle.try_classify(&candidates()),
            Err(OracleError::Http(_))
        ));
        assert!(oracle.http_client.requests.lock().is_empty());
    }

    #[test]
    fn test_land_entries_are_returned() {
        let oracle = oracle(
            r#"[
                {"query": "54.323525, 10.1228", "lat": 54.323525, "lon": 10.1228, "water": false},
                {"query": "54.323435, 10.1228", "lat": 54.323435, "lon": 10.1228, "water": true},
                {"query": "54.323615, 10.1228", "lat": 54.323615, "lon": 10.1228, "water": false}
            ]"#,
        );

        let land = oracle.try_classify(&candidates()).unwrap();
        assert_eq!(
            land,
            vec![
                Coordinate::new(54.323525, 10.1228),
                Coordinate::new(54.323615, 10.1228),
            ]
        );
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let oracle = oracle(
            r#"[
                {"lat": 54.323525, "lon": 10.1228},
                {"lat": 54.323435, "water": false},
                "not an object",
                {"lat": "bad", "lon": 10.1228, "water": false},
                {"lat": 54.323615, "lon": 10.1228, "water": false}
            ]"#,
        );

        let land = oracle.try_classify(&candidates()).unwrap();
        assert_eq!(land, vec![Coordinate::new(54.323615, 10.1228)]);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let oracle = oracle(r#"{"error": "rate limited"}"#);
        assert!(matches!(
            oracle.try_classify(&candidates()),
            Err(OracleError::Parse(_))
        ));
        assert!(oracle.classify(&candidates()).is_empty());
    }

    #[test]
    fn test_timeout_degrades_to_empty() {
        let oracle = OnWaterOracle::new(
            MockHttpClient::new(Err(OracleError::Timeout)),
            "token".to_string(),
        );
        assert_eq!(
            oracle.try_classify(&candidates()),
            Err(OracleError::Timeout)
        );
        assert!(oracle.classify(&candidates()).is_empty());
    }

    #[test]
    fn test_empty_batch_skips_request() {
        let oracle = oracle("[]");
        assert!(oracle.try_classify(&[]).unwrap().is_empty());
        assert!(oracle.http_client.requests.lock().is_empty());
    }
}
