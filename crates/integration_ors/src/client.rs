//! OpenRouteService HTTP client
//!
//! Geocoding endpoints take the API key as the `api_key` query parameter,
//! directions and isochrones take it in the `Authorization` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::models::{
    DirectionsRequest, DirectionsResponse, GeocodeResponse, IsochronesRequest, IsochronesResponse,
    RawErrorBody,
};

/// Trait for OpenRouteService clients
#[async_trait]
pub trait OrsClient: Send + Sync {
    /// Search places matching free text, best match first
    async fn geocode_search(&self, text: &str) -> Result<GeocodeResponse, OrsError>;

    /// Find places near a point, nearest first
    async fn geocode_reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodeResponse, OrsError>;

    /// Compute routes for a travel profile
    async fn directions(
        &self,
        profile: &str,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, OrsError>;

    /// Compute reachability polygons for a travel profile
    async fn isochrones(
        &self,
        profile: &str,
        request: &IsochronesRequest,
    ) -> Result<IsochronesResponse, OrsError>;
}

/// Client for the hosted or a self-hosted OpenRouteService instance
#[derive(Debug)]
pub struct OpenRouteServiceClient {
    client: Client,
    config: OrsConfig,
}

impl OpenRouteServiceClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OrsConfig) -> Result<Self, OrsError> {
        config.validate().map_err(OrsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("route-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OrsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, request: RequestBuilder) -> Result<String, OrsError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                OrsError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                OrsError::ConnectionFailed(describe(e))
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OrsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| OrsError::ParseError(describe(e)))
    }

    /// Map a non-2xx response to an error, preferring the body's message
    fn status_error(status: StatusCode, body: &str) -> OrsError {
        serde_json::from_str::<RawErrorBody>(body)
            .ok()
            .and_then(RawErrorBody::into_message)
            .map_or_else(
                || OrsError::RequestFailed(format!("HTTP {status}")),
                |message| OrsError::Api {
                    status: status.as_u16(),
                    message,
                },
            )
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, OrsError> {
        serde_json::from_str(body).map_err(|e| OrsError::ParseError(e.to_string()))
    }
}

/// Describe a transport error with its causes but without the request URL,
/// whose query string carries the API key
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl OrsClient for OpenRouteServiceClient {
    #[instrument(skip(self))]
    async fn geocode_search(&self, text: &str) -> Result<GeocodeResponse, OrsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(OrsError::NotFound(
                "Search text must not be empty".to_string(),
            ));
        }

        let url = self.url("/geocode/search");
        let params = [("api_key", self.config.api_key.as_str()), ("text", text)];

        debug!(%text, "Geocoding place");

        let body = self.send(self.client.get(&url).query(&params)).await?;
        let result: GeocodeResponse = Self::parse(&body)?;

        if result.is_empty() {
            warn!(%text, "No geocoding match");
        }

        debug!(count = result.features.len(), "Geocoding features found");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn geocode_reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodeResponse, OrsError> {
        let url = self.url("/geocode/reverse");
        let params = [
            ("api_key", self.config.api_key.clone()),
            ("point.lon", longitude.to_string()),
            ("point.lat", latitude.to_string()),
        ];

        debug!(%latitude, %longitude, "Reverse geocoding");

        let body = self.send(self.client.get(&url).query(&params)).await?;
        let result: GeocodeResponse = Self::parse(&body)?;

        if result.is_empty() {
            warn!(%latitude, %longitude, "No place near point");
        }

        Ok(result)
    }

    #[instrument(skip(self, request), fields(waypoints = request.coordinates.len()))]
    async fn directions(
        &self,
        profile: &str,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, OrsError> {
        let url = self.url(&format!("/v2/directions/{profile}/geojson"));

        debug!(?url, "Requesting directions");

        let body = self
            .send(
                self.client
                    .post(&url)
                    .header(AUTHORIZATION, &self.config.api_key)
                    .json(request),
            )
            .await?;
        let result: DirectionsResponse = Self::parse(&body)?;

        if result.is_empty() {
            warn!(%profile, "No routes found");
        }

        debug!(count = result.features.len(), "Routes found");
        Ok(result)
    }

    #[instrument(skip(self, request), fields(range = ?request.range, range_type = %request.range_type))]
    async fn isochrones(
        &self,
        profile: &str,
        request: &IsochronesRequest,
    ) -> Result<IsochronesResponse, OrsError> {
        let url = self.url(&format!("/v2/isochrones/{profile}"));

        debug!(?url, "Requesting isochrones");

        let body = self
            .send(
                self.client
                    .post(&url)
                    .header(AUTHORIZATION, &self.config.api_key)
                    .json(request),
            )
            .await?;
        let result: IsochronesResponse = Self::parse(&body)?;

        if result.is_empty() {
            warn!(%profile, "No isochrones found");
        }

        debug!(count = result.features.len(), "Isochrones found");
        Ok(result)
    }
}
