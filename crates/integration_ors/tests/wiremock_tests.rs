//! Integration tests for the OpenRouteService client (wiremock-based)

use domain::{Geometry, RangeKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_ors::{
    DirectionsRequest, IsochronesRequest, OpenRouteServiceClient, OrsClient, OrsConfig, OrsError,
};

fn config_for_mock(base_url: &str) -> OrsConfig {
    OrsConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    }
}

fn geocode_json() -> serde_json::Value {
    json!({
        "geocoding": {"version": "0.2", "query": {"text": "Pune"}},
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [73.8567, 18.5204]},
                "properties": {"label": "Pune, MH, India", "layer": "locality"}
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [74.0, 18.0]},
                "properties": {"label": "Pune District, MH, India", "layer": "county"}
            }
        ],
        "bbox": [73.0, 18.0, 74.0, 19.0]
    })
}

fn directions_json() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "bbox": [72.8777, 18.5204, 73.8567, 19.076],
            "type": "Feature",
            "properties": {
                "segments": [{"distance": 148512.3, "duration": 10235.9, "steps": []}],
                "summary": {"distance": 148512.3, "duration": 10235.9},
                "way_points": [0, 2]
            },
            "geometry": {
                "coordinates": [[73.8567, 18.5204], [73.4, 18.75], [72.8777, 19.076]],
                "type": "LineString"
            }
        }],
        "metadata": {"attribution": "openrouteservice.org | OpenStreetMap contributors"}
    })
}

fn isochrones_json() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "group_index": 0,
                "value": 600.0,
                "center": [73.8567, 18.5204],
                "area": 42.5
            },
            "geometry": {
                "coordinates": [[[73.80, 18.50], [73.90, 18.50], [73.90, 18.60], [73.80, 18.50]]],
                "type": "Polygon"
            }
        }],
        "bbox": [73.80, 18.50, 73.90, 18.60]
    })
}

#[tokio::test]
async fn test_geocode_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("text", "Pune"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.geocode_search("Pune").await.unwrap();

    assert_eq!(result.features.len(), 2);
    assert_eq!(
        result.features[0].geometry,
        Geometry::Point {
            coordinates: [73.8567, 18.5204]
        }
    );
}

#[tokio::test]
async fn test_geocode_search_no_features() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "FeatureCollection", "features": []})),
        )
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.geocode_search("Atlantis").await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_geocode_reverse_sends_point() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/reverse"))
        .and(query_param("point.lat", "18.5204"))
        .and(query_param("point.lon", "73.8567"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.geocode_reverse(18.5204, 73.8567).await.unwrap();

    assert_eq!(
        result.features[0].properties.label.as_deref(),
        Some("Pune, MH, India")
    );
}

#[tokio::test]
async fn test_directions_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .and(header("authorization", "test-key"))
        .and(body_json(json!({
            "coordinates": [[73.8567, 18.5204], [72.8777, 19.076]],
            "radiuses": [1000, 1000]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = DirectionsRequest::new([73.8567, 18.5204], [72.8777, 19.076]);
    let result = client.directions("driving-car", &request).await.unwrap();

    assert_eq!(result.features.len(), 1);
    let segment = result.features[0].properties.first_segment().unwrap();
    assert!((segment.distance - 148_512.3).abs() < f64::EPSILON);
    assert!((segment.duration - 10_235.9).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_isochrones_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/isochrones/foot-walking"))
        .and(header("authorization", "test-key"))
        .and(body_json(json!({
            "locations": [[73.8567, 18.5204]],
            "range": [600.0],
            "units": "km",
            "range_type": "distance",
            "attributes": ["area"],
            "smoothing": 0.9,
            "options": {"avoid_features": ["highways"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(isochrones_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = IsochronesRequest::new([73.8567, 18.5204], 600.0, RangeKind::Distance);
    let result = client.isochrones("foot-walking", &request).await.unwrap();

    assert_eq!(result.features.len(), 1);
    assert_eq!(result.features[0].properties.area, Some(42.5));
    assert_eq!(result.features[0].geometry.type_name(), "Polygon");
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = DirectionsRequest::new([73.8567, 18.5204], [72.8777, 19.076]);
    let err = client
        .directions("driving-car", &request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrsError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_api_error_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 2010,
                "message": "Could not find routable point within a radius of 1000.0 meters of specified coordinate 0: 0.0000000 0.0000000."
            },
            "info": {"engine": {"version": "8.0.0"}}
        })))
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = DirectionsRequest::new([0.0, 0.0], [72.8777, 19.076]);
    let err = client
        .directions("driving-car", &request)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("HTTP 404: Could not find routable point"));
}

#[tokio::test]
async fn test_server_error_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode_search("Pune").await.unwrap_err();

    assert!(matches!(err, OrsError::RequestFailed(ref m) if m.contains("500")));
}

#[tokio::test]
async fn test_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/isochrones/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OpenRouteServiceClient::new(&config_for_mock(&server.uri())).unwrap();
    let request = IsochronesRequest::new([73.8567, 18.5204], 10.0, RangeKind::Time);
    let err = client.isochrones("driving-car", &request).await.unwrap_err();

    assert!(matches!(err, OrsError::ParseError(_)));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(geocode_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = OrsConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = OpenRouteServiceClient::new(&config).unwrap();
    let err = client.geocode_search("Pune").await.unwrap_err();

    assert!(matches!(err, OrsError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_connection_failure_hides_api_key() {
    let config = OrsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "SECRET-KEY-123".to_string(),
        timeout_secs: 5,
    };
    let client = OpenRouteServiceClient::new(&config).unwrap();

    let err = client.geocode_search("Pune").await.unwrap_err();
    assert!(matches!(err, OrsError::ConnectionFailed(_)));
    let message = err.to_string();
    assert!(!message.contains("SECRET-KEY-123"), "{message}");
    assert!(!message.contains("api_key"), "{message}");

    let err = client.geocode_reverse(18.5204, 73.8567).await.unwrap_err();
    assert!(!err.to_string().contains("SECRET-KEY-123"));
}
