use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::OverpassConfig;

const USER_AGENT: &str = "canopydeck/0.1.0";

/// Half-width of the query window around the selected center, in meters
const QUERY_RADIUS_M: u32 = 5000;

/// Raw Overpass API response
#[derive(Debug, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single element from Overpass (node, way or relation)
#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub geometry: Option<Vec<GeomPoint>>,
}

/// One vertex of a way/relation outline, present with `out geom`
#[derive(Debug, Deserialize)]
pub struct GeomPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Failure of a single best-effort Overpass call
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the Overpass API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Overpass API returned status {0}")]
    Status(u16),
    #[error("failed to decode Overpass JSON response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Calculate bounding box from center point and radius
fn calculate_bbox(center: (f64, f64), radius_m: u32) -> (f64, f64, f64, f64) {
    let (lat, lon) = center;
    let radius_km = radius_m as f64 / 1000.0;

    // Approximate degrees per km
    // 1 degree latitude ≈ 111 km
    // 1 degree longitude ≈ 111 km * cos(lat)
    let lat_delta = radius_km / 111.0;
    let lon_delta = radius_km / (111.0 * lat.to_radians().cos());

    let south = lat - lat_delta;
    let north = lat + lat_delta;
    let west = lon - lon_delta;
    let east = lon + lon_delta;

    (south, west, north, east)
}

fn tree_query(bbox: (f64, f64, f64, f64)) -> String {
    let (south, west, north, east) = bbox;
    format!(
        r#"[out:json][timeout:25];
node["natural"="tree"]({south},{west},{north},{east});
out body;"#
    )
}

fn forest_query(bbox: (f64, f64, f64, f64)) -> String {
    let (south, west, north, east) = bbox;
    format!(
        r#"[out:json][timeout:25];
(
  way["landuse"="forest"]({south},{west},{north},{east});
  relation["landuse"="forest"]({south},{west},{north},{east});
);
out geom;"#
    )
}

/// Fetch tree nodes around a center point
///
/// # Arguments
/// * `center` - (lat, lon) center point
pub fn fetch_trees(
    center: (f64, f64),
    config: &OverpassConfig,
) -> Result<OverpassResponse, FetchError> {
    let query = tree_query(calculate_bbox(center, QUERY_RADIUS_M));
    execute_query(&query, config)
}

/// Fetch forest way/relation outlines around a center point
pub fn fetch_forests(
    center: (f64, f64),
    config: &OverpassConfig,
) -> Result<OverpassResponse, FetchError> {
    let query = forest_query(calculate_bbox(center, QUERY_RADIUS_M));
    execute_query(&query, config)
}

/// Execute a single Overpass query. One best-effort call: no retry, no
/// pagination. The query travels as a `data` URL parameter.
fn execute_query(query: &str, config: &OverpassConfig) -> Result<OverpassResponse, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = client
        .get(&config.url)
        .query(&[("data", query)])
        .send()?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    response.json().map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bbox() {
        // New York default: (40.75, -73.95)
        let (south, west, north, east) = calculate_bbox((40.75, -73.95), 5000);

        // 5km radius should give approximately ±0.045 degrees latitude
        assert!((north - south - 0.09).abs() < 0.01);
        // Longitude spread should be slightly larger due to cos(lat)
        assert!(east - west > north - south);
        assert!(((south + north) / 2.0 - 40.75).abs() < 1e-9);
        assert!(((west + east) / 2.0 - (-73.95)).abs() < 1e-9);
    }

    #[test]
    fn test_queries_carry_feature_filters() {
        let bbox = calculate_bbox((40.75, -73.95), 5000);

        let trees = tree_query(bbox);
        assert!(trees.contains(r#"node["natural"="tree"]"#));
        assert!(trees.contains("out body;"));

        let forests = forest_query(bbox);
        assert!(forests.contains(r#"way["landuse"="forest"]"#));
        assert!(forests.contains(r#"relation["landuse"="forest"]"#));
        assert!(forests.contains("out geom;"));
    }

    #[test]
    fn test_parse_overpass_response() {
        let json = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 40.75, "lon": -73.95},
                {"type": "way", "id": 2, "geometry": [
                    {"lat": 40.75, "lon": -73.95},
                    {"lat": 40.76, "lon": -73.94}
                ], "tags": {"landuse": "forest"}}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.elements.len(), 2);
        assert_eq!(response.elements[0].type_, "node");
        assert_eq!(response.elements[0].lat, Some(40.75));
        assert_eq!(response.elements[1].geometry.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_body_parses_to_no_elements() {
        let response: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(response.elements.is_empty());
    }
}
