use crate::api::OverpassResponse;
use crate::domain::{ClimateSample, ForestPolygon, TreeRecord};

/// Shape Overpass elements into tree rows.
///
/// Every element carrying both `lat` and `lon` becomes one row, values
/// unchanged, response order preserved. Everything else is skipped.
pub fn parse_trees(response: &OverpassResponse) -> Vec<TreeRecord> {
    response
        .elements
        .iter()
        .filter_map(|e| {
            let lat = e.lat?;
            let lon = e.lon?;
            Some(TreeRecord::new(lat, lon))
        })
        .collect()
}

/// Shape Overpass elements into forest rings.
///
/// Every element carrying a `geometry` array becomes one ring of
/// (lon, lat) vertices in array order. Elements without geometry are
/// skipped; no further validation happens here.
pub fn parse_forests(response: &OverpassResponse) -> Vec<ForestPolygon> {
    response
        .elements
        .iter()
        .filter_map(|e| {
            let geometry = e.geometry.as_ref()?;
            let ring = geometry.iter().map(|p| [p.lon, p.lat]).collect();
            Some(ForestPolygon::new(ring))
        })
        .collect()
}

/// Extend tree rows with the synthetic temperature/AQI columns
pub fn derive_samples(trees: &[TreeRecord]) -> Vec<ClimateSample> {
    trees
        .iter()
        .enumerate()
        .map(|(index, tree)| ClimateSample::from_record(tree, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Element, GeomPoint};

    fn node(id: u64, lat: f64, lon: f64) -> Element {
        Element {
            type_: "node".to_string(),
            id,
            lat: Some(lat),
            lon: Some(lon),
            geometry: None,
        }
    }

    #[test]
    fn test_parse_trees_preserves_coordinates() {
        let response = OverpassResponse {
            elements: vec![node(1, 40.75, -73.95), node(2, 40.76, -73.94)],
        };

        let trees = parse_trees(&response);
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0], TreeRecord::new(40.75, -73.95));
        assert_eq!(trees[1], TreeRecord::new(40.76, -73.94));
    }

    #[test]
    fn test_parse_trees_skips_partial_elements() {
        let response = OverpassResponse {
            elements: vec![
                Element {
                    type_: "node".to_string(),
                    id: 1,
                    lat: Some(40.75),
                    lon: None,
                    geometry: None,
                },
                node(2, 40.76, -73.94),
            ],
        };

        let trees = parse_trees(&response);
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].latitude, 40.76);
    }

    #[test]
    fn test_parse_forests_requires_geometry() {
        let response = OverpassResponse {
            elements: vec![
                Element {
                    type_: "way".to_string(),
                    id: 10,
                    lat: None,
                    lon: None,
                    geometry: None,
                },
                Element {
                    type_: "way".to_string(),
                    id: 11,
                    lat: None,
                    lon: None,
                    geometry: Some(vec![
                        GeomPoint {
                            lat: 40.75,
                            lon: -73.95,
                        },
                        GeomPoint {
                            lat: 40.76,
                            lon: -73.94,
                        },
                        GeomPoint {
                            lat: 40.75,
                            lon: -73.93,
                        },
                    ]),
                },
            ],
        };

        let forests = parse_forests(&response);
        assert_eq!(forests.len(), 1);
        // geometry vertices land as (lon, lat)
        assert_eq!(forests[0].ring[0], [-73.95, 40.75]);
    }

    #[test]
    fn test_derive_samples_follows_index_formulas() {
        let trees: Vec<TreeRecord> = (0..7).map(|_| TreeRecord::new(40.75, -73.95)).collect();

        let samples = derive_samples(&trees);
        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].temperature, 30.0);
        assert_eq!(samples[4].temperature, 26.0);
        assert_eq!(samples[5].temperature, 30.0);
        assert_eq!(samples[6].aqi, 94.0);
    }
}
