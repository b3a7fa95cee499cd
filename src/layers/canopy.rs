use serde::Serialize;

use crate::config::Controls;
use crate::domain::{ForestPolygon, TreeRecord};
use crate::layers::LayerDescriptor;

const TREE_FILL: [u8; 4] = [34, 139, 34, 180];
const FOREST_FILL: [u8; 4] = [0, 100, 0, 120];
const FOREST_LINE: [u8; 4] = [0, 60, 0, 255];

/// One scatter row: position plus resolved fill color. Extra columns are
/// carried only when a mode derives them (AQI).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    /// (lon, lat)
    pub position: [f64; 2],
    pub fill_color: [u8; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    pub id: String,
    pub data: Vec<ScatterPoint>,
    /// Point radius in meters
    pub radius: f64,
    pub radius_min_pixels: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonLayer {
    pub id: String,
    /// One (lon, lat) ring per forest area
    pub data: Vec<Vec<[f64; 2]>>,
    pub fill_color: [u8; 4],
    pub line_color: [u8; 4],
}

/// Green scatter layer over individual tree positions
pub fn build_canopy_scatter(trees: &[TreeRecord], controls: &Controls) -> Option<LayerDescriptor> {
    if trees.is_empty() {
        return None;
    }

    let data = trees
        .iter()
        .map(|tree| ScatterPoint {
            position: tree.position(),
            fill_color: TREE_FILL,
            aqi: None,
        })
        .collect();

    Some(LayerDescriptor::Scatterplot(ScatterplotLayer {
        id: "tree-canopy".to_string(),
        data,
        radius: controls.radius as f64,
        radius_min_pixels: 2,
    }))
}

/// Filled outlines of forest areas. Rings with fewer than 3 vertices are
/// not renderable and are dropped here.
pub fn build_forest_polygons(forests: &[ForestPolygon]) -> Option<LayerDescriptor> {
    let data: Vec<Vec<[f64; 2]>> = forests
        .iter()
        .filter(|polygon| polygon.is_valid())
        .map(|polygon| polygon.ring.clone())
        .collect();

    if data.is_empty() {
        return None;
    }

    Some(LayerDescriptor::Polygon(PolygonLayer {
        id: "forest-areas".to_string(),
        data,
        fill_color: FOREST_FILL,
        line_color: FOREST_LINE,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_yield_no_layer() {
        assert!(build_canopy_scatter(&[], &Controls::default()).is_none());
        assert!(build_forest_polygons(&[]).is_none());
    }

    #[test]
    fn test_scatter_rows_keep_positions() {
        let trees = vec![TreeRecord::new(40.75, -73.95)];
        let layer = build_canopy_scatter(&trees, &Controls::default()).unwrap();
        let LayerDescriptor::Scatterplot(scatter) = layer else {
            panic!("expected a scatterplot layer");
        };
        assert_eq!(scatter.data.len(), 1);
        assert_eq!(scatter.data[0].position, [-73.95, 40.75]);
        assert_eq!(scatter.data[0].fill_color, TREE_FILL);
    }

    #[test]
    fn test_degenerate_rings_are_dropped() {
        let forests = vec![
            ForestPolygon::new(vec![[-73.95, 40.75], [-73.94, 40.75]]),
            ForestPolygon::new(vec![
                [-73.95, 40.75],
                [-73.94, 40.75],
                [-73.94, 40.76],
            ]),
        ];

        let layer = build_forest_polygons(&forests).unwrap();
        let LayerDescriptor::Polygon(polygons) = layer else {
            panic!("expected a polygon layer");
        };
        assert_eq!(polygons.data.len(), 1);
    }
}
