use serde::Serialize;

use crate::config::Controls;
use crate::domain::TreeRecord;
use crate::layers::LayerDescriptor;

/// Six-step blue-to-red range for hexagon density bins
pub const DENSITY_COLOR_RANGE: [[u8; 3]; 6] = [
    [1, 152, 189],
    [73, 227, 206],
    [216, 254, 181],
    [254, 237, 177],
    [254, 173, 84],
    [209, 55, 78],
];

const ELEVATION_RANGE: [f64; 2] = [0.0, 1000.0];
const COVERAGE: f64 = 0.9;

/// Extruded hexagon-aggregation layer over tree positions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagonLayer {
    pub id: String,
    /// (lon, lat) positions, one per tree row
    pub data: Vec<[f64; 2]>,
    pub radius: f64,
    pub elevation_scale: f64,
    pub elevation_range: [f64; 2],
    pub extruded: bool,
    pub coverage: f64,
    pub color_range: [[u8; 3]; 6],
}

pub fn build_density_layer(trees: &[TreeRecord], controls: &Controls) -> Option<LayerDescriptor> {
    if trees.is_empty() {
        return None;
    }

    Some(LayerDescriptor::Hexagon(HexagonLayer {
        id: "tree-density".to_string(),
        data: trees.iter().map(TreeRecord::position).collect(),
        radius: controls.radius as f64,
        elevation_scale: controls.elevation_scale as f64,
        elevation_range: ELEVATION_RANGE,
        extruded: true,
        coverage: COVERAGE,
        color_range: DENSITY_COLOR_RANGE,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_yield_no_layer() {
        assert!(build_density_layer(&[], &Controls::default()).is_none());
    }

    #[test]
    fn test_controls_feed_the_encoding() {
        let trees = vec![TreeRecord::new(40.75, -73.95)];
        let controls = Controls {
            radius: 250,
            elevation_scale: 50,
            ..Controls::default()
        };

        let layer = build_density_layer(&trees, &controls).unwrap();
        let LayerDescriptor::Hexagon(hexagon) = layer else {
            panic!("expected a hexagon layer");
        };
        assert_eq!(hexagon.radius, 250.0);
        assert_eq!(hexagon.elevation_scale, 50.0);
        assert_eq!(hexagon.data, vec![[-73.95, 40.75]]);
        assert!(hexagon.extruded);
    }
}
