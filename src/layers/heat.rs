use serde::Serialize;

use crate::domain::ClimateSample;
use crate::layers::LayerDescriptor;

/// Warm yellow-to-red ramp for the temperature surface
pub const HEAT_COLOR_RANGE: [[u8; 3]; 5] = [
    [255, 255, 178],
    [254, 204, 92],
    [253, 141, 60],
    [240, 59, 32],
    [189, 0, 38],
];

const RADIUS_PIXELS: f64 = 40.0;
const INTENSITY: f64 = 1.0;

/// One heatmap row: position plus its temperature weight
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedPoint {
    /// (lon, lat)
    pub position: [f64; 2],
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapLayer {
    pub id: String,
    pub data: Vec<WeightedPoint>,
    pub color_range: [[u8; 3]; 5],
    pub radius_pixels: f64,
    pub intensity: f64,
}

/// Heat-island surface weighted by the derived temperature column
pub fn build_heat_layer(samples: &[ClimateSample]) -> Option<LayerDescriptor> {
    if samples.is_empty() {
        return None;
    }

    let data = samples
        .iter()
        .map(|sample| WeightedPoint {
            position: sample.position(),
            weight: sample.temperature,
        })
        .collect();

    Some(LayerDescriptor::Heatmap(HeatmapLayer {
        id: "heat-island".to_string(),
        data,
        color_range: HEAT_COLOR_RANGE,
        radius_pixels: RADIUS_PIXELS,
        intensity: INTENSITY,
    }))
}
