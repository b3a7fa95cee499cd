pub mod air;
pub mod canopy;
pub mod density;
pub mod heat;
pub mod terrain;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Controls;
use crate::domain::{ClimateSample, ForestPolygon, TreeRecord};

pub use air::build_air_quality_layer;
pub use canopy::{PolygonLayer, ScatterPoint, ScatterplotLayer, build_canopy_scatter, build_forest_polygons};
pub use density::{HexagonLayer, build_density_layer};
pub use heat::{HeatmapLayer, WeightedPoint, build_heat_layer};
pub use terrain::{ElevationDecoder, TerrainLayer, build_terrain_layer};

/// User-selected visualization choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Extruded hexagon bins of tree density
    Density,
    /// Individual trees plus forest outlines
    Canopy,
    /// Temperature heatmap over tree positions
    HeatIsland,
    /// Scatter points colored by AQI band
    AirQuality,
    /// Shaded-relief terrain, no fetched rows
    Terrain,
}

/// Shaped rows available to layer selection for one pass
#[derive(Debug, Clone, Copy, Default)]
pub struct MapData<'a> {
    pub trees: &'a [TreeRecord],
    pub forests: &'a [ForestPolygon],
    pub samples: &'a [ClimateSample],
}

/// A declarative visualization layer handed to the rendering widget
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum LayerDescriptor {
    #[serde(rename = "HexagonLayer")]
    Hexagon(HexagonLayer),
    #[serde(rename = "ScatterplotLayer")]
    Scatterplot(ScatterplotLayer),
    #[serde(rename = "PolygonLayer")]
    Polygon(PolygonLayer),
    #[serde(rename = "HeatmapLayer")]
    Heatmap(HeatmapLayer),
    #[serde(rename = "TerrainLayer")]
    Terrain(TerrainLayer),
}

/// Map the selected view mode onto its fixed set of layer descriptors.
///
/// Pure and stateless: the same (mode, rows, controls) always yields the
/// same list. Data-driven modes return an empty list when no tree rows
/// exist; terrain always returns its one hardcoded layer.
pub fn select_layers(mode: ViewMode, data: &MapData, controls: &Controls) -> Vec<LayerDescriptor> {
    match mode {
        ViewMode::Density => build_density_layer(data.trees, controls)
            .into_iter()
            .collect(),
        ViewMode::Canopy => {
            let Some(scatter) = build_canopy_scatter(data.trees, controls) else {
                return Vec::new();
            };
            let mut layers = Vec::new();
            // Forest fills go under the tree points
            if let Some(forest) = build_forest_polygons(data.forests) {
                layers.push(forest);
            }
            layers.push(scatter);
            layers
        }
        ViewMode::HeatIsland => build_heat_layer(data.samples).into_iter().collect(),
        ViewMode::AirQuality => build_air_quality_layer(data.samples, controls)
            .into_iter()
            .collect(),
        ViewMode::Terrain => vec![build_terrain_layer(controls.mapbox_token.as_deref())],
    }
}
