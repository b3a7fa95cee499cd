use serde::Serialize;

use crate::layers::{LayerDescriptor, ViewMode};
use crate::view::ViewState;

/// Tooltip template shown by the rendering widget; `{field}` placeholders
/// resolve against the hovered row
#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    pub text: String,
}

pub fn tooltip_for(mode: ViewMode) -> Tooltip {
    let text = match mode {
        ViewMode::Density => "Trees in cell: {elevationValue}",
        ViewMode::Canopy => "Street tree",
        ViewMode::HeatIsland => "Surface temperature: {weight} °C",
        ViewMode::AirQuality => "Air quality index: {aqi}",
        ViewMode::Terrain => "Shaded relief",
    };

    Tooltip {
        text: text.to_string(),
    }
}

/// The full declarative bundle handed to the rendering widget
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub layers: Vec<LayerDescriptor>,
    pub initial_view_state: ViewState,
    pub tooltip: Tooltip,
}

impl Deck {
    pub fn new(layers: Vec<LayerDescriptor>, view_state: ViewState, mode: ViewMode) -> Self {
        Self {
            layers,
            initial_view_state: view_state,
            tooltip: tooltip_for(mode),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
