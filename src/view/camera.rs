use geo::{Centroid, MultiPoint, Point};
use serde::Serialize;

use crate::config::Controls;
use crate::domain::TreeRecord;

/// Camera fallback when no rows exist: (lon, lat)
pub const DEFAULT_TARGET: (f64, f64) = (-73.95, 40.75);

/// Camera descriptor handed to the rendering widget
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

/// Mean position of the shaped rows as (lon, lat), or the fixed default
/// when no rows exist
pub fn camera_target(trees: &[TreeRecord]) -> (f64, f64) {
    let points: MultiPoint<f64> = trees
        .iter()
        .map(|tree| Point::new(tree.longitude, tree.latitude))
        .collect();

    points
        .centroid()
        .map(|center| (center.x(), center.y()))
        .unwrap_or(DEFAULT_TARGET)
}

impl ViewState {
    /// Combine a camera target with the user-controlled camera knobs
    pub fn assemble(target: (f64, f64), controls: &Controls) -> Self {
        let (longitude, latitude) = target;
        Self {
            longitude,
            latitude,
            zoom: controls.zoom,
            pitch: controls.pitch as f64,
            bearing: controls.bearing as f64,
        }
    }
}
