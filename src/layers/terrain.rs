use serde::Serialize;

use crate::layers::LayerDescriptor;

const ELEVATION_TILES: &str = "https://api.mapbox.com/v4/mapbox.terrain-rgb/{z}/{x}/{y}.png";
const TEXTURE_TILES: &str = "https://api.mapbox.com/v4/mapbox.satellite/{z}/{x}/{y}.png";

/// Elevation shading ramp, low = green through yellow/orange/red to white
/// at the highest peaks. Stops are elevations in meters.
pub const ELEVATION_RAMP: [(f64, [u8; 3]); 6] = [
    (0.0, [34, 139, 34]),
    (500.0, [110, 204, 57]),
    (1000.0, [255, 255, 102]),
    (2000.0, [255, 165, 0]),
    (3000.0, [255, 69, 0]),
    (4000.0, [255, 255, 255]),
];

/// Terrain-RGB decoder: elevation = -10000 + (R*65536 + G*256 + B) * 0.1
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationDecoder {
    pub r_scaler: f64,
    pub g_scaler: f64,
    pub b_scaler: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainLayer {
    pub id: String,
    pub elevation_data: String,
    pub texture: String,
    pub elevation_decoder: ElevationDecoder,
    pub color_ramp: Vec<(f64, [u8; 3])>,
}

/// Shaded-relief terrain mesh. Needs no fetched rows; the tile templates
/// and decoder are constants, with an optional provider token appended.
pub fn build_terrain_layer(token: Option<&str>) -> LayerDescriptor {
    let (elevation_data, texture) = match token {
        Some(token) => (
            format!("{ELEVATION_TILES}?access_token={token}"),
            format!("{TEXTURE_TILES}?access_token={token}"),
        ),
        None => (ELEVATION_TILES.to_string(), TEXTURE_TILES.to_string()),
    };

    LayerDescriptor::Terrain(TerrainLayer {
        id: "terrain".to_string(),
        elevation_data,
        texture,
        elevation_decoder: ElevationDecoder {
            r_scaler: 65536.0,
            g_scaler: 256.0,
            b_scaler: 1.0,
            offset: -10000.0,
        },
        color_ramp: ELEVATION_RAMP.to_vec(),
    })
}
