use serde::Deserialize;
use std::path::PathBuf;

use crate::layers::ViewMode;

/// Slider bounds for the camera and encoding controls
pub mod ranges {
    pub const ZOOM_MIN: u32 = 10;
    pub const ZOOM_MAX: u32 = 18;
    pub const RADIUS_MIN: u32 = 50;
    pub const RADIUS_MAX: u32 = 1000;
    pub const ELEVATION_SCALE_MIN: u32 = 5;
    pub const ELEVATION_SCALE_MAX: u32 = 100;
    pub const PITCH_MAX: u32 = 60;
    pub const BEARING_MAX: u32 = 360;
}

pub const DEFAULT_RADIUS: u32 = 100;
pub const DEFAULT_ELEVATION_SCALE: u32 = 10;
pub const DEFAULT_PITCH: u32 = 40;
pub const DEFAULT_BEARING: u32 = 0;

/// Resolved control state consumed by layer selection and view assembly
#[derive(Debug, Clone)]
pub struct Controls {
    pub zoom: f64,
    /// Aggregation/point radius in meters
    pub radius: u32,
    /// Hexagon elevation multiplier
    pub elevation_scale: u32,
    /// Camera pitch in degrees
    pub pitch: u32,
    /// Camera bearing in degrees
    pub bearing: u32,
    /// Map-provider token for terrain tiles
    pub mapbox_token: Option<String>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            zoom: 12.0,
            radius: DEFAULT_RADIUS,
            elevation_scale: DEFAULT_ELEVATION_SCALE,
            pitch: DEFAULT_PITCH,
            bearing: DEFAULT_BEARING,
            mapbox_token: None,
        }
    }
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS
}
fn default_elevation_scale() -> u32 {
    DEFAULT_ELEVATION_SCALE
}
fn default_pitch() -> u32 {
    DEFAULT_PITCH
}
fn default_bearing() -> u32 {
    DEFAULT_BEARING
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub mode: Option<ViewMode>,
    #[serde(default)]
    pub zoom: Option<u32>,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_elevation_scale")]
    pub elevation_scale: u32,
    #[serde(default = "default_pitch")]
    pub pitch: u32,
    #[serde(default = "default_bearing")]
    pub bearing: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub mapbox_token: Option<String>,
    #[serde(default)]
    pub overpass: Option<OverpassConfig>,
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        Self::load_from_paths(&get_config_paths())
    }

    fn load_from_paths(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("canopydeck.toml"));
    paths.push(PathBuf::from(".canopydeck.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("canopydeck").join("config.toml"));
        paths.push(config_dir.join("canopydeck.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".canopydeck.toml"));
        paths.push(home.join(".config").join("canopydeck").join("config.toml"));
    }

    paths
}
