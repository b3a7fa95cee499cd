use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod api;
mod config;
mod domain;
mod layers;
mod osm;
mod view;

use api::{OverpassResponse, fetch_forests, fetch_trees};
use config::{
    Controls, DEFAULT_BEARING, DEFAULT_ELEVATION_SCALE, DEFAULT_PITCH, DEFAULT_RADIUS, FileConfig,
    ranges,
};
use domain::{LOCATIONS, LocationPreset};
use layers::{MapData, ViewMode, select_layers};
use osm::{derive_samples, parse_forests, parse_trees};
use view::{Deck, ViewState, camera_target};

/// Generate deck layer specs for urban tree canopy and microclimate overlays
///
/// Examples:
///   # Tree canopy around the default location
///   canopydeck
///
///   # Density hexagons over Jakarta, written to a file
///   canopydeck -l jakarta -m density -o jakarta.json
///
///   # Heat-island surface with a tilted camera
///   canopydeck -m heat-island --pitch 60 --bearing 30
///
///   # Custom center with a wider aggregation radius
///   canopydeck --lat 40.75 --lon -73.95 -m density -r 500
#[derive(Parser, Debug)]
#[command(name = "canopydeck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches canopydeck.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Location preset name (e.g. "New York", "Jakarta")
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// Latitude for direct coordinate input (use with --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude for direct coordinate input (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// View mode
    #[arg(short = 'm', long, value_enum, default_value = "canopy")]
    mode: ViewMode,

    /// Camera zoom (defaults to the location preset's zoom)
    #[arg(short = 'z', long, value_parser = clap::value_parser!(u32).range(ranges::ZOOM_MIN as i64..=ranges::ZOOM_MAX as i64))]
    zoom: Option<u32>,

    /// Aggregation/point radius in meters
    #[arg(short = 'r', long, default_value = "100", value_parser = clap::value_parser!(u32).range(ranges::RADIUS_MIN as i64..=ranges::RADIUS_MAX as i64))]
    radius: u32,

    /// Hexagon elevation multiplier
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(ranges::ELEVATION_SCALE_MIN as i64..=ranges::ELEVATION_SCALE_MAX as i64))]
    elevation_scale: u32,

    /// Camera pitch in degrees
    #[arg(long, default_value = "40", value_parser = clap::value_parser!(u32).range(0..=ranges::PITCH_MAX as i64))]
    pitch: u32,

    /// Camera bearing in degrees
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=ranges::BEARING_MAX as i64))]
    bearing: u32,

    /// Output path for the deck JSON (stdout when omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let location = args
        .location
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.location.clone()));
    let lat = args
        .lat
        .or_else(|| file_config.as_ref().and_then(|c| c.lat));
    let lon = args
        .lon
        .or_else(|| file_config.as_ref().and_then(|c| c.lon));
    let mode = if args.mode != ViewMode::Canopy {
        args.mode
    } else {
        file_config
            .as_ref()
            .and_then(|c| c.mode)
            .unwrap_or(ViewMode::Canopy)
    };
    let radius = if args.radius != DEFAULT_RADIUS {
        args.radius
    } else {
        file_config
            .as_ref()
            .map(|c| c.radius)
            .unwrap_or(DEFAULT_RADIUS)
    };
    let elevation_scale = if args.elevation_scale != DEFAULT_ELEVATION_SCALE {
        args.elevation_scale
    } else {
        file_config
            .as_ref()
            .map(|c| c.elevation_scale)
            .unwrap_or(DEFAULT_ELEVATION_SCALE)
    };
    let pitch = if args.pitch != DEFAULT_PITCH {
        args.pitch
    } else {
        file_config
            .as_ref()
            .map(|c| c.pitch)
            .unwrap_or(DEFAULT_PITCH)
    };
    let bearing = if args.bearing != DEFAULT_BEARING {
        args.bearing
    } else {
        file_config
            .as_ref()
            .map(|c| c.bearing)
            .unwrap_or(DEFAULT_BEARING)
    };
    let zoom_arg = args
        .zoom
        .or_else(|| file_config.as_ref().and_then(|c| c.zoom));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let mapbox_token = file_config.as_ref().and_then(|c| c.mapbox_token.clone());

    let overpass_config = file_config
        .as_ref()
        .and_then(|c| c.overpass.clone())
        .unwrap_or_default();

    let preset = match location {
        Some(ref name) => LocationPreset::find(name).ok_or_else(|| {
            let known: Vec<&str> = LOCATIONS.iter().map(|p| p.name).collect();
            anyhow::anyhow!(
                "Unknown location preset: {:?} (known: {})",
                name,
                known.join(", ")
            )
        })?,
        None => LocationPreset::default_preset(),
    };

    let center = if let (Some(lt), Some(ln)) = (lat, lon) {
        (lt, ln)
    } else {
        preset.center()
    };

    let controls = Controls {
        zoom: zoom_arg.map(f64::from).unwrap_or(preset.zoom),
        radius,
        elevation_scale,
        pitch,
        bearing,
        mapbox_token,
    };

    // Status goes to stderr; stdout is reserved for the deck JSON
    eprintln!("canopydeck - Deck Spec Generator");
    eprintln!("================================");
    eprintln!();

    if verbose {
        eprintln!("Configuration:");
        if let Some(ref name) = location {
            eprintln!("  Location: {}", name);
        }
        eprintln!("  Center: ({:.4}, {:.4})", center.0, center.1);
        eprintln!("  Mode: {:?}", mode);
        eprintln!("  Zoom: {}", controls.zoom);
        eprintln!("  Radius: {}m", controls.radius);
        eprintln!("  Elevation scale: {}", controls.elevation_scale);
        eprintln!("  Pitch: {}", controls.pitch);
        eprintln!("  Bearing: {}", controls.bearing);
        eprintln!(
            "  Output: {}",
            output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string())
        );
        eprintln!("  Overpass endpoint: {}", overpass_config.url);
        eprintln!();
    }

    // Terrain needs no rows; everything else starts from the tree query
    let trees_response = if mode == ViewMode::Terrain {
        OverpassResponse::default()
    } else {
        let spinner = create_spinner("Fetching trees from OpenStreetMap...");
        let start = Instant::now();
        let response = match fetch_trees(center, &overpass_config) {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Warning: tree query failed, continuing with no rows: {}", e);
                OverpassResponse::default()
            }
        };
        spinner.finish_with_message(format!(
            "Fetched {} tree elements [{:.1}s]",
            response.elements.len(),
            start.elapsed().as_secs_f32()
        ));
        response
    };

    let forests_response = if mode == ViewMode::Canopy {
        let spinner = create_spinner("Fetching forest outlines...");
        let start = Instant::now();
        let response = match fetch_forests(center, &overpass_config) {
            Ok(response) => response,
            Err(e) => {
                eprintln!(
                    "Warning: forest query failed, continuing with no outlines: {}",
                    e
                );
                OverpassResponse::default()
            }
        };
        spinner.finish_with_message(format!(
            "Fetched {} forest elements [{:.1}s]",
            response.elements.len(),
            start.elapsed().as_secs_f32()
        ));
        response
    } else {
        OverpassResponse::default()
    };

    let trees = parse_trees(&trees_response);
    let forests = parse_forests(&forests_response);
    let samples = derive_samples(&trees);
    if verbose {
        eprintln!(
            "  Shaped {} tree rows, {} forest rings",
            trees.len(),
            forests.len()
        );
    }

    let data = MapData {
        trees: &trees,
        forests: &forests,
        samples: &samples,
    };
    let deck_layers = select_layers(mode, &data, &controls);

    let target = if mode == ViewMode::Terrain {
        (center.1, center.0)
    } else {
        camera_target(&trees)
    };
    let view_state = ViewState::assemble(target, &controls);

    let deck = Deck::new(deck_layers, view_state, mode);
    let json = deck.to_json().context("Failed to serialize deck spec")?;

    match output {
        Some(ref path) => {
            std::fs::write(path, &json)
                .context(format!("Failed to write deck spec: {:?}", path))?;
            eprintln!();
            eprintln!(
                "Wrote {} layer(s) to {} [{:.1}s]",
                deck.layers.len(),
                path.display(),
                total_start.elapsed().as_secs_f32()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
