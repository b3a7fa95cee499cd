//! canopydeck - Generate deck layer specs for urban tree canopy and microclimate overlays from OpenStreetMap data

pub mod api;
pub mod config;
pub mod domain;
pub mod layers;
pub mod osm;
pub mod view;
