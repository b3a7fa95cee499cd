pub mod forest;
pub mod location;
pub mod sample;
pub mod tree;

pub use forest::ForestPolygon;
pub use location::{LOCATIONS, LocationPreset};
pub use sample::ClimateSample;
pub use tree::TreeRecord;
