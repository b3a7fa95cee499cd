pub mod overpass;

pub use overpass::{Element, FetchError, GeomPoint, OverpassResponse, fetch_forests, fetch_trees};
