pub mod camera;
pub mod deck;

pub use camera::{DEFAULT_TARGET, ViewState, camera_target};
pub use deck::{Deck, Tooltip, tooltip_for};
