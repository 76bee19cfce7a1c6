//! Sprite animation playback implementation

pub mod playback_options;
pub mod playback_state;
pub mod sprite_animation;

pub use playback_options::*;
pub use playback_state::*;
pub use sprite_animation::*;
