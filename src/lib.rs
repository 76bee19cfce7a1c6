//! Sprite Animation
//!
//! Frame-sequence playback for sprite-based rendering. An animation owns an
//! ordered list of frame keys resolved against a shared atlas, advances
//! through them on an external millisecond clock, optionally loops, and
//! notifies its parent visual when playback starts, wraps, or completes.
//! Rendering, atlas parsing, and input handling live elsewhere.

pub mod atlas;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod time;

// Re-export common types for convenience
pub use atlas::{FrameAtlas, FrameDescriptor, FrameKey, FrameSource};
pub use clock::{ManualClock, SystemClock, TickClock};
pub use config::AnimationConfig;
pub use error::AnimationError;
pub use event::{AnimationEvent, EventType, ParentVisual, RecordingParent};
pub use player::{PlaybackOptions, PlaybackState, SpriteAnimation};
pub use time::{FrameInterval, TickTime};

/// Sprite animation result type
pub type Result<T> = core::result::Result<T, AnimationError>;
