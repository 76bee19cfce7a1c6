//! Construction-time defaults for animations.

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::time::FrameInterval;

/// Defaults applied when an animation is built without explicit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frame rate in frames per second
    pub default_frame_rate: f64,
    /// Whether sequences loop when they reach the end
    pub default_looped: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_frame_rate: 60.0,
            default_looped: false,
        }
    }
}

impl AnimationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnimationError> {
        FrameInterval::from_rate(self.default_frame_rate)?;
        Ok(())
    }

    /// Set the default frame rate
    #[inline]
    pub fn with_default_frame_rate(mut self, rate: f64) -> Self {
        self.default_frame_rate = rate;
        self
    }

    /// Set the default loop flag
    #[inline]
    pub fn with_default_looped(mut self, looped: bool) -> Self {
        self.default_looped = looped;
        self
    }
}
