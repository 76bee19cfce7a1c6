//! Time types for frame-sequence playback.
//!
//! All playback math runs on millisecond timestamps pulled from an external
//! clock, so the types here are thin wrappers that keep instants and frame
//! intervals from being mixed up with raw floats.

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// A moment on the driver's clock, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct TickTime(f64);

impl TickTime {
    /// Create a tick time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, AnimationError> {
        if milliseconds < 0.0 || !milliseconds.is_finite() {
            return Err(AnimationError::InvalidTime { time: milliseconds });
        }
        Ok(Self(milliseconds))
    }

    /// Create a tick time from seconds
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, AnimationError> {
        Self::from_millis(seconds * 1000.0)
    }

    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0
    }

    /// Get time in seconds
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl std::ops::Add for TickTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for TickTime {
    type Output = Self;

    /// Saturating: an earlier minus a later time is zero, not negative.
    fn sub(self, other: Self) -> Self {
        Self((self.0 - other.0).max(0.0))
    }
}

impl std::ops::Add<FrameInterval> for TickTime {
    type Output = Self;

    fn add(self, interval: FrameInterval) -> Self {
        Self(self.0 + interval.as_millis())
    }
}

impl From<f64> for TickTime {
    fn from(milliseconds: f64) -> Self {
        Self::from_millis(milliseconds.max(0.0)).unwrap_or_else(|_| Self::zero())
    }
}

impl From<TickTime> for f64 {
    fn from(time: TickTime) -> f64 {
        time.as_millis()
    }
}

/// Time between frame advances, derived from a frames-per-second rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FrameInterval(f64);

impl FrameInterval {
    /// Derive the interval from a frames-per-second rate (`1000 / rate`)
    #[inline]
    pub fn from_rate(rate: f64) -> Result<Self, AnimationError> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(AnimationError::InvalidFrameRate { rate });
        }
        Ok(Self(1000.0 / rate))
    }

    /// Create an interval directly from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, AnimationError> {
        if milliseconds <= 0.0 || !milliseconds.is_finite() {
            return Err(AnimationError::InvalidTime { time: milliseconds });
        }
        Ok(Self(milliseconds))
    }

    /// Get the interval in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0
    }

    /// Get the frames-per-second rate this interval corresponds to
    #[inline]
    pub fn rate(&self) -> f64 {
        1000.0 / self.0
    }
}
