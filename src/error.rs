//! Error types for the animation player

use serde::{Deserialize, Serialize};

/// Error type for sprite animation operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Construction rejected an empty frame sequence
    #[error("frame sequence must contain at least one frame")]
    EmptyFrameSequence,

    /// Frame rate was zero, negative, or non-finite
    #[error("invalid frame rate: {rate} (must be positive and finite)")]
    InvalidFrameRate { rate: f64 },

    /// Invalid time value
    #[error("invalid time value: {time}")]
    InvalidTime { time: f64 },

    /// A mutating call was made after `destroy`
    #[error("animation '{name}' has been destroyed")]
    PlayerDestroyed { name: String },

    /// Frame atlas document could not be loaded
    #[error("invalid frame atlas: {reason}")]
    InvalidAtlas { reason: String },
}

impl AnimationError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyFrameSequence | Self::InvalidFrameRate { .. } | Self::InvalidTime { .. } => {
                "validation"
            }
            Self::PlayerDestroyed { .. } => "lifecycle",
            Self::InvalidAtlas { .. } => "atlas",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidAtlas {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(AnimationError::EmptyFrameSequence.category(), "validation");
        assert_eq!(
            AnimationError::InvalidFrameRate { rate: 0.0 }.category(),
            "validation"
        );
        assert_eq!(
            AnimationError::PlayerDestroyed {
                name: "walk".to_string()
            }
            .category(),
            "lifecycle"
        );
    }

    #[test]
    fn test_serialization() {
        let error = AnimationError::InvalidFrameRate { rate: -1.0 };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: AnimationError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let converted: AnimationError = err.into();
        assert!(matches!(converted, AnimationError::InvalidAtlas { .. }));
    }
}
