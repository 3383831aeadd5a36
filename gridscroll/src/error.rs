//! Configuration error types

/// Errors raised while loading or validating a [`ScrollerConfig`](crate::ScrollerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A colour string was not in a recognised notation.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A thickness or length was zero, negative or not finite.
    #[error("{name} must be a positive number, got {value}")]
    InvalidThickness {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The thumb cannot be thicker than the track that holds it.
    #[error("thumb thickness {thumb} exceeds track thickness {track}")]
    ThumbWiderThanTrack {
        /// Configured thumb thickness.
        thumb: f32,
        /// Configured track thickness.
        track: f32,
    },
}
