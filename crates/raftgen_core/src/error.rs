//! # Configuration Error Types
//!
//! All faults are construction-time faults: an invalid configuration is
//! rejected when the engine is built, never in the middle of a column.
//! Generation itself is total over well-formed inputs and has no
//! recoverable-error taxonomy.

use thiserror::Error;

/// Errors that can occur while loading or validating world configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A noise channel was configured with a non-positive base frequency.
    #[error("noise channel `{channel}` has invalid base frequency {frequency} (must be > 0)")]
    InvalidFrequency {
        /// The offending channel name.
        channel: &'static str,
        /// The configured frequency.
        frequency: f64,
    },

    /// A noise channel was configured with zero octaves.
    #[error("noise channel `{channel}` must have at least 1 octave")]
    InvalidOctaves {
        /// The offending channel name.
        channel: &'static str,
    },

    /// Terrain height bounds are inverted, degenerate, or dip into the
    /// bedrock floor levels.
    #[error("invalid terrain height bounds [{min}, {max}]: min must be >= 2 and below max")]
    InvalidHeightBounds {
        /// Configured minimum seabed height.
        min: i32,
        /// Configured maximum seabed height.
        max: i32,
    },

    /// Raft plot spacing must be positive.
    #[error("invalid raft spacing {0} (must be > 0)")]
    InvalidSpacing(i32),

    /// World height must leave room above sea level and the raft platform.
    #[error("world height {world_height} must exceed sea level {sea_level}")]
    InvalidWorldHeight {
        /// Configured world height.
        world_height: i32,
        /// Configured sea level.
        sea_level: i32,
    },

    /// Smoother threshold must be positive.
    #[error("invalid smoothing threshold {0} (must be > 0)")]
    InvalidThreshold(f64),

    /// At least one raft plot must be enumerated.
    #[error("raft plot count must be at least 1")]
    InvalidPlotCount,

    /// Raft platform must fit between the bedrock floor and world height.
    #[error("invalid raft platform height {0} (must be >= 4 and below world height)")]
    InvalidPlatformHeight(i32),

    /// Reading a configuration file failed.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a configuration file failed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
