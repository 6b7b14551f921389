//! # World Configuration
//!
//! Immutable engine configuration. An external loader reads this once at
//! world startup (TOML on disk or built-in defaults) and hands it to the
//! engine; the engine never persists or mutates it.
//!
//! The defaults reproduce the consolidated tuning of the production
//! pipeline: a mostly-flat abyssal plain in the 10-50 height band with
//! selector-blended mountain and canyon regions, clamped to [5, 45].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// One named fractal noise field: a fixed frequency/octave configuration
/// plus a channel offset decorrelating it from every other field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseChannel {
    /// Frequency of the first octave. Must be > 0.
    pub base_frequency: f64,
    /// Number of octaves summed. Must be >= 1.
    pub octaves: u32,
    /// Per-octave frequency multiplier.
    pub lacunarity: f64,
    /// Per-octave amplitude multiplier.
    pub gain: f64,
    /// Decorrelation offset mixed into the lattice hash.
    pub channel_offset: i64,
    /// Output scale applied to the normalized [-1, 1] fractal sum.
    pub amplitude: f64,
}

impl Default for NoiseChannel {
    fn default() -> Self {
        Self {
            base_frequency: 0.001,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
            channel_offset: 0,
            amplitude: 1.0,
        }
    }
}

impl NoiseChannel {
    /// Validates frequency and octave count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFrequency`] or
    /// [`ConfigError::InvalidOctaves`] naming the offending channel.
    pub fn validate(&self, channel: &'static str) -> ConfigResult<()> {
        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency {
                channel,
                frequency: self.base_frequency,
            });
        }
        if self.octaves < 1 {
            return Err(ConfigError::InvalidOctaves { channel });
        }
        Ok(())
    }
}

/// The six noise channels of the terrain field plus their blend constants
/// and the seabed height bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainChannels {
    /// Continental macro height field. Mapped to the base height band.
    pub continental: NoiseChannel,
    /// Regional terrain delta field.
    pub regional: NoiseChannel,
    /// Fine detail delta field.
    pub detail: NoiseChannel,
    /// Mountain delta field, active where the selector is high.
    pub mountain: NoiseChannel,
    /// Canyon delta field, active where the selector is low.
    pub canyon: NoiseChannel,
    /// Terrain selector field in [-1, 1].
    pub selector: NoiseChannel,
    /// Blend weight of the regional delta.
    pub regional_weight: f64,
    /// Blend weight of the detail delta.
    pub detail_weight: f64,
    /// Blend weight of the mountain delta (on top of the selector weight).
    pub mountain_weight: f64,
    /// Blend weight of the canyon delta (on top of the selector weight).
    pub canyon_weight: f64,
    /// Selector magnitude where mountain/canyon blending starts.
    pub selector_threshold: f64,
    /// Selector span over which the blend ramps from 0 to 1.
    pub selector_width: f64,
    /// Lower clamp for the synthesized seabed height.
    pub min_height: i32,
    /// Upper clamp for the synthesized seabed height.
    pub max_height: i32,
}

impl Default for TerrainChannels {
    fn default() -> Self {
        Self {
            continental: NoiseChannel {
                base_frequency: 0.000_05,
                octaves: 8,
                lacunarity: 2.0,
                gain: 0.6,
                channel_offset: 10_000,
                amplitude: 50.0,
            },
            regional: NoiseChannel {
                base_frequency: 0.000_5,
                octaves: 6,
                lacunarity: 2.0,
                gain: 0.6,
                channel_offset: 20_000,
                amplitude: 25.0,
            },
            detail: NoiseChannel {
                base_frequency: 0.01,
                octaves: 4,
                lacunarity: 2.0,
                gain: 0.5,
                channel_offset: 30_000,
                amplitude: 6.0,
            },
            mountain: NoiseChannel {
                base_frequency: 0.001,
                octaves: 6,
                lacunarity: 2.0,
                gain: 0.6,
                channel_offset: 40_000,
                amplitude: 20.0,
            },
            canyon: NoiseChannel {
                base_frequency: 0.000_8,
                octaves: 5,
                lacunarity: 2.0,
                gain: 0.6,
                channel_offset: 50_000,
                amplitude: 15.0,
            },
            selector: NoiseChannel {
                base_frequency: 0.000_3,
                octaves: 6,
                lacunarity: 2.0,
                gain: 0.6,
                channel_offset: 60_000,
                amplitude: 1.0,
            },
            regional_weight: 0.4,
            detail_weight: 0.2,
            mountain_weight: 0.4,
            canyon_weight: 0.4,
            selector_threshold: 0.2,
            selector_width: 0.6,
            min_height: 5,
            max_height: 45,
        }
    }
}

impl TerrainChannels {
    /// Validates every channel and the height bounds.
    ///
    /// # Errors
    ///
    /// Returns the first invalid channel or bound found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.continental.validate("continental")?;
        self.regional.validate("regional")?;
        self.detail.validate("detail")?;
        self.mountain.validate("mountain")?;
        self.canyon.validate("canyon")?;
        self.selector.validate("selector")?;
        // The bottom two levels are always bedrock floor; the seabed may
        // never reach into them.
        if self.min_height < 2 || self.min_height >= self.max_height {
            return Err(ConfigError::InvalidHeightBounds {
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }
}

/// Configuration for the single-column spike smoother.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// Axis offset of the probe ring around the target column.
    pub ring_radius: i32,
    /// Deviation from the neighborhood average (in height units) above
    /// which the correction fires.
    pub threshold: f64,
    /// Octave cap applied to the cheap neighborhood probes.
    pub probe_octaves: u32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            ring_radius: 4,
            threshold: 6.0,
            probe_octaves: 2,
        }
    }
}

/// Configuration for the raft plot grid.
///
/// Plots are enumerated at `(i * spacing, i * spacing)` for `i` in
/// `[0, count)` - a bounded diagonal corridor, not a full 2D lattice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaftConfig {
    /// Distance between consecutive plot centers along each axis.
    pub spacing: i32,
    /// Number of enumerated plots.
    pub count: u32,
    /// Y level of the raft platform.
    pub platform_height: i32,
}

impl Default for RaftConfig {
    fn default() -> Self {
        Self {
            spacing: 200,
            count: 100,
            platform_height: 62,
        }
    }
}

/// Complete immutable world-generation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Y level of the ocean surface.
    pub sea_level: i32,
    /// Number of Y levels in a column.
    pub world_height: i32,
    /// Terrain noise channels and blend constants.
    pub terrain: TerrainChannels,
    /// Spike smoother tuning.
    pub smoother: SmootherConfig,
    /// Raft plot grid layout.
    pub raft: RaftConfig,
}

impl WorldConfig {
    /// Default sea level.
    pub const DEFAULT_SEA_LEVEL: i32 = 62;
    /// Default world height.
    pub const DEFAULT_WORLD_HEIGHT: i32 = 256;

    /// Parses a configuration from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first validation fault.
    pub fn from_toml_str(input: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, a parse error, or the first validation fault.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Validates the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns the first fault found; a validated configuration can never
    /// fail mid-column later.
    pub fn validate(&self) -> ConfigResult<()> {
        self.terrain.validate()?;
        if self.world_height <= self.sea_level {
            return Err(ConfigError::InvalidWorldHeight {
                world_height: self.world_height,
                sea_level: self.sea_level,
            });
        }
        if !self.smoother.threshold.is_finite() || self.smoother.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.smoother.threshold));
        }
        if self.raft.spacing <= 0 {
            return Err(ConfigError::InvalidSpacing(self.raft.spacing));
        }
        if self.raft.count == 0 {
            return Err(ConfigError::InvalidPlotCount);
        }
        // Platform columns stack bedrock, rock, a sand underlayer, and
        // the plank deck: that needs at least levels 0..=4, and the deck
        // must stay inside the column.
        if self.raft.platform_height < 4 || self.raft.platform_height >= self.world_height {
            return Err(ConfigError::InvalidPlatformHeight(self.raft.platform_height));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sea_level: Self::DEFAULT_SEA_LEVEL,
            world_height: Self::DEFAULT_WORLD_HEIGHT,
            terrain: TerrainChannels::default(),
            smoother: SmootherConfig::default(),
            raft: RaftConfig::default(),
        }
    }
}
