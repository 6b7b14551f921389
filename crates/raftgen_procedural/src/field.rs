//! # Terrain Field Synthesis
//!
//! Blends six fractal channels into one seabed height per column:
//! continental macro height, regional terrain delta, fine detail delta,
//! mountain delta, canyon delta, and a terrain selector.
//!
//! Mountain and canyon contributions are mixed in through branch-free
//! smoothstep weights driven by the selector, so terrain regions fade
//! into each other without hard seams. The result is clamped to the
//! configured height bounds.

use raftgen_core::TerrainChannels;

use crate::noise::LatticeNoise;

/// Base of the continental height band.
const CONTINENTAL_BASE: f64 = 10.0;
/// Span of the continental height band.
const CONTINENTAL_SPAN: f64 = 40.0;
/// Extra steepening applied to the canyon delta.
const CANYON_STEEPNESS: f64 = 1.2;

/// Continuous blend weights derived from the terrain selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendWeights {
    /// Weight of the mountain delta, in [0, 1].
    pub mountain: f64,
    /// Weight of the canyon delta, in [0, 1].
    pub canyon: f64,
    /// Residual plains weight, clamped to be non-negative.
    pub plains: f64,
}

/// Synthesizes the seabed height field from the configured channels.
#[derive(Clone, Copy, Debug)]
pub struct TerrainField {
    noise: LatticeNoise,
    channels: TerrainChannels,
}

impl TerrainField {
    /// Creates a field over a validated channel configuration.
    #[must_use]
    pub const fn new(noise: LatticeNoise, channels: TerrainChannels) -> Self {
        Self { noise, channels }
    }

    /// Returns the channel configuration.
    #[must_use]
    pub const fn channels(&self) -> &TerrainChannels {
        &self.channels
    }

    /// Continental macro height: the fractal value mapped through a
    /// squared curve into the `[CONTINENTAL_BASE, CONTINENTAL_BASE +
    /// CONTINENTAL_SPAN]` band, which biases the ocean floor toward the
    /// low end of the band.
    #[must_use]
    pub fn continental_base(&self, x: f64, z: f64) -> f64 {
        self.continental_base_capped(x, z, u32::MAX)
    }

    fn continental_base_capped(&self, x: f64, z: f64, octave_cap: u32) -> f64 {
        let channel = &self.channels.continental;
        let raw = self.noise.fbm_capped(x, z, channel, octave_cap) * channel.amplitude;
        let normalized = ((raw + channel.amplitude) / (2.0 * channel.amplitude)).clamp(0.0, 1.0);
        CONTINENTAL_BASE + normalized * normalized * CONTINENTAL_SPAN
    }

    /// Terrain selector in [-1, 1]: positive toward mountains, negative
    /// toward canyons.
    #[must_use]
    pub fn selector(&self, x: f64, z: f64) -> f64 {
        self.noise.fbm(x, z, &self.channels.selector)
    }

    /// Blend weights at a column, per the selector.
    #[must_use]
    pub fn blend_weights(&self, x: f64, z: f64) -> BlendWeights {
        self.blend_weights_capped(x, z, u32::MAX)
    }

    fn blend_weights_capped(&self, x: f64, z: f64, octave_cap: u32) -> BlendWeights {
        let selector = self.noise.fbm_capped(x, z, &self.channels.selector, octave_cap);
        let threshold = self.channels.selector_threshold;
        let width = self.channels.selector_width;

        let mountain = smoothstep(((selector - threshold) / width).max(0.0));
        let canyon = smoothstep(((-selector - threshold) / width).max(0.0));
        let plains = (1.0 - mountain - canyon).max(0.0);

        BlendWeights {
            mountain,
            canyon,
            plains,
        }
    }

    /// Synthesizes the seabed height at a column, clamped to the
    /// configured `[min_height, max_height]`.
    #[must_use]
    pub fn seabed_height(&self, x: f64, z: f64) -> f64 {
        self.seabed_height_capped(x, z, u32::MAX)
    }

    /// Reduced-octave variant used by the spike smoother's neighborhood
    /// probes: same blend, cheaper fractal sums.
    #[must_use]
    pub fn seabed_height_probe(&self, x: f64, z: f64, octave_cap: u32) -> f64 {
        self.seabed_height_capped(x, z, octave_cap)
    }

    fn seabed_height_capped(&self, x: f64, z: f64, octave_cap: u32) -> f64 {
        let channels = &self.channels;

        let base = self.continental_base_capped(x, z, octave_cap);
        let regional =
            self.noise.fbm_capped(x, z, &channels.regional, octave_cap) * channels.regional.amplitude;
        let detail =
            self.noise.fbm_capped(x, z, &channels.detail, octave_cap) * channels.detail.amplitude;
        let mountain =
            self.noise.fbm_capped(x, z, &channels.mountain, octave_cap) * channels.mountain.amplitude;
        let canyon = -(self.noise.fbm_capped(x, z, &channels.canyon, octave_cap)
            * channels.canyon.amplitude)
            .abs()
            * CANYON_STEEPNESS;

        let weights = self.blend_weights_capped(x, z, octave_cap);

        let height = base
            + regional * channels.regional_weight
            + detail * channels.detail_weight
            + mountain * weights.mountain * channels.mountain_weight
            + canyon * weights.canyon * channels.canyon_weight;

        height.clamp(f64::from(channels.min_height), f64::from(channels.max_height))
    }
}

/// Cubic smoothstep `3t^2 - 2t^3` with the input clamped to [0, 1].
#[inline]
fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
