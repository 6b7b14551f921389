//! # Spike Smoother
//!
//! Adjacent columns are synthesized independently, and after integer
//! rounding and clamping they can disagree sharply enough to leave
//! single-column spikes on the ocean floor. This pass probes a small
//! ring of offset coordinates around the target with a reduced-octave
//! version of the terrain field, and when the raw height strays from the
//! ring average by more than the configured threshold it is pulled
//! halfway back toward that average.
//!
//! The correction is a pure function of neighbor *samples* - it never
//! reads materialized blocks - so determinism is preserved.

use raftgen_core::SmootherConfig;

use crate::field::TerrainField;

/// Neighbor-aware single-column spike suppression.
#[derive(Clone, Copy, Debug)]
pub struct SpikeSmoother {
    config: SmootherConfig,
}

impl SpikeSmoother {
    /// Creates a smoother with the given tuning.
    #[must_use]
    pub const fn new(config: SmootherConfig) -> Self {
        Self { config }
    }

    /// Returns the smoother tuning.
    #[must_use]
    pub const fn config(&self) -> &SmootherConfig {
        &self.config
    }

    /// Average probed height over the 8-point ring around the column.
    #[must_use]
    pub fn neighborhood_average(&self, field: &TerrainField, x: f64, z: f64) -> f64 {
        let r = f64::from(self.config.ring_radius);
        let mut total = 0.0;
        let mut samples = 0u32;

        for dx in [-r, 0.0, r] {
            for dz in [-r, 0.0, r] {
                if dx == 0.0 && dz == 0.0 {
                    continue;
                }
                total += field.seabed_height_probe(x + dx, z + dz, self.config.probe_octaves);
                samples += 1;
            }
        }

        total / f64::from(samples)
    }

    /// Applies the correction to a raw synthesized height.
    ///
    /// Fires only when `|raw - average|` exceeds the threshold, and moves
    /// the height exactly halfway toward the ring average, so the
    /// post-smoothing deviation is at most half the pre-smoothing one.
    #[must_use]
    pub fn smooth(&self, field: &TerrainField, x: f64, z: f64, raw: f64) -> f64 {
        let average = self.neighborhood_average(field, x, z);
        let deviation = raw - average;

        if deviation.abs() > self.config.threshold {
            raw - deviation * 0.5
        } else {
            raw
        }
    }
}
