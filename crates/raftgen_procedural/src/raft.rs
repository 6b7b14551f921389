//! # Raft Plot Grid
//!
//! Habitation plots are laid out on a bounded diagonal corridor: plot
//! `i` is centered at `(i * spacing, i * spacing)` for `i` in
//! `[0, count)`. Each plot's footprint is the 3x3 block of columns with
//! Chebyshev distance at most 1 from its center.
//!
//! Both queries are closed-form. Membership only needs the handful of
//! indices whose center could be within footprint range of the column,
//! and nearest-plot minimizes a quadratic in the index, so the optimum
//! is one of the two integers bracketing the diagonal projection
//! `(x + z) / (2 * spacing)`.

use raftgen_core::RaftConfig;

/// One enumerated habitation plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaftPlot {
    /// Position of the plot on the diagonal, in `[0, count)`.
    pub index: u32,
    /// World X of the plot center.
    pub center_x: i32,
    /// World Z of the plot center.
    pub center_z: i32,
}

/// The bounded diagonal grid of raft plots.
#[derive(Clone, Copy, Debug)]
pub struct RaftGrid {
    spacing: i32,
    count: u32,
}

impl RaftGrid {
    /// Chebyshev radius of a plot footprint.
    pub const FOOTPRINT_RADIUS: i32 = 1;

    /// Creates the grid from a validated layout configuration.
    #[must_use]
    pub const fn new(config: &RaftConfig) -> Self {
        Self {
            spacing: config.spacing,
            count: config.count,
        }
    }

    /// Number of enumerated plots.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The plot at an index. Callers keep `index < count`.
    #[must_use]
    pub fn plot(&self, index: u32) -> RaftPlot {
        debug_assert!(index < self.count);
        let center = index as i32 * self.spacing;
        RaftPlot {
            index,
            center_x: center,
            center_z: center,
        }
    }

    /// Whether a world column lies inside any plot footprint.
    #[must_use]
    pub fn is_plot_column(&self, world_x: i32, world_z: i32) -> bool {
        // Only indices whose center is near world_x can qualify; check
        // the candidate and its immediate neighbors so degenerate tiny
        // spacings stay correct.
        let candidate = Self::nearest_multiple(world_x, self.spacing);
        for index in (candidate - 1)..=(candidate + 1) {
            if index < 0 || index >= i64::from(self.count) {
                continue;
            }
            let center = index as i32 * self.spacing;
            if (world_x - center).abs() <= Self::FOOTPRINT_RADIUS
                && (world_z - center).abs() <= Self::FOOTPRINT_RADIUS
            {
                return true;
            }
        }
        false
    }

    /// The plot whose center is closest to a world column. Ties go to
    /// the lower index; coordinates beyond the corridor clamp to the
    /// first or last plot.
    #[must_use]
    pub fn nearest_plot(&self, world_x: i32, world_z: i32) -> RaftPlot {
        let last = i64::from(self.count - 1);
        let projected = (f64::from(world_x) + f64::from(world_z))
            / (2.0 * f64::from(self.spacing));
        #[allow(clippy::cast_possible_truncation)]
        let low = (projected.floor() as i64).clamp(0, last);
        let high = (low + 1).min(last);

        let distance = |index: i64| -> i64 {
            let center = index * i64::from(self.spacing);
            let dx = i64::from(world_x) - center;
            let dz = i64::from(world_z) - center;
            dx * dx + dz * dz
        };

        let best = if distance(high) < distance(low) { high } else { low };
        #[allow(clippy::cast_possible_truncation)]
        let best = best as u32;
        self.plot(best)
    }

    /// Nearest integer multiple index of `value / spacing`.
    fn nearest_multiple(value: i32, spacing: i32) -> i64 {
        let value = i64::from(value);
        let spacing = i64::from(spacing);
        (value + spacing.div_euclid(2)).div_euclid(spacing)
    }
}
