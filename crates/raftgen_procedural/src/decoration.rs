//! # Seabed Decoration
//!
//! Places life and relief on the materialized ocean floor: coral and
//! seagrass in the photic shallows, sparse seagrass at mid depths, rock
//! pillars and water-scoured pits in the abyss.
//!
//! This is the one pass that consumes an external [`Rng`]. Everything
//! before it is a pure function of seed and coordinates; decoration is
//! cosmetic and explicitly allowed to differ between regenerations, so
//! it takes whatever random stream the host hands it.
//!
//! Placement density is scaled down on slopes: the pass reads the
//! already-written column heights of the eight in-chunk neighbors,
//! estimates the local gradient, and thins or skips decoration where the
//! floor is steep.

use rand::Rng;
use raftgen_core::{Material, CHUNK_SIZE};

use crate::column::taper_probability;
use crate::noise::LatticeNoise;
use crate::sink::BlockSink;

/// Decoration never scans or carves below this level.
const SCAN_FLOOR: i32 = 5;
/// Neighbor surface search range when estimating slope.
const SLOPE_SEARCH_RANGE: i32 = 10;
/// Slope below which decoration runs at full density.
const FLAT_SLOPE: f64 = 0.2;
/// Slope above which decoration is skipped entirely.
const STEEP_SLOPE: f64 = 0.5;

/// Maximum depth of the coral shallows.
const SHALLOW_DEPTH: i32 = 12;
/// Maximum depth of the sparse-seagrass mid band.
const MID_DEPTH: i32 = 25;
/// Seagrass needs at least this much water above the floor.
const SEAGRASS_MIN_DEPTH: i32 = 4;

/// Channel offset of the abyssal feature noise.
const FEATURE_OFFSET: i64 = 150_000;
/// Frequency of the abyssal feature noise.
const FEATURE_FREQUENCY: f64 = 0.003;

/// Decorates materialized ocean columns.
#[derive(Clone, Copy, Debug)]
pub struct Decorator {
    noise: LatticeNoise,
    sea_level: i32,
}

impl Decorator {
    /// Creates a decorator for a validated world configuration.
    #[must_use]
    pub const fn new(noise: LatticeNoise, sea_level: i32) -> Self {
        Self { noise, sea_level }
    }

    /// Decorates one column of an already-materialized chunk.
    ///
    /// A no-op when the column has no exposed seabed surface (raft
    /// columns, columns capped above sea level).
    pub fn decorate_column<S: BlockSink, R: Rng>(
        &self,
        sink: &mut S,
        rng: &mut R,
        local_x: i32,
        local_z: i32,
        world_x: i32,
        world_z: i32,
    ) {
        let Some(surface_y) = self.find_surface(sink, local_x, local_z) else {
            return;
        };

        let slope = self.local_slope(sink, local_x, local_z, surface_y);
        let density = if slope < FLAT_SLOPE {
            1.0
        } else if slope < STEEP_SLOPE {
            0.4
        } else {
            return;
        };

        let depth = self.sea_level - surface_y;
        if depth <= SHALLOW_DEPTH {
            self.decorate_shallow(sink, rng, local_x, local_z, surface_y, depth, density);
        } else if depth <= MID_DEPTH {
            if rng.gen::<f64>() < 0.25 * density {
                self.place_seagrass(sink, local_x, local_z, surface_y, 1);
            }
        } else {
            self.decorate_abyss(sink, rng, local_x, local_z, world_x, world_z, surface_y, density);
        }
    }

    /// Topmost seabed surface below sea level, if any.
    fn find_surface<S: BlockSink>(&self, sink: &S, local_x: i32, local_z: i32) -> Option<i32> {
        (SCAN_FLOOR..self.sea_level)
            .rev()
            .find(|&y| sink.read(local_x, y, local_z).is_seabed_surface())
    }

    /// Mean absolute height gradient toward the in-chunk neighbors,
    /// normalized so typical flat ocean floor lands well under 1.
    fn local_slope<S: BlockSink>(
        &self,
        sink: &S,
        local_x: i32,
        local_z: i32,
        surface_y: i32,
    ) -> f64 {
        let mut total = 0.0;
        let mut samples = 0u32;

        for dx in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                let nx = (local_x + dx).clamp(0, CHUNK_SIZE - 1);
                let nz = (local_z + dz).clamp(0, CHUNK_SIZE - 1);
                if nx == local_x && nz == local_z {
                    continue;
                }

                let Some(neighbor_y) = self.neighbor_surface(sink, nx, nz, surface_y) else {
                    continue;
                };
                let distance = f64::from(dx * dx + dz * dz).sqrt();
                total += f64::from((neighbor_y - surface_y).abs()) / distance;
                samples += 1;
            }
        }

        if samples == 0 {
            0.0
        } else {
            total / f64::from(samples) / 3.0
        }
    }

    /// Neighbor surface search, limited to a window around the center
    /// column's height.
    fn neighbor_surface<S: BlockSink>(
        &self,
        sink: &S,
        local_x: i32,
        local_z: i32,
        center_y: i32,
    ) -> Option<i32> {
        let top = (center_y + SLOPE_SEARCH_RANGE).min(self.sea_level - 1);
        let bottom = (center_y - SLOPE_SEARCH_RANGE).max(SCAN_FLOOR);
        (bottom..=top)
            .rev()
            .find(|&y| sink.read(local_x, y, local_z).is_seabed_surface())
    }

    /// Shallow band: coral heads, else seagrass meadows.
    #[allow(clippy::too_many_arguments)]
    fn decorate_shallow<S: BlockSink, R: Rng>(
        &self,
        sink: &mut S,
        rng: &mut R,
        local_x: i32,
        local_z: i32,
        surface_y: i32,
        depth: i32,
        density: f64,
    ) {
        if rng.gen::<f64>() < 0.15 * density && surface_y + 1 < self.sea_level {
            let coral = Material::CORALS[rng.gen_range(0..Material::CORALS.len())];
            sink.write(local_x, surface_y + 1, local_z, coral);
        } else if depth > SEAGRASS_MIN_DEPTH && rng.gen::<f64>() < 0.4 * density {
            let height = 1 + rng.gen_range(0..2);
            self.place_seagrass(sink, local_x, local_z, surface_y, height);
        }
    }

    /// Abyssal band: noise-gated rock pillars and water-scoured pits.
    #[allow(clippy::too_many_arguments)]
    fn decorate_abyss<S: BlockSink, R: Rng>(
        &self,
        sink: &mut S,
        rng: &mut R,
        local_x: i32,
        local_z: i32,
        world_x: i32,
        world_z: i32,
        surface_y: i32,
        density: f64,
    ) {
        let feature = self.noise.sample(
            f64::from(world_x),
            f64::from(world_z),
            FEATURE_FREQUENCY,
            FEATURE_OFFSET,
        );

        if feature > 0.3 && rng.gen::<f64>() < taper_probability(feature, 0.3, 0.3) * density {
            let height = 3 + rng.gen_range(0..12);
            for step in 1..=height {
                let y = surface_y + step;
                if y >= self.sea_level - 1 {
                    break;
                }
                sink.write(local_x, y, local_z, Self::pillar_material(rng, y));
            }
        } else if feature < -0.3
            && rng.gen::<f64>() < taper_probability(feature, -0.3, 0.25) * density
        {
            let depth = 3 + rng.gen_range(0..15);
            for step in 1..=depth {
                let y = surface_y - step;
                if y < SCAN_FLOOR {
                    break;
                }
                sink.write(local_x, y, local_z, Material::Water);
            }
        }
    }

    /// Pillar body material: mostly stone, streaked with gravel and, at
    /// height, andesite.
    fn pillar_material<R: Rng>(rng: &mut R, y: i32) -> Material {
        let roll = rng.gen::<f64>();
        if roll < 0.1 {
            Material::Gravel
        } else if roll < 0.4 && y > 40 {
            Material::Andesite
        } else {
            Material::Stone
        }
    }

    /// Seagrass tuft growing up from the surface, capped below sea level.
    fn place_seagrass<S: BlockSink>(
        &self,
        sink: &mut S,
        local_x: i32,
        local_z: i32,
        surface_y: i32,
        height: i32,
    ) {
        for step in 1..=height {
            let y = surface_y + step;
            if y >= self.sea_level {
                break;
            }
            sink.write(local_x, y, local_z, Material::Seagrass);
        }
    }
}
