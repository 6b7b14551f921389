//! # Chunk Generation
//!
//! The top-level entry point. A [`RaftGenerator`] is built once per
//! world from a seed and a validated configuration, then generates any
//! chunk, in any order, on any thread.
//!
//! Generation runs in passes over a [`BlockSink`]:
//!
//! 1. **Base terrain** - raft plot columns get the fixed platform
//!    profile, everything else gets synthesized, smoothed, materialized
//!    ocean floor. Pure function of seed and coordinates.
//! 2. **Decoration** - cosmetic seabed features, fed by the caller's
//!    random stream. The only pass allowed to differ between runs.
//! 3. **Floor** - bedrock safety net over the bottom levels, with a
//!    hash-rolled ragged third layer.
//!
//! The base and floor passes are idempotent and bit-deterministic:
//! regenerating a chunk reproduces it exactly.

use rand::Rng;
use raftgen_core::{ChunkCoord, ConfigResult, Material, WorldConfig, CHUNK_SIZE};

use crate::column::ColumnMaterializer;
use crate::decoration::Decorator;
use crate::field::TerrainField;
use crate::noise::LatticeNoise;
use crate::raft::{RaftGrid, RaftPlot};
use crate::sink::{BlockSink, ChunkBuffer};
use crate::smoother::SpikeSmoother;

/// Deepslate/stone split level inside raft platform columns.
const PLOT_DEEP_TOP: i32 = 10;
/// Roll salt of the ragged third floor layer.
const SALT_FLOOR: i64 = 8;
/// Probability of the ragged third floor layer.
const FLOOR_LAYER_CHANCE: f64 = 0.3;

/// Deterministic world generator for the raft ocean.
///
/// Holds no mutable state; all of `&self` generation is safe to share
/// across threads.
#[derive(Clone, Debug)]
pub struct RaftGenerator {
    seed: i64,
    noise: LatticeNoise,
    config: WorldConfig,
    field: TerrainField,
    smoother: SpikeSmoother,
    materializer: ColumnMaterializer,
    decorator: Decorator,
    grid: RaftGrid,
}

impl RaftGenerator {
    /// Builds a generator from a world seed and configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration fault; a constructed generator
    /// can never fail mid-chunk.
    pub fn new(seed: i64, config: WorldConfig) -> ConfigResult<Self> {
        config.validate()?;

        let noise = LatticeNoise::new(seed);
        tracing::debug!(
            seed,
            sea_level = config.sea_level,
            world_height = config.world_height,
            plots = config.raft.count,
            "raft world generator constructed"
        );

        Ok(Self {
            seed,
            noise,
            field: TerrainField::new(noise, config.terrain),
            smoother: SpikeSmoother::new(config.smoother),
            materializer: ColumnMaterializer::new(noise, config.sea_level, config.world_height),
            decorator: Decorator::new(noise, config.sea_level),
            grid: RaftGrid::new(&config.raft),
            config,
        })
    }

    /// The world seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// The validated world configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The raft plot layout.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &RaftGrid {
        &self.grid
    }

    /// The raft plot closest to a world column.
    #[must_use]
    pub fn nearest_plot(&self, world_x: i32, world_z: i32) -> RaftPlot {
        self.grid.nearest_plot(world_x, world_z)
    }

    /// Base terrain pass: every column of the chunk, every Y level
    /// assigned. Pure function of seed and chunk coordinate.
    pub fn generate_terrain<S: BlockSink>(&self, chunk: ChunkCoord, sink: &mut S) {
        tracing::trace!(chunk_x = chunk.x, chunk_z = chunk.z, "generating base terrain");

        for local_x in 0..CHUNK_SIZE {
            for local_z in 0..CHUNK_SIZE {
                let world_x = chunk.world_x() + local_x;
                let world_z = chunk.world_z() + local_z;

                if self.grid.is_plot_column(world_x, world_z) {
                    self.write_plot_column(sink, local_x, local_z);
                } else {
                    self.write_ocean_column(sink, local_x, local_z, world_x, world_z);
                }
            }
        }
    }

    /// Decoration pass over a base-generated chunk. Raft plot columns
    /// are left untouched.
    pub fn generate_decorations<S: BlockSink, R: Rng>(
        &self,
        chunk: ChunkCoord,
        sink: &mut S,
        rng: &mut R,
    ) {
        for local_x in 0..CHUNK_SIZE {
            for local_z in 0..CHUNK_SIZE {
                let world_x = chunk.world_x() + local_x;
                let world_z = chunk.world_z() + local_z;
                if !self.grid.is_plot_column(world_x, world_z) {
                    self.decorator
                        .decorate_column(sink, rng, local_x, local_z, world_x, world_z);
                }
            }
        }
    }

    /// Floor pass: bedrock at Y=0-1 everywhere, plus a hash-rolled
    /// ragged layer at Y=2. Runs last so nothing can carve through it.
    pub fn generate_floor<S: BlockSink>(&self, chunk: ChunkCoord, sink: &mut S) {
        for local_x in 0..CHUNK_SIZE {
            for local_z in 0..CHUNK_SIZE {
                let world_x = chunk.world_x() + local_x;
                let world_z = chunk.world_z() + local_z;

                sink.write(local_x, 0, local_z, Material::Bedrock);
                sink.write(local_x, 1, local_z, Material::Bedrock);

                let roll = self
                    .noise
                    .position_roll(i64::from(world_x), 2, i64::from(world_z), SALT_FLOOR);
                if roll < FLOOR_LAYER_CHANCE {
                    sink.write(local_x, 2, local_z, Material::Bedrock);
                }
            }
        }
    }

    /// Cave pass. The ocean world keeps its floor watertight, so this
    /// deliberately places nothing; the hook exists so hosts can run the
    /// same pass sequence as for land worlds.
    pub fn generate_caves<S: BlockSink>(&self, _chunk: ChunkCoord, _sink: &mut S) {}

    /// Convenience path: runs all passes into a fresh [`ChunkBuffer`].
    #[must_use]
    pub fn generate<R: Rng>(&self, chunk: ChunkCoord, rng: &mut R) -> ChunkBuffer {
        let mut buffer = ChunkBuffer::new(self.config.world_height);
        self.generate_terrain(chunk, &mut buffer);
        self.generate_decorations(chunk, &mut buffer, rng);
        self.generate_caves(chunk, &mut buffer);
        self.generate_floor(chunk, &mut buffer);
        buffer
    }

    /// Fixed raft platform column: rock core, sand underlayer, plank
    /// deck at the platform height, water up to sea level.
    fn write_plot_column<S: BlockSink>(&self, sink: &mut S, local_x: i32, local_z: i32) {
        let platform = self.config.raft.platform_height;
        let sea_level = self.config.sea_level;

        sink.write(local_x, 0, local_z, Material::Bedrock);
        sink.write(local_x, 1, local_z, Material::Bedrock);

        for y in 2..=(platform - 2) {
            let rock = if y < PLOT_DEEP_TOP {
                Material::Deepslate
            } else {
                Material::Stone
            };
            sink.write(local_x, y, local_z, rock);
        }
        sink.write(local_x, platform - 1, local_z, Material::Sand);
        sink.write(local_x, platform, local_z, Material::OakPlanks);

        for y in (platform + 1)..=sea_level {
            sink.write(local_x, y, local_z, Material::Water);
        }
        for y in (platform.max(sea_level) + 1)..self.config.world_height {
            sink.write(local_x, y, local_z, Material::Air);
        }
    }

    /// Ocean column: synthesize, smooth, round into the height bounds,
    /// materialize.
    fn write_ocean_column<S: BlockSink>(
        &self,
        sink: &mut S,
        local_x: i32,
        local_z: i32,
        world_x: i32,
        world_z: i32,
    ) {
        let x = f64::from(world_x);
        let z = f64::from(world_z);

        let raw = self.field.seabed_height(x, z);
        let smoothed = self.smoother.smooth(&self.field, x, z, raw);

        #[allow(clippy::cast_possible_truncation)]
        let seabed = (smoothed.round() as i32)
            .clamp(self.config.terrain.min_height, self.config.terrain.max_height);

        self.materializer
            .materialize(sink, local_x, local_z, world_x, world_z, seabed);
    }
}
