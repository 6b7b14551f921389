//! # Block Sinks
//!
//! The generation passes never talk to world storage directly: they
//! write through the [`BlockSink`] trait, one local `(x, y, z)` at a
//! time. [`ChunkBuffer`] is the in-memory implementation used by the
//! convenience path and by every test; a host embedding the engine
//! implements the trait over its own chunk representation.

use raftgen_core::{Material, CHUNK_SIZE};

/// Write/read access to one chunk's worth of voxels.
///
/// Coordinates are chunk-local: `x` and `z` in `[0, 16)`, `y` in
/// `[0, world_height)`. Callers stay inside those ranges by
/// construction; implementations are not required to tolerate anything
/// else.
pub trait BlockSink {
    /// Sets the material at a local position.
    fn write(&mut self, x: i32, y: i32, z: i32, material: Material);

    /// Reads the material at a local position.
    ///
    /// The decoration pass reads back what the base pass wrote (surface
    /// scans, neighbor slopes), so a sink must return what was last
    /// written.
    fn read(&self, x: i32, y: i32, z: i32) -> Material;
}

/// Dense in-memory chunk: `world_height * 16 * 16` material tags.
///
/// Fresh buffers are all [`Material::Air`]. Equality is voxel-wise,
/// which is what the determinism tests compare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBuffer {
    world_height: i32,
    blocks: Vec<Material>,
}

impl ChunkBuffer {
    /// Creates an all-air buffer for the given world height.
    #[must_use]
    pub fn new(world_height: i32) -> Self {
        let size = CHUNK_SIZE as usize;
        Self {
            world_height,
            blocks: vec![Material::Air; world_height as usize * size * size],
        }
    }

    /// Returns the number of Y levels in the buffer.
    #[inline]
    #[must_use]
    pub const fn world_height(&self) -> i32 {
        self.world_height
    }

    /// Counts voxels matching a predicate - handy for terrain statistics.
    #[must_use]
    pub fn count_matching(&self, predicate: impl Fn(Material) -> bool) -> usize {
        self.blocks.iter().copied().filter(|&m| predicate(m)).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!((0..CHUNK_SIZE).contains(&x), "local x {x} out of range");
        debug_assert!((0..CHUNK_SIZE).contains(&z), "local z {z} out of range");
        debug_assert!((0..self.world_height).contains(&y), "y {y} out of range");
        (y as usize * CHUNK_SIZE as usize + z as usize) * CHUNK_SIZE as usize + x as usize
    }
}

impl BlockSink for ChunkBuffer {
    #[inline]
    fn write(&mut self, x: i32, y: i32, z: i32, material: Material) {
        let index = self.index(x, y, z);
        self.blocks[index] = material;
    }

    #[inline]
    fn read(&self, x: i32, y: i32, z: i32) -> Material {
        self.blocks[self.index(x, y, z)]
    }
}
