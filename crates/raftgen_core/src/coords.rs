//! # Chunk Coordinates
//!
//! The world is generated in fixed-size chunks of 16x16 columns.
//! Chunk coordinates address the chunk grid; block coordinates address
//! individual columns.

/// Chunk width/depth in columns.
pub const CHUNK_SIZE: i32 = 16;

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not blocks).
    pub x: i32,
    /// Z coordinate (in chunks, not blocks).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts world block coordinates to the containing chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn from_block_pos(block_x: i32, block_z: i32) -> Self {
        Self {
            x: block_x.div_euclid(CHUNK_SIZE),
            z: block_z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Returns the world X coordinate of the chunk's origin corner.
    #[inline]
    #[must_use]
    pub const fn world_x(self) -> i32 {
        self.x * CHUNK_SIZE
    }

    /// Returns the world Z coordinate of the chunk's origin corner.
    #[inline]
    #[must_use]
    pub const fn world_z(self) -> i32 {
        self.z * CHUNK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_coord_from_block() {
        assert_eq!(ChunkCoord::from_block_pos(0, 0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_block_pos(15, 15), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_block_pos(16, 16), ChunkCoord::new(1, 1));
        assert_eq!(ChunkCoord::from_block_pos(-1, -1), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_block_pos(-16, -16), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_block_pos(-17, -17), ChunkCoord::new(-2, -2));
    }

    #[test]
    fn test_world_origin() {
        let coord = ChunkCoord::new(3, -2);
        assert_eq!(coord.world_x(), 48);
        assert_eq!(coord.world_z(), -32);
    }
}
