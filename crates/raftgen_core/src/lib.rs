//! # RaftGen Core
//!
//! Shared leaf types for the RaftGen world generator.
//!
//! ## Contents
//!
//! - [`Material`]: one tag per voxel the generator can place
//! - [`ChunkCoord`]: chunk grid coordinate math
//! - [`WorldConfig`]: immutable engine configuration, loaded once at startup
//! - [`ConfigError`]: construction-time faults
//!
//! ## Design Principles
//!
//! 1. **No generation logic**: this crate holds data, not algorithms
//! 2. **Immutable after construction**: configuration is fixed at world
//!    creation and never mutated by the engine
//! 3. **Fail fast**: invalid configuration is rejected before any column
//!    is generated, never mid-chunk

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod coords;
pub mod error;
pub mod material;

pub use config::{NoiseChannel, RaftConfig, SmootherConfig, TerrainChannels, WorldConfig};
pub use coords::{ChunkCoord, CHUNK_SIZE};
pub use error::{ConfigError, ConfigResult};
pub use material::Material;
