//! # RaftGen Procedural
//!
//! Deterministic world generation for the raft ocean: an endless
//! abyssal seafloor with selector-blended mountain and canyon regions,
//! and a bounded diagonal corridor of flat raft habitation plots.
//!
//! ## Pipeline
//!
//! ```text
//! seed + config
//!   -> LatticeNoise        stateless hash-lattice value noise
//!   -> TerrainField        six fractal channels blended per column
//!   -> SpikeSmoother       single-column artifact suppression
//!   -> ColumnMaterializer  heights into material columns
//!   -> Decorator           coral, seagrass, pillars (rng-fed)
//!   -> RaftGenerator       plot layout + pass orchestration
//! ```
//!
//! ## Determinism Contract
//!
//! The base terrain and floor passes are pure functions of
//! `(seed, chunk coordinate)`: no stream RNG, no shared state, no
//! generation-order dependence. Only the decoration pass consumes a
//! caller-supplied [`rand::Rng`], and it runs strictly after the base
//! pass, so the structural world is bit-identical on every regeneration
//! and every thread.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Terrain math converts between ints and floats constantly; these
// pedantic lints would bury the real signal.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod column;
pub mod decoration;
pub mod field;
pub mod generator;
pub mod noise;
pub mod raft;
pub mod sink;
pub mod smoother;

pub use column::ColumnMaterializer;
pub use decoration::Decorator;
pub use field::{BlendWeights, TerrainField};
pub use generator::RaftGenerator;
pub use noise::LatticeNoise;
pub use raft::{RaftGrid, RaftPlot};
pub use sink::{BlockSink, ChunkBuffer};
pub use smoother::SpikeSmoother;
