//! # Material Tags
//!
//! Every voxel in a generated column carries exactly one material tag.
//!
//! The set covers the ocean-world palette: bedrock floor, the
//! deepslate/stone families with their ore variants, the seabed surface
//! caps (sand, gravel, clay), water, and the decoration materials placed
//! by the feature pass (corals, seagrass). Raft platforms are oak planks.

use serde::{Deserialize, Serialize};

/// A voxel material tag.
///
/// Stored as a `u16` discriminant so a full chunk column packs densely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Material {
    /// Empty space.
    #[default]
    Air = 0,
    /// Ocean water, fills from the seabed surface up to sea level.
    Water = 1,
    /// Unbreakable world floor.
    Bedrock = 2,
    /// Baseline mid-layer rock.
    Stone = 3,
    /// Baseline deep-layer rock (below Y=10).
    Deepslate = 4,
    /// Mid-layer rock variant found under high seabeds.
    Andesite = 5,
    /// Mid-layer rock variant found under deep trenches.
    Tuff = 6,
    /// Common ore sprinkled through the mid layer.
    CoalOre = 7,
    /// Rarer mid-layer ore, only above Y=15.
    IronOre = 8,
    /// Deep-trench variant of iron ore.
    DeepslateIronOre = 9,
    /// Rarest deep-trench ore.
    DeepslateDiamondOre = 10,
    /// Seabed surface cap for upper-mid heights.
    Gravel = 11,
    /// Default seabed surface cap.
    Sand = 12,
    /// Seabed surface cap for the deepest floors.
    Clay = 13,
    /// Raft platform material.
    OakPlanks = 14,
    /// Seabed vegetation placed by the decoration pass.
    Seagrass = 15,
    /// Warm-water coral variant.
    TubeCoral = 16,
    /// Warm-water coral variant.
    BrainCoral = 17,
    /// Warm-water coral variant.
    BubbleCoral = 18,
    /// Warm-water coral variant.
    FireCoral = 19,
    /// Warm-water coral variant.
    HornCoral = 20,
}

impl Material {
    /// The five coral blocks the shallow-band decoration pass picks from.
    pub const CORALS: [Self; 5] = [
        Self::TubeCoral,
        Self::BrainCoral,
        Self::BubbleCoral,
        Self::FireCoral,
        Self::HornCoral,
    ];

    /// Returns the raw discriminant.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Converts from a raw discriminant. Unknown ids map to `Air`.
    #[must_use]
    pub const fn from_id(id: u16) -> Self {
        match id {
            1 => Self::Water,
            2 => Self::Bedrock,
            3 => Self::Stone,
            4 => Self::Deepslate,
            5 => Self::Andesite,
            6 => Self::Tuff,
            7 => Self::CoalOre,
            8 => Self::IronOre,
            9 => Self::DeepslateIronOre,
            10 => Self::DeepslateDiamondOre,
            11 => Self::Gravel,
            12 => Self::Sand,
            13 => Self::Clay,
            14 => Self::OakPlanks,
            15 => Self::Seagrass,
            16 => Self::TubeCoral,
            17 => Self::BrainCoral,
            18 => Self::BubbleCoral,
            19 => Self::FireCoral,
            20 => Self::HornCoral,
            _ => Self::Air,
        }
    }

    /// Returns true if this is empty space.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns true if this is water.
    #[inline]
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::Water)
    }

    /// Returns true for any material that occupies its voxel solidly.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Air | Self::Water | Self::Seagrass)
    }

    /// Returns true for materials the decoration pass treats as a seabed
    /// surface when scanning a column top-down.
    #[inline]
    #[must_use]
    pub const fn is_seabed_surface(self) -> bool {
        matches!(self, Self::Sand | Self::Gravel | Self::Clay | Self::Stone)
    }
}
