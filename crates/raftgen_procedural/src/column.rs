//! # Column Materialization
//!
//! Turns one integer seabed height into a full ocean column: bedrock
//! floor, deepslate depths, stone mid-layer with ore and rock-variant
//! sprinkles, a banded surface cap, water up to sea level, air above.
//!
//! Material selection combines a column-keyed noise sample with a
//! position-hash roll, so regenerating the same chunk reproduces the
//! exact same ores. Probabilities taper linearly with distance from the
//! noise threshold, which clusters ore into soft pockets instead of
//! uniform static.

use raftgen_core::Material;

use crate::noise::LatticeNoise;
use crate::sink::BlockSink;

/// Top of the deepslate layer.
const DEEP_LAYER_TOP: i32 = 10;
/// Seabeds below this are trenches and get the deep-trench ore set.
const TRENCH_CEILING: i32 = 15;
/// Seabeds above this are highlands and get andesite intrusions.
const HIGHLAND_FLOOR: i32 = 40;
/// Iron ore never spawns at or below this level.
const IRON_MIN_Y: i32 = 15;

/// Channel offset of the deep-layer ore noise.
const DEEP_ORE_OFFSET: i64 = 120_000;
/// Channel offset of the mid-layer rock-variant noise.
const MID_ROCK_OFFSET: i64 = 130_000;

/// Frequency of the deep-layer ore noise.
const DEEP_ORE_FREQUENCY: f64 = 0.05;
/// Frequency of the mid-layer rock-variant noise.
const MID_ROCK_FREQUENCY: f64 = 0.03;

/// Roll salts, one per independent material decision.
const SALT_DIAMOND: i64 = 1;
const SALT_DEEP_IRON: i64 = 2;
const SALT_ANDESITE: i64 = 3;
const SALT_TUFF: i64 = 4;
const SALT_COAL: i64 = 5;
const SALT_IRON: i64 = 6;
const SALT_SURFACE: i64 = 7;

/// Probability that tapers linearly from `base` at the threshold to zero
/// half a unit away from it.
#[must_use]
pub(crate) fn taper_probability(noise: f64, threshold: f64, base: f64) -> f64 {
    base * (1.0 - 2.0 * (noise - threshold).abs()).max(0.0)
}

/// Writes full ocean columns given their seabed heights.
#[derive(Clone, Copy, Debug)]
pub struct ColumnMaterializer {
    noise: LatticeNoise,
    sea_level: i32,
    world_height: i32,
}

impl ColumnMaterializer {
    /// Creates a materializer for a validated world configuration.
    #[must_use]
    pub const fn new(noise: LatticeNoise, sea_level: i32, world_height: i32) -> Self {
        Self {
            noise,
            sea_level,
            world_height,
        }
    }

    /// Writes one ocean column into the sink, every Y level in
    /// `[0, world_height)` exactly once, bottom to top.
    ///
    /// `seabed` is the already-smoothed integer surface height and must
    /// lie within the validated terrain bounds (so at least 2).
    pub fn materialize<S: BlockSink>(
        &self,
        sink: &mut S,
        local_x: i32,
        local_z: i32,
        world_x: i32,
        world_z: i32,
        seabed: i32,
    ) {
        // Guaranteed bedrock floor; the floor pass may thicken it at Y=2.
        sink.write(local_x, 0, local_z, Material::Bedrock);
        sink.write(local_x, 1, local_z, Material::Bedrock);

        for y in 2..DEEP_LAYER_TOP.min(seabed) {
            sink.write(local_x, y, local_z, self.deep_material(world_x, y, world_z, seabed));
        }
        for y in DEEP_LAYER_TOP..seabed {
            sink.write(local_x, y, local_z, self.mid_material(world_x, y, world_z, seabed));
        }

        sink.write(local_x, seabed, local_z, self.surface_material(world_x, world_z, seabed));

        for y in (seabed + 1)..=self.sea_level {
            sink.write(local_x, y, local_z, Material::Water);
        }
        for y in (seabed.max(self.sea_level) + 1)..self.world_height {
            sink.write(local_x, y, local_z, Material::Air);
        }
    }

    /// Deep layer: deepslate, with diamond and iron variants inside
    /// trenches only.
    fn deep_material(&self, x: i32, y: i32, z: i32, seabed: i32) -> Material {
        if seabed < TRENCH_CEILING {
            let ore = self
                .noise
                .sample(f64::from(x), f64::from(y), DEEP_ORE_FREQUENCY, DEEP_ORE_OFFSET);
            let (xi, yi, zi) = (i64::from(x), i64::from(y), i64::from(z));

            if ore > 0.3
                && self.noise.position_roll(xi, yi, zi, SALT_DIAMOND)
                    < taper_probability(ore, 0.3, 0.12)
            {
                return Material::DeepslateDiamondOre;
            }
            if ore < -0.3
                && self.noise.position_roll(xi, yi, zi, SALT_DEEP_IRON)
                    < taper_probability(ore, -0.3, 0.18)
            {
                return Material::DeepslateIronOre;
            }
        }
        Material::Deepslate
    }

    /// Mid layer: stone, cut by andesite under highlands and tuff under
    /// trenches, sprinkled with coal and iron.
    fn mid_material(&self, x: i32, y: i32, z: i32, seabed: i32) -> Material {
        let rock = self
            .noise
            .sample(f64::from(x), f64::from(y), MID_ROCK_FREQUENCY, MID_ROCK_OFFSET);
        let (xi, yi, zi) = (i64::from(x), i64::from(y), i64::from(z));

        if seabed > HIGHLAND_FLOOR
            && rock > 0.2
            && self.noise.position_roll(xi, yi, zi, SALT_ANDESITE)
                < taper_probability(rock, 0.2, 0.3)
        {
            return Material::Andesite;
        }
        if seabed < TRENCH_CEILING
            && rock > 0.1
            && self.noise.position_roll(xi, yi, zi, SALT_TUFF) < taper_probability(rock, 0.1, 0.25)
        {
            return Material::Tuff;
        }

        if self.noise.position_roll(xi, yi, zi, SALT_COAL) < 0.04 {
            return Material::CoalOre;
        }
        if y > IRON_MIN_Y && self.noise.position_roll(xi, yi, zi, SALT_IRON) < 0.02 {
            return Material::IronOre;
        }
        Material::Stone
    }

    /// Surface cap banded by seabed height, with linear blends between
    /// neighboring bands so the cap boundaries stay ragged.
    fn surface_material(&self, x: i32, z: i32, seabed: i32) -> Material {
        let roll = self
            .noise
            .position_roll(i64::from(x), i64::from(seabed), i64::from(z), SALT_SURFACE);

        if seabed > 45 {
            Material::Stone
        } else if seabed > 35 {
            // Gravel share ramps from 10% at 36 to 100% at 45
            if roll < f64::from(seabed - 35) / 10.0 {
                Material::Gravel
            } else {
                Material::Sand
            }
        } else if seabed > 20 {
            Material::Sand
        } else if seabed > 10 {
            // Clay share ramps from 0% at 20 down toward the abyss
            if roll < f64::from(20 - seabed) / 10.0 {
                Material::Clay
            } else {
                Material::Sand
            }
        } else {
            Material::Clay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ChunkBuffer;

    const SEA_LEVEL: i32 = 62;
    const WORLD_HEIGHT: i32 = 256;

    fn materializer(seed: i64) -> ColumnMaterializer {
        ColumnMaterializer::new(LatticeNoise::new(seed), SEA_LEVEL, WORLD_HEIGHT)
    }

    fn materialize_column(seed: i64, world_x: i32, world_z: i32, seabed: i32) -> ChunkBuffer {
        let mut buffer = ChunkBuffer::new(WORLD_HEIGHT);
        materializer(seed).materialize(&mut buffer, 0, 0, world_x, world_z, seabed);
        buffer
    }

    #[test]
    fn test_every_level_assigned() {
        // No level may survive as the sink's initial state by accident:
        // prefill with a sentinel the materializer never writes.
        let mut buffer = ChunkBuffer::new(WORLD_HEIGHT);
        for y in 0..WORLD_HEIGHT {
            buffer.write(0, y, 0, Material::Seagrass);
        }
        materializer(42).materialize(&mut buffer, 0, 0, 123, -456, 30);

        for y in 0..WORLD_HEIGHT {
            assert_ne!(
                buffer.read(0, y, 0),
                Material::Seagrass,
                "level {y} was never assigned"
            );
        }
    }

    #[test]
    fn test_column_structure() {
        let buffer = materialize_column(42, 1000, 2000, 30);

        assert_eq!(buffer.read(0, 0, 0), Material::Bedrock);
        assert_eq!(buffer.read(0, 1, 0), Material::Bedrock);
        for y in 2..30 {
            assert!(buffer.read(0, y, 0).is_solid(), "level {y} should be rock");
        }
        assert!(buffer.read(0, 30, 0).is_seabed_surface());
        for y in 31..=SEA_LEVEL {
            assert_eq!(buffer.read(0, y, 0), Material::Water, "level {y} should be water");
        }
        for y in (SEA_LEVEL + 1)..WORLD_HEIGHT {
            assert_eq!(buffer.read(0, y, 0), Material::Air, "level {y} should be air");
        }
    }

    #[test]
    fn test_minimum_seabed_is_total() {
        let buffer = materialize_column(42, 0, 0, 2);

        assert_eq!(buffer.read(0, 0, 0), Material::Bedrock);
        assert_eq!(buffer.read(0, 1, 0), Material::Bedrock);
        assert!(buffer.read(0, 2, 0).is_seabed_surface());
        assert_eq!(buffer.read(0, 3, 0), Material::Water);
    }

    #[test]
    fn test_deterministic() {
        let a = materialize_column(7, 333, -912, 14);
        let b = materialize_column(7, 333, -912, 14);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trench_ores_only_in_trenches() {
        // A high seabed column must never contain the deep-trench ore set.
        let mut buffer = ChunkBuffer::new(WORLD_HEIGHT);
        let materializer = materializer(42);
        for x in 0..16 {
            for z in 0..16 {
                materializer.materialize(&mut buffer, x, z, x * 31, z * 17, 44);
            }
        }

        assert_eq!(
            buffer.count_matching(|m| {
                m == Material::DeepslateDiamondOre || m == Material::DeepslateIronOre
            }),
            0
        );
        assert_eq!(buffer.count_matching(|m| m == Material::Tuff), 0);
    }

    #[test]
    fn test_andesite_only_under_highlands() {
        let mut buffer = ChunkBuffer::new(WORLD_HEIGHT);
        let materializer = materializer(42);
        for x in 0..16 {
            for z in 0..16 {
                materializer.materialize(&mut buffer, x, z, x * 13, z * 29, 20);
            }
        }

        assert_eq!(buffer.count_matching(|m| m == Material::Andesite), 0);
    }

    #[test]
    fn test_no_iron_in_low_levels() {
        let mut buffer = ChunkBuffer::new(WORLD_HEIGHT);
        let materializer = materializer(42);
        for x in 0..16 {
            for z in 0..16 {
                materializer.materialize(&mut buffer, x, z, x * 7, z * 11, 45);
            }
        }

        for y in 0..=IRON_MIN_Y {
            for x in 0..16 {
                for z in 0..16 {
                    assert_ne!(
                        buffer.read(x, y, z),
                        Material::IronOre,
                        "iron ore at y={y} below its minimum level"
                    );
                }
            }
        }
    }

    #[test]
    fn test_surface_cap_bands() {
        let materializer = materializer(42);

        for i in 0..200 {
            let x = i * 37 - 3700;
            let z = i * 13;
            assert_eq!(materializer.surface_material(x, z, 50), Material::Stone);
            assert_eq!(materializer.surface_material(x, z, 30), Material::Sand);
            assert_eq!(materializer.surface_material(x, z, 8), Material::Clay);

            let upper_mid = materializer.surface_material(x, z, 40);
            assert!(upper_mid == Material::Gravel || upper_mid == Material::Sand);
            let lower_mid = materializer.surface_material(x, z, 15);
            assert!(lower_mid == Material::Clay || lower_mid == Material::Sand);
        }
    }

    #[test]
    fn test_taper_probability() {
        assert!((taper_probability(0.3, 0.3, 0.12) - 0.12).abs() < 1e-12);
        assert!((taper_probability(0.55, 0.3, 0.12) - 0.06).abs() < 1e-12);
        assert!(taper_probability(0.9, 0.3, 0.12).abs() < 1e-12);
        assert!(taper_probability(-0.8, 0.3, 0.12).abs() < 1e-12);
    }
}
