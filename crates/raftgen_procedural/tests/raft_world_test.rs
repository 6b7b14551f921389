//! End-to-end world checks: the raft corridor layout, known-column
//! profiles under a fixed seed, and cross-thread generation.

use raftgen_core::{ChunkCoord, Material, WorldConfig, CHUNK_SIZE};
use raftgen_procedural::{BlockSink, ChunkBuffer, RaftGenerator};

fn structural_chunk(generator: &RaftGenerator, chunk: ChunkCoord) -> ChunkBuffer {
    let mut buffer = ChunkBuffer::new(generator.config().world_height);
    generator.generate_terrain(chunk, &mut buffer);
    generator.generate_floor(chunk, &mut buffer);
    buffer
}

#[test]
fn test_origin_plot_column_profile() {
    // Seed 42, world column (0, 0): the origin raft plot.
    let generator = RaftGenerator::new(42, WorldConfig::default()).unwrap();
    let buffer = structural_chunk(&generator, ChunkCoord::new(0, 0));

    assert_eq!(buffer.read(0, 62, 0), Material::OakPlanks, "deck");
    assert_eq!(buffer.read(0, 61, 0), Material::Sand, "underlayer");
    for y in 10..=60 {
        assert_eq!(buffer.read(0, y, 0), Material::Stone, "core at y={y}");
    }
    for y in 3..10 {
        assert_eq!(buffer.read(0, y, 0), Material::Deepslate, "deep core at y={y}");
    }
    // Y=2 is deep core unless the ragged floor layer landed here.
    let y2 = buffer.read(0, 2, 0);
    assert!(y2 == Material::Deepslate || y2 == Material::Bedrock, "y=2 was {y2:?}");
    assert_eq!(buffer.read(0, 1, 0), Material::Bedrock);
    assert_eq!(buffer.read(0, 0, 0), Material::Bedrock);
    for y in 63..buffer.world_height() {
        assert_eq!(buffer.read(0, y, 0), Material::Air, "sky at y={y}");
    }
}

#[test]
fn test_open_ocean_column_profile() {
    // Seed 42, world column (1000, 37): open ocean, off the corridor.
    let generator = RaftGenerator::new(42, WorldConfig::default()).unwrap();
    let config = generator.config();
    assert!(!generator.grid().is_plot_column(1000, 37));

    let buffer = structural_chunk(&generator, ChunkCoord::new(1000 / 16, 37 / 16));
    let (x, z) = (1000 % 16, 37 % 16);

    let surface = (0..config.sea_level)
        .rev()
        .find(|&y| buffer.read(x, y, z).is_seabed_surface())
        .expect("ocean column must expose a seabed surface");
    println!("seabed at ({}, {}): y={surface}", 1000, 37);

    assert!(
        (config.terrain.min_height..=config.terrain.max_height).contains(&surface),
        "seabed {surface} outside bounds"
    );
    for y in (surface + 1)..=config.sea_level {
        assert_eq!(buffer.read(x, y, z), Material::Water, "water at y={y}");
    }
    for y in (config.sea_level + 1)..config.world_height {
        assert_eq!(buffer.read(x, y, z), Material::Air, "air at y={y}");
    }
    for y in 2..surface {
        assert!(buffer.read(x, y, z).is_solid(), "rock at y={y}");
    }
}

#[test]
fn test_corridor_layout_across_chunks() {
    let generator = RaftGenerator::new(7, WorldConfig::default()).unwrap();
    let spacing = generator.config().raft.spacing;
    let platform = generator.config().raft.platform_height;

    let mut decks = 0usize;
    // Plot 3 is centered at (600, 600) = chunk (37, 37) local (8, 8);
    // its whole 3x3 footprint lies inside that one chunk.
    let buffer = structural_chunk(&generator, ChunkCoord::new(37, 37));
    for x in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            if buffer.read(x, platform, z) == Material::OakPlanks {
                decks += 1;
                assert!(
                    (600 - (37 * 16 + x)).abs() <= 1 && (600 - (37 * 16 + z)).abs() <= 1,
                    "deck outside the plot footprint at local ({x}, {z})"
                );
            }
        }
    }
    assert_eq!(decks, 9, "plot footprint must be exactly 3x3");

    // A chunk one spacing off the diagonal has no decks at all.
    let off = structural_chunk(
        &generator,
        ChunkCoord::new(600 / 16, (600 + spacing) / 16),
    );
    for x in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            assert_ne!(off.read(x, platform, z), Material::OakPlanks);
        }
    }
}

#[test]
fn test_nearest_plot_from_anywhere() {
    let generator = RaftGenerator::new(7, WorldConfig::default()).unwrap();

    let near_origin = generator.nearest_plot(30, -20);
    assert_eq!(near_origin.index, 0);

    let mid = generator.nearest_plot(1010, 990);
    assert_eq!((mid.center_x, mid.center_z), (1000, 1000));

    let beyond = generator.nearest_plot(1_000_000, 900_000);
    assert_eq!(beyond.index, generator.grid().count() - 1);
}

#[test]
fn test_parallel_generation_matches_serial() {
    let generator = RaftGenerator::new(1337, WorldConfig::default()).unwrap();

    let chunks: Vec<ChunkCoord> = (0..16)
        .map(|i| ChunkCoord::new(i * 5 - 40, 30 - i * 7))
        .collect();

    let serial: Vec<ChunkBuffer> = chunks
        .iter()
        .map(|&chunk| structural_chunk(&generator, chunk))
        .collect();

    let parallel: Vec<ChunkBuffer> = std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .chunks(4)
            .map(|batch| {
                let generator = &generator;
                scope.spawn(move || {
                    batch
                        .iter()
                        .map(|&chunk| structural_chunk(generator, chunk))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("generation thread panicked"))
            .collect()
    });

    assert_eq!(serial, parallel, "parallel generation diverged from serial");
}
