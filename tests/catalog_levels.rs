//! Standard catalog verification.
//!
//! Deals every one of the hundred levels and checks the properties a deal
//! must satisfy no matter which shuffle comes out: bottle counts, capacity
//! bounds, per-color layer conservation, and the placement of the empty
//! bottles.

use rustc_hash::FxHashMap;
use water_sort::core::{BottleId, Color, GameRng, BOTTLE_CAPACITY};
use water_sort::level::{LevelCatalog, LevelGenerator};

/// Every standard level must validate and deal cleanly.
#[test]
fn test_all_levels_deal() {
    let catalog = LevelCatalog::standard();
    assert_eq!(catalog.len(), 100);

    for (i, spec) in catalog.iter().enumerate() {
        let level = (i + 1) as u64;
        let mut rng = GameRng::new(level);

        let bottles = LevelGenerator::generate(spec, &mut rng)
            .unwrap_or_else(|e| panic!("level {} failed to deal: {}", level, e));

        assert_eq!(bottles.len(), spec.bottle_count as usize, "level {}", level);

        // Filled prefix, empty suffix, positional ids
        let filled = spec.filled_bottle_count() as usize;
        for (idx, bottle) in bottles.iter().enumerate() {
            assert_eq!(bottle.id(), BottleId::new(idx as u16));
            assert!(bottle.len() <= BOTTLE_CAPACITY);
            if idx < filled {
                assert!(bottle.is_full(), "level {} bottle {} not full", level, idx);
            } else {
                assert!(bottle.is_empty(), "level {} bottle {} not empty", level, idx);
            }
        }

        // Exactly four layers of each palette color, nothing else
        let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
        for bottle in &bottles {
            for &color in bottle.layers() {
                *counts.entry(color).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), spec.palette.len(), "level {}", level);
        for &color in &spec.palette {
            assert_eq!(counts.get(&color), Some(&4), "level {} color {}", level, color);
        }
    }
}

/// The difficulty curve: boards grow and palettes stay within the roster.
#[test]
fn test_catalog_shape_bounds() {
    let catalog = LevelCatalog::standard();

    for (i, spec) in catalog.iter().enumerate() {
        let level = i + 1;

        assert!(spec.validate().is_ok(), "level {}", level);
        assert!(spec.palette.len() <= Color::ROSTER.len(), "level {}", level);
        assert!(spec.empty_bottle_count >= 2, "level {}", level);
        assert_eq!(spec.layers_per_color as usize, BOTTLE_CAPACITY);

        if level <= 15 {
            // Opening palettes are hand-picked but stay within the roster
            for &color in &spec.palette {
                assert!(Color::ROSTER.contains(&color), "level {}", level);
            }
        } else {
            // Band palettes are prefixes of the roster
            for (slot, &color) in spec.palette.iter().enumerate() {
                assert_eq!(color, Color::ROSTER[slot], "level {}", level);
            }
        }
    }

    // The catalog starts gently and ends at full size
    let first = catalog.get(1).unwrap();
    assert_eq!(first.bottle_count, 4);
    assert_eq!(first.palette.len(), 2);

    let last = catalog.get(100).unwrap();
    assert_eq!(last.bottle_count, 20);
    assert_eq!(last.palette.len(), 17);
}

/// A level's seed pins its deal down exactly.
#[test]
fn test_deals_are_reproducible() {
    let catalog = LevelCatalog::standard();

    for level in [1, 16, 42, 77, 100] {
        let spec = catalog.get(level).unwrap();

        let mut rng_a = GameRng::new(0xC0FFEE ^ u64::from(level));
        let mut rng_b = GameRng::new(0xC0FFEE ^ u64::from(level));

        let a = LevelGenerator::generate(spec, &mut rng_a).unwrap();
        let b = LevelGenerator::generate(spec, &mut rng_b).unwrap();

        assert_eq!(a, b, "level {}", level);
    }
}

/// Different seeds give different shuffles on real board sizes.
#[test]
fn test_seeds_matter() {
    let catalog = LevelCatalog::standard();
    let spec = catalog.get(50).unwrap();

    let mut rng_a = GameRng::new(1);
    let mut rng_b = GameRng::new(2);

    let a = LevelGenerator::generate(spec, &mut rng_a).unwrap();
    let b = LevelGenerator::generate(spec, &mut rng_b).unwrap();

    assert_ne!(a, b);
}