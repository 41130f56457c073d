//! Deal generation: turning a spec into shuffled bottles.
//!
//! Generation is a uniform shuffle of the color multiset, so the same spec
//! and seed always produce the same deal. A deal is **not** guaranteed
//! solvable: with four layers per color nearly every shuffle is, and the
//! rare dead deal is what reset and undo exist for. Checking reachability
//! here would cost a search per deal for no gameplay benefit.

use tracing::debug;

use crate::core::{Bottle, BottleId, Color, GameRng, BOTTLE_CAPACITY};

use super::spec::{InvalidSpecError, LevelSpec};

/// Deals bottles from a level spec.
pub struct LevelGenerator;

impl LevelGenerator {
    /// Generate the starting bottles for a spec.
    ///
    /// Validates the spec, shuffles the color multiset with the given RNG,
    /// and fills bottles four layers at a time. The first layer drawn for a
    /// bottle becomes its bottom. Empty bottles follow the filled ones, and
    /// ids are positional across the whole sequence.
    pub fn generate(
        spec: &LevelSpec,
        rng: &mut GameRng,
    ) -> Result<Vec<Bottle>, InvalidSpecError> {
        spec.validate()?;

        let mut pool: Vec<Color> = Vec::with_capacity(spec.total_layers());
        for &color in &spec.palette {
            for _ in 0..spec.layers_per_color {
                pool.push(color);
            }
        }

        rng.shuffle(&mut pool);

        let mut bottles = Vec::with_capacity(spec.bottle_count as usize);
        // Validation guarantees the pool divides into full bottles.
        for chunk in pool.chunks(BOTTLE_CAPACITY) {
            let id = BottleId::new(bottles.len() as u16);
            bottles.push(Bottle::with_layers(id, chunk.iter().copied()));
        }
        for _ in 0..spec.empty_bottle_count {
            let id = BottleId::new(bottles.len() as u16);
            bottles.push(Bottle::new(id));
        }

        debug!(
            bottles = bottles.len(),
            colors = spec.palette.len(),
            seed = rng.seed(),
            "dealt level"
        );

        Ok(bottles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn deal(spec: &LevelSpec, seed: u64) -> Vec<Bottle> {
        let mut rng = GameRng::new(seed);
        LevelGenerator::generate(spec, &mut rng).unwrap()
    }

    #[test]
    fn test_bottle_counts() {
        let spec = LevelSpec::new(6, 2, Color::palette(4));
        let bottles = deal(&spec, 7);

        assert_eq!(bottles.len(), 6);
        assert!(bottles[..4].iter().all(Bottle::is_full));
        assert!(bottles[4..].iter().all(Bottle::is_empty));
    }

    #[test]
    fn test_positional_ids() {
        let spec = LevelSpec::new(5, 2, Color::palette(3));
        let bottles = deal(&spec, 99);

        for (i, bottle) in bottles.iter().enumerate() {
            assert_eq!(bottle.id(), BottleId::new(i as u16));
        }
    }

    #[test]
    fn test_layer_conservation() {
        let spec = LevelSpec::new(10, 2, Color::palette(8));
        let bottles = deal(&spec, 123);

        let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
        for bottle in &bottles {
            for &color in bottle.layers() {
                *counts.entry(color).or_default() += 1;
            }
        }

        assert_eq!(counts.len(), 8);
        for &color in &spec.palette {
            assert_eq!(counts[&color], 4, "wrong layer count for {}", color);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let spec = LevelSpec::new(8, 2, Color::palette(6));

        let a = deal(&spec, 42);
        let b = deal(&spec, 42);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_deal() {
        let spec = LevelSpec::new(8, 2, Color::palette(6));

        let a = deal(&spec, 1);
        let b = deal(&spec, 2);

        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_spec_refused() {
        let spec = LevelSpec::new(4, 2, vec![Color::RED, Color::RED]);
        let mut rng = GameRng::new(0);

        let result = LevelGenerator::generate(&spec, &mut rng);
        assert_eq!(
            result,
            Err(InvalidSpecError::DuplicateColor { color: Color::RED })
        );
    }

    #[test]
    fn test_non_standard_layers_span_bottles() {
        // 1 color, 8 layers: two full bottles of the same color
        let spec = LevelSpec::new(3, 1, Color::palette(1)).with_layers_per_color(8);
        let bottles = deal(&spec, 5);

        assert_eq!(bottles.len(), 3);
        assert!(bottles[0].is_complete());
        assert!(bottles[1].is_complete());
        assert!(bottles[2].is_empty());
    }
}
