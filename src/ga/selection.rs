//! Ranking and parent selection.
//!
//! A population is scored once per generation and sorted by
//! **non-increasing** fitness. The sort is stable: compounds with equal
//! fitness keep their relative input order, so ranking is deterministic
//! for a fixed input. The top `k` ranked compounds form the mating pool,
//! from which parents are drawn uniformly with replacement.

use super::fitness::FitnessScheme;
use super::types::{Compound, Population};
use rand::Rng;

/// A population ordered best-first, with the parallel fitness values.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    compounds: Population,
    fitness: Vec<f64>,
}

impl Ranking {
    /// Compounds in rank order (best first).
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Fitness values, `fitness()[i]` belongs to `compounds()[i]`.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// The top-ranked compound, if any.
    pub fn best(&self) -> Option<&Compound> {
        self.compounds.first()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.fitness.first().copied()
    }

    /// The top `k` compounds eligible as parents.
    ///
    /// `k` is clamped to the population size.
    pub fn mating_pool(&self, k: usize) -> &[Compound] {
        &self.compounds[..k.min(self.compounds.len())]
    }
}

/// Scores every compound and sorts the population best-first.
///
/// # Complexity
/// O(n log n) plus one fitness evaluation per compound
pub fn rank(population: Population, scheme: &FitnessScheme) -> Ranking {
    let mut scored: Vec<(f64, Compound)> = population
        .into_iter()
        .map(|c| (scheme.evaluate(&c), c))
        .collect();

    // `sort_by` is stable; reversing the comparison sorts descending
    // without reordering ties.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let (fitness, compounds): (Vec<f64>, Population) = scored.into_iter().unzip();
    Ranking { compounds, fitness }
}

/// Draws one parent uniformly from the mating pool.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn pick_parent<'a, R: Rng>(pool: &'a [Compound], rng: &mut R) -> &'a Compound {
    assert!(!pool.is_empty(), "cannot select from empty mating pool");
    &pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::GeneVector;
    use crate::random::create_rng;

    /// Single-row compound with the given efficacy and zero toxicity, so
    /// fitness equals `efficacy`. `tag` lands in bioavailability to tell
    /// equal-fitness compounds apart.
    fn with_fitness(efficacy: f64, tag: f64) -> Compound {
        Compound::new(vec![GeneVector::new(vec![efficacy, 0.0, tag])])
    }

    #[test]
    fn test_rank_descending() {
        let pop = vec![
            with_fitness(0.2, 0.0),
            with_fitness(0.9, 0.0),
            with_fitness(0.5, 0.0),
            with_fitness(0.7, 0.0),
        ];
        let ranking = rank(pop, &FitnessScheme::default());
        assert_eq!(ranking.fitness(), &[0.9, 0.7, 0.5, 0.2]);
        assert_eq!(ranking.best_fitness(), Some(0.9));
        assert_eq!(ranking.best().map(|c| c.total_efficacy()), Some(0.9));
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let pop = vec![
            with_fitness(0.5, 0.1),
            with_fitness(0.8, 0.2),
            with_fitness(0.5, 0.3),
            with_fitness(0.5, 0.4),
        ];
        let ranking = rank(pop, &FitnessScheme::default());
        let tags: Vec<f64> = ranking
            .compounds()
            .iter()
            .map(|c| c.total_bioavailability())
            .collect();
        assert_eq!(tags, vec![0.2, 0.1, 0.3, 0.4]);
    }

    #[test]
    fn test_fitness_parallel_to_compounds() {
        let mut rng = create_rng(42);
        let pop = crate::ga::population::random_population(20, 10, 3, &mut rng);
        let scheme = FitnessScheme::default();
        let ranking = rank(pop, &scheme);
        for (c, &f) in ranking.compounds().iter().zip(ranking.fitness()) {
            assert_eq!(scheme.evaluate(c), f);
        }
        assert!(ranking.fitness().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_mating_pool_is_top_k() {
        let pop = (0..6).map(|i| with_fitness(i as f64 * 0.1, 0.0)).collect();
        let ranking = rank(pop, &FitnessScheme::default());
        let pool = ranking.mating_pool(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool, &ranking.compounds()[..3]);
        assert_eq!(ranking.mating_pool(100).len(), 6);
    }

    #[test]
    fn test_pick_parent_stays_in_pool() {
        let pop = (0..10).map(|i| with_fitness(i as f64 * 0.05, 0.0)).collect();
        let ranking = rank(pop, &FitnessScheme::default());
        let pool = ranking.mating_pool(4);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let parent = pick_parent(pool, &mut rng);
            let idx = pool
                .iter()
                .position(|c| c == parent)
                .expect("parent must come from the pool");
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 700, "expected roughly uniform picks, got {counts:?}");
        }
    }

    #[test]
    fn test_single_member_pool() {
        let ranking = rank(vec![with_fitness(0.3, 0.0)], &FitnessScheme::default());
        let mut rng = create_rng(1);
        assert_eq!(
            pick_parent(ranking.mating_pool(1), &mut rng),
            &ranking.compounds()[0]
        );
    }

    #[test]
    #[should_panic(expected = "cannot select from empty mating pool")]
    fn test_empty_pool_panics() {
        let mut rng = create_rng(42);
        pick_parent(&[], &mut rng);
    }
}
