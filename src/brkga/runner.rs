//! BRKGA generation operator.

use super::config::BrkgaConfig;
use crate::engine::Optimizer;
use crate::error::{OptimError, Result};
use crate::population::{Chromosome, Evaluator, Origin, Population};
use crate::problem::{Problem, Ranking};
use rand::Rng;

/// Biased Random-Key Genetic Algorithm.
///
/// Each call to [`evolve`](Optimizer::evolve) keeps the elite verbatim,
/// injects random mutants and fills the rest with biased uniform crossover
/// between an elite and a non-elite parent.
///
/// ```
/// use rkopt::brkga::{Brkga, BrkgaConfig};
///
/// // 10 random keys, 1000 individuals, defaults for everything else.
/// let brkga = Brkga::new(10, 1000);
/// assert_eq!(brkga.config().elite_count(), 250);
///
/// let tuned = Brkga::with_config(BrkgaConfig::new(10, 1000).with_bias(0.8));
/// assert_eq!(tuned.config().bias, 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Brkga {
    config: BrkgaConfig,
}

impl Brkga {
    /// Creates an optimizer with default fractions.
    pub fn new(dimensions: usize, population_size: usize) -> Self {
        Self::with_config(BrkgaConfig::new(dimensions, population_size))
    }

    pub fn with_config(config: BrkgaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrkgaConfig {
        &self.config
    }
}

impl From<BrkgaConfig> for Brkga {
    fn from(config: BrkgaConfig) -> Self {
        Self::with_config(config)
    }
}

impl Optimizer for Brkga {
    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn population_size(&self) -> usize {
        self.config.population_size
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn parallel(&self) -> bool {
        self.config.parallel
    }

    fn evolve<P: Problem, R: Rng>(
        &self,
        population: &Population<P::Candidate>,
        evaluator: &Evaluator<'_, P>,
        ranking: &Ranking,
        rng: &mut R,
    ) -> Result<Population<P::Candidate>> {
        self.config.validate()?;

        let pop_size = self.config.population_size;
        let n = self.config.dimensions;
        if population.len() != pop_size {
            return Err(OptimError::config(format!(
                "population has {} individuals, expected {pop_size}",
                population.len()
            )));
        }
        if let Some(bad) = population.iter().find(|ind| ind.chromosome().len() != n) {
            return Err(OptimError::config(format!(
                "chromosome has {} keys, expected {n}",
                bad.chromosome().len()
            )));
        }

        let elite_count = self.config.elite_count();
        let mutant_count = self.config.mutant_count();
        let crossover_count = self.config.offspring_count();

        let individuals = population.individuals();
        let ranked = population.ranked(ranking);
        let (elite, non_elite) = ranked.split_at(elite_count);

        // Phase 1: Elite copy
        let mut next_gen: Vec<_> = elite
            .iter()
            .map(|&i| individuals[i].clone().with_origin(Origin::Elite))
            .collect();

        // Phase 2: Mutant injection
        let mut batch: Vec<(Chromosome, Origin)> = Vec::with_capacity(pop_size - elite_count);
        for _ in 0..mutant_count {
            batch.push((Chromosome::random(n, rng), Origin::Mutant));
        }

        // Phase 3: Biased uniform crossover, one parent from each set
        for _ in 0..crossover_count {
            let elite_parent = individuals[elite[rng.random_range(0..elite.len())]].chromosome();
            let other_parent =
                individuals[non_elite[rng.random_range(0..non_elite.len())]].chromosome();
            let child = biased_crossover(elite_parent, other_parent, self.config.bias, rng);
            batch.push((child, Origin::Offspring));
        }

        // Decode everything but the elite; randomness is fully drawn by now
        next_gen.extend(evaluator.evaluate(batch)?);

        Ok(Population::new(next_gen))
    }
}

/// Takes each key from `elite` with probability `bias`, else from `other`.
///
/// Keys are only ever copied, so the child stays within `[0, 1)`.
fn biased_crossover<R: Rng>(
    elite: &Chromosome,
    other: &Chromosome,
    bias: f64,
    rng: &mut R,
) -> Chromosome {
    let keys = elite
        .keys()
        .iter()
        .zip(other.keys())
        .map(|(&e, &o)| if rng.random::<f64>() < bias { e } else { o })
        .collect();
    Chromosome::new_unchecked(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProblemError;
    use crate::problem::Goal;
    use crate::random::create_rng;

    // ---- Sum of keys, feasible when the first key is below 0.9 ----

    struct KeySum;

    impl Problem for KeySum {
        type Candidate = Vec<f64>;

        fn decode(&self, keys: &[f64]) -> std::result::Result<Vec<f64>, ProblemError> {
            Ok(keys.to_vec())
        }

        fn objective(&self, x: &Vec<f64>) -> std::result::Result<f64, ProblemError> {
            Ok(x.iter().sum())
        }

        fn is_feasible(&self, x: &Vec<f64>) -> std::result::Result<bool, ProblemError> {
            Ok(x[0] < 0.9)
        }
    }

    fn initial(
        brkga: &Brkga,
        evaluator: &Evaluator<'_, KeySum>,
        seed: u64,
    ) -> Population<Vec<f64>> {
        let mut rng = create_rng(seed);
        brkga
            .initial_population(Vec::new(), evaluator, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_initial_population() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::new(6, 40);
        let pop = initial(&brkga, &evaluator, 1);
        assert_eq!(pop.len(), 40);
        assert_eq!(pop.count(Origin::Initial), 40);
        assert!(pop.iter().all(|ind| ind.chromosome().len() == 6));
        assert_eq!(evaluator.evaluations(), 40);
    }

    #[test]
    fn test_initial_population_keeps_seeds_first() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::new(3, 10);
        let seed = Chromosome::from_keys(vec![0.1, 0.2, 0.3]).unwrap();
        let mut rng = create_rng(3);
        let pop = brkga
            .initial_population(vec![seed.clone()], &evaluator, &mut rng)
            .unwrap();
        assert_eq!(pop.len(), 10);
        assert_eq!(pop.get(0).unwrap().chromosome(), &seed);
        assert_eq!(pop.get(0).unwrap().origin(), Origin::Seeded);
        assert_eq!(pop.count(Origin::Initial), 9);
    }

    #[test]
    fn test_initial_population_rejects_wrong_seed_length() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::new(3, 10);
        let seed = Chromosome::from_keys(vec![0.1]).unwrap();
        let mut rng = create_rng(3);
        let err = brkga
            .initial_population(vec![seed], &evaluator, &mut rng)
            .unwrap_err();
        assert!(matches!(err, OptimError::Configuration(_)));
        assert_eq!(evaluator.evaluations(), 0);
    }

    #[test]
    fn test_evolve_partitions_generation() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::new(8, 100);
        let ranking = Ranking::new(Goal::Minimize);
        let pop = initial(&brkga, &evaluator, 11);

        let mut rng = create_rng(12);
        let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();

        assert_eq!(next.len(), 100);
        assert_eq!(next.count(Origin::Elite), 25);
        assert_eq!(next.count(Origin::Mutant), 20);
        assert_eq!(next.count(Origin::Offspring), 55);
        // elites are not re-evaluated
        assert_eq!(evaluator.evaluations(), 100 + 75);
    }

    #[test]
    fn test_elite_are_the_top_ranked() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::with_config(BrkgaConfig::new(4, 20).with_elite_size(5));
        let ranking = Ranking::new(Goal::Maximize);
        let pop = initial(&brkga, &evaluator, 5);

        let mut rng = create_rng(6);
        let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();

        let expected: Vec<_> = pop
            .ranked(&ranking)
            .into_iter()
            .take(5)
            .map(|i| pop.get(i).unwrap().chromosome().clone())
            .collect();
        let elites: Vec<_> = next.iter().take(5).map(|ind| ind.chromosome().clone()).collect();
        assert_eq!(elites, expected);
    }

    #[test]
    fn test_bias_one_copies_elite_parent() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::with_config(
            BrkgaConfig::new(2, 4)
                .with_elite_size(1)
                .with_mutant_fraction(0.0)
                .with_bias(1.0),
        );
        let ranking = Ranking::new(Goal::Minimize);
        let pop = initial(&brkga, &evaluator, 21);
        let elite = pop.best(&ranking).unwrap().chromosome().clone();

        let mut rng = create_rng(22);
        let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();

        assert_eq!(next.len(), 4);
        assert_eq!(next.get(0).unwrap().origin(), Origin::Elite);
        assert_eq!(next.get(0).unwrap().chromosome(), &elite);
        let copies = next
            .iter()
            .skip(1)
            .filter(|ind| ind.origin() == Origin::Offspring && ind.chromosome() == &elite)
            .count();
        assert_eq!(copies, 3);
    }

    #[test]
    fn test_offspring_have_one_elite_and_one_non_elite_parent() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::with_config(
            BrkgaConfig::new(8, 12)
                .with_elite_size(3)
                .with_mutant_fraction(0.0)
                .with_bias(0.55),
        );
        let ranking = Ranking::new(Goal::Minimize);

        // Every chromosome repeats one value, so each key names its parent.
        // The three smallest sums are the elite.
        let values: Vec<f64> = (0..12).map(|i| 0.05 + 0.07 * i as f64).collect();
        let batch = values
            .iter()
            .rev()
            .map(|&v| (Chromosome::from_keys(vec![v; 8]).unwrap(), Origin::Initial))
            .collect();
        let pop = Population::new(evaluator.evaluate(batch).unwrap());
        let (elite_values, other_values) = values.split_at(3);

        let mut rng = create_rng(31);
        let mut saw_non_elite = false;
        for _ in 0..20 {
            let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();
            assert_eq!(next.count(Origin::Offspring), 9);
            for child in next.iter().filter(|ind| ind.origin() == Origin::Offspring) {
                let keys = child.chromosome().keys();
                let mut from_elite: Vec<f64> =
                    keys.iter().copied().filter(|k| elite_values.contains(k)).collect();
                let mut from_other: Vec<f64> =
                    keys.iter().copied().filter(|k| other_values.contains(k)).collect();
                assert_eq!(from_elite.len() + from_other.len(), 8);
                from_elite.dedup();
                from_other.dedup();
                assert!(from_elite.len() <= 1, "two elite parents: {keys:?}");
                assert!(from_other.len() <= 1, "two non-elite parents: {keys:?}");
                saw_non_elite |= !from_other.is_empty();
            }
        }
        assert!(saw_non_elite);
    }

    #[test]
    fn test_infeasible_never_elite_when_feasible_exist() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let brkga = Brkga::with_config(BrkgaConfig::new(3, 30).with_elite_size(3));
        // Maximizing the sum favours large first keys, which are infeasible.
        let ranking = Ranking::new(Goal::Maximize);
        let pop = initial(&brkga, &evaluator, 8);
        assert!(pop.iter().any(|ind| ind.is_feasible()));

        let mut rng = create_rng(9);
        let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();
        let feasible_total = pop.iter().filter(|ind| ind.is_feasible()).count();
        let feasible_elites = next
            .iter()
            .filter(|ind| ind.origin() == Origin::Elite && ind.is_feasible())
            .count();
        assert_eq!(feasible_elites, feasible_total.min(3));
    }

    #[test]
    fn test_evolve_rejects_wrong_population_size() {
        let problem = KeySum;
        let evaluator = Evaluator::new(&problem);
        let small = Brkga::new(3, 10);
        let large = Brkga::new(3, 20);
        let pop = initial(&small, &evaluator, 1);
        let mut rng = create_rng(2);
        let err = large
            .evolve(&pop, &evaluator, &Ranking::new(Goal::Minimize), &mut rng)
            .unwrap_err();
        assert!(matches!(err, OptimError::Configuration(_)));
    }

    #[test]
    fn test_crossover_copies_parent_keys() {
        let mut rng = create_rng(4);
        let a = Chromosome::from_keys(vec![0.1; 50]).unwrap();
        let b = Chromosome::from_keys(vec![0.9; 50]).unwrap();
        let child = biased_crossover(&a, &b, 0.7, &mut rng);
        assert_eq!(child.len(), 50);
        assert!(child.keys().iter().all(|&k| k == 0.1 || k == 0.9));
        let from_elite = child.keys().iter().filter(|&&k| k == 0.1).count();
        assert!(from_elite > 25, "expected bias toward elite, got {from_elite}/50");
    }

    // ---- Properties ----

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn evolve_preserves_size_and_range(
                seed in any::<u64>(),
                dims in 1usize..8,
                pop_size in 5usize..60,
                elite_frac in 0.05f64..0.5,
                mutant_frac in 0.0f64..0.4,
                bias in 0.51f64..=1.0,
                maximize in any::<bool>(),
            ) {
                let elite = ((pop_size as f64 * elite_frac) as usize).max(1);
                let config = BrkgaConfig::new(dims, pop_size)
                    .with_elite_size(elite)
                    .with_mutant_fraction(mutant_frac)
                    .with_bias(bias);
                prop_assume!(config.validate().is_ok());

                let brkga = Brkga::with_config(config);
                let problem = KeySum;
                let evaluator = Evaluator::new(&problem);
                let goal = if maximize { Goal::Maximize } else { Goal::Minimize };
                let ranking = Ranking::new(goal);
                let mut rng = create_rng(seed);

                let mut pop = brkga.initial_population(Vec::new(), &evaluator, &mut rng).unwrap();
                for _ in 0..5 {
                    let before = pop.best(&ranking).unwrap().clone();
                    let next = brkga.evolve(&pop, &evaluator, &ranking, &mut rng).unwrap();

                    prop_assert_eq!(next.len(), pop.len());
                    for ind in next.iter() {
                        prop_assert_eq!(ind.chromosome().len(), dims);
                        prop_assert!(ind.chromosome().keys().iter().all(|k| (0.0..1.0).contains(k)));
                    }
                    let after = next.best(&ranking).unwrap();
                    prop_assert!(!ranking.is_better(&before, after));
                    pop = next;
                }
            }
        }
    }
}
