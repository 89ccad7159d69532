/*
Target-Match Search
===================

A population of random records is rendered against a reference waveform and
scored by a length-normalised mean squared error:

    n       = min(|G|, |R|)
    mse     = Σ_{i<n} (G[i] - R[i])² / n
    fitness = mse / n

Lower is better. Each generation:

    1. check the cancel token
    2. render and score every individual, keep the best (strict <, so on
       ties the earlier individual and the incumbent win)
    3. publish the best so far to the shared snapshot
    4. stop on fitness < target ("global optimum") or after
       `stagnation_limit` generations without a strict improvement
    5. mutate every individual in place

The incumbent is not preserved inside the population, so a generation can
lose it; only the recorded best is monotonic.
*/

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::mutate::{Mutator, SEARCH_STEP, WILD_WAVEFORM};
use crate::error::{KickError, KickResult};
use crate::params::Parameters;
use crate::rng::{create_rng, KickRng};
use crate::synth::render;

/// Search settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Generations without strict improvement before giving up.
    pub stagnation_limit: usize,
    /// Fitness below which the search stops early.
    pub target_fitness: f64,
    /// Mutation factor applied every generation.
    pub mutation_step: f64,
    pub wild_waveform: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            stagnation_limit: 50,
            target_fitness: 1e-3,
            mutation_step: SEARCH_STEP,
            wild_waveform: WILD_WAVEFORM,
        }
    }
}

impl OptimizerConfig {
    /// Reject settings under which no individual would ever be scored.
    pub fn validate(&self) -> KickResult<()> {
        if self.population_size == 0 {
            return Err(KickError::invalid_param("population_size", "must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(KickError::invalid_param("max_generations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    GlobalOptimum,
    Stagnation,
    MaxGenerations,
    Cancelled,
}

impl SearchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::GlobalOptimum => "global optimum",
            SearchStatus::Stagnation => "stagnation",
            SearchStatus::MaxGenerations => "max generations",
            SearchStatus::Cancelled => "cancelled",
        }
    }
}

/// Best record seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Best {
    pub params: Parameters,
    pub fitness: f64,
    /// 1-based generation that found it.
    pub generation: usize,
}

/// Result of a finished search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Parameters,
    pub fitness: f64,
    /// Generations fully evaluated.
    pub generations: usize,
    /// Best fitness after each generation.
    pub history: Vec<f64>,
    pub status: SearchStatus,
}

/// Cooperative cancellation signal, checked once per generation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Read side of the best-so-far record. Observers get copies.
#[derive(Debug, Clone, Default)]
pub struct BestHandle(Arc<Progress>);

#[derive(Debug, Default)]
struct Progress {
    best: Mutex<Option<Best>>,
    generations: AtomicUsize,
}

impl BestHandle {
    pub fn snapshot(&self) -> Option<Best> {
        self.0.best.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Generations fully evaluated so far.
    pub fn generations(&self) -> usize {
        self.0.generations.load(Ordering::SeqCst)
    }

    fn publish(&self, best: Option<&Best>, generation: usize) {
        if let Some(best) = best {
            *self.0.best.lock().unwrap_or_else(|e| e.into_inner()) = Some(best.clone());
        }
        self.0.generations.store(generation, Ordering::SeqCst);
    }
}

/// Length-normalised MSE between a render and the reference.
///
/// Returns infinity when either side is empty.
pub fn fitness(generated: &[i32], reference: &[i32]) -> f64 {
    let n = generated.len().min(reference.len());
    if n == 0 {
        return f64::INFINITY;
    }
    let sum: f64 = generated
        .iter()
        .zip(reference)
        .map(|(&g, &r)| {
            let d = g as f64 - r as f64;
            d * d
        })
        .sum();
    let mse = sum / n as f64;
    mse / n as f64
}

/// Evolutionary search for a record whose render matches a reference.
pub struct Optimizer {
    config: OptimizerConfig,
    population: Vec<Parameters>,
    mutator: Mutator,
    rng: KickRng,
    cancel: CancelToken,
    best: BestHandle,
}

impl Optimizer {
    /// Seed a population of random records around `template`.
    ///
    /// The template supplies the sweep frequencies and the render format.
    pub fn new(template: &Parameters, config: OptimizerConfig, seed: u64) -> Self {
        let mut rng = create_rng(seed);
        let population = (0..config.population_size)
            .map(|_| Parameters::random(template, &mut rng))
            .collect();
        let mutator = Mutator::new(config.mutation_step).with_wild_waveform(config.wild_waveform);

        Self {
            config,
            population,
            mutator,
            rng,
            cancel: CancelToken::new(),
            best: BestHandle::default(),
        }
    }

    /// Put `params` in the first population slot.
    pub fn with_individual(mut self, params: Parameters) -> Self {
        match self.population.first_mut() {
            Some(slot) => *slot = params,
            None => self.population.push(params),
        }
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn best_handle(&self) -> BestHandle {
        self.best.clone()
    }

    pub fn population(&self) -> &[Parameters] {
        &self.population
    }

    /// Run until the target, stagnation, the generation cap or cancellation.
    ///
    /// Individuals that fail to render are logged and skipped. Fails if the
    /// config or the reference is unusable, or if nothing rendered before the
    /// search stopped (with `Cancelled` when that stop was a cancellation).
    pub fn run(&mut self, reference: &[i32]) -> KickResult<SearchOutcome> {
        self.config.validate()?;
        if self.population.is_empty() {
            return Err(KickError::invalid_param("population_size", "must be at least 1"));
        }
        if reference.is_empty() {
            return Err(KickError::invalid_param("reference", "reference waveform is empty"));
        }

        let mut best: Option<Best> = None;
        let mut history = Vec::new();
        let mut stagnant = 0usize;
        let mut generation = 0usize;
        let mut last_error = None;

        let status = loop {
            if self.cancel.is_cancelled() {
                break SearchStatus::Cancelled;
            }
            if generation >= self.config.max_generations {
                break SearchStatus::MaxGenerations;
            }
            generation += 1;

            let improved = self.evaluate(reference, generation, &mut best, &mut last_error);
            self.best.publish(best.as_ref(), generation);

            if let Some(b) = &best {
                history.push(b.fitness);
                tracing::debug!(generation, fitness = b.fitness, stagnant, "generation done");

                if b.fitness < self.config.target_fitness {
                    break SearchStatus::GlobalOptimum;
                }
            }

            if improved {
                stagnant = 0;
            } else {
                stagnant += 1;
                if stagnant >= self.config.stagnation_limit {
                    break SearchStatus::Stagnation;
                }
            }

            self.mutator.mutate_all(&mut self.population, &mut self.rng);
        };

        let Some(best) = best else {
            return Err(match (status, last_error) {
                (SearchStatus::Cancelled, _) => KickError::Cancelled,
                (_, Some(err)) => err,
                (_, None) => KickError::invalid_param("population", "no individual was evaluated"),
            });
        };

        tracing::info!(
            status = status.as_str(),
            generations = generation,
            fitness = best.fitness,
            "search finished"
        );

        Ok(SearchOutcome {
            best: best.params,
            fitness: best.fitness,
            generations: generation,
            history,
            status,
        })
    }

    /// Score the population once. Returns true on a strict improvement.
    fn evaluate(
        &mut self,
        reference: &[i32],
        generation: usize,
        best: &mut Option<Best>,
        last_error: &mut Option<KickError>,
    ) -> bool {
        let mut improved = false;

        for (index, individual) in self.population.iter().enumerate() {
            let generated = match render(individual, &mut self.rng) {
                Ok(samples) => samples,
                Err(source) => {
                    tracing::warn!(index, error = %source, "skipping individual");
                    *last_error = Some(KickError::RenderFailed {
                        index,
                        source: Box::new(source),
                    });
                    continue;
                }
            };

            let mut score = fitness(&generated, reference);
            if score.is_nan() {
                score = f64::INFINITY;
            }

            if best.as_ref().map_or(true, |b| score < b.fitness) {
                *best = Some(Best {
                    params: individual.clone(),
                    fitness: score,
                    generation,
                });
                improved = true;
            }
        }

        improved
    }
}

/// Run the search on a background thread.
///
/// The returned handles observe and cancel it while it runs; join the
/// thread for the outcome.
pub fn spawn<R: Rng + ?Sized>(
    template: &Parameters,
    config: OptimizerConfig,
    rng: &mut R,
    reference: Vec<i32>,
) -> (
    std::thread::JoinHandle<KickResult<SearchOutcome>>,
    CancelToken,
    BestHandle,
) {
    let mut optimizer = Optimizer::new(template, config, rng.gen());
    let cancel = optimizer.cancel_token();
    let best = optimizer.best_handle();
    let handle = std::thread::spawn(move || optimizer.run(&reference));
    (handle, cancel, best)
}
