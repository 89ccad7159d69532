//! Parameter-space exploration: uniform mutation for the pad grid and an
//! evolutionary search that fits a record to a reference waveform.

pub mod mutate;
pub mod optimizer;

pub use mutate::{Mutator, MUTATE_ALL, PAD_FAN_OUT, SEARCH_STEP, WILD_WAVEFORM};
pub use optimizer::{
    fitness, spawn, Best, BestHandle, CancelToken, Optimizer, OptimizerConfig, SearchOutcome,
    SearchStatus,
};
