//! Real-world scenario benchmarks.
//!
//! Full preset renders as the drivers issue them, and one optimizer
//! generation as the search loop runs it.

mod presets;
mod search;

pub use presets::bench_presets;
pub use search::bench_search;
