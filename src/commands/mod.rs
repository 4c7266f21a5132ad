//! Command implementations
//!
//! Library side of the CLI subcommands. Each command returns data; printing
//! lives in [`crate::output`] except for the interactive assist loop.

pub mod assist;
pub mod benchmark;
pub mod rank;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use rank::{run_rank, write_report, write_scores};
pub use solve::{SolveConfig, SolveResult, pick_target, solve_word};
