//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{ATTEMPT_CAP, RoundError, RoundResult, play_round, play_round_with};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
