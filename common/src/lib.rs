pub mod chart;
pub mod config;
pub mod dataset;
pub mod plot;
pub mod util;

/// Name of the CSV written by the cipher benchmark, relative to the results directory
pub const DEFAULT_INPUT: &str = "benchmark_results.csv";
/// Filename fragment identifying the largest benchmarked file
pub const DEFAULT_SIZE_MARKER: &str = "2_5MB";
