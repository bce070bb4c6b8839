pub mod cli;
pub mod compare;
pub mod config;
pub mod run;
pub mod stats;

pub use compare::{DELIMITER, VersionError, compare_versions};
pub use stats::{StatsError, average, largest_n, median, percentile, smallest_n};
