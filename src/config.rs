use anyhow::{Result, bail};

use crate::cli;
use crate::compare::VersionError;

#[derive(Debug)]
pub struct CompareRequest {
    pub version1: String,
    pub version2: String,
}

impl CompareRequest {
    pub fn from_cli(cli: cli::Cli) -> Result<Self> {
        if cli.version1.is_empty() || cli.version2.is_empty() {
            return Err(VersionError::MalformedInput.into());
        }

        Ok(Self {
            version1: cli.version1,
            version2: cli.version2,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatsOp {
    Min,
    Max,
    Avg,
    Median,
    Percentile,
}

#[derive(Debug)]
pub struct StatsRequest {
    pub op: StatsOp,
    pub nums: Vec<f64>,
    pub count: usize,
    pub quantile: f64,
    pub verbose: bool,
}

pub const DEFAULT_COUNT: usize = 1;
pub const DEFAULT_QUANTILE: f64 = 50.0;

impl StatsRequest {
    pub fn from_cli(cli: cli::StatsCli) -> Result<Self> {
        let (op, nums, count, quantile) = match cli.command {
            cli::StatsCommand::Min(args) => {
                (StatsOp::Min, args.nums.nums, args.count, DEFAULT_QUANTILE)
            }
            cli::StatsCommand::Max(args) => {
                (StatsOp::Max, args.nums.nums, args.count, DEFAULT_QUANTILE)
            }
            cli::StatsCommand::Avg(args) => {
                (StatsOp::Avg, args.nums, DEFAULT_COUNT, DEFAULT_QUANTILE)
            }
            cli::StatsCommand::Median(args) => {
                (StatsOp::Median, args.nums, DEFAULT_COUNT, DEFAULT_QUANTILE)
            }
            cli::StatsCommand::Percentile(args) => (
                StatsOp::Percentile,
                args.nums.nums,
                DEFAULT_COUNT,
                args.quantile,
            ),
        };

        if nums.is_empty() {
            bail!("At least one number is required.");
        }

        if let Some(bad) = nums.iter().find(|num| !num.is_finite()) {
            bail!("Numbers must be finite, got {bad}.");
        }

        if count == 0 {
            bail!("--count must be at least 1.");
        }

        if !(0.0..=100.0).contains(&quantile) {
            bail!("--quantile must be between 0 and 100, got {quantile}.");
        }

        Ok(Self {
            op,
            nums,
            count,
            quantile,
            verbose: cli.verbose,
        })
    }

    pub fn print_summary(&self) {
        if !self.verbose {
            return;
        }

        eprintln!("----------------------------------------");
        eprintln!("Request:");
        eprintln!("Operation: {}", self.op.as_str());
        eprintln!("Numbers ({}): {}", self.nums.len(), join_numbers(&self.nums));

        match self.op {
            StatsOp::Min | StatsOp::Max => eprintln!("Count: {}", self.count),
            StatsOp::Percentile => eprintln!("Quantile: {}", self.quantile),
            StatsOp::Avg | StatsOp::Median => {}
        }

        eprintln!("----------------------------------------");
    }
}

impl StatsOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Median => "median",
            Self::Percentile => "percentile",
        }
    }
}

pub fn join_numbers(nums: &[f64]) -> String {
    nums.iter()
        .map(|num| num.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
