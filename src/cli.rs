use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vercmp", version, about = "Compare two dotted version strings")]
pub struct Cli {
    /// First version to compare
    #[arg(value_name = "VERSION1")]
    pub version1: String,

    /// Second version to compare
    #[arg(value_name = "VERSION2")]
    pub version2: String,
}

#[derive(Parser, Debug)]
#[command(name = "numstat", version, about = "Summary statistics over a list of numbers")]
pub struct StatsCli {
    #[command(subcommand)]
    pub command: StatsCommand,

    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum StatsCommand {
    /// The n smallest numbers
    Min(CountArgs),
    /// The n largest numbers
    Max(CountArgs),
    /// Arithmetic mean
    Avg(NumsArgs),
    /// Median
    Median(NumsArgs),
    /// Nearest-rank percentile
    Percentile(QuantileArgs),
}

#[derive(Args, Debug)]
pub struct NumsArgs {
    #[arg(value_name = "NUM", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub nums: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    #[command(flatten)]
    pub nums: NumsArgs,

    #[arg(short = 'n', long = "count", default_value_t = 1)]
    pub count: usize,
}

#[derive(Args, Debug)]
pub struct QuantileArgs {
    #[command(flatten)]
    pub nums: NumsArgs,

    #[arg(
        short = 'q',
        long = "quantile",
        default_value_t = 50.0,
        allow_negative_numbers = true
    )]
    pub quantile: f64,
}
