use anyhow::Result;
use clap::Parser;

use vercmp::{cli, config, run};

fn main() -> Result<()> {
    let cli = cli::StatsCli::parse();
    let request = config::StatsRequest::from_cli(cli)?;
    request.print_summary();

    run::run_stats(request)
}
