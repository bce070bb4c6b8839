use anyhow::Result;
use clap::Parser;

use vercmp::{cli, config, run};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let request = config::CompareRequest::from_cli(cli)?;

    run::run_compare(request)
}
