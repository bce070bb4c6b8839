use std::io::Write;

use anyhow::{Context, Result};

use crate::compare;
use crate::config::{CompareRequest, StatsOp, StatsRequest, join_numbers};
use crate::stats;

/// `1`, `-1` or `0` for the request's ordering.
pub fn compare_output(request: &CompareRequest) -> Result<String> {
    let ordering = compare::compare_versions(&request.version1, &request.version2)?;
    Ok((ordering as i8).to_string())
}

pub fn stats_output(request: &StatsRequest) -> Result<String> {
    let nums = &request.nums;

    let rendered = match request.op {
        StatsOp::Min => join_numbers(&stats::smallest_n(nums, request.count)?),
        StatsOp::Max => join_numbers(&stats::largest_n(nums, request.count)?),
        StatsOp::Avg => stats::average(nums)?.to_string(),
        StatsOp::Median => stats::median(nums)?.to_string(),
        StatsOp::Percentile => stats::percentile(nums, request.quantile)?.to_string(),
    };

    Ok(rendered)
}

pub fn run_compare(request: CompareRequest) -> Result<()> {
    let rendered = compare_output(&request)?;
    write_line(&rendered)
}

pub fn run_stats(request: StatsRequest) -> Result<()> {
    let rendered = stats_output(&request)
        .with_context(|| format!("Failed to compute {}", request.op.as_str()))?;

    write_line(&rendered)
}

fn write_line(rendered: &str) -> Result<()> {
    let stdout = std::io::stdout();
    write_result(&mut stdout.lock(), rendered)
}

pub fn write_result<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    writeln!(out, "{rendered}").context("Failed to write result to stdout")?;
    out.flush().context("Failed to flush result to stdout")?;
    Ok(())
}
