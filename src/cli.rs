use clap::Parser;

use crate::config::RunMode;

/// Longest-answer baseline for SWAG-style multiple-choice datasets.
///
/// Reads the dataset, predicts the longest ending for every row and writes
/// the predictions to the leaderboard location.
#[derive(Parser, Debug)]
#[command(name = "swag-longest-answer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run against the bundled sample and print predictions (only `true` enables it)
    #[arg(
        long = "testing",
        env = "TESTING",
        value_name = "VALUE",
        default_value = "false",
        value_parser = parse_mode
    )]
    pub mode: RunMode,

    /// Log filter, e.g. `debug` or `swag_longest_answer=trace`
    #[arg(long, env = "SWAG_BASELINE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_mode(value: &str) -> Result<RunMode, String> {
    Ok(RunMode::from_toggle(value))
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
