use std::path::PathBuf;

/// Dataset mounted into the production container.
pub const PRODUCTION_INPUT: &str = "/swag.csv";
/// Bundled sample, resolved against the working directory.
pub const TEST_INPUT: &str = "data/swag-dev-sample.csv";
/// Where the leaderboard collects predictions, in both modes.
pub const PREDICTIONS_OUTPUT: &str = "/results/predictions.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Production,
    Test,
}

impl RunMode {
    /// Only the exact value `true` selects test mode.
    pub fn from_toggle(value: &str) -> Self {
        if value == "true" {
            RunMode::Test
        } else {
            RunMode::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Production => "production",
            RunMode::Test => "test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: RunMode,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Print the prediction list to stdout once the file is written.
    pub echo_predictions: bool,
}

impl RunConfig {
    pub fn for_mode(mode: RunMode) -> Self {
        let input = match mode {
            RunMode::Production => PRODUCTION_INPUT,
            RunMode::Test => TEST_INPUT,
        };
        RunConfig {
            mode,
            input_path: PathBuf::from(input),
            output_path: PathBuf::from(PREDICTIONS_OUTPUT),
            echo_predictions: mode == RunMode::Test,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
