use std::io::Write;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::{PipelineError, Result};
use crate::report::json::render_predictions_json;
use crate::report::{PredictionSummary, format_accuracy, summarize};

pub mod stage1_load;
pub mod stage2_score;
pub mod stage3_write;

use stage1_load::load_rows;
use stage2_score::score_rows;
use stage3_write::write_predictions;

/// Load, score and write, strictly in that order. A load failure returns
/// before anything is written.
pub fn run<W: Write>(config: &RunConfig, stdout: &mut W) -> Result<PredictionSummary> {
    info!(
        mode = config.mode.as_str(),
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "starting run"
    );

    let rows = load_rows(&config.input_path)?;
    let predictions = score_rows(&rows);
    write_predictions(&predictions, &config.output_path)?;

    if config.echo_predictions {
        match render_predictions_json(&predictions) {
            Ok(json) => {
                writeln!(stdout, "{json}").map_err(|e| PipelineError::io("<stdout>", e))?;
            }
            Err(err) => warn!(error = %err, "could not render predictions for echo"),
        }
    }

    let summary = summarize(&rows, &predictions);
    info!(
        n_rows = summary.n_rows,
        pred0 = summary.counts[0],
        pred1 = summary.counts[1],
        pred2 = summary.counts[2],
        pred3 = summary.counts[3],
        labeled = summary.n_labeled,
        accuracy = %format_accuracy(summary.accuracy()),
        "run complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/run.rs"]
mod tests;
