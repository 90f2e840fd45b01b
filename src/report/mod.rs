pub mod json;

use crate::model::{Prediction, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSummary {
    pub n_rows: usize,
    /// Number of rows predicted as each ending index.
    pub counts: [usize; Row::N_ENDINGS],
    /// Rows carrying a usable `label` and how many of those the baseline got right.
    pub n_labeled: usize,
    pub n_correct: usize,
}

impl PredictionSummary {
    pub fn accuracy(&self) -> Option<f64> {
        if self.n_labeled == 0 {
            return None;
        }
        Some(self.n_correct as f64 / self.n_labeled as f64)
    }
}

/// `rows` and `predictions` are positionally aligned.
pub fn summarize(rows: &[Row], predictions: &[Prediction]) -> PredictionSummary {
    let mut counts = [0usize; Row::N_ENDINGS];
    let mut n_labeled = 0usize;
    let mut n_correct = 0usize;

    for (row, prediction) in rows.iter().zip(predictions) {
        if let Some(slot) = counts.get_mut(usize::from(prediction.pred)) {
            *slot += 1;
        }
        if let Some(label) = row.label_index() {
            n_labeled += 1;
            if label == prediction.pred {
                n_correct += 1;
            }
        }
    }

    PredictionSummary {
        n_rows: predictions.len(),
        counts,
        n_labeled,
        n_correct,
    }
}

pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(value) => format!("{value:.4}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
