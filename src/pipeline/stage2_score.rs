use crate::model::{Prediction, Row};

/// Length as JavaScript's `String.length` reports it, so predictions agree
/// with the published baseline even on non-BMP text.
fn answer_len(answer: &str) -> usize {
    answer.encode_utf16().count()
}

/// Index of the longest ending. Only a strictly longer ending replaces the
/// current best, so the lowest index wins ties and an all-empty row maps to 0.
pub fn score_row(row: &Row) -> Prediction {
    let mut best_len = 0usize;
    let mut best_idx = 0u8;
    for (idx, answer) in (0u8..).zip(row.endings()) {
        let len = answer_len(answer);
        if len > best_len {
            best_len = len;
            best_idx = idx;
        }
    }
    Prediction { pred: best_idx }
}

pub fn score_rows(rows: &[Row]) -> Vec<Prediction> {
    rows.iter().map(score_row).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
