use crate::model::Prediction;

/// `[{"pred":0},{"pred":2},...]`, the shape the leaderboard expects.
pub fn render_predictions_json(predictions: &[Prediction]) -> serde_json::Result<String> {
    serde_json::to_string(predictions)
}
