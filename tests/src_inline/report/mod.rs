use super::json::render_predictions_json;
use super::*;

fn row(label: Option<&str>) -> Row {
    Row {
        start_phrase: String::new(),
        ending0: String::new(),
        ending1: String::new(),
        ending2: String::new(),
        ending3: String::new(),
        label: label.map(str::to_string),
    }
}

fn preds(values: &[u8]) -> Vec<Prediction> {
    values.iter().map(|&pred| Prediction { pred }).collect()
}

#[test]
fn test_summary_counts_and_accuracy() {
    let rows = vec![row(Some("1")), row(Some("0")), row(Some("1")), row(None)];
    let predictions = preds(&[1, 1, 3, 0]);

    let summary = summarize(&rows, &predictions);
    assert_eq!(summary.n_rows, 4);
    assert_eq!(summary.counts, [1, 2, 0, 1]);
    assert_eq!(summary.n_labeled, 3);
    assert_eq!(summary.n_correct, 1);
    let acc = summary.accuracy().unwrap();
    assert!((acc - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(format_accuracy(summary.accuracy()), "0.3333");
}

#[test]
fn test_summary_without_labels() {
    let rows = vec![row(None), row(Some("n/a"))];
    let summary = summarize(&rows, &preds(&[0, 2]));
    assert_eq!(summary.n_labeled, 0);
    assert_eq!(summary.accuracy(), None);
    assert_eq!(format_accuracy(summary.accuracy()), "n/a");
}

#[test]
fn test_empty_summary() {
    let summary = summarize(&[], &[]);
    assert_eq!(summary.n_rows, 0);
    assert_eq!(summary.counts, [0; 4]);
}

#[test]
fn test_predictions_json() {
    assert_eq!(render_predictions_json(&[]).unwrap(), "[]");
    assert_eq!(
        render_predictions_json(&preds(&[0, 2, 3])).unwrap(),
        "[{\"pred\":0},{\"pred\":2},{\"pred\":3}]"
    );
}
