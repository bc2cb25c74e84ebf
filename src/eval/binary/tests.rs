//! Tests for binary classification metrics

use crate::error::Error;
use crate::eval::binary::{binary_classification_metrics_to, BinaryConfusion};

#[test]
fn test_tally_single_pass() {
    let tally = BinaryConfusion::from_labels(&[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
    assert_eq!(tally.tp, 2);
    assert_eq!(tally.tn, 1);
    assert_eq!(tally.fp, 0);
    assert_eq!(tally.fn_, 1);
    assert_eq!(tally.total(), 4);
}

#[test]
fn test_metrics_reference_case() {
    // preds=[1,0,1,1], truths=[1,0,0,1] -> acc 0.75, p 1.0, r 2/3, f1 0.8
    let tally = BinaryConfusion::from_labels(&[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
    let m = tally.metrics().unwrap();
    assert!((m.accuracy - 0.75).abs() < 1e-12);
    assert!((m.precision - 1.0).abs() < 1e-12);
    assert!((m.recall - 2.0 / 3.0).abs() < 1e-12);
    assert!((m.f1 - 0.8).abs() < 1e-12);
}

#[test]
fn test_tuple_order_is_precision_recall_f1_accuracy() {
    let mut sink = Vec::new();
    let (precision, recall, f1, accuracy) =
        binary_classification_metrics_to(&mut sink, &[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
    // The first element is precision (1.0 here), the last is accuracy (0.75):
    // distinguishable values pin the order.
    assert_eq!(precision, 1.0);
    assert_eq!(accuracy, 0.75);
    assert!((recall - 2.0 / 3.0).abs() < 1e-12);
    assert!((f1 - 0.8).abs() < 1e-12);
}

#[test]
fn test_summary_written_in_tally_order() {
    let mut sink = Vec::new();
    binary_classification_metrics_to(&mut sink, &[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
    let text = String::from_utf8(sink).unwrap();

    assert!(text.contains("TP: 2"));
    assert!(text.contains("TN: 1"));
    assert!(text.contains("FP: 0"));
    assert!(text.contains("FN: 1"));
    assert!(text.contains("Accuracy: 0.7500"));
    assert!(text.contains("Precision: 1.0000"));
    assert!(text.contains("Recall: 0.6667"));
    assert!(text.contains("F1: 0.8000"));

    // Counts appear before any metric line
    let tp_pos = text.find("TP:").unwrap();
    let acc_pos = text.find("Accuracy:").unwrap();
    assert!(tp_pos < acc_pos);
}

#[test]
fn test_perfect_prediction() {
    let tally = BinaryConfusion::from_labels(&[1, 0, 1, 0], &[1, 0, 1, 0]).unwrap();
    let m = tally.metrics().unwrap();
    assert_eq!(m.accuracy, 1.0);
    assert_eq!(m.precision, 1.0);
    assert_eq!(m.recall, 1.0);
    assert_eq!(m.f1, 1.0);
}

#[test]
fn test_no_positive_truths_recall_undefined() {
    // preds=[0,0], truths=[0,0] -> tp=0, fn=0 -> recall undefined
    let tally = BinaryConfusion::from_labels(&[0, 0], &[0, 0]).unwrap();
    assert_eq!(tally.accuracy().unwrap(), 1.0);

    let err = tally.recall().unwrap_err();
    assert!(matches!(err, Error::UndefinedMetric { metric: "recall", .. }));

    // precision shares the fate here (tp + fp = 0), and so does metrics()
    assert!(tally.precision().is_err());
    assert!(tally.metrics().is_err());
}

#[test]
fn test_undefined_metrics_still_summarized() {
    let tally = BinaryConfusion::from_labels(&[0, 0], &[0, 0]).unwrap();
    let text = tally.summary();
    assert!(text.contains("Accuracy: 1.0000"));
    assert!(text.contains("Recall: undefined"));
    assert!(text.contains("Precision: undefined"));
}

#[test]
fn test_no_positive_predictions_precision_undefined() {
    let tally = BinaryConfusion::from_labels(&[0, 0, 0], &[1, 0, 1]).unwrap();
    let err = tally.precision().unwrap_err();
    assert!(matches!(err, Error::UndefinedMetric { metric: "precision", .. }));
    // recall is defined (and zero)
    assert_eq!(tally.recall().unwrap(), 0.0);
}

#[test]
fn test_f1_undefined_when_precision_and_recall_zero() {
    // One positive truth missed, one false positive: p = 0, r = 0
    let tally = BinaryConfusion::from_labels(&[1, 0], &[0, 1]).unwrap();
    assert_eq!(tally.precision().unwrap(), 0.0);
    assert_eq!(tally.recall().unwrap(), 0.0);
    let err = tally.f1().unwrap_err();
    assert!(matches!(err, Error::UndefinedMetric { metric: "f1", .. }));
}

#[test]
fn test_length_mismatch_rejected() {
    let err = BinaryConfusion::from_labels(&[1, 0, 1], &[1, 0]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(format!("{err}").contains("3 vs 2"));
}

#[test]
fn test_empty_input_rejected() {
    let err = BinaryConfusion::from_labels(&[], &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_non_binary_label_rejected() {
    let err = BinaryConfusion::from_labels(&[1, 2], &[1, 0]).unwrap_err();
    assert!(format!("{err}").contains("must be 0 or 1"));
}

#[test]
fn test_tally_sums_to_n() {
    let y_pred = [1, 0, 0, 1, 1, 0, 1, 0, 1];
    let y_true = [0, 0, 1, 1, 0, 0, 1, 1, 1];
    let tally = BinaryConfusion::from_labels(&y_pred, &y_true).unwrap();
    assert_eq!(tally.total(), y_pred.len());
}

#[test]
fn test_serde_round_trip() {
    let tally = BinaryConfusion::from_labels(&[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
    let json = serde_json::to_string(&tally).unwrap();
    assert!(json.contains("\"fn\":1"));
    let back: BinaryConfusion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tally);
}
