//! Integration tests for the classification scorer.

use neurons::scorer::{normalize, Accuracy, ClassificationScorer};
use neurons::{Matrix, MatrixError};

#[test]
fn normalizes_and_detects_success() {
    let expected = [0.0, 1.0, 0.0];
    let actual = [1.0, 5.0, 2.0];
    let scorer = ClassificationScorer::new(&expected, &actual).unwrap();

    let normalized = scorer.normalized();
    for (got, want) in normalized.iter().zip([0.125, 0.625, 0.25].iter()) {
        assert!((got - want).abs() < 1e-12);
    }
    assert!(scorer.is_correct());
}

#[test]
fn detects_a_wrong_prediction() {
    let expected = [0.0, 0.0, 1.0];
    let actual = [0.1, 0.7, 0.2];
    assert!(!ClassificationScorer::new(&expected, &actual)
        .unwrap()
        .is_correct());
}

#[test]
fn compares_by_magnitude() {
    // -0.9 has the largest magnitude, so the prediction points at index 0.
    let expected = [1.0, 0.0, 0.0];
    let actual = [-0.9, 0.5, 0.3];
    assert!(ClassificationScorer::new(&expected, &actual)
        .unwrap()
        .is_correct());
}

#[test]
fn ties_go_to_the_first_component() {
    let expected = [1.0, 0.0];
    let actual = [0.5, 0.5];
    assert!(ClassificationScorer::new(&expected, &actual)
        .unwrap()
        .is_correct());
}

#[test]
fn zero_sum_is_not_guarded() {
    let normalized = normalize(&[1.0, -1.0]);
    assert!(normalized.iter().all(|v| !v.is_finite()));
}

#[test]
fn rejects_unequal_lengths() {
    let result = ClassificationScorer::new(&[1.0, 0.0], &[1.0]);
    assert!(matches!(result, Err(MatrixError::ShapeMismatch { .. })));
}

#[test]
fn scores_matrices() {
    let label = Matrix::from_fn(10, 1, |i, _| if i == 3 { 1.0 } else { 0.0 });
    let output = Matrix::from_fn(10, 1, |i, _| if i == 3 { 0.9 } else { i as f64 * 0.01 });
    let scorer = ClassificationScorer::from_matrices(&label, &output).unwrap();
    assert!(scorer.is_correct());
}

#[test]
fn accuracy_tally() {
    let mut accuracy = Accuracy::new();
    assert_eq!(accuracy.ratio(), None);
    for correct in [true, false, true, true] {
        accuracy.record(correct);
    }
    assert_eq!(accuracy.correct(), 3);
    assert_eq!(accuracy.total(), 4);
    assert_eq!(accuracy.ratio(), Some(0.75));
}
