use super::*;

#[test]
fn test_identical_scores_give_full_confidence() {
    let c = confidence(&[4.2, 4.2, 4.2, 4.2]).unwrap();
    assert_eq!(c.value, 1.0);
    assert_eq!(c.stddev, 0.0);
}

#[test]
fn test_identical_scores_with_inexact_mean() {
    // Neither sum / n reproduces the value exactly.
    for scores in [vec![0.1; 3], vec![5.45; 7], vec![8.8; 7]] {
        let c = confidence(&scores).unwrap();
        assert_eq!(c.stddev, 0.0, "{scores:?}");
        assert_eq!(c.value, 1.0, "{scores:?}");
    }
}

#[test]
fn test_sample_stddev() {
    // mean 5, squared deviations 9 + 1 + 1 + 9 = 20, n - 1 = 3
    let sd = sample_stddev(&[2.0, 4.0, 6.0, 8.0]).unwrap();
    assert!((sd - (20.0f64 / 3.0).sqrt()).abs() < 1e-12);

    let c = confidence(&[2.0, 4.0, 6.0, 8.0]).unwrap();
    assert!((c.value - (1.0 - sd / 5.0)).abs() < 1e-12);
    assert_eq!(c.mean, 5.0);
}

#[test]
fn test_single_score_has_no_spread() {
    let c = confidence(&[3.0]).unwrap();
    assert_eq!(c.value, 1.0);
}

#[test]
fn test_zero_mean_and_empty_fail() {
    assert!(matches!(
        confidence(&[-1.0, 1.0]),
        Err(Error::DivisionByZero(_))
    ));
    assert!(matches!(confidence(&[]), Err(Error::DivisionByZero(_))));
}

#[test]
fn test_negative_mean_allowed() {
    let c = confidence(&[-2.0, -4.0]).unwrap();
    assert!(c.value > 1.0);
}

#[test]
fn test_rounding_is_display_only() {
    let c = confidence(&[8.80, 5.45]).unwrap();
    assert_eq!(c.rounded(), round2(c.value));
    assert_ne!(c.rounded(), c.value);
}
