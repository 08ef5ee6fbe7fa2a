use super::*;
use crate::model::Attribute::*;

#[test]
fn test_builtin_profiles_sum_to_one() {
    let profiles = builtin_profiles();
    assert_eq!(profiles.len(), 6);
    for p in &profiles {
        assert!((p.weights.skill_sum() - 1.0).abs() < 1e-9, "{}", p.id);
        assert_eq!(p.weights.get(Injury), Some(-0.2));
    }
}

#[test]
fn test_with_returns_new_vector() {
    let base = WeightVector::new(&[(Sprint, 0.6), (Hilly, 0.4)]);
    let changed = base.with(Sprint, 1.2);
    assert_eq!(base.get(Sprint), Some(0.6));
    assert_eq!(changed.get(Sprint), Some(1.2));
}

#[test]
fn test_penalties_carried_over() {
    let learned = WeightVector::new(&[(Sprint, 0.7), (Hilly, 0.3)]);
    let prior = WeightVector::new(&[(Sprint, 0.1), (Hilly, 0.9), (Injury, -0.2)]);
    let merged = learned.with_penalties_from(&prior);
    assert_eq!(merged.get(Sprint), Some(0.7));
    assert_eq!(merged.get(Injury), Some(-0.2));
    assert!((merged.skill_sum() - 1.0).abs() < 1e-9);
}

#[test]
fn test_serializes_as_plain_object() {
    let w = WeightVector::new(&[(Sprint, 0.25), (CurrentForm, 0.75)]);
    let json = serde_json::to_string(&w).unwrap();
    assert_eq!(json, r#"{"Sprint":0.25,"CurrentForm":0.75}"#);
}
