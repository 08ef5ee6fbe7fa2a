use super::*;
use crate::model::Athlete;
use crate::model::Attribute::*;

fn table() -> AttributeTable {
    AttributeTable::new(vec![
        Athlete::new(
            "A",
            &[(Sprint, 9.5), (Hilly, 5.5), (Mountain, 2.5), (CurrentForm, 8.5)],
        ),
        Athlete::new(
            "B",
            &[
                (Sprint, 4.5),
                (Hilly, 8.0),
                (Mountain, 9.5),
                (CurrentForm, 6.5),
                (Injury, 1.0),
            ],
        ),
        Athlete::new(
            "C",
            &[(Sprint, 5.0), (Hilly, 8.5), (Mountain, 9.0), (CurrentForm, 9.0)],
        ),
    ])
    .unwrap()
}

fn assert_normalized(w: &WeightVector) {
    assert!((w.skill_sum() - 1.0).abs() <= 0.02, "sum {}", w.skill_sum());
}

#[test]
fn test_single_winner_weights_follow_profile() {
    let obs: RankObservation = [("A", 1)].into_iter().collect();
    let w = learn_weights(&table(), &obs).unwrap();
    let total = 9.5 + 5.5 + 2.5 + 8.5;
    assert_eq!(w.get(Sprint), Some(round2(9.5 / total)));
    assert_eq!(w.get(Hilly), Some(round2(5.5 / total)));
    assert_eq!(w.get(Mountain), Some(round2(2.5 / total)));
    assert_eq!(w.get(CurrentForm), Some(round2(8.5 / total)));
    assert_normalized(&w);
}

#[test]
fn test_penalty_never_learned() {
    let obs: RankObservation = [("B", 1), ("A", 2)].into_iter().collect();
    let w = learn_weights(&table(), &obs).unwrap();
    assert_eq!(w.get(Injury), None);
    assert_eq!(w.len(), 4);
    assert_normalized(&w);
}

#[test]
fn test_better_rank_gets_more_credit() {
    let climber_wins: RankObservation = [("B", 1), ("A", 5)].into_iter().collect();
    let sprinter_wins: RankObservation = [("A", 1), ("B", 5)].into_iter().collect();
    let w1 = learn_weights(&table(), &climber_wins).unwrap();
    let w2 = learn_weights(&table(), &sprinter_wins).unwrap();
    assert!(w1.get(Mountain).unwrap() > w2.get(Mountain).unwrap());
    assert!(w2.get(Sprint).unwrap() > w1.get(Sprint).unwrap());
}

#[test]
fn test_invalid_and_unknown_entries_ignored() {
    let noisy: RankObservation = [("A", 1), ("B", 0), ("C", -3), ("Nobody", 1)]
        .into_iter()
        .collect();
    let clean: RankObservation = [("A", 1)].into_iter().collect();
    assert_eq!(
        learn_weights(&table(), &noisy).unwrap(),
        learn_weights(&table(), &clean).unwrap()
    );
}

#[test]
fn test_empty_observation() {
    let none = RankObservation::new();
    assert!(matches!(
        learn_weights(&table(), &none),
        Err(Error::EmptyObservation)
    ));
    let unusable: RankObservation = [("A", 0), ("Nobody", 2)].into_iter().collect();
    assert!(matches!(
        learn_weights(&table(), &unusable),
        Err(Error::EmptyObservation)
    ));
}

#[test]
fn test_all_zero_ratings_are_degenerate() {
    let zero = |name: &str| Athlete::new(name, &[(Sprint, 0.0), (Hilly, 0.0)]);
    let table = AttributeTable::new(vec![zero("X"), zero("Y")]).unwrap();
    let obs: RankObservation = [("X", 1), ("Y", 2)].into_iter().collect();
    assert!(matches!(
        learn_weights(&table, &obs),
        Err(Error::DegenerateWeights { .. })
    ));
}

#[test]
fn test_zero_total_athlete_skipped() {
    let table = AttributeTable::new(vec![
        Athlete::new("X", &[(Sprint, 0.0), (Hilly, 0.0)]),
        Athlete::new("Y", &[(Sprint, 3.0), (Hilly, 1.0)]),
    ])
    .unwrap();
    let obs: RankObservation = [("X", 1), ("Y", 2)].into_iter().collect();
    let w = learn_weights(&table, &obs).unwrap();
    assert_eq!(w.get(Sprint), Some(0.75));
    assert_eq!(w.get(Hilly), Some(0.25));
}
