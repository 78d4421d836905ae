use heart_risk::models::Percentage;
use heart_risk::schema::keys;
use heart_risk::{FormError, RandomScorer, Scorer, Session, heart_disease_schema};

use crate::utils::{ScriptedScorer, fixed_today, sample_answers};

#[test]
fn test_scorer_called_once_per_cycle_after_conversion() {
    let schema = heart_disease_schema().unwrap();
    let mut session = Session::default();
    let mut scorer = ScriptedScorer::new(vec![12, 99, 1]);

    for expected in [12, 99, 1] {
        let evaluation = session
            .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
            .unwrap();
        assert_eq!(evaluation.score.value(), expected);
    }

    assert_eq!(scorer.calls, 3);
    // Every call saw the converted vector: 13 answers - date + age
    assert_eq!(scorer.seen_lengths, vec![13, 13, 13]);
}

#[test]
fn test_previous_score_follows_successful_cycles() {
    let schema = heart_disease_schema().unwrap();
    let mut session = Session::default();
    let mut scorer = ScriptedScorer::new(vec![40, 75]);

    let first = session
        .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
        .unwrap();
    assert_eq!(first.start_position(), 0);

    // A broken cycle neither scores nor disturbs the previous score
    let mut broken = sample_answers();
    broken.remove(keys::DATE);
    let err = session
        .evaluate(&schema, &broken, &mut scorer, fixed_today())
        .unwrap_err();
    assert!(matches!(err, FormError::MissingField(_)));
    assert_eq!(session.previous().map(Percentage::value), Some(40));

    let second = session
        .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
        .unwrap();
    assert_eq!(second.start_position(), 40);
    assert_eq!(second.score.value(), 75);
    assert_eq!(session.cycles(), 2);
    assert_eq!(scorer.calls, 2);
}

#[test]
fn test_out_of_range_scorer_is_rejected() {
    let schema = heart_disease_schema().unwrap();
    let mut session = Session::default();
    let mut scorer = ScriptedScorer::new(vec![0]);

    let err = session
        .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
        .unwrap_err();
    assert!(matches!(err, FormError::ScoreOutOfRange(0)));
    assert_eq!(session.previous(), None);
}

#[test]
fn test_random_scorer_range_over_many_cycles() {
    let schema = heart_disease_schema().unwrap();
    let mut session = Session::default();
    let mut scorer = RandomScorer::new(Some(2024));

    let mut seen_low = false;
    let mut seen_high = false;
    for _ in 0..2_000 {
        let evaluation = session
            .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
            .unwrap();
        let value = evaluation.score.value();
        assert!((1..=100).contains(&value));
        seen_low |= value <= 10;
        seen_high |= value >= 90;
    }
    assert!(seen_low && seen_high);

    // Direct calls honor the same range
    let features = session
        .evaluate(&schema, &sample_answers(), &mut scorer, fixed_today())
        .unwrap()
        .features;
    let mut unseeded = RandomScorer::default();
    for _ in 0..500 {
        let value = unseeded.score(&features).unwrap().value();
        assert!((Percentage::MIN..=Percentage::MAX).contains(&value));
    }
}
