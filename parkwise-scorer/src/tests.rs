//! Unit tests for weighted scoring and composite criteria.

use parkwise_core::criteria::{
    HANDICAP_SPACES, TIME_FROM_FACILITY, TIME_TO_DESTINATION, TIME_TO_FACILITY,
};
use parkwise_core::{CriterionValues, NormalizationStats, Scorer, WeightVector};
use rstest::{fixture, rstest};

use super::*;

fn legs(drive: f64, walk: f64) -> CriterionValues {
    CriterionValues::new()
        .with(TIME_TO_FACILITY, drive)
        .with(TIME_FROM_FACILITY, walk)
        .with(HANDICAP_SPACES, 0.0)
}

/// Drive legs on a small scale, walk legs on a large one.
#[fixture]
fn population() -> Vec<CriterionValues> {
    vec![legs(0.0, 0.0), legs(10.0, 100.0), legs(20.0, 0.0)]
}

fn weights(criterion: &str, weight: f64) -> WeightVector {
    WeightVector::new()
        .with_weight(criterion, weight)
        .expect("finite weight")
}

#[rstest]
fn composite_normalises_each_part_before_summing(population: Vec<CriterionValues>) {
    let stats = NormalizationStats::from_population(&population);
    let scorer = WeightedScorer::default();

    let score = scorer.score(&population[0], &weights(TIME_TO_DESTINATION, 1.0), &stats);

    // z(drive) = -1.2247..., z(walk) = -0.7071...
    let expected = -(1.5_f64.sqrt()) - 0.5_f64.sqrt();
    assert!((score - expected).abs() < 1e-9, "score was {score}");

    let pre_summed = NormalizationStats::from_population(&[
        CriterionValues::new().with("total", 0.0),
        CriterionValues::new().with("total", 110.0),
        CriterionValues::new().with("total", 20.0),
    ]);
    assert!((pre_summed.normalise("total", 0.0) - score).abs() > 0.5);
}

#[rstest]
#[expect(clippy::float_cmp, reason = "constant criteria contribute exactly zero")]
fn identical_criteria_contribute_nothing(population: Vec<CriterionValues>) {
    let stats = NormalizationStats::from_population(&population);
    let scorer = WeightedScorer::default();
    let heavy = weights(HANDICAP_SPACES, 50.0);

    for values in &population {
        assert_eq!(scorer.score(values, &heavy, &stats), 0.0);
    }
}

#[rstest]
#[expect(clippy::float_cmp, reason = "single-criterion sums are exact")]
fn absent_weights_contribute_nothing(population: Vec<CriterionValues>) {
    let stats = NormalizationStats::from_population(&population);
    let scorer = WeightedScorer::default();
    let drive_only = weights(TIME_TO_FACILITY, -1.0);

    let contributions = scorer.contributions(&population[2], &drive_only, &stats);

    assert_eq!(contributions.len(), 1);
    assert_eq!(
        scorer.score(&population[2], &drive_only, &stats),
        -stats.normalise(TIME_TO_FACILITY, 20.0)
    );
}

#[rstest]
fn recognition_requires_every_part(population: Vec<CriterionValues>) {
    let stats = NormalizationStats::from_population(&population);
    let scorer = WeightedScorer::default()
        .with_composite(Composite::new("comfort", ["shade", TIME_FROM_FACILITY]).expect("parts"))
        .expect("valid composite");

    assert!(scorer.recognises(TIME_TO_DESTINATION, &stats));
    assert!(scorer.recognises(HANDICAP_SPACES, &stats));
    assert!(!scorer.recognises("comfort", &stats));
    assert!(!scorer.recognises("shade", &stats));
}

#[rstest]
fn raw_only_scorer_does_not_know_time_to_destination(population: Vec<CriterionValues>) {
    let stats = NormalizationStats::from_population(&population);
    assert!(!WeightedScorer::without_composites().recognises(TIME_TO_DESTINATION, &stats));
}

#[rstest]
#[expect(clippy::float_cmp, reason = "zero is exact")]
fn missing_values_score_zero() {
    let stats = NormalizationStats::default();
    let score = WeightedScorer::default().score(
        &CriterionValues::new(),
        &weights(TIME_TO_DESTINATION, 3.0),
        &stats,
    );
    assert_eq!(score, 0.0);
}

#[rstest]
fn composites_need_parts() {
    let err = Composite::new("empty", Vec::<String>::new()).expect_err("no parts");
    assert_eq!(
        err,
        CompositeError::NoParts {
            name: "empty".into()
        }
    );
}

#[rstest]
fn composites_cannot_contain_themselves() {
    let err = Composite::new("loop", ["loop", "other"]).expect_err("self reference");
    assert!(matches!(err, CompositeError::Nested { .. }));
}

#[rstest]
fn composites_cannot_nest() {
    let nested = Composite::new("door_to_door", [TIME_TO_DESTINATION, HANDICAP_SPACES])
        .expect("syntactically valid");
    let err = WeightedScorer::default()
        .with_composite(nested)
        .expect_err("nested composite");
    assert_eq!(
        err,
        CompositeError::Nested {
            name: "door_to_door".into(),
            part: TIME_TO_DESTINATION.into(),
        }
    );
}

#[rstest]
fn composite_names_cannot_reuse_parts() {
    let clash = Composite::new(TIME_TO_FACILITY, [HANDICAP_SPACES]).expect("valid");
    let err = WeightedScorer::default()
        .with_composite(clash)
        .expect_err("name already a part");
    assert!(matches!(err, CompositeError::UsedAsPart { .. }));
}
