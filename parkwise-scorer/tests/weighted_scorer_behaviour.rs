//! Behavioural coverage for `WeightedScorer`.

use parkwise_core::criteria::{
    HANDICAP_SPACES, TIME_FROM_FACILITY, TIME_TO_DESTINATION, TIME_TO_FACILITY,
};
use parkwise_core::{CriterionValues, NormalizationStats, Scorer, WeightVector};
use parkwise_scorer::WeightedScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct ScoringWorld {
    population: RefCell<Vec<CriterionValues>>,
    scores: RefCell<Vec<f64>>,
}

impl ScoringWorld {
    fn stats(&self) -> NormalizationStats {
        NormalizationStats::from_population(&self.population.borrow())
    }

    fn score_all(&self, criterion: &str, weight: f64) {
        let weights = WeightVector::new()
            .with_weight(criterion, weight)
            .expect("finite weight");
        let stats = self.stats();
        let scorer = WeightedScorer::default();
        let scores = self
            .population
            .borrow()
            .iter()
            .map(|values| scorer.score(values, &weights, &stats))
            .collect();
        self.scores.replace(scores);
    }
}

fn car_park(drive: f64, walk: f64) -> CriterionValues {
    CriterionValues::new()
        .with(TIME_TO_FACILITY, drive)
        .with(TIME_FROM_FACILITY, walk)
        .with(HANDICAP_SPACES, 0.0)
}

#[fixture]
fn scoring_world() -> ScoringWorld {
    ScoringWorld::default()
}

#[given("three car parks with short drives and one long walk")]
fn uneven_legs(#[from(scoring_world)] world: &ScoringWorld) {
    world.population.replace(vec![
        car_park(0.0, 0.0),
        car_park(10.0, 100.0),
        car_park(20.0, 0.0),
    ]);
}

#[given("three car parks that all have no accessible bays")]
fn no_accessible_bays(#[from(scoring_world)] world: &ScoringWorld) {
    world.population.replace(vec![
        car_park(5.0, 5.0),
        car_park(10.0, 5.0),
        car_park(15.0, 10.0),
    ]);
}

#[when("they are scored on time to destination with weight 1")]
fn score_time_to_destination(#[from(scoring_world)] world: &ScoringWorld) {
    world.score_all(TIME_TO_DESTINATION, 1.0);
}

#[when("they are scored on accessible bays with weight 5")]
fn score_accessible_bays(#[from(scoring_world)] world: &ScoringWorld) {
    world.score_all(HANDICAP_SPACES, 5.0);
}

#[then("the first car park scores the sum of its normalised legs")]
fn first_scores_leg_sum(#[from(scoring_world)] world: &ScoringWorld) {
    let stats = world.stats();
    let expected =
        stats.normalise(TIME_TO_FACILITY, 0.0) + stats.normalise(TIME_FROM_FACILITY, 0.0);
    let first = world.scores.borrow().first().copied().expect("scored");
    assert!((first - expected).abs() < 1e-12);
}

#[then("every score is zero")]
fn every_score_zero(#[from(scoring_world)] world: &ScoringWorld) {
    assert!(world.scores.borrow().iter().all(|score| *score == 0.0));
}

#[then("the scorer does not recognise shade")]
fn shade_unknown(#[from(scoring_world)] world: &ScoringWorld) {
    assert!(!WeightedScorer::default().recognises("shade", &world.stats()));
}

#[then("the scorer recognises time to destination")]
fn time_to_destination_known(#[from(scoring_world)] world: &ScoringWorld) {
    assert!(WeightedScorer::default().recognises(TIME_TO_DESTINATION, &world.stats()));
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 0)]
fn time_to_destination_sums_legs(#[from(scoring_world)] world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 1)]
fn identical_criteria_contribute_nothing(#[from(scoring_world)] world: ScoringWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 2)]
fn unknown_criteria_are_rejected(#[from(scoring_world)] world: ScoringWorld) {
    let _ = world;
}
