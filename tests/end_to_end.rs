//! End-to-end tests through the facade with the default scorer and solver.

use geo::Coord;
use parkwise_core::test_support::FacilityBuilder;
use parkwise_engine::{
    AssignmentSolver, CostMatrix, FacilityId, HungarianSolver, Journey, ParkingPlanner,
    ParkingRequest, ScoredFacility, SpaceRequirement, TierTimes, TimeModel, TrafficTier,
    WeightVector, WeightedScorer, criteria, is_eligible, rank,
};
use rstest::{fixture, rstest};

#[fixture]
fn door_to_door() -> WeightVector {
    WeightVector::new()
        .with_weight(criteria::TIME_TO_DESTINATION, -1.0)
        .expect("finite weight")
}

fn scored(id: u64, score: f64) -> ScoredFacility {
    ScoredFacility {
        facility: FacilityBuilder::new(id).build(),
        score,
        journey: Journey::default(),
    }
}

#[rstest]
fn grid_distance_sums_axes_before_scaling() {
    let model = TimeModel::new(TierTimes::default());
    let time = model.time(Coord { x: 0, y: 0 }, Coord { x: 2, y: 3 }, TrafficTier::Low);
    assert_eq!(time.as_secs(), 25 * 60);
}

#[rstest]
#[case::tie_first(vec![scored(1, 2.1), scored(2, 2.1), scored(3, 1.4)])]
#[case::low_first(vec![scored(3, 1.4), scored(1, 2.1), scored(2, 2.1)])]
fn equal_scores_keep_input_order(#[case] input: Vec<ScoredFacility>) {
    let ids: Vec<u64> = rank(input).iter().map(|entry| entry.id().0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
fn handicap_requirement_excludes_the_top_ranked_site() {
    let facilities = vec![
        FacilityBuilder::new(1).at(1, 0).build(),
        FacilityBuilder::new(2).at(8, 0).handicap(2).build(),
    ];
    let weights = WeightVector::new()
        .with_weight(criteria::TIME_TO_FACILITY, -1.0)
        .expect("finite weight");
    let planner = ParkingPlanner::new(facilities, WeightedScorer::default());
    let anyone = ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 0, y: 0 });

    let open = planner.rank(&anyone, &weights).expect("ranking");
    assert_eq!(open.best().map(ScoredFacility::id), Some(FacilityId(1)));

    let accessible = planner
        .rank(&anyone.clone().requiring(SpaceRequirement::Handicap), &weights)
        .expect("ranking");
    let ids: Vec<FacilityId> = accessible.scores().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![FacilityId(2)]);
}

#[rstest]
fn full_facilities_are_never_ranked(door_to_door: WeightVector) {
    let full = FacilityBuilder::new(1).at(0, 1).slots(&[true, true]).build();
    assert!(!is_eligible(&full, &SpaceRequirement::None));

    let planner = ParkingPlanner::new(
        vec![full, FacilityBuilder::new(2).at(9, 9).build()],
        WeightedScorer::default(),
    );
    let request = ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 0, y: 1 });
    let ranking = planner.rank(&request, &door_to_door).expect("ranking");

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.best().map(ScoredFacility::id), Some(FacilityId(2)));
}

#[rstest]
fn recommendation_prefers_the_quickest_drive(door_to_door: WeightVector) {
    let facilities = vec![
        FacilityBuilder::new(1).at(2, 0).tier(TrafficTier::High).build(),
        FacilityBuilder::new(2).at(4, 0).tier(TrafficTier::Low).build(),
        FacilityBuilder::new(3).at(1, 0).slots(&[true]).build(),
    ];
    let planner = ParkingPlanner::new(facilities, WeightedScorer::default());
    let request = ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 10, y: 0 });

    let recommendation = planner.recommend(&request, &door_to_door).expect("ranking");

    // 2 units at 15 min/unit is slower than 4 units at 5 min/unit.
    assert_eq!(recommendation.recommended, Some(FacilityId(2)));
    assert_eq!(recommendation.ranking.len(), 2);
}

#[rstest]
#[expect(clippy::float_cmp, reason = "integral costs sum exactly")]
fn crossed_costs_prefer_the_cheaper_total() {
    let costs = CostMatrix::new(vec![vec![4.0, 1.0], vec![2.0, 3.0]]).expect("valid");
    let assignment = HungarianSolver::new().solve(&costs).expect("solvable");

    assert_eq!(assignment.facility_for(0), Some(1));
    assert_eq!(assignment.facility_for(1), Some(0));
    assert_eq!(assignment.total_cost(), 3.0);
}

#[rstest]
#[expect(clippy::float_cmp, reason = "z-scores of two values are exactly ±1")]
fn competing_drivers_get_distinct_car_parks(door_to_door: WeightVector) {
    let facilities = vec![
        FacilityBuilder::new(1).at(1, 0).build(),
        FacilityBuilder::new(2).at(5, 0).build(),
    ];
    let planner = ParkingPlanner::new(facilities, WeightedScorer::default());
    let requests = [
        ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 0, y: 0 }),
        ParkingRequest::new(Coord { x: 2, y: 0 }, Coord { x: 2, y: 0 }),
    ];

    let plan = planner
        .assign(&HungarianSolver::new(), &requests, &door_to_door)
        .expect("plan");

    let first = plan.facility_for(0).expect("first request matched");
    let second = plan.facility_for(1).expect("second request matched");
    assert_ne!(first, second);
    assert!(plan.unmatched().is_empty());
    // Both drivers prefer car park 1 by the same margin, so one of them
    // gives up exactly that margin.
    assert_eq!(
        plan.assignment.as_ref().map(|assignment| assignment.total_cost()),
        Some(4.0)
    );
}

#[cfg(feature = "serde")]
#[rstest]
fn capacity_mode_from_configuration_shares_a_car_park(door_to_door: WeightVector) {
    use parkwise_engine::{AssignmentMode, PlannerConfig};

    let config = PlannerConfig::from_json_str(r#"{"assignment_mode": "by_capacity"}"#)
        .expect("valid configuration");
    assert_eq!(config.assignment_mode, AssignmentMode::ByCapacity);

    let facilities = vec![FacilityBuilder::new(7).slots(&[false, false, true]).build()];
    let requests = [
        ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 0, y: 0 }),
        ParkingRequest::new(Coord { x: 3, y: 0 }, Coord { x: 0, y: 0 }),
    ];

    let one_to_one = ParkingPlanner::new(facilities.clone(), WeightedScorer::default())
        .assign(&HungarianSolver::new(), &requests, &door_to_door)
        .expect("plan");
    assert_eq!(one_to_one.unmatched().len(), 1);

    let shared = ParkingPlanner::with_config(facilities, WeightedScorer::default(), config)
        .assign(&HungarianSolver::new(), &requests, &door_to_door)
        .expect("plan");
    assert_eq!(shared.facility_for(0), Some(FacilityId(7)));
    assert_eq!(shared.facility_for(1), Some(FacilityId(7)));
}
