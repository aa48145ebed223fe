//! Behavioural tests for `HungarianSolver` using rstest-bdd.

use std::cell::RefCell;

use parkwise_core::{Assignment, AssignmentError, AssignmentSolver, CostMatrix};
use parkwise_solver_hungarian::HungarianSolver;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct SolverWorld {
    costs: RefCell<CostMatrix>,
    solver: RefCell<HungarianSolver>,
    outcome: RefCell<Option<Result<Assignment, AssignmentError>>>,
}

impl SolverWorld {
    fn new() -> Self {
        Self {
            costs: RefCell::new(CostMatrix::default()),
            solver: RefCell::new(HungarianSolver::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Assignment, AssignmentError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_assignment(&self) -> Assignment {
        self.expect_outcome().expect("expected solve success")
    }
}

#[fixture]
fn world() -> SolverWorld {
    SolverWorld::new()
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn costs(rows: Vec<Vec<f64>>) -> CostMatrix {
    CostMatrix::new(rows).expect("valid cost matrix")
}

#[given("a two by two cost matrix with crossed minima")]
fn given_crossed_matrix(world: &SolverWorld) {
    world
        .costs
        .replace(costs(vec![vec![4.0, 1.0], vec![2.0, 3.0]]));
}

#[given("three requests competing for one facility")]
fn given_tall_matrix(world: &SolverWorld) {
    world
        .costs
        .replace(costs(vec![vec![5.0], vec![1.0], vec![3.0]]));
}

#[given("a solver limited to three cells")]
fn given_small_solver(world: &SolverWorld) {
    world.solver.replace(HungarianSolver::with_max_cells(3));
}

#[when("the Hungarian solver runs")]
fn when_solver_runs(world: &SolverWorld) {
    let solver = *world.solver.borrow();
    let outcome = solver.solve(&world.costs.borrow());
    world.outcome.replace(Some(outcome));
}

#[then("request 0 is matched to facility 1")]
fn then_first_request_matched(world: &SolverWorld) {
    assert_eq!(world.expect_assignment().facility_for(0), Some(1));
}

#[then("request 1 is matched to facility 0")]
fn then_second_request_matched(world: &SolverWorld) {
    assert_eq!(world.expect_assignment().facility_for(1), Some(0));
}

#[then("only request 1 is matched")]
fn then_only_second_request_matched(world: &SolverWorld) {
    let assignment = world.expect_assignment();
    assert_eq!(assignment.pairs(), &[(1, 0)]);
    assert_eq!(assignment.facility_for(0), None);
    assert_eq!(assignment.facility_for(2), None);
}

#[then("the total cost is 3")]
#[expect(clippy::float_cmp, reason = "integral costs sum exactly")]
fn then_total_three(world: &SolverWorld) {
    assert_eq!(world.expect_assignment().total_cost(), 3.0);
}

#[then("the total cost is 1")]
#[expect(clippy::float_cmp, reason = "integral costs sum exactly")]
fn then_total_one(world: &SolverWorld) {
    assert_eq!(world.expect_assignment().total_cost(), 1.0);
}

#[then("the solve fails with TooLarge")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_too_large(world: &SolverWorld) {
    let err = world.expect_outcome().expect_err("expected TooLarge");
    assert_eq!(
        err,
        AssignmentError::TooLarge {
            cells: 4,
            max_cells: 3,
        }
    );
}

#[scenario(path = "tests/features/hungarian_solver.feature", index = 0)]
fn crossed_costs(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/hungarian_solver.feature", index = 1)]
fn surplus_requests(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/hungarian_solver.feature", index = 2)]
fn oversized_matrix(world: SolverWorld) {
    let _ = world;
}
