//! Orchestration of filtering, scoring, ranking and assignment.
//!
//! `ParkingPlanner` runs the single-user flow (rank, then pick the nearest
//! ranked facility) and the joint flow (score every request, build a cost
//! matrix, hand it to an [`AssignmentSolver`]). Both flows recompute
//! normalisation statistics per request over that request's eligible
//! facilities.

mod outcome;

pub use outcome::{JointPlan, Ranking, Recommendation};

use thiserror::Error;

use crate::{
    Assignment, AssignmentError, AssignmentMode, AssignmentSolver, CapacityExpansion, CostMatrix,
    CriterionValues, Facility, FacilitySource, NormalizationStats, ParkingRequest,
    PlannerConfig, ScoredFacility, Scorer, TimeModel, WeightVector, filter_eligible, rank,
    recommend,
};

/// Errors returned by [`ParkingPlanner`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A weight names a criterion the scorer cannot resolve.
    #[error("unknown criterion '{criterion}' in weight vector")]
    UnknownCriterion {
        /// Unresolved criterion name.
        criterion: String,
    },
    /// The assignment solver rejected the cost matrix.
    #[error("assignment failed: {0}")]
    Assignment(#[from] AssignmentError),
}

/// Facility planner generic over the facility source and the scorer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use parkwise_core::test_support::{FacilityBuilder, PlainScorer};
/// use parkwise_core::{ParkingPlanner, ParkingRequest, WeightVector};
///
/// let facilities = vec![
///     FacilityBuilder::new(1).at(9, 9).build(),
///     FacilityBuilder::new(2).at(1, 0).build(),
/// ];
/// let planner = ParkingPlanner::new(facilities, PlainScorer);
/// let request = ParkingRequest::new(Coord { x: 0, y: 0 }, Coord { x: 1, y: 1 });
/// let weights = WeightVector::new().with_weight("time_to_facility", -1.0).unwrap();
///
/// let outcome = planner.recommend(&request, &weights).unwrap();
/// assert_eq!(outcome.ranking.scores()[0].0.0, 2);
/// assert_eq!(outcome.recommended.map(|id| id.0), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ParkingPlanner<S, C>
where
    S: FacilitySource,
    C: Scorer,
{
    source: S,
    scorer: C,
    config: PlannerConfig,
}

impl<S, C> ParkingPlanner<S, C>
where
    S: FacilitySource,
    C: Scorer,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(source: S, scorer: C) -> Self {
        Self::with_config(source, scorer, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(source: S, scorer: C, config: PlannerConfig) -> Self {
        Self {
            source,
            scorer,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Travel-time model derived from the configuration.
    #[must_use]
    pub const fn time_model(&self) -> TimeModel {
        self.config.time_model()
    }

    /// Rank the facilities eligible for `request` by weighted score.
    ///
    /// An empty eligible set yields an empty ranking.
    ///
    /// # Errors
    /// [`PlanError::UnknownCriterion`] when `weights` names a criterion the
    /// scorer cannot resolve against the candidate statistics.
    pub fn rank(
        &self,
        request: &ParkingRequest,
        weights: &WeightVector,
    ) -> Result<Ranking, PlanError> {
        let eligible = filter_eligible(self.source.facilities(), &request.required_space);
        let (scored, stats) = self.score_candidates(request, weights, &eligible)?;
        Ok(Ranking::new(rank(scored), stats))
    }

    /// Rank for `request` and pick the nearest non-full facility from the
    /// request's origin.
    ///
    /// # Errors
    /// As for [`ParkingPlanner::rank`].
    pub fn recommend(
        &self,
        request: &ParkingRequest,
        weights: &WeightVector,
    ) -> Result<Recommendation, PlanError> {
        let ranking = self.rank(request, weights)?;
        let recommended = recommend(request.origin, ranking.entries(), &self.time_model())
            .map(ScoredFacility::id);
        Ok(Recommendation {
            ranking,
            recommended,
        })
    }

    /// Jointly assign `requests` to non-full facilities.
    ///
    /// The cost of pairing request `r` with facility `f` is
    /// `best_r - score_r(f)`, where `best_r` is request `r`'s top score.
    /// Pairs the request is not eligible for carry a penalty larger than any
    /// feasible matching, and are removed from the result, so affected
    /// requests show up in [`JointPlan::unmatched`]. A matrix over the
    /// solver's size bound yields `assignment: None`.
    ///
    /// # Errors
    /// [`PlanError::UnknownCriterion`] as for [`ParkingPlanner::rank`], or
    /// [`PlanError::Assignment`] when the solver rejects the matrix for any
    /// reason other than its size.
    pub fn assign<A>(
        &self,
        solver: &A,
        requests: &[ParkingRequest],
        weights: &WeightVector,
    ) -> Result<JointPlan, PlanError>
    where
        A: AssignmentSolver + ?Sized,
    {
        let columns: Vec<&Facility> = self
            .source
            .facilities()
            .filter(|facility| !facility.is_full())
            .collect();
        let facilities = columns.iter().map(|facility| facility.id()).collect();

        let mut score_rows = Vec::with_capacity(requests.len());
        for request in requests {
            score_rows.push(self.score_columns(request, weights, &columns)?);
        }
        let costs = CostMatrix::new(regret_costs(&score_rows))?;

        let solved = match self.config.assignment_mode {
            AssignmentMode::OneToOne => solver.solve(&costs),
            AssignmentMode::ByCapacity => {
                let capacities: Vec<u32> = columns
                    .iter()
                    .map(|facility| {
                        u32::try_from(facility.slots().free_count()).unwrap_or(u32::MAX)
                    })
                    .collect();
                let expansion = CapacityExpansion::expand(&costs, &capacities)?;
                solver
                    .solve(expansion.matrix())
                    .map(|expanded| expansion.collapse(&expanded))
            }
        };

        let assignment = match solved {
            Ok(assignment) => Some(feasible_only(&assignment, &score_rows, &costs)),
            Err(AssignmentError::TooLarge { cells, max_cells }) => {
                log::warn!(
                    "skipping joint assignment of {} requests: {cells} cells exceeds {max_cells}",
                    requests.len()
                );
                None
            }
            Err(err) => return Err(PlanError::Assignment(err)),
        };

        Ok(JointPlan {
            facilities,
            assignment,
            requests: requests.len(),
        })
    }

    /// Score `eligible` for `request`, with statistics over exactly that
    /// population.
    fn score_candidates(
        &self,
        request: &ParkingRequest,
        weights: &WeightVector,
        eligible: &[&Facility],
    ) -> Result<(Vec<ScoredFacility>, NormalizationStats), PlanError> {
        if eligible.is_empty() {
            log::debug!("no eligible facilities for {}", request.required_space);
            return Ok((Vec::new(), NormalizationStats::default()));
        }

        let time_model = self.time_model();
        let journeys: Vec<_> = eligible
            .iter()
            .map(|facility| time_model.journey(request, facility, self.config.walk_tier))
            .collect();
        let population: Vec<CriterionValues> = eligible
            .iter()
            .zip(&journeys)
            .map(|(facility, journey)| CriterionValues::extract(facility, journey))
            .collect();
        let stats = NormalizationStats::from_population(&population);

        if let Some((criterion, _)) = weights
            .iter()
            .find(|(criterion, _)| !self.scorer.recognises(criterion, &stats))
        {
            return Err(PlanError::UnknownCriterion {
                criterion: criterion.to_owned(),
            });
        }

        let scored = eligible
            .iter()
            .zip(journeys)
            .zip(&population)
            .map(|((facility, journey), values)| ScoredFacility {
                facility: (*facility).clone(),
                score: self.scorer.score(values, weights, &stats),
                journey,
            })
            .collect();
        Ok((scored, stats))
    }

    /// Scores of `request` against each column, `None` where ineligible.
    fn score_columns(
        &self,
        request: &ParkingRequest,
        weights: &WeightVector,
        columns: &[&Facility],
    ) -> Result<Vec<Option<f64>>, PlanError> {
        let eligible = filter_eligible(columns.iter().copied(), &request.required_space);
        let (scored, _) = self.score_candidates(request, weights, &eligible)?;
        Ok(columns
            .iter()
            .map(|column| {
                eligible
                    .iter()
                    .zip(&scored)
                    .find(|(candidate, _)| std::ptr::eq(**candidate, *column))
                    .map(|(_, entry)| entry.score)
            })
            .collect())
    }
}

/// Turn per-request scores into non-negative regret costs, penalising
/// ineligible pairs.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "costs derive from floating-point scores; batch sizes are small"
)]
fn regret_costs(score_rows: &[Vec<Option<f64>>]) -> Vec<Vec<f64>> {
    let bests: Vec<Option<f64>> = score_rows
        .iter()
        .map(|row| row.iter().flatten().copied().reduce(f64::max))
        .collect();
    let spread = score_rows
        .iter()
        .zip(&bests)
        .filter_map(|(row, best)| {
            let worst = row.iter().flatten().copied().reduce(f64::min)?;
            Some((*best)? - worst)
        })
        .fold(0.0, f64::max);
    let penalty = spread.mul_add(score_rows.len() as f64, 1.0);

    score_rows
        .iter()
        .zip(bests)
        .map(|(row, best)| {
            row.iter()
                .map(|score| match (score, best) {
                    (Some(value), Some(top)) => top - value,
                    _ => penalty,
                })
                .collect()
        })
        .collect()
}

/// Drop pairs the request was never eligible for and recompute the total.
fn feasible_only(
    assignment: &Assignment,
    score_rows: &[Vec<Option<f64>>],
    costs: &CostMatrix,
) -> Assignment {
    let pairs: Vec<(usize, usize)> = assignment
        .pairs()
        .iter()
        .copied()
        .filter(|&(row, column)| {
            score_rows
                .get(row)
                .and_then(|scores| scores.get(column))
                .is_some_and(Option::is_some)
        })
        .collect();
    let total = pairs
        .iter()
        .filter_map(|&(row, column)| costs.get(row, column))
        .sum();
    Assignment::new(pairs, total)
}
