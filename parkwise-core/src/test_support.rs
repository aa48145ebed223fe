//! Deterministic fixtures shared by unit, behaviour and downstream tests.
//!
//! Enabled for this crate's own tests and, for other crates, through the
//! `test-support` feature.

use geo::Coord;

use crate::{
    Assignment, AssignmentError, AssignmentSolver, CostMatrix, CriterionValues, Facility,
    FacilityId, NormalizationStats, Scorer, SlotStates, SpecialisedSpaces, TrafficTier,
    WeightVector,
};

/// Build a facility at `(x, y)` with a single free slot.
#[must_use]
pub fn facility(id: u64, (x, y): (i64, i64), tier: TrafficTier) -> Facility {
    FacilityBuilder::new(id).at(x, y).tier(tier).build()
}

/// Fluent builder for test facilities.
///
/// Defaults: origin position, one free slot, no specialised spaces, low
/// traffic.
#[derive(Debug, Clone)]
pub struct FacilityBuilder {
    id: u64,
    name: String,
    position: Coord<i64>,
    slots: Vec<bool>,
    specialised: SpecialisedSpaces,
    tier: TrafficTier,
}

impl FacilityBuilder {
    /// Start a builder for facility `id`.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("Car park {id}"),
            position: Coord { x: 0, y: 0 },
            slots: vec![false],
            specialised: SpecialisedSpaces::default(),
            tier: TrafficTier::Low,
        }
    }

    /// Override the display name.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        name.clone_into(&mut self.name);
        self
    }

    /// Place the facility at `(x, y)`.
    #[must_use]
    pub const fn at(mut self, x: i64, y: i64) -> Self {
        self.position = Coord { x, y };
        self
    }

    /// Replace the slot states (`true` is occupied).
    #[must_use]
    pub fn slots(mut self, occupied: &[bool]) -> Self {
        occupied.clone_into(&mut self.slots);
        self
    }

    /// Set the accessible bay count.
    #[must_use]
    pub const fn handicap(mut self, count: u32) -> Self {
        self.specialised.handicap = count;
        self
    }

    /// Set the EV-charging bay count.
    #[must_use]
    pub const fn ev_charging(mut self, count: u32) -> Self {
        self.specialised.ev_charging = count;
        self
    }

    /// Set the family bay count.
    #[must_use]
    pub const fn family(mut self, count: u32) -> Self {
        self.specialised.family = count;
        self
    }

    /// Set the traffic tier.
    #[must_use]
    pub const fn tier(mut self, tier: TrafficTier) -> Self {
        self.tier = tier;
        self
    }

    /// Build the facility.
    ///
    /// # Panics
    /// When the name was overridden with a blank string.
    #[must_use]
    #[expect(clippy::expect_used, reason = "fixtures fail loudly on bad input")]
    pub fn build(self) -> Facility {
        Facility::new(
            FacilityId(self.id),
            self.name,
            self.position,
            SlotStates::new(self.slots),
            self.specialised,
            self.tier,
        )
        .expect("fixture facilities have names")
    }
}

/// `Scorer` summing weighted z-scores of raw criteria, with no composites.
#[derive(Debug, Copy, Clone, Default)]
pub struct PlainScorer;

impl Scorer for PlainScorer {
    #[expect(clippy::float_arithmetic, reason = "weighted sum of z-scores")]
    fn score(
        &self,
        values: &CriterionValues,
        weights: &WeightVector,
        stats: &NormalizationStats,
    ) -> f64 {
        let total = weights
            .iter()
            .map(|(criterion, weight)| {
                values
                    .get(criterion)
                    .map_or(0.0, |raw| weight * stats.normalise(criterion, raw))
            })
            .sum();
        Self::sanitise(total)
    }
}

/// `AssignmentSolver` that enumerates every matching.
///
/// Exponential; intended as an oracle for matrices of a handful of rows.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExhaustiveSolver;

impl AssignmentSolver for ExhaustiveSolver {
    fn solve(&self, costs: &CostMatrix) -> Result<Assignment, AssignmentError> {
        if costs.is_empty() {
            return Ok(Assignment::default());
        }
        let transposed = costs.rows() > costs.columns();
        let oriented = if transposed {
            costs.transpose()
        } else {
            costs.clone()
        };
        let mut search = Search {
            costs: &oriented,
            used: vec![false; oriented.columns()],
            current: Vec::with_capacity(oriented.rows()),
            best: None,
        };
        search.visit(0.0);
        let (total, columns) = search.best.unwrap_or_default();
        let pairs = columns
            .into_iter()
            .enumerate()
            .map(|(row, column)| if transposed { (column, row) } else { (row, column) })
            .collect();
        Ok(Assignment::new(pairs, total))
    }
}

struct Search<'a> {
    costs: &'a CostMatrix,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Option<(f64, Vec<usize>)>,
}

impl Search<'_> {
    #[expect(clippy::float_arithmetic, reason = "accumulates floating-point costs")]
    fn visit(&mut self, running: f64) {
        let row = self.current.len();
        if row == self.costs.rows() {
            if self.best.as_ref().is_none_or(|(total, _)| running < *total) {
                self.best = Some((running, self.current.clone()));
            }
            return;
        }
        for column in 0..self.costs.columns() {
            let Some(cost) = self.costs.get(row, column) else {
                continue;
            };
            if self.used.get(column).copied().unwrap_or(true) {
                continue;
            }
            self.mark(column, true);
            self.current.push(column);
            self.visit(running + cost);
            self.current.pop();
            self.mark(column, false);
        }
    }

    fn mark(&mut self, column: usize, value: bool) {
        if let Some(slot) = self.used.get_mut(column) {
            *slot = value;
        }
    }
}
