//! Values returned by the planner.

use crate::{Assignment, FacilityId, NormalizationStats, ScoredFacility};

/// Facilities ranked for one request, with the statistics that scored them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<ScoredFacility>,
    stats: NormalizationStats,
}

impl Ranking {
    pub(crate) const fn new(entries: Vec<ScoredFacility>, stats: NormalizationStats) -> Self {
        Self { entries, stats }
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[ScoredFacility] {
        &self.entries
    }

    /// Consume the ranking, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ScoredFacility> {
        self.entries
    }

    /// `(facility, score)` pairs, best first.
    #[must_use]
    pub fn scores(&self) -> Vec<(FacilityId, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.id(), entry.score))
            .collect()
    }

    /// Highest-scoring entry.
    #[must_use]
    pub fn best(&self) -> Option<&ScoredFacility> {
        self.entries.first()
    }

    /// Population statistics used for scoring.
    #[must_use]
    pub const fn stats(&self) -> &NormalizationStats {
        &self.stats
    }

    /// Number of ranked facilities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no facility was eligible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-user result: the ranking plus the one facility to suggest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recommendation {
    /// Facilities ordered by weighted score.
    pub ranking: Ranking,
    /// Nearest non-full facility from the ranking, if any.
    pub recommended: Option<FacilityId>,
}

/// Joint result for a batch of requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JointPlan {
    /// Facility behind each assignment column.
    pub facilities: Vec<FacilityId>,
    /// Feasible `(request, column)` pairs; `None` when the batch was too
    /// large to solve.
    pub assignment: Option<Assignment>,
    /// Number of requests in the batch.
    pub requests: usize,
}

impl JointPlan {
    /// Facility assigned to `request`, if any.
    #[must_use]
    pub fn facility_for(&self, request: usize) -> Option<FacilityId> {
        self.assignment
            .as_ref()
            .and_then(|assignment| assignment.facility_for(request))
            .and_then(|column| self.facilities.get(column).copied())
    }

    /// Requests left without a facility, in index order.
    #[must_use]
    pub fn unmatched(&self) -> Vec<usize> {
        (0..self.requests)
            .filter(|&request| self.facility_for(request).is_none())
            .collect()
    }
}
