//! Suite report types: per-case outcomes and their aggregation.

use crate::core::element::ElementKind;
use crate::core::lane::WaveSize;
use crate::core::mask::WriteControl;
use crate::op::OpFamily;
use serde::Serialize;

/// One lane whose output disagreed with the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneFailure {
    /// Lane index.
    pub lane: u32,
    /// Expected value, formatted.
    pub expected: String,
    /// Observed value, formatted.
    pub observed: String,
}

/// Result of one case under one write control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// Descriptor label, e.g. `reverse<8>`.
    pub case: String,
    /// Operation family.
    pub family: OpFamily,
    /// Lanes per group.
    pub group_size: u32,
    /// Masks and boundary control the case ran with.
    pub control: WriteControl,
    /// Lanes that mismatched. Empty on success.
    pub failures: Vec<LaneFailure>,
}

impl CaseOutcome {
    /// Returns true if any lane mismatched.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Aggregated report of one suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Name of the primitive that ran.
    pub backend: String,
    /// Wavefront width.
    pub wave: WaveSize,
    /// Lane element type.
    pub element: ElementKind,
    /// Sentinel used for the previous destination value.
    pub previous: u32,
    /// Every case/control pair that ran.
    pub outcomes: Vec<CaseOutcome>,
    /// Cases skipped because their group is wider than the wavefront.
    pub skipped: Vec<String>,
}

impl SuiteReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(
        backend: impl Into<String>,
        wave: WaveSize,
        element: ElementKind,
        previous: u32,
    ) -> Self {
        Self {
            backend: backend.into(),
            wave,
            element,
            previous,
            outcomes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Appends an outcome.
    pub fn push(&mut self, outcome: CaseOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of outcomes with at least one mismatching lane.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Number of outcomes with no mismatching lane.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.outcomes.len() - self.failure_count()
    }

    /// Total mismatching lanes across all outcomes.
    #[must_use]
    pub fn mismatched_lanes(&self) -> usize {
        self.outcomes.iter().map(|o| o.failures.len()).sum()
    }

    /// Returns true if no lane mismatched anywhere.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
