//! Case suite.
//!
//! A [`Case`] is one descriptor instantiation with its type erased behind a
//! function pointer, so a list of differently-typed descriptors can be run
//! against one primitive. [`Suite`] crosses a case list with the configured
//! write controls and collects a [`SuiteReport`].
//!
//! # Example
//!
//! ```
//! use lanecheck::config::SuiteConfig;
//! use lanecheck::suite::{catalog, Suite};
//! use lanecheck::ReferenceUnit;
//!
//! let suite = Suite::new(catalog::reference(), SuiteConfig::default());
//! let report = suite.run(&ReferenceUnit::new(), "reference").unwrap();
//! assert!(report.all_passed());
//! ```

pub mod catalog;
mod report;

pub use report::{CaseOutcome, LaneFailure, SuiteReport};

use crate::config::SuiteConfig;
use crate::core::element::{ElementKind, LaneElement};
use crate::core::lane::WaveSize;
use crate::core::mask::WriteControl;
use crate::driver::run_wavefront;
use crate::error::ConfigError;
use crate::op::{CrossLaneOp, OpFamily};
use crate::primitive::CrossLanePrimitive;

/// Runtime parameters of one case execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseParams {
    /// Wavefront width.
    pub wave: WaveSize,
    /// Masks and boundary control.
    pub control: WriteControl,
    /// Sentinel for the previous destination value.
    pub previous: u32,
    /// Lane element type.
    pub element: ElementKind,
}

type RunFn<P> = fn(&P, &CaseParams) -> Result<Vec<LaneFailure>, ConfigError>;

/// A type-erased descriptor bound to primitive `P`.
pub struct Case<P> {
    label: String,
    family: OpFamily,
    group_size: u32,
    run: RunFn<P>,
}

impl<P> Case<P> {
    /// Binds descriptor `Op`.
    #[must_use]
    pub fn new<Op>() -> Self
    where
        Op: CrossLaneOp,
        P: CrossLanePrimitive<Op> + Sync,
    {
        Self {
            label: Op::label(),
            family: Op::FAMILY,
            group_size: Op::GROUP_SIZE,
            run: run_case::<Op, P>,
        }
    }

    /// Descriptor label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Descriptor family.
    #[must_use]
    pub fn family(&self) -> OpFamily {
        self.family
    }

    /// Lanes per group.
    #[must_use]
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Runs the case once and returns the mismatching lanes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GroupExceedsWave`] if the group does not fit
    /// `params.wave`.
    pub fn run(
        &self,
        primitive: &P,
        params: &CaseParams,
    ) -> Result<Vec<LaneFailure>, ConfigError> {
        (self.run)(primitive, params)
    }
}

impl<P> core::fmt::Debug for Case<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Case")
            .field("label", &self.label)
            .field("family", &self.family)
            .field("group_size", &self.group_size)
            .finish()
    }
}

fn run_case<Op, P>(primitive: &P, params: &CaseParams) -> Result<Vec<LaneFailure>, ConfigError>
where
    Op: CrossLaneOp,
    P: CrossLanePrimitive<Op> + Sync,
{
    match params.element {
        ElementKind::U32 => failures::<u32, Op, P>(primitive, params),
        ElementKind::I32 => failures::<i32, Op, P>(primitive, params),
        ElementKind::U64 => failures::<u64, Op, P>(primitive, params),
        ElementKind::I64 => failures::<i64, Op, P>(primitive, params),
        ElementKind::F32 => failures::<f32, Op, P>(primitive, params),
        ElementKind::F64 => failures::<f64, Op, P>(primitive, params),
    }
}

fn failures<T, Op, P>(primitive: &P, params: &CaseParams) -> Result<Vec<LaneFailure>, ConfigError>
where
    T: LaneElement,
    Op: CrossLaneOp,
    P: CrossLanePrimitive<Op> + Sync,
{
    let outcome =
        run_wavefront::<T, Op, P>(primitive, params.wave, params.control, params.previous)?;
    Ok(outcome
        .mismatches()
        .map(|v| LaneFailure {
            lane: v.lane.index(),
            expected: format!("{:?}", v.expected),
            observed: format!("{:?}", v.observed),
        })
        .collect())
}

/// A case list and the configuration to run it under.
#[derive(Debug)]
pub struct Suite<P> {
    cases: Vec<Case<P>>,
    config: SuiteConfig,
}

impl<P> Suite<P> {
    /// Creates a suite. Cases whose family is not enabled in `config` are
    /// dropped.
    #[must_use]
    pub fn new(cases: Vec<Case<P>>, config: SuiteConfig) -> Self {
        let cases = cases
            .into_iter()
            .filter(|c| config.families.contains(&c.family()))
            .collect();
        Self { cases, config }
    }

    /// Cases that will run.
    #[must_use]
    pub fn cases(&self) -> &[Case<P>] {
        &self.cases
    }

    /// Configuration the suite runs under.
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Runs every case under every write control against `primitive`.
    ///
    /// Cases whose group is wider than the configured wavefront are skipped
    /// and listed in the report.
    ///
    /// # Errors
    ///
    /// Propagates any [`ConfigError`] raised while running a case.
    pub fn run(&self, primitive: &P, backend: &str) -> Result<SuiteReport, ConfigError> {
        let config = &self.config;
        let mut report = SuiteReport::new(backend, config.wave, config.element, config.previous);
        let controls = config.control_matrix();

        let span = tracing::info_span!(
            "suite",
            backend,
            wave = %config.wave,
            element = %config.element
        );
        let _guard = span.enter();

        for case in &self.cases {
            if !config.wave.fits(case.group_size()) {
                tracing::debug!(case = case.label(), "group wider than wavefront, skipped");
                report.skipped.push(case.label().to_string());
                continue;
            }
            for &control in &controls {
                let params = CaseParams {
                    wave: config.wave,
                    control,
                    previous: config.previous,
                    element: config.element,
                };
                let failures = case.run(primitive, &params)?;
                report.push(CaseOutcome {
                    case: case.label().to_string(),
                    family: case.family(),
                    group_size: case.group_size(),
                    control,
                    failures,
                });
            }
        }

        tracing::info!(
            outcomes = report.outcomes.len(),
            failed = report.failure_count(),
            skipped = report.skipped.len(),
            "suite finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpp::DppUnit;
    use crate::op::Reverse;
    use crate::primitive::ReferenceUnit;

    #[test]
    fn test_reference_suite_passes() {
        let suite = Suite::new(catalog::reference(), SuiteConfig::default());
        let report = suite.run(&ReferenceUnit::new(), "reference").unwrap();
        assert!(report.all_passed());
        assert!(report.skipped.is_empty());
        assert_eq!(
            report.outcomes.len(),
            catalog::reference().len() * SuiteConfig::default().controls.len()
        );
    }

    #[test]
    fn test_wave32_skips_wide_groups() {
        let config = SuiteConfig {
            wave: WaveSize::Wave32,
            ..SuiteConfig::default()
        };
        let suite = Suite::new(catalog::dpp(), config);
        let report = suite.run(&DppUnit::new(), "dpp").unwrap();
        assert!(report.all_passed());
        assert_eq!(
            report.skipped,
            vec![
                "rotate<left, 1, 64>",
                "rotate<right, 1, 64>",
                "shift<left, 1, 64>",
                "shift<right, 1, 64>",
            ]
        );
    }

    #[test]
    fn test_family_filter() {
        let config = SuiteConfig {
            families: vec![OpFamily::Reverse],
            ..SuiteConfig::default()
        };
        let suite = Suite::new(catalog::reference(), config);
        let cases = suite.cases();
        assert!(cases.iter().all(|c| c.family() == OpFamily::Reverse));
        assert_eq!(cases.len(), 6);
    }

    #[test]
    fn test_case_run_reports_group_error() {
        let case = Case::<ReferenceUnit>::new::<Reverse<64>>();
        let params = CaseParams {
            wave: WaveSize::Wave32,
            control: WriteControl::ALL,
            previous: 100,
            element: ElementKind::I64,
        };
        assert!(case.run(&ReferenceUnit, &params).is_err());
    }
}
