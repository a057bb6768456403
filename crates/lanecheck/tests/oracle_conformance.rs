//! Oracle conformance tests.
//!
//! Runs the built-in catalogs against both backends under every write
//! control, checks the oracle flags exactly the lanes a faulty primitive
//! corrupts, and pins the documented per-lane scenarios.

use lanecheck::config::SuiteConfig;
use lanecheck::dpp::DppUnit;
use lanecheck::op::{Broadcast, Left, Reverse, Right, Rotate, Shift};
use lanecheck::suite::{catalog, Case, Suite};
use lanecheck::{
    run_wavefront, CrossLaneOp, CrossLanePrimitive, ElementKind, LaneElement, LaneFile, LaneId,
    ReferenceUnit, WaveSize, WriteControl, DEFAULT_PREVIOUS,
};

/// Wraps a primitive and overwrites the listed lanes with a value no lane
/// can legitimately hold.
struct Corrupting<P> {
    inner: P,
    lanes: Vec<u32>,
}

impl<Op: CrossLaneOp, P: CrossLanePrimitive<Op>> CrossLanePrimitive<Op> for Corrupting<P> {
    fn exec<T: LaneElement>(
        &self,
        lane: LaneId,
        src: &LaneFile<T>,
        prev: T,
        ctrl: WriteControl,
    ) -> T {
        if self.lanes.contains(&lane.index()) {
            T::from_lane(999)
        } else {
            <P as CrossLanePrimitive<Op>>::exec(&self.inner, lane, src, prev, ctrl)
        }
    }
}

fn exhaustive(wave: WaveSize, element: ElementKind) -> SuiteConfig {
    SuiteConfig {
        wave,
        element,
        exhaustive: true,
        ..SuiteConfig::default()
    }
}

// =============================================================================
// Backends against the oracle
// =============================================================================

#[test]
fn reference_unit_passes_every_control_wave64() {
    let config = exhaustive(WaveSize::Wave64, ElementKind::U32);
    let suite = Suite::new(catalog::reference(), config);
    let report = suite.run(&ReferenceUnit::new(), "reference").unwrap();
    assert!(
        report.all_passed(),
        "{} failing outcomes",
        report.failure_count()
    );
    assert_eq!(report.outcomes.len(), catalog::reference().len() * 512);
}

#[test]
fn reference_unit_passes_every_control_wave32() {
    let config = exhaustive(WaveSize::Wave32, ElementKind::I64);
    let suite = Suite::new(catalog::reference(), config);
    let report = suite.run(&ReferenceUnit::new(), "reference").unwrap();
    assert!(
        report.all_passed(),
        "{} failing outcomes",
        report.failure_count()
    );
    assert!(!report.skipped.is_empty());
}

#[test]
fn dpp_unit_passes_every_control() {
    for wave in [WaveSize::Wave64, WaveSize::Wave32] {
        let suite = Suite::new(catalog::dpp(), exhaustive(wave, ElementKind::F32));
        let report = suite.run(&DppUnit::new(), "dpp").unwrap();
        assert!(
            report.all_passed(),
            "{wave}: {} failing outcomes",
            report.failure_count()
        );
    }
}

// =============================================================================
// Fault detection
// =============================================================================

#[test]
fn faulty_primitive_flags_exactly_corrupted_lanes() {
    let corrupted = vec![0, 5, 17, 42, 63];
    let faulty = Corrupting {
        inner: ReferenceUnit::new(),
        lanes: corrupted.clone(),
    };
    for ctrl in [
        WriteControl::ALL,
        WriteControl::new(0x1, 0x1, true),
        WriteControl::new(0x0, 0x0, false),
    ] {
        let outcome = run_wavefront::<u32, Rotate<Right, 3, 16>, _>(
            &faulty,
            WaveSize::Wave64,
            ctrl,
            DEFAULT_PREVIOUS,
        )
        .unwrap();
        assert_eq!(outcome.failed_lanes(), corrupted, "{ctrl}");
    }
}

#[test]
fn faulty_primitive_fails_suite() {
    let faulty = Corrupting {
        inner: DppUnit::new(),
        lanes: vec![31],
    };
    let cases = vec![
        Case::new::<Reverse<16>>(),
        Case::new::<Shift<Left, 4, 16>>(),
    ];
    let report = Suite::new(cases, SuiteConfig::default())
        .run(&faulty, "faulty")
        .unwrap();
    assert_eq!(report.failure_count(), report.outcomes.len());
    for outcome in &report.outcomes {
        let lanes: Vec<u32> = outcome.failures.iter().map(|f| f.lane).collect();
        assert_eq!(lanes, vec![31], "{}", outcome.case);
    }
}

// =============================================================================
// Documented scenarios
// =============================================================================

fn expected<Op: CrossLaneOp>(ctrl: WriteControl) -> Vec<u32>
where
    ReferenceUnit: CrossLanePrimitive<Op>,
{
    let unit = ReferenceUnit::new();
    run_wavefront::<u32, Op, _>(&unit, WaveSize::Wave64, ctrl, DEFAULT_PREVIOUS)
        .unwrap()
        .verdicts()
        .iter()
        .map(|v| v.expected)
        .collect()
}

#[test]
fn reverse_group_of_four() {
    let values = expected::<Reverse<4>>(WriteControl::ALL);
    assert_eq!(values[0], 3);
    assert_eq!(values[5], 6);
}

#[test]
fn rotate_left_wraps_within_group() {
    let values = expected::<Rotate<Left, 1, 8>>(WriteControl::ALL);
    assert_eq!(values[7], 0);
    assert_eq!(values[15], 8);
}

#[test]
fn broadcast_row_of_sixteen() {
    let values = expected::<Broadcast<3, 16>>(WriteControl::ALL);
    assert!(values[..16].iter().all(|&v| v == 3));
    assert!(values[16..32].iter().all(|&v| v == 19));
}

#[test]
fn single_row_and_bank_mask() {
    let values = expected::<Reverse<64>>(WriteControl::new(0x1, 0x1, false));
    for (lane, &v) in values.iter().enumerate() {
        if lane < 4 {
            assert_eq!(v, 63 - lane as u32);
        } else {
            assert_eq!(v, DEFAULT_PREVIOUS, "lane {lane}");
        }
    }
}

#[test]
fn shift_boundary_lanes_follow_bound_ctrl() {
    let bound = expected::<Shift<Left, 2, 16>>(WriteControl::new(0xF, 0xF, true));
    let unbound = expected::<Shift<Left, 2, 16>>(WriteControl::ALL);
    assert_eq!(&bound[12..16], &[14, 15, 0, 0]);
    assert_eq!(&unbound[12..16], &[14, 15, 100, 100]);
}

#[test]
fn masked_lanes_ignore_bound_ctrl() {
    let values = expected::<Shift<Right, 1, 16>>(WriteControl::new(0x2, 0xF, true));
    assert_eq!(values[0], DEFAULT_PREVIOUS);
    assert_eq!(values[16], 0);
    assert_eq!(values[17], 16);
    assert_eq!(values[32], DEFAULT_PREVIOUS);
}

#[test]
fn custom_sentinel() {
    let outcome = run_wavefront::<i32, Rotate<Right, 1, 4>, _>(
        &ReferenceUnit::new(),
        WaveSize::Wave64,
        WriteControl::new(0x0, 0xF, false),
        7,
    )
    .unwrap();
    for v in outcome.verdicts() {
        assert_eq!((v.expected, v.observed), (7, 7), "lane {}", v.lane.index());
    }
}
