//! End-to-end checks of the sampled diagrams against hand calculations.

use approx::assert_relative_eq;

use diag_core::calculations::{analyze, fields, partition, sample, Field, SamplingStrategy};
use diag_core::context::{Beam, Context};
use diag_core::loads::{DistributedLoad, LoadSet, PointLoad, PointMoment};

fn two_support_case(strategy: SamplingStrategy) -> Context {
    let loads = LoadSet::new()
        .with_vertical_load(PointLoad::new(1290.0, 0.0))
        .with_vertical_load(PointLoad::new(1290.0, 5.0))
        .with_distributed_load(DistributedLoad::uniform(-516.0, 0.0, 5.0));
    Context::with_step(Beam::new(5.0), loads, 0.005)
        .unwrap()
        .with_strategy(strategy)
}

fn mixed_case(dx: f64) -> Context {
    let loads = LoadSet::new()
        .with_vertical_load(PointLoad::new(-40.0, 2.5))
        .with_horizontal_load(PointLoad::new(15.0, 1.0))
        .with_horizontal_load(PointLoad::new(-5.0, 4.0))
        .with_distributed_load(DistributedLoad::new(0.0, -12.0, 0.5, 3.0))
        .with_distributed_load(DistributedLoad::new(-6.0, -2.0, 4.0, 2.0))
        .with_moment(PointMoment::new(25.0, 3.75));
    Context::with_step(Beam::new(6.0), loads, dx).unwrap()
}

#[test]
fn zero_load_identity() {
    let ctx = Context::with_step(Beam::new(3.0), LoadSet::new(), 0.01).unwrap();

    for field in Field::ALL {
        for x in [0.0, 0.7, 1.5, 3.0] {
            assert_eq!(fields::evaluate(&ctx, field, x), 0.0);
        }
        let series = sample(&ctx, field);
        assert!(series.values.iter().all(|v| *v == 0.0));
        assert_eq!(series.positions.first(), Some(&0.0));
        assert_eq!(series.positions.last(), Some(&3.0));
    }
}

#[test]
fn point_load_shear_step_and_moment_ramp() {
    let (p, a, l) = (-75.0, 1.6, 4.0);
    let ctx = Context::new(
        Beam::new(l),
        LoadSet::new().with_vertical_load(PointLoad::new(p, a)),
    )
    .unwrap();

    for x in [0.0, 0.8, 1.5999] {
        assert_eq!(fields::shear_at(&ctx, x), 0.0);
        assert_eq!(fields::moment_at(&ctx, x), 0.0);
    }
    for x in [1.6, 2.0, 3.3, 4.0] {
        assert_eq!(fields::shear_at(&ctx, x), p);
        assert_relative_eq!(fields::moment_at(&ctx, x), -p * (x - a), epsilon = 1e-9);
    }
}

#[test]
fn uniform_load_resultants_at_beam_end() {
    let (q, l) = (-8.0, 3.5);
    let ctx = Context::new(
        Beam::new(l),
        LoadSet::new().with_distributed_load(DistributedLoad::uniform(q, 0.0, l)),
    )
    .unwrap();

    assert_relative_eq!(fields::shear_at(&ctx, l), q * l, epsilon = 1e-9);
    assert_relative_eq!(fields::moment_at(&ctx, l), -q * l * l / 2.0, epsilon = 1e-9);
}

#[test]
fn symmetric_two_support_midspan() {
    let ctx = two_support_case(SamplingStrategy::PerSegment);

    assert_relative_eq!(fields::shear_at(&ctx, 2.5), 0.0, epsilon = 1e-9);
    assert_relative_eq!(fields::moment_at(&ctx, 2.5), -1612.5, epsilon = 1e-9);

    // the series carries the same value at midspan
    let moment = sample(&ctx, Field::Moment);
    let at_mid = moment.values_at(2.5);
    assert!(!at_mid.is_empty());
    for value in at_mid {
        assert_relative_eq!(value, -1612.5, epsilon = 1e-9);
    }

    // both reactions are entered, so the shear closes at the right end
    assert_relative_eq!(fields::shear_at(&ctx, 5.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(fields::moment_at(&ctx, 5.0), 0.0, epsilon = 1e-9);
}

#[test]
fn sampling_strategies_agree_on_shared_positions() {
    let prefix = analyze(&two_support_case(SamplingStrategy::Prefix));
    let per_segment = analyze(&two_support_case(SamplingStrategy::PerSegment));

    for field in Field::ALL {
        let dense = prefix.get(field);
        let sparse = per_segment.get(field);
        assert!(dense.len() >= sparse.len());
        for (x, value) in sparse.points() {
            assert!(dense.values_at(x).contains(&value), "{} at {}", field, x);
        }
    }
}

#[test]
fn partition_completeness() {
    let ctx = mixed_case(0.01);

    for field in Field::ALL {
        let segments = partition::segments(&ctx, field);
        assert_eq!(segments.first().map(|s| s.start), Some(0.0));
        assert_eq!(segments.last().map(|s| s.end), Some(6.0));
        for s in &segments {
            assert!(s.start < s.end);
        }
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    assert_eq!(
        partition::breakpoints(&ctx, Field::Axial),
        vec![0.0, 1.0, 4.0, 6.0]
    );
    assert_eq!(
        partition::breakpoints(&ctx, Field::Shear),
        vec![0.0, 0.5, 2.5, 3.5, 4.0, 6.0]
    );
    assert_eq!(
        partition::breakpoints(&ctx, Field::Moment),
        vec![0.0, 0.5, 2.5, 3.5, 3.75, 4.0, 6.0]
    );
}

#[test]
fn sampling_monotonicity() {
    let ctx = mixed_case(0.01);

    for strategy in [SamplingStrategy::Prefix, SamplingStrategy::PerSegment] {
        let ctx = ctx.clone().with_strategy(strategy);
        for field in Field::ALL {
            let series = sample(&ctx, field);
            assert_eq!(series.positions.len(), series.values.len());
            assert!(series.positions.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(series.positions[0], 0.0);
            let max = series.positions.iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(max, 6.0);
        }
    }
}

#[test]
fn resolution_convergence() {
    let coarse = mixed_case(0.02);
    let fine = mixed_case(0.01);

    for field in Field::ALL {
        let coarse_series = sample(&coarse, field);
        let fine_series = sample(&fine, field);
        assert!(fine_series.len() > coarse_series.len());

        for (x, value) in coarse_series.points() {
            assert_eq!(fields::evaluate(&fine, field, x), value);
            assert!(fine_series.values_at(x).contains(&value), "{} at {}", field, x);
        }
    }
}

#[test]
fn axial_right_end_collects_all_horizontal_loads() {
    let ctx = mixed_case(0.01);

    assert_eq!(fields::axial_at(&ctx, 1.0), 0.0);
    assert_eq!(fields::axial_at(&ctx, 2.0), -15.0);
    assert_eq!(fields::axial_at(&ctx, 4.0), -15.0);
    assert_eq!(fields::axial_at(&ctx, 5.0), -10.0);
    assert_eq!(fields::axial_at(&ctx, 6.0), -10.0);
}

#[test]
fn triangular_load_matches_hand_calculation() {
    // 0 -> 9 over [0, 3] on a beam of 3
    let ctx = Context::new(
        Beam::new(3.0),
        LoadSet::new().with_distributed_load(DistributedLoad::new(0.0, 9.0, 0.0, 3.0)),
    )
    .unwrap();

    // q(t) = 3t: V = 1.5 x^2, M = -x^3 / 2 inside the span
    assert_relative_eq!(fields::shear_at(&ctx, 2.0), 6.0, epsilon = 1e-9);
    assert_relative_eq!(fields::moment_at(&ctx, 2.0), -4.0, epsilon = 1e-9);
    // at the end: resultant 13.5 acting at x = 2
    assert_relative_eq!(fields::shear_at(&ctx, 3.0), 13.5, epsilon = 1e-9);
    assert_relative_eq!(fields::moment_at(&ctx, 3.0), -13.5, epsilon = 1e-9);
}

#[test]
fn fields_are_independent_of_request_order() {
    let ctx = mixed_case(0.05);

    let first: Vec<_> = Field::ALL.iter().map(|f| sample(&ctx, *f)).collect();
    let reversed: Vec<_> = Field::ALL.iter().rev().map(|f| sample(&ctx, *f)).collect();

    for (a, b) in first.iter().zip(reversed.iter().rev()) {
        assert_eq!(a, b);
    }
}
