//! Field evaluation
//!
//! Axial force `N(x)`, shear `V(x)` and bending moment `M(x)` at a single
//! section. Every action to the left of the section is accumulated; no
//! support reactions are solved for, so a balanced beam only closes to zero
//! when its reactions are entered as loads.
//!
//! ## Sign Convention
//! - `N(x)`: minus the sum of horizontal loads strictly left of `x`; at the
//!   right end every horizontal load counts
//! - `V(x)`: plus the sum of vertical forces with `distance <= x`
//! - `M(x)`: minus the total first moment about `x` of forces and couples
//!   with `distance <= x`
//!
//! All functions are pure: they read the [`Context`] and nothing else.

use super::Field;
use crate::context::Context;

/// Evaluate `field` at `x`
pub fn evaluate(ctx: &Context, field: Field, x: f64) -> f64 {
    match field {
        Field::Axial => axial_at(ctx, x),
        Field::Shear => shear_at(ctx, x),
        Field::Moment => moment_at(ctx, x),
    }
}

/// Axial (normal) force at `x`
pub fn axial_at(ctx: &Context, x: f64) -> f64 {
    let at_right_end = x == ctx.beam().length;

    ctx.horizontal_loads()
        .iter()
        .filter(|h| at_right_end || h.distance < x)
        .fold(0.0, |n, h| n - h.value)
}

/// Shear force at `x`
pub fn shear_at(ctx: &Context, x: f64) -> f64 {
    let concentrated = ctx
        .vertical_loads()
        .iter()
        .filter(|v| v.acts_at(x))
        .fold(0.0, |v, load| v + load.value);

    let distributed = ctx
        .distributed_loads()
        .iter()
        .fold(0.0, |v, q| v + q.shear_at(x));

    concentrated + distributed
}

/// Bending moment at `x`
pub fn moment_at(ctx: &Context, x: f64) -> f64 {
    let forces = ctx
        .vertical_loads()
        .iter()
        .filter(|v| v.acts_at(x))
        .fold(0.0, |m, load| m + load.value * (x - load.distance));

    let distributed = ctx
        .distributed_loads()
        .iter()
        .fold(0.0, |m, q| m + q.first_moment_about(x));

    let couples = ctx
        .point_moments()
        .iter()
        .filter(|c| c.acts_at(x))
        .fold(0.0, |m, c| m + c.value);

    // subtraction from +0.0 keeps an unloaded section at +0.0
    0.0 - (forces + distributed + couples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Beam;
    use crate::loads::{DistributedLoad, LoadSet, PointLoad, PointMoment};

    const TOL: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOL * (1.0 + b.abs())
    }

    fn context(length: f64, loads: LoadSet) -> Context {
        Context::new(Beam::new(length), loads).unwrap()
    }

    #[test]
    fn test_unloaded_fields_are_zero() {
        let ctx = context(4.0, LoadSet::new());
        for x in [0.0, 1.3, 4.0] {
            for field in Field::ALL {
                let value = evaluate(&ctx, field, x);
                assert_eq!(value, 0.0);
                assert!(value.is_sign_positive());
            }
        }
    }

    #[test]
    fn test_axial_open_on_left_closed_at_right_end() {
        let ctx = context(
            6.0,
            LoadSet::new()
                .with_horizontal_load(PointLoad::new(10.0, 2.0))
                .with_horizontal_load(PointLoad::new(-4.0, 6.0)),
        );

        assert_eq!(axial_at(&ctx, 1.0), 0.0);
        assert_eq!(axial_at(&ctx, 2.0), 0.0);
        assert_eq!(axial_at(&ctx, 2.5), -10.0);
        assert_eq!(axial_at(&ctx, 5.9), -10.0);
        // the right end collects every horizontal load
        assert_eq!(axial_at(&ctx, 6.0), -6.0);
    }

    #[test]
    fn test_shear_point_load_step() {
        let ctx = context(8.0, LoadSet::new().with_vertical_load(PointLoad::new(-50.0, 3.0)));
        assert_eq!(shear_at(&ctx, 2.999), 0.0);
        assert_eq!(shear_at(&ctx, 3.0), -50.0);
        assert_eq!(shear_at(&ctx, 8.0), -50.0);
    }

    #[test]
    fn test_moment_point_load_ramp() {
        let ctx = context(8.0, LoadSet::new().with_vertical_load(PointLoad::new(-50.0, 3.0)));
        assert_eq!(moment_at(&ctx, 2.0), 0.0);
        assert_eq!(moment_at(&ctx, 3.0), 0.0);
        assert!(approx_eq(moment_at(&ctx, 5.0), 100.0));
    }

    #[test]
    fn test_point_moment_steps_moment_only() {
        let ctx = context(5.0, LoadSet::new().with_moment(PointMoment::new(12.0, 2.0)));
        assert_eq!(moment_at(&ctx, 1.99), 0.0);
        assert_eq!(moment_at(&ctx, 2.0), -12.0);
        assert_eq!(moment_at(&ctx, 5.0), -12.0);
        assert_eq!(shear_at(&ctx, 3.0), 0.0);
    }

    #[test]
    fn test_partial_span_is_continuous_at_boundaries() {
        let q = DistributedLoad::new(2.0, 6.0, 1.0, 3.0);
        let ctx = context(5.0, LoadSet::new().with_distributed_load(q));
        let eps = 1e-7;

        for x in [q.distance, q.end()] {
            assert!((shear_at(&ctx, x - eps) - shear_at(&ctx, x)).abs() < 1e-5);
            assert!((moment_at(&ctx, x - eps) - moment_at(&ctx, x)).abs() < 1e-5);
        }
        // untouched before the span
        assert_eq!(shear_at(&ctx, 0.5), 0.0);
        // full resultant after it: (2 + 6) * 3 / 2
        assert!(approx_eq(shear_at(&ctx, 4.5), 12.0));
    }

    #[test]
    fn test_moment_slope_equals_shear() {
        // dM/dx = -V between breakpoints with this sign convention
        let ctx = context(
            10.0,
            LoadSet::new()
                .with_vertical_load(PointLoad::new(30.0, 1.0))
                .with_distributed_load(DistributedLoad::new(-4.0, -10.0, 2.0, 6.0)),
        );
        let h = 1e-5;
        for x in [1.5, 3.0, 5.5, 7.9, 9.0] {
            let slope = (moment_at(&ctx, x + h) - moment_at(&ctx, x - h)) / (2.0 * h);
            assert!((slope + shear_at(&ctx, x)).abs() < 1e-4, "x = {}", x);
        }
    }

    #[test]
    fn test_evaluate_dispatches_per_field() {
        let ctx = context(
            4.0,
            LoadSet::new()
                .with_horizontal_load(PointLoad::new(3.0, 1.0))
                .with_vertical_load(PointLoad::new(2.0, 1.0)),
        );
        assert_eq!(evaluate(&ctx, Field::Axial, 2.0), -3.0);
        assert_eq!(evaluate(&ctx, Field::Shear, 2.0), 2.0);
        assert_eq!(evaluate(&ctx, Field::Moment, 2.0), -2.0);
    }
}
