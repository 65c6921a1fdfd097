//! Beam partitioning
//!
//! Splits `[0, L]` into the sub-intervals between consecutive breakpoints of
//! a field, i.e. the positions where its governing formula changes:
//!
//! | Field  | Breakpoints                                              |
//! |--------|----------------------------------------------------------|
//! | Axial  | horizontal point loads                                   |
//! | Shear  | vertical point loads, both ends of every distributed load |
//! | Moment | shear breakpoints plus point moments                     |
//!
//! Both beam ends are always breakpoints, so the segments of every field
//! cover the whole beam. Coincident breakpoints collapse into one; a
//! zero-length segment is never produced.

use serde::{Deserialize, Serialize};

use super::Field;
use crate::context::Context;

/// A load-homogeneous stretch of the beam, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Sorted, duplicate-free breakpoints of `field`, always including `0` and `L`
pub fn breakpoints(ctx: &Context, field: Field) -> Vec<f64> {
    let mut points = vec![0.0, ctx.beam().length];

    match field {
        Field::Axial => axial_breakpoints(ctx, &mut points),
        Field::Shear => shear_breakpoints(ctx, &mut points),
        Field::Moment => moment_breakpoints(ctx, &mut points),
    }

    points.sort_by(f64::total_cmp);
    // -0.0 == 0.0, so a signed zero collapses into the beam start too
    points.dedup();
    points
}

/// Consecutive breakpoint pairs of `field`
pub fn segments(ctx: &Context, field: Field) -> Vec<Segment> {
    let segments: Vec<Segment> = breakpoints(ctx, field)
        .windows(2)
        .map(|pair| Segment {
            start: pair[0],
            end: pair[1],
        })
        .collect();

    log::trace!("{} partition: {:?}", field.symbol(), segments);
    segments
}

fn axial_breakpoints(ctx: &Context, points: &mut Vec<f64>) {
    points.extend(ctx.horizontal_loads().iter().map(|h| h.distance));
}

fn shear_breakpoints(ctx: &Context, points: &mut Vec<f64>) {
    points.extend(ctx.vertical_loads().iter().map(|v| v.distance));
    for q in ctx.distributed_loads() {
        points.push(q.distance);
        // an accepted span may overshoot L by a rounding error
        points.push(q.end().min(ctx.beam().length));
    }
}

fn moment_breakpoints(ctx: &Context, points: &mut Vec<f64>) {
    shear_breakpoints(ctx, points);
    points.extend(ctx.point_moments().iter().map(|m| m.distance));
}
