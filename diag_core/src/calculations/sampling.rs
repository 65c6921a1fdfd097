//! Profile sampling
//!
//! Turns a field into a plottable [`Series`]. For every segment of the
//! field's partition the field is evaluated at both segment ends, then at
//! fixed steps of `dx` on a global grid (`k * dx`). All points are pooled
//! with a leading `(0, 0)`, sorted by position (ties by value) and split into
//! position and value vectors. Repeated positions are kept: at a
//! discontinuity the two one-sided values sit on top of each other, which
//! draws the jump as a vertical line.
//!
//! Grid positions are `k * dx` rather than a running sum, so halving `dx`
//! reproduces every earlier position exactly.

use serde::{Deserialize, Serialize};

use super::fields::evaluate;
use super::partition::{segments, Segment};
use super::Field;
use crate::context::Context;

/// How fixed-step samples are laid out over the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingStrategy {
    /// Each segment walks the grid from 0 up to its own end, so every segment
    /// resamples the prefix of the beam. Sample count grows with
    /// `segments * L / dx`.
    Prefix,
    /// Each segment walks only the grid points inside `[start, end)`.
    /// Sample count grows with `L / dx`.
    #[default]
    PerSegment,
}

impl SamplingStrategy {
    pub fn display_name(&self) -> &'static str {
        match self {
            SamplingStrategy::Prefix => "Prefix resampling",
            SamplingStrategy::PerSegment => "Per-segment",
        }
    }
}

/// An ordered `(position, value)` series, stored as two equal-length vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub positions: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    /// Split sorted points into a series
    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        let (positions, values) = points.into_iter().unzip();
        Series { positions, values }
    }

    /// Reference line `([0, L], [0, 0])` drawn under a diagram
    pub fn baseline(length: f64) -> Self {
        Series {
            positions: vec![0.0, length],
            values: vec![0.0, 0.0],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.values.iter().copied())
    }

    /// Every value recorded at exactly `x` (two or more at a jump)
    pub fn values_at(&self, x: f64) -> Vec<f64> {
        self.points()
            .filter(|(pos, _)| *pos == x)
            .map(|(_, value)| value)
            .collect()
    }

    /// Point with the largest value (first one on ties)
    pub fn max(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, p| match best {
                Some(b) if b.1 >= p.1 => Some(b),
                _ => Some(p),
            })
    }

    /// Point with the smallest value (first one on ties)
    pub fn min(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, p| match best {
                Some(b) if b.1 <= p.1 => Some(b),
                _ => Some(p),
            })
    }
}

/// Sample `field` over the beam using the context's strategy
pub fn sample(ctx: &Context, field: Field) -> Series {
    let segments = segments(ctx, field);
    let mut points: Vec<(f64, f64)> = vec![(0.0, 0.0)];

    for segment in &segments {
        points.push((segment.start, evaluate(ctx, field, segment.start)));
        points.push((segment.end, evaluate(ctx, field, segment.end)));
        sample_grid(ctx, field, segment, &mut points);
    }

    points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    log::debug!(
        "sampled {} ({:?}): {} segments, {} points",
        field.symbol(),
        ctx.strategy(),
        segments.len(),
        points.len()
    );

    Series::from_points(points)
}

/// Sampled normal-force diagram
pub fn axial_diagram(ctx: &Context) -> Series {
    sample(ctx, Field::Axial)
}

/// Sampled shear-force diagram
pub fn shear_diagram(ctx: &Context) -> Series {
    sample(ctx, Field::Shear)
}

/// Sampled bending-moment diagram
pub fn moment_diagram(ctx: &Context) -> Series {
    sample(ctx, Field::Moment)
}

/// Push the grid points `k * dx` that fall before `segment.end`
fn sample_grid(ctx: &Context, field: Field, segment: &Segment, points: &mut Vec<(f64, f64)>) {
    let dx = ctx.dx();

    let mut k: u64 = match ctx.strategy() {
        SamplingStrategy::Prefix => 0,
        SamplingStrategy::PerSegment => {
            let k = (segment.start / dx).ceil() as u64;
            // ceil can land one grid point short after rounding
            if (k as f64) * dx < segment.start {
                k + 1
            } else {
                k
            }
        }
    };

    loop {
        let x = k as f64 * dx;
        if x >= segment.end {
            break;
        }
        points.push((x, evaluate(ctx, field, x)));
        k += 1;
    }
}
