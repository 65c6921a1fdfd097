//! # Analysis Context
//!
//! A [`Context`] owns one [`Beam`], its [`LoadSet`] and the sampling
//! resolution for a single analysis. It is validated once, at construction,
//! and is read-only afterwards: every diagram is recomputed from it on
//! request, so the three fields can be generated in any order.
//!
//! ## Example
//!
//! ```rust
//! use diag_core::context::{Beam, Context};
//! use diag_core::loads::{LoadSet, PointLoad};
//!
//! let loads = LoadSet::new().with_vertical_load(PointLoad::new(10.0, 2.0));
//! let ctx = Context::new(Beam::new(4.0), loads)?;
//! assert_eq!(ctx.dx(), 0.0005);
//!
//! // Loads off the beam are rejected up front
//! let bad = LoadSet::new().with_vertical_load(PointLoad::new(10.0, 6.0));
//! assert!(Context::new(Beam::new(4.0), bad).is_err());
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::sampling::SamplingStrategy;
use crate::errors::{DiagError, DiagResult};
use crate::loads::{DistributedLoad, LoadSet, PointLoad, PointMoment};

/// Default sampling step, in beam-length units
pub const DEFAULT_STEP: f64 = 0.0005;

/// Grid size per field above which building a context logs a warning
pub const LARGE_GRID_POINTS: u64 = 10_000_000;

/// Relative slack allowed when a distributed span ends at the beam end,
/// so that e.g. `0.1 + 0.2` still fits a beam of `0.3`
const END_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// A straight beam occupying `[0, length]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub length: f64,
}

impl Beam {
    pub fn new(length: f64) -> Self {
        Beam { length }
    }

    /// Whether `x` lies on the beam, ends included
    pub fn contains(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.length
    }
}

/// Immutable input for one diagram analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    beam: Beam,
    loads: LoadSet,
    dx: f64,
    strategy: SamplingStrategy,
}

impl Context {
    /// Build a context with the default step of [`DEFAULT_STEP`].
    pub fn new(beam: Beam, loads: LoadSet) -> DiagResult<Self> {
        Self::with_step(beam, loads, DEFAULT_STEP)
    }

    /// Build a context with an explicit sampling step.
    ///
    /// # Errors
    ///
    /// * [`DiagError::InvalidGeometry`] - non-positive beam length, or a load
    ///   that does not lie entirely on the beam
    /// * [`DiagError::InvalidSampling`] - `dx <= 0`
    ///
    /// Sampling cost grows with `length / dx` per field. A grid larger than
    /// [`LARGE_GRID_POINTS`] is accepted but logged as a warning.
    pub fn with_step(beam: Beam, loads: LoadSet, dx: f64) -> DiagResult<Self> {
        validate_beam(&beam)?;
        validate_step(dx)?;
        validate_loads(&beam, &loads)?;

        log::debug!(
            "context: L={} with {} loads, dx={}",
            beam.length,
            loads.load_count(),
            dx
        );

        let grid = grid_points(beam.length, dx);
        if grid > LARGE_GRID_POINTS {
            log::warn!(
                "dx={} gives {} grid points per field on L={}; sampling will be slow",
                dx,
                grid,
                beam.length
            );
        }

        Ok(Context {
            beam,
            loads,
            dx,
            strategy: SamplingStrategy::default(),
        })
    }

    /// Select how fixed-step samples are laid out (builder pattern)
    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn loads(&self) -> &LoadSet {
        &self.loads
    }

    /// Sampling step
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of `k * dx` grid points on `[0, L]`
    pub fn grid_points(&self) -> u64 {
        grid_points(self.beam.length, self.dx)
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    pub fn vertical_loads(&self) -> &[PointLoad] {
        &self.loads.vertical_loads
    }

    pub fn horizontal_loads(&self) -> &[PointLoad] {
        &self.loads.horizontal_loads
    }

    pub fn distributed_loads(&self) -> &[DistributedLoad] {
        &self.loads.distributed_loads
    }

    pub fn point_moments(&self) -> &[PointMoment] {
        &self.loads.point_moments
    }
}

fn grid_points(length: f64, dx: f64) -> u64 {
    // saturating float-to-int cast
    (length / dx).floor() as u64 + 1
}

fn validate_beam(beam: &Beam) -> DiagResult<()> {
    if !(beam.length.is_finite() && beam.length > 0.0) {
        log::warn!("rejected beam length {}", beam.length);
        return Err(DiagError::invalid_geometry(
            "beam.length",
            beam.length.to_string(),
            "Beam length must be positive and finite",
        ));
    }
    Ok(())
}

fn validate_step(dx: f64) -> DiagResult<()> {
    if !(dx.is_finite() && dx > 0.0) {
        log::warn!("rejected sampling step {}", dx);
        return Err(DiagError::invalid_sampling(
            dx.to_string(),
            "Sampling step must be positive and finite",
        ));
    }
    Ok(())
}

fn validate_position(beam: &Beam, entity: String, distance: f64) -> DiagResult<()> {
    if !beam.contains(distance) {
        log::warn!("rejected {} = {}", entity, distance);
        return Err(DiagError::invalid_geometry(
            entity,
            distance.to_string(),
            format!("Position must lie within [0, {}]", beam.length),
        ));
    }
    Ok(())
}

fn validate_magnitude(entity: String, value: f64) -> DiagResult<()> {
    if !value.is_finite() {
        log::warn!("rejected {} = {}", entity, value);
        return Err(DiagError::invalid_geometry(
            entity,
            value.to_string(),
            "Load magnitude must be finite",
        ));
    }
    Ok(())
}

/// Whether `end` lies on the beam, up to rounding of `distance + length`
fn span_fits(beam: &Beam, end: f64) -> bool {
    end - beam.length <= END_TOLERANCE * beam.length.max(1.0)
}

fn validate_loads(beam: &Beam, loads: &LoadSet) -> DiagResult<()> {
    for (i, load) in loads.vertical_loads.iter().enumerate() {
        validate_magnitude(format!("vertical_loads[{}].value", i), load.value)?;
        validate_position(beam, format!("vertical_loads[{}].distance", i), load.distance)?;
    }
    for (i, load) in loads.horizontal_loads.iter().enumerate() {
        validate_magnitude(format!("horizontal_loads[{}].value", i), load.value)?;
        validate_position(beam, format!("horizontal_loads[{}].distance", i), load.distance)?;
    }
    for (i, moment) in loads.point_moments.iter().enumerate() {
        validate_magnitude(format!("point_moments[{}].value", i), moment.value)?;
        validate_position(beam, format!("point_moments[{}].distance", i), moment.distance)?;
    }

    for (i, q) in loads.distributed_loads.iter().enumerate() {
        validate_magnitude(format!("distributed_loads[{}].q1", i), q.q1)?;
        validate_magnitude(format!("distributed_loads[{}].q2", i), q.q2)?;
        validate_position(beam, format!("distributed_loads[{}].distance", i), q.distance)?;

        if q.length.is_nan() || q.length < 0.0 {
            return Err(DiagError::invalid_geometry(
                format!("distributed_loads[{}].length", i),
                q.length.to_string(),
                "Span length cannot be negative",
            ));
        }
        if !span_fits(beam, q.end()) {
            return Err(DiagError::invalid_geometry(
                format!("distributed_loads[{}].length", i),
                q.length.to_string(),
                format!(
                    "Span ends at {} which is beyond the beam end {}",
                    q.end(),
                    beam.length
                ),
            ));
        }
    }

    Ok(())
}
