//! # Internal-Force Diagrams
//!
//! The evaluation engine, in three stages:
//!
//! - [`partition`] - split the beam into load-homogeneous segments per field
//! - [`fields`] - evaluate `N(x)`, `V(x)`, `M(x)` at a section
//! - [`sampling`] - walk the segments and build sorted `(x, value)` series
//!
//! [`analyze`] runs all three fields and summarises their extrema.
//!
//! ## Example
//!
//! ```rust
//! use diag_core::calculations::{analyze, fields, Field};
//! use diag_core::context::{Beam, Context};
//! use diag_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! // Beam of 5 with both reactions entered as upward point loads
//! let loads = LoadSet::new()
//!     .with_vertical_load(PointLoad::new(1290.0, 0.0))
//!     .with_vertical_load(PointLoad::new(1290.0, 5.0))
//!     .with_distributed_load(DistributedLoad::uniform(-516.0, 0.0, 5.0));
//! let ctx = Context::with_step(Beam::new(5.0), loads, 0.01)?;
//!
//! assert!(fields::shear_at(&ctx, 2.5).abs() < 1e-9);
//! assert!((fields::moment_at(&ctx, 2.5) + 1612.5).abs() < 1e-9);
//!
//! let diagrams = analyze(&ctx);
//! assert_eq!(diagrams.get(Field::Moment).positions.last(), Some(&5.0));
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```

pub mod fields;
pub mod partition;
pub mod sampling;

use serde::{Deserialize, Serialize};

pub use partition::Segment;
pub use sampling::{axial_diagram, moment_diagram, sample, shear_diagram, SamplingStrategy, Series};

use crate::context::Context;

/// One of the three internal-force fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Normal force along the beam axis
    Axial,
    /// Transverse force
    Shear,
    /// Bending moment
    Moment,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Axial, Field::Shear, Field::Moment];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Axial => "Normal force",
            Field::Shear => "Shear force",
            Field::Moment => "Bending moment",
        }
    }

    /// Conventional symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Field::Axial => "N",
            Field::Shear => "V",
            Field::Moment => "M",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Extrema of one sampled field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSummary {
    pub field: Field,
    /// Largest sampled value
    pub max_value: f64,
    /// Position of the largest value
    pub max_position: f64,
    /// Smallest sampled value
    pub min_value: f64,
    /// Position of the smallest value
    pub min_position: f64,
    /// Number of samples in the series
    pub sample_count: usize,
}

impl DiagramSummary {
    pub fn from_series(field: Field, series: &Series) -> Self {
        let (max_position, max_value) = series.max().unwrap_or((0.0, 0.0));
        let (min_position, min_value) = series.min().unwrap_or((0.0, 0.0));
        DiagramSummary {
            field,
            max_value,
            max_position,
            min_value,
            min_position,
            sample_count: series.len(),
        }
    }

    /// Largest magnitude, regardless of sign
    pub fn governing_value(&self) -> f64 {
        if self.max_value.abs() >= self.min_value.abs() {
            self.max_value
        } else {
            self.min_value
        }
    }
}

/// All three sampled diagrams of one context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagrams {
    pub beam_length: f64,
    pub axial: Series,
    pub shear: Series,
    pub moment: Series,
}

impl Diagrams {
    pub fn get(&self, field: Field) -> &Series {
        match field {
            Field::Axial => &self.axial,
            Field::Shear => &self.shear,
            Field::Moment => &self.moment,
        }
    }

    pub fn summary(&self, field: Field) -> DiagramSummary {
        DiagramSummary::from_series(field, self.get(field))
    }

    pub fn summaries(&self) -> Vec<DiagramSummary> {
        Field::ALL.iter().map(|f| self.summary(*f)).collect()
    }
}

/// Sample every field of `ctx`
pub fn analyze(ctx: &Context) -> Diagrams {
    Diagrams {
        beam_length: ctx.beam().length,
        axial: axial_diagram(ctx),
        shear: shear_diagram(ctx),
        moment: moment_diagram(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Beam;
    use crate::loads::{LoadSet, PointLoad, PointMoment};

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Axial.symbol(), "N");
        assert_eq!(Field::Moment.to_string(), "Bending moment");
        let json = serde_json::to_string(&Field::Shear).unwrap();
        assert_eq!(json, "\"Shear\"");
    }

    #[test]
    fn test_analyze_summaries() {
        let loads = LoadSet::new()
            .with_vertical_load(PointLoad::new(-10.0, 1.0))
            .with_horizontal_load(PointLoad::new(4.0, 0.5))
            .with_moment(PointMoment::new(3.0, 2.0));
        let ctx = Context::with_step(Beam::new(3.0), loads, 0.1).unwrap();
        let diagrams = analyze(&ctx);

        let shear = diagrams.summary(Field::Shear);
        assert_eq!(shear.min_value, -10.0);
        assert_eq!(shear.min_position, 1.0);
        assert_eq!(shear.max_value, 0.0);

        let axial = diagrams.summary(Field::Axial);
        assert_eq!(axial.min_value, -4.0);

        // M(3) = -(-10 * 2 + 3) = 17
        let moment = diagrams.summary(Field::Moment);
        assert!((moment.max_value - 17.0).abs() < 1e-9);
        assert_eq!(moment.max_position, 3.0);
        assert!((moment.governing_value() - 17.0).abs() < 1e-9);

        assert_eq!(diagrams.summaries().len(), 3);
    }

    #[test]
    fn test_diagrams_serialize() {
        let ctx = Context::with_step(Beam::new(1.0), LoadSet::new(), 0.5).unwrap();
        let diagrams = analyze(&ctx);
        let json = serde_json::to_string(&diagrams).unwrap();
        let roundtrip: Diagrams = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, diagrams);
    }
}
