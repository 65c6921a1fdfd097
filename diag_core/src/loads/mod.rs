//! Load definitions
//!
//! The beam can carry four kinds of action, kept in separate ordered
//! collections of a [`LoadSet`]:
//!
//! - vertical [`PointLoad`]s - shear and bending moment
//! - horizontal [`PointLoad`]s - axial (normal) force
//! - [`DistributedLoad`]s - shear and bending moment
//! - [`PointMoment`]s - bending moment only
//!
//! Collections keep insertion order; nothing here sorts by position.
//!
//! # Example
//!
//! ```
//! use diag_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! let loads = LoadSet::new()
//!     .with_vertical_load(PointLoad::new(1290.0, 0.0))
//!     .with_vertical_load(PointLoad::new(1290.0, 5.0))
//!     .with_distributed_load(DistributedLoad::uniform(-516.0, 0.0, 5.0));
//!
//! assert_eq!(loads.load_count(), 3);
//! ```

pub mod distributed;
pub mod point;

pub use distributed::DistributedLoad;
pub use point::{PointLoad, PointMoment};

use serde::{Deserialize, Serialize};

/// All actions applied to one beam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    /// Transverse point forces
    #[serde(default)]
    pub vertical_loads: Vec<PointLoad>,

    /// Longitudinal point forces
    #[serde(default)]
    pub horizontal_loads: Vec<PointLoad>,

    /// Trapezoidal line loads
    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,

    /// Concentrated couples
    #[serde(default)]
    pub point_moments: Vec<PointMoment>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertical point load and return self (builder pattern)
    pub fn with_vertical_load(mut self, load: PointLoad) -> Self {
        self.vertical_loads.push(load);
        self
    }

    /// Add a horizontal point load and return self (builder pattern)
    pub fn with_horizontal_load(mut self, load: PointLoad) -> Self {
        self.horizontal_loads.push(load);
        self
    }

    /// Add a distributed load and return self (builder pattern)
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// Add a point moment and return self (builder pattern)
    pub fn with_moment(mut self, moment: PointMoment) -> Self {
        self.point_moments.push(moment);
        self
    }

    /// Check if there are any loads defined
    pub fn is_empty(&self) -> bool {
        self.load_count() == 0
    }

    /// Get count of loads across all collections
    pub fn load_count(&self) -> usize {
        self.vertical_loads.len()
            + self.horizontal_loads.len()
            + self.distributed_loads.len()
            + self.point_moments.len()
    }
}
