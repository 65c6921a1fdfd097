//! Linearly varying distributed loads
//!
//! A [`DistributedLoad`] runs from `distance` to `distance + length` with an
//! intensity that varies linearly from `q1` to `q2`:
//!
//! ```text
//! q(t) = q1 + (q2 - q1) * t / length,    0 <= t <= length
//! ```
//!
//! Shear and moment contributions are the closed-form zeroth and first
//! moments of that profile, so no numerical integration is involved.
//!
//! ## Example
//!
//! ```rust
//! use diag_core::loads::DistributedLoad;
//!
//! // Triangular load rising from 0 to 6 over 3 units
//! let q = DistributedLoad::new(0.0, 6.0, 1.0, 3.0);
//! assert_eq!(q.resultant(), 9.0);
//! assert_eq!(q.centroid(), Some(3.0)); // 2/3 of the way along
//! ```

use serde::{Deserialize, Serialize};

/// A trapezoidal (or uniform, or triangular) line load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity at the start of the span
    pub q1: f64,
    /// Intensity at the end of the span
    pub q2: f64,
    /// Start of the span, measured from the left end of the beam
    pub distance: f64,
    /// Extent of the span
    pub length: f64,
}

impl DistributedLoad {
    /// Create a linearly varying load
    pub fn new(q1: f64, q2: f64, distance: f64, length: f64) -> Self {
        DistributedLoad {
            q1,
            q2,
            distance,
            length,
        }
    }

    /// Create a constant-intensity load
    pub fn uniform(q: f64, distance: f64, length: f64) -> Self {
        DistributedLoad::new(q, q, distance, length)
    }

    /// End of the span
    pub fn end(&self) -> f64 {
        self.distance + self.length
    }

    pub fn is_uniform(&self) -> bool {
        self.q1 == self.q2
    }

    /// Intensity at local coordinate `t` (0 at the span start)
    pub fn intensity_at(&self, t: f64) -> f64 {
        if self.length == 0.0 {
            return self.q1;
        }
        self.q1 + (self.q2 - self.q1) * t / self.length
    }

    /// Total force of the span: `(q1 + q2) * length / 2`
    pub fn resultant(&self) -> f64 {
        (self.q1 + self.q2) * self.length / 2.0
    }

    /// Absolute position of the resultant.
    ///
    /// `None` when the resultant vanishes (e.g. `q1 = -q2`); the load then
    /// acts as a pure couple and has no line of action.
    pub fn centroid(&self) -> Option<f64> {
        if self.resultant() == 0.0 {
            return None;
        }
        if self.is_uniform() {
            return Some(self.distance + self.length / 2.0);
        }
        Some(self.distance + self.length / 3.0 * (self.q1 + 2.0 * self.q2) / (self.q1 + self.q2))
    }

    /// Force accumulated from the span start up to local coordinate `p`:
    /// `q1*p + (q2 - q1)*p^2 / (2*length)`
    pub fn partial_resultant(&self, p: f64) -> f64 {
        if self.length == 0.0 {
            return 0.0;
        }
        self.q1 * p + (self.q2 - self.q1) * p * p / (2.0 * self.length)
    }

    /// First moment, about local coordinate `p`, of the load between the
    /// span start and `p`: `p^2 * (3*q1 + (q2 - q1)*p/length) / 6`
    pub fn partial_first_moment(&self, p: f64) -> f64 {
        if self.length == 0.0 {
            return 0.0;
        }
        p * p * (3.0 * self.q1 + (self.q2 - self.q1) * p / self.length) / 6.0
    }

    /// First moment of the whole span about local coordinate `p >= length`.
    ///
    /// Split into the uniform `q1` block (centroid at `length/2`) and the
    /// triangular `q2 - q1` block (centroid at `2*length/3`).
    pub fn full_first_moment(&self, p: f64) -> f64 {
        let l = self.length;
        self.q1 * l * (p - l / 2.0) + (self.q2 - self.q1) * l / 2.0 * (p - 2.0 * l / 3.0)
    }

    /// Contribution to the shear force at absolute position `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        if x < self.distance {
            0.0
        } else if x < self.end() {
            self.partial_resultant(x - self.distance)
        } else {
            self.resultant()
        }
    }

    /// First moment about absolute position `x` of the part of the load
    /// lying to the left of `x` (before the final sign flip of the moment field)
    pub fn first_moment_about(&self, x: f64) -> f64 {
        if x < self.distance {
            0.0
        } else if x < self.end() {
            self.partial_first_moment(x - self.distance)
        } else {
            self.full_first_moment(x - self.distance)
        }
    }
}
