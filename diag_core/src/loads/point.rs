//! Concentrated actions: point forces and point moments

use serde::{Deserialize, Serialize};

/// A concentrated force applied at one position along the beam.
///
/// The same shape is used for vertical loads (shear and moment) and for
/// horizontal loads (axial force); [`LoadSet`](super::LoadSet) keeps the two
/// in separate collections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Signed magnitude
    pub value: f64,
    /// Application point, measured from the left end
    pub distance: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(value: f64, distance: f64) -> Self {
        PointLoad { value, distance }
    }

    /// Whether a section at `x` has picked this load up (closed on the left)
    pub fn acts_at(&self, x: f64) -> bool {
        self.distance <= x
    }
}

/// A concentrated couple applied at one position along the beam.
///
/// Only the bending moment field sees it, as a step of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMoment {
    /// Signed magnitude
    pub value: f64,
    /// Application point, measured from the left end
    pub distance: f64,
}

impl PointMoment {
    /// Create a point moment
    pub fn new(value: f64, distance: f64) -> Self {
        PointMoment { value, distance }
    }

    /// Whether a section at `x` has picked this moment up
    pub fn acts_at(&self, x: f64) -> bool {
        self.distance <= x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load_pickup_is_closed_on_left() {
        let load = PointLoad::new(10.0, 2.0);
        assert!(!load.acts_at(1.999));
        assert!(load.acts_at(2.0));
        assert!(load.acts_at(3.0));
    }

    #[test]
    fn test_point_moment_serialization() {
        let m = PointMoment::new(-25.0, 1.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"value":-25.0,"distance":1.5}"#);
        let roundtrip: PointMoment = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, m);
    }
}
