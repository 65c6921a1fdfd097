//! # diag_core - Beam Internal-Force Diagram Engine
//!
//! `diag_core` computes axial force, shear force and bending moment along a
//! straight beam loaded by point forces, point moments and linearly varying
//! distributed loads, and samples them into plottable series.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every diagram is recomputed from an immutable [`Context`]
//! - **Closed form**: distributed loads are integrated exactly, never numerically
//! - **Fail fast**: geometry and sampling problems surface at `Context` construction
//! - **JSON-First**: inputs, settings and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use diag_core::calculations::{sample, Field};
//! use diag_core::context::{Beam, Context};
//! use diag_core::loads::{LoadSet, PointLoad};
//!
//! let loads = LoadSet::new().with_vertical_load(PointLoad::new(-10.0, 1.0));
//! let ctx = Context::with_step(Beam::new(2.0), loads, 0.1)?;
//!
//! let shear = sample(&ctx, Field::Shear);
//! assert_eq!(shear.positions.first(), Some(&0.0));
//! assert_eq!(shear.positions.last(), Some(&2.0));
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Point loads, point moments, distributed loads
//! - [`context`] - Beam and validated analysis context
//! - [`calculations`] - Partitioning, field evaluation, sampling
//! - [`plot`] - Series plus display styles for renderers
//! - [`project`] - Project container and analysis settings
//! - [`file_io`] - Atomic project saves and loads
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod context;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod plot;
pub mod project;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, Diagrams, Field, SamplingStrategy, Series};
pub use context::{Beam, Context};
pub use errors::{DiagError, DiagResult};
pub use file_io::{load_project, save_project};
pub use project::{AnalysisSettings, BeamCase, Project};
