//! # Project Data Structures
//!
//! The `Project` struct is the root container for saved beam cases.
//! Projects serialize to `.bdg` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: AnalysisSettings (sampling step, strategy, plot styles)
//! └── items: HashMap<Uuid, BeamCase> (beam + loads per case)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use diag_core::context::Beam;
//! use diag_core::loads::{LoadSet, PointLoad};
//! use diag_core::project::{BeamCase, Project};
//!
//! let mut project = Project::new("Jane Engineer", "25-042");
//! let case = BeamCase::new(
//!     "Cantilever tip load",
//!     Beam::new(3.0),
//!     LoadSet::new().with_vertical_load(PointLoad::new(-10.0, 3.0)),
//! );
//! let id = project.add_item(case);
//!
//! let ctx = project.get_item(&id).unwrap().context(&project.settings)?;
//! assert_eq!(ctx.dx(), project.settings.step);
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::SamplingStrategy;
use crate::context::{Beam, Context, DEFAULT_STEP};
use crate::errors::DiagResult;
use crate::loads::{DistributedLoad, LoadSet, PointLoad};
use crate::plot::DiagramStyles;

/// Current schema version for .bdg files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Analysis settings shared by every case
    #[serde(default)]
    pub settings: AnalysisSettings,

    /// All beam cases, keyed by UUID
    pub items: HashMap<Uuid, BeamCase>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a beam case. Returns the UUID assigned to it.
    pub fn add_item(&mut self, case: BeamCase) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, case);
        self.touch();
        id
    }

    /// Remove a beam case by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<BeamCase> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&BeamCase> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Cases ordered by label, for stable listings
    pub fn cases_by_label(&self) -> Vec<(&Uuid, &BeamCase)> {
        let mut cases: Vec<_> = self.items.iter().collect();
        cases.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        cases
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Sampling and display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Fixed sampling step, in beam-length units
    pub step: f64,

    /// Grid layout over the partition
    pub strategy: SamplingStrategy,

    /// Line styles handed to the renderer
    pub styles: DiagramStyles,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            step: DEFAULT_STEP,
            strategy: SamplingStrategy::default(),
            styles: DiagramStyles::default(),
        }
    }
}

/// One beam with its loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCase {
    /// User label (e.g. "B-1 roof purlin")
    pub label: String,
    pub beam: Beam,
    #[serde(default)]
    pub loads: LoadSet,
}

impl BeamCase {
    pub fn new(label: impl Into<String>, beam: Beam, loads: LoadSet) -> Self {
        BeamCase {
            label: label.into(),
            beam,
            loads,
        }
    }

    /// Validate into an analysis context using `settings`
    pub fn context(&self, settings: &AnalysisSettings) -> DiagResult<Context> {
        Ok(Context::with_step(self.beam, self.loads.clone(), settings.step)?
            .with_strategy(settings.strategy))
    }
}

/// Built-in example: a 5 m beam whose two support reactions of 1290 balance
/// a uniform load of -516 over the whole span.
pub fn demo_case() -> BeamCase {
    BeamCase::new(
        "Demo: 5 m beam, two supports, UDL",
        Beam::new(5.0),
        LoadSet::new()
            .with_vertical_load(PointLoad::new(1290.0, 0.0))
            .with_vertical_load(PointLoad::new(1290.0, 5.0))
            .with_distributed_load(DistributedLoad::uniform(-516.0, 0.0, 5.0)),
    )
}

/// A project holding only [`demo_case`]
pub fn demo_project() -> Project {
    let mut project = Project::new("Beamdiag", "DEMO");
    project.add_item(demo_case());
    project
}
