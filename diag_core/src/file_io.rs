//! # File I/O Module
//!
//! Reads and writes `.bdg` project files (pretty-printed JSON).
//!
//! - **Atomic saves**: write to `.bdg.tmp`, fsync, rename over the target
//! - **Version validation**: refuse files from an incompatible schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use diag_core::file_io::{load_project, save_project};
//! use diag_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001");
//! save_project(&project, Path::new("beams.bdg"))?;
//!
//! let loaded = load_project(Path::new("beams.bdg"))?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), diag_core::errors::DiagError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{DiagError, DiagResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Save a project to a file with atomic write semantics.
///
/// The JSON goes to `<name>.bdg.tmp` first and is renamed over `path` once
/// synced. On any failure after the temp file is created it is removed, so
/// an interrupted save leaves neither a partial project nor a stray temp file.
pub fn save_project(project: &Project, path: &Path) -> DiagResult<()> {
    let json = serde_json::to_string_pretty(project)?;

    let tmp_path = path.with_extension("bdg.tmp");

    let tmp_file = File::create(&tmp_path).map_err(|e| {
        DiagError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    if let Err(e) = write_and_rename(tmp_file, json.as_bytes(), &tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    log::info!("saved project {} to {}", project.meta.job_id, path.display());
    Ok(())
}

fn write_and_rename(mut tmp_file: File, bytes: &[u8], tmp_path: &Path, path: &Path) -> DiagResult<()> {
    tmp_file.write_all(bytes).map_err(|e| {
        DiagError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        DiagError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(tmp_path, path)
        .map_err(|e| DiagError::file_error("rename to final", path.display().to_string(), e.to_string()))
}

/// Load a project from a file.
///
/// # Errors
///
/// * [`DiagError::FileError`] - the file cannot be opened or read
/// * [`DiagError::SerializationError`] - invalid JSON
/// * [`DiagError::VersionMismatch`] - incompatible schema version
///
/// Beam cases are not validated here; that happens when a case is turned
/// into a [`Context`](crate::context::Context).
pub fn load_project(path: &Path) -> DiagResult<Project> {
    let mut file = File::open(path)
        .map_err(|e| DiagError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DiagError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| DiagError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    log::info!(
        "loaded project {} ({} cases) from {}",
        project.meta.job_id,
        project.item_count(),
        path.display()
    );
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> DiagResult<()> {
    let mismatch = || DiagError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x schemas may break on a minor bump: reject anything newer
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
