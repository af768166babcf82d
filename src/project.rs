//! Persisted project documents
//!
//! A project file is a versioned JSON document holding a named list of
//! labels. Loading is tolerant: unknown or newer versions are accepted with
//! a warning, and every field falls back to its documented default rather
//! than aborting the load. Only a document that is not a JSON object at all
//! is rejected, and rejection leaves no partial state behind.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::FontCatalog;
use crate::settings::LabelSettings;

/// Schema version written to saved project files
pub const PROJECT_FILE_VERSION: u64 = 1;

const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Errors that can occur when loading or saving project documents
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The document is not a JSON object; nothing was loaded
    #[error("invalid project file: {0}")]
    Malformed(String),
    #[error("failed to read project file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode project file: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One label in a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub settings: LabelSettings,
}

/// A named collection of labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub labels: Vec<Label>,
}

/// The on-disk envelope: version tag plus the project payload
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFile {
    pub version: u64,
    pub project: Project,
}

/// Fresh id for a label with a missing or duplicate id
fn generate_label_id() -> String {
    Uuid::new_v4().to_string()
}

/// Display name used when a label has no name of its own
pub fn fallback_label_name(index: usize) -> String {
    format!("Label {}", index + 1)
}

/// Derive a file-name slug from a display name
///
/// Lowercases, collapses non-alphanumeric runs to single dashes, trims
/// leading/trailing dashes, and falls back to "label" for an empty result.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "label".to_string()
    } else {
        slug
    }
}

fn sanitize_label(
    raw: &Value,
    fallback_index: usize,
    seen_ids: &mut HashSet<String>,
    catalog: &FontCatalog,
) -> Label {
    let mut id = match raw.get("id") {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    };
    if id.is_empty() || seen_ids.contains(&id) {
        loop {
            id = generate_label_id();
            if !seen_ids.contains(&id) {
                break;
            }
        }
    }
    seen_ids.insert(id.clone());

    let name = match raw.get("name") {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    };
    let name = if name.is_empty() {
        fallback_label_name(fallback_index)
    } else {
        name
    };

    let settings = match raw.get("settings") {
        Some(value) => LabelSettings::sanitized(value, catalog),
        None => LabelSettings::sanitized(&Value::Null, catalog),
    };

    Label { id, name, settings }
}

impl Label {
    /// Create a label with default settings and a fresh id
    pub fn with_default_settings(name: impl Into<String>) -> Label {
        Label {
            id: generate_label_id(),
            name: name.into(),
            settings: LabelSettings::default(),
        }
    }

    /// The name shown to users: the trimmed own name, or the positional
    /// fallback for a blank one
    pub fn display_name(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            fallback_label_name(index)
        } else {
            trimmed.to_string()
        }
    }

    /// Export artifact name: slug plus rounded millimeter dimensions
    pub fn export_file_name(&self, index: usize) -> String {
        format!(
            "{}_{}x{}mm.svg",
            slugify(&self.display_name(index)),
            self.settings.width_mm.round() as i64,
            self.settings.height_mm.round() as i64
        )
    }
}

impl Project {
    /// Load a project from JSON text
    ///
    /// Either fully succeeds (with field-level fallbacks) or fully aborts;
    /// an empty or missing label list yields one default label.
    pub fn from_json(json: &str, catalog: &FontCatalog) -> Result<Project, ProjectError> {
        let raw: Value =
            serde_json::from_str(json).map_err(|e| ProjectError::Malformed(e.to_string()))?;
        Self::from_value(&raw, catalog)
    }

    /// Load a project from a JSON file
    pub fn from_file(path: &Path, catalog: &FontCatalog) -> Result<Project, ProjectError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content, catalog)
    }

    fn from_value(raw: &Value, catalog: &FontCatalog) -> Result<Project, ProjectError> {
        if !raw.is_object() {
            return Err(ProjectError::Malformed(
                "expected a top-level JSON object".to_string(),
            ));
        }

        if let Some(version) = raw.get("version").and_then(Value::as_u64) {
            if version > PROJECT_FILE_VERSION {
                tracing::warn!(
                    version,
                    supported = PROJECT_FILE_VERSION,
                    "project file version is newer than this application"
                );
            }
        }

        // Both the enveloped form and a bare project payload are accepted.
        let payload = match raw.get("project") {
            Some(project) if project.is_object() => project,
            _ => raw,
        };

        let mut seen_ids = HashSet::new();
        let mut labels: Vec<Label> = match payload.get("labels") {
            Some(Value::Array(raw_labels)) => raw_labels
                .iter()
                .enumerate()
                .map(|(index, label)| sanitize_label(label, index, &mut seen_ids, catalog))
                .collect(),
            _ => Vec::new(),
        };

        if labels.is_empty() {
            labels.push(Label::with_default_settings(fallback_label_name(0)));
        }

        let name = match payload.get("name") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => DEFAULT_PROJECT_NAME.to_string(),
        };

        Ok(Project { name, labels })
    }
}

impl ProjectFile {
    /// Wrap a project for saving, normalizing a blank project name
    pub fn new(project: Project) -> ProjectFile {
        let name = {
            let trimmed = project.name.trim();
            if trimmed.is_empty() {
                DEFAULT_PROJECT_NAME.to_string()
            } else {
                trimmed.to_string()
            }
        };
        ProjectFile {
            version: PROJECT_FILE_VERSION,
            project: Project {
                name,
                labels: project.labels,
            },
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProjectError> {
        serde_json::to_string_pretty(self).map_err(ProjectError::Encode)
    }

    /// Suggested file name for the saved project
    pub fn file_name(&self) -> String {
        format!("{}_project.json", slugify(&self.project.name))
    }
}
