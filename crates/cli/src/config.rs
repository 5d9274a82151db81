//! Typed loading of the resource-folder configuration files.
//!
//! Both files live under the operator-chosen resource folder with fixed
//! names. Documents are validated at load time; shape mismatches surface as
//! [`ConfigError::Schema`] rather than panics deep in the flow.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LABELS_FILE: &str = "labels.yaml";
pub const PROJECT_FILE: &str = "project.yaml";

/// Errors raised while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config in {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },
}

/// One configured label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: String,
    pub color: String,
}

/// Configured project board: name plus columns in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub columns: Vec<String>,
}

#[must_use]
pub fn labels_path(dir: &Path) -> PathBuf {
    dir.join(LABELS_FILE)
}

#[must_use]
pub fn project_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_FILE)
}

fn schema_error(path: &Path, reason: impl Into<String>) -> ConfigError {
    ConfigError::Schema {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn load_document(path: &Path) -> Result<serde_yaml::Value, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the label set from `<dir>/labels.yaml`.
///
/// The file is a mapping of label name to color token. File order is kept so
/// log output is deterministic; the set itself is semantically unordered.
pub fn load_labels(dir: &Path) -> Result<Vec<LabelSpec>, ConfigError> {
    let path = labels_path(dir);
    let doc = load_document(&path)?;

    let mapping = doc
        .as_mapping()
        .ok_or_else(|| schema_error(&path, "expected a mapping of label name to color"))?;

    let mut labels = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| schema_error(&path, "label names must be strings"))?;
        let color = value.as_str().ok_or_else(|| {
            schema_error(&path, format!("color for label '{name}' must be a string"))
        })?;
        labels.push(LabelSpec {
            name: name.to_string(),
            color: color.to_string(),
        });
    }

    Ok(labels)
}

/// Load the project board spec from `<dir>/project.yaml`.
///
/// `columns` may be a keyed mapping or a plain sequence; keys are ignored
/// and only the column name values are used, in document order.
pub fn load_project(dir: &Path) -> Result<ProjectSpec, ConfigError> {
    let path = project_path(dir);
    let doc = load_document(&path)?;

    if !doc.is_mapping() {
        return Err(schema_error(
            &path,
            "expected a mapping with 'name' and 'columns'",
        ));
    }

    let name = doc
        .get("name")
        .and_then(serde_yaml::Value::as_str)
        .ok_or_else(|| schema_error(&path, "'name' must be a string"))?
        .to_string();

    let raw_columns = doc
        .get("columns")
        .ok_or_else(|| schema_error(&path, "missing 'columns'"))?;

    let columns = match raw_columns {
        serde_yaml::Value::Mapping(entries) => entries
            .values()
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| schema_error(&path, "column names must be strings"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        serde_yaml::Value::Sequence(entries) => entries
            .iter()
            .map(|entry| match entry {
                serde_yaml::Value::String(name) => Ok(name.clone()),
                serde_yaml::Value::Mapping(single) => single
                    .values()
                    .next()
                    .and_then(serde_yaml::Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| schema_error(&path, "column names must be strings")),
                _ => Err(schema_error(&path, "column names must be strings")),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(schema_error(
                &path,
                "'columns' must be a mapping or a sequence",
            ))
        }
    };

    Ok(ProjectSpec { name, columns })
}
