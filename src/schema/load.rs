//! Schema loading from the on-disk YAML description.
//!
//! The schema document carries a `spec.properties` mapping; each entry has
//! a `type` and `description`, optionally an `enum` value list, nested
//! `properties` for objects, or `items.properties` describing array
//! elements:
//!
//! ```yaml
//! spec:
//!   properties:
//!     Company:
//!       type: string
//!       description: Name of the company
//!     Nodes:
//!       type: array
//!       description: Architecture nodes
//!       items:
//!         properties:
//!           Type:
//!             type: string
//!             enum: [service, database]
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

use super::{SchemaKind, SchemaNode};

/// Errors that can occur while loading a schema description.
///
/// These never cross the engine boundary: the session host logs the
/// failure and degrades to empty suggestions.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// IO error while reading the schema file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or structure error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    spec: RawSpec,
}

#[derive(Debug, Deserialize)]
struct RawSpec {
    #[serde(default)]
    properties: IndexMap<String, RawProperty>,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(rename = "type")]
    type_name: Option<String>,
    description: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<String>>,
    properties: Option<IndexMap<String, RawProperty>>,
    items: Option<RawItems>,
}

#[derive(Debug, Deserialize)]
struct RawItems {
    properties: Option<IndexMap<String, RawProperty>>,
}

/// Parse a schema description from YAML text.
pub fn load_str(source: &str) -> Result<SchemaNode, SchemaError> {
    let raw: RawSchema = serde_yaml::from_str(source)?;
    Ok(SchemaNode::root(convert_children(raw.spec.properties)))
}

/// Load a schema description from a file.
pub fn load_file(path: &Path) -> Result<SchemaNode, SchemaError> {
    let source = std::fs::read_to_string(path)?;
    load_str(&source)
}

/// Conventional schema location for a workspace: `metadata.yaml` under a
/// `smart-hint` directory sibling to the workspace root.
pub fn default_schema_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("../smart-hint/metadata.yaml")
}

fn convert_children(raw: IndexMap<String, RawProperty>) -> IndexMap<SmolStr, SchemaNode> {
    raw.into_iter()
        .map(|(name, property)| {
            let node = convert(&name, property);
            (SmolStr::new(name), node)
        })
        .collect()
}

fn convert(name: &str, raw: RawProperty) -> SchemaNode {
    let RawProperty {
        type_name,
        description,
        enum_values,
        properties,
        items,
    } = raw;

    let type_name = SmolStr::new(type_name.as_deref().unwrap_or("string"));
    // `enum` wins over nested properties; an enumerated property never
    // contains children.
    let kind = if let Some(values) = enum_values {
        SchemaKind::Enum { values }
    } else if let Some(children) = items.and_then(|items| items.properties) {
        SchemaKind::ArrayOfObject {
            children: convert_children(children),
        }
    } else if type_name == "object" || properties.is_some() {
        SchemaKind::Object {
            children: convert_children(properties.unwrap_or_default()),
        }
    } else {
        SchemaKind::Scalar
    };

    SchemaNode {
        name: SmolStr::new(name),
        type_name,
        description: description.unwrap_or_default(),
        kind,
    }
}
