//! Session host: owns the lazily loaded schema and exposes the completion
//! entry points.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::base::Position;
use crate::document::DocumentSnapshot;
use crate::index::{self, RootUsage};
use crate::schema::{self, SchemaNode};
use crate::structure;

use super::completion::{CompletionItem, completions};
use super::trigger::{self, TriggerKind};

/// Command id hosts surface for the discoverable acknowledgment action.
pub const ACKNOWLEDGE_COMMAND: &str = "archint.architectureAsCode";

/// Message shown by the acknowledgment action.
pub const ACKNOWLEDGE_MESSAGE: &str = "Architecture as code completion support";

enum SchemaState {
    Unloaded,
    Loaded(Arc<SchemaNode>),
    Failed,
}

/// Owns the only state that survives across requests: the schema tree.
///
/// The schema is loaded on the first request and immutable afterwards. A
/// failed load degrades the whole session to empty suggestions — never
/// retried, never raised past this boundary. Everything else (structural
/// position, node identifiers, root usage) is recomputed inside each
/// request and dropped afterwards, so the document may change freely
/// between calls.
pub struct CompletionHost {
    schema_path: Option<PathBuf>,
    schema: RwLock<SchemaState>,
}

impl CompletionHost {
    /// Host that loads its schema from `schema_path` on first use.
    pub fn from_path(schema_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: Some(schema_path.into()),
            schema: RwLock::new(SchemaState::Unloaded),
        }
    }

    /// Host for a workspace, using the conventional schema location.
    pub fn for_workspace(workspace_root: &Path) -> Self {
        Self::from_path(schema::default_schema_path(workspace_root))
    }

    /// Host with a preloaded schema tree.
    pub fn with_schema(schema: SchemaNode) -> Self {
        Self {
            schema_path: None,
            schema: RwLock::new(SchemaState::Loaded(Arc::new(schema))),
        }
    }

    /// Primary entry point, run on character triggers.
    pub fn provide_completions(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        let Some(schema) = self.schema() else {
            return Vec::new();
        };
        let document = DocumentSnapshot::new(text);
        Self::complete(&document, position, &schema)
    }

    /// Newline entry point: snaps the cursor back to the previous line's
    /// level when that line's property cannot contain children.
    pub fn provide_completions_on_newline(
        &self,
        text: &str,
        position: Position,
    ) -> Vec<CompletionItem> {
        let Some(schema) = self.schema() else {
            return Vec::new();
        };
        let document = DocumentSnapshot::new(text);
        let position = trigger::newline_position(&document, position, &schema);
        Self::complete(&document, position, &schema)
    }

    /// Dispatch an edit event to the matching entry point.
    pub fn provide_completions_for_trigger(
        &self,
        text: &str,
        position: Position,
        trigger: TriggerKind,
    ) -> Vec<CompletionItem> {
        match trigger {
            TriggerKind::Newline => self.provide_completions_on_newline(text, position),
            TriggerKind::Character(_) => self.provide_completions(text, position),
        }
    }

    fn complete(
        document: &DocumentSnapshot<'_>,
        position: Position,
        schema: &SchemaNode,
    ) -> Vec<CompletionItem> {
        let structural = structure::resolve(document, position, schema);
        let node_identifiers = index::collect_node_identifiers(document);
        let root_usage = RootUsage::scan(document, schema);
        completions(
            document,
            position,
            schema,
            &structural,
            &node_identifiers,
            &root_usage,
        )
    }

    fn schema(&self) -> Option<Arc<SchemaNode>> {
        {
            let state = self.schema.read();
            match &*state {
                SchemaState::Loaded(schema) => return Some(schema.clone()),
                SchemaState::Failed => return None,
                SchemaState::Unloaded => {}
            }
        }

        let mut state = self.schema.write();
        // A concurrent caller may have settled the state between the locks.
        match &*state {
            SchemaState::Loaded(schema) => return Some(schema.clone()),
            SchemaState::Failed => return None,
            SchemaState::Unloaded => {}
        }

        let Some(path) = &self.schema_path else {
            *state = SchemaState::Failed;
            return None;
        };
        match schema::load_file(path) {
            Ok(schema) => {
                let schema = Arc::new(schema);
                *state = SchemaState::Loaded(schema.clone());
                Some(schema)
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "failed to load schema, completions disabled for this session"
                );
                *state = SchemaState::Failed;
                None
            }
        }
    }
}
