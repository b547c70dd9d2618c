//! Completion suggestion synthesis.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::Position;
use crate::base::constants::{REFERENCE_FIELDS, RELATIONSHIPS_SECTION, SEQUENCE_MARKER};
use crate::document::{self, DocumentSnapshot};
use crate::index::RootUsage;
use crate::schema::{SchemaKind, SchemaNode};
use crate::structure::StructuralPosition;

/// Host command that re-opens the suggestion popup after an insertion,
/// chaining a property completion straight into its value completion.
pub const TRIGGER_SUGGEST_COMMAND: &str = "editor.action.triggerSuggest";

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A schema property key.
    Property,
    /// A value from a property's enumerated set.
    EnumMember,
    /// A declared node identifier (cross-reference value).
    Reference,
    /// The `- ` marker starting a new sequence element.
    SequenceMarker,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Property => 5,        // Field
            CompletionKind::EnumMember => 20,     // EnumMember
            CompletionKind::Reference => 18,      // Reference
            CompletionKind::SequenceMarker => 24, // Operator
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label) — the schema's declared type.
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup) — the schema's description.
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Ask the host to re-trigger suggestion after inserting, so that a
    /// property with an enumerated set chains into value completion.
    pub trigger_suggest: bool,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            trigger_suggest: false,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Mark the item to re-trigger suggestion after insertion.
    pub fn with_trigger_suggest(mut self, trigger: bool) -> Self {
        self.trigger_suggest = trigger;
        self
    }
}

/// Synthesize completion suggestions at a position.
///
/// Pure: every input is passed explicitly and nothing is cached across
/// calls. Returns an empty list whenever the schema gives no information
/// for the position. Suggestions keep schema declaration order; there is
/// no further ranking.
pub fn completions(
    document: &DocumentSnapshot<'_>,
    position: Position,
    schema: &SchemaNode,
    structural: &StructuralPosition,
    node_identifiers: &[SmolStr],
    root_usage: &RootUsage,
) -> Vec<CompletionItem> {
    let line = document.line(position.line).unwrap_or("");
    let prefix_end = position.column.min(line.chars().count());
    let line_prefix: String = line.chars().take(prefix_end).collect();

    // The cursor right after a `:` means a value is being completed, not
    // another key.
    if line_prefix.trim_end().ends_with(':') {
        return value_completions(schema, structural, node_identifiers, &line_prefix);
    }

    let partial = line_prefix.trim();

    if structural.path.is_empty() {
        return root_completions(schema, structural, root_usage, partial);
    }

    let Some(block) = schema.lookup(structural.path.iter().map(|segment| segment.as_str()))
    else {
        return Vec::new();
    };

    match &block.kind {
        SchemaKind::Object { children } => {
            property_completions(children, structural, partial, false)
        }
        SchemaKind::ArrayOfObject { children } => {
            sequence_completions(document, position, line, block, children, structural, partial)
        }
        SchemaKind::Scalar | SchemaKind::Enum { .. } => Vec::new(),
    }
}

/// Value suggestions for the property the cursor's line declares.
///
/// `Start`/`End` inside `Relationships` reference declared node
/// identifiers instead of a schema enum; everything else needs an
/// enumerated set to suggest anything.
fn value_completions(
    schema: &SchemaNode,
    structural: &StructuralPosition,
    node_identifiers: &[SmolStr],
    line_prefix: &str,
) -> Vec<CompletionItem> {
    let Some(property) = line_prefix.trim_end().strip_suffix(':').map(str::trim) else {
        return Vec::new();
    };

    let references_nodes = structural
        .path
        .first()
        .is_some_and(|head| head == RELATIONSHIPS_SECTION)
        && REFERENCE_FIELDS.contains(&property);

    if references_nodes {
        return node_identifiers
            .iter()
            .map(|identifier| {
                CompletionItem::new(identifier.as_str(), CompletionKind::Reference)
                    .with_insert_text(format!(" {identifier}"))
            })
            .collect();
    }

    let node = schema.lookup(
        structural
            .path
            .iter()
            .map(|segment| segment.as_str())
            .chain([property]),
    );
    let Some(values) = node.and_then(SchemaNode::enum_values) else {
        return Vec::new();
    };

    values
        .iter()
        .map(|value| {
            CompletionItem::new(value.as_str(), CompletionKind::EnumMember)
                .with_insert_text(format!(" {value}"))
        })
        .collect()
}

/// Root-level suggestions: top-level properties not yet declared anywhere,
/// not present as siblings, matching the typed prefix.
fn root_completions(
    schema: &SchemaNode,
    structural: &StructuralPosition,
    root_usage: &RootUsage,
    partial: &str,
) -> Vec<CompletionItem> {
    let Some(roots) = schema.children() else {
        return Vec::new();
    };

    roots
        .values()
        .filter(|root| !root_usage.contains(&root.name))
        .filter(|root| !structural.used_keys.contains(root.name.as_str()))
        .filter(|root| matches_prefix(&root.name, partial))
        .map(property_item)
        .collect()
}

/// Suggestions inside a sequence block (`Nodes`, `Relationships`).
///
/// Directly under the block header a new element has to be started first,
/// so the only suggestion is the sequence marker. Anywhere else the
/// element shape's properties are offered; enumerated ones chain into
/// value completion.
fn sequence_completions(
    document: &DocumentSnapshot<'_>,
    position: Position,
    line: &str,
    block: &SchemaNode,
    children: &IndexMap<SmolStr, SchemaNode>,
    structural: &StructuralPosition,
    partial: &str,
) -> Vec<CompletionItem> {
    let previous_key = position
        .line
        .checked_sub(1)
        .and_then(|previous| document.line(previous))
        .and_then(document::key_token);

    if !line.trim_start().starts_with('-') && previous_key == Some(block.name.as_str()) {
        return vec![
            CompletionItem::new(SEQUENCE_MARKER, CompletionKind::SequenceMarker)
                .with_insert_text(SEQUENCE_MARKER),
        ];
    }

    property_completions(children, structural, partial, true)
}

fn property_completions(
    children: &IndexMap<SmolStr, SchemaNode>,
    structural: &StructuralPosition,
    partial: &str,
    chain_enum_values: bool,
) -> Vec<CompletionItem> {
    children
        .values()
        .filter(|child| !structural.used_keys.contains(child.name.as_str()))
        .filter(|child| matches_prefix(&child.name, partial))
        .map(|child| {
            let item = property_item(child);
            if chain_enum_values && child.enum_values().is_some() {
                item.with_trigger_suggest(true)
            } else {
                item
            }
        })
        .collect()
}

fn property_item(node: &SchemaNode) -> CompletionItem {
    let mut item = CompletionItem::new(node.name.as_str(), CompletionKind::Property)
        .with_detail(node.type_name.as_str())
        .with_insert_text(format!("{}:", node.name));
    if !node.description.is_empty() {
        item = item.with_documentation(node.description.as_str());
    }
    item
}

/// Case-insensitive starts-with; an empty partial matches everything.
fn matches_prefix(name: &str, partial: &str) -> bool {
    partial.is_empty() || name.to_lowercase().starts_with(&partial.to_lowercase())
}
