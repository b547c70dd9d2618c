//! Derived document indexes: node identifiers and root property usage.
//!
//! Both are rebuilt in full on every request. Documents are small and
//! edits frequent, so the staleness window is zero by construction and
//! nothing survives across requests.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::constants::NODES_SECTION;
use crate::document::{self, DocumentSnapshot};
use crate::schema::SchemaNode;

/// Collect the identifiers declared as `- Name:` elements under the
/// root-level `Nodes` section, in document order.
///
/// This is a heuristic block scan, not a scope-aware parse: the section
/// flag arms on the `Nodes:` key and disarms on the next line starting at
/// column zero with a letter. Malformed lines in between contribute
/// nothing and never fail. Duplicates are preserved.
pub fn collect_node_identifiers(document: &DocumentSnapshot<'_>) -> Vec<SmolStr> {
    let mut identifiers = Vec::new();
    let mut in_nodes_section = false;

    for line in document.lines() {
        if document::indent_level(line) == 0 && has_key(line, NODES_SECTION) {
            in_nodes_section = true;
            continue;
        }
        if in_nodes_section {
            if let Some(identifier) = document::sequence_element_key(line) {
                identifiers.push(SmolStr::new(identifier));
            }
            // A fresh root key ends the section.
            if line.starts_with(|c: char| c.is_ascii_alphabetic()) {
                in_nodes_section = false;
            }
        }
    }

    debug!(count = identifiers.len(), "collected node identifiers");
    identifiers
}

/// Root properties already declared somewhere in the document.
///
/// Occurrences at any indentation count: the root sections are singletons,
/// and a misplaced `Nodes:` still claims the name.
#[derive(Debug, Clone, Default)]
pub struct RootUsage {
    used: FxHashSet<SmolStr>,
}

impl RootUsage {
    /// Scan `document` for occurrences of the schema's root property names.
    pub fn scan(document: &DocumentSnapshot<'_>, schema: &SchemaNode) -> Self {
        let mut used = FxHashSet::default();
        let Some(roots) = schema.children() else {
            return Self { used };
        };

        for line in document.lines() {
            for name in roots.keys() {
                if has_key(line, name) {
                    used.insert(name.clone());
                }
            }
        }
        Self { used }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}

/// Whether a line declares `name` as its key, allowing whitespace on both
/// sides of the colon (`  Nodes :` counts).
fn has_key(line: &str, name: &str) -> bool {
    line.trim_start()
        .strip_prefix(name)
        .is_some_and(|rest| rest.trim_start().starts_with(':'))
}
