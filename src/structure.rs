//! Structural position resolver.
//!
//! Infers where the cursor sits in the implicit schema hierarchy from
//! indentation alone. Mid-edit documents rarely parse, so this is a
//! deliberate heuristic kept behind [`resolve`]; a strict-parser resolver
//! could replace it without touching suggestion synthesis.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::Position;
use crate::document::{self, DocumentSnapshot};
use crate::schema::SchemaNode;

/// Inferred location of the cursor within the schema hierarchy.
///
/// Derived, ephemeral: recomputed in full on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralPosition {
    /// Effective indentation of the cursor line, after the leaf-property
    /// reinterpretation rule.
    pub indent: usize,
    /// Enclosing schema path, root-first. Empty means document root.
    pub path: Vec<SmolStr>,
    /// Keys already present as siblings at the effective indentation,
    /// excluding the cursor line itself.
    pub used_keys: FxHashSet<SmolStr>,
}

/// Resolve the structural position of `position` in `document`.
///
/// When the line directly above declares a property that cannot contain
/// children, the cursor's indentation is reinterpreted as that property's
/// own indentation: the editor auto-indented one level deeper than the
/// document structure allows. The reinterpretation happens before the
/// parent and sibling scans.
pub fn resolve(
    document: &DocumentSnapshot<'_>,
    position: Position,
    schema: &SchemaNode,
) -> StructuralPosition {
    let line = document.line(position.line).unwrap_or("");
    let mut indent = document::indent_level(line);

    if let Some(previous_line) = position.line.checked_sub(1) {
        let previous = document.line(previous_line).unwrap_or("");
        if document::key_token(previous).is_some() {
            let can_nest = line_property(document, previous_line, schema)
                .is_some_and(SchemaNode::can_have_children);
            if !can_nest {
                indent = document::indent_level(previous);
            }
        }
    }

    let path = parent_path(document, position.line, indent);
    let used_keys = used_keys_at_level(document, position.line, indent);

    StructuralPosition {
        indent,
        path,
        used_keys,
    }
}

/// Resolve the schema node declared by the key on `line`, using that
/// line's own ancestor chain. `None` when the line has no key or the key
/// is not in the schema.
pub fn line_property<'s>(
    document: &DocumentSnapshot<'_>,
    line: usize,
    schema: &'s SchemaNode,
) -> Option<&'s SchemaNode> {
    let text = document.line(line)?;
    let key = document::key_token(text)?;
    let indent = document::indent_level(text);
    let path = parent_path(document, line, indent);
    schema.lookup(path.iter().map(|segment| segment.as_str()).chain([key]))
}

/// Ancestor chain of a line at `indent`, root-first.
///
/// Repeats the parent scan outward from each parent found. In this dialect
/// the chain rarely exceeds one segment (sequence-marker lines carry no
/// key and zero-indentation lines stop the scan), but nested objects
/// resolve to their full path.
pub fn parent_path(
    document: &DocumentSnapshot<'_>,
    line: usize,
    indent: usize,
) -> Vec<SmolStr> {
    let mut path = Vec::new();
    let mut scan_line = line;
    let mut scan_indent = indent;

    while let Some((parent_line, parent_indent, key)) =
        parent_of(document, scan_line, scan_indent)
    {
        path.push(key);
        if parent_indent == 0 {
            break;
        }
        scan_line = parent_line;
        scan_indent = parent_indent;
    }

    path.reverse();
    path
}

/// The structural parent of a line: scanning upward, the first line with
/// strictly smaller indentation carrying a key. A zero-indentation line
/// always stops the scan — its key (if any) is the parent; a keyless one
/// (blank lines included) means the position is at document root.
fn parent_of(
    document: &DocumentSnapshot<'_>,
    line: usize,
    indent: usize,
) -> Option<(usize, usize, SmolStr)> {
    let mut current = line;
    while current > 0 {
        current -= 1;
        let text = document.line(current).unwrap_or("");
        let line_indent = document::indent_level(text);

        if line_indent == 0 {
            return document::key_token(text).map(|key| (current, 0, SmolStr::new(key)));
        }
        if line_indent < indent {
            if let Some(key) = document::key_token(text) {
                return Some((current, line_indent, SmolStr::new(key)));
            }
        }
    }
    None
}

/// Sibling keys at `indent` in the contiguous block around `line`.
///
/// The block extends in both directions while lines keep indentation of at
/// least `indent`; the first shallower line on either side is a boundary.
/// Only lines indented exactly `indent` contribute keys, and the cursor
/// line itself never does.
fn used_keys_at_level(
    document: &DocumentSnapshot<'_>,
    line: usize,
    indent: usize,
) -> FxHashSet<SmolStr> {
    let mut start = line;
    while start > 0 {
        let above = document.line(start - 1).unwrap_or("");
        if document::indent_level(above) < indent {
            break;
        }
        start -= 1;
    }

    let mut end = line;
    while end + 1 < document.line_count() {
        let below = document.line(end + 1).unwrap_or("");
        if document::indent_level(below) < indent {
            break;
        }
        end += 1;
    }

    let mut used = FxHashSet::default();
    for current in start..=end {
        if current == line {
            continue;
        }
        let text = document.line(current).unwrap_or("");
        if document::indent_level(text) == indent {
            if let Some(key) = document::key_token(text) {
                used.insert(SmolStr::new(key));
            }
        }
    }
    used
}
