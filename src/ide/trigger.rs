//! Trigger dispatch: which edits re-run synthesis, and where.

use tracing::debug;

use crate::base::Position;
use crate::document::{self, DocumentSnapshot};
use crate::schema::SchemaNode;
use crate::structure;

/// An edit event that re-runs suggestion synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// A typed character; synthesis runs at the literal cursor.
    Character(char),
    /// A newline, possibly auto-indented; the cursor may be reinterpreted.
    Newline,
}

/// Whether a typed character re-runs synthesis.
///
/// The host registers exactly these: ASCII letters, `:`, and space.
pub fn is_trigger_character(c: char) -> bool {
    c == ':' || c == ' ' || c.is_ascii_alphabetic()
}

/// Reinterpret the cursor for a newline trigger.
///
/// When the line above declares a property that cannot contain children,
/// the editor's auto-indent placed the cursor one level too deep; synthesis
/// then runs at a column equal to that property's own indentation, which
/// produces sibling-level suggestions instead of child-level ones.
pub fn newline_position(
    document: &DocumentSnapshot<'_>,
    position: Position,
    schema: &SchemaNode,
) -> Position {
    let Some(previous_line) = position.line.checked_sub(1) else {
        return position;
    };
    let Some(previous) = document.line(previous_line) else {
        return position;
    };
    if document::key_token(previous).is_none() {
        return position;
    }

    let can_nest = structure::line_property(document, previous_line, schema)
        .is_some_and(SchemaNode::can_have_children);
    if can_nest {
        position
    } else {
        let column = document::indent_level(previous);
        debug!(
            line = position.line,
            column, "newline snapped to previous property's level"
        );
        Position::new(position.line, column)
    }
}
