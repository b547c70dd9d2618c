//! # archint-base
//!
//! Core library for architecture-as-code YAML completion and structural
//! analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → completion synthesis, trigger dispatch, session host
//!   ↓
//! index      → node identifier index, root property usage
//!   ↓
//! structure  → structural position resolver (indentation heuristics)
//!   ↓
//! schema     → schema tree, YAML loading
//!   ↓
//! document   → document snapshot, line utilities
//!   ↓
//! base       → primitives (Position, dialect constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → document → schema → structure → index → ide)
// ============================================================================

/// Foundation types: Position, dialect constants
pub mod base;

/// Document snapshot and line-shape utilities
pub mod document;

/// Schema tree: immutable description of allowed document structure
pub mod schema;

/// Structural position resolver: indentation-based scope inference
pub mod structure;

/// Derived indexes: node identifiers, root property usage
pub mod index;

/// IDE features: completion synthesis, trigger dispatch, session host
pub mod ide;

// Re-export foundation types
pub use base::Position;
pub use document::DocumentSnapshot;
pub use ide::{CompletionHost, CompletionItem, CompletionKind, TriggerKind, completions};
pub use schema::{SchemaError, SchemaKind, SchemaNode};
pub use structure::StructuralPosition;
