//! Domain constants for the architecture-as-code dialect.

/// Root section declaring architecture nodes.
pub const NODES_SECTION: &str = "Nodes";

/// Root section declaring relationships between nodes.
pub const RELATIONSHIPS_SECTION: &str = "Relationships";

/// Relationship fields whose values reference declared node identifiers.
pub const REFERENCE_FIELDS: [&str; 2] = ["Start", "End"];

/// Marker text starting a new sequence element.
pub const SEQUENCE_MARKER: &str = "- ";
