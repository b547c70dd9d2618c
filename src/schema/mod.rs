//! Schema tree — immutable description of allowed document structure.
//!
//! Loaded once per session from a YAML description and navigated top-down
//! by path. A path that does not resolve yields `None`, never an error:
//! without schema information the engine simply stays silent.

mod load;
mod types;

pub use load::{SchemaError, default_schema_path, load_file, load_str};
pub use types::{SchemaKind, SchemaNode};
