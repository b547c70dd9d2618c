//! Schema node types.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// The shape of one schema-defined property.
///
/// `Object` and `ArrayOfObject` carry child properties; for arrays the
/// children describe the shape of each element, not the array itself.
/// Every consumer pattern-matches on this, so "can this property contain
/// children" is a single variant test rather than field probing.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Scalar,
    Enum {
        values: Vec<String>,
    },
    Object {
        children: IndexMap<SmolStr, SchemaNode>,
    },
    ArrayOfObject {
        children: IndexMap<SmolStr, SchemaNode>,
    },
}

/// One schema-defined property.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Property name as declared.
    pub name: SmolStr,
    /// Declared type string (`"string"`, `"object"`, `"array"`, ...),
    /// surfaced as completion detail.
    pub type_name: SmolStr,
    /// Human-readable description, surfaced as completion documentation.
    pub description: String,
    pub kind: SchemaKind,
}

impl SchemaNode {
    /// The synthetic root node holding the top-level properties.
    pub fn root(children: IndexMap<SmolStr, SchemaNode>) -> Self {
        Self {
            name: SmolStr::default(),
            type_name: SmolStr::new_static("object"),
            description: String::new(),
            kind: SchemaKind::Object { children },
        }
    }

    /// Whether this property can contain child properties.
    pub fn can_have_children(&self) -> bool {
        matches!(
            self.kind,
            SchemaKind::Object { .. } | SchemaKind::ArrayOfObject { .. }
        )
    }

    /// Child properties in declared order.
    ///
    /// For `ArrayOfObject` these are the element shape's properties.
    pub fn children(&self) -> Option<&IndexMap<SmolStr, SchemaNode>> {
        match &self.kind {
            SchemaKind::Object { children } | SchemaKind::ArrayOfObject { children } => {
                Some(children)
            }
            SchemaKind::Scalar | SchemaKind::Enum { .. } => None,
        }
    }

    /// Enumerated values, when this property declares them.
    pub fn enum_values(&self) -> Option<&[String]> {
        match &self.kind {
            SchemaKind::Enum { values } => Some(values),
            _ => None,
        }
    }

    /// Child node by name.
    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children()?.get(name)
    }

    /// Resolve a path by repeatedly descending into children.
    ///
    /// A segment that does not exist yields `None`; callers treat that as
    /// "no schema information available" and suppress suggestions. An empty
    /// path resolves to the node itself.
    pub fn lookup<I>(&self, path: I) -> Option<&SchemaNode>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current = self;
        for segment in path {
            current = current.child(segment.as_ref())?;
        }
        Some(current)
    }
}
