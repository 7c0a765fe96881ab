//! Public AST types for parsed `.env` documents.

/// One piece of a parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePart {
    /// Literal text, used verbatim.
    Literal(String),
    /// An interpolation reference (`$NAME` or `${NAME}`), resolved against
    /// entries defined earlier in the document.
    Reference(String),
}

/// A parsed value: literal runs and references in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawValue {
    pub parts: Vec<ValuePart>,
}

/// One `KEY=value` assignment, before interpolation resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: RawValue,
}

/// The entries of a `.env` input in file order.
///
/// Duplicate keys are preserved here; last-write-wins applies only during
/// resolution, where intermediate definitions stay visible to the references
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub entries: Vec<Entry>,
}
