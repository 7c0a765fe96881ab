//! Sequential interpolation resolution.
//!
//! Walks a parsed document once, left to right, substituting each reference
//! with the value its name has at that point. No string re-scanning happens
//! here: references were already tagged as typed nodes by the parser.

use std::collections::HashMap;

use crate::parser::{Document, RawValue, ValuePart};

/// Resolve every entry of a document into a flat key/value map.
///
/// Each value sees the resolutions of all strictly earlier entries,
/// including earlier definitions of its own key. References to names with
/// no earlier binding resolve to the empty string; they are never an error.
/// Later entries for the same key overwrite earlier ones.
pub fn resolve(document: &Document) -> HashMap<String, String> {
    let mut resolved = HashMap::new();
    for entry in &document.entries {
        let value = resolve_value(&entry.value, &resolved);
        resolved.insert(entry.key.clone(), value);
    }
    resolved
}

/// Concatenate a raw value against the bindings visible at its position.
fn resolve_value(value: &RawValue, bindings: &HashMap<String, String>) -> String {
    let mut output = String::new();
    for part in &value.parts {
        match part {
            ValuePart::Literal(text) => output.push_str(text),
            ValuePart::Reference(name) => {
                if let Some(bound) = bindings.get(name) {
                    output.push_str(bound);
                }
            }
        }
    }
    output
}
