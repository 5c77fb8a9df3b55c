//! The singleton-unwrap rules for documents and files.
//!
//! Both levels of aggregation share an asymmetry that is easy to get wrong:
//! a single element passes through unwrapped, never as a one-element array.
//! These rules are deliberate, separate functions so the contract is stated
//! and tested in one place.

use serde_json::Value;

/// Collapse the documents of one source into a single value.
///
/// Zero documents become `null` (the empty sentinel), one document is
/// returned unwrapped, and more than one become an array in document order.
pub fn collapse_documents(documents: Vec<Value>) -> Value {
    match documents.len() {
        0 => Value::Null,
        1 => documents.into_iter().next().unwrap_or(Value::Null),
        _ => Value::Array(documents),
    }
}

/// Aggregate per-source values into the final output value.
///
/// A single source's value is emitted directly; multiple sources become an
/// array of per-source values in argument order. Unlike
/// [`collapse_documents`] there is no zero case: the caller always supplies
/// at least one source.
pub fn aggregate_files(results: Vec<Value>) -> Value {
    if results.len() == 1 {
        results.into_iter().next().unwrap_or(Value::Null)
    } else {
        Value::Array(results)
    }
}
