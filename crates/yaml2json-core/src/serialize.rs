//! JSON text production.

use crate::Result;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize a value to JSON text.
///
/// With `indent = None` the output is compact, with no insignificant
/// whitespace. With `indent = Some(n)` nested containers are indented by
/// `n` spaces per level. Object keys appear in insertion order and
/// non-ASCII characters are left unescaped. No trailing newline is
/// appended; that is the sink's job.
pub fn to_json_text(value: &Value, indent: Option<usize>) -> Result<String> {
    let text = match indent {
        None => serde_json::to_string(value)?,
        Some(width) => {
            let indent = vec![b' '; width];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut buf = Vec::new();
            let mut serializer = Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut serializer)?;
            String::from_utf8(buf).expect("serde_json emits valid UTF-8")
        }
    };
    Ok(text)
}
