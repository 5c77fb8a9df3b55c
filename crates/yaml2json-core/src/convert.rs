//! Conversion from parsed YAML values to JSON values.

use serde_json::Value;
use yaml_rust2::Yaml;

/// Convert a YAML value to a JSON value.
///
/// YAML that has no native JSON representation is converted to its textual
/// form rather than failing the conversion: non-finite or unparseable floats
/// become their source string, and non-string mapping keys are rendered as
/// strings. Mapping entry order and sequence order are preserved.
pub fn yaml_to_json_value(value: &Yaml) -> Value {
    match value {
        Yaml::Null | Yaml::BadValue => Value::Null,
        Yaml::Boolean(b) => Value::Bool(*b),
        Yaml::Integer(n) => Value::Number((*n).into()),
        Yaml::Real(s) => match s.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            Some(n) => Value::Number(n),
            // nan, inf, or otherwise unrepresentable: keep the source text
            None => Value::String(s.clone()),
        },
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Array(items) => Value::Array(items.iter().map(yaml_to_json_value).collect()),
        Yaml::Hash(entries) => {
            let mut map = serde_json::Map::new();
            for (key, value) in entries {
                map.insert(key_to_string(key), yaml_to_json_value(value));
            }
            Value::Object(map)
        }
        // Aliases are resolved by the loader; an unresolved one has no value.
        Yaml::Alias(_) => Value::Null,
    }
}

/// Render a YAML mapping key as a JSON object key.
///
/// JSON object keys must be strings; non-string YAML keys fall back to the
/// compact JSON text of their converted value.
fn key_to_string(key: &Yaml) -> String {
    match key {
        Yaml::String(s) => s.clone(),
        other => yaml_to_json_value(other).to_string(),
    }
}
