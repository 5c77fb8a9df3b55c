//! Loading YAML source files into JSON values.

use crate::{Error, Result, yaml_to_json_value};
use serde_json::Value;
use std::fs;
use std::path::Path;
use yaml_rust2::YamlLoader;

/// Read a YAML file and convert every document it contains.
///
/// Returns one value per document, in document order. A file with no
/// documents (empty, or comments only) yields an empty vector.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if the path does not exist,
/// [`Error::Io`] if it cannot be read, and [`Error::Parse`] if the YAML
/// is malformed.
pub fn load_path(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = YamlLoader::load_from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(documents.iter().map(yaml_to_json_value).collect())
}
