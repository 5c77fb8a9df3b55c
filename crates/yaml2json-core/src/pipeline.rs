//! The conversion pipeline: load, normalize, aggregate, empty-check.

use crate::{Error, Result, aggregate_files, collapse_documents, load_path};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Convert one or more YAML files into a single JSON value.
///
/// Inputs are processed strictly in argument order and the run fails on the
/// first missing or unparseable file, before later inputs are touched.
/// Each file's documents are collapsed per the singleton-unwrap rule, then
/// the per-file results are aggregated the same way.
///
/// # Errors
///
/// Returns [`Error::EmptyDocument`] if the aggregate is `null` and
/// `allow_empty` is false, plus any error from [`load_path`].
pub fn convert_files(inputs: &[PathBuf], allow_empty: bool) -> Result<Value> {
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let documents = load_path(input)?;
        debug!(path = %input.display(), documents = documents.len(), "loaded input");
        results.push(collapse_documents(documents));
    }

    let output = aggregate_files(results);

    if output.is_null() && !allow_empty {
        return Err(Error::EmptyDocument);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_single_file_single_document_identity() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "x: 1\ny: [true, null]\n");

        let value = convert_files(&[a], false).unwrap();
        assert_eq!(value, json!({"x": 1, "y": [true, null]}));
    }

    #[test]
    fn test_mixed_single_and_multi_document_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "x: 1\n");
        let b = write_fixture(&dir, "b.yaml", "---\n1\n---\n2\n");

        let value = convert_files(&[a, b], false).unwrap();
        assert_eq!(value, json!([{"x": 1}, [1, 2]]));
    }

    #[test]
    fn test_file_order_is_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "first\n");
        let b = write_fixture(&dir, "b.yaml", "second\n");

        let value = convert_files(&[b, a], false).unwrap();
        assert_eq!(value, json!(["second", "first"]));
    }

    #[test]
    fn test_empty_file_without_allow_empty() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "empty.yaml", "# only a comment\n");

        let err = convert_files(&[a], false).unwrap_err();
        assert!(matches!(err, Error::EmptyDocument));
    }

    #[test]
    fn test_empty_file_with_allow_empty() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "empty.yaml", "");

        let value = convert_files(&[a], true).unwrap();
        assert_eq!(value, json!(null));
    }

    #[test]
    fn test_empty_sentinel_inside_multi_file_run_is_not_an_error() {
        // Only the aggregate matters: a null per-file result inside an
        // array does not trip the empty-result policy.
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "empty.yaml", "");
        let b = write_fixture(&dir, "b.yaml", "x: 1\n");

        let value = convert_files(&[a, b], false).unwrap();
        assert_eq!(value, json!([null, {"x": 1}]));
    }

    #[test]
    fn test_missing_file_aborts_before_later_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let b = write_fixture(&dir, "b.yaml", "x: 1\n");

        let err = convert_files(&[missing.clone(), b], false).unwrap_err();
        match err {
            Error::InputNotFound { path } => assert_eq!(path, missing),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_last_in_argument_list() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "x: 1\n");

        let err = convert_files(&[a, Path::new("/nonexistent.yaml").to_path_buf()], false)
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }
}
