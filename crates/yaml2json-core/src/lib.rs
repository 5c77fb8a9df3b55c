//! # yaml2json-core
//!
//! YAML to JSON conversion with multi-document and multi-file support.
//!
//! The pipeline is linear: load each source, collapse its documents to one
//! value, aggregate across sources, serialize. The one subtle contract is
//! the singleton-unwrap rule applied at both levels:
//!
//! - a source with zero documents becomes `null`, one document becomes that
//!   document unwrapped, and more than one becomes an array of documents;
//! - a run with one source emits that source's value directly, while more
//!   than one source emits an array of per-source values in argument order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use yaml2json_core::{convert_files, to_json_text};
//!
//! let inputs = vec![PathBuf::from("config.yaml")];
//! let value = convert_files(&inputs, false).unwrap();
//! let json = to_json_text(&value, Some(2)).unwrap();
//! println!("{}", json);
//! ```

mod convert;
mod error;
mod load;
mod normalize;
mod pipeline;
mod serialize;

pub use convert::yaml_to_json_value;
pub use error::{Error, Result};
pub use load::load_path;
pub use normalize::{aggregate_files, collapse_documents};
pub use pipeline::convert_files;
pub use serialize::to_json_text;
