//! # Question Repository
//!
//! The JSON file on disk is the only datastore of the application. This module
//! owns every access to it: each operation reads the whole file, applies its
//! change to the in-memory collection and writes the whole collection back.
//!
//! ## Sub-modules:
//! - `storage`: raw load/save of the JSON array.
//! - `question`: the `QuestionRepository` with the question and answer operations.

mod question;
pub mod storage;

pub use question::QuestionRepository;

use std::path::PathBuf;

/// Failures while reading or writing the storage file.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} does not contain a valid question list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize questions: {0}")]
    Serialize(#[source] serde_json::Error),
}
