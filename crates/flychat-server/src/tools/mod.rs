//! Tools the agent can route a query to.
//!
//! Each tool is a plain function of the query text. Data-backed tools load
//! their JSON file once at startup.

mod knowledge;
mod leads;
mod scheduler;

pub use knowledge::KnowledgeBase;
pub use leads::{Lead, LeadBook};
pub use scheduler::{Scheduler, CONFIRMATION};

use std::path::{Path, PathBuf};

/// A named handler for one kind of query.
pub trait Tool: Send + Sync {
    /// Stable tool name, used in logs.
    fn name(&self) -> &'static str;

    /// One-line description of what the tool answers.
    fn description(&self) -> &'static str;

    /// Answer `query`.
    fn run(&self, query: &str) -> String;
}

/// Errors loading tool data files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not the expected JSON shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON data file.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
