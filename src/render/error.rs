//! Render error types.

use thiserror::Error;

/// Errors that can occur while rendering a diagram.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the DOT source failed
    #[error("Failed to write DOT source to {path}: {source}")]
    WriteSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The Graphviz executable could not be started
    #[error("Graphviz executable '{program}' could not be run: {source}. Make sure Graphviz is installed and on PATH")]
    BackendMissing {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Graphviz ran but reported an error
    #[error("Graphviz exited with {status}: {stderr}")]
    BackendFailed { status: String, stderr: String },
}
