//! Error types for tagtree.
//!
//! Building and rendering a tree never fails. Errors come from writing the
//! rendered page out, or from `validate()` reporting structural misuse that
//! the builder accepted silently.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while validating or saving a document.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Writing the rendered document failed
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A void element (no end tag) was given children
    #[error("void element <{tag}> has {count} child node(s) that will never be rendered")]
    VoidElementChild {
        /// Tag name of the void element
        tag: String,
        /// Number of unreachable children
        count: usize,
    },
}

/// Result type alias for markup operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

impl MarkupError {
    /// Create an I/O error for the given destination.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
