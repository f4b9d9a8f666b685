//! Errors of the render pipeline.
//!
//! Anything here ends the full render path and forces the one-shot
//! plain-text fallback; nothing is retried.

use thiserror::Error;

/// Failure produced by a view-rendering collaborator.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ViewError {
    message: String,
}

impl ViewError {
    /// Error with a display message.
    pub fn new(message: impl Into<String>) -> Self {
        ViewError {
            message: message.into(),
        }
    }

    /// Lookup failure for a view name nothing answers to.
    pub fn unknown_view(view: &str) -> Self {
        ViewError::new(format!("no view registered for `{view}`"))
    }
}

/// Why the full render path could not produce a page.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The view collaborator failed while producing the page body.
    #[error("view `{view}` failed: {source}")]
    View {
        /// Name of the view that failed.
        view: String,
        /// The collaborator's error.
        #[source]
        source: ViewError,
    },
    /// An override route is configured but no dispatcher is installed.
    #[error("error route `{route}` is configured but no dispatcher is installed")]
    MissingDispatcher {
        /// The configured route.
        route: String,
    },
}
