//! Operator-facing rendering options.

use serde::{Deserialize, Serialize};

/// Rendering options for the error reporter.
///
/// Every field is operator-settable. `Default` carries the framework
/// defaults, and `#[serde(default)]` lets application config files override
/// only the fields they care about.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum source lines shown around the failing line in the primary
    /// excerpt of the developer page.
    pub max_source_lines: u32,
    /// Maximum source lines for excerpts nested inside trace rows.
    pub max_trace_source_lines: u32,
    /// Discard already-buffered response output before rendering, so an
    /// outer buffering layer cannot swallow the error page.
    pub discard_existing_output: bool,
    /// Route that takes over rendering entirely when set.
    pub error_route: Option<String>,
    /// View name for the detailed developer page.
    pub exception_view: String,
    /// View name for the sanitized production page.
    pub error_view: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            max_source_lines: 25,
            max_trace_source_lines: 10,
            discard_existing_output: true,
            error_route: None,
            exception_view: "exception".to_string(),
            error_view: "error".to_string(),
        }
    }
}
