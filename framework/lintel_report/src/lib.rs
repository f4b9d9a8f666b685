//! Uncaught-failure reporting for the Lintel web framework.
//!
//! When a request dies with an unhandled failure, [`ErrorReporter`] owns
//! everything that happens next: it logs the failure, unwinds buffered
//! output, and renders either a developer diagnostic page (source excerpt,
//! collapsible stack trace) or a sanitized production page. One failure per
//! request, one rendered output, no retries.
//!
//! The reporter knows nothing about any concrete HTTP server or template
//! engine. Collaborators reach it through small traits:
//!
//! - [`HttpContext`]: the request/response boundary (status line, buffer
//!   stack, body writes, request-shape signals)
//! - [`ViewRenderer`]: page templates; [`ViewRegistry`] is the shipped
//!   implementation with built-in pages and an override map
//! - [`FailureLog`]: the log backend; [`TracingLog`] forwards to `tracing`
//! - [`RouteDispatcher`]: an operator-configured route that takes over
//!   rendering entirely
//!
//! # Example
//!
//! ```text
//! let context = BufferContext::new();
//! let mut reporter = ErrorReporter::new(true, ReportConfig::default(), context);
//! reporter.handle(
//!     Failure::http(404, "no such order").with_location("src/orders.rs", 58),
//! );
//! ```

mod config;
mod context;
mod errors;
mod log;
pub mod panic_hook;
pub mod render;
mod reporter;
mod views;

pub use config::ReportConfig;
pub use context::{BufferContext, ConsoleContext, HttpContext, RouteDispatcher};
pub use errors::{ReportError, ViewError};
pub use log::{BufferLog, FailureLog, TracingLog};
pub use reporter::{ErrorReporter, FailureSink};
pub use views::{ViewData, ViewRegistry, ViewRenderer};
