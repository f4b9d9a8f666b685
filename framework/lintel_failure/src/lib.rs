//! Failure vocabulary for the Lintel error reporter.
//!
//! When a request dies, whatever killed it is captured once as a
//! [`Failure`]: a classification ([`FailureKind`]), a message, an origin,
//! and a trace of [`StackFrame`]s whose arguments were erased to the closed
//! [`ArgValue`] variant at capture time. `lintel_report` consumes these
//! records to render diagnostic pages; hosts construct them at their
//! interception boundary.
//!
//! # Capture Boundary
//!
//! Conversion from live values to `ArgValue` happens where the host
//! intercepts the failure. Everything downstream of that boundary is pure
//! data: formatting a record can never touch the failed request again.
//!
//! ```text
//! let failure = Failure::http(404, "no such order")
//!     .with_location("src/orders.rs", 58)
//!     .with_frames(vec![
//!         StackFrame::at("src/orders.rs", 58)
//!             .with_method("OrderController", "show")
//!             .with_args(vec![ArgValue::int(9214)]),
//!     ]);
//! ```

mod args;
mod failure;
mod frame;
mod severity;

pub use args::{args_to_string, ArgKey, ArgValue, MAX_RENDERED_ARGS, MAX_TEXT_LEN};
pub use failure::{Failure, FailureKind};
pub use frame::{CallKind, StackFrame, UNKNOWN_FILE};
pub use severity::{FaultSeverity, ReportingLevel};
