//! Process-wide panic capture.
//!
//! Panics are the one failure class that bypasses a request's normal flow,
//! so reporting them takes a process-global hook. The hook holds a shared
//! handle to one [`FailureSink`]; a panic raised anywhere becomes an
//! uncaught failure with the panic message and location and goes through
//! the sink's full pipeline. A panic raised while the sink itself is busy
//! (a view that panics mid-render) is left to the runtime rather than
//! re-entering the reporter.
//!
//! # Example
//!
//! ```text
//! let sink = panic_hook::share(reporter);
//! panic_hook::install(&sink);
//! ```

use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use parking_lot::Mutex;

use lintel_failure::Failure;

use crate::reporter::FailureSink;

/// Shared handle to the sink the panic hook reports into.
pub type SharedSink = Arc<Mutex<Box<dyn FailureSink + Send>>>;

static SINK: Mutex<Option<SharedSink>> = Mutex::new(None);

/// Wrap `sink` in the shared handle the hook requires.
///
/// The caller keeps one handle for its own use (inspecting the reporter
/// after a panic) and passes the other to [`install`].
pub fn share(sink: impl FailureSink + Send + 'static) -> SharedSink {
    Arc::new(Mutex::new(Box::new(sink)))
}

/// Route panics into `sink`.
///
/// Replaces any previously installed panic hook, including an earlier call
/// to `install`.
pub fn install(sink: &SharedSink) {
    *SINK.lock() = Some(Arc::clone(sink));
    panic::set_hook(Box::new(report_panic));
}

/// Stop routing panics and restore the default hook.
pub fn uninstall() {
    *SINK.lock() = None;
    let _ = panic::take_hook();
}

/// Build the failure a panic reports as.
///
/// The message is the panic payload when it is a string, and the location
/// is the panic site. Panics carry no captured call stack; the trace stays
/// empty.
pub fn panic_failure(info: &PanicHookInfo<'_>) -> Failure {
    let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    };
    let failure = Failure::uncaught("Panic", message);
    match info.location() {
        Some(location) => failure.with_location(location.file(), location.line()),
        None => failure,
    }
}

fn report_panic(info: &PanicHookInfo<'_>) {
    // try_lock on both levels: if this panic came out of the sink itself,
    // the locks are held and reporting again would deadlock.
    let Some(guard) = SINK.try_lock() else {
        return;
    };
    let Some(sink) = (*guard).clone() else {
        return;
    };
    drop(guard);
    let Some(mut sink) = sink.try_lock() else {
        return;
    };
    sink.handle(panic_failure(info));
}
