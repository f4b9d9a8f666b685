//! The reporter: one failure in, one rendered response out.

use std::path::PathBuf;

use lintel_failure::{Failure, FaultSeverity, StackFrame};

use crate::config::ReportConfig;
use crate::context::{HttpContext, RouteDispatcher};
use crate::errors::ReportError;
use crate::log::{FailureLog, TracingLog};
use crate::render::text::failure_text;
use crate::views::{ViewData, ViewRegistry, ViewRenderer};

/// Receives the failures an application's capture hooks produce.
///
/// Installation points (panic hooks, middleware catch layers) talk to the
/// reporter through this trait and never name the context or collaborator
/// types the concrete reporter carries.
pub trait FailureSink {
    /// Report `failure` and produce the whole error response.
    fn handle(&mut self, failure: Failure);

    /// Report a recoverable runtime fault as a failure.
    ///
    /// The faulting code does not resume: the fault becomes a full failure
    /// and goes through [`handle`](FailureSink::handle). Severity filtering
    /// with [`ReportingLevel`](lintel_failure::ReportingLevel) is the
    /// host's job, upstream of this call.
    fn handle_fault(
        &mut self,
        severity: FaultSeverity,
        message: &str,
        file: &str,
        line: u32,
        frames: Vec<StackFrame>,
    );
}

/// Renders uncaught failures into complete error responses.
///
/// The reporter is request-scoped and handles exactly one failure: the
/// first call to [`handle`](ErrorReporter::handle) runs the full pipeline
/// (log, unwind buffered output, render), and anything reported after
/// that, including failures raised by the render itself, degrades to
/// plain text written straight through. It is generic over its
/// [`HttpContext`] so tests and embedders choose the transport.
///
/// # Example
///
/// ```text
/// let mut reporter = ErrorReporter::new(true, ReportConfig::default(), BufferContext::new())
///     .with_core_root("/srv/app/vendor/lintel")
///     .with_log(TracingLog);
/// reporter.handle(Failure::http(404, "no such order"));
/// ```
pub struct ErrorReporter<C: HttpContext> {
    debug: bool,
    config: ReportConfig,
    context: C,
    views: Box<dyn ViewRenderer + Send>,
    log: Box<dyn FailureLog + Send>,
    dispatcher: Option<Box<dyn RouteDispatcher + Send>>,
    core_root: Option<PathBuf>,
    active: Option<Failure>,
    handling: bool,
}

impl<C: HttpContext> ErrorReporter<C> {
    /// Reporter with the built-in views and the `tracing` log sink.
    pub fn new(debug: bool, config: ReportConfig, context: C) -> Self {
        ErrorReporter {
            debug,
            config,
            context,
            views: Box::new(ViewRegistry::new()),
            log: Box::new(TracingLog),
            dispatcher: None,
            core_root: None,
            active: None,
            handling: false,
        }
    }

    /// Replace the view collaborator.
    #[must_use]
    pub fn with_views(mut self, views: impl ViewRenderer + Send + 'static) -> Self {
        self.views = Box::new(views);
        self
    }

    /// Replace the log sink.
    #[must_use]
    pub fn with_log(mut self, log: impl FailureLog + Send + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Install the dispatcher that runs the configured error route.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: impl RouteDispatcher + Send + 'static) -> Self {
        self.dispatcher = Some(Box::new(dispatcher));
        self
    }

    /// Set the framework source root used to collapse core trace frames.
    #[must_use]
    pub fn with_core_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.core_root = Some(root.into());
        self
    }

    /// The failure currently being handled.
    ///
    /// Set at capture, readable by the log and unwind steps, cleared once
    /// handling completes. Collaborators invoked during rendering receive
    /// the failure by argument instead.
    pub fn active(&self) -> Option<&Failure> {
        self.active.as_ref()
    }

    /// The transport context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Consume the reporter, returning the transport context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Report `failure` and produce the whole error response.
    ///
    /// First call per reporter: log the failure, discard buffered output
    /// (when configured), then render. A failed render falls back to the
    /// plain-text form of the render failure, never back into the full
    /// pipeline. Every later call writes the plain-text form directly.
    pub fn handle(&mut self, failure: Failure) {
        if self.handling {
            self.context.write(&failure_text(&failure, self.debug));
            return;
        }
        self.handling = true;
        tracing::debug!(kind = failure.kind.label(), "reporting failure");
        self.active = Some(failure);

        self.log_active();
        if self.config.discard_existing_output {
            self.discard_output();
        }

        // The record is taken back out for rendering and not put back:
        // handling completes with the slot cleared.
        let Some(failure) = self.active.take() else {
            return;
        };
        if let Err(error) = self.render_failure(&failure) {
            let fallback = Failure::uncaught("RenderFailure", error.to_string());
            self.context.write(&failure_text(&fallback, self.debug));
        }
    }

    /// Report a recoverable runtime fault as a failure.
    ///
    /// The fault's message, file, line, and frames are preserved verbatim
    /// and run the full pipeline. Severity filtering with
    /// [`ReportingLevel`](lintel_failure::ReportingLevel) happens in the
    /// host's fault hook, before this call.
    pub fn handle_fault(
        &mut self,
        severity: FaultSeverity,
        message: &str,
        file: &str,
        line: u32,
        frames: Vec<StackFrame>,
    ) {
        self.handle(Failure::from_fault(severity, message, file, line).with_frames(frames));
    }

    fn log_active(&self) {
        if let Some(failure) = &self.active {
            self.log
                .log_error(&failure.to_string(), &failure.log_category());
        }
    }

    /// Close every open output buffer, discarding contents. Best effort: a
    /// layer that refuses to close ends the unwind.
    fn discard_output(&mut self) {
        while self.context.buffer_depth() > 0 {
            if !self.context.end_buffer() {
                break;
            }
        }
    }

    fn render_failure(&mut self, failure: &Failure) -> Result<(), ReportError> {
        if !self.context.is_web() {
            self.context.write(&failure_text(failure, self.debug));
            return Ok(());
        }
        if let Some(route) = self.config.error_route.clone() {
            return self.dispatch_route(&route, failure);
        }
        if !self.context.headers_sent() {
            let status = failure.status().unwrap_or(500);
            self.context.send_status(status, failure.kind.label());
        }
        if self.context.is_data_request() {
            self.context.write(&failure_text(failure, self.debug));
            return Ok(());
        }
        self.render_html(failure)
    }

    fn dispatch_route(&mut self, route: &str, failure: &Failure) -> Result<(), ReportError> {
        match &mut self.dispatcher {
            Some(dispatcher) => {
                dispatcher.dispatch(route, failure);
                Ok(())
            }
            None => Err(ReportError::MissingDispatcher {
                route: route.to_string(),
            }),
        }
    }

    fn render_html(&mut self, failure: &Failure) -> Result<(), ReportError> {
        // HTTP failures always get the sanitized page; their message is
        // written for end users. Everything else gets the developer page
        // when debug output is on.
        let view = if self.debug && !failure.is_http() {
            self.config.exception_view.as_str()
        } else {
            self.config.error_view.as_str()
        };
        let data = ViewData {
            failure,
            debug: self.debug,
            config: &self.config,
            core_root: self.core_root.as_deref(),
        };
        let page = self
            .views
            .render_view(view, &data)
            .map_err(|source| ReportError::View {
                view: view.to_string(),
                source,
            })?;
        self.context.write(&page);
        Ok(())
    }
}

impl<C: HttpContext> FailureSink for ErrorReporter<C> {
    fn handle(&mut self, failure: Failure) {
        ErrorReporter::handle(self, failure);
    }

    fn handle_fault(
        &mut self,
        severity: FaultSeverity,
        message: &str,
        file: &str,
        line: u32,
        frames: Vec<StackFrame>,
    ) {
        ErrorReporter::handle_fault(self, severity, message, file, line, frames);
    }
}
