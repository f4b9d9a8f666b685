//! The request/response boundary the reporter writes through.
//!
//! The reporter never talks to a concrete HTTP server. Everything it needs
//! from the transport funnels through [`HttpContext`]: execution-mode and
//! request-shape signals, the status line, the output-buffer stack, and
//! body writes. Two implementations ship here; real servers provide their
//! own.

use lintel_failure::Failure;

/// Request/response signals and the output channel for one request.
///
/// `is_data_request` is the pluggable predicate for "client wants plain
/// data, not a page"; implementations pick their own convention (a header
/// marker, content negotiation, anything).
pub trait HttpContext {
    /// Whether execution is inside an interactive web-serving context.
    fn is_web(&self) -> bool;

    /// Whether response headers are already on the wire.
    fn headers_sent(&self) -> bool;

    /// Whether the client expects a data-only response (no HTML page).
    fn is_data_request(&self) -> bool;

    /// Emit the response status line.
    fn send_status(&mut self, status: u16, reason: &str);

    /// Number of output-buffer layers currently open.
    fn buffer_depth(&self) -> usize;

    /// Close and discard the innermost buffer layer.
    ///
    /// Returns `false` when the layer refused to close; the caller stops
    /// unwinding at that point (best effort).
    fn end_buffer(&mut self) -> bool;

    /// Append a chunk to the response body.
    fn write(&mut self, chunk: &str);
}

/// Dispatches the operator-configured override route.
///
/// When `ReportConfig::error_route` is set, the reporter hands the failure
/// to this collaborator, which is then fully responsible for the response;
/// the reporter's involvement ends at the invocation.
pub trait RouteDispatcher {
    /// Run `route` to produce the whole error response.
    fn dispatch(&mut self, route: &str, failure: &Failure);
}

/// Context for command-line execution: not a web context, body goes to
/// stdout, everything else is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleContext;

impl ConsoleContext {
    /// Create a console context.
    pub fn new() -> Self {
        ConsoleContext
    }
}

impl HttpContext for ConsoleContext {
    fn is_web(&self) -> bool {
        false
    }

    fn headers_sent(&self) -> bool {
        true
    }

    fn is_data_request(&self) -> bool {
        false
    }

    fn send_status(&mut self, _status: u16, _reason: &str) {
        // No status line on a terminal
    }

    fn buffer_depth(&self) -> usize {
        0
    }

    fn end_buffer(&mut self) -> bool {
        false
    }

    fn write(&mut self, chunk: &str) {
        print!("{chunk}");
    }
}

/// Fully in-memory context that records everything written to it.
///
/// The double used throughout the reporter's own tests; embedders' tests
/// can use it the same way. Starts as a web context with no headers sent
/// and no open buffers; the builder methods shape it from there.
#[derive(Debug)]
pub struct BufferContext {
    web: bool,
    headers_sent: bool,
    data_request: bool,
    buffers: Vec<String>,
    status: Option<(u16, String)>,
    body: String,
}

impl BufferContext {
    /// Create a web-context double.
    pub fn new() -> Self {
        BufferContext {
            web: true,
            headers_sent: false,
            data_request: false,
            buffers: Vec::new(),
            status: None,
            body: String::new(),
        }
    }

    /// Pretend execution is outside any web-serving context.
    #[must_use]
    pub fn non_web(mut self) -> Self {
        self.web = false;
        self
    }

    /// Mark the request as expecting a data-only response.
    #[must_use]
    pub fn data_request(mut self) -> Self {
        self.data_request = true;
        self
    }

    /// Pretend headers already went out.
    #[must_use]
    pub fn headers_already_sent(mut self) -> Self {
        self.headers_sent = true;
        self
    }

    /// Open `n` nested output buffers.
    #[must_use]
    pub fn with_open_buffers(mut self, n: usize) -> Self {
        self.buffers = vec![String::new(); n];
        self
    }

    /// The recorded status line, if one was sent.
    pub fn status(&self) -> Option<(u16, &str)> {
        self.status
            .as_ref()
            .map(|(status, reason)| (*status, reason.as_str()))
    }

    /// The response body written so far (excluding open buffers).
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Default for BufferContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpContext for BufferContext {
    fn is_web(&self) -> bool {
        self.web
    }

    fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    fn is_data_request(&self) -> bool {
        self.data_request
    }

    fn send_status(&mut self, status: u16, reason: &str) {
        self.status = Some((status, reason.to_string()));
        self.headers_sent = true;
    }

    fn buffer_depth(&self) -> usize {
        self.buffers.len()
    }

    fn end_buffer(&mut self) -> bool {
        self.buffers.pop().is_some()
    }

    fn write(&mut self, chunk: &str) {
        // Writes land in the innermost open buffer, like real output
        // buffering; only unbuffered writes reach the body.
        match self.buffers.last_mut() {
            Some(buffer) => buffer.push_str(chunk),
            None => self.body.push_str(chunk),
        }
    }
}

#[cfg(test)]
mod tests;
