//! Error and exception pages.
//!
//! Two views ship with the reporter. The `exception` view is the developer
//! page: full failure details, a source excerpt around the failing line,
//! and the collapsible trace. The `error` view is the production page and
//! shows the kind label and message, nothing else. Applications swap
//! either page out by registering an override under the same name, or
//! plug in a whole different [`ViewRenderer`].

use std::fmt;
use std::fmt::Write as _;
use std::path::Path;

use rustc_hash::FxHashMap;

use lintel_failure::Failure;

use crate::config::ReportConfig;
use crate::errors::ViewError;
use crate::render::escape_html;
use crate::render::source::source_excerpt;
use crate::render::trace::{render_trace, TraceOptions};

/// Everything a view may draw from, bundled per render call.
#[derive(Clone, Copy, Debug)]
pub struct ViewData<'a> {
    /// The failure being rendered.
    pub failure: &'a Failure,
    /// Whether the application runs with debug output enabled.
    pub debug: bool,
    /// Rendering options in effect.
    pub config: &'a ReportConfig,
    /// Root of the framework's source tree, for trace collapsing.
    pub core_root: Option<&'a Path>,
}

/// Renders a named view into a page body.
pub trait ViewRenderer {
    /// Produce the full response body for `view`.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] when the view is unknown or its template
    /// fails; the reporter then falls back to plain text.
    fn render_view(&mut self, view: &str, data: &ViewData<'_>) -> Result<String, ViewError>;
}

type ViewFn = Box<dyn Fn(&ViewData<'_>) -> String + Send + Sync>;

/// The shipped [`ViewRenderer`]: built-in pages plus an override map.
///
/// Overrides win over built-ins, so registering `"error"` replaces the
/// production page while the developer page keeps working.
#[derive(Default)]
pub struct ViewRegistry {
    overrides: FxHashMap<String, ViewFn>,
}

impl ViewRegistry {
    /// Registry with only the built-in pages.
    pub fn new() -> Self {
        ViewRegistry::default()
    }

    /// Register `render` as the implementation of `view`.
    ///
    /// Replaces any earlier registration under the same name.
    pub fn register(
        &mut self,
        view: impl Into<String>,
        render: impl Fn(&ViewData<'_>) -> String + Send + Sync + 'static,
    ) {
        self.overrides.insert(view.into(), Box::new(render));
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ViewRegistry")
            .field("overrides", &names)
            .finish()
    }
}

impl ViewRenderer for ViewRegistry {
    fn render_view(&mut self, view: &str, data: &ViewData<'_>) -> Result<String, ViewError> {
        if let Some(render) = self.overrides.get(view) {
            return Ok(render(data));
        }
        match view {
            "exception" => Ok(exception_page(data)),
            "error" => Ok(error_page(data)),
            _ => Err(ViewError::unknown_view(view)),
        }
    }
}

const PAGE_STYLE: &str = "\
body { margin: 2em; color: #222; font: 14px/1.5 sans-serif; }
h1 { margin-bottom: 0.2em; color: #a33; }
p.message { font-size: 1.2em; }
p.location { color: #666; }
div.source pre { padding: 0.5em; background: #fdf3f3; overflow-x: auto; }
span.error-line { background: #f6c9c9; }
table.trace { width: 100%; border-collapse: collapse; }
table.trace td { padding: 0.3em 0.5em; border-top: 1px solid #e5e5e5; vertical-align: top; }
table.trace td.number { width: 3em; color: #999; }
tr.collapsed div.call { color: #888; }
tr.collapsed div.source { display: none; }
";

fn page_shell(title: &str, body: &str) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{title}</title>");
    page.push_str("<style>\n");
    page.push_str(PAGE_STYLE);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

/// The sanitized production page: kind label and message only.
fn error_page(data: &ViewData<'_>) -> String {
    let label = escape_html(data.failure.kind.label());
    let message = escape_html(&data.failure.message);

    let mut body = String::from("<div class=\"error-page\">\n");
    let _ = writeln!(body, "<h1>{label}</h1>");
    let _ = writeln!(body, "<p class=\"message\">{message}</p>");
    body.push_str("</div>\n");

    page_shell(&label, &body)
}

/// The developer page: location, source excerpt, and trace.
fn exception_page(data: &ViewData<'_>) -> String {
    let failure = data.failure;
    let label = escape_html(failure.kind.label());
    let message = escape_html(&failure.message);

    let mut body = String::from("<div class=\"exception-page\">\n");
    let _ = writeln!(body, "<h1>{label}</h1>");
    let _ = writeln!(body, "<p class=\"message\">{message}</p>");
    let _ = writeln!(
        body,
        "<p class=\"location\">{}:{}</p>",
        escape_html(&failure.file),
        failure.line
    );
    if let Some(excerpt) =
        source_excerpt(&failure.file, failure.line, data.config.max_source_lines)
    {
        body.push_str(&excerpt);
        body.push('\n');
    }
    if !failure.frames.is_empty() {
        body.push_str("<h2>Stack Trace</h2>\n");
        let options = TraceOptions {
            core_root: data.core_root,
            max_source_lines: data.config.max_trace_source_lines,
        };
        body.push_str(&render_trace(&failure.frames, &options));
        body.push('\n');
    }
    body.push_str("</div>\n");

    page_shell(&format!("{label}: {message}"), &body)
}
