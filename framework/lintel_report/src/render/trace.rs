//! Call-stack markup for the detailed exception view.
//!
//! Application frames carry the signal, so only the first few of them
//! start expanded; everything else, including every frame inside the
//! framework's own tree, starts collapsed. Collapsing is presentation
//! only: every row keeps its full content in the markup, excerpt
//! included, and the row class tells the stylesheet which rows start
//! revealed.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use lintel_failure::{args_to_string, StackFrame};

use crate::render::escape_html;
use crate::render::source::source_excerpt;

/// Number of leading application frames whose rows start expanded.
pub const EXPANDED_FRAMES: usize = 3;

/// Knobs for [`render_trace`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceOptions<'a> {
    /// Root of the framework's own source tree. Frames under it count as
    /// core code; with no root, nothing does.
    pub core_root: Option<&'a Path>,
    /// Height of the per-frame source excerpt; 0 disables excerpts.
    pub max_source_lines: u32,
}

/// Whether `frame` points into the framework's own code.
///
/// Frames with no usable location count as core so they collapse instead
/// of wasting an expanded slot. Paths are canonicalized for the comparison
/// where the filesystem cooperates; otherwise the raw paths stand in.
pub fn is_core_code(frame: &StackFrame, core_root: Option<&Path>) -> bool {
    if frame.is_unknown() {
        return true;
    }
    let Some(root) = core_root else {
        return false;
    };
    canonical(Path::new(&frame.file)).starts_with(canonical(root))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Render `frames` as the rows of an HTML trace table.
///
/// Frames stay in capture order (innermost first). The first
/// [`EXPANDED_FRAMES`] application frames get the `expanded` row class;
/// later application frames and all core frames get `collapsed`. Every
/// row whose file is readable embeds its source excerpt either way, so a
/// collapsed row can be toggled open without another lookup.
pub fn render_trace(frames: &[StackFrame], options: &TraceOptions<'_>) -> String {
    let mut output = String::from("<table class=\"trace\">\n");
    let mut expanded_left = EXPANDED_FRAMES;
    for (index, frame) in frames.iter().enumerate() {
        let expanded = !is_core_code(frame, options.core_root) && expanded_left > 0;
        if expanded {
            expanded_left -= 1;
        }
        render_frame(&mut output, index, frame, expanded, options);
    }
    output.push_str("</table>");
    output
}

fn render_frame(
    output: &mut String,
    index: usize,
    frame: &StackFrame,
    expanded: bool,
    options: &TraceOptions<'_>,
) {
    let class = if expanded { "expanded" } else { "collapsed" };
    let _ = writeln!(
        output,
        "<tr class=\"trace-frame {class}\"><td class=\"number\">#{index}</td><td class=\"content\">"
    );
    let _ = write!(
        output,
        "<div class=\"call\">{}:{}",
        escape_html(&frame.file),
        frame.line
    );
    if let Some(signature) = frame.signature() {
        let _ = write!(
            output,
            " in {}({})",
            escape_html(&signature),
            escape_html(&args_to_string(&frame.args))
        );
    }
    output.push_str("</div>\n");
    // The row class alone decides what starts visible; collapsed rows
    // keep their excerpt for toggling.
    if let Some(excerpt) = source_excerpt(&frame.file, frame.line, options.max_source_lines) {
        output.push_str(&excerpt);
        output.push('\n');
    }
    output.push_str("</td></tr>\n");
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
