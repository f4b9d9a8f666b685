//! Source-code excerpts centered on a failing line.

use std::fmt::Write as _;
use std::fs;

use crate::render::escape_html;

/// Render up to `max_lines` of `file` around `error_line` as HTML.
///
/// Returns `None`, without reporting anything, when the file cannot be
/// read, `error_line` falls outside it, or excerpts are disabled with
/// `max_lines == 0`. An error page must never fail over a missing or
/// rotated source file.
///
/// Lines are HTML-escaped, tabs become four spaces, and every row gets a
/// line-number gutter sized to the last line shown. The failing line's row
/// is wrapped in a `span.error-line` marker.
pub fn source_excerpt(file: &str, error_line: u32, max_lines: u32) -> Option<String> {
    let contents = fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = contents.lines().collect();
    let line_count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
    let (begin, end) = excerpt_window(error_line, line_count, max_lines)?;

    let gutter = end.to_string().len();
    let mut output = String::from("<div class=\"source\"><pre>");
    for number in begin..=end {
        let text = lines[(number - 1) as usize].replace('\t', "    ");
        let row = format!("{number:>gutter$}  {}", escape_html(&text));
        if number == error_line {
            let _ = writeln!(output, "<span class=\"error-line\">{row}</span>");
        } else {
            let _ = writeln!(output, "{row}");
        }
    }
    output.push_str("</pre></div>");
    Some(output)
}

/// The 1-based inclusive line range an excerpt covers.
///
/// The window extends `half - 1` lines to each side of the failing line,
/// where `half` is half of `max_lines` and at least 1, then clamps to the
/// file. `None` when the failing line is unknown (0), beyond the file, or
/// excerpts are disabled.
fn excerpt_window(error_line: u32, line_count: u32, max_lines: u32) -> Option<(u32, u32)> {
    if max_lines == 0 || error_line == 0 || error_line > line_count {
        return None;
    }
    let half = (max_lines / 2).max(1);
    let begin = error_line.saturating_sub(half - 1).max(1);
    let end = (error_line + half - 1).min(line_count);
    Some((begin, end))
}
