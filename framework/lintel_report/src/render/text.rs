//! Plain-text failure output.

use lintel_failure::Failure;

/// Render `failure` as plain text.
///
/// With `debug` set this is the full developer form: kind, message,
/// origin, and the numbered trace. Without it the output is exactly
/// `kind: message`, so file paths and line numbers never reach a
/// production response through the text path. Building the string cannot
/// fail; this is the renderer of last resort.
pub fn failure_text(failure: &Failure, debug: bool) -> String {
    if debug {
        failure.to_string()
    } else {
        format!("{}: {}", failure.kind.label(), failure.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lintel_failure::StackFrame;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_text_is_the_full_display_form() {
        let failure = Failure::uncaught("DbError", "connection refused")
            .with_location("app/db.rs", 40)
            .with_frames(vec![StackFrame::at("app/main.rs", 7)]);

        assert_eq!(
            failure_text(&failure, true),
            "DbError: connection refused in app/db.rs:40\n\
             Stack trace:\n\
             #0 app/main.rs:7"
        );
    }

    #[test]
    fn production_text_carries_no_location() {
        let failure = Failure::uncaught("DbError", "connection refused")
            .with_location("app/db.rs", 40)
            .with_frames(vec![StackFrame::at("app/main.rs", 7)]);

        let text = failure_text(&failure, false);

        assert_eq!(text, "DbError: connection refused");
        assert!(!text.contains("app/db.rs"));
    }

    #[test]
    fn production_text_for_http_failures_uses_the_kind_label() {
        let failure = Failure::http(404, "no such page");

        assert_eq!(failure_text(&failure, false), "HttpFailure: no such page");
    }
}
