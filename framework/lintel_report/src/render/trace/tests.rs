use super::*;

use std::fs;
use std::io::Write as _;

use lintel_failure::ArgValue;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, NamedTempFile};

fn row_classes(html: &str) -> Vec<String> {
    html.match_indices("class=\"trace-frame ")
        .map(|(start, marker)| {
            let rest = &html[start + marker.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn unknown_frames_count_as_core() {
    assert!(is_core_code(&StackFrame::unknown(), None));
    assert!(is_core_code(
        &StackFrame::unknown(),
        Some(Path::new("/srv/framework"))
    ));
}

#[test]
fn located_frames_are_application_code_without_a_root() {
    let frame = StackFrame::at("app/main.rs", 3);

    assert!(!is_core_code(&frame, None));
}

#[test]
fn frames_are_core_exactly_when_under_the_root() {
    let core = tempdir().unwrap();
    let app = tempdir().unwrap();
    let core_file = core.path().join("dispatch.rs");
    let app_file = app.path().join("main.rs");
    fs::write(&core_file, "core").unwrap();
    fs::write(&app_file, "app").unwrap();

    let core_frame = StackFrame::at(core_file.to_str().unwrap(), 1);
    let app_frame = StackFrame::at(app_file.to_str().unwrap(), 1);

    assert!(is_core_code(&core_frame, Some(core.path())));
    assert!(!is_core_code(&app_frame, Some(core.path())));
}

#[test]
fn first_three_application_frames_expand() {
    let frames: Vec<StackFrame> = (1..=5)
        .map(|n| StackFrame::at(format!("app/handler_{n}.rs"), n))
        .collect();

    let html = render_trace(&frames, &TraceOptions::default());

    assert_eq!(
        row_classes(&html),
        vec!["expanded", "expanded", "expanded", "collapsed", "collapsed"]
    );
}

#[test]
fn core_frames_collapse_without_consuming_expanded_slots() {
    let core = tempdir().unwrap();
    let core_file = core.path().join("router.rs");
    fs::write(&core_file, "core").unwrap();
    let core_path = core_file.to_str().unwrap();

    let frames = vec![
        StackFrame::at(core_path, 12),
        StackFrame::at("app/one.rs", 1),
        StackFrame::at(core_path, 34),
        StackFrame::at("app/two.rs", 2),
        StackFrame::at("app/three.rs", 3),
        StackFrame::at("app/four.rs", 4),
    ];
    let options = TraceOptions {
        core_root: Some(core.path()),
        max_source_lines: 0,
    };

    let html = render_trace(&frames, &options);

    assert_eq!(
        row_classes(&html),
        vec![
            "collapsed",
            "expanded",
            "collapsed",
            "expanded",
            "expanded",
            "collapsed"
        ]
    );
}

#[test]
fn rows_show_location_signature_and_args() {
    let frames = vec![StackFrame::at("app/user.rs", 10)
        .with_method("Repo<User>", "find")
        .with_args(vec![ArgValue::int(7), ArgValue::text("active")])];

    let html = render_trace(&frames, &TraceOptions::default());

    assert!(html.contains("#0"));
    assert!(html.contains("app/user.rs:10 in Repo&lt;User&gt;.find(7, &quot;active&quot;)"));
}

#[test]
fn collapsed_rows_keep_their_source_excerpts() {
    let mut file = NamedTempFile::new().unwrap();
    for line in ["fn a() {}", "fn b() { panic!() }", "fn c() {}"] {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();

    let frames = vec![
        StackFrame::at(path, 2),
        StackFrame::at(path, 1),
        StackFrame::at(path, 3),
        StackFrame::at(path, 2),
    ];
    let options = TraceOptions {
        core_root: None,
        max_source_lines: 5,
    };

    let html = render_trace(&frames, &options);

    // The fourth frame starts collapsed but its file is readable, so its
    // row carries an excerpt like the other three.
    assert_eq!(
        row_classes(&html),
        vec!["expanded", "expanded", "expanded", "collapsed"]
    );
    assert_eq!(html.matches("<div class=\"source\">").count(), 4);
    assert!(html.contains("<span class=\"error-line\">2  fn b() { panic!() }</span>"));
}

#[test]
fn missing_source_files_leave_expanded_rows_without_excerpts() {
    let frames = vec![StackFrame::at("app/vanished.rs", 8)];

    let html = render_trace(
        &frames,
        &TraceOptions {
            core_root: None,
            max_source_lines: 10,
        },
    );

    assert_eq!(row_classes(&html), vec!["expanded"]);
    assert!(!html.contains("<div class=\"source\">"));
}
