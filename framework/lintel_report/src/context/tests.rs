use super::*;

use pretty_assertions::assert_eq;

#[test]
fn buffer_context_starts_as_clean_web_request() {
    let context = BufferContext::new();

    assert!(context.is_web());
    assert!(!context.headers_sent());
    assert!(!context.is_data_request());
    assert_eq!(context.buffer_depth(), 0);
    assert_eq!(context.status(), None);
    assert_eq!(context.body(), "");
}

#[test]
fn builders_shape_the_request() {
    let context = BufferContext::new()
        .non_web()
        .data_request()
        .headers_already_sent()
        .with_open_buffers(2);

    assert!(!context.is_web());
    assert!(context.is_data_request());
    assert!(context.headers_sent());
    assert_eq!(context.buffer_depth(), 2);
}

#[test]
fn unbuffered_writes_reach_the_body() {
    let mut context = BufferContext::new();

    context.write("hello ");
    context.write("world");

    assert_eq!(context.body(), "hello world");
}

#[test]
fn buffered_writes_stay_in_the_innermost_buffer() {
    let mut context = BufferContext::new().with_open_buffers(2);

    context.write("trapped");

    assert_eq!(context.body(), "");
}

#[test]
fn ending_a_buffer_discards_its_contents() {
    let mut context = BufferContext::new().with_open_buffers(1);

    context.write("should vanish");
    assert!(context.end_buffer());

    assert_eq!(context.buffer_depth(), 0);
    assert_eq!(context.body(), "");

    context.write("visible");
    assert_eq!(context.body(), "visible");
}

#[test]
fn ending_with_no_open_buffer_reports_failure() {
    let mut context = BufferContext::new();

    assert!(!context.end_buffer());
}

#[test]
fn send_status_records_the_line_and_marks_headers() {
    let mut context = BufferContext::new();

    context.send_status(404, "HttpFailure");

    assert_eq!(context.status(), Some((404, "HttpFailure")));
    assert!(context.headers_sent());
}

#[test]
fn console_context_is_not_a_web_context() {
    let mut context = ConsoleContext::new();

    assert!(!context.is_web());
    assert!(context.headers_sent());
    assert!(!context.is_data_request());
    assert_eq!(context.buffer_depth(), 0);
    assert!(!context.end_buffer());
}
