//! Captured call arguments and their display form.
//!
//! Live argument values are erased to the closed [`ArgValue`] variant at
//! the capture boundary; [`args_to_string`] is a pure recursive formatter
//! over the result. The abbreviation rules keep trace rows readable: at
//! most [`MAX_RENDERED_ARGS`] arguments per call and [`MAX_TEXT_LEN`]
//! characters per string survive formatting.

/// Number of arguments rendered individually per call.
///
/// The next argument becomes a bare `...`; anything after that is dropped.
pub const MAX_RENDERED_ARGS: usize = 4;

/// Characters of a string argument kept before truncation.
pub const MAX_TEXT_LEN: usize = 64;

/// A captured argument value with its original type erased.
///
/// Construct scalars through the variants directly (`ArgValue::Bool(true)`,
/// `ArgValue::Null`) and everything else through the factory methods.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Sequential list.
    List(Vec<ArgValue>),
    /// Keyed collection; entry order preserved from capture.
    Map(Vec<(ArgKey, ArgValue)>),
    /// Object reference; only the type name survives capture.
    Object(String),
    /// Opaque handle (file, socket, and the like).
    Handle,
}

/// Key of an [`ArgValue::Map`] entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgKey {
    /// Integer key.
    Int(i64),
    /// String key; quoted when displayed.
    Text(String),
}

impl ArgValue {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        ArgValue::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(x: f64) -> Self {
        ArgValue::Float(x)
    }

    /// Create a text value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = ArgValue::text("checkout");
    /// let s2 = ArgValue::text(format!("order {id}"));
    /// ```
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        ArgValue::Text(s.into())
    }

    /// Create a sequential list value.
    #[inline]
    pub fn list(items: Vec<ArgValue>) -> Self {
        ArgValue::List(items)
    }

    /// Create a keyed collection value.
    ///
    /// # Example
    ///
    /// ```text
    /// let m = ArgValue::map(vec![
    ///     (ArgKey::Text("id".into()), ArgValue::int(7)),
    /// ]);
    /// ```
    #[inline]
    pub fn map(entries: Vec<(ArgKey, ArgValue)>) -> Self {
        ArgValue::Map(entries)
    }

    /// Create an object reference carrying only the type name.
    #[inline]
    pub fn object(type_name: impl Into<String>) -> Self {
        ArgValue::Object(type_name.into())
    }
}

/// Format a call's argument list for display.
///
/// The first [`MAX_RENDERED_ARGS`] arguments are rendered individually,
/// the one after them is abbreviated to `...`, and any beyond that are
/// dropped. Entries are joined with `, `. Pure string formatting: no I/O,
/// no lookups, cannot fail.
pub fn args_to_string(args: &[ArgValue]) -> String {
    let mut parts = Vec::with_capacity(args.len().min(MAX_RENDERED_ARGS + 1));
    for (index, arg) in args.iter().enumerate() {
        if index == MAX_RENDERED_ARGS {
            parts.push("...".to_string());
            break;
        }
        parts.push(format_value(arg));
    }
    parts.join(", ")
}

/// Format one value.
fn format_value(value: &ArgValue) -> String {
    match value {
        ArgValue::Null => "null".to_string(),
        ArgValue::Bool(true) => "true".to_string(),
        ArgValue::Bool(false) => "false".to_string(),
        ArgValue::Int(n) => n.to_string(),
        ArgValue::Float(x) => x.to_string(),
        ArgValue::Text(s) => format_text(s),
        ArgValue::List(items) => format!("array({})", args_to_string(items)),
        ArgValue::Map(entries) => format!("array({})", entries_to_string(entries)),
        ArgValue::Object(type_name) => type_name.clone(),
        ArgValue::Handle => "resource".to_string(),
    }
}

/// Quote a string value, truncating past [`MAX_TEXT_LEN`] characters.
fn format_text(s: &str) -> String {
    // Truncation counts characters, not bytes.
    match s.char_indices().nth(MAX_TEXT_LEN) {
        Some((byte_end, _)) => format!("\"{}...\"", &s[..byte_end]),
        None => format!("\"{s}\""),
    }
}

/// Format keyed entries, applying the same truncation rule as positional
/// lists. String keys are quoted; every entry gets a `key => ` prefix.
fn entries_to_string(entries: &[(ArgKey, ArgValue)]) -> String {
    let mut parts = Vec::with_capacity(entries.len().min(MAX_RENDERED_ARGS + 1));
    for (index, (key, value)) in entries.iter().enumerate() {
        if index == MAX_RENDERED_ARGS {
            parts.push("...".to_string());
            break;
        }
        let key = match key {
            ArgKey::Int(n) => n.to_string(),
            ArgKey::Text(s) => format!("\"{s}\""),
        };
        parts.push(format!("{key} => {}", format_value(value)));
    }
    parts.join(", ")
}
