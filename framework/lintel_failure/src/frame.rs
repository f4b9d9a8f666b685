//! Stack frames captured at failure time.

use std::fmt;

use crate::args::{args_to_string, ArgValue};

/// File sentinel for frames with no known source location.
pub const UNKNOWN_FILE: &str = "unknown";

/// How a function was invoked.
///
/// Decides the connector drawn between the enclosing type and the function
/// name in trace rows.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CallKind {
    /// Free function; no enclosing type, no connector.
    #[default]
    Function,
    /// Instance method, shown as `Type.name`.
    Method,
    /// Associated function, shown as `Type::name`.
    Associated,
}

impl CallKind {
    /// Connector between type and function name.
    pub fn connector(self) -> &'static str {
        match self {
            CallKind::Function => "",
            CallKind::Method => ".",
            CallKind::Associated => "::",
        }
    }
}

/// One call-site entry in a failure's trace.
///
/// Frames are ordered innermost first. A frame whose location could not be
/// resolved carries [`UNKNOWN_FILE`] and line 0.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StackFrame {
    /// Source file of the call site; [`UNKNOWN_FILE`] when unavailable.
    pub file: String,
    /// 1-based line number; 0 when unavailable.
    pub line: u32,
    /// Enclosing type name, if the call had one.
    pub type_name: Option<String>,
    /// Invocation style; selects the connector.
    pub call_kind: CallKind,
    /// Function name; absent for unattributed frames.
    pub function: Option<String>,
    /// Captured argument values in call order.
    pub args: Vec<ArgValue>,
}

impl StackFrame {
    /// Frame with no known location.
    pub fn unknown() -> Self {
        StackFrame {
            file: UNKNOWN_FILE.to_string(),
            ..StackFrame::default()
        }
    }

    /// Frame at `file:line` with no signature information yet.
    pub fn at(file: impl Into<String>, line: u32) -> Self {
        StackFrame {
            file: file.into(),
            line,
            ..StackFrame::default()
        }
    }

    /// Attach a free-function name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.call_kind = CallKind::Function;
        self.type_name = None;
        self.function = Some(function.into());
        self
    }

    /// Attach an instance-method signature (`Type.name`).
    #[must_use]
    pub fn with_method(mut self, type_name: impl Into<String>, function: impl Into<String>) -> Self {
        self.call_kind = CallKind::Method;
        self.type_name = Some(type_name.into());
        self.function = Some(function.into());
        self
    }

    /// Attach an associated-function signature (`Type::name`).
    #[must_use]
    pub fn with_associated(
        mut self,
        type_name: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        self.call_kind = CallKind::Associated;
        self.type_name = Some(type_name.into());
        self.function = Some(function.into());
        self
    }

    /// Attach captured argument values.
    #[must_use]
    pub fn with_args(mut self, args: Vec<ArgValue>) -> Self {
        self.args = args;
        self
    }

    /// Whether the frame has no usable source file.
    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE
    }

    /// The `Type{connector}function` part of the row, without arguments.
    ///
    /// `None` for unattributed frames.
    pub fn signature(&self) -> Option<String> {
        self.function.as_ref().map(|function| match &self.type_name {
            Some(type_name) => {
                format!("{type_name}{}{function}", self.call_kind.connector())
            }
            None => function.clone(),
        })
    }
}

impl fmt::Display for StackFrame {
    /// `file:line`, plus ` in signature(args)` when attributed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(signature) = self.signature() {
            write!(f, " in {signature}({})", args_to_string(&self.args))?;
        }
        Ok(())
    }
}
