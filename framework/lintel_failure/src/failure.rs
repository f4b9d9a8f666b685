//! The unified failure record.

use std::fmt;

use crate::frame::{StackFrame, UNKNOWN_FILE};
use crate::severity::FaultSeverity;

/// Classification of a captured failure.
///
/// Drives view selection, the response status line, and the log category.
#[derive(Clone, Debug, PartialEq)]
pub enum FailureKind {
    /// Failure mapped to an HTTP response status.
    Http(u16),
    /// Recoverable runtime fault elevated to a failure.
    Fault(FaultSeverity),
    /// Any other uncaught failure, labeled with its error type name.
    Uncaught(String),
}

impl FailureKind {
    /// Short label used in page titles, status reasons, and log categories.
    pub fn label(&self) -> &str {
        match self {
            FailureKind::Http(_) => "HttpFailure",
            FailureKind::Fault(_) => "RuntimeFault",
            FailureKind::Uncaught(label) => label,
        }
    }
}

/// An unhandled error or exception being reported.
///
/// Exactly one `Failure` is in flight per handled request: the reporter
/// stores it at capture time and clears it when handling completes. The
/// `Display` form is the full developer representation (message plus
/// numbered trace); sanitized production output is the renderer's job.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    /// Classification.
    pub kind: FailureKind,
    /// Human-readable description.
    pub message: String,
    /// Originating source file; [`UNKNOWN_FILE`] when unavailable.
    pub file: String,
    /// 1-based line number; 0 when unavailable.
    pub line: u32,
    /// Call stack, innermost first.
    pub frames: Vec<StackFrame>,
}

impl Failure {
    /// Generic uncaught failure labeled with its error type name.
    #[cold]
    pub fn uncaught(label: impl Into<String>, message: impl Into<String>) -> Self {
        Failure {
            kind: FailureKind::Uncaught(label.into()),
            message: message.into(),
            file: UNKNOWN_FILE.to_string(),
            line: 0,
            frames: Vec::new(),
        }
    }

    /// HTTP-classified failure carrying a response status.
    #[cold]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Failure {
            kind: FailureKind::Http(status),
            message: message.into(),
            file: UNKNOWN_FILE.to_string(),
            line: 0,
            frames: Vec::new(),
        }
    }

    /// Elevate a recoverable runtime fault, preserving its origin verbatim.
    #[cold]
    pub fn from_fault(
        severity: FaultSeverity,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Failure {
            kind: FailureKind::Fault(severity),
            message: message.into(),
            file: file.into(),
            line,
            frames: Vec::new(),
        }
    }

    /// Set the originating file and line.
    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// Attach the call stack, innermost first.
    #[must_use]
    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// The HTTP status this failure carries, if any.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Http(status) => Some(status),
            _ => None,
        }
    }

    /// The fault severity, for converted runtime faults.
    pub fn severity(&self) -> Option<FaultSeverity> {
        match self.kind {
            FailureKind::Fault(severity) => Some(severity),
            _ => None,
        }
    }

    /// Whether this failure is HTTP-classified.
    pub fn is_http(&self) -> bool {
        matches!(self.kind, FailureKind::Http(_))
    }

    /// Category string for the log entry.
    ///
    /// The kind label, with the HTTP status or fault severity appended:
    /// `HttpFailure.404`, `RuntimeFault.warning`, or the bare label.
    pub fn log_category(&self) -> String {
        match &self.kind {
            FailureKind::Http(status) => format!("{}.{status}", self.kind.label()),
            FailureKind::Fault(severity) => format!("{}.{severity}", self.kind.label()),
            FailureKind::Uncaught(label) => label.clone(),
        }
    }
}

impl fmt::Display for Failure {
    /// Full developer representation: header line plus numbered trace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} in {}:{}",
            self.kind.label(),
            self.message,
            self.file,
            self.line
        )?;
        if !self.frames.is_empty() {
            write!(f, "\nStack trace:")?;
            for (index, frame) in self.frames.iter().enumerate() {
                write!(f, "\n#{index} {frame}")?;
            }
        }
        Ok(())
    }
}
