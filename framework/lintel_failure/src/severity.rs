//! Fault severities and the host's reporting-level mask.

use std::fmt;

use bitflags::bitflags;

/// Severity of a recoverable runtime fault.
///
/// Faults at these levels do not abort execution on their own. The host
/// elevates them into failures (via `Failure::from_fault`) when the active
/// [`ReportingLevel`] covers them; anything outside the mask never reaches
/// the reporter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FaultSeverity {
    /// Recoverable problem that likely indicates a bug.
    Warning,
    /// Minor problem; execution can continue safely.
    Notice,
    /// Use of functionality scheduled for removal.
    Deprecation,
    /// Violation of strict interoperability rules.
    Strict,
}

impl FaultSeverity {
    /// Lowercase name, as it appears in log categories.
    pub fn name(self) -> &'static str {
        match self {
            FaultSeverity::Warning => "warning",
            FaultSeverity::Notice => "notice",
            FaultSeverity::Deprecation => "deprecation",
            FaultSeverity::Strict => "strict",
        }
    }
}

impl fmt::Display for FaultSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

bitflags! {
    /// Mask of fault severities elevated to failures.
    ///
    /// The filter runs where faults enter the pipeline: a fault whose
    /// severity is outside the mask is dropped before it ever becomes a
    /// failure, so it is neither logged nor rendered.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ReportingLevel: u32 {
        /// Report warnings.
        const WARNING = 1 << 0;
        /// Report notices.
        const NOTICE = 1 << 1;
        /// Report deprecations.
        const DEPRECATION = 1 << 2;
        /// Report strict-mode violations.
        const STRICT = 1 << 3;
    }
}

impl ReportingLevel {
    /// Whether faults of `severity` are reported under this mask.
    pub fn covers(self, severity: FaultSeverity) -> bool {
        self.contains(match severity {
            FaultSeverity::Warning => ReportingLevel::WARNING,
            FaultSeverity::Notice => ReportingLevel::NOTICE,
            FaultSeverity::Deprecation => ReportingLevel::DEPRECATION,
            FaultSeverity::Strict => ReportingLevel::STRICT,
        })
    }
}

impl Default for ReportingLevel {
    /// Report everything; operators narrow this in production.
    fn default() -> Self {
        ReportingLevel::all()
    }
}

#[cfg(test)]
mod tests;
