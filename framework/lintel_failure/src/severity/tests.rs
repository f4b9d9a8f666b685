use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_severity_names() {
    assert_eq!(FaultSeverity::Warning.name(), "warning");
    assert_eq!(FaultSeverity::Notice.name(), "notice");
    assert_eq!(FaultSeverity::Deprecation.name(), "deprecation");
    assert_eq!(FaultSeverity::Strict.name(), "strict");
}

#[test]
fn test_severity_display_matches_name() {
    assert_eq!(FaultSeverity::Warning.to_string(), "warning");
    assert_eq!(FaultSeverity::Deprecation.to_string(), "deprecation");
}

#[test]
fn test_reporting_level_covers() {
    let level = ReportingLevel::WARNING | ReportingLevel::NOTICE;
    assert!(level.covers(FaultSeverity::Warning));
    assert!(level.covers(FaultSeverity::Notice));
    assert!(!level.covers(FaultSeverity::Deprecation));
    assert!(!level.covers(FaultSeverity::Strict));
}

#[test]
fn test_reporting_level_default_covers_everything() {
    let level = ReportingLevel::default();
    assert!(level.covers(FaultSeverity::Warning));
    assert!(level.covers(FaultSeverity::Notice));
    assert!(level.covers(FaultSeverity::Deprecation));
    assert!(level.covers(FaultSeverity::Strict));
}

#[test]
fn test_reporting_level_empty_covers_nothing() {
    let level = ReportingLevel::empty();
    assert!(!level.covers(FaultSeverity::Warning));
    assert!(!level.covers(FaultSeverity::Strict));
}
