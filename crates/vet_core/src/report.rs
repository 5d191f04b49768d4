//! Rule taxonomy, violations, and failure reporters.
//!
//! There is exactly one error taxonomy in this crate: "validation rule
//! violated". A [`Violation`] carries the rule family that fired and the
//! fully rendered message; it is handed to a [`FailureReporter`] and never
//! returned to the caller as a value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rule family a violation belongs to.
///
/// One discriminant per failure-message template, not per checker method:
/// the string and sequence emptiness checks share [`Rule::Empty`], and all
/// equality/ordering mismatches share [`Rule::Mismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// A required reference is missing.
    Unassigned,
    /// A string or sequence that must have content is empty.
    Empty,
    /// A count or size is below zero.
    Negative,
    /// A sequence that must exist is missing entirely.
    Null,
    /// A string that must be empty has content.
    NonEmpty,
    /// A vector that must be unit scale is not `(1, 1, 1)`.
    NonOne,
    /// A value that must be zero (or an identity rotation) is not.
    NonZero,
    /// A value does not match (or matches a forbidden) expectation.
    Mismatch,
    /// A caller-supplied condition was false.
    Condition,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Unassigned => "unassigned",
            Rule::Empty => "empty",
            Rule::Negative => "negative",
            Rule::Null => "null",
            Rule::NonEmpty => "non-empty",
            Rule::NonOne => "non-one",
            Rule::NonZero => "non-zero",
            Rule::Mismatch => "mismatch",
            Rule::Condition => "condition",
        };
        f.write_str(name)
    }
}

/// A single violated validation rule.
///
/// The message is fully rendered before the violation is created: rule
/// template, field name, contextual values, and the diagnostic path of the
/// object under test.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Violation {
    /// Which rule family fired.
    pub rule: Rule,
    /// Rendered failure message.
    pub message: String,
}

impl Violation {
    /// Create a violation from a rule family and a rendered message.
    #[must_use]
    pub const fn new(rule: Rule, message: String) -> Self {
        Self { rule, message }
    }
}

/// The external framework's fail primitive.
///
/// Whether a report unwinds the current check sequence is the reporter's
/// business: a test harness may abort on first failure, an editor batch
/// pass may record and continue. The checker assumes "report and continue"
/// and never inspects the reporter's behavior.
pub trait FailureReporter {
    /// Report one violated rule.
    fn report(&mut self, violation: &Violation);
}

/// Reporter that aborts the check sequence on the first violation.
///
/// Matches the convention of test harnesses whose fail primitive does not
/// return normally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    /// # Panics
    ///
    /// Always - with the violation message as the panic payload.
    fn report(&mut self, violation: &Violation) {
        panic!("{violation}");
    }
}

/// Reporter that accumulates violations and continues.
///
/// Used by editor batch validation (collect every defect in one pass) and
/// by tests asserting on what fired.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    violations: Vec<Violation>,
}

impl RecordingReporter {
    /// Create an empty recording reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Violations recorded so far, in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Take the recorded violations, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<Violation> {
        std::mem::take(&mut self.violations)
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&mut self, violation: &Violation) {
        self.violations.push(violation.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_is_message() {
        let v = Violation::new(Rule::Empty, "Empty field 'name' in 'x/T'".to_owned());
        assert_eq!(v.to_string(), "Empty field 'name' in 'x/T'");
    }

    #[test]
    fn test_recording_reporter_accumulates_in_order() {
        let mut reporter = RecordingReporter::new();
        assert!(reporter.is_empty());

        reporter.report(&Violation::new(Rule::Null, "a".to_owned()));
        reporter.report(&Violation::new(Rule::Mismatch, "b".to_owned()));

        assert_eq!(reporter.len(), 2);
        assert_eq!(reporter.violations()[0].rule, Rule::Null);
        assert_eq!(reporter.violations()[1].message, "b");

        let taken = reporter.take();
        assert_eq!(taken.len(), 2);
        assert!(reporter.is_empty());
    }

    #[test]
    #[should_panic(expected = "Unassigned field")]
    fn test_panic_reporter_panics_with_message() {
        let mut reporter = PanicReporter;
        reporter.report(&Violation::new(
            Rule::Unassigned,
            "Unassigned field 'mesh' in 'x'".to_owned(),
        ));
    }
}
