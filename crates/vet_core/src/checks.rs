//! The assertion contract and its checker implementation.
//!
//! [`FieldAssertions`] declares one method per validation rule plus a
//! generic conditional and two context-setting operations. A self-testable
//! object first sets itself as the context, then runs any sequence of
//! checks; every failing check renders a message embedding the context
//! path and hands it to the injected [`FailureReporter`].
//!
//! Rules are leaf checks with no state beyond the shared context. None
//! retries, none is recoverable; severity and run-termination policy
//! belong to the reporter.

use std::fmt;

use crate::context::ValidationContext;
use crate::host::{NodeId, ObjectHost, ObjectId};
use crate::math::{Quat, Vec3};
use crate::report::{FailureReporter, Rule, Violation};

/// Path rendered when a check runs before any context has been set.
pub const NO_CONTEXT_PATH: &str = "<no context>";

/// Field types with a canonical zero accepted by
/// [`FieldAssertions::is_field_zero`].
///
/// For integers this is `0`, for vectors the zero vector, for rotations
/// the identity. Comparison is exact.
pub trait CanonicalZero {
    /// True when the value is exactly the canonical zero.
    fn is_canonical_zero(&self) -> bool;
}

impl CanonicalZero for i32 {
    fn is_canonical_zero(&self) -> bool {
        *self == 0
    }
}

impl CanonicalZero for i64 {
    fn is_canonical_zero(&self) -> bool {
        *self == 0
    }
}

impl CanonicalZero for Vec3 {
    fn is_canonical_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl CanonicalZero for Quat {
    fn is_canonical_zero(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Named assertion predicates over the fields of the object under test.
///
/// Call one of the `set_*_context` operations first; every later check
/// annotates its failure with that object's diagnostic path. Checks may be
/// invoked in any order and the context may be re-set between objects.
pub trait FieldAssertions {
    /// Inspect an object sitting on a scene node from here on.
    fn set_node_context(&mut self, object: ObjectId, node: NodeId);

    /// Inspect a free-standing asset from here on.
    fn set_asset_context(&mut self, object: ObjectId);

    /// The field must reference something.
    fn is_field_assigned<T: ?Sized>(&mut self, field: Option<&T>, field_name: &str);

    /// The string field must contain at least one non-whitespace character.
    fn is_field_not_blank(&mut self, field: &str, field_name: &str);

    /// The sequence field must exist and hold at least one element.
    fn is_field_not_empty<T>(&mut self, field: Option<&[T]>, field_name: &str);

    /// The numeric field must not be below zero.
    fn is_field_not_negative(&mut self, field: i64, field_name: &str);

    /// The sequence field must exist; it may be empty.
    fn is_field_not_null<T>(&mut self, field: Option<&[T]>, field_name: &str);

    /// The string field must be empty.
    fn is_field_empty(&mut self, field: &str, field_name: &str);

    /// The vector field must be exactly `(1, 1, 1)`.
    fn is_field_one(&mut self, field: Vec3, field_name: &str);

    /// The field must be exactly its canonical zero (zero vector, identity
    /// rotation, integer zero).
    fn is_field_zero<T: CanonicalZero>(&mut self, field: T, field_name: &str);

    /// The field must equal the expected value.
    fn is_field_equal<T: PartialEq + fmt::Debug>(
        &mut self,
        expected: T,
        field: T,
        field_name: &str,
    );

    /// The field must differ from the forbidden value.
    fn is_field_not_equal<T: PartialEq + fmt::Debug>(
        &mut self,
        forbidden: T,
        field: T,
        field_name: &str,
    );

    /// The field must match `expected` starting at byte `expected_start`,
    /// for exactly `field.len()` bytes (ordinal comparison).
    ///
    /// An `expected_start` past the end of `expected`, or one that does not
    /// land on a character boundary, counts as a mismatch rather than a
    /// panic.
    fn is_field_equal_at(
        &mut self,
        expected: &str,
        expected_start: usize,
        field: &str,
        field_name: &str,
    );

    /// The field must be strictly greater than the threshold.
    fn is_field_greater<T: PartialOrd + fmt::Display>(
        &mut self,
        threshold: T,
        field: T,
        field_name: &str,
    );

    /// Generic conditional with a caller-supplied message.
    ///
    /// On failure the message is reported with the context path appended;
    /// use `format_args!` for formatted messages.
    fn is_true(&mut self, condition: bool, message: impl fmt::Display);
}

/// Objects that can validate their own editor-time setup.
///
/// Implemented by scene components and assets that want to be checked
/// before shipping. The hook sets itself as the context and runs its
/// field checks; it reports through the checker and returns nothing.
pub trait SetupTestable {
    /// Run this object's field checks against `assert`.
    fn test_setup(&self, assert: &mut impl FieldAssertions);
}

/// The sole [`FieldAssertions`] implementation.
///
/// Borrows the host for path resolution and owns the reporter. Holds the
/// current [`ValidationContext`]; one checker serves a whole validation
/// pass, re-targeted between objects via the `set_*_context` operations.
#[derive(Debug)]
pub struct FieldChecker<'h, H, R> {
    host: &'h H,
    reporter: R,
    context: Option<ValidationContext>,
}

impl<'h, H: ObjectHost, R: FailureReporter> FieldChecker<'h, H, R> {
    /// Create a checker over `host` reporting into `reporter`.
    pub fn new(host: &'h H, reporter: R) -> Self {
        Self {
            host,
            reporter,
            context: None,
        }
    }

    /// The reporter, for inspection mid-pass.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the checker and recover the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Diagnostic path of the current context.
    fn context_path(&mut self) -> String {
        match self.context.as_mut() {
            Some(ctx) => ctx.path(self.host).to_owned(),
            None => NO_CONTEXT_PATH.to_owned(),
        }
    }

    fn fail(&mut self, rule: Rule, message: String) {
        tracing::debug!(rule = %rule, %message, "validation rule violated");
        self.reporter.report(&Violation::new(rule, message));
    }
}

impl<H: ObjectHost, R: FailureReporter> FieldAssertions for FieldChecker<'_, H, R> {
    fn set_node_context(&mut self, object: ObjectId, node: NodeId) {
        self.context = Some(ValidationContext::hierarchical(object, node));
    }

    fn set_asset_context(&mut self, object: ObjectId) {
        self.context = Some(ValidationContext::standalone(object));
    }

    fn is_field_assigned<T: ?Sized>(&mut self, field: Option<&T>, field_name: &str) {
        if field.is_none() {
            let path = self.context_path();
            self.fail(
                Rule::Unassigned,
                format!("Unassigned field '{field_name}' in '{path}'"),
            );
        }
    }

    fn is_field_not_blank(&mut self, field: &str, field_name: &str) {
        if field.trim().is_empty() {
            let path = self.context_path();
            self.fail(Rule::Empty, format!("Empty field '{field_name}' in '{path}'"));
        }
    }

    fn is_field_not_empty<T>(&mut self, field: Option<&[T]>, field_name: &str) {
        if field.map_or(true, <[T]>::is_empty) {
            let path = self.context_path();
            self.fail(Rule::Empty, format!("Empty field '{field_name}' in '{path}'"));
        }
    }

    fn is_field_not_negative(&mut self, field: i64, field_name: &str) {
        if field < 0 {
            let path = self.context_path();
            self.fail(
                Rule::Negative,
                format!("Negative field '{field_name}' in '{path}'"),
            );
        }
    }

    fn is_field_not_null<T>(&mut self, field: Option<&[T]>, field_name: &str) {
        if field.is_none() {
            let path = self.context_path();
            self.fail(Rule::Null, format!("Null field '{field_name}' in '{path}'"));
        }
    }

    fn is_field_empty(&mut self, field: &str, field_name: &str) {
        if !field.is_empty() {
            let path = self.context_path();
            self.fail(
                Rule::NonEmpty,
                format!("Non-empty field '{field_name}' in '{path}'"),
            );
        }
    }

    fn is_field_one(&mut self, field: Vec3, field_name: &str) {
        if field != Vec3::ONE {
            let path = self.context_path();
            self.fail(
                Rule::NonOne,
                format!("Non-one field '{field_name}' in '{path}'"),
            );
        }
    }

    fn is_field_zero<T: CanonicalZero>(&mut self, field: T, field_name: &str) {
        if !field.is_canonical_zero() {
            let path = self.context_path();
            self.fail(
                Rule::NonZero,
                format!("Non-zero field '{field_name}' in '{path}'"),
            );
        }
    }

    fn is_field_equal<T: PartialEq + fmt::Debug>(
        &mut self,
        expected: T,
        field: T,
        field_name: &str,
    ) {
        if field != expected {
            let path = self.context_path();
            self.fail(
                Rule::Mismatch,
                format!(
                    "Mismatching field '{field_name}' (expected '{expected:?}', actual '{field:?}') in '{path}'"
                ),
            );
        }
    }

    fn is_field_not_equal<T: PartialEq + fmt::Debug>(
        &mut self,
        forbidden: T,
        field: T,
        field_name: &str,
    ) {
        if field == forbidden {
            let path = self.context_path();
            self.fail(
                Rule::Mismatch,
                format!(
                    "Mismatching field '{field_name}' (forbidden '{forbidden:?}', actual '{field:?}') in '{path}'"
                ),
            );
        }
    }

    fn is_field_equal_at(
        &mut self,
        expected: &str,
        expected_start: usize,
        field: &str,
        field_name: &str,
    ) {
        let window = expected_start
            .checked_add(field.len())
            .and_then(|end| expected.get(expected_start..end));
        if window != Some(field) {
            let path = self.context_path();
            let compared = expected.get(expected_start..).unwrap_or(expected);
            self.fail(
                Rule::Mismatch,
                format!(
                    "Mismatching field '{field_name}' (expected '{compared}', actual '{field}') in '{path}'"
                ),
            );
        }
    }

    fn is_field_greater<T: PartialOrd + fmt::Display>(
        &mut self,
        threshold: T,
        field: T,
        field_name: &str,
    ) {
        // Incomparable values (NaN) count as failures.
        if field.partial_cmp(&threshold) != Some(std::cmp::Ordering::Greater) {
            let path = self.context_path();
            self.fail(
                Rule::Mismatch,
                format!(
                    "Mismatching field '{field_name}' (expected >{threshold}, actual {field}) in '{path}'"
                ),
            );
        }
    }

    fn is_true(&mut self, condition: bool, message: impl fmt::Display) {
        if !condition {
            let path = self.context_path();
            self.fail(Rule::Condition, format!("{message} in '{path}'"));
        }
    }
}
