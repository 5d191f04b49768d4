//! # Vet Core
//!
//! Editor-time field validation for scene objects and assets.
//!
//! Scene objects declare a self-test hook ([`checks::SetupTestable`]) that
//! runs before an asset is considered valid for shipping. The hook receives
//! a checker implementing [`checks::FieldAssertions`]: one named predicate
//! per validation rule (assigned, non-empty, zero/one, equality, ordering),
//! each reporting failures annotated with a diagnostic path that identifies
//! which object and field triggered them.
//!
//! This crate contains **only** the validation core:
//! - No scene graph of its own - the host supplies object identity, asset
//!   locations, and the parent relation through [`host::ObjectHost`]
//! - No test runner - failures flow to an injected [`report::FailureReporter`]
//! - No IO, no persisted state
//!
//! ## Crate Structure
//!
//! - [`host`] - capability trait for the host object graph
//! - [`context`] - object-under-test identity and its diagnostic path
//! - [`report`] - rule taxonomy, violations, failure reporters
//! - [`checks`] - the assertion contract and its checker implementation
//! - [`math`] - vector and rotation values checked by the rule table

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod checks;
pub mod context;
pub mod host;
pub mod math;
pub mod report;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::checks::{CanonicalZero, FieldAssertions, FieldChecker, SetupTestable};
    pub use crate::context::ValidationContext;
    pub use crate::host::{NodeId, ObjectHost, ObjectId};
    pub use crate::math::{Quat, Vec3};
    pub use crate::report::{
        FailureReporter, PanicReporter, RecordingReporter, Rule, Violation,
    };
}
