//! Test reporters
//!
//! Fixture assertions never return their outcome to the caller. They hand
//! failures to a [`Reporter`], which decides how the running test ends.

use std::cell::RefCell;
use std::rc::Rc;

use crate::assertion::AssertionFailure;

/// Receives assertion failures from a fixture.
pub trait Reporter {
    /// Fail the running test.
    ///
    /// Implementations are expected not to return control to the test body
    /// in normal use. [`RecordingReporter`] is the exception.
    fn fail_now(&self, failure: AssertionFailure);
}

/// Panics on failure. Works with the standard test harness and
/// `#[should_panic]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    fn fail_now(&self, failure: AssertionFailure) {
        panic!("{failure}");
    }
}

/// Stores failures instead of ending the test.
///
/// Clones share storage, so keep one handle and give a clone to the fixture.
/// Meant for testing code that builds on the assertion surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    failures: Rc<RefCell<Vec<AssertionFailure>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures recorded so far, oldest first.
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures.borrow().clone()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<AssertionFailure> {
        self.failures.take()
    }
}

impl Reporter for RecordingReporter {
    fn fail_now(&self, failure: AssertionFailure) {
        tracing::debug!(%failure, "recorded assertion failure");
        self.failures.borrow_mut().push(failure);
    }
}
