//! Shared test utilities for the release crate.

use crate::error::{ReleaseError, Result};
use crate::executor::{CommandExecutor, Invocation};
use crate::target::Target;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::ExitStatus;

/// Creates an `ExitStatus` from an exit code (Unix implementation).
#[cfg(unix)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    ExitStatus::from_raw(code << 8)
}

/// Creates an `ExitStatus` from an exit code (Windows implementation).
#[cfg(windows)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;

    ExitStatus::from_raw(code.unsigned_abs())
}

/// Represents an expected invocation for testing.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The invocation the code under test must issue.
    pub invocation: Invocation,
    /// The result to return when this invocation is issued.
    pub result: Result<ExitStatus>,
}

impl ExpectedCall {
    /// Expects `go build -o <output>` for `target` in the inherited directory.
    ///
    /// The invocation is spelled out independently of the builder so tests
    /// catch regressions in the command line it produces.
    #[must_use]
    pub fn go_build(target: Target, output: &str, result: Result<ExitStatus>) -> Self {
        Self {
            invocation: Invocation {
                program: "go".to_owned(),
                args: vec!["build".to_owned(), "-o".to_owned(), output.to_owned()],
                env: vec![
                    ("GOOS".to_owned(), target.platform().as_str().to_owned()),
                    ("GOARCH".to_owned(), target.arch().as_str().to_owned()),
                ],
                current_dir: None,
            },
            result,
        }
    }
}

/// A stub implementation of `CommandExecutor` for testing.
///
/// Records every invocation it receives and returns predefined results in
/// order. An invocation that does not match the next expectation, or that
/// arrives after all expectations are consumed, yields
/// [`ReleaseError::StubMismatch`].
#[derive(Debug, Default)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
    received: RefCell<Vec<Invocation>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
            received: RefCell::new(Vec::new()),
        }
    }

    /// Returns every invocation received so far, in order.
    #[must_use]
    pub fn received(&self) -> Vec<Invocation> {
        self.received.borrow().clone()
    }

    /// Returns the number of expectations not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.expected.borrow().len()
    }

    /// Asserts that all expected invocations have been consumed.
    ///
    /// # Panics
    ///
    /// Panics if there are remaining expected calls that were not invoked.
    pub fn assert_finished(&self) {
        assert!(
            self.expected.borrow().is_empty(),
            "expected no further command invocations"
        );
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        self.received.borrow_mut().push(invocation.clone());

        let Some(call) = self.expected.borrow_mut().pop_front() else {
            return Err(ReleaseError::StubMismatch {
                message: format!("unexpected invocation: {invocation}"),
            });
        };

        if call.invocation != *invocation {
            return Err(ReleaseError::StubMismatch {
                message: format!("expected `{}`, got `{invocation}`", call.invocation),
            });
        }

        call.result
    }
}
