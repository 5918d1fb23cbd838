//! Process-wide assertion reporting
//!
//! Invariant checks inside the crate report failures to a single, globally
//! configurable handler. Reporting never changes control flow: with no
//! handler installed a failure is silently dropped, and the checked code
//! carries on with whatever result it computed.
//!
//! The handler is meant to be installed once at startup (the `tagpath`
//! binary installs [`log_failure`]) and may be replaced or cleared at any
//! time; the last write wins.
//!
//! ```
//! use tagpath::infrastructure::assertion::{clear_assert_handler, set_assert_handler};
//!
//! set_assert_handler(|failure| eprintln!("{}", failure));
//! tagpath::verify!(1 + 1 == 2, "arithmetic still works");
//! clear_assert_handler();
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

/// Where in the source an assertion was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.module)
    }
}

/// Which macro reported the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    /// `check!`, compiled only with debug assertions
    Check,
    /// `verify!`, active in every build
    Verify,
}

/// A failed assertion as handed to the installed handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure<'a> {
    pub kind: AssertionKind,
    pub expression: &'a str,
    pub message: &'a str,
    pub location: SourceLocation,
}

impl fmt::Display for AssertionFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            AssertionKind::Check => "CHECK",
            AssertionKind::Verify => "VERIFY",
        };
        write!(
            f,
            "{} failed: `{}`: {} at {}",
            kind, self.expression, self.message, self.location
        )
    }
}

type Handler = Arc<dyn Fn(&AssertionFailure<'_>) + Send + Sync>;

static HANDLER: RwLock<Option<Handler>> = RwLock::new(None);

/// Install the handler that receives every assertion failure
pub fn set_assert_handler<F>(handler: F)
where
    F: Fn(&AssertionFailure<'_>) + Send + Sync + 'static,
{
    let mut slot = HANDLER.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Arc::new(handler));
}

/// Remove the installed handler; later failures are dropped
pub fn clear_assert_handler() {
    let mut slot = HANDLER.write().unwrap_or_else(|e| e.into_inner());
    *slot = None;
}

pub fn has_assert_handler() -> bool {
    HANDLER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .is_some()
}

/// Hand a failure to the installed handler, if any
pub fn report(failure: &AssertionFailure<'_>) {
    // Clone out of the lock so a handler may itself replace the handler.
    let handler = HANDLER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone();

    if let Some(handler) = handler {
        handler(failure);
    }
}

/// Handler that forwards failures to `tracing` at warn level
pub fn log_failure(failure: &AssertionFailure<'_>) {
    tracing::warn!(
        kind = ?failure.kind,
        expression = failure.expression,
        file = failure.location.file,
        line = failure.location.line,
        module = failure.location.module,
        "assertion failed: {}",
        failure.message
    );
}

/// Location of the macro invocation
#[doc(hidden)]
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::infrastructure::assertion::SourceLocation {
            file: file!(),
            line: line!(),
            module: module_path!(),
        }
    };
}

/// Debug-only invariant check
///
/// The condition is not evaluated at all in release builds.
#[macro_export]
macro_rules! check {
    ($cond:expr, $msg:expr $(,)?) => {
        if cfg!(debug_assertions) && !($cond) {
            $crate::infrastructure::assertion::report(
                &$crate::infrastructure::assertion::AssertionFailure {
                    kind: $crate::infrastructure::assertion::AssertionKind::Check,
                    expression: stringify!($cond),
                    message: $msg,
                    location: $crate::source_location!(),
                },
            );
        }
    };
}

/// Invariant check active in every build
#[macro_export]
macro_rules! verify {
    ($cond:expr, $msg:expr $(,)?) => {
        if !($cond) {
            $crate::infrastructure::assertion::report(
                &$crate::infrastructure::assertion::AssertionFailure {
                    kind: $crate::infrastructure::assertion::AssertionKind::Verify,
                    expression: stringify!($cond),
                    message: $msg,
                    location: $crate::source_location!(),
                },
            );
        }
    };
}
