//! Error reporting hub
//!
//! The boundary where failures become classified [`AppError`]s: every
//! reported error is logged as a structured record and dispatched to the
//! observers registered for its kind, then to the catch-all observers.
//! Observer failures are isolated; reporting never raises past its own
//! call.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::Error;

use crate::logic::errors::{classify, AppError, ErrorKind};

type Observer = Box<dyn Fn(&AppError)>;

/// Lightweight projection of an [`AppError`] that observers can carry
/// across a channel (the full value owns a non-cloneable source chain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNote {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AppError> for ErrorNote {
    fn from(err: &AppError) -> Self {
        Self {
            kind: err.kind,
            message: err.message.clone(),
        }
    }
}

#[derive(Default)]
pub struct ErrorHub {
    observers: RefCell<HashMap<ErrorKind, Vec<Observer>>>,
    catch_all: RefCell<Vec<Observer>>,
}

impl ErrorHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for one kind.
    pub fn observe(&self, kind: ErrorKind, observer: impl Fn(&AppError) + 'static) {
        self.observers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Box::new(observer));
    }

    /// Register a catch-all observer that runs for every kind, after the
    /// kind-specific observers.
    pub fn observe_all(&self, observer: impl Fn(&AppError) + 'static) {
        self.catch_all.borrow_mut().push(Box::new(observer));
    }

    /// Classify, log and dispatch a failure. Always returns the
    /// classified value; observers cannot fail this call.
    pub fn report(
        &self,
        error: Error,
        explicit_kind: Option<ErrorKind>,
        context: BTreeMap<String, String>,
    ) -> AppError {
        let classified = classify(error, explicit_kind, context);

        tracing::error!(
            kind = classified.kind.as_str(),
            message = %classified.message,
            context = ?classified.context,
            "classified error"
        );

        self.dispatch(&classified);
        classified
    }

    /// Convenience for call sites with a single context key.
    pub fn report_with_path(
        &self,
        error: Error,
        explicit_kind: Option<ErrorKind>,
        path: &std::path::Path,
    ) -> AppError {
        let mut context = BTreeMap::new();
        context.insert("path".to_string(), path.display().to_string());
        self.report(error, explicit_kind, context)
    }

    fn dispatch(&self, error: &AppError) {
        let observers = self.observers.borrow();
        if let Some(for_kind) = observers.get(&error.kind) {
            for observer in for_kind {
                run_isolated(observer, error);
            }
        }
        for observer in self.catch_all.borrow().iter() {
            run_isolated(observer, error);
        }
    }
}

/// Run one observer, swallowing a panic so the remaining observers still
/// fire and nothing escapes `report`. The failure is only logged.
fn run_isolated(observer: &Observer, error: &AppError) {
    if catch_unwind(AssertUnwindSafe(|| observer(error))).is_err() {
        tracing::warn!(kind = error.kind.as_str(), "error observer panicked; continuing");
    }
}
