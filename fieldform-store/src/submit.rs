//! Submission callbacks and outcomes.

use fieldform_model::{FieldError, Values};
use std::fmt;
use std::sync::Arc;

/// Called with the value snapshot when validation passes.
pub type FinishHandler = Arc<dyn Fn(&Values) + Send + Sync>;

/// Called with the errors and the value snapshot when validation fails.
pub type FinishFailedHandler = Arc<dyn Fn(&[FieldError], &Values) + Send + Sync>;

/// The success/failure handlers invoked by [`Form::submit`].
///
/// Both are optional. Setting callbacks on a form merges: a handler left
/// unset here keeps whatever the form already had.
///
/// [`Form::submit`]: crate::Form::submit
#[derive(Clone, Default)]
pub struct Callbacks {
    on_finish: Option<FinishHandler>,
    on_finish_failed: Option<FinishFailedHandler>,
}

impl Callbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_finish(mut self, f: impl Fn(&Values) + Send + Sync + 'static) -> Self {
        self.on_finish = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_finish_failed(
        mut self,
        f: impl Fn(&[FieldError], &Values) + Send + Sync + 'static,
    ) -> Self {
        self.on_finish_failed = Some(Arc::new(f));
        self
    }

    /// Shallow merge: handlers set in `other` replace ours, unset ones don't.
    pub fn merge(&mut self, other: Callbacks) {
        if let Some(f) = other.on_finish {
            self.on_finish = Some(f);
        }
        if let Some(f) = other.on_finish_failed {
            self.on_finish_failed = Some(f);
        }
    }

    #[must_use]
    pub fn has_on_finish(&self) -> bool {
        self.on_finish.is_some()
    }

    #[must_use]
    pub fn has_on_finish_failed(&self) -> bool {
        self.on_finish_failed.is_some()
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_finish", &self.on_finish.is_some())
            .field("on_finish_failed", &self.on_finish_failed.is_some())
            .finish()
    }
}

/// What a submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field passed; carries the submitted values.
    Finished(Values),
    /// At least one field failed.
    Failed {
        errors: Vec<FieldError>,
        values: Values,
    },
}

impl SubmitOutcome {
    pub(crate) fn from_validation(errors: Vec<FieldError>, values: Values) -> Self {
        if errors.is_empty() {
            Self::Finished(values)
        } else {
            Self::Failed { errors, values }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    #[must_use]
    pub fn values(&self) -> &Values {
        match self {
            Self::Finished(values) | Self::Failed { values, .. } => values,
        }
    }

    /// Empty when the submission finished.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Finished(_) => &[],
            Self::Failed { errors, .. } => errors,
        }
    }

    /// Hands the outcome to whichever handler matches. A missing handler is a no-op.
    pub(crate) fn dispatch(&self, callbacks: &Callbacks) {
        match self {
            Self::Finished(values) => {
                if let Some(f) = &callbacks.on_finish {
                    f(values);
                }
            }
            Self::Failed { errors, values } => {
                if let Some(f) = &callbacks.on_finish_failed {
                    f(errors, values);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn merge_keeps_unset_handlers() {
        let mut callbacks = Callbacks::new().on_finish(|_| {});
        callbacks.merge(Callbacks::new().on_finish_failed(|_, _| {}));
        assert!(callbacks.has_on_finish());
        assert!(callbacks.has_on_finish_failed());
    }

    #[test]
    fn later_handler_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let (f1, f2) = (Arc::clone(&first), Arc::clone(&second));

        let mut callbacks = Callbacks::new().on_finish(move |_| {
            f1.fetch_add(1, Ordering::SeqCst);
        });
        callbacks.merge(Callbacks::new().on_finish(move |_| {
            f2.fetch_add(1, Ordering::SeqCst);
        }));

        SubmitOutcome::Finished(Values::new()).dispatch(&callbacks);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_without_handlers_is_silent() {
        let outcome = SubmitOutcome::from_validation(
            vec![FieldError::new("a", "")],
            Values::new(),
        );
        outcome.dispatch(&Callbacks::new());
        assert!(!outcome.is_finished());
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn debug_shows_which_handlers_are_set() {
        let callbacks = Callbacks::new().on_finish(|_| {});
        assert_eq!(
            format!("{callbacks:?}"),
            "Callbacks { on_finish: true, on_finish_failed: false }"
        );
    }
}
