//! Shared test helpers for store tests.

#![allow(dead_code)]

use fieldform_store::{FieldError, Values};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A listener that counts how many times it fired.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener(&self) -> impl Fn() + Send + Sync + 'static {
        let count = Arc::clone(&self.0);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Records every callback invocation made by a submission.
#[derive(Clone, Default)]
pub struct Recorder {
    pub finished: Arc<Mutex<Vec<Values>>>,
    pub failed: Arc<Mutex<Vec<(Vec<FieldError>, Values)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callbacks(&self) -> fieldform_store::Callbacks {
        let finished = Arc::clone(&self.finished);
        let failed = Arc::clone(&self.failed);
        fieldform_store::Callbacks::new()
            .on_finish(move |values| finished.lock().unwrap().push(values.clone()))
            .on_finish_failed(move |errors, values| {
                failed.lock().unwrap().push((errors.to_vec(), values.clone()));
            })
    }

    pub fn finished(&self) -> Vec<Values> {
        self.finished.lock().unwrap().clone()
    }

    pub fn failed(&self) -> Vec<(Vec<FieldError>, Values)> {
        self.failed.lock().unwrap().clone()
    }
}

pub fn values(pairs: &[(&str, &str)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), (*v).into()))
        .collect()
}
