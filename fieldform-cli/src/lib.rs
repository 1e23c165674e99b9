//! Drives a fieldform store from the command line.
//!
//! Each schema field is mounted through a [`FieldBinding`], the `--set`
//! assignments are fed in as user input, and the form is submitted once.

use anyhow::{Context, Result, bail};
use fieldform_model::{FieldError, FieldValue, FormSchema, Values};
use fieldform_store::{Callbacks, FieldBinding, Form};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// One field input from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: FieldValue,
}

/// Parses `name=value` or `name:=number`.
///
/// `name=value` always stores the value as text, exactly as typed, the way
/// an input control reports it. `name:=number` stores a number and fails if
/// the value is not a finite number. The split is at the first `=`, so
/// values may themselves contain `=`.
pub fn parse_assignment(raw: &str) -> Result<Assignment> {
    let Some((lhs, value)) = raw.split_once('=') else {
        bail!("expected name=value or name:=number, got {raw:?}");
    };
    let (name, value) = match lhs.strip_suffix(':') {
        Some(name) => {
            let Some(number) = FieldValue::parse_number(value) else {
                bail!("expected a number after ':=' in {raw:?}");
            };
            (name, number)
        }
        None => (lhs, FieldValue::from(value)),
    };
    if name.is_empty() {
        bail!("empty field name in {raw:?}");
    }
    Ok(Assignment {
        name: name.to_string(),
        value,
    })
}

/// The printed result of a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Finished { values: Values },
    Failed { errors: Vec<FieldError>, values: Values },
}

impl Report {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

pub fn load_schema(path: &Path) -> Result<FormSchema> {
    info!("Loading schema from {:?}", path);
    let json = fs::read_to_string(path).context("Failed to read schema file")?;
    FormSchema::from_json(&json).context("Failed to parse schema file")
}

/// Mounts every schema field, applies the assignments in order, submits,
/// and returns whatever the submission callbacks reported.
pub fn run(schema: &FormSchema, assignments: &[Assignment]) -> Result<Report> {
    let form = Form::new();
    let report: Arc<Mutex<Option<Report>>> = Arc::default();

    let on_finish = Arc::clone(&report);
    let on_failed = Arc::clone(&report);
    form.set_callbacks(
        Callbacks::new()
            .on_finish(move |values| {
                store_report(&on_finish, Report::Finished { values: values.clone() });
            })
            .on_finish_failed(move |errors, values| {
                store_report(
                    &on_failed,
                    Report::Failed {
                        errors: errors.to_vec(),
                        values: values.clone(),
                    },
                );
            }),
    );

    let bindings: Vec<FieldBinding> = schema
        .fields
        .iter()
        .map(|props| FieldBinding::mount(&form, props.clone(), || {}))
        .collect();

    for assignment in assignments {
        match bindings.iter().find(|b| b.name() == assignment.name) {
            Some(binding) => {
                debug!(field = %assignment.name, value = %assignment.value, "Applying input");
                binding.on_change(assignment.value.clone());
            }
            None => warn!(field = %assignment.name, "Ignoring value for field not in schema"),
        }
    }

    form.submit();

    let mut slot = report.lock().unwrap_or_else(PoisonError::into_inner);
    slot.take().context("Submission produced no outcome")
}

fn store_report(slot: &Mutex<Option<Report>>, report: Report) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);
}
