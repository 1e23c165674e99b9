mod common;

use common::Counter;
use fieldform_store::{FieldBinding, FieldProps, FieldValue, Form, FormSchema, FormSlot, Rule};
use pretty_assertions::assert_eq;

// ── FieldBinding ─────────────────────────────────────────────────

#[test]
fn unset_value_displays_as_empty_text() {
    let form = Form::new();
    let field = FieldBinding::mount(&form, FieldProps::new("name"), || {});
    assert_eq!(field.value(), FieldValue::from(""));
    assert_eq!(form.get_field_value("name"), None);
}

#[test]
fn on_change_writes_through_and_notifies_siblings() {
    let form = Form::new();
    let sibling = Counter::new();
    let name = FieldBinding::mount(&form, FieldProps::new("name"), || {});
    let _email = FieldBinding::mount(&form, FieldProps::new("email"), sibling.listener());

    name.on_change("bob");

    assert_eq!(name.value(), FieldValue::from("bob"));
    assert_eq!(form.get_field_value("name"), Some(FieldValue::from("bob")));
    assert_eq!(sibling.get(), 1);
}

#[test]
fn unmount_is_idempotent_and_clears_value() {
    let form = Form::new();
    let field = FieldBinding::mount(&form, FieldProps::new("name"), || {});
    field.on_change("bob");

    field.unmount();
    field.unmount();

    assert!(!field.is_mounted());
    assert_eq!(form.get_field_value("name"), None);
}

#[test]
fn unmounting_a_duplicate_unmounts_both() {
    let form = Form::new();
    let notified = Counter::new();
    let first = FieldBinding::mount(
        &form,
        FieldProps::new("dup").with_rule(Rule::required("r")),
        || {},
    );
    let second = FieldBinding::mount(
        &form,
        FieldProps::new("dup").with_rule(Rule::required("r")),
        notified.listener(),
    );
    assert!(second.is_mounted());

    first.unmount();

    assert!(!first.is_mounted());
    assert!(!second.is_mounted());
    assert!(form.validate_fields().is_empty());
    second.on_change("x");
    assert_eq!(notified.get(), 0);
}

#[test]
fn binding_is_unmounted_once_form_is_dropped() {
    let form = Form::new();
    let field = FieldBinding::mount(&form, FieldProps::new("a"), || {});
    let registration = form.register_field_entities(FieldProps::new("b"), || {});
    drop(field);
    drop(form);
    assert!(!registration.is_active());
}

#[test]
fn bound_required_field_drives_submission() {
    let form = Form::new();
    let field = FieldBinding::mount(
        &form,
        FieldProps::new("username").with_rule(Rule::required("required")),
        || {},
    );
    assert!(!form.submit().is_finished());
    field.on_change("bob");
    assert!(form.submit().is_finished());
}

// ── FormSlot ─────────────────────────────────────────────────────

#[test]
fn slot_starts_uninitialized() {
    let slot = FormSlot::new();
    assert!(!slot.is_initialized());
    assert!(slot.get().is_none());
}

#[test]
fn slot_returns_the_same_form_every_time() {
    let slot = FormSlot::new();
    slot.get_or_init().set_field_value([("a", "1")]);
    let again = slot.get_or_init();
    assert!(slot.is_initialized());
    assert_eq!(again.get_field_value("a"), Some(FieldValue::from("1")));
    assert!(Form::ptr_eq(again, slot.get().unwrap()));
}

#[test]
fn separate_slots_hold_separate_forms() {
    let a = FormSlot::new();
    let b = FormSlot::new();
    assert!(!Form::ptr_eq(a.get_or_init(), b.get_or_init()));
}

// ── Schema registration ──────────────────────────────────────────

#[test]
fn register_schema_mounts_every_field_in_order() {
    let schema = FormSchema::from_json(
        r#"{"fields": [
            {"name": "username", "rules": [{"required": true, "message": "u"}]},
            {"name": "password", "rules": [{"required": true, "message": "p"}]}
        ]}"#,
    )
    .unwrap();
    let form = Form::new();
    let regs = form.register_schema(&schema);

    let names: Vec<&str> = regs.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["username", "password"]);

    let messages: Vec<String> = form.validate_fields().into_iter().map(|e| e.message).collect();
    assert_eq!(messages, vec!["u", "p"]);
}
