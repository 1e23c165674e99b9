use crate::registry::EntityRegistry;
use crate::values::ValueStore;
use fieldform_model::FieldError;

/// Checks each registered field against its first rule.
///
/// Errors come back in registration order. A field fails when its first
/// rule has `required: true` and its value is missing or the empty string.
/// Later rules, and any rule shape other than `required`, are ignored.
#[must_use]
pub fn validate(registry: &EntityRegistry, values: &ValueStore) -> Vec<FieldError> {
    registry
        .entities()
        .filter_map(|entity| {
            let rule = entity.props().first_rule().filter(|r| r.is_required())?;
            let missing = values.get(entity.name()).is_none_or(|v| v.is_empty());
            missing.then(|| {
                FieldError::new(entity.name(), rule.message.clone().unwrap_or_default())
            })
        })
        .collect()
}
