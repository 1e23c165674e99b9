use fieldform_model::{FieldValue, Values};

/// Name → value mapping backing one form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: Values,
}

impl ValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point read. Unknown names yield `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// An owned copy of every entry; changes to it never reach the store.
    #[must_use]
    pub fn snapshot(&self) -> Values {
        self.values.clone()
    }

    /// Overwrites the given keys and leaves all others untouched.
    pub fn merge<I>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (String, FieldValue)>,
    {
        self.values.extend(partial);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
