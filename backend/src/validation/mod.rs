//! Schema checks for request bodies.
//!
//! Bodies arrive as raw JSON values and are checked against a static
//! [`ObjectSchema`] before being turned into typed payloads. Every violation is
//! reported with the path of the offending field, e.g.
//! `"answers[0].author" is required`, and all of them are joined with `,`.

mod schemas;

pub use schemas::{new_answer, new_question};

use serde_json::Value;
use std::collections::HashSet;

/// Shape of one JSON object: its allowed keys and what each may hold.
/// Keys that are not listed are rejected.
pub struct ObjectSchema {
    pub fields: &'static [Field],
}

pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub enum FieldKind {
    /// A string that is not empty once surrounding whitespace is trimmed.
    Text,
    /// A non-empty string, taken as is.
    Id,
    /// An array whose items all match the schema. When `unique_by` names a
    /// key, no two items may hold the same value under it.
    List {
        items: &'static ObjectSchema,
        unique_by: Option<&'static str>,
    },
}

impl Field {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub const fn id(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Id,
            required: true,
        }
    }

    pub const fn optional_list(name: &'static str, items: &'static ObjectSchema) -> Self {
        Self {
            name,
            kind: FieldKind::List {
                items,
                unique_by: None,
            },
            required: false,
        }
    }

    /// Like [`optional_list`](Self::optional_list), rejecting items that repeat
    /// the value of `key`.
    pub const fn optional_unique_list(
        name: &'static str,
        items: &'static ObjectSchema,
        key: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::List {
                items,
                unique_by: Some(key),
            },
            required: false,
        }
    }
}

impl ObjectSchema {
    /// Checks `value` against the schema, returning every violation found.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        self.check(value, None, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check(&self, value: &Value, path: Option<&str>, errors: &mut Vec<String>) {
        let Some(object) = value.as_object() else {
            errors.push(format!("{} must be an object", label(path.unwrap_or("value"))));
            return;
        };

        for field in self.fields {
            let field_path = match path {
                Some(parent) => format!("{}.{}", parent, field.name),
                None => field.name.to_string(),
            };

            match object.get(field.name) {
                None if field.required => errors.push(format!("{} is required", label(&field_path))),
                None => {}
                Some(value) => field.kind.check(value, &field_path, errors),
            }
        }

        for key in object.keys() {
            if !self.fields.iter().any(|f| f.name == key.as_str()) {
                let key_path = match path {
                    Some(parent) => format!("{}.{}", parent, key),
                    None => key.clone(),
                };
                errors.push(format!("{} is not allowed", label(&key_path)));
            }
        }
    }
}

impl FieldKind {
    fn check(&self, value: &Value, path: &str, errors: &mut Vec<String>) {
        match (self, value) {
            (FieldKind::Text, Value::String(s)) => {
                if s.trim().is_empty() {
                    errors.push(format!("{} is not allowed to be empty", label(path)));
                }
            }
            (FieldKind::Id, Value::String(s)) => {
                if s.is_empty() {
                    errors.push(format!("{} is not allowed to be empty", label(path)));
                }
            }
            (FieldKind::Text | FieldKind::Id, _) => {
                errors.push(format!("{} must be a string", label(path)))
            }
            (FieldKind::List { items, unique_by }, Value::Array(values)) => {
                let mut seen = HashSet::new();
                for (index, item) in values.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    items.check(item, Some(&item_path), errors);

                    let key = unique_by.and_then(|key| item.get(key));
                    if let Some(key) = key {
                        if !seen.insert(key.to_string()) {
                            errors.push(format!("{} contains a duplicate value", label(&item_path)));
                        }
                    }
                }
            }
            (FieldKind::List { .. }, _) => errors.push(format!("{} must be an array", label(path))),
        }
    }
}

fn label(path: &str) -> String {
    format!("\"{}\"", path)
}
