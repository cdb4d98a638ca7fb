//! Field-by-field reader over untrusted JSON objects
//!
//! Each accessor checks one key and reports the full path of the first
//! violation. Nothing is coerced or repaired: text is returned exactly as
//! supplied once it passes its check.

use crate::error::{JsonKind, ValidationError, ValidationReason, ValidationResult, ROOT_PATH};
use serde_json::{Map, Value};

/// Read-only view of one JSON object at a known path
#[derive(Debug, Clone)]
pub(crate) struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> FieldReader<'a> {
    /// Reader over a top-level value
    pub(crate) fn new(value: &'a Value) -> ValidationResult<Self> {
        Self::at(value, String::new())
    }

    fn at(value: &'a Value, prefix: String) -> ValidationResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields, prefix }),
            Value::Null => Err(ValidationError::missing(display_path(&prefix))),
            _ => Err(ValidationError::wrong_type(
                display_path(&prefix),
                JsonKind::Object,
            )),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }

    fn get(&self, key: &str) -> ValidationResult<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Err(ValidationError::missing(self.path(key))),
            Some(value) => Ok(value),
        }
    }

    fn array(&self, key: &str) -> ValidationResult<&'a Vec<Value>> {
        match self.get(key)? {
            Value::Array(items) => Ok(items),
            _ => Err(ValidationError::wrong_type(self.path(key), JsonKind::Array)),
        }
    }

    /// Any string, including the empty string
    pub(crate) fn text(&self, key: &str) -> ValidationResult<String> {
        as_text(self.get(key)?, &self.path(key))
    }

    /// String that is non-empty after trimming
    pub(crate) fn required_text(&self, key: &str) -> ValidationResult<String> {
        as_required_text(self.get(key)?, &self.path(key))
    }

    /// Array of strings, possibly empty
    pub(crate) fn text_list(&self, key: &str) -> ValidationResult<Vec<String>> {
        let path = self.path(key);
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| as_text(item, &format!("{path}[{i}]")))
            .collect()
    }

    /// Non-empty array of non-blank strings
    pub(crate) fn required_text_list(&self, key: &str) -> ValidationResult<Vec<String>> {
        let path = self.path(key);
        let items = self.array(key)?;
        if items.is_empty() {
            return Err(ValidationError::new(path, ValidationReason::EmptyList));
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| as_required_text(item, &format!("{path}[{i}]")))
            .collect()
    }

    /// Integer within `min..=max`
    pub(crate) fn integer(&self, key: &str, min: i64, max: i64) -> ValidationResult<i64> {
        let path = self.path(key);
        let value = as_integer(self.get(key)?, &path)?;
        if value < min || value > max {
            return Err(ValidationError::new(
                path,
                ValidationReason::OutOfRange { min, max },
            ));
        }
        Ok(value)
    }

    /// Nested object
    pub(crate) fn object(&self, key: &str) -> ValidationResult<FieldReader<'a>> {
        Self::at(self.get(key)?, self.path(key))
    }

    /// Array of objects, each decoded by `read`
    ///
    /// Fails with [`ValidationReason::EmptyList`] when fewer than `min_len`
    /// entries are present.
    pub(crate) fn records<T>(
        &self,
        key: &str,
        min_len: usize,
        read: impl Fn(&FieldReader<'a>) -> ValidationResult<T>,
    ) -> ValidationResult<Vec<T>> {
        let path = self.path(key);
        let items = self.array(key)?;
        if items.len() < min_len {
            return Err(ValidationError::new(path, ValidationReason::EmptyList));
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| read(&Self::at(item, format!("{path}[{i}]"))?))
            .collect()
    }
}

fn display_path(prefix: &str) -> String {
    if prefix.is_empty() {
        ROOT_PATH.to_string()
    } else {
        prefix.to_string()
    }
}

fn as_text(value: &Value, path: &str) -> ValidationResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Null => Err(ValidationError::missing(path)),
        _ => Err(ValidationError::wrong_type(path, JsonKind::String)),
    }
}

fn as_required_text(value: &Value, path: &str) -> ValidationResult<String> {
    let text = as_text(value, path)?;
    if text.trim().is_empty() {
        return Err(ValidationError::new(path, ValidationReason::Blank));
    }
    Ok(text)
}

// Integral floats such as `7.0` are accepted; saturating casts push
// oversized values into the range check.
#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value, path: &str) -> ValidationResult<i64> {
    let Value::Number(number) = value else {
        return Err(ValidationError::wrong_type(path, JsonKind::Number));
    };
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(ValidationError::new(path, ValidationReason::NotInteger)),
    }
}
