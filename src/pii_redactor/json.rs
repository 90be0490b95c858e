// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Redaction over nested JSON payloads

use serde_json::{Map, Value};

use super::error::RedactError;
use super::exemptions::ExemptionSet;
use super::redactor::Redactor;

impl Redactor {
    /// Redact every string leaf of a JSON value
    ///
    /// Object keys, numbers and booleans are left alone. Returns the new
    /// value and how many string leaves changed.
    pub fn redact_json(
        &self,
        value: &Value,
        exemptions: &ExemptionSet,
    ) -> Result<(Value, usize), RedactError> {
        let mut modified = 0;
        let redacted = self.redact_value(value, exemptions, &mut modified)?;
        Ok((redacted, modified))
    }

    fn redact_value(
        &self,
        value: &Value,
        exemptions: &ExemptionSet,
        modified: &mut usize,
    ) -> Result<Value, RedactError> {
        match value {
            Value::String(text) => {
                let redacted = self.redact(text, exemptions)?;
                if redacted != *text {
                    *modified += 1;
                }
                Ok(Value::String(redacted))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.redact_value(item, exemptions, modified))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(fields) => {
                let mut redacted = Map::with_capacity(fields.len());
                for (key, item) in fields {
                    redacted.insert(key.clone(), self.redact_value(item, exemptions, modified)?);
                }
                Ok(Value::Object(redacted))
            }
            // Other types: no processing
            other => Ok(other.clone()),
        }
    }
}
