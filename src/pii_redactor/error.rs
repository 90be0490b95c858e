// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error type for the PII redactor

use thiserror::Error;

/// Failures surfaced by configurable redaction entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedactError {
    #[error("input of {len} bytes exceeds the redaction limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    #[error("invalid redactor configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "python")]
impl From<RedactError> for pyo3::PyErr {
    fn from(err: RedactError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
