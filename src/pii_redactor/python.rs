// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the PII redactor

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::collections::HashSet;

use super::config::RedactorConfig;
use super::exemptions::ExemptionSet;
use super::redactor::{self, Redactor};

fn exemptions_from(preserve: Option<HashSet<String>>) -> ExemptionSet {
    preserve.unwrap_or_default().into_iter().collect()
}

/// Redact PII with the default catalog
///
/// # Example (Python)
/// ```python
/// from redactor_rust import redact
///
/// redact("Mail SENDER@COMPANY.COM or call 555-123-4567", {"sender@company.com"})
/// # 'Mail SENDER@COMPANY.COM or call [PHONE REDACTED]'
/// ```
#[pyfunction]
#[pyo3(signature = (text, preserve = None))]
pub fn redact(text: &str, preserve: Option<HashSet<String>>) -> String {
    redactor::redact(text, &exemptions_from(preserve))
}

/// Configurable redactor exposed to Python
///
/// # Example (Python)
/// ```python
/// from redactor_rust import PIIRedactorRust
///
/// redactor = PIIRedactorRust({"max_input_bytes": 65536})
/// redactor.redact("SSN 123-45-6789")        # 'SSN [SSN REDACTED]'
/// redactor.detect("SSN 123-45-6789")        # [{'category': 'ssn', 'value': '123-45-6789'}]
/// ```
#[pyclass]
pub struct PIIRedactorRust {
    inner: Redactor,
}

#[pymethods]
impl PIIRedactorRust {
    /// Create a redactor
    ///
    /// # Configuration Keys
    /// * `disabled_categories` (list[str]): categories to skip
    /// * `max_input_bytes` (int | None): reject longer inputs with ValueError
    /// * `body_char_limit` (int | None): body budget for `redact_message`
    /// * `log_redactions` (bool): emit tracing events
    #[new]
    #[pyo3(signature = (config = None))]
    pub fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config {
            Some(dict) => RedactorConfig::from_py_dict(dict)?,
            None => RedactorConfig::default(),
        };
        Ok(Self {
            inner: Redactor::new(config)?,
        })
    }

    #[pyo3(signature = (text, preserve = None))]
    pub fn redact(&self, text: &str, preserve: Option<HashSet<String>>) -> PyResult<String> {
        Ok(self.inner.redact(text, &exemptions_from(preserve))?)
    }

    /// List replaced spans as `{"category": str, "value": str}` dicts
    #[pyo3(signature = (text, preserve = None))]
    pub fn detect(
        &self,
        py: Python<'_>,
        text: &str,
        preserve: Option<HashSet<String>>,
    ) -> PyResult<Py<PyAny>> {
        let report = self
            .inner
            .redact_with_report(text, &exemptions_from(preserve))?;

        let py_list = PyList::empty(py);
        for detection in report.detections {
            let item_dict = PyDict::new(py);
            item_dict.set_item("category", detection.category.as_str())?;
            item_dict.set_item("value", detection.value)?;
            py_list.append(item_dict)?;
        }

        Ok(py_list.into_any().unbind())
    }

    /// Redact subject and body, exempting the sender
    ///
    /// Returns `(subject, body, truncated)`.
    pub fn redact_message(
        &self,
        subject: &str,
        body: &str,
        sender: &str,
    ) -> PyResult<(String, String, bool)> {
        let message = self.inner.redact_message(subject, body, sender)?;
        Ok((message.subject, message.body, message.truncated))
    }
}
