// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII redaction engine for the email summarizer
// Optional PyO3 bindings behind the `python` feature

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod pii_redactor;

/// Python module: redactor_rust
///
/// Redacts PII from message text before it leaves for a summarization endpoint.
///
/// # Examples
///
/// ```python
/// from redactor_rust import PIIRedactorRust, redact
///
/// redact("From SENDER@COMPANY.COM to recipient@other.com", {"sender@company.com"})
/// # 'From SENDER@COMPANY.COM to [EMAIL REDACTED]'
///
/// redactor = PIIRedactorRust({"body_char_limit": 8000})
/// subject, body, truncated = redactor.redact_message(subject, body, sender)
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn redactor_rust(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<pii_redactor::python::PIIRedactorRust>()?;
    m.add_function(wrap_pyfunction!(pii_redactor::python::redact, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "PII redaction engine for the email summarizer")?;

    Ok(())
}
