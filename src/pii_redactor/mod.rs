// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII Redactor - Rust Implementation
//
// Deterministic, category-by-category PII redaction:
// - Ordered pattern catalog compiled once and shared read-only
// - Linear-time regex matching with explicit adjacency guards
// - Case-insensitive email exemptions for known senders

pub mod config;
pub mod error;
pub mod exemptions;
pub mod json;
pub mod markers;
pub mod message;
pub mod patterns;
#[cfg(feature = "python")]
pub mod python;
pub mod redactor;

pub use config::{PiiCategory, RedactorConfig};
pub use error::RedactError;
pub use exemptions::ExemptionSet;
pub use markers::marker;
pub use message::RedactedMessage;
pub use redactor::{default_redactor, redact, Detection, Redaction, Redactor};
