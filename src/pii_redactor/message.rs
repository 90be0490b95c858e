// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Per-message redaction: subject and body, with the sender exempted

use serde::Serialize;

use super::error::RedactError;
use super::exemptions::ExemptionSet;
use super::redactor::Redactor;

/// Appended to a body cut down to the configured budget
pub const TRUNCATION_NOTICE: &str = "\n\n[... email truncated for length ...]";

/// Message fields safe to hand to a third-party summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedMessage {
    pub subject: String,
    pub body: String,
    /// Body exceeded `body_char_limit` and was cut
    pub truncated: bool,
}

impl Redactor {
    /// Redact a message's subject and body
    ///
    /// The sender's own address is the only exemption, so the sender can
    /// still be attributed while every other address is redacted.
    pub fn redact_message(
        &self,
        subject: &str,
        body: &str,
        sender: &str,
    ) -> Result<RedactedMessage, RedactError> {
        let exemptions = ExemptionSet::single(sender);
        let subject = self.redact(subject, &exemptions)?;
        let body = self.redact(body, &exemptions)?;

        let (body, truncated) = match self.config().body_char_limit {
            Some(limit) => truncate_chars(body, limit),
            None => (body, false),
        };

        Ok(RedactedMessage {
            subject,
            body,
            truncated,
        })
    }
}

/// Keep the first `limit` characters, marking the cut
fn truncate_chars(mut text: String, limit: usize) -> (String, bool) {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            text.truncate(cut);
            text.push_str(TRUNCATION_NOTICE);
            (text, true)
        }
        None => (text, false),
    }
}
