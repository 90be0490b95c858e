// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sequential, category-by-category redaction pass

use once_cell::sync::Lazy;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

use super::config::{PiiCategory, RedactorConfig};
use super::error::RedactError;
use super::exemptions::ExemptionSet;
use super::markers::marker;
use super::patterns::{catalog, PatternRule};

/// A span replaced by the pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub category: PiiCategory,
    pub value: String,
}

/// Redacted text plus what was taken out of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redaction {
    pub text: String,
    /// Replaced spans, in pass order then position
    pub detections: Vec<Detection>,
    /// Exempt emails kept verbatim
    pub preserved: usize,
}

impl Redaction {
    pub fn count(&self, category: PiiCategory) -> usize {
        self.detections
            .iter()
            .filter(|d| d.category == category)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.detections.is_empty()
    }
}

/// Outcome of one rule over the working text
struct RulePass {
    text: Option<String>,
    redacted: usize,
    preserved: usize,
    detections: Vec<Detection>,
}

/// PII redaction engine
///
/// Holds the enabled slice of the process-wide catalog; carries no per-call state.
#[derive(Debug, Clone)]
pub struct Redactor {
    config: RedactorConfig,
    rules: Vec<&'static PatternRule>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::from_valid_config(RedactorConfig::default())
    }
}

impl Redactor {
    /// Build a redactor, validating the configuration
    pub fn new(config: RedactorConfig) -> Result<Self, RedactError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RedactorConfig) -> Self {
        let rules = catalog()
            .iter()
            .filter(|rule| config.is_enabled(rule.category))
            .collect();
        Self { config, rules }
    }

    pub fn config(&self) -> &RedactorConfig {
        &self.config
    }

    /// Categories this redactor applies, in evaluation order
    pub fn categories(&self) -> impl Iterator<Item = PiiCategory> + '_ {
        self.rules.iter().map(|rule| rule.category)
    }

    /// Redact `text`, keeping emails listed in `exemptions`
    pub fn redact(&self, text: &str, exemptions: &ExemptionSet) -> Result<String, RedactError> {
        self.check_size(text)?;
        Ok(self.fold(text, exemptions, false).text)
    }

    /// Redact `text` and report every replaced span
    pub fn redact_with_report(
        &self,
        text: &str,
        exemptions: &ExemptionSet,
    ) -> Result<Redaction, RedactError> {
        self.check_size(text)?;
        Ok(self.fold(text, exemptions, true))
    }

    pub(crate) fn check_size(&self, text: &str) -> Result<(), RedactError> {
        match self.config.max_input_bytes {
            Some(limit) if text.len() > limit => {
                warn!(len = text.len(), limit, "input rejected by redaction size limit");
                Err(RedactError::InputTooLarge {
                    len: text.len(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }

    /// Thread the working text through every enabled rule, in catalog order
    pub(crate) fn fold(&self, text: &str, exemptions: &ExemptionSet, report: bool) -> Redaction {
        let mut working: Cow<'_, str> = Cow::Borrowed(text);
        let mut detections = Vec::new();
        let mut preserved = 0;

        for rule in &self.rules {
            let pass = apply_rule(rule, &working, exemptions, report);

            if self.config.log_redactions && (pass.redacted > 0 || pass.preserved > 0) {
                debug!(
                    category = rule.category.as_str(),
                    redacted = pass.redacted,
                    preserved = pass.preserved,
                    "redacted PII category"
                );
            }

            preserved += pass.preserved;
            detections.extend(pass.detections);
            if let Some(next) = pass.text {
                working = Cow::Owned(next);
            }
        }

        Redaction {
            text: working.into_owned(),
            detections,
            preserved,
        }
    }
}

/// Replace every match of one rule; `text: None` means nothing changed
fn apply_rule(
    rule: &PatternRule,
    text: &str,
    exemptions: &ExemptionSet,
    report: bool,
) -> RulePass {
    let mut pass = RulePass {
        text: None,
        redacted: 0,
        preserved: 0,
        detections: Vec::new(),
    };

    let matches = rule.find_all(text);
    if matches.is_empty() {
        return pass;
    }

    let replacement = marker(rule.category);
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for mat in matches {
        result.push_str(&text[last..mat.start()]);

        if rule.category == PiiCategory::Email && exemptions.is_exempt(mat.as_str()) {
            result.push_str(mat.as_str());
            pass.preserved += 1;
        } else {
            result.push_str(replacement);
            pass.redacted += 1;
            if report {
                pass.detections.push(Detection {
                    category: rule.category,
                    value: mat.as_str().to_string(),
                });
            }
        }

        last = mat.end();
    }
    result.push_str(&text[last..]);

    // Only exempt emails matched: the working text is unchanged
    if pass.redacted > 0 {
        pass.text = Some(result);
    }
    pass
}

static DEFAULT_REDACTOR: Lazy<Redactor> = Lazy::new(Redactor::default);

/// Redact PII with the built-in catalog and no input ceiling
///
/// `preserve` exempts full email addresses, case-insensitively; it has no
/// effect on any other category.
///
/// ```
/// use redactor_rust::pii_redactor::{redact, ExemptionSet};
///
/// let text = "From SENDER@COMPANY.COM to recipient@other.com";
/// let redacted = redact(text, &ExemptionSet::single("sender@company.com"));
/// assert_eq!(redacted, "From SENDER@COMPANY.COM to [EMAIL REDACTED]");
/// ```
pub fn redact(text: &str, preserve: &ExemptionSet) -> String {
    DEFAULT_REDACTOR.fold(text, preserve, false).text
}

/// The shared default redactor
pub fn default_redactor() -> &'static Redactor {
    &DEFAULT_REDACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> ExemptionSet {
        ExemptionSet::new()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(redact("", &none()), "");
    }

    #[test]
    fn test_clean_text_is_identical() {
        let text = "Hello, this is a regular email about the project status.";
        assert_eq!(redact(text, &none()), text);
    }

    #[test]
    fn test_card_is_not_a_phone() {
        assert_eq!(redact("4111-1111-1111-1111", &none()), "[CARD REDACTED]");
    }

    #[test]
    fn test_card_claims_digits_before_bank_account() {
        assert_eq!(
            redact("acct 1234567890123456", &none()),
            "acct [CARD REDACTED]"
        );
    }

    #[test]
    fn test_license_claims_span_before_passport() {
        assert_eq!(
            redact("Passport License #AB123456", &none()),
            "Passport [LICENSE REDACTED]"
        );
    }

    #[test]
    fn test_report_lists_detections_in_pass_order() {
        let redactor = Redactor::default();
        let report = redactor
            .redact_with_report("call 555-123-4567 or mail a@b.com", &none())
            .unwrap();

        assert_eq!(report.text, "call [PHONE REDACTED] or mail [EMAIL REDACTED]");
        assert_eq!(
            report.detections,
            vec![
                Detection {
                    category: PiiCategory::Email,
                    value: "a@b.com".to_string()
                },
                Detection {
                    category: PiiCategory::Phone,
                    value: "555-123-4567".to_string()
                },
            ]
        );
        assert_eq!(report.count(PiiCategory::Phone), 1);
        assert_eq!(report.preserved, 0);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_counts_preserved_emails() {
        let redactor = Redactor::default();
        let report = redactor
            .redact_with_report("a@b.com and A@B.COM", &ExemptionSet::single("a@b.com"))
            .unwrap();
        assert_eq!(report.text, "a@b.com and A@B.COM");
        assert_eq!(report.preserved, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_disabled_category_is_skipped() {
        let redactor = Redactor::new(RedactorConfig {
            disabled_categories: vec![PiiCategory::Email],
            ..Default::default()
        })
        .unwrap();

        assert!(!redactor.categories().any(|c| c == PiiCategory::Email));
        assert_eq!(
            redactor.redact("mail a@b.com, ZIP 12345", &none()).unwrap(),
            "mail a@b.com, ZIP [ZIP REDACTED]"
        );
    }

    #[test]
    fn test_input_ceiling() {
        let redactor = Redactor::new(RedactorConfig {
            max_input_bytes: Some(8),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(redactor.redact("12345", &none()).unwrap(), "[ZIP REDACTED]");
        assert_eq!(
            redactor.redact("123456789", &none()),
            Err(RedactError::InputTooLarge { len: 9, limit: 8 })
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Redactor::new(RedactorConfig {
            max_input_bytes: Some(0),
            ..Default::default()
        });
        assert!(matches!(result, Err(RedactError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_redactor_covers_all_categories() {
        let categories: Vec<_> = default_redactor().categories().collect();
        assert_eq!(categories, PiiCategory::ALL.to_vec());
    }
}
