// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the PII redactor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RedactError;

/// PII categories, in catalog (precedence) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    CreditCard,
    Ssn,
    BankAccount,
    RoutingNumber,
    Email,
    Phone,
    IpAddress,
    StreetAddress,
    ZipCode,
    Dob,
    DriversLicense,
    Passport,
}

impl PiiCategory {
    /// Every category, earliest-evaluated first
    pub const ALL: [PiiCategory; 12] = [
        PiiCategory::CreditCard,
        PiiCategory::Ssn,
        PiiCategory::BankAccount,
        PiiCategory::RoutingNumber,
        PiiCategory::Email,
        PiiCategory::Phone,
        PiiCategory::IpAddress,
        PiiCategory::StreetAddress,
        PiiCategory::ZipCode,
        PiiCategory::Dob,
        PiiCategory::DriversLicense,
        PiiCategory::Passport,
    ];

    /// Stable snake_case name, as used in config and Python dicts
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiCategory::CreditCard => "credit_card",
            PiiCategory::Ssn => "ssn",
            PiiCategory::BankAccount => "bank_account",
            PiiCategory::RoutingNumber => "routing_number",
            PiiCategory::Email => "email",
            PiiCategory::Phone => "phone",
            PiiCategory::IpAddress => "ip_address",
            PiiCategory::StreetAddress => "street_address",
            PiiCategory::ZipCode => "zip_code",
            PiiCategory::Dob => "dob",
            PiiCategory::DriversLicense => "drivers_license",
            PiiCategory::Passport => "passport",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiCategory {
    type Err = RedactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PiiCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RedactError::InvalidConfig(format!("unknown PII category '{}'", s)))
    }
}

/// Default message body budget, in characters
pub const DEFAULT_BODY_CHAR_LIMIT: usize = 8000;

/// Configuration for a [`Redactor`](super::Redactor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactorConfig {
    /// Categories skipped by the pass; the rest keep catalog order
    pub disabled_categories: Vec<PiiCategory>,

    /// Reject inputs longer than this many bytes
    pub max_input_bytes: Option<usize>,

    /// Truncate redacted message bodies to this many characters
    pub body_char_limit: Option<usize>,

    /// Emit a tracing event per redacted category
    pub log_redactions: bool,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            disabled_categories: Vec::new(),
            max_input_bytes: None,
            body_char_limit: Some(DEFAULT_BODY_CHAR_LIMIT),
            log_redactions: true,
        }
    }
}

impl RedactorConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, RedactError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RedactError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RedactError> {
        if self.max_input_bytes == Some(0) {
            return Err(RedactError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        if self.body_char_limit == Some(0) {
            return Err(RedactError::InvalidConfig(
                "body_char_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_enabled(&self, category: PiiCategory) -> bool {
        !self.disabled_categories.contains(&category)
    }
}

#[cfg(feature = "python")]
mod python_config {
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    use super::{PiiCategory, RedactorConfig};

    impl RedactorConfig {
        /// Extract configuration from a Python dict
        pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
            let mut config = Self::default();

            if let Some(value) = dict.get_item("disabled_categories")? {
                let names: Vec<String> = value.extract()?;
                config.disabled_categories = names
                    .iter()
                    .map(|name| name.parse::<PiiCategory>())
                    .collect::<Result<_, _>>()?;
            }
            if let Some(value) = dict.get_item("max_input_bytes")? {
                config.max_input_bytes = value.extract()?;
            }
            if let Some(value) = dict.get_item("body_char_limit")? {
                config.body_char_limit = value.extract()?;
            }
            if let Some(value) = dict.get_item("log_redactions")? {
                config.log_redactions = value.extract()?;
            }

            config.validate()?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(PiiCategory::CreditCard.as_str(), "credit_card");
        assert_eq!(PiiCategory::DriversLicense.as_str(), "drivers_license");
        assert_eq!(PiiCategory::Dob.to_string(), "dob");
    }

    #[test]
    fn test_category_parse() {
        for category in PiiCategory::ALL {
            assert_eq!(category.as_str().parse::<PiiCategory>().unwrap(), category);
        }
        assert!("medical_record".parse::<PiiCategory>().is_err());
    }

    #[test]
    fn test_all_is_sorted_by_precedence() {
        let mut sorted = PiiCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, PiiCategory::ALL);
    }

    #[test]
    fn test_default_config() {
        let config = RedactorConfig::default();
        assert!(config.disabled_categories.is_empty());
        assert_eq!(config.max_input_bytes, None);
        assert_eq!(config.body_char_limit, Some(8000));
        assert!(config.log_redactions);
        assert!(config.is_enabled(PiiCategory::Email));
    }

    #[test]
    fn test_from_json_partial() {
        let config = RedactorConfig::from_json(
            r#"{"disabled_categories": ["zip_code", "ip_address"], "max_input_bytes": 4096}"#,
        )
        .unwrap();
        assert!(!config.is_enabled(PiiCategory::ZipCode));
        assert!(!config.is_enabled(PiiCategory::IpAddress));
        assert!(config.is_enabled(PiiCategory::Phone));
        assert_eq!(config.max_input_bytes, Some(4096));
        assert_eq!(config.body_char_limit, Some(DEFAULT_BODY_CHAR_LIMIT));
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let err = RedactorConfig::from_json(r#"{"disabled_categories": ["aws_key"]}"#).unwrap_err();
        assert!(matches!(err, RedactError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let config = RedactorConfig {
            max_input_bytes: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RedactorConfig {
            body_char_limit: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
