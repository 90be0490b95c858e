// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Placeholder markers substituted for each PII category

use super::config::PiiCategory;

/// Replacement text for a category
///
/// Markers never match any catalog pattern, which keeps redaction idempotent.
pub fn marker(category: PiiCategory) -> &'static str {
    match category {
        PiiCategory::CreditCard => "[CARD REDACTED]",
        PiiCategory::Ssn => "[SSN REDACTED]",
        PiiCategory::BankAccount => "[ACCOUNT REDACTED]",
        PiiCategory::RoutingNumber => "[ROUTING REDACTED]",
        PiiCategory::Email => "[EMAIL REDACTED]",
        PiiCategory::Phone => "[PHONE REDACTED]",
        PiiCategory::IpAddress => "[IP REDACTED]",
        PiiCategory::StreetAddress => "[ADDRESS REDACTED]",
        PiiCategory::ZipCode => "[ZIP REDACTED]",
        PiiCategory::Dob => "[DOB REDACTED]",
        PiiCategory::DriversLicense => "[LICENSE REDACTED]",
        PiiCategory::Passport => "[PASSPORT REDACTED]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_markers_are_distinct() {
        let markers: HashSet<_> = PiiCategory::ALL.iter().map(|c| marker(*c)).collect();
        assert_eq!(markers.len(), PiiCategory::ALL.len());
    }

    #[test]
    fn test_marker_shape() {
        for category in PiiCategory::ALL {
            let text = marker(category);
            assert!(text.starts_with('['));
            assert!(text.ends_with(" REDACTED]"));
            assert!(!text.chars().any(|c| c.is_ascii_digit() || c == '@'));
        }
    }

    #[test]
    fn test_known_markers() {
        assert_eq!(marker(PiiCategory::Email), "[EMAIL REDACTED]");
        assert_eq!(marker(PiiCategory::CreditCard), "[CARD REDACTED]");
        assert_eq!(marker(PiiCategory::StreetAddress), "[ADDRESS REDACTED]");
    }
}
