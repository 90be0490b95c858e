// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Ordered pattern catalog for PII redaction
// Catalog order is the only overlap tie-break: earlier categories claim text first

use once_cell::sync::Lazy;
use regex::{Match, Regex, RegexBuilder};

use super::config::PiiCategory;

/// Same class as `\d` in the patterns: any Unicode decimal digit
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\d\z").expect("digit class must compile"));

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4])))
}

/// Neighbouring characters that veto a match
///
/// The regex engine has no lookaround, so these are checked after each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyGuard {
    None,
    /// No decimal digit (any script) directly before or after
    Digit,
    /// No ASCII digit or hyphen directly before or after
    DigitOrHyphen,
}

impl AdjacencyGuard {
    fn blocks(self, c: char) -> bool {
        match self {
            AdjacencyGuard::None => false,
            AdjacencyGuard::Digit => is_decimal_digit(c),
            AdjacencyGuard::DigitOrHyphen => c.is_ascii_digit() || c == '-',
        }
    }

    /// Check the characters around `text[start..end]`
    pub fn admits(self, text: &str, start: usize, end: usize) -> bool {
        if self == AdjacencyGuard::None {
            return true;
        }
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(|c| self.blocks(c)) && !after.is_some_and(|c| self.blocks(c))
    }
}

/// Compiled catalog entry
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub category: PiiCategory,
    pub regex: Regex,
    pub case_insensitive: bool,
    pub guard: AdjacencyGuard,
}

impl PatternRule {
    /// Non-overlapping leftmost-first matches that pass the adjacency guard
    ///
    /// A rejected candidate only rules out its own start position; scanning
    /// retries one character later, so a guarded match is never skipped.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let mut found = Vec::new();
        let mut at = 0;

        while at <= text.len() {
            let Some(mat) = self.regex.find_at(text, at) else {
                break;
            };

            if mat.end() > mat.start() && self.guard.admits(text, mat.start(), mat.end()) {
                at = mat.end();
                found.push(mat);
            } else {
                at = mat.start() + text[mat.start()..].chars().next().map_or(1, char::len_utf8);
            }
        }

        found
    }
}

/// Pattern definition (category, pattern, case-insensitive, guard)
type PatternDef = (PiiCategory, &'static str, bool, AdjacencyGuard);

static PATTERN_DEFS: [PatternDef; 12] = [
    // 16 digits, checked before phone so the run is claimed whole
    (
        PiiCategory::CreditCard,
        r"\b\d{4}[-.\s]?\d{4}[-.\s]?\d{4}[-.\s]?\d{4}\b",
        false,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::Ssn,
        r"\b\d{3}[-.\s]\d{2}[-.\s]\d{4}\b",
        false,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::BankAccount,
        r"\b(?:account|acct)\.?\s*#?\s*\d{8,17}\b",
        true,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::RoutingNumber,
        r"\b(?:routing|ABA)\.?\s*#?\s*\d{9}\b",
        true,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        false,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::Phone,
        r"(?:\+?1[-.\s])?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}(?:\s*(?:ext|x|extension)\.?\s*\d+)?",
        false,
        AdjacencyGuard::Digit,
    ),
    (
        PiiCategory::IpAddress,
        r"\b(?:\d{1,3}\.){3}\d{1,3}\b",
        false,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::StreetAddress,
        r"\b\d+\s+[A-Za-z0-9\s,]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct|Circle|Cir|Place|Pl)\.?\s*(?:#\s*\d+|Suite\s*\d+|Apt\.?\s*\d+)?\b",
        true,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::ZipCode,
        r"\b\d{5}(?:-\d{4})?\b",
        false,
        AdjacencyGuard::DigitOrHyphen,
    ),
    (
        PiiCategory::Dob,
        r"\b(?:DOB|Date of Birth|Birthday|Born)[:\s]+\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b",
        true,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::DriversLicense,
        r"\b(?:DL|Driver'?s?\s*License|License\s*#?)\.?\s*#?\s*[A-Z0-9]{6,15}\b",
        true,
        AdjacencyGuard::None,
    ),
    (
        PiiCategory::Passport,
        r"\b(?:Passport)\.?\s*#?\s*[A-Z0-9]{6,12}\b",
        true,
        AdjacencyGuard::None,
    ),
];

/// Compile every built-in pattern, in catalog order
pub fn compile_catalog() -> Result<Vec<PatternRule>, regex::Error> {
    PATTERN_DEFS
        .iter()
        .map(|&(category, pattern, case_insensitive, guard)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok::<_, regex::Error>(PatternRule {
                category,
                regex,
                case_insensitive,
                guard,
            })
        })
        .collect()
}

// Built-in patterns are literals covered by tests; a failure here is a build defect.
static CATALOG: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_catalog().expect("built-in PII patterns must compile"));

/// Process-wide catalog, shared read-only
pub fn catalog() -> &'static [PatternRule] {
    &CATALOG
}
