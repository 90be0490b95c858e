// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Email addresses exempted from redaction

use std::collections::HashSet;

/// Case-insensitive set of full email addresses left unredacted
///
/// Members are stored lowercased. Matching is exact on the whole address:
/// `"company.com"` does not exempt `"anyone@company.com"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionSet {
    lowered: HashSet<String>,
}

impl ExemptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exempt a single address, e.g. a message's own sender
    pub fn single(address: &str) -> Self {
        let mut set = Self::new();
        set.insert(address);
        set
    }

    pub fn insert(&mut self, address: &str) {
        self.lowered.insert(address.to_lowercase());
    }

    /// Whether a matched email should be kept verbatim
    pub fn is_exempt(&self, matched: &str) -> bool {
        !self.lowered.is_empty() && self.lowered.contains(&matched.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lowered.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExemptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.insert(address.as_ref());
        }
        set
    }
}
