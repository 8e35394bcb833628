// Copyright 2025 the xenguide authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

/// A named group of troubleshooting issues.
pub struct IssueCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    pub issues: &'static [TroubleshootingIssue],
}

pub struct TroubleshootingIssue {
    pub problem: &'static str,
    pub severity: Severity,
    pub symptoms: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub prevention: &'static str,
}

impl TroubleshootingIssue {
    /// Case-insensitive search over the problem title and symptoms.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.problem.to_lowercase().contains(&query)
            || self
                .symptoms
                .iter()
                .any(|symptom| symptom.to_lowercase().contains(&query))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Low => "badge-low",
            Severity::Medium => "badge-medium",
            Severity::High => "badge-high",
            Severity::Critical => "badge-critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE: TroubleshootingIssue = TroubleshootingIssue {
        problem: "Xen not appearing in GRUB menu",
        severity: Severity::High,
        symptoms: &["No Xen option in boot menu"],
        solutions: &["Update GRUB configuration: sudo update-grub"],
        prevention: "Always update GRUB after Xen installation",
    };

    #[test]
    fn test_matches_problem() {
        assert!(ISSUE.matches("grub"));
    }

    #[test]
    fn test_matches_symptom() {
        assert!(ISSUE.matches("boot menu"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(ISSUE.matches(""));
    }

    #[test]
    fn test_no_match() {
        assert!(!ISSUE.matches("network bridge"));
    }
}
