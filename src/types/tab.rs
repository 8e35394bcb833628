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

/// The closed set of panels. Navigation elsewhere dispatches on this enum
/// exhaustively, so adding a panel without wiring it up fails to compile.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Dashboard,
    Learning,
    Generator,
    Hardware,
    Docs,
    Troubleshooting,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Learning,
        Tab::Generator,
        Tab::Hardware,
        Tab::Docs,
        Tab::Troubleshooting,
    ];

    /// Recognize a tab identifier. Unknown identifiers yield `None`; the
    /// caller decides the fallback (the router uses the dashboard).
    pub fn parse(identifier: &str) -> Option<Tab> {
        match identifier {
            "dashboard" => Some(Tab::Dashboard),
            "learning" => Some(Tab::Learning),
            "generator" => Some(Tab::Generator),
            "hardware" => Some(Tab::Hardware),
            "docs" => Some(Tab::Docs),
            "troubleshooting" => Some(Tab::Troubleshooting),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Learning => "learning",
            Tab::Generator => "generator",
            Tab::Hardware => "hardware",
            Tab::Docs => "docs",
            Tab::Troubleshooting => "troubleshooting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Learning => "Learning Path",
            Tab::Generator => "Code Generator",
            Tab::Hardware => "Hardware Profile",
            Tab::Docs => "Documentation",
            Tab::Troubleshooting => "Troubleshooting",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Learning => "📚",
            Tab::Generator => "⚡",
            Tab::Hardware => "🖥️",
            Tab::Docs => "📖",
            Tab::Troubleshooting => "🔧",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Tab::Dashboard => "Overview & Progress",
            Tab::Learning => "Step-by-Step Guide",
            Tab::Generator => "Hardware-Tuned Scripts",
            Tab::Hardware => "HP Pavilion Optimization",
            Tab::Docs => "Complete Reference",
            Tab::Troubleshooting => "Issues & Solutions",
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_all_tabs() {
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_identifiers() {
        assert_eq!(Tab::parse("bogus"), None);
        assert_eq!(Tab::parse(""), None);
        assert_eq!(Tab::parse("Dashboard"), None);
        assert_eq!(Tab::parse("dashboard "), None);
    }
}
