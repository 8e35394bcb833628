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

/// A titled group of documentation entries.
pub struct DocSection {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    pub entries: &'static [DocEntry],
}

/// One knowledge-base article. The body is markdown.
pub struct DocEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

impl DocEntry {
    /// Case-insensitive search over the title and description.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
