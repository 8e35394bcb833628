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

use serde::Deserialize;

use crate::types::difficulty::Difficulty;

/// Whether a template body is a shell script or a Xen domain config.
/// Decides the extension of the downloaded file.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TemplateKind {
    Script,
    Config,
}

impl TemplateKind {
    pub fn extension(self) -> &'static str {
        match self {
            TemplateKind::Script => "sh",
            TemplateKind::Config => "cfg",
        }
    }
}

/// A fixed body of script/config text with `{{placeholder}}` markers
/// resolved by literal substitution at render time.
pub struct CodeTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub kind: TemplateKind,
    pub code: &'static str,
}

/// User-supplied fields substituted into a template.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    pub vm_name: String,
    pub memory: String,
    pub vcpus: String,
    pub disk_size: String,
    pub network_type: String,
}

impl Default for Customizations {
    fn default() -> Self {
        Self {
            vm_name: "xen-test-vm".to_string(),
            memory: "8192".to_string(),
            vcpus: "2".to_string(),
            disk_size: "20GB".to_string(),
            network_type: "NAT".to_string(),
        }
    }
}
