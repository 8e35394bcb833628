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

//! The code template catalogue. Bodies live as plain text files next to
//! this module and are embedded at compile time.

use crate::types::difficulty::Difficulty;
use crate::types::template::CodeTemplate;
use crate::types::template::TemplateKind;

pub fn code_templates() -> &'static [CodeTemplate] {
    &CODE_TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static CodeTemplate> {
    CODE_TEMPLATES.iter().find(|template| template.id == id)
}

const CODE_TEMPLATES: [CodeTemplate; 6] = [
    CodeTemplate {
        id: "xen-install",
        title: "Xen Hypervisor Installation Script",
        description: "Complete installation script for Ubuntu Server",
        difficulty: Difficulty::Beginner,
        kind: TemplateKind::Script,
        code: include_str!("templates/xen-install.sh"),
    },
    CodeTemplate {
        id: "vm-config",
        title: "VM Configuration File Generator",
        description: "Create optimized VM configs for your hardware",
        difficulty: Difficulty::Intermediate,
        kind: TemplateKind::Config,
        code: include_str!("templates/vm-config.cfg"),
    },
    CodeTemplate {
        id: "performance-script",
        title: "Performance Optimization Script",
        description: "Optimize Xen performance for gaming hardware",
        difficulty: Difficulty::Advanced,
        kind: TemplateKind::Script,
        code: include_str!("templates/performance-script.sh"),
    },
    CodeTemplate {
        id: "gpu-passthrough",
        title: "NVIDIA GTX 1050 Ti Passthrough Setup",
        description: "Configure GPU passthrough for gaming VMs",
        difficulty: Difficulty::Expert,
        kind: TemplateKind::Script,
        code: include_str!("templates/gpu-passthrough.sh"),
    },
    CodeTemplate {
        id: "domain-config",
        title: "Domain Configuration Templates",
        description: "Pre-configured domain templates for common scenarios",
        difficulty: Difficulty::Intermediate,
        kind: TemplateKind::Config,
        code: include_str!("templates/domain-config.cfg"),
    },
    CodeTemplate {
        id: "monitoring-script",
        title: "System Monitoring & Diagnostics",
        description: "Monitor Xen performance and troubleshoot issues",
        difficulty: Difficulty::Intermediate,
        kind: TemplateKind::Script,
        code: include_str!("templates/monitoring-script.sh"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_by_id() {
        assert!(template_by_id("xen-install").is_some());
        assert!(template_by_id("vm-config").is_some());
        assert!(template_by_id("bogus").is_none());
    }

    #[test]
    fn test_template_ids_are_unique() {
        for (i, a) in CODE_TEMPLATES.iter().enumerate() {
            for b in &CODE_TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_script_and_config_kinds() {
        assert_eq!(template_by_id("xen-install").unwrap().kind, TemplateKind::Script);
        assert_eq!(template_by_id("vm-config").unwrap().kind, TemplateKind::Config);
        assert_eq!(template_by_id("domain-config").unwrap().kind, TemplateKind::Config);
    }

    #[test]
    fn test_bodies_are_nonempty() {
        for template in code_templates() {
            assert!(!template.code.is_empty());
        }
    }
}
