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

use crate::content;
use crate::types::hardware::HardwareProfile;
use crate::types::template::Customizations;

/// A template body with every placeholder substituted, plus the filename
/// offered when the user downloads it.
pub struct RenderedTemplate {
    pub text: String,
    pub filename: String,
}

/// Render the template with the given id. Returns `None` when no such
/// template exists; callers show "no output" rather than an error page.
pub fn render(
    template_id: &str,
    custom: &Customizations,
    hardware: &HardwareProfile,
) -> Option<RenderedTemplate> {
    let template = content::template_by_id(template_id)?;
    let text = substitute(template.code, custom, hardware);
    let filename = format!(
        "xen-{}-{}.{}",
        template.id,
        custom.vm_name,
        template.kind.extension()
    );
    Some(RenderedTemplate { text, filename })
}

/// Literal placeholder substitution. Markers are replaced wherever they
/// appear; there is no escaping and no recursion, since the substituted
/// values are never themselves scanned for markers.
fn substitute(code: &str, custom: &Customizations, hardware: &HardwareProfile) -> String {
    code.replace("{{vm_name}}", &custom.vm_name)
        .replace("{{memory}}", &custom.memory)
        .replace("{{vcpus}}", &custom.vcpus)
        .replace("{{disk_size}}", &custom.disk_size)
        .replace("{{network_type}}", &custom.network_type)
        .replace("{{cpu}}", &hardware.cpu)
        .replace("{{ram}}", &hardware.ram)
        .replace("{{gpu}}", &hardware.gpu)
        .replace("{{laptop_model}}", &hardware.laptop_model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> Customizations {
        Customizations {
            vm_name: "test-vm".to_string(),
            memory: "4096".to_string(),
            vcpus: "2".to_string(),
            disk_size: "20GB".to_string(),
            network_type: "NAT".to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_customizations() {
        let rendered = render("vm-config", &custom(), &HardwareProfile::default()).unwrap();
        assert!(rendered.text.contains("test-vm"));
        assert!(rendered.text.contains("4096"));
        assert!(!rendered.text.contains("{{"));
    }

    #[test]
    fn test_render_substitutes_hardware() {
        let rendered = render("xen-install", &custom(), &HardwareProfile::default()).unwrap();
        assert!(rendered.text.contains("HP Pavilion Gaming 15-cx0049ne"));
        assert!(rendered.text.contains("Intel i5-8300H"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let hardware = HardwareProfile::default();
        let first = render("vm-config", &custom(), &hardware).unwrap();
        let second = render("vm-config", &custom(), &hardware).unwrap();
        assert_eq!(first.text, second.text);
        assert_eq!(first.filename, second.filename);
    }

    #[test]
    fn test_render_unknown_template() {
        assert!(render("bogus", &custom(), &HardwareProfile::default()).is_none());
    }

    #[test]
    fn test_filename_extension_follows_kind() {
        let hardware = HardwareProfile::default();
        let script = render("xen-install", &custom(), &hardware).unwrap();
        assert_eq!(script.filename, "xen-xen-install-test-vm.sh");
        let config = render("vm-config", &custom(), &hardware).unwrap();
        assert_eq!(config.filename, "xen-vm-config-test-vm.cfg");
    }

    #[test]
    fn test_every_template_renders_clean() {
        let hardware = HardwareProfile::default();
        for template in content::code_templates() {
            let rendered = render(template.id, &custom(), &hardware).unwrap();
            assert!(!rendered.text.contains("{{"), "unresolved marker in {}", template.id);
        }
    }
}
