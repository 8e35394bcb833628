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

//! The `generate` command: render a code template to a file or stdout
//! without starting the server.

use crate::codegen;
use crate::error::fail;
use crate::error::Fallible;
use crate::types::hardware::HardwareProfile;
use crate::types::template::Customizations;

pub fn generate_template(
    template_id: &str,
    custom: &Customizations,
    output: Option<String>,
) -> Fallible<()> {
    let hardware = HardwareProfile::default();
    let Some(rendered) = codegen::render(template_id, custom, &hardware) else {
        return fail("unknown template id.");
    };
    match output {
        Some(path) => {
            std::fs::write(&path, &rendered.text)?;
            println!("wrote {path}");
        }
        None => {
            print!("{}", rendered.text);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_generate_to_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.cfg");
        let path = path.to_str().unwrap().to_string();
        generate_template("vm-config", &Customizations::default(), Some(path.clone()))?;
        let text = std::fs::read_to_string(&path)?;
        assert!(text.contains("xen-test-vm"));
        Ok(())
    }

    #[test]
    fn test_generate_unknown_template() {
        let result = generate_template("bogus", &Customizations::default(), None);
        assert_eq!(result.unwrap_err().to_string(), "error: unknown template id.");
    }
}
