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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::hardware::HardwareProfile;

pub const CONFIG_FILE: &str = "xenguide.toml";
pub const DEFAULT_PORT: u16 = 8000;

/// Optional per-directory configuration. Unlike the progress record, a
/// config file was written by hand, so a malformed one is reported as an
/// error instead of silently discarded.
#[derive(Default, Deserialize)]
pub struct Config {
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
    pub hardware: Option<HardwareProfile>,
}

impl Config {
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_missing_config_is_default() -> Fallible<()> {
        let dir = tempdir()?;
        let config = Config::load(dir.path())?;
        assert!(config.port.is_none());
        assert!(config.open_browser.is_none());
        assert!(config.hardware.is_none());
        Ok(())
    }

    #[test]
    fn test_load_config() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "port = 9100\nopen_browser = false\n",
        )?;
        let config = Config::load(dir.path())?;
        assert_eq!(config.port, Some(9100));
        assert_eq!(config.open_browser, Some(false));
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_an_error() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join(CONFIG_FILE), "port = \"not a port")?;
        assert!(Config::load(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_hardware_override() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[hardware]
laptopModel = "ThinkPad P52"
cpu = "Intel i7-8750H"
gpu = "NVIDIA Quadro P1000"
ram = "64GB"
storage = "2TB NVMe"
virtualizationSupport = "Intel VT-x"
optimizationLevel = "Workstation"
"#,
        )?;
        let config = Config::load(dir.path())?;
        let hardware = config.hardware.expect("hardware table should parse");
        assert_eq!(hardware.laptop_model, "ThinkPad P52");
        assert_eq!(hardware.ram, "64GB");
        Ok(())
    }
}
