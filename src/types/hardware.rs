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
use serde::Serialize;

/// The machine the curriculum is tuned for. A complete, flat record: every
/// field is required, and the hardware panel replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    pub laptop_model: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
    pub virtualization_support: String,
    pub optimization_level: String,
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            laptop_model: "HP Pavilion Gaming 15-cx0049ne".to_string(),
            cpu: "Intel i5-8300H".to_string(),
            gpu: "NVIDIA GTX 1050 Ti".to_string(),
            ram: "32GB (Upgraded from 8GB)".to_string(),
            storage: "SSD/HDD Hybrid".to_string(),
            virtualization_support: "Intel VT-x".to_string(),
            optimization_level: "Gaming Performance".to_string(),
        }
    }
}
