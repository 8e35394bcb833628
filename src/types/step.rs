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

use crate::types::difficulty::Difficulty;

/// One unit of the learning curriculum. Step ids are contiguous and start
/// at 1; access gating relies on this.
pub struct LearningStep {
    pub id: u32,
    pub title: &'static str,
    pub phase: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
    pub content: StepContent,
}

/// The teaching material attached to a step. Theory and practical are
/// markdown; commands and validation are rendered verbatim.
pub struct StepContent {
    pub theory: &'static str,
    pub practical: &'static str,
    pub commands: &'static [&'static str],
    pub validation: &'static [&'static str],
}
