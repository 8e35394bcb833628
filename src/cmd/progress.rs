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

//! The `progress` command: print a JSON summary of saved progress.

use std::path::Path;

use serde::Serialize;

use crate::content;
use crate::error::Fallible;
use crate::progress::ProgressStore;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressSummary {
    current_step: u32,
    completed_steps: Vec<u32>,
    total_steps: u32,
    percent_complete: f64,
    phase: &'static str,
    next_milestone: Option<&'static str>,
}

pub fn print_progress(directory: &Path) -> Fallible<()> {
    let store = ProgressStore::load(directory);
    let progress = store.get();
    let summary = ProgressSummary {
        current_step: progress.current_step,
        completed_steps: progress.completed_steps.clone(),
        total_steps: progress.total_steps,
        percent_complete: progress.percent_complete(),
        phase: content::phase_for_step(progress.current_step).name,
        next_milestone: content::next_milestone(progress.current_step)
            .map(|milestone| milestone.title),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
