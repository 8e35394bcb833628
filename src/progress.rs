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

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;

/// Number of steps in the curriculum.
pub const TOTAL_STEPS: u32 = 100;

pub const PROGRESS_FILE: &str = "progress.json";

/// The learner's position in the curriculum. `current_step` is the highest
/// unlocked step pointer; it only ever moves forward, and only when a step
/// is marked complete. `completed_steps` preserves insertion order and
/// holds no duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_step: u32,
    pub completed_steps: Vec<u32>,
    pub total_steps: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_step: 0,
            completed_steps: Vec::new(),
            total_steps: TOTAL_STEPS,
        }
    }
}

/// Every mutation of the progress record goes through one of these.
#[derive(Clone, Copy, Debug)]
pub enum ProgressAction {
    SetStepCompletion { step: u32, completed: bool },
}

impl Progress {
    /// Pure state transition. Persistence is the store's concern.
    pub fn apply(&self, action: ProgressAction) -> Progress {
        match action {
            ProgressAction::SetStepCompletion { step, completed } => {
                self.with_step_completion(step, completed)
            }
        }
    }

    fn with_step_completion(&self, step: u32, completed: bool) -> Progress {
        let mut next = self.clone();
        if completed {
            if step < 1 || step > self.total_steps {
                log::warn!("ignoring completion of out-of-range step {step}");
                return next;
            }
            if !next.completed_steps.contains(&step) {
                next.completed_steps.push(step);
            }
            next.current_step = next.current_step.max(step + 1);
        } else {
            // Un-completing never rolls the step pointer back; the intent
            // to re-lock later steps is not assumed.
            next.completed_steps.retain(|s| *s != step);
        }
        next
    }

    pub fn is_completed(&self, step: u32) -> bool {
        self.completed_steps.contains(&step)
    }

    /// A step is reachable once every step before it is unlocked.
    pub fn can_access(&self, step: u32) -> bool {
        step <= self.current_step + 1
    }

    /// Derived, never stored.
    pub fn percent_complete(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        self.completed_steps.len() as f64 / self.total_steps as f64 * 100.0
    }
}

/// Owns the persisted progress record. All mutation goes through
/// `dispatch`, which applies the pure transition and then writes the file.
pub struct ProgressStore {
    path: PathBuf,
    progress: Progress,
}

impl ProgressStore {
    /// Load saved progress from the data directory. A missing or
    /// unparseable file falls back to the defaults rather than failing.
    pub fn load(directory: &Path) -> Self {
        let path = directory.join(PROGRESS_FILE);
        let progress = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(progress) => progress,
                Err(err) => {
                    log::warn!("discarding malformed progress file: {err}");
                    Progress::default()
                }
            },
            Err(_) => Progress::default(),
        };
        Self { path, progress }
    }

    pub fn get(&self) -> &Progress {
        &self.progress
    }

    /// Apply an action and persist the result.
    pub fn dispatch(&mut self, action: ProgressAction) -> Fallible<()> {
        self.progress = self.progress.apply(action);
        self.save()
    }

    fn save(&self) -> Fallible<()> {
        let json = serde_json::to_string_pretty(&self.progress)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    fn complete(step: u32) -> ProgressAction {
        ProgressAction::SetStepCompletion {
            step,
            completed: true,
        }
    }

    fn uncomplete(step: u32) -> ProgressAction {
        ProgressAction::SetStepCompletion {
            step,
            completed: false,
        }
    }

    #[test]
    fn test_defaults() {
        let progress = Progress::default();
        assert_eq!(progress.current_step, 0);
        assert!(progress.completed_steps.is_empty());
        assert_eq!(progress.total_steps, 100);
    }

    #[test]
    fn test_completing_a_step_advances_the_pointer() {
        let progress = Progress::default().apply(complete(3));
        assert_eq!(progress.current_step, 4);
        assert!(progress.is_completed(3));
    }

    #[test]
    fn test_uncompleting_keeps_the_pointer() {
        let progress = Progress::default().apply(complete(3)).apply(uncomplete(3));
        assert!(!progress.is_completed(3));
        assert_eq!(progress.current_step, 4);
    }

    #[test]
    fn test_completion_is_idempotent() {
        let progress = Progress::default().apply(complete(2)).apply(complete(2));
        assert_eq!(progress.completed_steps, vec![2]);
        assert_eq!(progress.current_step, 3);
    }

    #[test]
    fn test_pointer_never_regresses() {
        let progress = Progress::default()
            .apply(complete(10))
            .apply(complete(2))
            .apply(uncomplete(10));
        assert_eq!(progress.current_step, 11);
        assert_eq!(progress.completed_steps, vec![2]);
    }

    #[test]
    fn test_out_of_range_steps_are_ignored() {
        let progress = Progress::default()
            .apply(complete(0))
            .apply(complete(101))
            .apply(complete(1));
        assert_eq!(progress.completed_steps, vec![1]);
        assert_eq!(progress.current_step, 2);
    }

    #[test]
    fn test_completed_steps_stay_in_range() {
        let mut progress = Progress::default();
        for step in [5, 1, 5, 200, 0, 3, 100] {
            progress = progress.apply(complete(step));
        }
        progress = progress.apply(uncomplete(1));
        for step in &progress.completed_steps {
            assert!(*step >= 1 && *step <= progress.total_steps);
        }
        assert_eq!(progress.completed_steps, vec![5, 3, 100]);
    }

    #[test]
    fn test_percent_complete() {
        let progress = Progress::default().apply(complete(1)).apply(complete(2));
        assert_eq!(progress.percent_complete(), 2.0);
    }

    #[test]
    fn test_access_gating() {
        let progress = Progress::default();
        assert!(progress.can_access(1));
        assert!(!progress.can_access(2));
        let progress = progress.apply(complete(1));
        assert!(progress.can_access(2));
        assert!(!progress.can_access(3));
    }

    #[test]
    fn test_round_trip() -> Fallible<()> {
        let progress = Progress {
            current_step: 7,
            completed_steps: vec![3, 1, 6],
            total_steps: 100,
        };
        let json = serde_json::to_string(&progress)?;
        let restored: Progress = serde_json::from_str(&json)?;
        assert_eq!(progress, restored);
        Ok(())
    }

    #[test]
    fn test_serialized_field_names() -> Fallible<()> {
        let json = serde_json::to_string(&Progress::default())?;
        assert!(json.contains("currentStep"));
        assert!(json.contains("completedSteps"));
        assert!(json.contains("totalSteps"));
        Ok(())
    }

    #[test]
    fn test_store_load_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        let store = ProgressStore::load(dir.path());
        assert_eq!(*store.get(), Progress::default());
        Ok(())
    }

    #[test]
    fn test_store_load_malformed_file() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join(PROGRESS_FILE), "{not json")?;
        let store = ProgressStore::load(dir.path());
        assert_eq!(*store.get(), Progress::default());
        Ok(())
    }

    #[test]
    fn test_store_persists_after_dispatch() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = ProgressStore::load(dir.path());
        store.dispatch(complete(1))?;
        store.dispatch(complete(2))?;
        store.dispatch(uncomplete(1))?;
        let reloaded = ProgressStore::load(dir.path());
        assert_eq!(store.get(), reloaded.get());
        assert_eq!(reloaded.get().completed_steps, vec![2]);
        assert_eq!(reloaded.get().current_step, 3);
        Ok(())
    }
}
