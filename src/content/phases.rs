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

//! The seven phases of the hundred-step path and the milestone list shown
//! on the dashboard.

/// A contiguous band of the curriculum. `last_step` is inclusive.
pub struct Phase {
    pub name: &'static str,
    pub last_step: u32,
    pub description: &'static str,
    pub steps_label: &'static str,
}

pub struct Milestone {
    pub step: u32,
    pub title: &'static str,
    pub phase: &'static str,
}

pub const PHASES: [Phase; 7] = [
    Phase {
        name: "Getting Started",
        last_step: 5,
        description: "Hardware assessment, VMware setup, basic concepts",
        steps_label: "0.1 - 5.0",
    },
    Phase {
        name: "Foundation",
        last_step: 20,
        description: "Core virtualization, hypervisor fundamentals, Type-1 vs Type-2",
        steps_label: "5.1 - 20.0",
    },
    Phase {
        name: "Installation",
        last_step: 35,
        description: "Complete Xen installation, Domain 0 setup, initial configuration",
        steps_label: "20.1 - 35.0",
    },
    Phase {
        name: "Configuration",
        last_step: 60,
        description: "Advanced configuration, guest domains, networking, storage",
        steps_label: "35.1 - 60.0",
    },
    Phase {
        name: "Performance",
        last_step: 80,
        description: "Hardware optimization, memory management, CPU scheduling",
        steps_label: "60.1 - 80.0",
    },
    Phase {
        name: "Advanced",
        last_step: 95,
        description: "Live migration, debugging, security frameworks, troubleshooting",
        steps_label: "80.1 - 95.0",
    },
    Phase {
        name: "Production",
        last_step: 100,
        description: "Real-world deployment, monitoring, maintenance, certification",
        steps_label: "95.1 - 100.0",
    },
];

/// The phase a given step falls into. Steps past the end of the
/// curriculum land in the final phase.
pub fn phase_for_step(step: u32) -> &'static Phase {
    PHASES
        .iter()
        .find(|phase| step <= phase.last_step)
        .unwrap_or(&PHASES[PHASES.len() - 1])
}

pub const MILESTONES: [Milestone; 6] = [
    Milestone {
        step: 5,
        title: "Complete Hardware Assessment",
        phase: "Getting Started",
    },
    Milestone {
        step: 10,
        title: "Understand Type-1 Hypervisors",
        phase: "Foundation",
    },
    Milestone {
        step: 20,
        title: "Master Paravirtualization Concepts",
        phase: "Foundation",
    },
    Milestone {
        step: 35,
        title: "Complete Xen Installation",
        phase: "Installation",
    },
    Milestone {
        step: 50,
        title: "Configure Domain 0",
        phase: "Configuration",
    },
    Milestone {
        step: 75,
        title: "Optimize for Gaming Hardware",
        phase: "Performance",
    },
];

/// The first milestone strictly ahead of the given step, if any remain.
pub fn next_milestone(current_step: u32) -> Option<&'static Milestone> {
    MILESTONES
        .iter()
        .find(|milestone| milestone.step > current_step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(phase_for_step(0).name, "Getting Started");
        assert_eq!(phase_for_step(5).name, "Getting Started");
        assert_eq!(phase_for_step(6).name, "Foundation");
        assert_eq!(phase_for_step(20).name, "Foundation");
        assert_eq!(phase_for_step(35).name, "Installation");
        assert_eq!(phase_for_step(60).name, "Configuration");
        assert_eq!(phase_for_step(80).name, "Performance");
        assert_eq!(phase_for_step(95).name, "Advanced");
        assert_eq!(phase_for_step(96).name, "Production");
        assert_eq!(phase_for_step(1000).name, "Production");
    }

    #[test]
    fn test_next_milestone() {
        assert_eq!(next_milestone(0).unwrap().step, 5);
        assert_eq!(next_milestone(5).unwrap().step, 10);
        assert_eq!(next_milestone(74).unwrap().step, 75);
        assert!(next_milestone(75).is_none());
    }

    #[test]
    fn test_phases_are_ordered() {
        for pair in PHASES.windows(2) {
            assert!(pair[0].last_step < pair[1].last_step);
        }
    }
}
