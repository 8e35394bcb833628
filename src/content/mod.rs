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

//! All authored content: the curriculum, the documentation hub, the
//! troubleshooting knowledge base, and the code template catalogue.
//! Everything here is static data compiled into the binary.

mod docs;
mod issues;
mod phases;
mod steps;
mod templates;

pub use docs::doc_sections;
pub use issues::issue_categories;
pub use phases::next_milestone;
pub use phases::phase_for_step;
pub use phases::Milestone;
pub use phases::Phase;
pub use phases::MILESTONES;
pub use phases::PHASES;
pub use steps::learning_steps;
pub use steps::step_by_id;
pub use templates::code_templates;
pub use templates::template_by_id;
