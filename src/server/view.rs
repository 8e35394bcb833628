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

//! Page rendering. One function per panel, plus the shared chrome.

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::codegen::RenderedTemplate;
use crate::content;
use crate::markdown::markdown_to_html;
use crate::progress::Progress;
use crate::types::hardware::HardwareProfile;
use crate::types::tab::Tab;
use crate::types::template::Customizations;

pub fn page(active: Tab, progress: &Progress, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "xenguide" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                div #loading-overlay {
                    div.spinner {}
                    p { "Loading Xen Mastery Platform..." }
                }
                (navigation(active, progress))
                main {
                    (body)
                }
                script src="/script.js" {}
            }
        }
    }
}

fn navigation(active: Tab, progress: &Progress) -> Markup {
    let percent = progress.percent_complete();
    html! {
        header.navigation {
            div.brand {
                span.logo { "🖥️" }
                div {
                    h1 { "Xen Project Mastery" }
                    p.subtitle { "HP Pavilion Gaming Optimized" }
                }
            }
            nav {
                @for tab in Tab::ALL {
                    @let class = if tab == active { "tab active" } else { "tab" };
                    a href={ "/" (tab.as_str()) } class=(class) {
                        span.emoji { (tab.emoji()) }
                        span.label { (tab.label()) }
                        span.blurb { (tab.blurb()) }
                    }
                }
            }
            div.progress-summary {
                div.progress-bar {
                    div.progress-fill style={ "width: " (format!("{percent:.0}")) "%" } {}
                }
                p { (progress.completed_steps.len()) " / " (progress.total_steps) " steps" }
            }
        }
    }
}

pub fn dashboard_page(progress: &Progress, hardware: &HardwareProfile) -> Markup {
    let percent = progress.percent_complete();
    let phase = content::phase_for_step(progress.current_step);
    let milestone = content::next_milestone(progress.current_step);
    html! {
        div.dashboard {
            div.hero {
                h1 { "Welcome to Xen Project Mastery" }
                p {
                    "Master the most powerful open-source Type-1 hypervisor with our \
                     comprehensive step-by-step learning platform, optimized for your \
                     HP Pavilion Gaming laptop."
                }
            }
            div.cards {
                section.card {
                    h2 { "Overall Progress" }
                    p.big-number { (format!("{percent:.0}")) "%" }
                    p { (progress.completed_steps.len()) " of " (progress.total_steps) " steps" }
                    div.progress-bar {
                        div.progress-fill style={ "width: " (format!("{percent:.0}")) "%" } {}
                    }
                }
                section.card {
                    h2 { "Current Phase" }
                    p.phase-badge { (phase.name) }
                    p { (phase.description) }
                    p.step-pointer { "Step " (progress.current_step) }
                    @match milestone {
                        Some(milestone) => p.milestone { "Next: " (milestone.title) },
                        None => p.milestone { "All milestones completed!" },
                    }
                }
                section.card {
                    h2 { "Hardware Status" }
                    dl.hardware-summary {
                        dt { "CPU" } dd { (hardware.cpu) }
                        dt { "GPU" } dd { (hardware.gpu) }
                        dt { "RAM" } dd { (hardware.ram) }
                        dt { "Virtualization" } dd { (hardware.virtualization_support) }
                    }
                }
            }
            section.card {
                h2 { "🗺️ Learning Path Preview" }
                ul.milestones {
                    @for milestone in &content::MILESTONES {
                        @let completed = progress.is_completed(milestone.step);
                        @let current = milestone.step == progress.current_step;
                        @let class = if completed { "done" } else if current { "current" } else { "locked" };
                        li class=(class) {
                            span.badge { "Step " (milestone.step) }
                            span.title { (milestone.title) }
                            span.phase { (milestone.phase) }
                            span.status {
                                @if completed { "✅" } @else if current { "⏳" } @else { "🔒" }
                            }
                        }
                    }
                }
            }
            section.card {
                h2 { "🗺️ Complete Learning Roadmap" }
                div.roadmap {
                    @for phase_entry in &content::PHASES {
                        @let current = phase_entry.name == phase.name;
                        @let class = if current { "roadmap-phase current" } else { "roadmap-phase" };
                        div class=(class) {
                            div {
                                h3 {
                                    (phase_entry.name)
                                    @if current { span.current-marker { " ← Current" } }
                                }
                                p { (phase_entry.description) }
                            }
                            span.badge { (phase_entry.steps_label) }
                        }
                    }
                }
            }
        }
    }
}

pub fn learning_page(progress: &Progress, selected: u32) -> Markup {
    let steps = content::learning_steps();
    let step = content::step_by_id(selected).unwrap_or(&steps[0]);
    let completed = progress.is_completed(step.id);
    let accessible = progress.can_access(step.id);
    html! {
        div.learning {
            div.header {
                h1 { "🎯 Xen Mastery Learning Path" }
                p { "100 carefully crafted steps from absolute beginner to Xen expert" }
            }
            div.columns {
                aside.step-list {
                    h2 { "Learning Steps" }
                    ul {
                        @for entry in steps {
                            @let entry_completed = progress.is_completed(entry.id);
                            @let entry_accessible = progress.can_access(entry.id);
                            @let class = if entry.id == step.id { "selected" } else { "" };
                            li class=(class) {
                                @if entry_accessible {
                                    a href={ "/learning?step=" (entry.id) } {
                                        span.status {
                                            @if entry_completed { "✅" } @else { "🔵" }
                                        }
                                        span { "Step " (entry.id) ": " (entry.title) }
                                    }
                                } @else {
                                    span.locked {
                                        span.status { "🔒" }
                                        span { "Step " (entry.id) ": " (entry.title) }
                                    }
                                }
                            }
                        }
                    }
                    p.more-steps { "📈 +95 more steps" }
                }
                article.step-detail {
                    div.step-header {
                        h2 { "Step " (step.id) ": " (step.title) }
                        p { (step.description) }
                        span class={ "badge " (step.difficulty.css_class()) } { (step.difficulty) }
                        span.time { "⏱️ " (step.estimated_time) }
                        @if completed {
                            span.badge.completed { "✅ Completed" }
                        }
                    }
                    section {
                        h3 { "🎯 Learning Objectives" }
                        ul.objectives {
                            @for objective in step.objectives {
                                li { (objective) }
                            }
                        }
                    }
                    section.rich-text {
                        h3 { "📚 Theory" }
                        (PreEscaped(markdown_to_html(step.content.theory)))
                    }
                    section.rich-text {
                        h3 { "🔧 Practical" }
                        (PreEscaped(markdown_to_html(step.content.practical)))
                    }
                    section {
                        h3 { "💻 Commands" }
                        @if step.content.commands.is_empty() {
                            p.no-commands {
                                "No commands required for this step. Focus on understanding \
                                 the concepts and theory."
                            }
                        } @else {
                            @for command in step.content.commands {
                                pre.command { code { (command) } }
                            }
                        }
                    }
                    section {
                        h3 { "✅ Step Completion Criteria" }
                        ul.validation {
                            @for criteria in step.content.validation {
                                li { (criteria) }
                            }
                        }
                    }
                    div.controls {
                        @if accessible {
                            form action="/learning" method="post" {
                                input type="hidden" name="step" value=(step.id);
                                @if completed {
                                    input type="submit" name="action" value="Uncomplete";
                                } @else {
                                    input type="submit" name="action" value="Complete";
                                }
                            }
                        } @else {
                            p.locked { "🔒 Complete the previous steps to unlock this one." }
                        }
                    }
                }
            }
        }
    }
}

pub fn generator_page(
    custom: &Customizations,
    selected: Option<&str>,
    rendered: Option<&RenderedTemplate>,
) -> Markup {
    html! {
        div.generator {
            div.header {
                h1 { "⚡ Code Generator" }
                p { "Generate optimized Xen configurations and scripts for your HP Pavilion Gaming laptop" }
            }
            section.card {
                h2 { "🛠️ Code Template Selection" }
                div.template-grid {
                    @for template in content::code_templates() {
                        @let active = selected == Some(template.id);
                        @let class = if active { "template active" } else { "template" };
                        a href={ "/generator?template=" (template.id) } class=(class) {
                            h3 { (template.title) }
                            span class={ "badge " (template.difficulty.css_class()) } { (template.difficulty) }
                            p { (template.description) }
                        }
                    }
                }
            }
            @if let Some(selected) = selected {
                section.card {
                    h2 { "⚙️ Customization Options" }
                    form action="/generator" method="post" {
                        input type="hidden" name="template" value=(selected);
                        div.fields {
                            label { "VM Name"
                                input type="text" name="vmName" value=(custom.vm_name);
                            }
                            label { "Memory (MB)"
                                input type="text" name="memory" value=(custom.memory);
                            }
                            label { "vCPUs"
                                input type="text" name="vcpus" value=(custom.vcpus);
                            }
                            label { "Disk Size"
                                input type="text" name="diskSize" value=(custom.disk_size);
                            }
                            label { "Network Type"
                                input type="text" name="networkType" value=(custom.network_type);
                            }
                        }
                        div.buttons {
                            input type="submit" name="action" value="Generate";
                            input type="submit" name="action" value="Download";
                        }
                    }
                }
            }
            @if let Some(rendered) = rendered {
                section.card {
                    h2 { "📜 Generated Code" }
                    p.filename { (rendered.filename) }
                    pre.generated { code { (rendered.text) } }
                }
            }
        }
    }
}

pub fn hardware_page(hardware: &HardwareProfile) -> Markup {
    html! {
        div.hardware {
            div.header {
                h1 { "🖥️ Hardware Profile" }
                p { "The machine the curriculum and generated code are tuned for" }
            }
            section.card {
                form action="/hardware" method="post" {
                    div.fields {
                        label { "Laptop Model"
                            input type="text" name="laptopModel" value=(hardware.laptop_model);
                        }
                        label { "CPU"
                            input type="text" name="cpu" value=(hardware.cpu);
                        }
                        label { "GPU"
                            input type="text" name="gpu" value=(hardware.gpu);
                        }
                        label { "RAM"
                            input type="text" name="ram" value=(hardware.ram);
                        }
                        label { "Storage"
                            input type="text" name="storage" value=(hardware.storage);
                        }
                        label { "Virtualization Support"
                            input type="text" name="virtualizationSupport" value=(hardware.virtualization_support);
                        }
                        label { "Optimization Level"
                            input type="text" name="optimizationLevel" value=(hardware.optimization_level);
                        }
                    }
                    input type="submit" value="Save Profile";
                }
            }
        }
    }
}

pub fn docs_page(query: &str) -> Markup {
    html! {
        div.docs {
            div.header {
                h1 { "📖 Documentation Hub" }
                p { "Complete Xen Project reference, tuned for your hardware" }
            }
            form.search action="/docs" method="get" {
                input type="search" name="q" value=(query) placeholder="Search the documentation...";
                input type="submit" value="Search";
            }
            @for section in content::doc_sections() {
                @let entries: Vec<_> = section.entries.iter().filter(|entry| entry.matches(query)).collect();
                @if !entries.is_empty() {
                    section.card {
                        h2 { (section.emoji) " " (section.title) }
                        @for entry in entries {
                            details {
                                summary {
                                    span.title { (entry.title) }
                                    span.description { (entry.description) }
                                }
                                div.rich-text {
                                    (PreEscaped(markdown_to_html(entry.body)))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn troubleshooting_page(query: &str) -> Markup {
    html! {
        div.troubleshooting {
            div.header {
                h1 { "🔧 Troubleshooting Guide" }
                p { "Comprehensive solutions for HP Pavilion Gaming + Xen Project issues" }
            }
            div.emergency {
                strong { "🚨 Emergency Recovery: " }
                "If your system is unbootable, select the previous GRUB entry or boot from \
                 recovery media. Always keep a backup of working configurations!"
            }
            form.search action="/troubleshooting" method="get" {
                input type="search" name="q" value=(query) placeholder="Describe your problem or search for solutions...";
                input type="submit" value="Search";
            }
            @for category in content::issue_categories() {
                @let issues: Vec<_> = category.issues.iter().filter(|issue| issue.matches(query)).collect();
                @if !issues.is_empty() {
                    section.card {
                        h2 { (category.emoji) " " (category.title) }
                        @for issue in issues {
                            details {
                                summary {
                                    span class={ "badge " (issue.severity.css_class()) } { (issue.severity) }
                                    span.problem { (issue.problem) }
                                }
                                div.issue-detail {
                                    h3 { "🔍 Symptoms" }
                                    ul {
                                        @for symptom in issue.symptoms {
                                            li { (symptom) }
                                        }
                                    }
                                    h3 { "✅ Solutions" }
                                    ol {
                                        @for solution in issue.solutions {
                                            li { (solution) }
                                        }
                                    }
                                    h3 { "🛡️ Prevention" }
                                    p { (issue.prevention) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
