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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use serde::Deserialize;

use crate::codegen;
use crate::progress::ProgressAction;
use crate::server::state::ServerState;
use crate::server::view;
use crate::types::hardware::HardwareProfile;
use crate::types::tab::Tab;
use crate::types::template::Customizations;

#[derive(Debug, Deserialize)]
enum LearningAction {
    Complete,
    Uncomplete,
}

#[derive(Deserialize)]
pub struct LearningForm {
    action: LearningAction,
    step: u32,
}

pub async fn learning_action(
    State(state): State<ServerState>,
    Form(form): Form<LearningForm>,
) -> Redirect {
    let completed = match form.action {
        LearningAction::Complete => true,
        LearningAction::Uncomplete => false,
    };
    let mut mutable = state.mutable.lock().unwrap();
    let result = mutable.progress.dispatch(ProgressAction::SetStepCompletion {
        step: form.step,
        completed,
    });
    if let Err(e) = result {
        log::error!("error: {e}");
    }
    Redirect::to(&format!("/learning?step={}", form.step))
}

pub async fn hardware_action(
    State(state): State<ServerState>,
    Form(form): Form<HardwareProfile>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    // The form carries the complete profile, so replace it wholesale.
    mutable.hardware = form;
    Redirect::to("/hardware")
}

#[derive(Debug, Deserialize)]
enum GeneratorAction {
    Generate,
    Download,
}

// `serde_urlencoded` cannot flatten, so the customization fields are
// spelled out here rather than embedding `Customizations`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorForm {
    action: GeneratorAction,
    template: String,
    vm_name: String,
    memory: String,
    vcpus: String,
    disk_size: String,
    network_type: String,
}

impl GeneratorForm {
    fn customizations(&self) -> Customizations {
        Customizations {
            vm_name: self.vm_name.clone(),
            memory: self.memory.clone(),
            vcpus: self.vcpus.clone(),
            disk_size: self.disk_size.clone(),
            network_type: self.network_type.clone(),
        }
    }
}

pub async fn generator_action(
    State(state): State<ServerState>,
    Form(form): Form<GeneratorForm>,
) -> Response {
    let custom = form.customizations();
    let rendered = {
        let mutable = state.mutable.lock().unwrap();
        codegen::render(&form.template, &custom, &mutable.hardware)
    };
    match form.action {
        GeneratorAction::Generate => {
            let mutable = state.mutable.lock().unwrap();
            let progress = mutable.progress.get();
            // An unknown template id shows the picker with no output.
            let body = view::generator_page(&custom, Some(&form.template), rendered.as_ref());
            let html = view::page(Tab::Generator, progress, body);
            (StatusCode::OK, Html(html.into_string())).into_response()
        }
        GeneratorAction::Download => match rendered {
            Some(rendered) => {
                let disposition = format!("attachment; filename=\"{}\"", rendered.filename);
                (
                    StatusCode::OK,
                    [
                        (CONTENT_TYPE, "text/plain".to_string()),
                        (CONTENT_DISPOSITION, disposition),
                    ],
                    rendered.text,
                )
                    .into_response()
            }
            None => Redirect::to("/generator").into_response(),
        },
    }
}
