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

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use serde::Deserialize;

use crate::server::state::ServerState;
use crate::server::view;
use crate::types::tab::Tab;
use crate::types::template::Customizations;

/// Handles paths no route matched. A path that is a panel identifier up
/// to stray slashes (`/learning/`) redirects to the canonical path;
/// anything else renders the dashboard rather than a 404 page.
pub async fn fallback(uri: Uri, state: State<ServerState>) -> Response {
    if let Some(tab) = Tab::parse(uri.path().trim_matches('/')) {
        return Redirect::to(&format!("/{tab}")).into_response();
    }
    dashboard(state).await.into_response()
}

/// Serves both `/` and `/dashboard`.
pub async fn dashboard(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    let body = view::dashboard_page(progress, &mutable.hardware);
    let html = view::page(Tab::Dashboard, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}

#[derive(Deserialize)]
pub struct LearningQuery {
    step: Option<u32>,
}

pub async fn learning(
    State(state): State<ServerState>,
    Query(query): Query<LearningQuery>,
) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    // An absent or unknown step falls back to the first step.
    let selected = query.step.unwrap_or(progress.current_step.max(1));
    let body = view::learning_page(progress, selected);
    let html = view::page(Tab::Learning, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}

#[derive(Deserialize)]
pub struct GeneratorQuery {
    template: Option<String>,
}

pub async fn generator(
    State(state): State<ServerState>,
    Query(query): Query<GeneratorQuery>,
) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    let body = view::generator_page(&Customizations::default(), query.template.as_deref(), None);
    let html = view::page(Tab::Generator, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}

pub async fn hardware(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    let body = view::hardware_page(&mutable.hardware);
    let html = view::page(Tab::Hardware, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

pub async fn docs(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    let body = view::docs_page(query.q.as_deref().unwrap_or(""));
    let html = view::page(Tab::Docs, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}

pub async fn troubleshooting(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let progress = mutable.progress.get();
    let body = view::troubleshooting_page(query.q.as_deref().unwrap_or(""));
    let html = view::page(Tab::Troubleshooting, progress, body);
    (StatusCode::OK, Html(html.into_string()))
}
