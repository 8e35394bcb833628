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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::config::Config;
use crate::config::DEFAULT_PORT;
use crate::error::Fallible;
use crate::error::fail;
use crate::progress::ProgressStore;
use crate::server::get as get_handlers;
use crate::server::post as post_handlers;
use crate::server::state::MutableState;
use crate::server::state::ServerState;
use crate::types::hardware::HardwareProfile;

pub struct ServeOptions {
    pub port: Option<u16>,
    pub open_browser: bool,
}

pub async fn start_server(directory: PathBuf, options: ServeOptions) -> Fallible<()> {
    if !directory.exists() {
        return fail("directory does not exist.");
    }

    let config = Config::load(&directory)?;
    let port = options
        .port
        .or(config.port)
        .unwrap_or(DEFAULT_PORT);
    let open_browser = options.open_browser && config.open_browser.unwrap_or(true);
    let hardware = config.hardware.unwrap_or_default();

    log::debug!("Loading progress...");
    let progress = ProgressStore::load(&directory);

    let state = ServerState {
        mutable: Arc::new(Mutex::new(MutableState { progress, hardware })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handlers::dashboard));
    let app = app.route("/dashboard", get(get_handlers::dashboard));
    let app = app.route(
        "/learning",
        get(get_handlers::learning).post(post_handlers::learning_action),
    );
    let app = app.route(
        "/generator",
        get(get_handlers::generator).post(post_handlers::generator_action),
    );
    let app = app.route(
        "/hardware",
        get(get_handlers::hardware).post(post_handlers::hardware_action),
    );
    let app = app.route("/docs", get(get_handlers::docs));
    let app = app.route("/troubleshooting", get(get_handlers::troubleshooting));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    // Unknown paths fall back to the dashboard rather than a 404 page.
    let app = app.fallback(get_handlers::fallback);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{port}");

    // Start a separate task to open the browser.
    if open_browser {
        let bind = bind.clone();
        let url = format!("http://{bind}/");
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}
