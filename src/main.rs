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

mod cli;
mod cmd;
mod codegen;
mod config;
mod content;
mod error;
mod markdown;
mod progress;
mod server;
mod types;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = cli::entrypoint().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
