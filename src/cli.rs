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

use clap::Parser;

use crate::cmd;
use crate::error::Fallible;
use crate::server::server::ServeOptions;
use crate::server::server::start_server;
use crate::types::template::Customizations;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the learning dashboard.
    Serve {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// Port to bind. Overrides the config file.
        #[arg(long)]
        port: Option<u16>,
        /// Do not open the browser on startup.
        #[arg(long)]
        no_browser: bool,
    },
    /// Render a code template to stdout or a file.
    Generate {
        /// Template identifier, e.g. `vm-config`.
        template: String,
        /// Name of the virtual machine.
        #[arg(long, default_value = "xen-test-vm")]
        vm_name: String,
        /// Guest memory in MB.
        #[arg(long, default_value = "8192")]
        memory: String,
        /// Number of virtual CPUs.
        #[arg(long, default_value = "2")]
        vcpus: String,
        /// Guest disk size.
        #[arg(long, default_value = "20GB")]
        disk_size: String,
        /// Guest network type.
        #[arg(long, default_value = "NAT")]
        network_type: String,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Print saved learning progress.
    Progress {
        /// Optional path to the data directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            port,
            no_browser,
        } => {
            let directory: PathBuf = resolve_directory(directory)?;
            let options = ServeOptions {
                port,
                open_browser: !no_browser,
            };
            start_server(directory, options).await
        }
        Command::Generate {
            template,
            vm_name,
            memory,
            vcpus,
            disk_size,
            network_type,
            output,
        } => {
            let customizations = Customizations {
                vm_name,
                memory,
                vcpus,
                disk_size,
                network_type,
            };
            cmd::generate::generate_template(&template, &customizations, output)
        }
        Command::Progress { directory } => {
            let directory: PathBuf = resolve_directory(directory)?;
            cmd::progress::print_progress(&directory)
        }
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    match directory {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}
