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

mod get;
mod post;
pub mod server;
mod state;
mod view;

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;
    use std::time::Duration;

    use reqwest::StatusCode;
    use serial_test::serial;
    use tempfile::tempdir;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::error::Fallible;
    use crate::progress::PROGRESS_FILE;
    use crate::server::server::ServeOptions;
    use crate::server::server::start_server;

    async fn spawn_server(directory: &Path) -> u16 {
        let port = portpicker::pick_unused_port().expect("no free port");
        let directory = directory.to_path_buf();
        spawn(async move {
            start_server(
                directory,
                ServeOptions {
                    port: Some(port),
                    open_browser: false,
                },
            )
            .await
        });
        loop {
            if let Ok(stream) = TcpStream::connect(format!("0.0.0.0:{port}")).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        port
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let directory = PathBuf::from("./derpherp");
        let result = start_server(
            directory,
            ServeOptions {
                port: None,
                open_browser: false,
            },
        )
        .await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_e2e() -> Fallible<()> {
        let dir = tempdir()?;
        let port = spawn_server(dir.path()).await;
        let base = format!("http://0.0.0.0:{port}");

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `script.js` endpoint.
        let response = reqwest::get(format!("{base}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the root endpoint.
        let response = reqwest::get(format!("{base}/")).await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Welcome to Xen Project Mastery"));
        assert!(html.contains("Getting Started"));

        // An unknown path falls back to the dashboard.
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let html = response.text().await?;
        assert!(html.contains("Welcome to Xen Project Mastery"));

        // A panel identifier with a stray trailing slash redirects to the
        // canonical path.
        let response = reqwest::get(format!("{base}/learning/")).await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Learning Steps"));

        // Every panel renders.
        for path in [
            "/dashboard",
            "/learning",
            "/generator",
            "/hardware",
            "/docs",
            "/troubleshooting",
        ] {
            let response = reqwest::get(format!("{base}{path}")).await?;
            assert!(response.status().is_success());
        }

        // The learning panel shows the first step.
        let response = reqwest::get(format!("{base}/learning")).await?;
        let html = response.text().await?;
        assert!(html.contains("Understanding Virtualization Fundamentals"));

        // Complete step 1.
        let response = reqwest::Client::new()
            .post(format!("{base}/learning"))
            .form(&[("action", "Complete"), ("step", "1")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("✅ Completed"));
        assert!(html.contains("Uncomplete"));

        // The progress file was written.
        let saved = std::fs::read_to_string(dir.path().join(PROGRESS_FILE))?;
        assert!(saved.contains("\"currentStep\": 2"));
        assert!(saved.contains("\"completedSteps\""));

        // Un-complete step 1. The step pointer stays where it is.
        let response = reqwest::Client::new()
            .post(format!("{base}/learning"))
            .form(&[("action", "Uncomplete"), ("step", "1")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let saved = std::fs::read_to_string(dir.path().join(PROGRESS_FILE))?;
        assert!(saved.contains("\"currentStep\": 2"));
        assert!(saved.contains("\"completedSteps\": []"));

        // Search the docs.
        let response = reqwest::get(format!("{base}/docs?q=migration")).await?;
        let html = response.text().await?;
        assert!(html.contains("Live Migration"));
        assert!(!html.contains("Hypervisor Types"));

        // Search the troubleshooting knowledge base.
        let response = reqwest::get(format!("{base}/troubleshooting?q=boot%20menu")).await?;
        let html = response.text().await?;
        assert!(html.contains("Xen not appearing in GRUB menu"));
        assert!(!html.contains("Overheating"));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_generator_e2e() -> Fallible<()> {
        let dir = tempdir()?;
        let port = spawn_server(dir.path()).await;
        let base = format!("http://0.0.0.0:{port}");

        // The picker lists every template.
        let response = reqwest::get(format!("{base}/generator")).await?;
        let html = response.text().await?;
        assert!(html.contains("Xen Hypervisor Installation Script"));
        assert!(html.contains("VM Configuration File Generator"));

        // Generate the VM config.
        let form = [
            ("action", "Generate"),
            ("template", "vm-config"),
            ("vmName", "test-vm"),
            ("memory", "4096"),
            ("vcpus", "2"),
            ("diskSize", "20GB"),
            ("networkType", "NAT"),
        ];
        let response = reqwest::Client::new()
            .post(format!("{base}/generator"))
            .form(&form)
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("test-vm"));
        assert!(html.contains("memory = 4096"));

        // Download it.
        let form = [
            ("action", "Download"),
            ("template", "vm-config"),
            ("vmName", "test-vm"),
            ("memory", "4096"),
            ("vcpus", "2"),
            ("diskSize", "20GB"),
            ("networkType", "NAT"),
        ];
        let response = reqwest::Client::new()
            .post(format!("{base}/generator"))
            .form(&form)
            .send()
            .await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"xen-vm-config-test-vm.cfg\""
        );
        let text = response.text().await?;
        assert!(text.contains("name = \"test-vm\""));
        assert!(!text.contains("{{"));

        // An unknown template id renders the picker with no output.
        let form = [
            ("action", "Generate"),
            ("template", "bogus"),
            ("vmName", "test-vm"),
            ("memory", "4096"),
            ("vcpus", "2"),
            ("diskSize", "20GB"),
            ("networkType", "NAT"),
        ];
        let response = reqwest::Client::new()
            .post(format!("{base}/generator"))
            .form(&form)
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(!html.contains("Generated Code"));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_hardware_e2e() -> Fallible<()> {
        let dir = tempdir()?;
        let port = spawn_server(dir.path()).await;
        let base = format!("http://0.0.0.0:{port}");

        // The default profile is shown.
        let response = reqwest::get(format!("{base}/hardware")).await?;
        let html = response.text().await?;
        assert!(html.contains("HP Pavilion Gaming 15-cx0049ne"));

        // Replace it wholesale.
        let form = [
            ("laptopModel", "ThinkPad P52"),
            ("cpu", "Intel i7-8750H"),
            ("gpu", "NVIDIA Quadro P1000"),
            ("ram", "64GB"),
            ("storage", "2TB NVMe"),
            ("virtualizationSupport", "Intel VT-x"),
            ("optimizationLevel", "Workstation"),
        ];
        let response = reqwest::Client::new()
            .post(format!("{base}/hardware"))
            .form(&form)
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("ThinkPad P52"));
        assert!(!html.contains("HP Pavilion Gaming 15-cx0049ne"));

        // Generated code now substitutes the new profile.
        let form = [
            ("action", "Generate"),
            ("template", "xen-install"),
            ("vmName", "test-vm"),
            ("memory", "4096"),
            ("vcpus", "2"),
            ("diskSize", "20GB"),
            ("networkType", "NAT"),
        ];
        let response = reqwest::Client::new()
            .post(format!("{base}/generator"))
            .form(&form)
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("ThinkPad P52"));

        Ok(())
    }
}
