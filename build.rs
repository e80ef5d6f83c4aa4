// SPDX-License-Identifier: MIT

//! Embeds the rustc toolchain version and the resolved axum version into
//! the binary so `/info` can report them at runtime.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.lock");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let runtime = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SERVICE_RUSTC_VERSION={runtime}");

    let framework = std::fs::read_to_string("Cargo.lock")
        .ok()
        .and_then(|lock| locked_version(&lock, "axum"))
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SERVICE_AXUM_VERSION={framework}");
}

/// Finds the resolved version of `package` in Cargo.lock contents.
fn locked_version(lock: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{package}\"");
    let mut in_package = false;
    for line in lock.lines() {
        let line = line.trim();
        if line == "[[package]]" {
            in_package = false;
        } else if line == name_line {
            in_package = true;
        } else if in_package {
            if let Some(rest) = line.strip_prefix("version = \"") {
                return Some(rest.trim_end_matches('"').to_string());
            }
        }
    }
    None
}
