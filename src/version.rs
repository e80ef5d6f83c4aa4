// SPDX-License-Identifier: MIT

//! Runtime and framework version lookups
//!
//! Both strings are embedded at compile time by `build.rs`, so reads are
//! cheap and side-effect-free. When the build script cannot determine a
//! value the embedded fallback is `"unknown"`.

/// Version of the rustc toolchain the binary was built with.
pub fn runtime_version() -> &'static str {
    env!("SERVICE_RUSTC_VERSION")
}

/// Resolved axum version from the dependency graph.
pub fn framework_version() -> &'static str {
    env!("SERVICE_AXUM_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_not_empty() {
        assert!(!runtime_version().is_empty());
    }

    #[test]
    fn test_framework_version_not_empty() {
        assert!(!framework_version().is_empty());
    }
}
