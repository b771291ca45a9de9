//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line with the package name.
#[must_use]
pub fn full_version() -> String {
    format!("chemlab {}", version())
}
