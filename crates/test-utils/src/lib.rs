//! Shared test utilities for the station-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Station record fixtures
//! - Synthetic station generators
//! - Scripted and in-memory station sources
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your integration tests:
//!
//! ```ignore
//! use test_utils::{fixtures, ScriptedSource};
//! ```

pub mod fixtures;
pub mod generators;
pub mod sources;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use sources::*;

use std::io::Write;

/// Write `yaml` to a temporary file and return its handle.
///
/// The file is deleted when the handle is dropped.
pub fn write_temp_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create temp config file");
    file.write_all(yaml.as_bytes())
        .expect("failed to write temp config file");
    file
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_write_temp_config() {
        let file = write_temp_config("endpoint:\n  base_url: http://x\n");
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("base_url"));
    }
}
