#![deny(unsafe_code)]
//! WASM bindings for glyph-spin.
//!
//! JavaScript calls `start` once with an optional JSON config. Setup runs
//! through a `Host` backed by the page window; afterwards the page owns
//! two closures for its whole lifetime: a `keydown` listener on the
//! document and a `requestAnimationFrame` callback that re-arms itself.

use glyph_spin_core::{DemoConfig, DemoError};

#[cfg(target_arch = "wasm32")]
mod browser;

/// Parses the optional config handed over from JavaScript.
///
/// `None` and blank strings mean "use the defaults".
///
/// # Errors
///
/// Returns `DemoError::Config` for malformed or out-of-range JSON.
pub fn parse_config(json: Option<&str>) -> Result<DemoConfig, DemoError> {
    match json.map(str::trim) {
        Some(text) if !text.is_empty() => DemoConfig::from_json(text),
        _ => Ok(DemoConfig::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::start;
