//! Application setup, configuration and startup checks.
//!
//! Builds the Bevy app for native and WASM targets, resolves runtime options
//! and refuses to start the stage when the host cannot render.

/// App construction and plugin wiring.
pub mod app_setup;

/// Loading and running states.
pub mod app_state;

/// Graphics capability check and the fallback shown when it fails.
pub mod graphics_support;

/// Runtime options from the command line or the page URL.
pub mod viewer_config;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
