#![forbid(unsafe_code)]

//! Themed diagram embedding layer for host note-taking shells.
//!
//! The host detects a fenced code block tagged [`host::CODE_BLOCK_TAG`] and
//! hands its text plus an output sink to [`Plugin::render_block`]. The
//! [`RenderAdapter`] resolves the configured theme, awaits the injected
//! external renderer, rewrites the returned SVG for responsive embedding and
//! writes the result (or an inline error block) into the sink. A settings
//! change persists immediately and re-renders every visible block.
//!
//! Design goals:
//! - side-effecting render contract: no failure ever crosses into the host
//! - all host and renderer seams are injected traits, testable with fakes
//! - runtime-agnostic async APIs (no specific executor required)

pub mod error;
pub mod host;
pub mod panel;
pub mod render;
pub mod settings;
pub mod svg;

mod plugin;

pub use error::{Error, Result};
pub use plugin::Plugin;
pub use render::{DiagramRenderer, RenderAdapter, RenderFailure, RenderOptions};
pub use settings::{SettingChange, Settings, SettingsStore};

#[cfg(test)]
mod tests;
