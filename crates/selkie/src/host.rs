//! Seams toward the host shell.
//!
//! The host owns the document model, the view lifecycle and the settings
//! persistence. This module models the slices of it that the plugin consumes,
//! so the rest of the crate can be driven by fakes in tests.

use serde_json::Value;
use std::sync::Arc;

/// Fenced code-block tag the host maps to [`crate::Plugin::render_block`].
///
/// Deliberately distinct from the host's built-in `mermaid` tag so both
/// processors can coexist.
pub const CODE_BLOCK_TAG: &str = "selkie";

/// Identifier for the "refresh diagrams in active view" command.
pub const REFRESH_COMMAND_ID: &str = "refresh-selkie-diagrams";
pub const REFRESH_COMMAND_NAME: &str = "Refresh selkie diagrams in active view";

/// Output location for one rendered diagram (a DOM container or equivalent).
///
/// All methods are infallible and best-effort: if the host has discarded the
/// underlying target (the view closed mid-render), implementations must treat
/// writes as no-ops rather than fail. There is no return channel; success and
/// failure are both communicated by what ends up visible in the sink.
pub trait OutputSink {
    /// Drop all previously written content.
    fn clear(&self);

    /// Toggle the transient "rendering..." placeholder.
    fn set_loading(&self, active: bool);

    /// Append markup as live content (not escaped text). Inline `style`
    /// attributes on the markup root must survive insertion; themes rely on
    /// CSS custom properties declared there.
    fn append_markup(&self, markup: &str);
}

/// Host-provided persistence for the settings blob.
///
/// The blob is opaque to the host; the plugin stores a flat JSON object.
pub trait SettingsBackend {
    /// Previously saved blob, or `None` if nothing was ever saved.
    fn load_blob(&self) -> Option<Value>;

    /// Persist the full blob. Must be durable when this returns; the refresh
    /// broadcast that follows a settings change assumes it.
    fn save_blob(&self, blob: &Value);
}

/// One diagram block the host currently displays.
pub struct DiagramBlock {
    pub source: String,
    pub sink: Arc<dyn OutputSink>,
}

/// View enumeration used by the refresh paths.
pub trait Workspace {
    /// Every diagram block across all open views.
    fn visible_blocks(&self) -> Vec<DiagramBlock>;

    /// Diagram blocks of the active view only (the refresh command's scope).
    fn active_view_blocks(&self) -> Vec<DiagramBlock>;
}
