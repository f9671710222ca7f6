//! Plugin wiring: what the host's lifecycle hooks call into.

use crate::host::{OutputSink, SettingsBackend, Workspace};
use crate::render::{DiagramRenderer, RenderAdapter};
use crate::settings::{SettingChange, Settings, SettingsStore};
use selkie_themes::ThemeTable;
use std::sync::Arc;
use tracing::debug;

/// One plugin instance: owns the live settings and the rendering adapter.
///
/// The host wires it up once at load time: the fenced code-block tag
/// [`crate::host::CODE_BLOCK_TAG`] to [`Plugin::render_block`], the settings
/// panel to [`Plugin::update_setting`], and the refresh command to
/// [`Plugin::refresh_active_view`].
pub struct Plugin {
    adapter: RenderAdapter,
    settings: SettingsStore,
}

impl Plugin {
    /// Loads persisted settings (merged over defaults) and sets up the
    /// adapter. Never fails: a missing renderer or empty settings blob just
    /// degrades to error blocks / defaults.
    pub fn new(
        renderer: Option<Arc<dyn DiagramRenderer>>,
        themes: ThemeTable,
        backend: Arc<dyn SettingsBackend>,
    ) -> Self {
        let settings = SettingsStore::load(backend);
        debug!(theme = %settings.current().theme, "plugin loaded");
        Self {
            adapter: RenderAdapter::new(renderer, themes),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.settings.current()
    }

    pub fn themes(&self) -> &ThemeTable {
        self.adapter.themes()
    }

    /// Code-block processor entry point. Takes a settings snapshot at call
    /// time; a concurrent settings edit only affects the next refresh.
    pub async fn render_block(&self, source: &str, sink: &dyn OutputSink) {
        let snapshot = self.settings.snapshot();
        self.adapter.render(source, sink, &snapshot).await;
    }

    /// Applies one settings edit: mutate, persist, then exactly one refresh
    /// broadcast re-rendering every visible block with the new configuration.
    pub async fn update_setting(&mut self, change: SettingChange, workspace: &dyn Workspace) {
        self.settings.apply(change);
        self.refresh_all(workspace).await;
    }

    /// Re-renders every diagram block across all open views.
    pub async fn refresh_all(&self, workspace: &dyn Workspace) {
        let blocks = workspace.visible_blocks();
        debug!(blocks = blocks.len(), "refreshing all diagram blocks");
        for block in blocks {
            self.render_block(&block.source, block.sink.as_ref()).await;
        }
    }

    /// Body of the "refresh diagrams in active view" command.
    pub async fn refresh_active_view(&self, workspace: &dyn Workspace) {
        for block in workspace.active_view_blocks() {
            self.render_block(&block.source, block.sink.as_ref()).await;
        }
    }
}
