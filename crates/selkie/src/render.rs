//! The rendering adapter: external renderer in, responsive markup (or an
//! inline error block) out.

use crate::error::{Error, Result};
use crate::host::OutputSink;
use crate::settings::Settings;
use crate::svg;
use futures::future::BoxFuture;
use htmlize::escape_text;
use selkie_themes::{DEFAULT_THEME, Theme, ThemeTable};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Opaque failure of the external renderer.
pub type RenderFailure = Box<dyn std::error::Error + Send + Sync>;

/// Option set handed to the external renderer: the resolved theme's visual
/// properties plus the transparency flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    #[serde(flatten)]
    pub theme: Theme,
    pub transparent: bool,
}

/// The external diagram-rendering library, injected rather than imported.
///
/// `render_svg` resolves to a markup string whose root is a single `<svg>`
/// element with nested shapes. The call may suspend; the adapter awaits it
/// sequentially per mount point. Runtime-agnostic (no executor assumed).
pub trait DiagramRenderer: Send + Sync {
    fn render_svg<'a>(
        &'a self,
        source: &'a str,
        options: &'a RenderOptions,
    ) -> BoxFuture<'a, std::result::Result<String, RenderFailure>>;
}

/// Renders diagram source into an [`OutputSink`].
///
/// Side-effecting only: every failure is caught here and shown as an inline
/// error block; nothing propagates to the host.
pub struct RenderAdapter {
    renderer: Option<Arc<dyn DiagramRenderer>>,
    themes: ThemeTable,
}

impl RenderAdapter {
    /// `renderer: None` models a library that failed to initialize; renders
    /// then produce the "renderer unavailable" error block instead of
    /// crashing the host.
    pub fn new(renderer: Option<Arc<dyn DiagramRenderer>>, themes: ThemeTable) -> Self {
        match renderer {
            Some(_) => debug!(themes = themes.len(), "diagram renderer available"),
            None => warn!("diagram renderer failed to load; blocks will show an error"),
        }
        Self { renderer, themes }
    }

    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    /// Renders `source` into `sink` with a settings snapshot taken by the
    /// caller. Clears any prior content first, so re-rendering the same sink
    /// never leaves stale nodes behind.
    pub async fn render(&self, source: &str, sink: &dyn OutputSink, settings: &Settings) {
        if let Err(err) = self.try_render(source, sink, settings).await {
            error!(%err, "diagram render failed");
            sink.set_loading(false);
            sink.clear();
            sink.append_markup(&error_block(&err));
        }
    }

    async fn try_render(
        &self,
        source: &str,
        sink: &dyn OutputSink,
        settings: &Settings,
    ) -> Result<()> {
        // Availability is checked per call: the library may have failed to
        // initialize after the adapter was constructed optimistically.
        let renderer = self
            .renderer
            .as_deref()
            .ok_or(Error::RendererUnavailable)?;
        let theme = self.resolve_theme(&settings.theme)?;

        sink.clear();
        sink.set_loading(true);

        let options = RenderOptions {
            theme: theme.clone(),
            transparent: settings.transparent,
        };
        debug!(theme = %settings.theme, len = source.len(), "rendering diagram");
        let raw = renderer
            .render_svg(source, &options)
            .await
            .map_err(|err| Error::RenderFailed {
                message: err.to_string(),
            })?;

        sink.set_loading(false);
        let responsive = svg::make_responsive(&raw)?;
        sink.append_markup(&container_markup(&responsive, settings));
        Ok(())
    }

    /// Looks up the configured theme, falling back to [`DEFAULT_THEME`]. If
    /// even the default is missing the error names every available slug so
    /// the user can self-correct.
    fn resolve_theme(&self, requested: &str) -> Result<&Theme> {
        if let Some(theme) = self.themes.get(requested) {
            return Ok(theme);
        }
        self.themes
            .get(DEFAULT_THEME)
            .ok_or_else(|| Error::ThemeNotFound {
                requested: requested.to_string(),
                available: self.themes.available_list(),
            })
    }
}

/// Wraps the post-processed SVG in the sized container the host's stylesheet
/// targets. `data-size`/`--selkie-size` carry the size percentage; the box
/// border keys off `data-show-box`.
fn container_markup(svg_markup: &str, settings: &Settings) -> String {
    format!(
        r#"<div class="selkie-container" data-size="{size}" data-show-box="{show_box}" style="--selkie-size: {size}%;"><div class="selkie-svg-wrapper">{svg_markup}</div></div>"#,
        size = settings.size,
        show_box = settings.show_box,
    )
}

/// The visually marked block shown in place of a diagram when a render fails.
fn error_block(err: &Error) -> String {
    format!(
        r#"<div class="selkie-error"><strong>Error rendering diagram:</strong><br><span>{}</span></div>"#,
        escape_text(err.to_string()),
    )
}
