//! Post-processing of the renderer's SVG for responsive embedding.
//!
//! The external renderer emits an `<svg>` sized in absolute pixels. Embedded
//! in a note pane that root must instead size to its container, without losing
//! the inline `style` attribute where the theme's CSS custom properties live.

use crate::error::{Error, Result};
use lol_html::{RewriteStrSettings, element, rewrite_str};
use std::cell::Cell;

/// Style rules appended to the root when no `max-width` constraint exists.
const RESPONSIVE_STYLE: &str = "max-width: 100%; width: auto; height: auto;";

/// Rewrites the root `<svg>` element of `markup` for responsive embedding:
///
/// - synthesizes a `viewBox` from `width`/`height` when none is declared;
/// - removes the explicit `width`/`height` so the element tracks its container;
/// - appends [`RESPONSIVE_STYLE`] to the inline style unless a `max-width`
///   constraint is already present, keeping existing declarations (CSS custom
///   properties included) intact;
/// - sets `preserveAspectRatio="xMidYMid meet"` (center, fit within bounds).
///
/// Returns [`Error::NoSvgInOutput`] when the markup contains no `<svg>` root.
pub fn make_responsive(markup: &str) -> Result<String> {
    let found_svg = Cell::new(false);

    let rewritten = rewrite_str(
        markup,
        RewriteStrSettings {
            element_content_handlers: vec![element!("svg", |el| {
                // Only the root element is rewritten; nested <svg> islands
                // keep their own sizing.
                if found_svg.get() {
                    return Ok(());
                }
                found_svg.set(true);

                let width = el.get_attribute("width");
                let height = el.get_attribute("height");

                if el.get_attribute("viewBox").is_none() {
                    if let (Some(width), Some(height)) = (&width, &height) {
                        let _ = el.set_attribute("viewBox", &format!("0 0 {width} {height}"));
                    }
                }

                el.remove_attribute("width");
                el.remove_attribute("height");

                let existing = el.get_attribute("style").unwrap_or_default();
                if !existing.contains("max-width") {
                    let style = if existing.is_empty() {
                        RESPONSIVE_STYLE.to_string()
                    } else {
                        format!("{}; {RESPONSIVE_STYLE}", existing.trim_end_matches([' ', ';']))
                    };
                    let _ = el.set_attribute("style", &style);
                }

                let _ = el.set_attribute("preserveAspectRatio", "xMidYMid meet");
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|err| Error::Rewrite {
        message: err.to_string(),
    })?;

    if !found_svg.get() {
        return Err(Error::NoSvgInOutput);
    }
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_viewbox_from_width_and_height() {
        let out = make_responsive(r#"<svg width="640" height="480"><rect/></svg>"#).unwrap();
        assert!(out.contains(r#"viewBox="0 0 640 480""#));
        assert!(!out.contains("width=\"640\""));
        assert!(!out.contains("height=\"480\""));
    }

    #[test]
    fn keeps_existing_viewbox() {
        let out = make_responsive(r#"<svg viewBox="0 0 10 20" width="10" height="20"></svg>"#)
            .unwrap();
        assert!(out.contains(r#"viewBox="0 0 10 20""#));
        assert!(!out.contains(r#"viewBox="0 0 10 10""#));
    }

    #[test]
    fn appends_responsive_style_preserving_custom_properties() {
        let out = make_responsive(r#"<svg style="--bg: #1a1b26; --fg: #c0caf5"></svg>"#).unwrap();
        assert!(out.contains("--bg: #1a1b26"));
        assert!(out.contains("max-width: 100%"));
        assert!(out.contains("height: auto"));
    }

    #[test]
    fn respects_existing_max_width_constraint() {
        let out = make_responsive(r#"<svg style="max-width: 480px;"></svg>"#).unwrap();
        assert!(out.contains("max-width: 480px"));
        assert!(!out.contains("max-width: 100%"));
    }

    #[test]
    fn sets_center_fit_scaling_mode() {
        let out = make_responsive("<svg></svg>").unwrap();
        assert!(out.contains(r#"preserveAspectRatio="xMidYMid meet""#));
    }

    #[test]
    fn missing_svg_root_is_an_error() {
        let err = make_responsive("<div>not a diagram</div>").unwrap_err();
        assert!(matches!(err, Error::NoSvgInOutput));
    }

    #[test]
    fn nested_shapes_survive_untouched() {
        let out =
            make_responsive(r#"<svg width="10" height="10"><g><text>hi</text></g></svg>"#).unwrap();
        assert!(out.contains("<g><text>hi</text></g>"));
    }
}
