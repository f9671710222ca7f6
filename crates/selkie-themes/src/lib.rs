#![forbid(unsafe_code)]

//! Theme table for selkie diagram embedding.
//!
//! A [`Theme`] is a named bundle of visual properties (background, foreground,
//! line and accent colors) that the renderer applies to a diagram. The
//! [`ThemeTable`] keeps themes in insertion order so UI enumeration and
//! diagnostics are deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme used when the configured one is missing or unknown.
pub const DEFAULT_THEME: &str = "tokyo-night";

/// Visual properties of a single theme.
///
/// Colors are CSS color strings (hex in the built-in table) and are handed to
/// the renderer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Human-readable name for dropdowns and diagnostics.
    pub display_name: String,
    pub bg: String,
    pub fg: String,
    pub line: String,
    pub accent: String,
}

impl Theme {
    pub fn new(display_name: &str, bg: &str, fg: &str, line: &str, accent: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            bg: bg.to_string(),
            fg: fg.to_string(),
            line: line.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Insertion-ordered map from theme slug to [`Theme`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTable {
    themes: IndexMap<String, Theme>,
}

impl ThemeTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table. Order matches the settings dropdown.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (slug, theme) in [
            (
                "zinc-light",
                Theme::new("Zinc Light", "#fafafa", "#18181b", "#a1a1aa", "#2563eb"),
            ),
            (
                "zinc-dark",
                Theme::new("Zinc Dark", "#18181b", "#fafafa", "#52525b", "#60a5fa"),
            ),
            (
                "tokyo-night",
                Theme::new("Tokyo Night", "#1a1b26", "#c0caf5", "#565f89", "#7aa2f7"),
            ),
            (
                "tokyo-night-storm",
                Theme::new(
                    "Tokyo Night Storm",
                    "#24283b",
                    "#c0caf5",
                    "#565f89",
                    "#7aa2f7",
                ),
            ),
            (
                "tokyo-night-light",
                Theme::new(
                    "Tokyo Night Light",
                    "#d5d6db",
                    "#343b58",
                    "#9699a3",
                    "#34548a",
                ),
            ),
            (
                "catppuccin-mocha",
                Theme::new(
                    "Catppuccin Mocha",
                    "#1e1e2e",
                    "#cdd6f4",
                    "#6c7086",
                    "#89b4fa",
                ),
            ),
            (
                "catppuccin-latte",
                Theme::new(
                    "Catppuccin Latte",
                    "#eff1f5",
                    "#4c4f69",
                    "#9ca0b0",
                    "#1e66f5",
                ),
            ),
            (
                "nord",
                Theme::new("Nord", "#2e3440", "#d8dee9", "#4c566a", "#88c0d0"),
            ),
            (
                "nord-light",
                Theme::new("Nord Light", "#eceff4", "#2e3440", "#d8dee9", "#5e81ac"),
            ),
            (
                "dracula",
                Theme::new("Dracula", "#282a36", "#f8f8f2", "#6272a4", "#bd93f9"),
            ),
            (
                "github-light",
                Theme::new("GitHub Light", "#ffffff", "#1f2328", "#d1d9e0", "#0969da"),
            ),
            (
                "github-dark",
                Theme::new("GitHub Dark", "#0d1117", "#f0f6fc", "#3d444d", "#4493f8"),
            ),
            (
                "solarized-light",
                Theme::new(
                    "Solarized Light",
                    "#fdf6e3",
                    "#657b83",
                    "#93a1a1",
                    "#268bd2",
                ),
            ),
            (
                "solarized-dark",
                Theme::new("Solarized Dark", "#002b36", "#839496", "#586e75", "#268bd2"),
            ),
            (
                "one-dark",
                Theme::new("One Dark", "#282c34", "#abb2bf", "#5c6370", "#61afef"),
            ),
        ] {
            table.insert(slug, theme);
        }
        table
    }

    pub fn insert(&mut self, slug: &str, theme: Theme) {
        self.themes.insert(slug.to_string(), theme);
    }

    pub fn get(&self, slug: &str) -> Option<&Theme> {
        self.themes.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.themes.contains_key(slug)
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Slugs in table order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Comma-separated slug list for diagnostics ("available themes: ...").
    pub fn available_list(&self) -> String {
        self.slugs().collect::<Vec<_>>().join(", ")
    }
}
