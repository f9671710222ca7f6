//! Headless description of the settings panel.
//!
//! The host shell owns the real widgets; this module only says what to build.
//! Each control edits one [`Settings`](crate::settings::Settings) field, and
//! every edit routes through [`Plugin::update_setting`](crate::Plugin), which
//! persists and broadcasts a refresh.

use selkie_themes::ThemeTable;

pub const SIZE_MIN: u32 = 10;
pub const SIZE_MAX: u32 = 100;
pub const SIZE_STEP: u32 = 5;

/// Which settings field a control edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Theme,
    Transparent,
    Size,
    ShowBox,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// `(value, display label)` pairs in dropdown order.
    Dropdown { options: Vec<(String, String)> },
    Toggle,
    Slider { min: u32, max: u32, step: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSpec {
    pub field: SettingField,
    pub name: &'static str,
    pub desc: &'static str,
    pub kind: ControlKind,
}

/// The four controls, in panel order. Theme options are enumerated from the
/// table so the dropdown always matches what the adapter can resolve.
pub fn controls(themes: &ThemeTable) -> Vec<ControlSpec> {
    vec![
        ControlSpec {
            field: SettingField::Theme,
            name: "Theme",
            desc: "Theme applied to rendered diagrams",
            kind: ControlKind::Dropdown {
                options: themes
                    .iter()
                    .map(|(slug, theme)| (slug.to_string(), theme.display_name.clone()))
                    .collect(),
            },
        },
        ControlSpec {
            field: SettingField::Transparent,
            name: "Transparent background",
            desc: "Render diagrams with a transparent background",
            kind: ControlKind::Toggle,
        },
        ControlSpec {
            field: SettingField::Size,
            name: "Diagram size",
            desc: "Size of diagrams as a percentage of container width",
            kind: ControlKind::Slider {
                min: SIZE_MIN,
                max: SIZE_MAX,
                step: SIZE_STEP,
            },
        },
        ControlSpec {
            field: SettingField::ShowBox,
            name: "Show box around diagram",
            desc: "Display a border box around the diagram",
            kind: ControlKind::Toggle,
        },
    ]
}
