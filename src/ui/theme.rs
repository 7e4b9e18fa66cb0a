//! Theme configuration for the page.
//!
//! Supports light and dark themes. Status pill colors are fixed by
//! [`Status::color`](crate::data::Status::color) and do not change with the theme.

use serde::{Deserialize, Serialize};

/// Which theme to render with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

/// Color theme for the page.
///
/// All colors are CSS color strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: &'static str,
    /// Card and chart panel background.
    pub panel: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Large metric values.
    pub value: &'static str,
    /// Captions and secondary labels.
    pub muted: &'static str,
    /// Panel borders and separators.
    pub border: &'static str,
    /// Panel drop shadow.
    pub shadow: &'static str,
    /// Chart grid lines.
    pub grid: &'static str,
    /// Water level series.
    pub water_level: &'static str,
    /// Pump discharge series.
    pub discharge: &'static str,
    /// Low water reference line.
    pub threshold: &'static str,
    /// Background of the error banner.
    pub error_background: &'static str,
    /// Text of the error banner.
    pub error_text: &'static str,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            background: "#f8fafc",
            panel: "#ffffff",
            text: "#111111",
            value: "#0f172a",
            muted: "#666666",
            border: "#e6e6e6",
            shadow: "rgba(0,0,0,0.04)",
            grid: "#e5e7eb",
            water_level: "#2563eb",
            discharge: "#0d9488",
            threshold: "#ef4444",
            error_background: "#fef2f2",
            error_text: "#b91c1c",
        }
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            background: "#0f172a",
            panel: "#1e293b",
            text: "#f1f5f9",
            value: "#f8fafc",
            muted: "#94a3b8",
            border: "#334155",
            shadow: "rgba(0,0,0,0.3)",
            grid: "#334155",
            water_level: "#60a5fa",
            discharge: "#2dd4bf",
            threshold: "#f87171",
            error_background: "#450a0a",
            error_text: "#fecaca",
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
