//! HTML rendering for the dashboard page.
//!
//! Each page section is implemented in its own submodule and returns an
//! HTML fragment; [`page::render_page`] stitches them into a document.
//!
//! ## Submodules
//!
//! - [`cards`]: The row of five metric cards with status pills
//! - [`chart`]: Chart.js options for the dual-axis water level / discharge chart
//! - [`common`]: Shared sections (header, error banner, legend)
//! - [`locale`]: English and Japanese page text
//! - [`page`]: Document skeleton, stylesheet and scripts
//! - [`theme`]: Light/dark color themes
//!
//! ## Page Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! │ Errors (common::render_errors)       │
//! ├──────┬──────┬──────┬──────┬──────────┤
//! │ card │ card │ card │ card │ card     │
//! ├──────┴──────┴──────┴──────┴──────────┤
//! │ Chart (chart::chart_config)          │
//! ├──────────────────────────────────────┤
//! │ Legend (common::render_legend)       │
//! └──────────────────────────────────────┘
//! ```

pub mod cards;
pub mod chart;
pub mod common;
pub mod locale;
pub mod page;
pub mod theme;

pub use chart::AxisBounds;
pub use locale::Locale;
pub use page::render_page;
pub use theme::{Theme, ThemeName};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
