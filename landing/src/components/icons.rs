//! Inline SVG icons.
//!
//! Stroke icons on a 24x24 grid, drawn with `currentColor` so they pick up
//! the accent class of the surrounding element.

use leptos::prelude::*;
use portfolio::content::Glyph;

/// Renders one glyph as an inline SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Mail size="24" class="accent-blue" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            <path d=glyph_path(glyph)></path>
        </svg>
    }
}

pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Code => ICON_CODE,
        Glyph::Server => ICON_SERVER,
        Glyph::Database => ICON_DATABASE,
        Glyph::Cloud => ICON_CLOUD,
        Glyph::BarChart => ICON_BAR_CHART,
        Glyph::Settings => ICON_SETTINGS,
        Glyph::Mail => ICON_MAIL,
        Glyph::Phone => ICON_PHONE,
        Glyph::Linkedin => ICON_LINKEDIN,
        Glyph::Github => ICON_GITHUB,
        Glyph::Download => ICON_DOWNLOAD,
        Glyph::ChevronDown => ICON_CHEVRON_DOWN,
    }
}

// =============================================================================
// Path data
// =============================================================================

/// Angle brackets
pub const ICON_CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";

/// Two stacked rack units
pub const ICON_SERVER: &str = "M3 4h18v6H3zM3 14h18v6H3zM7 7h.01M7 17h.01";

/// Cylinder
pub const ICON_DATABASE: &str = "M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3zM3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5M3 12c0 1.66 4 3 9 3s9-1.34 9-3";

pub const ICON_CLOUD: &str = "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z";

/// Axis with three bars
pub const ICON_BAR_CHART: &str = "M3 3v18h18M18 17V9M13 17V5M8 17v-3";

/// Hub with eight spokes
pub const ICON_SETTINGS: &str = "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM12 2v3M12 19v3M4.22 4.22l2.12 2.12M17.66 17.66l2.12 2.12M2 12h3M19 12h3M4.22 19.78l2.12-2.12M17.66 6.34l2.12-2.12";

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";

/// Handset
pub const ICON_PHONE: &str = "M5 4h4l2 5-2.5 1.5a11 11 0 0 0 5 5L15 13l5 2v4a2 2 0 0 1-2 2A16 16 0 0 1 3 6a2 2 0 0 1 2-2";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z";

pub const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2";

/// Tray with arrow
pub const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3";

pub const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_path_data() {
        let glyphs = [
            Glyph::Code,
            Glyph::Server,
            Glyph::Database,
            Glyph::Cloud,
            Glyph::BarChart,
            Glyph::Settings,
            Glyph::Mail,
            Glyph::Phone,
            Glyph::Linkedin,
            Glyph::Github,
            Glyph::Download,
            Glyph::ChevronDown,
        ];
        for glyph in glyphs {
            let path = glyph_path(glyph);
            assert!(path.starts_with('M'), "{glyph:?}: {path}");
        }
    }
}
