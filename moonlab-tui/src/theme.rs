//! Night-sky theme tokens for the MoonLab TUI
//!
//! # Color Palette
//! - **Accent**: Moonlight silver-blue (focus, highlights)
//! - **Positive**: Soft green (selected options)
//! - **Warning**: Amber (empty-selection warning)
//! - **Neutral**: Lavender (section headers)
//! - **Muted**: Slate (hints, axes, unselected options)
//!
//! Chart series colors come from the chart spec itself; this module only maps
//! them onto terminal colors and markers.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;

use moonlab_core::chart::{LegendGlyph, MarkerSymbol, Rgb};

pub const ACCENT: Color = Color::Rgb(176, 196, 222);
pub const POSITIVE: Color = Color::Rgb(120, 220, 140);
pub const WARNING: Color = Color::Rgb(255, 176, 0);
pub const NEUTRAL: Color = Color::Rgb(181, 160, 230);
pub const MUTED: Color = Color::Rgb(112, 128, 144);
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Cursor row in a list; reversed when its list has focus.
pub fn cursor(focused: bool) -> Style {
    if focused {
        accent().add_modifier(Modifier::REVERSED)
    } else {
        accent()
    }
}

pub fn series_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn series_style(rgb: Rgb) -> Style {
    Style::default().fg(series_color(rgb))
}

/// Terminal cells offer few marker shapes, so symbols share them in a cycle;
/// color still separates phases.
pub fn plot_marker(symbol: MarkerSymbol) -> Marker {
    match symbol {
        MarkerSymbol::Circle | MarkerSymbol::Cross => Marker::Dot,
        MarkerSymbol::Diamond | MarkerSymbol::TriangleUp => Marker::HalfBlock,
        MarkerSymbol::Square | MarkerSymbol::Pentagon => Marker::Block,
        MarkerSymbol::X | MarkerSymbol::Star => Marker::Bar,
    }
}

/// Glyph drawn next to a legend label.
pub fn legend_glyph(glyph: LegendGlyph) -> &'static str {
    match glyph {
        LegendGlyph::Line => "─",
        LegendGlyph::Marker(symbol) => match symbol {
            MarkerSymbol::Circle => "●",
            MarkerSymbol::Diamond => "◆",
            MarkerSymbol::Square => "■",
            MarkerSymbol::X => "✕",
            MarkerSymbol::Cross => "+",
            MarkerSymbol::TriangleUp => "▲",
            MarkerSymbol::Pentagon => "⬟",
            MarkerSymbol::Star => "★",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_color_maps_rgb() {
        assert_eq!(series_color(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn first_two_markers_differ() {
        assert_ne!(
            plot_marker(MarkerSymbol::Circle),
            plot_marker(MarkerSymbol::Diamond)
        );
        assert_ne!(
            legend_glyph(LegendGlyph::Marker(MarkerSymbol::Circle)),
            legend_glyph(LegendGlyph::Marker(MarkerSymbol::Diamond))
        );
    }

    #[test]
    fn trend_legend_is_a_line() {
        assert_eq!(legend_glyph(LegendGlyph::Line), "─");
    }

    #[test]
    fn focused_cursor_is_reversed() {
        assert!(cursor(true).add_modifier.contains(Modifier::REVERSED));
        assert!(!cursor(false).add_modifier.contains(Modifier::REVERSED));
    }
}
