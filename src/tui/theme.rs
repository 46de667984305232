//! TUI color semantics, style constants, and decoration tables.
//!
//! Pure data, consumed by the rendering layer. The decoration tables are
//! fixed lookups indexed by slide position modulo table length: background
//! pair, two ornament tints, and the dot-grid color. Palette values mirror
//! the deck's original scheme.

use ratatui::style::{Color, Modifier, Style};

use crate::types::SlideLayout;

// ============================================================================
// PALETTE
// ============================================================================

const SLATE_900: Color = Color::Rgb(15, 23, 42);
const SLATE_800: Color = Color::Rgb(30, 41, 59);
const SLATE_500: Color = Color::Rgb(100, 116, 139);
const GRAY_900: Color = Color::Rgb(17, 24, 39);
const GRAY_500: Color = Color::Rgb(107, 114, 128);
const GRAY_300: Color = Color::Rgb(209, 213, 219);
const BLUE_900: Color = Color::Rgb(30, 58, 138);
const BLUE_800: Color = Color::Rgb(30, 64, 175);
const BLUE_600: Color = Color::Rgb(37, 99, 235);
const BLUE_500: Color = Color::Rgb(59, 130, 246);
const BLUE_400: Color = Color::Rgb(96, 165, 250);
const BLUE_300: Color = Color::Rgb(147, 197, 253);
const INDIGO_900: Color = Color::Rgb(49, 46, 129);
const INDIGO_800: Color = Color::Rgb(55, 48, 163);
const INDIGO_600: Color = Color::Rgb(79, 70, 229);
const INDIGO_500: Color = Color::Rgb(99, 102, 241);
const INDIGO_400: Color = Color::Rgb(129, 140, 248);
const INDIGO_300: Color = Color::Rgb(165, 180, 252);
const PURPLE_900: Color = Color::Rgb(88, 28, 135);
const PURPLE_800: Color = Color::Rgb(107, 33, 168);
const PURPLE_600: Color = Color::Rgb(147, 51, 234);
const PURPLE_500: Color = Color::Rgb(168, 85, 247);
const PURPLE_300: Color = Color::Rgb(216, 180, 254);
const VIOLET_900: Color = Color::Rgb(76, 29, 149);
const VIOLET_500: Color = Color::Rgb(139, 92, 246);
const GREEN_900: Color = Color::Rgb(20, 83, 45);
const GREEN_600: Color = Color::Rgb(22, 163, 74);
const GREEN_500: Color = Color::Rgb(34, 197, 94);
const GREEN_300: Color = Color::Rgb(134, 239, 172);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Slide title.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Content heading, bold; the view adds the layout accent color.
pub const STYLE_HEADING: Style = Style::new().add_modifier(Modifier::BOLD);

/// De-emphasized metadata (image placeholders, position readout).
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Interactive element / keybinding hint.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Link target shown in modals and link items.
pub const STYLE_URL: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::UNDERLINED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// The clock readout.
pub const STYLE_CLOCK: Style = Style::new().fg(Color::Gray);

/// Indicator dot for the active slide.
pub const STYLE_DOT_ACTIVE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Indicator dot for inactive slides.
pub const STYLE_DOT_INACTIVE: Style = Style::new().fg(Color::DarkGray);

/// Previous/next chevron buttons.
pub const STYLE_CHEVRON: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the lab modal.
pub const STYLE_MODAL_BORDER: Style = Style::new().fg(PURPLE_500);

// ============================================================================
// DECORATION TABLES
// ============================================================================

/// Per-slide background pair: the frame's top half uses the first color,
/// the bottom half the second.
pub const BACKGROUNDS: [(Color, Color); 15] = [
    (SLATE_900, BLUE_900),
    (BLUE_900, INDIGO_900),
    (INDIGO_900, SLATE_900),
    (PURPLE_900, VIOLET_900),
    (SLATE_800, BLUE_800),
    (BLUE_800, INDIGO_800),
    (INDIGO_800, BLUE_900),
    (PURPLE_900, INDIGO_900),
    (INDIGO_900, PURPLE_800),
    (SLATE_900, GREEN_900),
    (GRAY_900, SLATE_800),
    (BLUE_900, INDIGO_800),
    (INDIGO_900, SLATE_900),
    (SLATE_900, GREEN_900),
    (PURPLE_900, BLUE_900),
];

/// Tint of the top-right corner ornament.
pub const DECOR_PRIMARY: [Color; 15] = [
    INDIGO_500,
    BLUE_500,
    BLUE_600,
    PURPLE_500,
    INDIGO_600,
    BLUE_500,
    BLUE_400,
    PURPLE_500,
    PURPLE_600,
    GREEN_500,
    GRAY_500,
    BLUE_500,
    INDIGO_500,
    GREEN_600,
    PURPLE_500,
];

/// Tint of the bottom-left corner ornament.
pub const DECOR_SECONDARY: [Color; 15] = [
    BLUE_500,
    INDIGO_600,
    INDIGO_500,
    VIOLET_500,
    BLUE_500,
    INDIGO_500,
    INDIGO_400,
    INDIGO_500,
    BLUE_500,
    BLUE_500,
    SLATE_500,
    INDIGO_600,
    BLUE_600,
    BLUE_500,
    BLUE_500,
];

/// Dot-grid color scattered behind the content.
pub const DOT_COLORS: [Color; 15] = [
    INDIGO_500,
    BLUE_500,
    INDIGO_600,
    VIOLET_500,
    INDIGO_500,
    BLUE_500,
    BLUE_400,
    PURPLE_500,
    VIOLET_500,
    GREEN_500,
    GRAY_500,
    BLUE_500,
    INDIGO_600,
    GREEN_500,
    PURPLE_500,
];

/// Background pair for the slide at `index`. Total for any index.
pub fn background(index: usize) -> (Color, Color) {
    BACKGROUNDS[index % BACKGROUNDS.len()]
}

/// Top-right ornament tint for the slide at `index`.
pub fn decor_primary(index: usize) -> Color {
    DECOR_PRIMARY[index % DECOR_PRIMARY.len()]
}

/// Bottom-left ornament tint for the slide at `index`.
pub fn decor_secondary(index: usize) -> Color {
    DECOR_SECONDARY[index % DECOR_SECONDARY.len()]
}

/// Dot-grid color for the slide at `index`.
pub fn dot_color(index: usize) -> Color {
    DOT_COLORS[index % DOT_COLORS.len()]
}

// ============================================================================
// LAYOUT ACCENTS
// ============================================================================

/// Accent color per rendering strategy, used for subtitles, headings, and
/// strong text.
pub fn accent(layout: SlideLayout) -> Color {
    match layout {
        SlideLayout::Introductory => BLUE_300,
        SlideLayout::AppIntroduction => INDIGO_300,
        SlideLayout::BasicConcepts => BLUE_300,
        SlideLayout::StructuredExplanation => BLUE_300,
        SlideLayout::ModernBold => BLUE_300,
        SlideLayout::CleanInformative => BLUE_300,
        SlideLayout::MultiAgentSystem => PURPLE_300,
        SlideLayout::InnovativeInterface => INDIGO_300,
        SlideLayout::CollaborativeSolutions => GREEN_300,
        SlideLayout::TechnicalIntegration => GRAY_300,
        SlideLayout::ExampleCase => BLUE_300,
        SlideLayout::FuturisticVision => PURPLE_300,
        SlideLayout::Plain => Color::White,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_the_builtin_deck() {
        assert_eq!(BACKGROUNDS.len(), 15);
        assert_eq!(DECOR_PRIMARY.len(), 15);
        assert_eq!(DECOR_SECONDARY.len(), 15);
        assert_eq!(DOT_COLORS.len(), 15);
    }

    #[test]
    fn lookups_wrap_modulo_table_length() {
        assert_eq!(background(15), background(0));
        assert_eq!(background(31), background(1));
        assert_eq!(decor_primary(17), decor_primary(2));
        assert_eq!(decor_secondary(29), decor_secondary(14));
        assert_eq!(dot_color(150), dot_color(0));
    }

    #[test]
    fn lookups_are_referentially_transparent() {
        for i in [0usize, 3, 7, 14, 99, usize::MAX / 2] {
            assert_eq!(background(i), background(i));
            assert_eq!(decor_primary(i), decor_primary(i));
            assert_eq!(decor_secondary(i), decor_secondary(i));
            assert_eq!(dot_color(i), dot_color(i));
        }
    }

    #[test]
    fn accents_follow_the_scheme() {
        assert_eq!(accent(SlideLayout::MultiAgentSystem), PURPLE_300);
        assert_eq!(accent(SlideLayout::CollaborativeSolutions), GREEN_300);
        assert_eq!(accent(SlideLayout::TechnicalIntegration), GRAY_300);
        assert_eq!(accent(SlideLayout::Plain), Color::White);
    }

    #[test]
    fn dot_styles_distinguish_active_from_inactive() {
        assert_eq!(STYLE_DOT_ACTIVE.fg, Some(Color::White));
        assert!(STYLE_DOT_ACTIVE.add_modifier.contains(Modifier::BOLD));
        assert_eq!(STYLE_DOT_INACTIVE.fg, Some(Color::DarkGray));
    }

    #[test]
    fn help_line_is_dimmed() {
        assert_eq!(STYLE_HELP.fg, Some(Color::DarkGray));
    }
}
