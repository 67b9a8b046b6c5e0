//! Theme module for skills-tui
//!
//! Centralized color palette and styling constants for the questionnaire
//! screens.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded border set shared by all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0d1117)
pub const BG_PRIMARY: Color = Color::Rgb(13, 17, 23);

/// Secondary background color for cards (#161b22)
pub const BG_SECONDARY: Color = Color::Rgb(22, 27, 34);

/// Tertiary background for the highlighted card (#1f2630)
pub const BG_TERTIARY: Color = Color::Rgb(31, 38, 48);

/// Subtle border color (#262d38)
pub const BORDER_SUBTLE: Color = Color::Rgb(38, 45, 56);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary violet accent (#a78bfa)
pub const ACCENT_PRIMARY: Color = Color::Rgb(167, 139, 250);

/// Dimmed violet for secondary elements (#6d5bb8)
pub const ACCENT_DIM: Color = Color::Rgb(109, 91, 184);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Green focused-card indicator (#22c55e)
pub const GREEN_ACTIVE: Color = Color::Rgb(34, 197, 94);

/// Red validation-message color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e6edf3)
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 237, 243);

/// Secondary text color (#9da7b3)
pub const TEXT_SECONDARY: Color = Color::Rgb(157, 167, 179);

/// Muted text color for labels and hints (#636e7b)
pub const TEXT_MUTED: Color = Color::Rgb(99, 110, 123);

/// Alternate between two colors on the animation tick, for the pulsing
/// indicator on the focused card
pub fn pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_color_alternates() {
        assert_eq!(pulse_color(0, GREEN_SUCCESS, ACCENT_DIM), GREEN_SUCCESS);
        assert_eq!(pulse_color(4, GREEN_SUCCESS, ACCENT_DIM), ACCENT_DIM);
        assert_eq!(pulse_color(8, GREEN_SUCCESS, ACCENT_DIM), GREEN_SUCCESS);
    }
}
