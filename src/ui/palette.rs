//! Whispr type colors and ANSI escape sequence generation.

use crate::domain::WhisprType;

/// Accent color for a whispr type, as a hex string.
#[must_use]
pub const fn type_color(kind: WhisprType) -> &'static str {
    match kind {
        WhisprType::Question => "#89b4fa",
        WhisprType::Compliment => "#f5c2e7",
        WhisprType::Roast => "#f38ba8",
        WhisprType::Confession => "#cba6f7",
        WhisprType::Rumor => "#f9e2af",
        WhisprType::Suggestion => "#a6e3a1",
        WhisprType::Secret => "#9399b2",
        WhisprType::HotTake => "#fab387",
        WhisprType::Dare => "#94e2d5",
    }
}

/// Parses `#rrggbb`, falling back to white on malformed input.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#').trim();

    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255);
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    (r, g, b)
}

/// ANSI 24-bit foreground color escape sequence.
#[must_use]
pub fn fg(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\u{001b}[38;2;{r};{g};{b}m")
}

#[must_use]
pub const fn bold() -> &'static str {
    "\u{001b}[1m"
}

#[must_use]
pub const fn dim() -> &'static str {
    "\u{001b}[2m"
}

#[must_use]
pub const fn reset() -> &'static str {
    "\u{001b}[0m"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_color_parses() {
        for kind in WhisprType::ALL {
            assert_ne!(hex_to_rgb(type_color(kind)), (255, 255, 255), "{kind}");
        }
    }

    #[test]
    fn fg_formats_truecolor_sequence() {
        assert_eq!(fg("#010203"), "\u{1b}[38;2;1;2;3m");
        assert_eq!(fg("nope"), "\u{1b}[38;2;255;255;255m");
    }
}
