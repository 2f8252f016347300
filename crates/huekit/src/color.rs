//! Hex colours rendered as 24-bit terminal escapes.
//!
//! [`hex`] is the pure formatter used for palette swatches and status glyphs.
//! [`Painter`] wraps it with the `console` crate's colour detection so that
//! status lines stay plain when output is piped or `NO_COLOR` is set.

use clap::ValueEnum;

/// Success glyph colour.
pub const SUCCESS: &str = "#33ff33";

/// Failure and cancellation glyph colour.
pub const FAILURE: &str = "#ff3333";

/// Block used to draw one swatch cell.
pub const SWATCH_BLOCK: &str = "██";

/// Parses `#RRGGBB` into its channels.
///
/// Returns `None` unless the input is `#` followed by exactly six hex digits.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Wraps `text` in a true-colour foreground escape followed by a reset.
///
/// Malformed colours leave the text unstyled.
pub fn hex(color: &str, text: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}

/// One painted block per hue, separated by single spaces.
pub fn swatch<S: AsRef<str>>(hues: &[S]) -> String {
    hues.iter()
        .map(|hue| hex(hue.as_ref(), SWATCH_BLOCK))
        .collect::<Vec<_>>()
        .join(" ")
}

/// When to colour status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when the terminal supports it.
    #[default]
    Auto,
    /// Always emit colour escapes.
    Always,
    /// Never emit colour escapes.
    Never,
}

/// Applies [`hex`] only when colour output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Resolves a [`ColorChoice`] against the terminal.
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Auto => console::colors_enabled(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { enabled }
    }

    /// A painter that never colours.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            hex(color, text)
        } else {
            text.to_string()
        }
    }

    /// `✓ message` with a green tick.
    pub fn success(&self, message: &str) -> String {
        format!("{} {}", self.paint(SUCCESS, "✓"), message)
    }

    /// `✗ message` with a red cross.
    pub fn failure(&self, message: &str) -> String {
        format!("{} {}", self.paint(FAILURE, "✗"), message)
    }

    /// Like [`swatch`], but plain blocks when colour is disabled.
    pub fn swatch<S: AsRef<str>>(&self, hues: &[S]) -> String {
        if self.enabled {
            swatch(hues)
        } else {
            hues.iter()
                .map(|_| SWATCH_BLOCK)
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_wraps_text_in_true_color_escape() {
        assert_eq!(
            hex("#FF6347", "Tomato red"),
            "\x1b[38;2;255;99;71mTomato red\x1b[0m"
        );
        assert_eq!(hex("#000000", ""), "\x1b[38;2;0;0;0m\x1b[0m");
    }

    #[test]
    fn hex_accepts_lowercase() {
        assert_eq!(hex("#33ff33", "✓"), "\x1b[38;2;51;255;51m✓\x1b[0m");
    }

    #[test]
    fn malformed_colors_leave_text_unstyled() {
        for bad in ["33ff33", "#33ff3", "#33ff333", "#gg0000", "#+f0000", "", "#ééé"] {
            assert_eq!(hex(bad, "text"), "text", "input {:?}", bad);
        }
    }

    #[test]
    fn swatch_paints_one_block_per_hue() {
        let out = swatch(&["#ff0000", "#00ff00"]);
        assert_eq!(
            out,
            "\x1b[38;2;255;0;0m██\x1b[0m \x1b[38;2;0;255;0m██\x1b[0m"
        );
        assert_eq!(swatch::<&str>(&[]), "");
    }

    #[test]
    fn painter_respects_choice() {
        let always = Painter::new(ColorChoice::Always);
        assert!(always.is_enabled());
        assert_eq!(always.success("done"), "\x1b[38;2;51;255;51m✓\x1b[0m done");

        let never = Painter::new(ColorChoice::Never);
        assert_eq!(never.failure("stopped"), "✗ stopped");
        assert_eq!(never.swatch(&["#ff0000", "#00ff00"]), "██ ██");
    }

    proptest! {
        #[test]
        fn parse_hex_round_trips_channels(r: u8, g: u8, b: u8) {
            let color = format!("#{:02x}{:02X}{:02x}", r, g, b);
            prop_assert_eq!(parse_hex(&color), Some((r, g, b)));
        }
    }
}
