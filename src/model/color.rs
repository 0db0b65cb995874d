use serde::Serialize;

/// An 8-bit RGBA color decoded from a task's `colorCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Relative luminance in 0.0..=1.0 (sRGB weights, no gamma correction)
    pub fn luminance(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b))
            / 255.0
    }
}

/// Decode a hex color like `#fff`, `ABCDEF` or `#00ff00`.
///
/// Non-alphanumeric characters are stripped first. Three digits expand each
/// nibble (`f` -> `ff`); six digits read as `RRGGBB`. Anything else, including
/// non-hex letters, silently decodes to opaque black.
pub fn decode_color(hex: &str) -> Rgba {
    let digits: String = hex.chars().filter(|c| c.is_alphanumeric()).collect();

    let decoded = match digits.chars().count() {
        3 => parse_hex(&digits).map(|v| {
            let nibble = |shift: u32| ((v >> shift) & 0xF) as u8 * 17;
            Rgba::opaque(nibble(8), nibble(4), nibble(0))
        }),
        6 => parse_hex(&digits)
            .map(|v| Rgba::opaque((v >> 16) as u8, (v >> 8 & 0xFF) as u8, (v & 0xFF) as u8)),
        _ => None,
    };

    decoded.unwrap_or_else(|| {
        tracing::debug!(color_code = hex, "unrecognized color code, using black");
        Rgba::BLACK
    })
}

fn parse_hex(digits: &str) -> Option<u32> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands_nibbles() {
        assert_eq!(decode_color("#fff"), Rgba::opaque(255, 255, 255));
        assert_eq!(decode_color("#f80"), Rgba::opaque(0xFF, 0x88, 0x00));
        assert_eq!(decode_color("123"), Rgba::opaque(0x11, 0x22, 0x33));
    }

    #[test]
    fn long_form() {
        assert_eq!(decode_color("#FF4444"), Rgba::opaque(0xFF, 0x44, 0x44));
        assert_eq!(decode_color("0c001b"), Rgba::opaque(0x0C, 0x00, 0x1B));
    }

    #[test]
    fn strips_non_alphanumerics_anywhere() {
        assert_eq!(decode_color("  #ab-cd-ef "), Rgba::opaque(0xAB, 0xCD, 0xEF));
        assert_eq!(decode_color("##fff"), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn other_lengths_fall_back_to_black() {
        assert_eq!(decode_color(""), Rgba::BLACK);
        assert_eq!(decode_color("#"), Rgba::BLACK);
        assert_eq!(decode_color("#ff"), Rgba::BLACK);
        assert_eq!(decode_color("#ffff"), Rgba::BLACK);
        assert_eq!(decode_color("#ff00ff00"), Rgba::BLACK);
    }

    #[test]
    fn non_hex_digits_fall_back_to_black() {
        assert_eq!(decode_color("#zzz"), Rgba::BLACK);
        assert_eq!(decode_color("#fzz"), Rgba::BLACK);
        assert_eq!(decode_color("#GGGGGG"), Rgba::BLACK);
        assert_eq!(decode_color("#ééé"), Rgba::BLACK);
    }

    #[test]
    fn alpha_is_always_opaque() {
        for hex in ["#000", "#abc", "#123456", "#FFFFFF", "garbage", ""] {
            assert_eq!(decode_color(hex).a, 255, "{hex}");
        }
    }

    #[test]
    fn decoding_is_deterministic() {
        for hex in ["#1a2", "#a1b2c3", "F0F", "00FF7f"] {
            assert_eq!(decode_color(hex), decode_color(hex));
        }
    }

    #[test]
    fn luminance_extremes() {
        assert!(Rgba::BLACK.luminance() < 0.01);
        assert!(Rgba::opaque(255, 255, 255).luminance() > 0.99);
    }
}
