use serde::{Deserialize, Serialize};

/// 8-bit RGBA color parsed from config strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::from_rgba(0, 0, 0, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::from_rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Normalized RGBA in `0.0..=1.0`, the layout shaders expect.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Normalized RGB with the alpha channel replaced by `alpha`.
    pub fn with_alpha_f32(&self, alpha: f32) -> [f32; 4] {
        let [r, g, b, _] = self.to_rgba_f32();
        [r, g, b, alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_six_digits() {
        let c = Color::from_hex("#a5b4fc").unwrap();
        assert_eq!(c, Color::from_rgba(0xa5, 0xb4, 0xfc, 255));
    }

    #[test]
    fn from_hex_without_hash_and_with_alpha() {
        let c = Color::from_hex("6366f180").unwrap();
        assert_eq!(c, Color::from_rgba(0x63, 0x66, 0xf1, 0x80));
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn to_hex_round_trips() {
        assert_eq!(Color::from_hex("#994dff").unwrap().to_hex(), "#994dff");
        assert_eq!(Color::from_rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn to_rgba_f32_normalizes() {
        let [r, g, b, a] = Color::WHITE.to_rgba_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 1.0).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert!((a - 1.0).abs() < 1e-6);

        let c = Color::BLACK.with_alpha_f32(0.6);
        assert!((c[0]).abs() < 1e-6);
        assert!((c[3] - 0.6).abs() < 1e-6);
    }
}
