use serde::{Deserialize, Serialize};

/// Dark/light theming shared by the egui and ratatui shells.
/// A single boolean picks the mode; every style token is derived from it.

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert to ratatui::Color
    pub fn to_ratatui(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Convert to egui::Color32
    #[cfg(feature = "gui")]
    pub fn to_egui(&self) -> eframe::egui::Color32 {
        eframe::egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    /// Convert to egui::Color32 with alpha
    #[cfg(feature = "gui")]
    pub fn to_egui_alpha(&self, alpha: u8) -> eframe::egui::Color32 {
        eframe::egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }

    /// Lighten color by percentage
    pub fn lighten(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 + (255.0 - self.r as f32) * amount) as u8,
            g: (self.g as f32 + (255.0 - self.g as f32) * amount) as u8,
            b: (self.b as f32 + (255.0 - self.b as f32) * amount) as u8,
        }
    }

    /// Darken color by percentage
    pub fn darken(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * (1.0 - amount)) as u8,
            g: (self.g as f32 * (1.0 - amount)) as u8,
            b: (self.b as f32 * (1.0 - amount)) as u8,
        }
    }

    /// Linear mix towards `other`; `t = 0` is self, `t = 1` is other
    pub fn mix(&self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }
}

/// Two-stop gradient used for module accents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: u32, to: u32) -> Self {
        Self {
            from: Color::hex(from),
            to: Color::hex(to),
        }
    }

    /// Single-color stand-in where a widget cannot paint a gradient
    pub fn midpoint(&self) -> Color {
        self.from.mix(self.to, 0.5)
    }
}

/// Text tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTokens {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
}

/// Style tokens derived from the theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub surface_hover: Color,
    pub surface_active: Color,
    pub border: Color,
    pub text: TextTokens,
    pub accent: Gradient,
}

/// Fixed semantic colors, independent of mode
pub mod palette {
    use super::Color;

    pub const PRIMARY: Color = Color::hex(0x2563eb);
    pub const SUCCESS: Color = Color::hex(0x16a34a);
    pub const WARNING: Color = Color::hex(0xd97706);
    pub const DANGER: Color = Color::hex(0xdc2626);
    pub const INFO: Color = Color::hex(0x0891b2);
    pub const BADGE: Color = Color::hex(0xef4444);
    pub const ONLINE: Color = Color::hex(0x22c55e);
    pub const SPINNER_TRACK: Color = Color::hex(0xf3f3f3);
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::from_mode(*self)
    }
}

impl ThemeTokens {
    pub fn from_mode(mode: ThemeMode) -> Self {
        let accent = Gradient::new(0x3b82f6, 0x9333ea);
        match mode {
            ThemeMode::Dark => Self {
                mode,
                background: Color::hex(0x111827),
                surface: Color::hex(0x1f2937),
                surface_hover: Color::hex(0x374151),
                surface_active: Color::hex(0x374151),
                border: Color::hex(0x374151),
                text: TextTokens {
                    primary: Color::WHITE,
                    secondary: Color::hex(0xd1d5db),
                    muted: Color::hex(0x9ca3af),
                },
                accent,
            },
            ThemeMode::Light => Self {
                mode,
                background: Color::hex(0xf9fafb),
                surface: Color::WHITE,
                surface_hover: Color::hex(0xf9fafb),
                surface_active: Color::hex(0xf3f4f6),
                border: Color::hex(0xe5e7eb),
                text: TextTokens {
                    primary: Color::hex(0x111827),
                    secondary: Color::hex(0x4b5563),
                    muted: Color::hex(0x6b7280),
                },
                accent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_tokens() {
        let original = ThemeMode::Dark.tokens();
        let back = ThemeMode::Dark.toggled().toggled().tokens();
        assert_eq!(original, back);

        let light = ThemeMode::Light.tokens();
        assert_eq!(light, ThemeMode::Light.toggled().toggled().tokens());
    }

    #[test]
    fn test_modes_differ() {
        let dark = ThemeMode::Dark.tokens();
        let light = ThemeMode::Light.tokens();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text.primary, light.text.primary);
        assert_eq!(dark.accent, light.accent);
    }

    #[test]
    fn test_hex() {
        let c = Color::hex(0x2563eb);
        assert_eq!((c.r, c.g, c.b), (0x25, 0x63, 0xeb));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_color_lighten() {
        let color = Color::rgb(100, 100, 100);
        let lighter = color.lighten(0.5);
        assert!(lighter.r > color.r);
    }

    #[test]
    fn test_color_darken() {
        let color = Color::rgb(200, 200, 200);
        let darker = color.darken(0.5);
        assert!(darker.r < color.r);
    }
}
