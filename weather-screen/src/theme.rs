//! Named palette and background styling

use std::fmt;

use ratatui::style::Color;

pub const MONO_DARK: Color = Color::Rgb(0x0F, 0x24, 0x36);
pub const MONO: Color = Color::Rgb(0x1C, 0x2E, 0x42);
pub const MONO_LIGHT: Color = Color::Rgb(0x2E, 0x44, 0x5B);

pub const DI_DARK: Color = Color::Rgb(0x64, 0x7A, 0x8F);
pub const DI: Color = Color::Rgb(0x8C, 0xA1, 0xB4);
pub const DI_LIGHT: Color = Color::Rgb(0xA3, 0xB8, 0xC5);

pub const TRI: Color = Color::Rgb(0xEB, 0xEC, 0xED);
pub const TETRA: Color = Color::Rgb(0xF4, 0xF7, 0xFA);

pub const BLACK: Color = Color::Rgb(0x0B, 0x12, 0x1A);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const RED: Color = Color::Rgb(0xD8, 0x5B, 0x5F);
pub const RED_LIGHT: Color = Color::Rgb(0xF1, 0x9B, 0x9E);

/// Stops of the screen background, top to bottom
pub const GRADIENT: [Color; 3] = [RED, MONO_LIGHT, MONO_DARK];

/// A color with alpha. Terminals have no alpha channel, so it is flattened
/// with [`Rgba::over`] before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Translucent white, used for card and input backgrounds
///
/// Opacity outside `0.0..=1.0` is clamped, so the result can always be
/// composited with [`Rgba::over`].
pub fn glass(opacity: f32) -> Rgba {
    Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: opacity.clamp(0.0, 1.0),
    }
}

impl Rgba {
    /// Composite over an opaque base. Non-RGB bases are returned unchanged.
    pub fn over(self, base: Color) -> Color {
        let Color::Rgb(r, g, b) = base else {
            return base;
        };
        Color::Rgb(
            blend(r, self.r, self.a),
            blend(g, self.g, self.a),
            blend(b, self.b, self.a),
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn blend(base: u8, top: u8, alpha: f32) -> u8 {
    let mixed = f32::from(base) * (1.0 - alpha) + f32::from(top) * alpha;
    mixed.round().clamp(0.0, 255.0) as u8
}

fn lerp(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

/// Background color of `row` in a screen `height` rows tall
pub fn gradient(row: u16, height: u16) -> Color {
    if height <= 1 {
        return GRADIENT[0];
    }
    let t = f32::from(row.min(height - 1)) / f32::from(height - 1);
    let segments = (GRADIENT.len() - 1) as f32;
    let scaled = t * segments;
    let index = (scaled.floor() as usize).min(GRADIENT.len() - 2);
    lerp(GRADIENT[index], GRADIENT[index + 1], scaled - index as f32)
}
