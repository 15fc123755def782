//! Color values used by theme fills.
//!
//! Built-in themes are declared with const [`Rgba`] values. Colors coming from
//! profiles or the command line are parsed from CSS-like strings via
//! [`FromStr`].

use std::fmt;
use std::str::FromStr;

use palette::{Srgb, Srgba};
use resvg::tiny_skia::Color;

use crate::error::LogoError;

/// A straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::hex(0x000000);
    pub const WHITE: Self = Self::hex(0xFFFFFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn to_skia(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Parses `transparent`, `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `rgb(r, g, b)` and `rgba(r, g, b, a)` (alpha in `0.0..=1.0`).
impl FromStr for Rgba {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LogoError::InvalidColor(s.to_string());
        let value = s.trim().to_ascii_lowercase();

        if value == "transparent" {
            return Ok(Self::TRANSPARENT);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return match hex.len() {
                3 | 6 => {
                    let rgb: Srgb<u8> = hex.parse().map_err(|_| invalid())?;
                    Ok(Self::new(rgb.red, rgb.green, rgb.blue, 255))
                }
                4 | 8 => {
                    let rgba: Srgba<u8> = hex.parse().map_err(|_| invalid())?;
                    Ok(Self::new(rgba.red, rgba.green, rgba.blue, rgba.alpha))
                }
                _ => Err(invalid()),
            };
        }

        let args = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        parse_functional(args).ok_or_else(invalid)
    }
}

fn parse_functional(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |part: &str| -> Option<u8> {
        let v: f32 = part.parse().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };

    let alpha = match parts.get(3) {
        Some(part) => {
            let v: f32 = part.parse().ok()?;
            if !v.is_finite() {
                return None;
            }
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };

    Some(Rgba::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal() {
        let red = Rgba::hex(0xB40000);
        assert_eq!(red.as_tuple(), (180, 0, 0, 255));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#B40000".parse::<Rgba>().unwrap(), Rgba::hex(0xB40000));
        assert_eq!("#b40000".parse::<Rgba>().unwrap(), Rgba::hex(0xB40000));
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!(
            "#ff000080".parse::<Rgba>().unwrap(),
            Rgba::new(255, 0, 0, 128)
        );
    }

    #[test]
    fn parses_functional_and_keyword() {
        assert_eq!(
            "rgba(255,0,0,0.5)".parse::<Rgba>().unwrap(),
            Rgba::new(255, 0, 0, 128)
        );
        assert_eq!(
            "rgb( 0, 255, 0 )".parse::<Rgba>().unwrap(),
            Rgba::new(0, 255, 0, 255)
        );
        assert_eq!("transparent".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn rejects_malformed() {
        assert!("rgba(255,255,255,0.5".parse::<Rgba>().is_err());
        assert!("#12".parse::<Rgba>().is_err());
        assert!("chartreuse-ish".parse::<Rgba>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#01020304");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);
        assert_eq!(Rgba::BLACK.to_string(), "#000000");
    }
}
