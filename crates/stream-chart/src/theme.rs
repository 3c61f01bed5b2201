// File: crates/stream-chart/src/theme.rs
// Summary: Light/Dark theming plus the RGBA color type used in plot configs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// 8-bit RGBA color. Serialized as a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || ChartError::InvalidColor(s.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad());
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
            if !hex.is_ascii() {
                return Err(bad());
            }
            return match hex.len() {
                3 => Ok(Self::rgb(nib(0)? * 17, nib(1)? * 17, nib(2)? * 17)),
                6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
                _ => Err(bad()),
            };
        }
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let channel = |p: &str| p.parse::<u8>().map_err(|_| bad());
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha: f32 = a.parse().map_err(|_| bad())?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(bad());
                }
                let a = (alpha * 255.0).round() as u8;
                Ok(Self::from_argb(a, channel(r)?, channel(g)?, channel(b)?))
            }
            _ => Err(bad()),
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Colors supplied by the host theme. `text` and `border` drive axis styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub text: Rgba,
    pub border: Rgba,
    pub grid: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            text: Rgba::rgb(235, 235, 245),
            border: Rgba::rgb(180, 180, 190),
            grid: Rgba::rgb(40, 40, 45),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            text: Rgba::rgb(20, 20, 30),
            border: Rgba::rgb(60, 60, 70),
            grid: Rgba::rgb(230, 230, 235),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            text: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            border: Rgba::rgb(0x93, 0xa1, 0xa1),     // base1
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            text: Rgba::rgb(0x00, 0x2b, 0x36),       // base03
            border: Rgba::rgb(0x65, 0x7b, 0x83),     // base00
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            text: Rgba::rgb(0xff, 0xff, 0xff),
            border: Rgba::rgb(0xff, 0xff, 0xff),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
