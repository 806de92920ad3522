use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::ReelError;

/// Straight-alpha sRGB color: 8-bit channels plus a unit alpha.
///
/// Serialized as a CSS color string (`#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise) so the
/// compositor can consume it unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with alpha; alpha is clamped when serialized.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same channels, different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// `true` when alpha is 1.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = self.a.clamp(0.0, 1.0);
            write!(f, "rgba({},{},{},{a})", self.r, self.g, self.b)
        }
    }
}

impl FromStr for Color {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body);
        }
        Err(ReelError::validation(format!(
            "unsupported color \"{s}\" (expected #RRGGBB, #RRGGBBAA or rgba(...))"
        )))
    }
}

fn parse_hex(s: &str) -> Result<Color, ReelError> {
    fn hex_byte(pair: &str) -> Result<u8, ReelError> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ReelError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(ReelError::validation("hex color must be ASCII"));
    }
    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            f64::from(hex_byte(&s[6..8])?) / 255.0,
        )),
        _ => Err(ReelError::validation(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn parse_functional(body: &str) -> Result<Color, ReelError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ReelError::validation(format!(
            "rgba() takes 3 or 4 components, got {}",
            parts.len()
        )));
    }

    let channel = |p: &str| -> Result<u8, ReelError> {
        let v: f64 = p
            .parse()
            .map_err(|_| ReelError::validation(format!("invalid color channel \"{p}\"")))?;
        Ok(v.round().clamp(0.0, 255.0) as u8)
    };
    let a = match parts.get(3) {
        Some(p) => p
            .parse::<f64>()
            .map_err(|_| ReelError::validation(format!("invalid alpha \"{p}\"")))?
            .clamp(0.0, 1.0),
        None => 1.0,
    };
    Ok(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "one")]
                a: f64,
            },
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
        }
    }
}
