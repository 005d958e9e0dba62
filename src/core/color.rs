use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || ChartError::InvalidData(format!("`{input}` is not a hex color"));
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |start: usize, len: usize| -> ChartResult<f64> {
            let raw = u8::from_str_radix(&digits[start..start + len], 16).map_err(|_| invalid())?;
            let value = if len == 1 { raw * 17 } else { raw };
            Ok(f64::from(value) / 255.0)
        };

        match digits.len() {
            3 => Ok(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Ok(Self::rgba(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Parses a hex color or a CSS color keyword such as `steelblue`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(rgb) = named_rgb(&trimmed.to_ascii_lowercase()) {
            let [_, red, green, blue] = rgb.to_be_bytes();
            return Ok(Self::from_rgb8(red, green, blue));
        }
        Self::from_hex(trimmed).map_err(|_| {
            ChartError::InvalidData(format!("`{input}` is not a hex color or CSS color name"))
        })
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.red),
                byte(self.green),
                byte(self.blue),
                byte(self.alpha)
            )
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// CSS color keywords as `0xRRGGBB`.
fn named_rgb(name: &str) -> Option<u32> {
    let rgb = match name {
        "black" => 0x000000,
        "white" => 0xffffff,
        "red" => 0xff0000,
        "green" => 0x008000,
        "blue" => 0x0000ff,
        "yellow" => 0xffff00,
        "cyan" | "aqua" => 0x00ffff,
        "magenta" | "fuchsia" => 0xff00ff,
        "orange" => 0xffa500,
        "purple" => 0x800080,
        "gray" | "grey" => 0x808080,
        "lightgray" | "lightgrey" => 0xd3d3d3,
        "darkgray" | "darkgrey" => 0xa9a9a9,
        "silver" => 0xc0c0c0,
        "pink" => 0xffc0cb,
        "brown" => 0xa52a2a,
        "navy" => 0x000080,
        "teal" => 0x008080,
        "olive" => 0x808000,
        "maroon" => 0x800000,
        "lime" => 0x00ff00,
        "gold" => 0xffd700,
        "indigo" => 0x4b0082,
        "violet" => 0xee82ee,
        "coral" => 0xff7f50,
        "tomato" => 0xff6347,
        "salmon" => 0xfa8072,
        "crimson" => 0xdc143c,
        "firebrick" => 0xb22222,
        "chocolate" => 0xd2691e,
        "tan" => 0xd2b48c,
        "khaki" => 0xf0e68c,
        "orchid" => 0xda70d6,
        "plum" => 0xdda0dd,
        "turquoise" => 0x40e0d0,
        "skyblue" => 0x87ceeb,
        "lightblue" => 0xadd8e6,
        "steelblue" => 0x4682b4,
        "royalblue" => 0x4169e1,
        "cornflowerblue" => 0x6495ed,
        "dodgerblue" => 0x1e90ff,
        "slateblue" => 0x6a5acd,
        "slategray" | "slategrey" => 0x708090,
        "darkblue" => 0x00008b,
        "darkgreen" => 0x006400,
        "darkred" => 0x8b0000,
        "darkorange" => 0xff8c00,
        "seagreen" => 0x2e8b57,
        "forestgreen" => 0x228b22,
        "limegreen" => 0x32cd32,
        "lightgreen" => 0x90ee90,
        "olivedrab" => 0x6b8e23,
        _ => return None,
    };
    Some(rgb)
}
