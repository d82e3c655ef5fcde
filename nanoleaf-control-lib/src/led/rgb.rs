use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::util::error::NanoleafError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGB {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A colour expressed the way the device's `state` endpoint wants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsb {
    /// Degrees, 0..=360.
    pub hue: u16,
    /// Percent, 0..=100.
    pub saturation: u16,
    /// Percent, 0..=100.
    pub brightness: u16,
}

impl RGB {
    pub const BLACK: RGB = RGB::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGB { red, green, blue }
    }

    /// Scale every component by a brightness percentage.
    ///
    /// `100` returns the colour untouched; values above 100 are rejected.
    pub fn scaled(self, brightness: u8) -> Result<RGB, NanoleafError> {
        if brightness > 100 {
            return Err(NanoleafError::InvalidValue(format!(
                "brightness overlay must be between 0 and 100, got {}",
                brightness
            )));
        }
        if brightness == 100 {
            return Ok(self);
        }
        let scale = f32::from(brightness) / 100.0;
        let scale_component = |c: u8| (f32::from(c) * scale).round().clamp(0.0, 255.0) as u8;
        Ok(RGB {
            red: scale_component(self.red),
            green: scale_component(self.green),
            blue: scale_component(self.blue),
        })
    }

    pub fn to_hsb(self) -> Hsb {
        let rgb: Srgb<f32> = Srgb::new(self.red, self.green, self.blue).into_format();
        let hsv: Hsv = Hsv::from_color(rgb);
        Hsb {
            hue: hsv.hue.into_positive_degrees().round() as u16 % 360,
            saturation: (hsv.saturation * 100.0).round() as u16,
            brightness: (hsv.value * 100.0).round() as u16,
        }
    }
}

// Tuple conversions, used when colours come from plain (r, g, b) data.
impl From<(u8, u8, u8)> for RGB {
    fn from(tuple: (u8, u8, u8)) -> Self {
        RGB {
            red: tuple.0,
            green: tuple.1,
            blue: tuple.2,
        }
    }
}

impl From<RGB> for (u8, u8, u8) {
    fn from(rgb: RGB) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

/// Parses `#RRGGBB` (the leading `#` is optional).
impl FromStr for RGB {
    type Err = NanoleafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(NanoleafError::InvalidValue(format!(
                "hex colour must be #RRGGBB, got {:?}",
                s
            )));
        }
        let bytes = hex::decode(digits)
            .map_err(|e| NanoleafError::InvalidValue(format!("invalid hex colour {:?}: {}", s, e)))?;
        Ok(RGB::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
