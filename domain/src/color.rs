use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

const RGB_MASK: u32 = 0x00FF_FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_rgb_u32(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    #[must_use]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: u8::try_from((rgb >> 16) & 0xFF).unwrap_or(0),
            g: u8::try_from((rgb >> 8) & 0xFF).unwrap_or(0),
            b: u8::try_from(rgb & 0xFF).unwrap_or(0),
        }
    }

    #[must_use]
    pub fn is_darker_than(&self, threshold: u8) -> bool {
        self.r < threshold && self.g < threshold && self.b < threshold
    }
}

/// Normalized 24-bit color, written as uppercase `#RRGGBB`.
///
/// Two pixels with the same red, green and blue channels always produce the
/// same key, whatever their alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ColorKey(u32);

impl ColorKey {
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(RgbColor::new(r, g, b).to_rgb_u32())
    }

    #[must_use]
    pub fn rgb(self) -> RgbColor {
        RgbColor::from_rgb_u32(self.0)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<RgbColor> for ColorKey {
    fn from(color: RgbColor) -> Self {
        Self(color.to_rgb_u32())
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & RGB_MASK)
    }
}

impl FromStr for ColorKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| {
                DomainError::InvalidColorFormat(format!("expected #RRGGBB, got '{s}'"))
            })?;

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|e| DomainError::InvalidColorFormat(format!("'{s}': {e}")))
    }
}

impl From<ColorKey> for String {
    fn from(key: ColorKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ColorKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_uppercase_zero_padded() {
        assert_eq!(ColorKey::from_rgb(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(ColorKey::from_rgb(30, 30, 30).to_hex(), "#1E1E1E");
        assert_eq!(ColorKey::from_rgb(0, 0, 1).to_hex(), "#000001");
        assert_eq!(ColorKey::from_rgb(171, 205, 239).to_hex(), "#ABCDEF");
    }

    #[test]
    fn parses_either_case_and_normalizes() {
        let key: ColorKey = "#c80000".parse().unwrap();
        assert_eq!(key, ColorKey::from_rgb(200, 0, 0));
        assert_eq!(key.to_string(), "#C80000");
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["C80000", "#C800", "#C8000000", "#GG0000", "#+FFFFF", ""] {
            assert!(
                matches!(
                    input.parse::<ColorKey>(),
                    Err(DomainError::InvalidColorFormat(_))
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn darkness_is_strict_on_every_channel() {
        assert!(RgbColor::new(29, 29, 29).is_darker_than(30));
        assert!(!RgbColor::new(30, 30, 30).is_darker_than(30));
        assert!(!RgbColor::new(5, 5, 200).is_darker_than(30));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&ColorKey::from_rgb(0, 255, 0)).unwrap();
        assert_eq!(json, "\"#00FF00\"");

        let back: ColorKey = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(back.rgb(), RgbColor::new(0, 0, 255));

        assert!(serde_json::from_str::<ColorKey>("\"blue\"").is_err());
    }
}
