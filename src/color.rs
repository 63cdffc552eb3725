//! Color values and the text API built on the hex codec.
//!
//! [`Color`] holds four 8-bit channels: red, green, blue and alpha. Each
//! channel can also be read as a fraction in `0.0..=1.0` (`channel / 255`).
//!
//! # Examples
//!
//! ## Lenient Parsing
//!
//! [`Color::from_text`] never fails. Unknown or malformed input degrades to
//! a best-effort value, usually transparent black:
//!
//! ```
//! use hexcolor::Color;
//!
//! assert_eq!(Color::from_text(Some("orange")), Color::rgb(255, 165, 0));
//! assert_eq!(Color::from_text(Some("#abc")), Color::rgb(0xaa, 0xbb, 0xcc));
//! assert_eq!(Color::from_text(Some("abc7")), Color::new(0xaa, 0xbb, 0xcc, 0x77));
//! assert_eq!(Color::from_text(None), Color::TRANSPARENT);
//! assert_eq!(Color::from_text(Some("nonsense")), Color::TRANSPARENT);
//! ```
//!
//! ## Strict Parsing
//!
//! ```
//! use hexcolor::{Color, ColorParseError};
//!
//! let teal: Color = "teal".parse().unwrap();
//! assert_eq!(teal.hex(), "008080");
//!
//! assert!(matches!(
//!     Color::parse("nonsense"),
//!     Err(ColorParseError::UnknownColor(_))
//! ));
//! ```
//!
//! ## Foreign Colors
//!
//! Adapters for platform color types go through [`RgbaComponents`]. A value
//! that is not RGB cannot be encoded:
//!
//! ```
//! use hexcolor::{RawColor, hex, hex_with_alpha};
//!
//! let red = RawColor::rgba(1.0, 0.0, 0.0, 0.5);
//! assert_eq!(hex_with_alpha(&red), "ff00007f");
//!
//! let gray = RawColor::grayscale(0.5, 1.0);
//! assert_eq!(hex(&gray), "Color not RGB.");
//! ```

use regex::Regex;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::hex::{self, ColorSource};
use crate::names;

/// An RGBA color with 8-bit channels.
///
/// The default value is transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black, the value of `clear`, `transparent`, empty
    /// and absent input.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Create a color from fractional channels.
    ///
    /// Each fraction is scaled by 255 and truncated toward zero. Values
    /// outside `0.0..=1.0` are clamped; NaN becomes 0.
    #[must_use]
    pub fn from_fractions(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(
            channel_from_fraction(red),
            channel_from_fraction(green),
            channel_from_fraction(blue),
            channel_from_fraction(alpha),
        )
    }

    /// Unpack a `0xRRGGBBAA` value.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        let [red, green, blue, alpha] = value.to_be_bytes();
        Self::new(red, green, blue, alpha)
    }

    /// Pack into `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.red, self.green, self.blue, self.alpha])
    }

    /// Channels as fractions in `0.0..=1.0`, in RGBA order.
    #[must_use]
    pub fn fractions(&self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            f64::from(self.alpha) / 255.0,
        )
    }

    /// Returns true if alpha is 255.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.alpha == 255
    }

    /// Returns true if alpha is 0.
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    /// Lowercase `rrggbb`, without `#`.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::HexFormat::rgb().render(*self)
    }

    /// Lowercase `rrggbbaa`, without `#`.
    #[must_use]
    pub fn hex_with_alpha(&self) -> String {
        hex::HexFormat::rgba().render(*self)
    }

    /// CSS name of this exact value, if there is one.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        names::name_for(*self)
    }

    /// Resolve optional text to a color. Never fails.
    ///
    /// Accepted forms, tried in order:
    /// - absent input: transparent black
    /// - a CSS color name, `clear`, `transparent` or the empty string
    ///   (case-insensitive)
    /// - hex with or without `#`: `rgb`, `rgba`, `rrggbb`, `rrggbbaa`
    ///
    /// Anything else is decoded on a best-effort basis, which usually yields
    /// transparent black. Use [`Color::parse`] to reject such input.
    #[must_use]
    pub fn from_text(text: Option<&str>) -> Self {
        hex::resolve(text).color
    }

    /// Parse text strictly.
    ///
    /// Accepts the same names and hex forms as [`Color::from_text`], but
    /// returns an error instead of guessing.
    ///
    /// # Errors
    ///
    /// - `MalformedHex` if the text looks like hex but has an invalid length
    ///   or stray characters
    /// - `UnknownColor` if the text is neither a color name nor hex
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^#?(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
                .expect("valid regex")
        });

        let resolution = hex::resolve(Some(text));
        if resolution.source != ColorSource::Literal || LITERAL_RE.is_match(text) {
            return Ok(resolution.color);
        }

        let digits = text.strip_prefix('#').unwrap_or(text);
        if text.starts_with('#') || digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Err(ColorParseError::MalformedHex(text.to_string()))
        } else {
            Err(ColorParseError::UnknownColor(text.to_string()))
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=255 before the cast"
)]
fn channel_from_fraction(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction * 255.0).clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_with_alpha())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

// ============================================================================
// Foreign Colors
// ============================================================================

/// Color model of a [`RawColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorModel {
    /// Red, green, blue and optional alpha.
    #[default]
    Rgb,
    /// White level and optional alpha.
    Grayscale,
    /// Cyan, magenta, yellow, key and optional alpha.
    Cmyk,
    /// Image or pattern fill with no channel values.
    Pattern,
}

impl ColorModel {
    /// Get the name of this color model.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Grayscale => "grayscale",
            Self::Cmyk => "cmyk",
            Self::Pattern => "pattern",
        }
    }
}

/// A color as a host toolkit stores it: a model plus fractional components.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawColor {
    pub model: ColorModel,
    pub components: SmallVec<[f64; 4]>,
}

impl RawColor {
    /// Create a raw color from any component list.
    #[must_use]
    pub fn new(model: ColorModel, components: impl IntoIterator<Item = f64>) -> Self {
        Self {
            model,
            components: components.into_iter().collect(),
        }
    }

    /// RGBA fractions.
    #[must_use]
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(ColorModel::Rgb, [red, green, blue, alpha])
    }

    /// Grayscale white level and alpha.
    #[must_use]
    pub fn grayscale(white: f64, alpha: f64) -> Self {
        Self::new(ColorModel::Grayscale, [white, alpha])
    }
}

/// Converting back through [`RgbaComponents`] truncates, so a channel may
/// come back one step lower.
impl From<Color> for RawColor {
    fn from(color: Color) -> Self {
        let (red, green, blue, alpha) = color.fractions();
        Self::rgba(red, green, blue, alpha)
    }
}

/// Anything that may be able to report integer RGBA channels.
///
/// This is the seam for host color types: implement it for the platform
/// color and the hex encoders accept it directly.
pub trait RgbaComponents {
    /// The RGBA channels, or `None` if the value has no RGB representation.
    fn rgba_components(&self) -> Option<Color>;
}

impl RgbaComponents for Color {
    fn rgba_components(&self) -> Option<Color> {
        Some(*self)
    }
}

impl RgbaComponents for RawColor {
    /// Three components are read as opaque RGB, four as RGBA. Any other
    /// model or component count has no RGB representation.
    fn rgba_components(&self) -> Option<Color> {
        let color = match (self.model, self.components.as_slice()) {
            (ColorModel::Rgb, &[red, green, blue]) => {
                Some(Color::from_fractions(red, green, blue, 1.0))
            }
            (ColorModel::Rgb, &[red, green, blue, alpha]) => {
                Some(Color::from_fractions(red, green, blue, alpha))
            }
            _ => None,
        };
        if color.is_none() {
            log::trace!(
                "{} color with {} components has no RGB form",
                self.model.name(),
                self.components.len()
            );
        }
        color
    }
}

impl<T: RgbaComponents + ?Sized> RgbaComponents for &T {
    fn rgba_components(&self) -> Option<Color> {
        (**self).rgba_components()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error type for strict color parsing and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex-like input with an invalid length or non-hex characters.
    MalformedHex(String),
    /// Neither a color name nor hex.
    UnknownColor(String),
    /// The color has no red/green/blue/alpha components.
    NotRgbColor,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHex(s) => write!(f, "Malformed hex color: {s}"),
            Self::UnknownColor(s) => write!(f, "Unknown color: {s}"),
            Self::NotRgbColor => write!(f, "{}", hex::NOT_RGB_SENTINEL),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new_and_rgb() {
        let c = Color::new(1, 2, 3, 4);
        assert_eq!((c.red, c.green, c.blue, c.alpha), (1, 2, 3, 4));
        assert_eq!(Color::rgb(1, 2, 3).alpha, 255);
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_color_u32_packing() {
        let c = Color::from_u32(0x1122_3344);
        assert_eq!(c, Color::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(c.to_u32(), 0x1122_3344);
        assert_eq!(u32::from(Color::WHITE), 0xffff_ffff);
    }

    #[test]
    fn test_color_fractions() {
        let (r, g, b, a) = Color::new(255, 0, 51, 128).fractions();
        assert!((r - 1.0).abs() < f64::EPSILON);
        assert!(g.abs() < f64::EPSILON);
        assert!((b - 0.2).abs() < 1e-9);
        assert!((a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_fractions_truncates() {
        assert_eq!(Color::from_fractions(1.0, 0.0, 0.5, 1.0), Color::rgb(255, 0, 127));
        assert_eq!(Color::from_fractions(0.999, 0.0, 0.0, 1.0).red, 254);
    }

    #[test]
    fn test_from_fractions_clamps() {
        let c = Color::from_fractions(2.0, -1.0, f64::NAN, f64::INFINITY);
        assert_eq!(c, Color::new(255, 0, 0, 255));
    }

    #[test]
    fn test_color_hex_strings() {
        let c = Color::new(0xff, 0x00, 0x80, 0x7f);
        assert_eq!(c.hex(), "ff0080");
        assert_eq!(c.hex_with_alpha(), "ff00807f");
        assert_eq!(c.to_string(), "#ff00807f");
    }

    #[test]
    fn test_color_from_conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::rgb(1, 2, 3));
        assert_eq!(Color::from((1, 2, 3, 4)), Color::new(1, 2, 3, 4));
        assert_eq!(Color::from([1, 2, 3]), Color::rgb(1, 2, 3));
        assert_eq!(Color::from([1, 2, 3, 4]), Color::new(1, 2, 3, 4));
        assert_eq!(Color::from(0x0102_0304), Color::new(1, 2, 3, 4));
    }

    #[test]
    fn test_color_name() {
        assert_eq!(Color::rgb(255, 165, 0).name(), Some("ORANGE"));
        assert_eq!(Color::rgb(255, 165, 1).name(), None);
    }

    #[test]
    fn test_from_text_lenient() {
        assert_eq!(Color::from_text(None), Color::TRANSPARENT);
        assert_eq!(Color::from_text(Some("")), Color::TRANSPARENT);
        assert_eq!(Color::from_text(Some("Orange")), Color::rgb(255, 165, 0));
        assert_eq!(Color::from_text(Some("#f00")), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_text(Some("zzz")), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_names_and_hex() {
        assert_eq!(Color::parse("navy").unwrap(), Color::rgb(0, 0, 0x80));
        assert_eq!(Color::parse("CLEAR").unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::parse("").unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::parse("#ABC").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(Color::parse("abcd").unwrap(), Color::new(0xaa, 0xbb, 0xcc, 0xdd));
        assert_eq!(Color::parse("00ffff").unwrap(), Color::rgb(0, 255, 255));
        assert_eq!(Color::parse("#00FFFF77").unwrap(), Color::new(0, 255, 255, 0x77));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Color::parse("#12345"),
            Err(ColorParseError::MalformedHex("#12345".to_string()))
        );
        assert_eq!(
            Color::parse("12345"),
            Err(ColorParseError::MalformedHex("12345".to_string()))
        );
        assert_eq!(
            Color::parse("#ggg"),
            Err(ColorParseError::MalformedHex("#ggg".to_string()))
        );
        assert_eq!(
            Color::parse("bright_red"),
            Err(ColorParseError::UnknownColor("bright_red".to_string()))
        );
        assert!(Color::parse(" red").is_err());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Color = "tomato".parse().unwrap();
        let b = Color::try_from("TOMATO").unwrap();
        let c = Color::try_from(String::from("#ff6347")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ColorParseError::NotRgbColor.to_string(), "Color not RGB.");
        assert_eq!(
            ColorParseError::UnknownColor("x".to_string()).to_string(),
            "Unknown color: x"
        );
        assert_eq!(
            ColorParseError::MalformedHex("#x".to_string()).to_string(),
            "Malformed hex color: #x"
        );
    }

    #[test]
    fn test_raw_color_rgb_components() {
        let rgba = RawColor::rgba(1.0, 0.0, 0.5, 0.0);
        assert_eq!(rgba.rgba_components(), Some(Color::new(255, 0, 127, 0)));

        let rgb = RawColor::new(ColorModel::Rgb, [0.0, 1.0, 0.0]);
        assert_eq!(rgb.rgba_components(), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_raw_color_without_rgb() {
        assert_eq!(RawColor::grayscale(0.5, 1.0).rgba_components(), None);
        assert_eq!(
            RawColor::new(ColorModel::Cmyk, [0.0, 0.0, 0.0, 1.0, 1.0]).rgba_components(),
            None
        );
        assert_eq!(RawColor::new(ColorModel::Pattern, std::iter::empty()).rgba_components(), None);
        assert_eq!(RawColor::new(ColorModel::Rgb, [1.0, 1.0]).rgba_components(), None);
        assert_eq!(RawColor::default().rgba_components(), None);
    }

    #[test]
    fn test_raw_color_from_color() {
        let raw = RawColor::from(Color::new(255, 0, 0, 255));
        assert_eq!(raw.model, ColorModel::Rgb);
        assert_eq!(raw.components.len(), 4);
        assert_eq!(raw.rgba_components(), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_color_model_names() {
        assert_eq!(ColorModel::Rgb.name(), "rgb");
        assert_eq!(ColorModel::Grayscale.name(), "grayscale");
        assert_eq!(ColorModel::Cmyk.name(), "cmyk");
        assert_eq!(ColorModel::Pattern.name(), "pattern");
    }
}
