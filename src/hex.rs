//! Hex codec.
//!
//! Every text input is first normalized to a [`CanonicalHex`]: eight hex
//! digits, no `#`, RGBA order. Decoding reads the channels out of that
//! string; encoding goes straight from channels to text.
//!
//! ```
//! use hexcolor::hex;
//! use hexcolor::Color;
//!
//! assert_eq!(hex::normalize(Some("#00FFFF")).as_str(), "00ffffff");
//! assert_eq!(hex::normalize(Some("abc7")).as_str(), "aabbcc77");
//! assert_eq!(hex::normalize(Some("Orange")).as_str(), "ffa500ff");
//! assert_eq!(hex::normalize(None).as_str(), "00000000");
//!
//! let color = hex::decode(&hex::normalize(Some("ff000080")));
//! assert_eq!(color, Color::new(255, 0, 0, 128));
//!
//! assert_eq!(hex::encode(&color, false).unwrap(), "ff0000");
//! assert_eq!(hex::encode(&color, true).unwrap(), "ff000080");
//! ```
//!
//! Normalization tries the name table before anything else, so a color name
//! always wins over a hex reading of the same text.

use std::fmt;

use crate::color::{Color, ColorParseError, RgbaComponents};
use crate::names;

/// Returned by [`hex`] and [`hex_with_alpha`] in place of a hex string when
/// the color has no RGB components.
pub const NOT_RGB_SENTINEL: &str = "Color not RGB.";

const OPAQUE_ALPHA: &str = "ff";

/// Normalized RGBA hex text: `rrggbbaa`, lowercase, no `#`.
///
/// Normalization does not validate digits, so values built from garbled
/// input may break the invariant. [`CanonicalHex::is_well_formed`] checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalHex(String);

impl CanonicalHex {
    /// `00000000`.
    #[must_use]
    pub fn transparent() -> Self {
        Self(names::TRANSPARENT_HEX.to_string())
    }

    /// Canonical form of a color. Always well formed.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        Self(color.hex_with_alpha())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the value is exactly eight hex digits.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 8 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for CanonicalHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Color> for CanonicalHex {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

// ============================================================================
// Normalize
// ============================================================================

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSource {
    /// Matched a CSS name (or `CLEAR` / `TRANSPARENT`). Holds the table's
    /// uppercase spelling.
    Named(&'static str),
    /// Read as literal hex.
    Literal,
    /// Absent or empty input, resolved to transparent black.
    Defaulted,
}

/// A fully resolved text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub canonical: CanonicalHex,
    pub color: Color,
    pub source: ColorSource,
}

/// Normalize text and decode it, keeping track of how it was resolved.
#[must_use]
pub fn resolve(input: Option<&str>) -> Resolution {
    let (canonical, source) = normalize_with_source(input);
    let color = decode(&canonical);
    log::trace!("resolved {input:?} as {source:?} to {canonical}");
    Resolution {
        canonical,
        color,
        source,
    }
}

/// Normalize optional text to canonical `rrggbbaa`. Never fails.
///
/// 1. Absent input gives `00000000`.
/// 2. A name in the table (case-insensitive) gives the table value, with
///    `ff` alpha appended to 6-digit entries.
/// 3. Otherwise the text is read as hex: one leading `#` is dropped, 3 or 4
///    digit shorthand has each digit doubled, and `ff` alpha is appended
///    when the result has 7 or fewer characters.
///
/// Digits are not validated; see [`decode`] for how garbage is handled.
#[must_use]
pub fn normalize(input: Option<&str>) -> CanonicalHex {
    normalize_with_source(input).0
}

fn normalize_with_source(input: Option<&str>) -> (CanonicalHex, ColorSource) {
    let Some(text) = input else {
        return (CanonicalHex::transparent(), ColorSource::Defaulted);
    };

    if let Some((name, value)) = names::entry(text) {
        let source = if name.is_empty() {
            ColorSource::Defaulted
        } else {
            ColorSource::Named(name)
        };
        return (CanonicalHex(with_alpha(value.to_string())), source);
    }

    (CanonicalHex(normalize_literal(text)), ColorSource::Literal)
}

fn normalize_literal(text: &str) -> String {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let expanded: String = match digits.chars().count() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    with_alpha(expanded)
}

/// Append opaque alpha when the value has no alpha digits, and lowercase.
fn with_alpha(mut hex: String) -> String {
    if hex.chars().count() <= 7 {
        hex.push_str(OPAQUE_ALPHA);
    }
    hex.make_ascii_lowercase();
    hex
}

// ============================================================================
// Decode
// ============================================================================

/// Decode canonical hex into channels.
///
/// The whole string is read as one base-16 number with red in the top byte.
/// If it holds anything other than one to eight hex digits, the result is
/// transparent black. Use [`try_decode`] to get an error instead.
#[must_use]
pub fn decode(hex: &CanonicalHex) -> Color {
    match scan_hex(hex.as_str()) {
        Some(value) => Color::from_u32(value),
        None => {
            log::debug!("unparsable hex color {hex:?}, using transparent black");
            Color::TRANSPARENT
        }
    }
}

/// Decode canonical hex, rejecting anything that is not exactly eight hex
/// digits.
///
/// # Errors
///
/// Returns `MalformedHex` with the offending text.
pub fn try_decode(hex: &CanonicalHex) -> Result<Color, ColorParseError> {
    if !hex.is_well_formed() {
        return Err(ColorParseError::MalformedHex(hex.to_string()));
    }
    scan_hex(hex.as_str())
        .map(Color::from_u32)
        .ok_or_else(|| ColorParseError::MalformedHex(hex.to_string()))
}

fn scan_hex(text: &str) -> Option<u32> {
    // from_str_radix would also accept a leading '+'.
    if text.is_empty() || text.len() > 8 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(text, 16).ok()
}

// ============================================================================
// Encode
// ============================================================================

/// Output options for [`encode_with`].
///
/// ```
/// use hexcolor::hex::HexFormat;
/// use hexcolor::Color;
///
/// let format = HexFormat::rgb().prefix(true).uppercase(true);
/// assert_eq!(format.render(Color::rgb(0xab, 0xcd, 0xef)), "#ABCDEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexFormat {
    alpha: bool,
    prefix: bool,
    uppercase: bool,
}

impl HexFormat {
    /// `rrggbb`.
    #[must_use]
    pub const fn rgb() -> Self {
        Self {
            alpha: false,
            prefix: false,
            uppercase: false,
        }
    }

    /// `rrggbbaa`.
    #[must_use]
    pub const fn rgba() -> Self {
        Self {
            alpha: true,
            prefix: false,
            uppercase: false,
        }
    }

    /// Include or drop the alpha digits.
    #[must_use]
    pub const fn alpha(mut self, alpha: bool) -> Self {
        self.alpha = alpha;
        self
    }

    /// Prepend `#`.
    #[must_use]
    pub const fn prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Use `A-F` instead of `a-f`.
    #[must_use]
    pub const fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Format a color.
    #[must_use]
    pub fn render(&self, color: Color) -> String {
        let Color {
            red,
            green,
            blue,
            alpha,
        } = color;
        let mut out = String::with_capacity(9);
        if self.prefix {
            out.push('#');
        }
        let digits = match (self.alpha, self.uppercase) {
            (false, false) => format!("{red:02x}{green:02x}{blue:02x}"),
            (false, true) => format!("{red:02X}{green:02X}{blue:02X}"),
            (true, false) => format!("{red:02x}{green:02x}{blue:02x}{alpha:02x}"),
            (true, true) => format!("{red:02X}{green:02X}{blue:02X}{alpha:02X}"),
        };
        out.push_str(&digits);
        out
    }
}

/// Encode a color as `rrggbb`, or `rrggbbaa` with `include_alpha`.
///
/// # Errors
///
/// Returns `NotRgbColor` if the color has no RGB components.
pub fn encode<C>(color: &C, include_alpha: bool) -> Result<String, ColorParseError>
where
    C: RgbaComponents + ?Sized,
{
    encode_with(color, HexFormat::rgb().alpha(include_alpha))
}

/// Encode a color with explicit formatting options.
///
/// # Errors
///
/// Returns `NotRgbColor` if the color has no RGB components.
pub fn encode_with<C>(color: &C, format: HexFormat) -> Result<String, ColorParseError>
where
    C: RgbaComponents + ?Sized,
{
    let color = color
        .rgba_components()
        .ok_or(ColorParseError::NotRgbColor)?;
    Ok(format.render(color))
}

/// `rrggbb`, or [`NOT_RGB_SENTINEL`] if the color has no RGB components.
#[must_use]
pub fn hex<C>(color: &C) -> String
where
    C: RgbaComponents + ?Sized,
{
    encode(color, false).unwrap_or_else(soft_fail)
}

/// `rrggbbaa`, or [`NOT_RGB_SENTINEL`] if the color has no RGB components.
#[must_use]
pub fn hex_with_alpha<C>(color: &C) -> String
where
    C: RgbaComponents + ?Sized,
{
    encode(color, true).unwrap_or_else(soft_fail)
}

fn soft_fail(err: ColorParseError) -> String {
    log::debug!("hex encoding failed: {err}");
    err.to_string()
}
