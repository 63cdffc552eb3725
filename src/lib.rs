//! # hexcolor
//!
//! Conversion between RGBA colors and their text forms: hex strings with 3,
//! 4, 6 or 8 digits (with or without `#`) and the 140 standard CSS color
//! names.
//!
//! ## Quick Start
//!
//! ```rust
//! use hexcolor::prelude::*;
//!
//! let orange = Color::from_text(Some("Orange"));
//! assert_eq!(orange, Color::rgb(255, 165, 0));
//! assert_eq!(hex(&orange), "ffa500");
//! assert_eq!(hex_with_alpha(&orange), "ffa500ff");
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: four 8-bit channels, readable as fractions
//! - **CanonicalHex**: the `rrggbbaa` form every input is normalized to
//! - **names**: the static CSS name table, consulted before hex
//! - **RgbaComponents**: the trait host color types implement to be encoded
//!
//! The lenient entry points ([`Color::from_text`], [`hex()`],
//! [`hex_with_alpha()`]) never fail. [`Color::parse`] and [`hex::encode`]
//! return errors instead.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod hex;
pub mod names;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Color, ColorModel, ColorParseError, RawColor, RgbaComponents};
    pub use crate::hex::{CanonicalHex, ColorSource, HexFormat, Resolution, hex, hex_with_alpha};
}

// Re-export key types at crate root
pub use color::{Color, ColorModel, ColorParseError, RawColor, RgbaComponents};
pub use hex::{CanonicalHex, HexFormat, hex, hex_with_alpha};
