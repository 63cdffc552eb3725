//! CSS color name table.
//!
//! A fixed mapping from the 140 standard CSS color names to their RGB hex
//! values, plus the pseudo-names `CLEAR`, `TRANSPARENT` and the empty string,
//! which all resolve to fully transparent black.
//!
//! Names are matched case-insensitively:
//!
//! ```
//! use hexcolor::names;
//!
//! assert_eq!(names::lookup("orange"), Some("FFA500"));
//! assert_eq!(names::lookup("OrAnGe"), Some("FFA500"));
//! assert_eq!(names::lookup("clear"), Some("00000000"));
//! assert_eq!(names::lookup("not-a-color"), None);
//! ```
//!
//! The table is built once on first use and is never mutated afterwards, so
//! lookups need no locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::Color;

/// Number of standard CSS color names in the table.
pub const LEN: usize = 140;

/// Value shared by `CLEAR`, `TRANSPARENT` and the empty name.
pub const TRANSPARENT_HEX: &str = "00000000";

/// Pseudo-names resolving to [`TRANSPARENT_HEX`].
///
/// The first entry is the name reported by [`name_for`].
const TRANSPARENT_NAMES: [&str; 3] = ["TRANSPARENT", "CLEAR", ""];

// ============================================================================
// Standard CSS Colors
// ============================================================================

/// Standard CSS colors, uppercase, sorted by name.
static CSS_COLORS: [(&str, &str); LEN] = [
    ("ALICEBLUE", "F0F8FF"),
    ("ANTIQUEWHITE", "FAEBD7"),
    ("AQUA", "00FFFF"),
    ("AQUAMARINE", "7FFFD4"),
    ("AZURE", "F0FFFF"),
    ("BEIGE", "F5F5DC"),
    ("BISQUE", "FFE4C4"),
    ("BLACK", "000000"),
    ("BLANCHEDALMOND", "FFEBCD"),
    ("BLUE", "0000FF"),
    ("BLUEVIOLET", "8A2BE2"),
    ("BROWN", "A52A2A"),
    ("BURLYWOOD", "DEB887"),
    ("CADETBLUE", "5F9EA0"),
    ("CHARTREUSE", "7FFF00"),
    ("CHOCOLATE", "D2691E"),
    ("CORAL", "FF7F50"),
    ("CORNFLOWERBLUE", "6495ED"),
    ("CORNSILK", "FFF8DC"),
    ("CRIMSON", "DC143C"),
    ("CYAN", "00FFFF"),
    ("DARKBLUE", "00008B"),
    ("DARKCYAN", "008B8B"),
    ("DARKGOLDENROD", "B8860B"),
    ("DARKGRAY", "A9A9A9"),
    ("DARKGREEN", "006400"),
    ("DARKKHAKI", "BDB76B"),
    ("DARKMAGENTA", "8B008B"),
    ("DARKOLIVEGREEN", "556B2F"),
    ("DARKORANGE", "FF8C00"),
    ("DARKORCHID", "9932CC"),
    ("DARKRED", "8B0000"),
    ("DARKSALMON", "E9967A"),
    ("DARKSEAGREEN", "8FBC8F"),
    ("DARKSLATEBLUE", "483D8B"),
    ("DARKSLATEGRAY", "2F4F4F"),
    ("DARKTURQUOISE", "00CED1"),
    ("DARKVIOLET", "9400D3"),
    ("DEEPPINK", "FF1493"),
    ("DEEPSKYBLUE", "00BFFF"),
    ("DIMGRAY", "696969"),
    ("DODGERBLUE", "1E90FF"),
    ("FIREBRICK", "B22222"),
    ("FLORALWHITE", "FFFAF0"),
    ("FORESTGREEN", "228B22"),
    ("FUCHSIA", "FF00FF"),
    ("GAINSBORO", "DCDCDC"),
    ("GHOSTWHITE", "F8F8FF"),
    ("GOLD", "FFD700"),
    ("GOLDENROD", "DAA520"),
    ("GRAY", "808080"),
    ("GREEN", "008000"),
    ("GREENYELLOW", "ADFF2F"),
    ("HONEYDEW", "F0FFF0"),
    ("HOTPINK", "FF69B4"),
    ("INDIANRED", "CD5C5C"),
    ("INDIGO", "4B0082"),
    ("IVORY", "FFFFF0"),
    ("KHAKI", "F0E68C"),
    ("LAVENDER", "E6E6FA"),
    ("LAVENDERBLUSH", "FFF0F5"),
    ("LAWNGREEN", "7CFC00"),
    ("LEMONCHIFFON", "FFFACD"),
    ("LIGHTBLUE", "ADD8E6"),
    ("LIGHTCORAL", "F08080"),
    ("LIGHTCYAN", "E0FFFF"),
    ("LIGHTGOLDENRODYELLOW", "FAFAD2"),
    ("LIGHTGRAY", "D3D3D3"),
    ("LIGHTGREEN", "90EE90"),
    ("LIGHTPINK", "FFB6C1"),
    ("LIGHTSALMON", "FFA07A"),
    ("LIGHTSEAGREEN", "20B2AA"),
    ("LIGHTSKYBLUE", "87CEFA"),
    ("LIGHTSLATEGRAY", "778899"),
    ("LIGHTSTEELBLUE", "B0C4DE"),
    ("LIGHTYELLOW", "FFFFE0"),
    ("LIME", "00FF00"),
    ("LIMEGREEN", "32CD32"),
    ("LINEN", "FAF0E6"),
    ("MAGENTA", "FF00FF"),
    ("MAROON", "800000"),
    ("MEDIUMAQUAMARINE", "66CDAA"),
    ("MEDIUMBLUE", "0000CD"),
    ("MEDIUMORCHID", "BA55D3"),
    ("MEDIUMPURPLE", "9370DB"),
    ("MEDIUMSEAGREEN", "3CB371"),
    ("MEDIUMSLATEBLUE", "7B68EE"),
    ("MEDIUMSPRINGGREEN", "00FA9A"),
    ("MEDIUMTURQUOISE", "48D1CC"),
    ("MEDIUMVIOLETRED", "C71585"),
    ("MIDNIGHTBLUE", "191970"),
    ("MINTCREAM", "F5FFFA"),
    ("MISTYROSE", "FFE4E1"),
    ("MOCCASIN", "FFE4B5"),
    ("NAVAJOWHITE", "FFDEAD"),
    ("NAVY", "000080"),
    ("OLDLACE", "FDF5E6"),
    ("OLIVE", "808000"),
    ("OLIVEDRAB", "6B8E23"),
    ("ORANGE", "FFA500"),
    ("ORANGERED", "FF4500"),
    ("ORCHID", "DA70D6"),
    ("PALEGOLDENROD", "EEE8AA"),
    ("PALEGREEN", "98FB98"),
    ("PALETURQUOISE", "AFEEEE"),
    ("PALEVIOLETRED", "DB7093"),
    ("PAPAYAWHIP", "FFEFD5"),
    ("PEACHPUFF", "FFDAB9"),
    ("PERU", "CD853F"),
    ("PINK", "FFC0CB"),
    ("PLUM", "DDA0DD"),
    ("POWDERBLUE", "B0E0E6"),
    ("PURPLE", "800080"),
    ("RED", "FF0000"),
    ("ROSYBROWN", "BC8F8F"),
    ("ROYALBLUE", "4169E1"),
    ("SADDLEBROWN", "8B4513"),
    ("SALMON", "FA8072"),
    ("SANDYBROWN", "F4A460"),
    ("SEAGREEN", "2E8B57"),
    ("SEASHELL", "FFF5EE"),
    ("SIENNA", "A0522D"),
    ("SILVER", "C0C0C0"),
    ("SKYBLUE", "87CEEB"),
    ("SLATEBLUE", "6A5ACD"),
    ("SLATEGRAY", "708090"),
    ("SNOW", "FFFAFA"),
    ("SPRINGGREEN", "00FF7F"),
    ("STEELBLUE", "4682B4"),
    ("TAN", "D2B48C"),
    ("TEAL", "008080"),
    ("THISTLE", "D8BFD8"),
    ("TOMATO", "FF6347"),
    ("TURQUOISE", "40E0D0"),
    ("VIOLET", "EE82EE"),
    ("WHEAT", "F5DEB3"),
    ("WHITE", "FFFFFF"),
    ("WHITESMOKE", "F5F5F5"),
    ("YELLOW", "FFFF00"),
    ("YELLOWGREEN", "9ACD32"),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::with_capacity(LEN + TRANSPARENT_NAMES.len());
    for (name, hex) in CSS_COLORS {
        m.insert(name, hex);
    }
    for name in TRANSPARENT_NAMES {
        m.insert(name, TRANSPARENT_HEX);
    }
    m
});

/// Reverse map keyed by packed `0xRRGGBBAA`. Aliases keep the
/// alphabetically first name.
static BY_VALUE: LazyLock<HashMap<u32, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::with_capacity(LEN + 1);
    for (name, hex) in CSS_COLORS {
        if let Ok(rgb) = u32::from_str_radix(hex, 16) {
            m.entry((rgb << 8) | 0xff).or_insert(name);
        }
    }
    m.insert(0, TRANSPARENT_NAMES[0]);
    m
});

/// Look up a color name, ignoring case.
///
/// Returns the table's hex value: 6 digits for CSS names, 8 digits for the
/// transparent pseudo-names. `None` means the caller should treat the input
/// as literal hex.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    entry(name).map(|(_, hex)| hex)
}

/// Look up a color name, returning the canonical (uppercase) name along
/// with its hex value.
#[must_use]
pub fn entry(name: &str) -> Option<(&'static str, &'static str)> {
    let key = name.to_uppercase();
    BY_NAME
        .get_key_value(key.as_str())
        .map(|(&name, &hex)| (name, hex))
}

/// Returns true if `name` is in the table (case-insensitive).
#[must_use]
pub fn contains(name: &str) -> bool {
    entry(name).is_some()
}

/// Iterate the 140 standard CSS names in alphabetical order.
///
/// The transparent pseudo-names are not included.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    CSS_COLORS.iter().map(|&(name, _)| name)
}

/// Find the name of an exact color value.
///
/// Only fully opaque colors and fully transparent black have names.
#[must_use]
pub fn name_for(color: Color) -> Option<&'static str> {
    BY_VALUE.get(&color.to_u32()).copied()
}
