//! Named styles and the fixed stylesheet they live in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Unit;
use crate::error::{Error, Result};

/// Names of the styles every document is created with.
///
/// Styles can be modified but never added or removed.
pub const BUILTIN_STYLE_NAMES: &[&str] = &[
    "DefaultParagraphFont",
    "Normal",
    "Heading1",
    "Heading2",
    "Heading3",
    "Heading4",
    "Heading5",
    "Heading6",
    "Heading7",
    "Heading8",
    "Heading9",
    "List",
    "Footnote",
    "Header",
    "Footer",
    "Hyperlink",
    "InvalidStyleName",
];

const DEFAULT_FONT_NAME: &str = "Arial";
const DEFAULT_FONT_SIZE_PT: f32 = 10.0;

/// Known color names with their ARGB values.
const KNOWN_COLORS: &[(&str, u32)] = &[
    ("AliceBlue", 0xFFF0F8FF),
    ("AntiqueWhite", 0xFFFAEBD7),
    ("Aqua", 0xFF00FFFF),
    ("Aquamarine", 0xFF7FFFD4),
    ("Azure", 0xFFF0FFFF),
    ("Beige", 0xFFF5F5DC),
    ("Bisque", 0xFFFFE4C4),
    ("Black", 0xFF000000),
    ("BlanchedAlmond", 0xFFFFEBCD),
    ("Blue", 0xFF0000FF),
    ("BlueViolet", 0xFF8A2BE2),
    ("Brown", 0xFFA52A2A),
    ("BurlyWood", 0xFFDEB887),
    ("CadetBlue", 0xFF5F9EA0),
    ("Chartreuse", 0xFF7FFF00),
    ("Chocolate", 0xFFD2691E),
    ("Coral", 0xFFFF7F50),
    ("CornflowerBlue", 0xFF6495ED),
    ("Cornsilk", 0xFFFFF8DC),
    ("Crimson", 0xFFDC143C),
    ("Cyan", 0xFF00FFFF),
    ("DarkBlue", 0xFF00008B),
    ("DarkCyan", 0xFF008B8B),
    ("DarkGoldenrod", 0xFFB8860B),
    ("DarkGray", 0xFFA9A9A9),
    ("DarkGreen", 0xFF006400),
    ("DarkKhaki", 0xFFBDB76B),
    ("DarkMagenta", 0xFF8B008B),
    ("DarkOliveGreen", 0xFF556B2F),
    ("DarkOrange", 0xFFFF8C00),
    ("DarkOrchid", 0xFF9932CC),
    ("DarkRed", 0xFF8B0000),
    ("DarkSalmon", 0xFFE9967A),
    ("DarkSeaGreen", 0xFF8FBC8B),
    ("DarkSlateBlue", 0xFF483D8B),
    ("DarkSlateGray", 0xFF2F4F4F),
    ("DarkTurquoise", 0xFF00CED1),
    ("DarkViolet", 0xFF9400D3),
    ("DeepPink", 0xFFFF1493),
    ("DeepSkyBlue", 0xFF00BFFF),
    ("DimGray", 0xFF696969),
    ("DodgerBlue", 0xFF1E90FF),
    ("Firebrick", 0xFFB22222),
    ("FloralWhite", 0xFFFFFAF0),
    ("ForestGreen", 0xFF228B22),
    ("Fuchsia", 0xFFFF00FF),
    ("Gainsboro", 0xFFDCDCDC),
    ("GhostWhite", 0xFFF8F8FF),
    ("Gold", 0xFFFFD700),
    ("Goldenrod", 0xFFDAA520),
    ("Gray", 0xFF808080),
    ("Green", 0xFF008000),
    ("GreenYellow", 0xFFADFF2F),
    ("Honeydew", 0xFFF0FFF0),
    ("HotPink", 0xFFFF69B4),
    ("IndianRed", 0xFFCD5C5C),
    ("Indigo", 0xFF4B0082),
    ("Ivory", 0xFFFFFFF0),
    ("Khaki", 0xFFF0E68C),
    ("Lavender", 0xFFE6E6FA),
    ("LavenderBlush", 0xFFFFF0F5),
    ("LawnGreen", 0xFF7CFC00),
    ("LemonChiffon", 0xFFFFFACD),
    ("LightBlue", 0xFFADD8E6),
    ("LightCoral", 0xFFF08080),
    ("LightCyan", 0xFFE0FFFF),
    ("LightGoldenrodYellow", 0xFFFAFAD2),
    ("LightGray", 0xFFD3D3D3),
    ("LightGreen", 0xFF90EE90),
    ("LightPink", 0xFFFFB6C1),
    ("LightSalmon", 0xFFFFA07A),
    ("LightSeaGreen", 0xFF20B2AA),
    ("LightSkyBlue", 0xFF87CEFA),
    ("LightSlateGray", 0xFF778899),
    ("LightSteelBlue", 0xFFB0C4DE),
    ("LightYellow", 0xFFFFFFE0),
    ("Lime", 0xFF00FF00),
    ("LimeGreen", 0xFF32CD32),
    ("Linen", 0xFFFAF0E6),
    ("Magenta", 0xFFFF00FF),
    ("Maroon", 0xFF800000),
    ("MediumAquamarine", 0xFF66CDAA),
    ("MediumBlue", 0xFF0000CD),
    ("MediumOrchid", 0xFFBA55D3),
    ("MediumPurple", 0xFF9370DB),
    ("MediumSeaGreen", 0xFF3CB371),
    ("MediumSlateBlue", 0xFF7B68EE),
    ("MediumSpringGreen", 0xFF00FA9A),
    ("MediumTurquoise", 0xFF48D1CC),
    ("MediumVioletRed", 0xFFC71585),
    ("MidnightBlue", 0xFF191970),
    ("MintCream", 0xFFF5FFFA),
    ("MistyRose", 0xFFFFE4E1),
    ("Moccasin", 0xFFFFE4B5),
    ("NavajoWhite", 0xFFFFDEAD),
    ("Navy", 0xFF000080),
    ("OldLace", 0xFFFDF5E6),
    ("Olive", 0xFF808000),
    ("OliveDrab", 0xFF6B8E23),
    ("Orange", 0xFFFFA500),
    ("OrangeRed", 0xFFFF4500),
    ("Orchid", 0xFFDA70D6),
    ("PaleGoldenrod", 0xFFEEE8AA),
    ("PaleGreen", 0xFF98FB98),
    ("PaleTurquoise", 0xFFAFEEEE),
    ("PaleVioletRed", 0xFFDB7093),
    ("PapayaWhip", 0xFFFFEFD5),
    ("PeachPuff", 0xFFFFDAB9),
    ("Peru", 0xFFCD853F),
    ("Pink", 0xFFFFC0CB),
    ("Plum", 0xFFDDA0DD),
    ("PowderBlue", 0xFFB0E0E6),
    ("Purple", 0xFF800080),
    ("Red", 0xFFFF0000),
    ("RosyBrown", 0xFFBC8F8F),
    ("RoyalBlue", 0xFF4169E1),
    ("SaddleBrown", 0xFF8B4513),
    ("Salmon", 0xFFFA8072),
    ("SandyBrown", 0xFFF4A460),
    ("SeaGreen", 0xFF2E8B57),
    ("SeaShell", 0xFFFFF5EE),
    ("Sienna", 0xFFA0522D),
    ("Silver", 0xFFC0C0C0),
    ("SkyBlue", 0xFF87CEEB),
    ("SlateBlue", 0xFF6A5ACD),
    ("SlateGray", 0xFF708090),
    ("Snow", 0xFFFFFAFA),
    ("SpringGreen", 0xFF00FF7F),
    ("SteelBlue", 0xFF4682B4),
    ("Tan", 0xFFD2B48C),
    ("Teal", 0xFF008080),
    ("Thistle", 0xFFD8BFD8),
    ("Tomato", 0xFFFF6347),
    ("Transparent", 0x00FFFFFF),
    ("Turquoise", 0xFF40E0D0),
    ("Violet", 0xFFEE82EE),
    ("Wheat", 0xFFF5DEB3),
    ("White", 0xFFFFFFFF),
    ("WhiteSmoke", 0xFFF5F5F5),
    ("Yellow", 0xFFFFFF00),
    ("YellowGreen", 0xFF9ACD32),
];

/// An ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);

    /// Opaque color from red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Look up a known color name such as `DarkBlue` (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        KNOWN_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, argb)| Self::from_argb(argb))
    }

    /// Hex form, `#RRGGBB` when opaque and `#AARRGGBB` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Packed value without an alpha byte is opaque.
    fn from_packed(value: u32, has_alpha: bool) -> Self {
        if has_alpha {
            Self::from_argb(value)
        } else {
            Self::from_argb(0xFF00_0000 | value)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color name, `#RRGGBB`, `#AARRGGBB`, the same with a `0x`
    /// prefix, or a decimal integer.
    ///
    /// Decimal values above `0xFFFFFF` carry their own alpha byte.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(color) = Color::named(value) {
            return Ok(color);
        }

        let hex = value
            .strip_prefix('#')
            .or_else(|| value.strip_prefix("0x"))
            .or_else(|| value.strip_prefix("0X"));

        match hex {
            Some(hex) => {
                if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(invalid());
                }
                let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                Ok(Self::from_packed(packed, hex.len() == 8))
            }
            None => {
                if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let packed: u32 = value.parse().map_err(|_| invalid())?;
                Ok(Self::from_packed(packed, packed > 0x00FF_FFFF))
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Underline kind of a font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Underline {
    #[default]
    None,
    Single,
    Words,
    Dotted,
    Dash,
    DotDash,
    DotDotDash,
}

/// Font attributes of a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,

    /// Font family name
    pub name: Option<String>,

    /// Font size
    pub size: Option<Unit>,

    pub color: Option<Color>,
}

/// Paragraph attributes of a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    pub line_spacing: Option<Unit>,
    pub space_after: Option<Unit>,
    pub space_before: Option<Unit>,
}

/// A named style slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Style name
    pub name: String,

    /// Name of the style this one inherits from
    pub base_style: Option<String>,

    pub font: Font,

    pub paragraph_format: ParagraphFormat,
}

impl Style {
    fn builtin(name: &str) -> Self {
        let base_style = match name {
            "Normal" | "DefaultParagraphFont" => None,
            "Hyperlink" => Some("DefaultParagraphFont"),
            _ => Some("Normal"),
        };

        let mut font = Font::default();
        match name {
            "Normal" => {
                font.name = Some(DEFAULT_FONT_NAME.to_string());
                font.size = Some(Unit::from_point(DEFAULT_FONT_SIZE_PT));
                font.color = Some(Color::BLACK);
            }
            // Marks references to styles that do not exist.
            "InvalidStyleName" => {
                font.bold = true;
                font.underline = Underline::Dotted;
                font.color = Some(Color::RED);
            }
            _ => {}
        }

        Self {
            name: name.to_string(),
            base_style: base_style.map(str::to_string),
            font,
            paragraph_format: ParagraphFormat::default(),
        }
    }
}

/// The fixed set of named styles owned by a document.
///
/// Lookups are case-insensitive and fail closed: an unknown name is never
/// turned into a new style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: Vec<Style>,
}

impl StyleSheet {
    /// Stylesheet holding the built-in styles with their defaults.
    pub fn builtin() -> Self {
        Self {
            styles: BUILTIN_STYLE_NAMES.iter().map(|n| Style::builtin(n)).collect(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.styles
            .iter()
            .position(|style| style.name.eq_ignore_ascii_case(name))
    }

    /// Check if a style with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.position(name).map(|i| &self.styles[i])
    }

    /// Get a style by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Style> {
        match self.position(name) {
            Some(i) => Ok(&mut self.styles[i]),
            None => Err(Error::UnknownStyle(name.to_string())),
        }
    }

    /// Iterate over the styles in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// Style names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|style| style.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::builtin()
    }
}
