use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// An sRGB color with straight (unmultiplied) alpha.
///
/// Kept as the four bytes written in the scheme file so translucent colors
/// load and save unchanged; `egui::Color32` premultiplies and would lose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemeColor([u8; 4]);

impl SchemeColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, u8::MAX])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn to_array(self) -> [u8; 4] {
        self.0
    }

    /// The bytes as edited by `Ui::color_edit_button_srgba_unmultiplied`
    pub fn as_mut_array(&mut self) -> &mut [u8; 4] {
        &mut self.0
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let (width, channels) = match digits.len() {
            3 => (1, 3),
            4 => (1, 4),
            6 => (2, 3),
            8 => (2, 4),
            _ => return None,
        };

        let mut rgba = [u8::MAX; 4];
        for (i, channel) in rgba.iter_mut().take(channels).enumerate() {
            let value = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16).ok()?;
            // #abc is shorthand for #aabbcc
            *channel = if width == 1 { value * 0x11 } else { value };
        }
        Some(Self(rgba))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SchemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")?;
        if a != u8::MAX {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for SchemeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SchemeColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).ok_or_else(|| D::Error::custom(format!("invalid color {text:?}")))
    }
}

/// Weight of the font used to draw a highlighted chunk of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Slant of the font used to draw a highlighted chunk of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// How a syntax-highlighted chunk of text is drawn.
///
/// Missing colors fall back to the editor's plain text colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<SchemeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SchemeColor>,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub font_style: FontStyle,
}

impl ChunkStyle {
    pub fn with_foreground(color: SchemeColor) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == FontStyle::Italic
    }
}

/// A color used by the editor chrome rather than by text (gutter, caret line, markers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientColor {
    pub color: SchemeColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_color: Option<SchemeColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<SchemeColor>,
}

impl AmbientColor {
    pub fn new(color: SchemeColor) -> Self {
        Self {
            color,
            second_color: None,
            border_color: None,
        }
    }
}

/// The value column of a style row in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Chunk(ChunkStyle),
    Ambient(AmbientColor),
}

impl StyleValue {
    pub fn as_chunk(&self) -> Option<&ChunkStyle> {
        match self {
            Self::Chunk(style) => Some(style),
            Self::Ambient(_) => None,
        }
    }

    pub fn as_ambient(&self) -> Option<&AmbientColor> {
        match self {
            Self::Ambient(color) => Some(color),
            Self::Chunk(_) => None,
        }
    }
}

impl From<ChunkStyle> for StyleValue {
    fn from(style: ChunkStyle) -> Self {
        Self::Chunk(style)
    }
}

impl From<AmbientColor> for StyleValue {
    fn from(color: AmbientColor) -> Self {
        Self::Ambient(color)
    }
}
