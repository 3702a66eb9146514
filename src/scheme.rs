use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SchemeError, SchemeResult};
use crate::style::{AmbientColor, ChunkStyle, FontStyle, FontWeight, SchemeColor};

/// A style definition together with the name the editor looks it up by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedStyle<T> {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub style: T,
}

impl<T> NamedStyle<T> {
    pub fn new(name: &str, description: &str, style: T) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            style,
        }
    }
}

/// A color scheme document as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub ambient: Vec<NamedStyle<AmbientColor>>,
    #[serde(default)]
    pub chunks: Vec<NamedStyle<ChunkStyle>>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorScheme {
    /// The scheme used when no file is given or the configured one fails to load
    pub fn builtin() -> Self {
        let ambient = vec![
            NamedStyle::new(
                "Background(Read Only)",
                "Editor background of read-only documents",
                AmbientColor::new(SchemeColor::rgb(0xfa, 0xfa, 0xfa)),
            ),
            NamedStyle::new(
                "Selected line",
                "Highlight behind the caret line",
                AmbientColor::new(SchemeColor::rgb(0xee, 0xee, 0xee)),
            ),
            NamedStyle::new(
                "Line numbers",
                "Gutter foreground and background",
                AmbientColor {
                    color: SchemeColor::rgb(0x88, 0x88, 0x88),
                    second_color: Some(SchemeColor::rgb(0xf5, 0xf5, 0xf5)),
                    border_color: None,
                },
            ),
            NamedStyle::new(
                "Breakpoint Marker",
                "Breakpoint glyph in the icon margin",
                AmbientColor {
                    color: SchemeColor::rgb(0xe5, 0x39, 0x35),
                    second_color: None,
                    border_color: Some(SchemeColor::rgb(0x9c, 0x1c, 0x1c)),
                },
            ),
        ];

        let chunks = vec![
            NamedStyle::new(
                "Plain Text",
                "Text without any other style",
                ChunkStyle {
                    foreground: Some(SchemeColor::rgb(0x22, 0x22, 0x22)),
                    background: Some(SchemeColor::rgb(0xff, 0xff, 0xff)),
                    ..Default::default()
                },
            ),
            NamedStyle::new(
                "Comment(Line)",
                "Single line comments",
                ChunkStyle {
                    foreground: Some(SchemeColor::rgb(0x6a, 0x99, 0x55)),
                    font_style: FontStyle::Italic,
                    ..Default::default()
                },
            ),
            NamedStyle::new(
                "Keyword(Type)",
                "Built-in type keywords",
                ChunkStyle {
                    foreground: Some(SchemeColor::rgb(0x00, 0x00, 0xff)),
                    font_weight: FontWeight::Bold,
                    ..Default::default()
                },
            ),
            NamedStyle::new(
                "String",
                "String literals",
                ChunkStyle::with_foreground(SchemeColor::rgb(0xa3, 0x15, 0x15)),
            ),
            NamedStyle::new(
                "Number",
                "Numeric literals",
                ChunkStyle::with_foreground(SchemeColor::rgb(0x09, 0x86, 0x58)),
            ),
        ];

        Self {
            name: "Default".to_owned(),
            description: "Built-in light scheme".to_owned(),
            ambient,
            chunks,
        }
    }

    pub fn from_json(json: &str) -> SchemeResult<Self> {
        let scheme: Self = serde_json::from_str(json)?;
        scheme.validate()?;
        Ok(scheme)
    }

    pub fn to_json(&self) -> SchemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> SchemeResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| SchemeError::Read {
            path: path.to_owned(),
            source,
        })?;
        let scheme = Self::from_json(&json)?;
        log::info!(
            "Loaded color scheme {:?} from {} ({} ambient, {} chunk styles)",
            scheme.name,
            path.display(),
            scheme.ambient.len(),
            scheme.chunks.len()
        );
        Ok(scheme)
    }

    pub fn save(&self, path: &Path) -> SchemeResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SchemeError::Write {
            path: path.to_owned(),
            source,
        })?;
        log::info!("Saved color scheme {:?} to {}", self.name, path.display());
        Ok(())
    }

    /// Style names must be unique across both sections, rows are looked up by name
    pub fn validate(&self) -> SchemeResult<()> {
        let mut seen = HashSet::new();
        let names = self
            .ambient
            .iter()
            .map(|s| &s.name)
            .chain(self.chunks.iter().map(|s| &s.name));
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(SchemeError::DuplicateStyle(name.clone()));
            }
        }
        Ok(())
    }

    pub fn chunk_style(&self, name: &str) -> Option<&ChunkStyle> {
        self.chunks.iter().find(|s| s.name == name).map(|s| &s.style)
    }

    pub fn ambient_color(&self, name: &str) -> Option<&AmbientColor> {
        self.ambient.iter().find(|s| s.name == name).map(|s| &s.style)
    }
}
