//! Font catalog for label text
//!
//! This module provides the fixed set of font stacks a label line may pick
//! from, plus the allowed font weights. Deployments can swap the stack list
//! via a TOML catalog file; a compiled-in default catalog is used otherwise.
//! A line referencing a font outside the catalog silently falls back to the
//! catalog's first entry.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when loading or parsing font catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read font catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse font catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Font catalog must define at least one font")]
    Empty,
}

/// A single catalog entry: a display label and the CSS font stack it expands to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontEntry {
    /// Human-readable name shown to users
    pub label: String,
    /// CSS font-family stack used in the rendered document
    pub stack: String,
}

/// An ordered catalog of font stacks; the first entry is the fallback
#[derive(Debug, Clone)]
pub struct FontCatalog {
    /// Optional name for the catalog
    pub name: Option<String>,
    /// Ordered font entries; never empty
    pub fonts: Vec<FontEntry>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    fonts: Vec<FontEntry>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default catalog - common print-safe stacks with broad platform coverage
const DEFAULT_CATALOG: &str = r#"
[[fonts]]
label = "Arial"
stack = "Arial, Helvetica, sans-serif"

[[fonts]]
label = "Helvetica"
stack = "Helvetica, Arial, sans-serif"

[[fonts]]
label = "Times New Roman"
stack = '"Times New Roman", Times, serif'

[[fonts]]
label = "Courier New"
stack = '"Courier New", Courier, monospace'

[[fonts]]
label = "Verdana"
stack = "Verdana, Geneva, sans-serif"

[[fonts]]
label = "Futura"
stack = '"Futura", Arial, sans-serif'

[[fonts]]
label = "Roboto"
stack = "Roboto, Arial, sans-serif"

[[fonts]]
label = "Open Sans"
stack = '"Open Sans", Arial, sans-serif'
"#;

impl FontCatalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        if parsed.fonts.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(FontCatalog {
            name: parsed.metadata.and_then(|m| m.name),
            fonts: parsed.fonts,
        })
    }

    /// The fallback entry every unresolved font reference maps to
    pub fn first(&self) -> &FontEntry {
        &self.fonts[0]
    }

    /// Look up an entry by its font stack value
    ///
    /// Returns None if the stack is not part of this catalog.
    pub fn resolve(&self, stack: &str) -> Option<&FontEntry> {
        self.fonts.iter().find(|font| font.stack == stack)
    }

    /// Look up an entry by stack value, falling back to the first entry
    pub fn resolve_or_first(&self, stack: &str) -> &FontEntry {
        self.resolve(stack).unwrap_or_else(|| self.first())
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Default font catalog should be valid TOML")
    }
}

/// Font weight tokens allowed on a text line
///
/// Unknown tokens never fail; they fall back to [`FontWeight::SemiBold`],
/// the documented default weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Regular,
    Medium,
    #[default]
    SemiBold,
    Bold,
}

impl FontWeight {
    /// The CSS weight token ("400".."700")
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Regular => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
        }
    }

    /// Parse a weight token; returns None for anything outside the fixed set
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "400" => Some(FontWeight::Regular),
            "500" => Some(FontWeight::Medium),
            "600" => Some(FontWeight::SemiBold),
            "700" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

// Persisted documents may carry the weight as a string token or a bare
// number; both are accepted, and unknown values fall back to the default.
impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightVisitor;

        impl<'de> Visitor<'de> for WeightVisitor {
            type Value = FontWeight;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a font weight token (400, 500, 600 or 700)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<FontWeight, E> {
                Ok(FontWeight::from_token(value).unwrap_or_default())
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<FontWeight, E> {
                Ok(FontWeight::from_token(&value.to_string()).unwrap_or_default())
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<FontWeight, E> {
                Ok(FontWeight::from_token(&value.to_string()).unwrap_or_default())
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<FontWeight, E> {
                if value.fract() == 0.0 {
                    Ok(FontWeight::from_token(&(value as i64).to_string()).unwrap_or_default())
                } else {
                    Ok(FontWeight::default())
                }
            }
        }

        deserializer.deserialize_any(WeightVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = FontCatalog::default();
        assert_eq!(catalog.fonts.len(), 8);
        assert_eq!(catalog.first().label, "Arial");
        assert_eq!(catalog.first().stack, "Arial, Helvetica, sans-serif");
        assert_eq!(catalog.fonts[3].stack, "\"Courier New\", Courier, monospace");
    }

    #[test]
    fn test_resolve_existing_stack() {
        let catalog = FontCatalog::default();
        let entry = catalog.resolve("Verdana, Geneva, sans-serif").expect("Should resolve");
        assert_eq!(entry.label, "Verdana");
    }

    #[test]
    fn test_resolve_unknown_stack_falls_back() {
        let catalog = FontCatalog::default();
        assert!(catalog.resolve("Comic Sans MS").is_none());
        assert_eq!(catalog.resolve_or_first("Comic Sans MS").label, "Arial");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r#"
[metadata]
name = "Shop Fonts"

[[fonts]]
label = "DIN"
stack = "DIN, sans-serif"
"#;
        let catalog = FontCatalog::from_str(toml_str).expect("Should parse");
        assert_eq!(catalog.name, Some("Shop Fonts".to_string()));
        assert_eq!(catalog.fonts.len(), 1);
        assert_eq!(catalog.first().stack, "DIN, sans-serif");
    }

    #[test]
    fn test_empty_catalog_error() {
        let result = FontCatalog::from_str("");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = FontCatalog::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_weight_tokens() {
        assert_eq!(FontWeight::from_token("400"), Some(FontWeight::Regular));
        assert_eq!(FontWeight::from_token(" 700 "), Some(FontWeight::Bold));
        assert_eq!(FontWeight::from_token("650"), None);
        assert_eq!(FontWeight::Bold.as_css(), "700");
    }

    #[test]
    fn test_weight_json_round_trip() {
        let json = serde_json::to_string(&FontWeight::Bold).unwrap();
        assert_eq!(json, "\"700\"");
        let back: FontWeight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FontWeight::Bold);
    }

    #[test]
    fn test_weight_from_number_and_unknown() {
        let from_number: FontWeight = serde_json::from_str("500").unwrap();
        assert_eq!(from_number, FontWeight::Medium);
        let unknown: FontWeight = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(unknown, FontWeight::SemiBold);
    }
}
