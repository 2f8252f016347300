//! The bundled palette catalog.
//!
//! Palettes ship as `assets/palettes.json`, embedded at compile time and
//! parsed once at startup into an immutable [`Catalog`]. Choosing a palette
//! hands out a [`PaletteColors`] copy, so the catalog itself is never touched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color::parse_hex;
use crate::error::CatalogError;

const BUNDLED: &str = include_str!("../assets/palettes.json");

/// A named palette as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub hues: Vec<String>,
    #[serde(default)]
    pub mono: Vec<String>,
}

/// The colours of a chosen palette, detached from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteColors {
    pub hues: Vec<String>,
    pub mono: Vec<String>,
}

impl Palette {
    /// Copies the hue and mono lists out of the catalog entry.
    pub fn colors(&self) -> PaletteColors {
        PaletteColors {
            hues: self.hues.clone(),
            mono: self.mono.clone(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.hues.is_empty() {
            return Err(CatalogError::NoHues(self.name.clone()));
        }
        match self.hues.iter().chain(&self.mono).find(|c| !is_hex_color(c)) {
            Some(bad) => Err(CatalogError::InvalidColor {
                palette: self.name.clone(),
                value: bad.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// `true` for `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    parse_hex(value).is_some()
}

/// Ordered, validated, read-only table of palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    palettes: Vec<Palette>,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED)
    }

    /// Parses and validates a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let palettes: Vec<Palette> = serde_json::from_str(json)?;
        Self::new(palettes)
    }

    /// Validates a list of palettes.
    ///
    /// Fails on an empty list, duplicate names, palettes without hues, or any
    /// colour that is not `#RRGGBB`.
    pub fn new(palettes: Vec<Palette>) -> Result<Self, CatalogError> {
        if palettes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for palette in &palettes {
            if !seen.insert(palette.name.as_str()) {
                return Err(CatalogError::DuplicateName(palette.name.clone()));
            }
            palette.validate()?;
        }

        Ok(Self { palettes })
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Looks a palette up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
