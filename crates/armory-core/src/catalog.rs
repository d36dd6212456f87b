//! Equipment catalog - the fixed table of wearable item definitions
//!
//! Each slot describes one optional visual attachment: a display label,
//! a hex color, a local position offset, and a box size. The builtin
//! table carries the five classic pieces; a custom table can be loaded
//! from a TOML file and is validated on load.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid catalog: {0}")]
    ValidationError(String),
}

/// One equipment slot definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentSpec {
    /// Stable identifier used by the loadout (e.g. "helmet")
    pub id: String,
    /// Display label shown next to the checkbox
    pub label: String,
    /// Color as "#RRGGBB"
    pub color: String,
    /// Position offset from the character group origin
    pub offset: [f32; 3],
    /// Box dimensions in world units
    pub size: [f32; 3],
}

impl EquipmentSpec {
    /// Parsed sRGB components of `color`. Malformed hex strings fall
    /// back to neutral gray; validation rejects them at load time, so
    /// the fallback is unreachable for a loaded catalog.
    pub fn rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.color).unwrap_or([0.5, 0.5, 0.5])
    }
}

/// Ordered equipment slot table
///
/// Slot order is declaration order; the UI panel and the resolved
/// visible set both follow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "slot")]
    slots: Vec<EquipmentSpec>,
}

impl Catalog {
    /// The builtin five-piece catalog
    pub fn builtin() -> Self {
        let slot = |id: &str, label: &str, color: &str, offset: [f32; 3], size: [f32; 3]| {
            EquipmentSpec {
                id: id.to_string(),
                label: label.to_string(),
                color: color.to_string(),
                offset,
                size,
            }
        };

        Self {
            slots: vec![
                slot("helmet", "Шлем", "#A0A0A0", [0.0, 1.4, 0.0], [1.05, 1.05, 1.05]),
                slot("chestplate", "Нагрудник", "#A0A0A0", [0.0, 0.2, 0.15], [1.05, 1.55, 0.55]),
                slot("leggings", "Поножи", "#A0A0A0", [0.0, -1.0, 0.05], [1.05, 1.0, 0.55]),
                slot("boots", "Сапоги", "#A0A0A0", [0.0, -1.8, 0.05], [1.05, 0.5, 0.55]),
                slot("sword", "Меч", "#808080", [0.8, 0.0, 0.5], [0.2, 2.0, 0.1]),
            ],
        }
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        info!(path = %path.display(), slots = catalog.len(), "Loaded equipment catalog");
        Ok(catalog)
    }

    /// Slots in declaration order
    pub fn slots(&self) -> &[EquipmentSpec] {
        &self.slots
    }

    /// Look up a slot by id
    pub fn get(&self, id: &str) -> Option<&EquipmentSpec> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.slots.is_empty() {
            return Err(CatalogError::ValidationError(
                "catalog has no slots".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "duplicate slot id '{}'",
                    slot.id
                )));
            }
            if parse_hex_color(&slot.color).is_none() {
                return Err(CatalogError::ValidationError(format!(
                    "slot '{}' has invalid color '{}'",
                    slot.id, slot.color
                )));
            }
            if slot.size.iter().any(|&d| d <= 0.0) {
                return Err(CatalogError::ValidationError(format!(
                    "slot '{}' has non-positive size",
                    slot.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse a "#RRGGBB" hex color into sRGB components in 0.0..=1.0
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
