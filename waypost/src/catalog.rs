// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::{FilterField, FilterableItem};
use crate::map::coords::{LngLat, LngLatBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Icon asset the page builder substitutes when a record has no icon of
/// its own; records carrying it are not placed on the map.
pub const PLACEHOLDER_ICON_MARKER: &str = "placeholder.60f9b1840c.svg";

#[derive(Debug)]
pub enum CatalogError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::LoadError(msg) => write!(f, "Catalog load error: {}", msg),
            CatalogError::ValidationError(msg) => write!(f, "Catalog validation error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// One location exported by the content system.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub card_html: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl LocationRecord {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    pub fn has_placeholder_icon(&self) -> bool {
        self.icon_url
            .as_deref()
            .is_some_and(|url| url.contains(PLACEHOLDER_ICON_MARKER))
    }
}

/// One filter control exported alongside the locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDef {
    pub label: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// The load-once representation of the rendered location list and its
/// filter controls. Everything downstream reads from here, never from
/// presentation markup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub filter_fields: Vec<FieldDef>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|err| {
            CatalogError::LoadError(format!("Failed to read {}: {}", path.display(), err))
        })?;
        let catalog: Catalog = serde_yaml::from_str(&content).map_err(|err| {
            CatalogError::LoadError(format!("Failed to parse {}: {}", path.display(), err))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for record in &self.locations {
            if record.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "Location '{}' has an empty id",
                    record.name
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::ValidationError(format!(
                    "Duplicate location id '{}'",
                    record.id
                )));
            }
            if !record.position().in_range() {
                return Err(CatalogError::ValidationError(format!(
                    "Location '{}' has out-of-range coordinates: lng {}, lat {}",
                    record.id, record.lng, record.lat
                )));
            }
        }
        for field in &self.filter_fields {
            if field.label.trim().is_empty() {
                return Err(CatalogError::ValidationError(
                    "Filter field with an empty label".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn filter_fields(&self) -> Vec<FilterField> {
        self.filter_fields
            .iter()
            .map(|field| FilterField::new(field.label.clone(), field.category.clone()))
            .collect()
    }

    pub fn filter_items(&self) -> Vec<FilterableItem> {
        self.locations
            .iter()
            .map(|record| FilterableItem::new(record.id.clone(), record.tags.clone()))
            .collect()
    }

    pub fn record(&self, id: &str) -> Option<&LocationRecord> {
        self.locations.iter().find(|record| record.id == id)
    }

    /// Bounding box over every location, for the fallback camera fit when
    /// the visitor cannot be geolocated.
    pub fn bounds(&self) -> Option<LngLatBounds> {
        LngLatBounds::from_points(self.locations.iter().map(LocationRecord::position))
    }
}
