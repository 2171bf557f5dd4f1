// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::map::coords::{LngLat, LngLatBounds};

/// One marker placed on the surface. Location markers carry an icon URL;
/// the visitor marker carries a color instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub position: LngLat,
    pub icon_url: Option<String>,
    pub color: Option<String>,
}

impl Marker {
    pub fn location(id: impl Into<String>, position: LngLat, icon_url: Option<String>) -> Self {
        Self {
            id: id.into(),
            position,
            icon_url,
            color: None,
        }
    }

    pub fn visitor(position: LngLat, color: impl Into<String>) -> Self {
        Self {
            id: "visitor".to_string(),
            position,
            icon_url: None,
            color: Some(color.into()),
        }
    }
}

/// Seam to the embedding host's mapping SDK. The manager issues commands
/// through this trait only; it never reaches for a shared map instance.
pub trait MapSurface {
    fn add_marker(&mut self, marker: Marker);
    fn clear_markers(&mut self);
    fn show_popup(&mut self, position: LngLat, html: &str);
    fn remove_popup(&mut self);
    fn fly_to(&mut self, center: LngLat, zoom: f64);
    fn ease_to(&mut self, center: LngLat);
    fn fit_bounds(&mut self, bounds: LngLatBounds, padding: f64);
    fn set_route(&mut self, coordinates: &[LngLat], color: &str, width: f64);
    fn clear_route(&mut self);
}
