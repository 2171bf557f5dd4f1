// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::map::coords::{LngLat, LngLatBounds};
use serde::{Deserialize, Serialize};

/// Subset of the Directions v5 response the product consumes. Unknown
/// fields are ignored on decode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Route {
    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    pub geometry: RouteGeometry,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

impl Route {
    pub fn coordinates(&self) -> Vec<LngLat> {
        self.geometry
            .coordinates
            .iter()
            .map(|pair| LngLat::new(pair[0], pair[1]))
            .collect()
    }

    pub fn bounds(&self) -> Option<LngLatBounds> {
        LngLatBounds::from_points(self.coordinates())
    }
}

/// GeoJSON LineString geometry: coordinate pairs in lng, lat order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteStep {
    /// Metres.
    pub distance: f64,
    pub maneuver: Maneuver,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Maneuver {
    #[serde(default)]
    pub instruction: String,
}
