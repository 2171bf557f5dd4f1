// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng) && (-90.0..=90.0).contains(&self.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLatBounds {
    pub sw: LngLat,
    pub ne: LngLat,
}

impl LngLatBounds {
    pub fn new(point: LngLat) -> Self {
        Self {
            sw: point,
            ne: point,
        }
    }

    pub fn extend(&mut self, point: LngLat) {
        self.sw.lng = self.sw.lng.min(point.lng);
        self.sw.lat = self.sw.lat.min(point.lat);
        self.ne.lng = self.ne.lng.max(point.lng);
        self.ne.lat = self.ne.lat.max(point.lat);
    }

    pub fn from_points<I: IntoIterator<Item = LngLat>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::new(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.sw.lng + self.ne.lng) / 2.0,
            (self.sw.lat + self.ne.lat) / 2.0,
        )
    }
}

/// Shifts a feature longitude by whole world-widths until it sits on the
/// same copy of the world as the pointer, so a popup anchored to a marker
/// near the antimeridian does not jump to the far side of the map.
pub fn wrap_popup_lng(pointer_lng: f64, feature_lng: f64) -> f64 {
    let mut lng = feature_lng;
    while (pointer_lng - lng).abs() > 180.0 {
        lng += if pointer_lng > lng { 360.0 } else { -360.0 };
    }
    lng
}
