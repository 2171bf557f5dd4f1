// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::catalog::Catalog;
use crate::config::ValidatedConfig;
use crate::directions::{DirectionsService, Route};
use crate::geolocate::GeolocationProvider;
use crate::map::coords::{LngLat, wrap_popup_lng};
use crate::map::route_panel::generate_route_info_html;
use crate::map::surface::{MapSurface, Marker};
use log::{debug, error, info, warn};

/// Orchestrates the map surface for the location directory: marker
/// placement, popup lifecycle, camera moves, and the directions flow.
/// Collaborator handles are injected; nothing here reaches for shared
/// process state.
pub struct MapManager {
    surface: Box<dyn MapSurface>,
    directions: Box<dyn DirectionsService>,
    config: ValidatedConfig,
    catalog: Catalog,
    visitor_location: Option<LngLat>,
    active_route: Option<Route>,
    selected: Option<String>,
    route_panel_html: Option<String>,
}

impl MapManager {
    pub fn new(
        surface: Box<dyn MapSurface>,
        directions: Box<dyn DirectionsService>,
        config: ValidatedConfig,
        catalog: Catalog,
    ) -> Self {
        Self {
            surface,
            directions,
            config,
            catalog,
            visitor_location: None,
            active_route: None,
            selected: None,
            route_panel_html: None,
        }
    }

    /// Resolves the visitor's position and places markers. When the
    /// position is unavailable the markers are placed anyway and the
    /// camera falls back to the catalog's extent.
    pub fn initialize(&mut self, geolocator: &dyn GeolocationProvider) {
        match geolocator.current_position() {
            Ok(position) => {
                self.visitor_location = Some(position);
                self.surface.fly_to(position, self.config.map.focus_zoom);
                self.surface.add_marker(Marker::visitor(
                    position,
                    self.config.map.user_marker_color.clone(),
                ));
                self.place_markers();
            }
            Err(error) => {
                warn!("Error getting visitor location: {}", error);
                self.place_markers();
                self.fit_catalog_extent();
            }
        }
        info!(
            "Map initialized with {} locations",
            self.catalog.locations.len()
        );
    }

    /// Replaces all location markers from the catalog, skipping records
    /// still carrying the page builder's placeholder icon.
    pub fn place_markers(&mut self) {
        self.surface.clear_markers();
        for record in &self.catalog.locations {
            if record.has_placeholder_icon() {
                debug!("Skipping location '{}' with placeholder icon", record.id);
                continue;
            }
            self.surface.add_marker(Marker::location(
                record.id.clone(),
                record.position(),
                record.icon_url.clone(),
            ));
        }
    }

    /// Shows the location's card popup anchored next to the pointer,
    /// wrap-correcting the longitude across the antimeridian.
    pub fn show_location_popup(&mut self, id: &str, pointer: LngLat) -> bool {
        let Some(record) = self.catalog.record(id) else {
            warn!("Location '{}' not found in catalog", id);
            return false;
        };
        let popup_lng = wrap_popup_lng(pointer.lng, record.lng);
        let html = record.card_html.clone();
        self.surface
            .show_popup(LngLat::new(popup_lng, record.lat), &html);
        true
    }

    pub fn remove_popup(&mut self) {
        self.surface.remove_popup();
    }

    /// Full click flow: popup, selection highlight, directions when the
    /// visitor is located, camera ease. Directions failures are logged
    /// and leave the previously displayed route untouched.
    pub async fn handle_location_click(&mut self, id: &str, pointer: LngLat) {
        let Some(record) = self.catalog.record(id) else {
            warn!("Location '{}' not found in catalog", id);
            return;
        };
        let destination = record.position();

        self.show_location_popup(id, pointer);
        self.selected = Some(id.to_string());

        if let Some(origin) = self.visitor_location {
            let fetched = self.directions.fetch_route(origin, destination).await;
            match fetched {
                Ok(route) => self.display_route(route),
                Err(error) => error!("Error fetching directions: {}", error),
            }
        }

        self.surface.ease_to(destination);
    }

    /// Replaces the route overlay and summary panel with the given route
    /// and fits the camera to its extent.
    pub fn display_route(&mut self, route: Route) {
        let coordinates = route.coordinates();
        self.surface.set_route(
            &coordinates,
            &self.config.map.route_color,
            self.config.map.route_width,
        );
        if let Some(bounds) = route.bounds() {
            self.surface.fit_bounds(bounds, self.config.map.fit_padding);
        }
        self.route_panel_html = Some(generate_route_info_html(&route));
        self.active_route = Some(route);
    }

    /// Dismisses the route display, as wired to the summary panel's close
    /// control: the overlay is cleared and the panel dropped.
    pub fn dismiss_route(&mut self) {
        if self.active_route.take().is_some() {
            self.surface.clear_route();
        }
        self.route_panel_html = None;
    }

    fn fit_catalog_extent(&mut self) {
        if let Some(bounds) = self.catalog.bounds() {
            self.surface.fit_bounds(bounds, self.config.map.fit_padding);
        }
    }

    pub fn visitor_location(&self) -> Option<LngLat> {
        self.visitor_location
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.active_route.as_ref()
    }

    pub fn route_panel_html(&self) -> Option<&str> {
        self.route_panel_html.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
