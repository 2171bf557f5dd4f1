// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use waypost::catalog::{Catalog, FieldDef, LocationRecord, PLACEHOLDER_ICON_MARKER};
use waypost::config::{
    Config, DirectionsConfig, FilterConfig, LoggingConfig, MapConfig, ValidatedConfig,
    validate_config,
};
use waypost::directions::{
    DirectionsError, DirectionsService, Maneuver, Route, RouteGeometry, RouteLeg, RouteStep,
};
use waypost::map::coords::{LngLat, LngLatBounds};
use waypost::map::surface::{MapSurface, Marker};

pub fn test_config() -> ValidatedConfig {
    validate_config(Config {
        map: MapConfig {
            access_token: "pk.test-token".to_string(),
            center: LngLat::new(4.9, 52.37),
            zoom: 9.0,
            focus_zoom: 16.0,
            user_marker_color: "#4264fb".to_string(),
            route_color: "#FF0000".to_string(),
            route_width: 5.0,
            fit_padding: 50.0,
        },
        directions: DirectionsConfig::default(),
        filter: FilterConfig::default(),
        logging: LoggingConfig::default(),
    })
    .expect("test config validates")
}

pub fn location(id: &str, name: &str, lng: f64, lat: f64, tags: &[&str]) -> LocationRecord {
    LocationRecord {
        id: id.to_string(),
        name: name.to_string(),
        lng,
        lat,
        icon_url: Some(format!("https://cdn.example.com/icons/{}.svg", id)),
        card_html: format!("<h4>{}</h4>", name),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog {
        locations: vec![
            location("harbour", "Harbour Kitchen", 4.89, 52.37, &["Vegan", "Spicy"]),
            location("deli", "Corner Deli", 4.91, 52.36, &["Vegan"]),
            location("grill", "Dock Grill", 4.93, 52.38, &["Spicy"]),
        ],
        filter_fields: vec![
            FieldDef {
                label: "Vegan".to_string(),
                category: Some("diet".to_string()),
            },
            FieldDef {
                label: "Spicy".to_string(),
                category: Some("flavor".to_string()),
            },
        ],
    }
}

pub fn placeholder_location(id: &str, lng: f64, lat: f64) -> LocationRecord {
    let mut record = location(id, id, lng, lat, &[]);
    record.icon_url = Some(format!(
        "https://cdn.example.com/{}",
        PLACEHOLDER_ICON_MARKER
    ));
    record
}

pub fn sample_route(distance: f64) -> Route {
    Route {
        distance,
        duration: 301.2,
        geometry: RouteGeometry {
            coordinates: vec![[4.89, 52.37], [4.90, 52.36], [4.91, 52.36]],
        },
        legs: vec![RouteLeg {
            steps: vec![RouteStep {
                distance,
                maneuver: Maneuver {
                    instruction: "Head north".to_string(),
                },
            }],
        }],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    MarkerAdded(Marker),
    MarkersCleared,
    PopupShown { position: LngLat, html: String },
    PopupRemoved,
    FlewTo { center: LngLat, zoom: f64 },
    EasedTo { center: LngLat },
    FitBounds { bounds: LngLatBounds, padding: f64 },
    RouteSet {
        coordinates: Vec<LngLat>,
        color: String,
        width: f64,
    },
    RouteCleared,
}

/// Map surface double that records every command for assertions.
#[derive(Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Arc<Mutex<Vec<SurfaceEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().expect("surface event lock").push(event);
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, marker: Marker) {
        self.record(SurfaceEvent::MarkerAdded(marker));
    }

    fn clear_markers(&mut self) {
        self.record(SurfaceEvent::MarkersCleared);
    }

    fn show_popup(&mut self, position: LngLat, html: &str) {
        self.record(SurfaceEvent::PopupShown {
            position,
            html: html.to_string(),
        });
    }

    fn remove_popup(&mut self) {
        self.record(SurfaceEvent::PopupRemoved);
    }

    fn fly_to(&mut self, center: LngLat, zoom: f64) {
        self.record(SurfaceEvent::FlewTo { center, zoom });
    }

    fn ease_to(&mut self, center: LngLat) {
        self.record(SurfaceEvent::EasedTo { center });
    }

    fn fit_bounds(&mut self, bounds: LngLatBounds, padding: f64) {
        self.record(SurfaceEvent::FitBounds { bounds, padding });
    }

    fn set_route(&mut self, coordinates: &[LngLat], color: &str, width: f64) {
        self.record(SurfaceEvent::RouteSet {
            coordinates: coordinates.to_vec(),
            color: color.to_string(),
            width,
        });
    }

    fn clear_route(&mut self) {
        self.record(SurfaceEvent::RouteCleared);
    }
}

/// Directions double that replays a scripted sequence of results.
pub struct StubDirections {
    results: Mutex<VecDeque<Result<Route, DirectionsError>>>,
}

impl StubDirections {
    pub fn new(results: Vec<Result<Route, DirectionsError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }
}

#[async_trait]
impl DirectionsService for StubDirections {
    async fn fetch_route(
        &self,
        _origin: LngLat,
        _destination: LngLat,
    ) -> Result<Route, DirectionsError> {
        self.results
            .lock()
            .expect("stub directions lock")
            .pop_front()
            .unwrap_or(Err(DirectionsError::NoRoute))
    }
}
