// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::ValidatedConfig;
use crate::directions::types::{DirectionsResponse, Route};
use crate::directions::{DirectionsError, DirectionsService};
use crate::map::coords::LngLat;
use async_trait::async_trait;
use log::{debug, error};

/// Directions v5 API client. One instance per process; the inner reqwest
/// client pools its connections.
pub struct MapboxDirections {
    client: reqwest::Client,
    base_url: String,
    profile: String,
    access_token: String,
}

impl MapboxDirections {
    pub fn new(config: &ValidatedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.directions.base_url.trim_end_matches('/').to_string(),
            profile: config.directions.profile.clone(),
            access_token: config.map.access_token.clone(),
        }
    }

    fn request_url(&self, origin: LngLat, destination: LngLat) -> String {
        format!(
            "{}/{}/{},{};{},{}?steps=true&geometries=geojson&overview=full&annotations=distance,duration&access_token={}",
            self.base_url,
            self.profile,
            origin.lng,
            origin.lat,
            destination.lng,
            destination.lat,
            self.access_token
        )
    }
}

#[async_trait]
impl DirectionsService for MapboxDirections {
    async fn fetch_route(
        &self,
        origin: LngLat,
        destination: LngLat,
    ) -> Result<Route, DirectionsError> {
        let url = self.request_url(origin, destination);
        debug!(
            "Fetching {} directions from {},{} to {},{}",
            self.profile, origin.lng, origin.lat, destination.lng, destination.lat
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DirectionsError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Directions request failed with HTTP status {}", status);
            return Err(DirectionsError::Status(status.as_u16()));
        }

        let decoded: DirectionsResponse = response
            .json()
            .await
            .map_err(|err| DirectionsError::Decode(err.to_string()))?;

        decoded
            .routes
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DirectionsConfig, FilterConfig, LoggingConfig, MapConfig, validate_config};

    fn test_config() -> ValidatedConfig {
        validate_config(Config {
            map: MapConfig {
                access_token: "pk.test-token".to_string(),
                center: LngLat::new(0.0, 0.0),
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

    #[test]
    fn test_request_url_shape() {
        let client = MapboxDirections::new(&test_config());
        let url = client.request_url(LngLat::new(4.89, 52.37), LngLat::new(4.95, 52.3));
        assert_eq!(
            url,
            "https://api.mapbox.com/directions/v5/mapbox/driving/4.89,52.37;4.95,52.3?steps=true&geometries=geojson&overview=full&annotations=distance,duration&access_token=pk.test-token"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = test_config();
        config.directions.base_url = "http://127.0.0.1:9/directions/".to_string();
        let client = MapboxDirections::new(&config);
        let url = client.request_url(LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0));
        assert!(url.starts_with("http://127.0.0.1:9/directions/driving/1,2;3,4?"));
    }

    #[test]
    fn test_decode_directions_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1532.6,
                "duration": 301.2,
                "geometry": {"type": "LineString", "coordinates": [[4.89, 52.37], [4.90, 52.36]]},
                "legs": [{"steps": [
                    {"distance": 120.0, "maneuver": {"instruction": "Head north"}},
                    {"distance": 1412.6, "maneuver": {"instruction": "Arrive at destination"}}
                ]}]
            }]
        }"#;
        let decoded: DirectionsResponse = serde_json::from_str(body).expect("decodes");
        assert_eq!(decoded.code.as_deref(), Some("Ok"));
        let route = &decoded.routes[0];
        assert_eq!(route.legs[0].steps.len(), 2);
        assert_eq!(route.legs[0].steps[0].maneuver.instruction, "Head north");
        assert_eq!(route.coordinates()[1], LngLat::new(4.90, 52.36));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let mut config = test_config();
        // Port 9 (discard) is never serving HTTP locally.
        config.directions.base_url = "http://127.0.0.1:9".to_string();
        let client = MapboxDirections::new(&config);
        let error = client
            .fetch_route(LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0))
            .await
            .expect_err("connection should fail");
        assert!(matches!(error, DirectionsError::Transport(_)));
    }
}
