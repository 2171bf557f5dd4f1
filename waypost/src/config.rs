// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::MatchRule;
use crate::map::coords::LngLat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MapConfig {
    pub access_token: String,
    #[serde(default = "default_center")]
    pub center: LngLat,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: f64, // camera zoom after a successful geolocation
    #[serde(default = "default_user_marker_color")]
    pub user_marker_color: String,
    #[serde(default = "default_route_color")]
    pub route_color: String,
    #[serde(default = "default_route_width")]
    pub route_width: f64,
    #[serde(default = "default_fit_padding")]
    pub fit_padding: f64,
}

fn default_center() -> LngLat {
    LngLat::new(0.0, 0.0)
}

fn default_zoom() -> f64 {
    9.0
}

fn default_focus_zoom() -> f64 {
    16.0
}

fn default_user_marker_color() -> String {
    "#4264fb".to_string()
}

fn default_route_color() -> String {
    "#FF0000".to_string()
}

fn default_route_width() -> f64 {
    5.0
}

fn default_fit_padding() -> f64 {
    50.0
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DirectionsConfig {
    #[serde(default = "default_directions_base_url")]
    pub base_url: String,
    #[serde(default = "default_directions_profile")]
    pub profile: String,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_directions_base_url(),
            profile: default_directions_profile(),
        }
    }
}

fn default_directions_base_url() -> String {
    "https://api.mapbox.com/directions/v5/mapbox".to_string()
}

fn default_directions_profile() -> String {
    "driving".to_string()
}

const KNOWN_PROFILES: &[&str] = &["driving", "driving-traffic", "walking", "cycling"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub match_rule: MatchRule,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub map: MapConfig,
    #[serde(default)]
    pub directions: DirectionsConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub map: MapConfig,
    pub directions: DirectionsConfig,
    pub filter: FilterConfig,
    pub logging: LoggingConfig,
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| {
        ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), err))
    })?;
    let config: Config = serde_yaml::from_str(&content).map_err(|err| {
        ConfigError::LoadError(format!("Failed to parse {}: {}", path.display(), err))
    })?;
    validate_config(config)
}

pub fn validate_config(config: Config) -> Result<ValidatedConfig, ConfigError> {
    if config.map.access_token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "map.access_token must not be empty".to_string(),
        ));
    }
    if !config.map.center.in_range() {
        return Err(ConfigError::ValidationError(format!(
            "map.center is out of range: lng {}, lat {}",
            config.map.center.lng, config.map.center.lat
        )));
    }
    for (name, zoom) in [
        ("map.zoom", config.map.zoom),
        ("map.focus_zoom", config.map.focus_zoom),
    ] {
        if !(0.0..=24.0).contains(&zoom) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between 0 and 24, got {}",
                name, zoom
            )));
        }
    }
    if config.map.route_width <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "map.route_width must be positive, got {}",
            config.map.route_width
        )));
    }
    if config.map.fit_padding < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "map.fit_padding must not be negative, got {}",
            config.map.fit_padding
        )));
    }
    if !KNOWN_PROFILES.contains(&config.directions.profile.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "directions.profile must be one of {}, got '{}'",
            KNOWN_PROFILES.join(", "),
            config.directions.profile
        )));
    }
    if config.directions.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "directions.base_url must not be empty".to_string(),
        ));
    }

    Ok(ValidatedConfig {
        map: config.map,
        directions: config.directions,
        filter: config.filter,
        logging: config.logging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::TestFixtureRoot;

    fn minimal_yaml() -> &'static str {
        "map:\n  access_token: pk.test-token\n"
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let fixture = TestFixtureRoot::new_unique("config-minimal").expect("fixture root");
        let path = fixture.write_config(minimal_yaml()).expect("write config");
        let config = load_config(&path).expect("load config");
        assert_eq!(config.map.zoom, 9.0);
        assert_eq!(config.map.focus_zoom, 16.0);
        assert_eq!(config.map.route_color, "#FF0000");
        assert_eq!(config.directions.profile, "driving");
        assert_eq!(config.filter.match_rule, MatchRule::Grouped);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_match_rule_from_yaml() {
        let fixture = TestFixtureRoot::new_unique("config-rule").expect("fixture root");
        let yaml = "map:\n  access_token: pk.test-token\nfilter:\n  match_rule: all\n";
        let path = fixture.write_config(yaml).expect("write config");
        let config = load_config(&path).expect("load config");
        assert_eq!(config.filter.match_rule, MatchRule::All);
    }

    #[test]
    fn test_empty_access_token_rejected() {
        let fixture = TestFixtureRoot::new_unique("config-token").expect("fixture root");
        let path = fixture
            .write_config("map:\n  access_token: \"  \"\n")
            .expect("write config");
        let error = load_config(&path).expect_err("validation should fail");
        assert!(matches!(error, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let fixture = TestFixtureRoot::new_unique("config-profile").expect("fixture root");
        let yaml = "map:\n  access_token: pk.test-token\ndirections:\n  profile: sailing\n";
        let path = fixture.write_config(yaml).expect("write config");
        let error = load_config(&path).expect_err("validation should fail");
        assert!(error.to_string().contains("directions.profile"));
    }

    #[test]
    fn test_out_of_range_center_rejected() {
        let fixture = TestFixtureRoot::new_unique("config-center").expect("fixture root");
        let yaml = "map:\n  access_token: pk.test-token\n  center:\n    lng: 200.0\n    lat: 10.0\n";
        let path = fixture.write_config(yaml).expect("write config");
        let error = load_config(&path).expect_err("validation should fail");
        assert!(error.to_string().contains("map.center"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let fixture = TestFixtureRoot::new_unique("config-missing").expect("fixture root");
        let error = load_config(&fixture.config_file()).expect_err("load should fail");
        assert!(matches!(error, ConfigError::LoadError(_)));
    }
}
