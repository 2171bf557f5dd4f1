// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::map::coords::LngLat;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct GeolocateError {
    message: String,
}

impl GeolocateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GeolocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GeolocateError {}

/// Supplies the visitor's current position. The embedding host decides
/// where positions come from; the map manager only consumes the result.
pub trait GeolocationProvider {
    fn current_position(&self) -> Result<LngLat, GeolocateError>;
}

/// Position already known to the host (or pinned for tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub LngLat);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> Result<LngLat, GeolocateError> {
        Ok(self.0)
    }
}

/// Host without a position source; every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl GeolocationProvider for Unavailable {
    fn current_position(&self) -> Result<LngLat, GeolocateError> {
        Err(GeolocateError::new("Geolocation is not available in this host"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_position_resolves() {
        let provider = FixedPosition(LngLat::new(4.89, 52.37));
        let position = provider.current_position().expect("position");
        assert_eq!(position, LngLat::new(4.89, 52.37));
    }

    #[test]
    fn test_unavailable_fails() {
        let error = Unavailable.current_position().expect_err("no position");
        assert!(error.to_string().contains("not available"));
    }
}
