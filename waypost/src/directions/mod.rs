// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod client;
pub mod types;

pub use client::MapboxDirections;
pub use types::{DirectionsResponse, Maneuver, Route, RouteGeometry, RouteLeg, RouteStep};

use crate::map::coords::LngLat;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionsError {
    Transport(String),
    Status(u16),
    Decode(String),
    NoRoute,
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Transport(msg) => write!(f, "Directions request failed: {}", msg),
            DirectionsError::Status(status) => {
                write!(f, "Directions request returned HTTP status {}", status)
            }
            DirectionsError::Decode(msg) => write!(f, "Directions response unreadable: {}", msg),
            DirectionsError::NoRoute => write!(f, "Directions response contained no routes"),
        }
    }
}

impl Error for DirectionsError {}

/// Remote route lookup between two coordinate pairs. Implementations own
/// transport, credentials, and retry policy; callers receive the best
/// route or a failure.
#[async_trait]
pub trait DirectionsService: Send + Sync {
    async fn fetch_route(
        &self,
        origin: LngLat,
        destination: LngLat,
    ) -> Result<Route, DirectionsError>;
}
