// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod coords;
pub mod manager;
pub mod route_panel;
pub mod surface;

pub use coords::{LngLat, LngLatBounds, wrap_popup_lng};
pub use manager::MapManager;
pub use route_panel::{ROUTE_PANEL_STYLES, generate_route_info_html};
pub use surface::{MapSurface, Marker};
