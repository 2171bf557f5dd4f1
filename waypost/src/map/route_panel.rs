// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::directions::Route;
use crate::util::html_escape;

/// Stylesheet for the route panel; the host embeds it once per page.
pub const ROUTE_PANEL_STYLES: &str = r#".route-info-container {
    background: white;
    border-radius: 4px;
    box-shadow: 0 2px 6px rgba(0,0,0,0.1);
    margin: 10px;
    padding: 15px;
    min-width: 20rem;
    max-height: 500px;
    overflow-y: auto;
}
.route-summary {
    margin-bottom: 15px;
    padding-bottom: 10px;
    border-bottom: 1px solid #eee;
}
.route-steps {
    margin-top: 10px;
}
.steps-list {
    padding-left: 20px;
}
.route-step {
    margin: 10px 0;
    padding: 5px 0;
    border-bottom: 1px solid #f5f5f5;
}
.instruction {
    display: block;
    margin-bottom: 5px;
}
.distance {
    display: block;
    font-size: 0.9em;
    color: #666;
}
"#;

pub fn generate_route_info_html(route: &Route) -> String {
    let distance_km = format!("{:.1}", route.distance / 1000.0);
    let duration_minutes = (route.duration / 60.0).round() as i64;

    let mut html = String::new();
    html.push_str("<div class=\"route-summary\">");
    html.push_str("<button class=\"close-list\">\u{d7}</button>");
    html.push_str("<h3>Route Information</h3>");
    html.push_str("<p><strong>Total Distance:</strong> ");
    html.push_str(&distance_km);
    html.push_str(" km</p>");
    html.push_str("<p><strong>Estimated Time:</strong> ");
    html.push_str(&duration_minutes.to_string());
    html.push_str(" minutes</p>");
    html.push_str("</div>");

    html.push_str("<div class=\"route-steps\">");
    html.push_str("<h3>Turn-by-Turn Directions</h3>");
    html.push_str("<ol class=\"steps-list\">");
    for leg in &route.legs {
        for step in &leg.steps {
            html.push_str("<li class=\"route-step\">");
            html.push_str("<span class=\"instruction\">");
            html.push_str(&html_escape(&step.maneuver.instruction));
            html.push_str("</span>");
            html.push_str("<span class=\"distance\">");
            html.push_str(&format_step_distance(step.distance));
            html.push_str("</span>");
            html.push_str("</li>");
        }
    }
    html.push_str("</ol>");
    html.push_str("</div>");

    html
}

fn format_step_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
