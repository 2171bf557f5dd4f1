// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use waypost::catalog::Catalog;
use waypost::config::{ValidatedConfig, load_config};
use waypost::directions::{DirectionsService, MapboxDirections, Route};
use waypost::filter::FilterEngine;
use waypost::map::coords::LngLat;

enum RunMode {
    Help,
    Check,
    Filter(Vec<String>),
    Route { origin: LngLat, destination: LngLat },
}

struct ParsedArgs {
    root: PathBuf,
    mode: RunMode,
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args(std::env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprint!("{}", help_text());
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", help_text());
        return 0;
    }

    let config = match load_config(&parsed_args.root.join("config.yaml")) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ {}", error);
            return 1;
        }
    };

    init_logger(&config.logging.level);

    match parsed_args.mode {
        RunMode::Help => 0,
        RunMode::Check => match load_catalog(&parsed_args.root) {
            Ok(catalog) => run_check(&config, &catalog),
            Err(code) => code,
        },
        RunMode::Filter(labels) => match load_catalog(&parsed_args.root) {
            Ok(catalog) => run_filter(&config, &catalog, &labels),
            Err(code) => code,
        },
        RunMode::Route {
            origin,
            destination,
        } => run_route(&config, origin, destination),
    }
}

fn load_catalog(root: &std::path::Path) -> Result<Catalog, i32> {
    match Catalog::load(&root.join("catalog.yaml")) {
        Ok(catalog) => Ok(catalog),
        Err(error) => {
            eprintln!("❌ {}", error);
            Err(1)
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<ParsedArgs, String> {
    let mut root = PathBuf::from(".");
    let mut mode = None;
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "-C" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "-C requires a directory".to_string())?;
                root = PathBuf::from(value);
            }
            "help" | "-h" | "--help" => {
                mode = Some(RunMode::Help);
            }
            "check" => {
                mode = Some(RunMode::Check);
            }
            "filter" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "filter requires a label list".to_string())?;
                let labels: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect();
                if labels.is_empty() {
                    return Err("filter requires at least one label".to_string());
                }
                mode = Some(RunMode::Filter(labels));
            }
            "route" => {
                idx += 1;
                let origin = parse_lng_lat(
                    args.get(idx)
                        .ok_or_else(|| "route requires an origin".to_string())?,
                )?;
                idx += 1;
                let destination = parse_lng_lat(
                    args.get(idx)
                        .ok_or_else(|| "route requires a destination".to_string())?,
                )?;
                mode = Some(RunMode::Route {
                    origin,
                    destination,
                });
            }
            flag => {
                return Err(format!("Unknown argument '{}'", flag));
            }
        }
        idx += 1;
    }

    let mode = mode.ok_or_else(|| "No mode given".to_string())?;
    Ok(ParsedArgs { root, mode })
}

fn parse_lng_lat(value: &str) -> Result<LngLat, String> {
    let mut parts = value.split(',');
    let lng = parts
        .next()
        .ok_or_else(|| format!("Invalid coordinate '{}'", value))?
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid coordinate '{}'", value))?;
    let lat = parts
        .next()
        .ok_or_else(|| format!("Invalid coordinate '{}'", value))?
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid coordinate '{}'", value))?;
    if parts.next().is_some() {
        return Err(format!("Invalid coordinate '{}'", value));
    }
    let position = LngLat::new(lng, lat);
    if !position.in_range() {
        return Err(format!("Coordinate out of range '{}'", value));
    }
    Ok(position)
}

fn init_logger(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run_check(config: &ValidatedConfig, catalog: &Catalog) -> i32 {
    println!("Configuration OK");
    println!("  directions profile: {}", config.directions.profile);
    println!("  filter match rule: {:?}", config.filter.match_rule);
    println!("Catalog OK");
    println!("  locations: {}", catalog.locations.len());
    println!("  filter fields: {}", catalog.filter_fields.len());
    let placeholders = catalog
        .locations
        .iter()
        .filter(|record| record.has_placeholder_icon())
        .count();
    if placeholders > 0 {
        println!("  locations with placeholder icons: {}", placeholders);
    }
    0
}

fn run_filter(config: &ValidatedConfig, catalog: &Catalog, labels: &[String]) -> i32 {
    let mut fields = catalog.filter_fields();
    for label in labels {
        let mut found = false;
        for field in &mut fields {
            if field.label.trim() == label.as_str() {
                field.checked = true;
                found = true;
            }
        }
        if !found {
            eprintln!("❌ No filter field with label '{}'", label);
            return 1;
        }
    }

    let Some(engine) = FilterEngine::initialize(
        fields,
        catalog.filter_items(),
        config.filter.match_rule,
    ) else {
        eprintln!("❌ Catalog has no filter fields or no locations");
        return 1;
    };

    println!(
        "{} of {} locations visible",
        engine.visible_count(),
        catalog.locations.len()
    );
    for id in engine.visible_ids() {
        match catalog.record(id) {
            Some(record) => println!("  {} ({})", record.name, record.id),
            None => println!("  {}", id),
        }
    }
    0
}

fn run_route(config: &ValidatedConfig, origin: LngLat, destination: LngLat) -> i32 {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("❌ Failed to start async runtime: {}", error);
            return 1;
        }
    };

    let client = MapboxDirections::new(config);
    match runtime.block_on(client.fetch_route(origin, destination)) {
        Ok(route) => {
            print_route(&route);
            0
        }
        Err(error) => {
            eprintln!("❌ {}", error);
            1
        }
    }
}

fn print_route(route: &Route) {
    println!("Distance: {:.1} km", route.distance / 1000.0);
    println!("Duration: {} minutes", (route.duration / 60.0).round() as i64);
    for leg in &route.legs {
        for step in &leg.steps {
            println!("  {} ({:.0} m)", step.maneuver.instruction, step.distance);
        }
    }
}

fn help_text() -> String {
    [
        "Waypost location directory tools",
        "",
        "Usage: waypost [-C <root>] <mode>",
        "",
        "Modes:",
        "  check                        Load and validate config.yaml and catalog.yaml",
        "  filter <label>[,<label>...]  Evaluate the tag filter against the catalog",
        "  route <lng,lat> <lng,lat>    Fetch driving directions between two points",
        "  help                         Show this text",
        "",
        "Options:",
        "  -C <root>   Directory holding config.yaml and catalog.yaml (default: .)",
        "",
    ]
    .join("\n")
}
