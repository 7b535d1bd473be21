//! Route planner CLI
//!
//! Plans routes and isochrones over OpenRouteService and exports the
//! resulting map layers as GeoJSON.

#![allow(clippy::print_stdout)]

mod render;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{GeocodingPort, RoutePlanner, SubmitOutcome};
use clap::{Parser, Subcommand};
use domain::{Coordinate, DEFAULT_RANGE, FormField, RangeKind, TravelProfile};
use infrastructure::{
    AppConfig, ConfiguredGeolocation, HeadlessMapSurface, OrsGeocodingAdapter,
    OrsIsochroneAdapter, OrsRoutingAdapter, init_telemetry, ors_client,
};
use tokio::io::BufReader;

use crate::render::{render_state, write_geojson};

/// Route planner CLI
#[derive(Parser)]
#[command(name = "route-planner")]
#[command(author, version, about = "Plan routes and isochrones over OpenRouteService", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: route-planner.toml in the working directory)
    #[arg(short, long, global = true, env = "ROUTE_PLANNER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a route between two places
    ///
    /// Example: route-planner route Pune Mumbai --profile cycling-regular
    Route {
        /// Origin place name
        origin: String,

        /// Destination place name
        destination: String,

        /// Travel profile
        #[arg(short, long, default_value = TravelProfile::DRIVING_CAR)]
        profile: TravelProfile,

        /// Write the map layers to this GeoJSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute the area reachable from a place
    ///
    /// Example: route-planner isochrone Pune --range 15 --range-kind time
    Isochrone {
        /// Origin place name
        origin: String,

        /// Range value
        #[arg(short, long, default_value_t = DEFAULT_RANGE)]
        range: f64,

        /// Range interpretation: distance or time
        #[arg(short = 'k', long, default_value = "distance")]
        range_kind: RangeKind,

        /// Travel profile
        #[arg(short, long, default_value = TravelProfile::DRIVING_CAR)]
        profile: TravelProfile,

        /// Write the map layers to this GeoJSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up the coordinate of a place
    Geocode {
        /// Place name
        place: String,
    },

    /// Look up the place name at a coordinate
    #[command(allow_negative_numbers = true)]
    Reverse {
        /// Latitude in degrees
        latitude: f64,

        /// Longitude in degrees
        longitude: f64,
    },

    /// Name the place at the configured device position
    Locate,

    /// Start an interactive planner session on stdin
    Session,

    /// Print the effective configuration with secrets masked
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// The planner wired to OpenRouteService and a headless map
struct App {
    planner: RoutePlanner,
    map: Arc<HeadlessMapSurface>,
    geocoding: Arc<OrsGeocodingAdapter>,
}

impl App {
    fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let client = ors_client(&config.ors)?;
        let geocoding = Arc::new(OrsGeocodingAdapter::new(client.clone()));
        let map = HeadlessMapSurface::init(&config.map);

        let planner = RoutePlanner::new(
            geocoding.clone(),
            Arc::new(OrsRoutingAdapter::new(client.clone())),
            Arc::new(OrsIsochroneAdapter::new(client)),
            map.clone(),
        )
        .with_geolocation(Arc::new(ConfiguredGeolocation::new(config.geolocation)));

        Ok(Self {
            planner,
            map,
            geocoding,
        })
    }

    /// Print the result of a one-shot action and export on success
    fn finish(&self, outcome: SubmitOutcome, output: Option<PathBuf>) -> anyhow::Result<()> {
        let state = self.planner.state();
        if outcome != SubmitOutcome::Succeeded {
            println!(
                "❌ {}",
                state.error_message.as_deref().unwrap_or("Request failed")
            );
            std::process::exit(1);
        }

        println!("{}", render_state(&state));
        if let Some(path) = output {
            let count = write_geojson(&self.map, &path)?;
            println!("📁 Wrote {count} feature(s) to {}", path.display());
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // An explicit -v overrides the configured filter
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    if matches!(cli.command, Commands::Config) {
        print!("{}", config.to_redacted_toml()?);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        println!("❌ Invalid configuration: {e}");
        std::process::exit(1);
    }
    let app = App::build(&config)?;

    match cli.command {
        Commands::Route {
            origin,
            destination,
            profile,
            output,
        } => {
            app.planner.set_origin(origin);
            app.planner.set_destination(destination);
            app.planner.set_profile(profile);
            let outcome = app.planner.submit_route().await;
            app.finish(outcome, output)?;
        },

        Commands::Isochrone {
            origin,
            range,
            range_kind,
            profile,
            output,
        } => {
            app.planner.set_origin(origin);
            app.planner.set_range(range);
            app.planner.set_range_kind(range_kind);
            app.planner.set_profile(profile);
            let outcome = app.planner.submit_isochrone().await;
            app.finish(outcome, output)?;
        },

        Commands::Geocode { place } => match app.geocoding.forward(&place).await {
            Ok(coordinate) => println!("📍 {coordinate}"),
            Err(e) => {
                println!("❌ {e}");
                std::process::exit(1);
            },
        },

        Commands::Reverse {
            latitude,
            longitude,
        } => {
            let coordinate = Coordinate::new(longitude, latitude)?;
            match app.geocoding.reverse(coordinate).await {
                Ok(label) => println!("📍 {label}"),
                Err(e) => {
                    println!("❌ {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Locate => {
            let outcome = app.planner.use_current_location(FormField::Origin).await;
            let state = app.planner.state();
            if outcome == SubmitOutcome::Succeeded {
                println!("📍 {}", state.field(FormField::Origin));
            } else {
                println!(
                    "❌ {}",
                    state.error_message.as_deref().unwrap_or("Location lookup failed")
                );
                std::process::exit(1);
            }
        },

        Commands::Session => {
            let input = BufReader::new(tokio::io::stdin());
            session::run(&app.planner, &app.map, input, &mut std::io::stdout()).await?;
        },

        Commands::Config => {},
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn app_builds_from_valid_config() {
        let mut config = AppConfig::default();
        config.ors.api_key = "test-api-key".to_string();
        let app = App::build(&config).unwrap();
        assert_eq!(app.planner.state().profile.as_str(), "driving-car");
        assert_eq!(app.map.layer_count(), 0);
    }

    #[test]
    fn app_rejects_missing_api_key() {
        let err = App::build(&AppConfig::default()).err().unwrap();
        assert!(err.to_string().contains("api_key"));
    }
}
