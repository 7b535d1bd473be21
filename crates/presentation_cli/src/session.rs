//! Interactive planner session
//!
//! Reads one command per line and drives a single [`RoutePlanner`], so the
//! form, the error display and the map layers persist between commands.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use application::RoutePlanner;
use domain::{FormField, RangeKind, TravelProfile};
use infrastructure::HeadlessMapSurface;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::render::{render_located, render_map, render_outcome, render_state, write_geojson};

const HELP: &str = "\
Commands:
  origin <place>        set the origin text (alias: from)
  destination <place>   set the destination text (alias: to)
  profile <name>        set the travel profile, e.g. foot-walking
  range <value>         set the isochrone range
  range-kind <kind>     distance or time
  route                 compute the route between origin and destination
  isochrone             compute the isochrone around the origin
  clear-route           remove the route
  clear-isochrone       remove the isochrone
  locate [field]        fill origin or destination from the device position
  show                  print the form
  export <path>         write the map layers as GeoJSON
  help                  print this help
  quit                  leave the session";

/// A parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Overwrite a form field
    Set(FormField, String),
    /// Select a travel profile
    Profile(TravelProfile),
    /// Set the isochrone range
    Range(f64),
    /// Set the isochrone range interpretation
    RangeKind(RangeKind),
    /// Submit a route
    Route,
    /// Submit an isochrone
    Isochrone,
    /// Remove the route
    ClearRoute,
    /// Remove the isochrone
    ClearIsochrone,
    /// Fill a field from the device position
    Locate(FormField),
    /// Print the form
    Show,
    /// Export the map layers
    Export(PathBuf),
    /// Print the command list
    Help,
    /// End the session
    Quit,
}

/// Errors parsing a session line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized command word
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    /// Required argument absent
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    /// Argument present but malformed
    #[error("{0}")]
    InvalidArgument(String),
}

/// Parse one non-empty input line
pub fn parse_command(line: &str) -> Result<SessionCommand, ParseError> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let command = match verb.to_lowercase().as_str() {
        "origin" | "from" => SessionCommand::Set(FormField::Origin, rest.to_string()),
        "destination" | "to" => SessionCommand::Set(FormField::Destination, rest.to_string()),
        "profile" => SessionCommand::Profile(parse_argument("profile", rest)?),
        "range" => {
            let range = required("range", rest)?
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidArgument(format!("'{rest}' is not a number")))?;
            SessionCommand::Range(range)
        },
        "range-kind" | "kind" => SessionCommand::RangeKind(parse_argument("range-kind", rest)?),
        "route" => SessionCommand::Route,
        "isochrone" => SessionCommand::Isochrone,
        "clear-route" => SessionCommand::ClearRoute,
        "clear-isochrone" => SessionCommand::ClearIsochrone,
        "locate" if rest.is_empty() => SessionCommand::Locate(FormField::Origin),
        "locate" => SessionCommand::Locate(parse_argument("locate", rest)?),
        "show" | "state" => SessionCommand::Show,
        "export" => SessionCommand::Export(PathBuf::from(required("export", rest)?)),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn required<'a>(verb: &'static str, rest: &'a str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(verb))
    } else {
        Ok(rest)
    }
}

fn parse_argument<T>(verb: &'static str, rest: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    required(verb, rest)?
        .parse()
        .map_err(|e: T::Err| ParseError::InvalidArgument(e.to_string()))
}

/// Run commands from `input` until it ends or `quit` is read
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
/// Planner failures are printed and the session continues.
pub async fn run<R, W>(
    planner: &RoutePlanner,
    map: &HeadlessMapSurface,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Route planner session, type 'help' for commands")?;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            },
        };
        debug!(?command, "Session command");
        execute(planner, map, command, out).await?;
    }

    Ok(())
}

async fn execute<W: Write>(
    planner: &RoutePlanner,
    map: &HeadlessMapSurface,
    command: SessionCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        SessionCommand::Set(field, text) => planner.set_field(field, text),
        SessionCommand::Profile(profile) => {
            if !profile.is_known() {
                writeln!(out, "Note: '{profile}' is not a standard profile")?;
            }
            planner.set_profile(profile);
        },
        SessionCommand::Range(range) => planner.set_range(range),
        SessionCommand::RangeKind(kind) => planner.set_range_kind(kind),
        SessionCommand::Route => {
            let outcome = planner.submit_route().await;
            writeln!(out, "{}", render_outcome(outcome, &planner.state()))?;
        },
        SessionCommand::Isochrone => {
            let outcome = planner.submit_isochrone().await;
            writeln!(out, "{}", render_outcome(outcome, &planner.state()))?;
        },
        SessionCommand::ClearRoute => planner.clear_route(),
        SessionCommand::ClearIsochrone => planner.clear_isochrone(),
        SessionCommand::Locate(field) => {
            let outcome = planner.use_current_location(field).await;
            writeln!(out, "{}", render_located(outcome, &planner.state(), field))?;
        },
        SessionCommand::Show => {
            writeln!(out, "{}", render_state(&planner.state()))?;
            writeln!(out, "{}", render_map(map))?;
        },
        SessionCommand::Export(path) => match write_geojson(map, &path) {
            Ok(count) => writeln!(out, "Wrote {count} feature(s) to {}", path.display())?,
            Err(e) => writeln!(out, "✗ {e:#}")?,
        },
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Quit => {},
    }
    Ok(())
}
