//! Command-line entry point: config selection, session overrides and the
//! non-interactive outputs.

use clap::Parser;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::{Config, ConfigError};
use crate::error::ZilTripsError;
use crate::links::TravelLink;
use crate::session::{TripSelection, TripSession};

#[derive(Debug, Parser)]
#[command(name = "ziltrips", version, about = "Smart travel planning for Brazil")]
pub struct Cli {
    /// Config file (default: ~/.config/ziltrips/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Origin city
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination state (e.g. "Bahia")
    #[arg(long)]
    pub state: Option<String>,

    /// Destination city within the state
    #[arg(long)]
    pub city: Option<String>,

    /// Travel style label or keyword (e.g. "Nightlife / Events", "beach")
    #[arg(long)]
    pub style: Option<String>,

    /// Trip duration in days
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Print the summary and links instead of opening the planner
    #[arg(long)]
    pub print: bool,

    /// With --print, emit JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Write the PDF travel plan into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Config from `--config`, or the default location.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Session seeded from the config defaults with command-line overrides
    /// applied on top, in form order.
    pub fn build_session(&self, config: &Config) -> Result<TripSession, ZilTripsError> {
        let mut session = TripSession::new(Catalog::brazil(), config.initial_selection()?);

        if let Some(origin) = &self.origin {
            session.set_origin(origin.clone());
        }
        if let Some(state) = &self.state {
            session.set_state(state)?;
        }
        if let Some(style) = &self.style {
            session.set_style(style.parse()?);
        }
        if let Some(city) = &self.city {
            session.set_city(city)?;
        }
        if let Some(days) = self.days {
            session.set_days(days);
        }

        Ok(session)
    }

    /// True when the planner UI should not be opened.
    pub fn is_batch(&self) -> bool {
        self.print || self.export.is_some()
    }
}

/// Everything the planner shows, in serializable form.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub selection: &'a TripSelection,
    pub destination: String,
    pub summary: String,
    pub links: Vec<TravelLink>,
}

impl<'a> PlanReport<'a> {
    pub fn new(session: &'a TripSession) -> Self {
        Self {
            selection: session.selection(),
            destination: session.destination(),
            summary: session.summary().text().to_string(),
            links: session.links().all().to_vec(),
        }
    }
}

/// Plain-text plan: the summary followed by both link sections.
pub fn render_plan_text(session: &TripSession) -> String {
    let links = session.links();
    let mut out = String::new();

    let _ = writeln!(out, "{}", session.summary());
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Flights");
    for link in links.flights() {
        let _ = writeln!(out, "- {}: {}", link.label, link.url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Stays");
    for link in links.stays() {
        let _ = writeln!(out, "- {}: {}", link.label, link.url);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ziltrips"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn overrides_apply_in_form_order() {
        let cli = parse(&["--state", "Bahia", "--style", "nightlife", "--city", "Porto Seguro"]);
        let session = cli.build_session(&Config::default()).unwrap();
        assert_eq!(session.selection().state, "Bahia");
        assert_eq!(session.selection().city, "Porto Seguro");
    }

    #[test]
    fn state_override_resets_city() {
        let cli = parse(&["--state", "São Paulo"]);
        let session = cli.build_session(&Config::default()).unwrap();
        assert_eq!(session.selection().city, "Santos");
    }

    #[test]
    fn city_outside_filter_is_an_error() {
        let cli = parse(&["--style", "Relax / Wellness", "--city", "Paraty"]);
        let err = cli.build_session(&Config::default()).unwrap_err();
        assert!(matches!(err, ZilTripsError::Catalog(_)));
    }

    #[test]
    fn zero_days_rejected_by_parser() {
        assert!(Cli::try_parse_from(["ziltrips", "--days", "0"]).is_err());
    }

    #[test]
    fn json_requires_print() {
        assert!(Cli::try_parse_from(["ziltrips", "--json"]).is_err());
        assert!(parse(&["--print", "--json"]).is_batch());
    }

    #[test]
    fn text_plan_lists_sections() {
        let session = TripSession::default();
        let text = render_plan_text(&session);
        assert!(text.starts_with("ZilTrips Travel Plan"));
        assert!(text.contains("Recommended Flights\n- Google Flights: https://www.google.com/travel/flights?q=New%20York%20to%20B%C3%BAzios"));
        assert!(text.contains("- Airbnb: https://www.airbnb.com.br/s/B%C3%BAzios%2C%20Rio%20de%20Janeiro%2C%20Brazil/homes"));
    }
}
