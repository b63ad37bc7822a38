//! The user's trip choices and the rules that keep them consistent.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError, City, State, TravelStyle};
use crate::links::TravelLinks;
use crate::selector::{filter_cities, resolve_default_city};
use crate::summary::TripSummary;

pub const DEFAULT_ORIGIN: &str = "New York";
pub const DEFAULT_STATE: &str = "Rio de Janeiro";
pub const DEFAULT_CITY: &str = "Búzios";
pub const DEFAULT_DAYS: u32 = 5;

/// Current planning choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSelection {
    pub origin: String,
    pub state: String,
    pub city: String,
    pub style: TravelStyle,
    /// Trip duration in days, at least 1.
    pub days: u32,
}

impl Default for TripSelection {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            state: DEFAULT_STATE.to_string(),
            city: DEFAULT_CITY.to_string(),
            style: TravelStyle::Beach,
            days: DEFAULT_DAYS,
        }
    }
}

impl TripSelection {
    /// `"{city}, {state}, Brazil"`.
    pub fn destination(&self) -> String {
        format!("{}, {}, Brazil", self.city, self.state)
    }
}

/// A selection bound to the catalog it is validated against.
///
/// Every mutation re-runs the city filter, so `selection().city` is always
/// one of [`TripSession::filtered_cities`].
#[derive(Debug, Clone)]
pub struct TripSession {
    catalog: &'static Catalog,
    selection: TripSelection,
}

impl Default for TripSession {
    fn default() -> Self {
        Self::new(Catalog::brazil(), TripSelection::default())
    }
}

impl PartialEq for TripSession {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog) && self.selection == other.selection
    }
}

impl TripSession {
    /// Binds `selection` to `catalog`, repairing an unknown state or a city
    /// that is not offered for the chosen style.
    pub fn new(catalog: &'static Catalog, selection: TripSelection) -> Self {
        let mut session = Self { catalog, selection };
        if catalog.state(&session.selection.state).is_none() {
            let fallback = catalog.states()[0].name;
            tracing::warn!(
                state = %session.selection.state,
                fallback,
                "Unknown state in selection"
            );
            session.selection.state = fallback.to_string();
        }
        session.selection.days = session.selection.days.max(1);
        session.reconcile_city();
        session
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &TripSelection {
        &self.selection
    }

    pub fn state(&self) -> &'static State {
        self.catalog
            .state(&self.selection.state)
            .unwrap_or(&self.catalog.states()[0])
    }

    /// Cities offered for the current state and style.
    pub fn filtered_cities(&self) -> Vec<&'static City> {
        let state = self.state();
        filter_cities(self.catalog, state.name, self.selection.style)
            .unwrap_or_else(|_| state.cities.iter().collect())
    }

    pub fn destination(&self) -> String {
        self.selection.destination()
    }

    pub fn links(&self) -> TravelLinks {
        TravelLinks::build(&self.selection.origin, &self.destination())
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary::from_selection(&self.selection)
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.selection.origin = origin.into();
    }

    pub fn set_state(&mut self, state: &str) -> Result<(), CatalogError> {
        let state = self.catalog.require_state(state)?;
        self.selection.state = state.name.to_string();
        self.reconcile_city();
        Ok(())
    }

    pub fn set_style(&mut self, style: TravelStyle) {
        self.selection.style = style;
        self.reconcile_city();
    }

    /// Selects a city among the currently offered ones.
    pub fn set_city(&mut self, city: &str) -> Result<(), CatalogError> {
        let offered = self.filtered_cities();
        match offered.iter().find(|c| c.name == city) {
            Some(found) => {
                self.selection.city = found.name.to_string();
                Ok(())
            }
            None => Err(CatalogError::UnknownCity {
                state: self.selection.state.clone(),
                city: city.to_string(),
            }),
        }
    }

    /// Sets the duration; zero is raised to one day.
    pub fn set_days(&mut self, days: u32) {
        self.selection.days = days.max(1);
    }

    pub fn adjust_days(&mut self, delta: i64) {
        let days = (i64::from(self.selection.days) + delta).clamp(1, i64::from(u32::MAX));
        self.selection.days = days as u32;
    }

    pub fn cycle_state(&mut self, delta: isize) {
        let states = self.catalog.states();
        let current = self.catalog.position(&self.selection.state).unwrap_or(0);
        let next = wrap_index(current, delta, states.len());
        self.selection.state = states[next].name.to_string();
        self.reconcile_city();
    }

    pub fn cycle_style(&mut self, delta: isize) {
        self.set_style(self.selection.style.cycle(delta));
    }

    pub fn cycle_city(&mut self, delta: isize) {
        let offered = self.filtered_cities();
        let current = offered
            .iter()
            .position(|city| city.name == self.selection.city)
            .unwrap_or(0);
        let next = wrap_index(current, delta, offered.len());
        self.selection.city = offered[next].name.to_string();
    }

    fn reconcile_city(&mut self) {
        let offered = self.filtered_cities();
        let city = resolve_default_city(&self.selection.city, &offered);
        if city.name != self.selection.city {
            tracing::debug!(
                from = %self.selection.city,
                to = city.name,
                "City reset after state/style change"
            );
            self.selection.city = city.name.to_string();
        }
    }
}

fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_matches_defaults() {
        let session = TripSession::default();
        let selection = session.selection();
        assert_eq!(selection.origin, "New York");
        assert_eq!(selection.state, "Rio de Janeiro");
        assert_eq!(selection.city, "Búzios");
        assert_eq!(selection.style, TravelStyle::Beach);
        assert_eq!(selection.days, 5);
        assert_eq!(session.destination(), "Búzios, Rio de Janeiro, Brazil");
    }

    #[test]
    fn style_change_resets_city_when_not_offered() {
        let mut session = TripSession::default();
        session.set_style(TravelStyle::CulturalHistoric);
        assert_eq!(session.selection().city, "Paraty");
    }

    #[test]
    fn style_change_keeps_city_when_still_offered() {
        let mut session = TripSession::default();
        session.set_style(TravelStyle::RelaxWellness);
        assert_eq!(session.selection().city, "Búzios");
    }

    #[test]
    fn state_change_picks_first_offered_city() {
        let mut session = TripSession::default();
        session.set_state("Bahia").unwrap();
        assert_eq!(session.selection().city, "Salvador");
    }

    #[test]
    fn unknown_state_leaves_selection_untouched() {
        let mut session = TripSession::default();
        let before = session.selection().clone();
        assert!(session.set_state("Ceará").is_err());
        assert_eq!(session.selection(), &before);
    }

    #[test]
    fn set_city_rejects_filtered_out_city() {
        let mut session = TripSession::default();
        assert!(session.set_city("Petrópolis").is_err());
        session.set_city("Cabo Frio").unwrap();
        assert_eq!(session.selection().city, "Cabo Frio");
    }

    #[test]
    fn days_never_drop_below_one() {
        let mut session = TripSession::default();
        session.set_days(0);
        assert_eq!(session.selection().days, 1);
        session.adjust_days(-10);
        assert_eq!(session.selection().days, 1);
        session.adjust_days(3);
        assert_eq!(session.selection().days, 4);
    }

    #[test]
    fn new_repairs_invalid_selection() {
        let selection = TripSelection {
            origin: "Lisbon".to_string(),
            state: "Nowhere".to_string(),
            city: "Nothing".to_string(),
            style: TravelStyle::Beach,
            days: 0,
        };
        let session = TripSession::new(Catalog::brazil(), selection);
        assert_eq!(session.selection().state, "Rio de Janeiro");
        assert_eq!(session.selection().city, "Búzios");
        assert_eq!(session.selection().days, 1);
    }

    #[test]
    fn cycling_wraps() {
        let mut session = TripSession::default();
        session.cycle_state(-1);
        assert_eq!(session.selection().state, "Bahia");
        session.cycle_city(-1);
        assert_eq!(session.selection().city, "Itacaré");
        session.cycle_style(1);
        assert_eq!(session.selection().style, TravelStyle::NatureEcotourism);
        assert_eq!(session.selection().city, "Itacaré");
    }
}
