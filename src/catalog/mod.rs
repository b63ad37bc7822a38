//! Compiled-in destination catalog.
//!
//! The catalog is a static table of Brazilian states, each with its capital
//! and an ordered list of cities tagged with travel-style keywords. Order is
//! significant: every city list shown to the user follows catalog order.
//!
//! ```
//! use ziltrips::catalog::Catalog;
//!
//! let catalog = Catalog::brazil();
//! let bahia = catalog.state("Bahia").unwrap();
//! assert_eq!(bahia.capital, "Salvador");
//! assert_eq!(bahia.cities.len(), 5);
//! ```

mod data;
mod style;

pub use style::{Tag, TravelStyle};

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by catalog lookups and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("City '{city}' is not available in {state} for this travel style")]
    UnknownCity { state: String, city: String },

    #[error("Unknown travel style '{style}'")]
    UnknownStyle { style: String },

    #[error("Catalog is inconsistent: {message}")]
    Inconsistent { message: String },
}

/// A destination city and the travel styles it is known for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    /// Never empty.
    pub tags: &'static [Tag],
}

impl City {
    /// True when any of the city's tags is matched by `style`.
    pub fn suits(&self, style: TravelStyle) -> bool {
        self.tags.iter().any(|tag| style.matches(*tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub name: &'static str,
    pub capital: &'static str,
    pub cities: &'static [City],
}

impl State {
    pub fn city(&self, name: &str) -> Option<&'static City> {
        self.cities.iter().find(|city| city.name == name)
    }

    pub fn city_names(&self) -> Vec<&'static str> {
        self.cities.iter().map(|city| city.name).collect()
    }
}

#[derive(Debug)]
pub struct Catalog {
    states: &'static [State],
}

static BRAZIL: Catalog = Catalog {
    states: data::BRAZIL_STATES,
};

impl Catalog {
    /// The Brazilian destination catalog.
    pub fn brazil() -> &'static Catalog {
        &BRAZIL
    }

    pub fn states(&self) -> &'static [State] {
        self.states
    }

    pub fn state(&self, name: &str) -> Option<&'static State> {
        self.states.iter().find(|state| state.name == name)
    }

    pub fn state_names(&self) -> Vec<&'static str> {
        self.states.iter().map(|state| state.name).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|state| state.name == name)
    }

    /// Looks up a state, failing with [`CatalogError::UnknownState`].
    pub fn require_state(&self, name: &str) -> Result<&'static State, CatalogError> {
        self.state(name).ok_or_else(|| CatalogError::UnknownState {
            state: name.to_string(),
        })
    }

    /// Checks the structural invariants of the table.
    ///
    /// - at least one state, every state has at least one city
    /// - every city carries at least one tag
    /// - state names are unique, city names are unique within a state
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.states.is_empty() {
            return Err(CatalogError::Inconsistent {
                message: "no states".to_string(),
            });
        }

        let mut state_names = HashSet::new();
        for state in self.states {
            if !state_names.insert(state.name) {
                return Err(CatalogError::Inconsistent {
                    message: format!("duplicate state '{}'", state.name),
                });
            }
            if state.cities.is_empty() {
                return Err(CatalogError::Inconsistent {
                    message: format!("state '{}' has no cities", state.name),
                });
            }

            let mut city_names = HashSet::new();
            for city in state.cities {
                if city.tags.is_empty() {
                    return Err(CatalogError::Inconsistent {
                        message: format!("city '{}' has no tags", city.name),
                    });
                }
                if !city_names.insert(city.name) {
                    return Err(CatalogError::Inconsistent {
                        message: format!("duplicate city '{}' in '{}'", city.name, state.name),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazil_catalog_is_consistent() {
        assert_eq!(Catalog::brazil().validate(), Ok(()));
    }

    #[test]
    fn states_keep_insertion_order() {
        assert_eq!(
            Catalog::brazil().state_names(),
            vec!["Rio de Janeiro", "São Paulo", "Bahia"]
        );
        assert_eq!(Catalog::brazil().position("Bahia"), Some(2));
    }

    #[test]
    fn state_lookup_is_exact() {
        let catalog = Catalog::brazil();
        assert!(catalog.state("bahia").is_none());
        assert!(matches!(
            catalog.require_state("Minas Gerais"),
            Err(CatalogError::UnknownState { .. })
        ));
    }

    #[test]
    fn city_suits_by_loose_tag_match() {
        let paraty = Catalog::brazil()
            .state("Rio de Janeiro")
            .and_then(|s| s.city("Paraty"))
            .unwrap();
        assert!(paraty.suits(TravelStyle::CulturalHistoric));
        assert!(paraty.suits(TravelStyle::NatureEcotourism));
        assert!(!paraty.suits(TravelStyle::Beach));
    }
}
