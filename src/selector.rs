//! Destination selection: filter a state's cities by travel style.

use crate::catalog::{Catalog, CatalogError, City, TravelStyle};

/// Cities of `state` that suit `style`, in catalog order.
///
/// Never empty: when no city matches, the state's full city list is
/// returned unfiltered.
pub fn filter_cities(
    catalog: &Catalog,
    state: &str,
    style: TravelStyle,
) -> Result<Vec<&'static City>, CatalogError> {
    let state = catalog.require_state(state)?;

    let matching: Vec<&'static City> = state
        .cities
        .iter()
        .filter(|city| city.suits(style))
        .collect();

    if matching.is_empty() {
        tracing::debug!(
            state = state.name,
            style = style.label(),
            "No city matches style, offering the full list"
        );
        return Ok(state.cities.iter().collect());
    }

    tracing::debug!(
        state = state.name,
        style = style.label(),
        matches = matching.len(),
        "Filtered cities"
    );
    Ok(matching)
}

/// Keeps `selected` when it is still offered, otherwise the first offer.
///
/// # Panics
///
/// Panics if `filtered` is empty. [`filter_cities`] never returns an
/// empty list.
pub fn resolve_default_city<'a>(selected: &str, filtered: &[&'a City]) -> &'a City {
    match filtered.iter().find(|city| city.name == selected) {
        Some(city) => *city,
        None => {
            let first = filtered[0];
            if !selected.is_empty() {
                tracing::debug!(
                    previous = selected,
                    fallback = first.name,
                    "Selected city no longer offered"
                );
            }
            first
        }
    }
}
