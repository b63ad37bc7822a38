//! Outbound search links for flights and stays.
//!
//! Links are only formatted here; nothing is fetched.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left untouched by [`encode_component`]: alphanumerics,
/// `_ . - ~` and the path separator.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes `text` for use inside a URL path or query value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkCategory {
    Flights,
    Stays,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provider {
    GoogleFlights,
    Skyscanner,
    FlightRadar24,
    GoogleHotels,
    Booking,
    Trivago,
    Decolar,
    Airbnb,
}

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::GoogleFlights,
        Provider::Skyscanner,
        Provider::FlightRadar24,
        Provider::GoogleHotels,
        Provider::Booking,
        Provider::Trivago,
        Provider::Decolar,
        Provider::Airbnb,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::GoogleFlights => "Google Flights",
            Provider::Skyscanner => "Skyscanner",
            Provider::FlightRadar24 => "FlightRadar24 (live context)",
            Provider::GoogleHotels => "Google Hotels",
            Provider::Booking => "Booking.com",
            Provider::Trivago => "Trivago",
            Provider::Decolar => "Decolar",
            Provider::Airbnb => "Airbnb",
        }
    }

    pub fn category(self) -> LinkCategory {
        match self {
            Provider::GoogleFlights | Provider::Skyscanner | Provider::FlightRadar24 => {
                LinkCategory::Flights
            }
            _ => LinkCategory::Stays,
        }
    }

    /// URL for this provider; `origin` and `destination` must already be
    /// encoded.
    fn url(self, origin: &str, destination: &str) -> String {
        match self {
            Provider::GoogleFlights => format!(
                "https://www.google.com/travel/flights?q={}%20to%20{}",
                origin, destination
            ),
            Provider::Skyscanner => "https://www.skyscanner.com/transport/flights/".to_string(),
            Provider::FlightRadar24 => "https://www.flightradar24.com/".to_string(),
            Provider::GoogleHotels => {
                format!("https://www.google.com/travel/hotels/{}", destination)
            }
            Provider::Booking => format!(
                "https://www.booking.com/searchresults.html?ss={}",
                destination
            ),
            Provider::Trivago => format!("https://www.trivago.com.br/?sQuery={}", destination),
            Provider::Decolar => format!("https://www.decolar.com/hotels/{}", destination),
            Provider::Airbnb => format!("https://www.airbnb.com.br/s/{}/homes", destination),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelLink {
    pub provider: Provider,
    pub label: &'static str,
    pub url: String,
}

/// Every provider link for one origin/destination pair, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelLinks {
    links: Vec<TravelLink>,
}

impl TravelLinks {
    pub fn build(origin: &str, destination: &str) -> Self {
        let origin = encode_component(origin);
        let destination = encode_component(destination);
        let links = Provider::ALL
            .iter()
            .map(|provider| TravelLink {
                provider: *provider,
                label: provider.display_name(),
                url: provider.url(&origin, &destination),
            })
            .collect();
        Self { links }
    }

    pub fn all(&self) -> &[TravelLink] {
        &self.links
    }

    pub fn get(&self, provider: Provider) -> Option<&TravelLink> {
        self.links.iter().find(|link| link.provider == provider)
    }

    pub fn flights(&self) -> impl Iterator<Item = &TravelLink> {
        self.by_category(LinkCategory::Flights)
    }

    pub fn stays(&self) -> impl Iterator<Item = &TravelLink> {
        self.by_category(LinkCategory::Stays)
    }

    fn by_category(&self, category: LinkCategory) -> impl Iterator<Item = &TravelLink> {
        self.links
            .iter()
            .filter(move |link| link.provider.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_a_path_component() {
        assert_eq!(
            encode_component("Búzios, Rio de Janeiro, Brazil"),
            "B%C3%BAzios%2C%20Rio%20de%20Janeiro%2C%20Brazil"
        );
        assert_eq!(encode_component("a/b_c.d-e~f"), "a/b_c.d-e~f");
        assert_eq!(encode_component("São Paulo & more"), "S%C3%A3o%20Paulo%20%26%20more");
    }

    #[test]
    fn google_flights_joins_origin_and_destination() {
        let links = TravelLinks::build("New York", "Santos, São Paulo, Brazil");
        let flights = links.get(Provider::GoogleFlights).unwrap();
        assert_eq!(
            flights.url,
            "https://www.google.com/travel/flights?q=New%20York%20to%20Santos%2C%20S%C3%A3o%20Paulo%2C%20Brazil"
        );
    }

    #[test]
    fn sections_split_by_category() {
        let links = TravelLinks::build("Lima", "Paraty, Rio de Janeiro, Brazil");
        let flights: Vec<_> = links.flights().map(|l| l.label).collect();
        let stays: Vec<_> = links.stays().map(|l| l.label).collect();
        assert_eq!(
            flights,
            vec!["Google Flights", "Skyscanner", "FlightRadar24 (live context)"]
        );
        assert_eq!(
            stays,
            vec!["Google Hotels", "Booking.com", "Trivago", "Decolar", "Airbnb"]
        );
    }

    #[test]
    fn static_links_ignore_input() {
        let links = TravelLinks::build("x", "y");
        assert_eq!(
            links.get(Provider::Skyscanner).unwrap().url,
            "https://www.skyscanner.com/transport/flights/"
        );
        assert_eq!(
            links.get(Provider::Airbnb).unwrap().url,
            "https://www.airbnb.com.br/s/y/homes"
        );
    }
}
