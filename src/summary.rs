//! Shareable plain-text trip summary.

use std::fmt;

use crate::session::TripSelection;

pub const SUMMARY_TITLE: &str = "ZilTrips Travel Plan 🇧🇷";
pub const SUMMARY_FOOTER: &str = "Planned with ZilTrips ✈️";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSummary {
    text: String,
}

impl TripSummary {
    pub fn from_selection(selection: &TripSelection) -> Self {
        let text = format!(
            "{SUMMARY_TITLE}\n\
             \n\
             From: {origin}\n\
             To: {destination}\n\
             Style: {style}\n\
             Duration: {days} days\n\
             \n\
             {SUMMARY_FOOTER}",
            origin = selection.origin,
            destination = selection.destination(),
            style = selection.style,
            days = selection.days,
        );
        Self {
            text: text.trim().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TravelStyle;

    #[test]
    fn default_summary_layout() {
        let summary = TripSummary::from_selection(&TripSelection::default());
        let expected = "ZilTrips Travel Plan 🇧🇷\n\nFrom: New York\nTo: Búzios, Rio de Janeiro, Brazil\nStyle: Beach\nDuration: 5 days\n\nPlanned with ZilTrips ✈️";
        assert_eq!(summary.text(), expected);
    }

    #[test]
    fn summary_uses_style_label() {
        let selection = TripSelection {
            style: TravelStyle::NightlifeEvents,
            ..TripSelection::default()
        };
        let summary = TripSummary::from_selection(&selection);
        assert!(summary.text().contains("Style: Nightlife / Events"));
    }

    #[test]
    fn display_matches_text() {
        let selection = TripSelection {
            origin: "Recife".to_string(),
            days: 12,
            ..TripSelection::default()
        };
        let summary = TripSummary::from_selection(&selection);
        assert_eq!(summary.to_string(), summary.text());
        assert!(summary.text().contains("From: Recife"));
        assert!(summary.text().contains("Duration: 12 days"));
    }
}
