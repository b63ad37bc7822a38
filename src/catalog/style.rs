use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Short style keyword attached to a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Beach,
    Nature,
    Cultural,
    Nightlife,
    Relax,
    Urban,
    Backpacker,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Beach => "Beach",
            Tag::Nature => "Nature",
            Tag::Cultural => "Cultural",
            Tag::Nightlife => "Nightlife",
            Tag::Relax => "Relax",
            Tag::Urban => "Urban",
            Tag::Backpacker => "Backpacker",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of trip the user is looking for.
///
/// Serialized as the full label (e.g. `"Nightlife / Events"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TravelStyle {
    #[default]
    Beach,
    NatureEcotourism,
    CulturalHistoric,
    NightlifeEvents,
    RelaxWellness,
    UrbanBusiness,
    BackpackerBudget,
}

impl TravelStyle {
    /// All styles in form order.
    pub const ALL: [TravelStyle; 7] = [
        TravelStyle::Beach,
        TravelStyle::NatureEcotourism,
        TravelStyle::CulturalHistoric,
        TravelStyle::NightlifeEvents,
        TravelStyle::RelaxWellness,
        TravelStyle::UrbanBusiness,
        TravelStyle::BackpackerBudget,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Beach => "Beach",
            TravelStyle::NatureEcotourism => "Nature / Ecotourism",
            TravelStyle::CulturalHistoric => "Cultural / Historic",
            TravelStyle::NightlifeEvents => "Nightlife / Events",
            TravelStyle::RelaxWellness => "Relax / Wellness",
            TravelStyle::UrbanBusiness => "Urban / Business",
            TravelStyle::BackpackerBudget => "Backpacker / Budget",
        }
    }

    /// Leading keyword of the label (`"Nightlife"` for `"Nightlife / Events"`).
    pub fn keyword(self) -> &'static str {
        self.label()
            .split(" / ")
            .next()
            .unwrap_or_else(|| self.label())
    }

    /// Loose tag matching: the tag keyword only has to appear somewhere in
    /// the style label. `Nightlife` matches `"Nightlife / Events"`.
    pub fn matches(self, tag: Tag) -> bool {
        self.label().contains(tag.as_str())
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|style| *style == self)
            .unwrap_or(0)
    }

    /// Style `delta` steps away in form order, wrapping at both ends.
    pub fn cycle(self, delta: isize) -> TravelStyle {
        let len = Self::ALL.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TravelStyle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label() == needle)
            .or_else(|| {
                Self::ALL.iter().copied().find(|style| {
                    style.label().eq_ignore_ascii_case(needle)
                        || style.keyword().eq_ignore_ascii_case(needle)
                })
            })
            .ok_or_else(|| CatalogError::UnknownStyle {
                style: s.to_string(),
            })
    }
}

impl TryFrom<String> for TravelStyle {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TravelStyle> for String {
    fn from(style: TravelStyle) -> Self {
        style.label().to_string()
    }
}
