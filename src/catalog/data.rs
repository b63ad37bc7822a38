use crate::catalog::style::Tag::{self, *};
use crate::catalog::{City, State};

const fn city(name: &'static str, tags: &'static [Tag]) -> City {
    City { name, tags }
}

pub(super) const BRAZIL_STATES: &[State] = &[
    State {
        name: "Rio de Janeiro",
        capital: "Rio de Janeiro",
        cities: &[
            city("Búzios", &[Beach, Relax]),
            city("Arraial do Cabo", &[Beach, Nature]),
            city("Paraty", &[Cultural, Nature]),
            city("Angra dos Reis", &[Beach, Nature]),
            city("Ilha Grande", &[Beach, Nature, Backpacker]),
            city("Cabo Frio", &[Beach]),
            city("Petrópolis", &[Cultural]),
        ],
    },
    State {
        name: "São Paulo",
        capital: "São Paulo",
        cities: &[
            city("São Paulo", &[Urban, Nightlife]),
            city("Santos", &[Beach]),
            city("Ubatuba", &[Beach, Nature]),
            city("Ilhabela", &[Beach, Nature]),
            city("Campos do Jordão", &[Relax, Nature]),
        ],
    },
    State {
        name: "Bahia",
        capital: "Salvador",
        cities: &[
            city("Salvador", &[Cultural, Beach, Nightlife]),
            city("Trancoso", &[Beach, Relax]),
            city("Porto Seguro", &[Beach, Nightlife]),
            city("Caraíva", &[Beach, Backpacker]),
            city("Itacaré", &[Beach, Nature]),
        ],
    },
];
