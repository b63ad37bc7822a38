use ziltrips::catalog::{Catalog, TravelStyle};
use ziltrips::session::{TripSelection, TripSession};

#[test]
fn summary_reflects_every_reachable_selection() {
    let catalog = Catalog::brazil();
    for state in catalog.states() {
        for style in TravelStyle::ALL {
            let mut session = TripSession::new(
                catalog,
                TripSelection {
                    origin: "Porto Alegre".to_string(),
                    state: state.name.to_string(),
                    style,
                    days: 17,
                    ..TripSelection::default()
                },
            );

            for city in session.filtered_cities() {
                session.set_city(city.name).unwrap();
                let text = session.summary().text().to_string();
                let context = format!("{} / {} / {}", state.name, style, city.name);

                assert!(text.contains("From: Porto Alegre"), "{context}");
                assert!(
                    text.contains(&format!("To: {}, {}, Brazil", city.name, state.name)),
                    "{context}"
                );
                assert!(text.contains(&format!("Style: {}", style.label())), "{context}");
                assert!(text.contains("Duration: 17 days"), "{context}");
                assert_eq!(text, text.trim(), "{context}");
            }
        }
    }
}

#[test]
fn summary_keeps_free_text_origin_verbatim() {
    let mut session = TripSession::default();
    session.set_origin("São José dos Campos / SP");
    assert!(session
        .summary()
        .text()
        .contains("From: São José dos Campos / SP"));
}
