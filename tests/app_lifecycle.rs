use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tempfile::TempDir;
use ziltrips::session::TripSession;
use ziltrips::ui::app::App;
use ziltrips::ui::input::handle_key;
use ziltrips::ui::planner::{Field, StatusKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn app_in(dir: &TempDir) -> App {
    App::new(TripSession::default(), dir.path().to_path_buf())
}

#[test]
fn typing_updates_origin() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    for _ in 0.."New York".len() {
        handle_key(&mut app, key(KeyCode::Backspace));
    }
    for ch in "Recife".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }

    assert_eq!(app.session().selection().origin, "Recife");
    assert!(app.session().summary().text().contains("From: Recife"));
}

#[test]
fn arrows_move_focus_and_change_values() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Field::State);
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.session().selection().state, "São Paulo");
    assert_eq!(app.session().selection().city, "Santos");

    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus(), Field::Origin);
}

#[test]
fn release_events_are_ignored() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('x'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );

    handle_key(&mut app, release);
    assert_eq!(app.session().selection().origin, "New York");
}

#[test]
fn ctrl_p_exports_into_configured_dir() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    handle_key(&mut app, ctrl('p'));

    assert!(dir.path().join("ZilTrips_Travel_Plan.pdf").exists());
    let status = app.planner().status.clone().expect("status after export");
    assert_eq!(status.kind, StatusKind::Info);
    assert!(status.message.starts_with("Saved"));
}

#[test]
fn ctrl_y_always_reports_an_outcome() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    // Headless runs have no clipboard; either outcome must surface.
    handle_key(&mut app, ctrl('y'));
    assert!(app.planner().status.is_some());
}

#[test]
fn ctrl_r_resets_to_starting_selection() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    handle_key(&mut app, key(KeyCode::Char('!')));
    handle_key(&mut app, key(KeyCode::Up));
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.session().selection().days, 6);

    handle_key(&mut app, ctrl('r'));
    assert_eq!(app.session(), &TripSession::default());
    assert_eq!(app.focus(), Field::Origin);
}

#[test]
fn quit_keys() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert!(!app.should_quit());
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = app_in(&dir);
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}
