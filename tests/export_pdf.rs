use std::fs;
use tempfile::TempDir;
use ziltrips::export::{export_pdf, render_pdf, to_latin1_lossy, EXPORT_FILE_NAME};
use ziltrips::session::TripSession;

#[test]
fn export_writes_named_file() {
    let dir = TempDir::new().unwrap();
    let summary = TripSession::default().summary();

    let path = export_pdf(&summary, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("ZilTrips_Travel_Plan.pdf"));
    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn export_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("plans").join("2026");
    let summary = TripSession::default().summary();

    let path = export_pdf(&summary, &nested).unwrap();
    assert!(path.exists());
}

#[test]
fn export_overwrites_previous_plan() {
    let dir = TempDir::new().unwrap();
    let mut session = TripSession::default();
    export_pdf(&session.summary(), dir.path()).unwrap();

    session.set_state("Bahia").unwrap();
    let path = export_pdf(&session.summary(), dir.path()).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert!(!fs::read(&path).unwrap().is_empty());
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"x").unwrap();

    let err = export_pdf(&TripSession::default().summary(), &blocker).unwrap_err();
    assert!(err.to_string().contains("not-a-dir"));
}

#[test]
fn emoji_in_summary_do_not_break_rendering() {
    let summary = TripSession::default().summary();
    assert!(summary.text().contains('✈'));
    assert!(render_pdf(&summary).is_ok());
    assert!(!to_latin1_lossy(summary.text()).contains('✈'));
    assert!(to_latin1_lossy(summary.text()).contains("Búzios"));
}
