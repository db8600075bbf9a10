// Week store tests: per-week CSV persistence
use pretty_assertions::assert_eq;
use semainier::models::grid::WeekGrid;
use semainier::services::store::WeekStore;
use tempfile::tempdir;

#[test]
fn load_of_unsaved_week_is_blank() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let grid = store.load("Jamais sauvegardée").expect("Load should succeed");
    assert_eq!(grid, WeekGrid::blank());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let mut grid = WeekGrid::blank();
    grid.set_cell(0, 0, "Cours de maths");
    grid.set_cell(5, 3, "RU, puis BU");
    grid.set_cell(12, 5, "Réunion \"projet\" à 20h");

    store.save("Semaine 1", &grid).expect("Save should succeed");
    let loaded = store.load("Semaine 1").expect("Load should succeed");
    assert_eq!(loaded, grid);
}

#[test]
fn accented_text_survives_a_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let mut grid = WeekGrid::blank();
    grid.set_cell(2, 1, "Court métrage — séance n°3");

    store.save("Semaine accentuée", &grid).expect("Save should succeed");
    let loaded = store.load("Semaine accentuée").expect("Load should succeed");
    assert_eq!(loaded.cell(2, 1), "Court métrage — séance n°3");
}

#[test]
fn save_overwrites_any_previous_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let mut first = WeekGrid::blank();
    first.set_cell(0, 0, "ancienne valeur");
    store.save("Semaine 1", &first).expect("First save should succeed");

    let mut second = WeekGrid::blank();
    second.set_cell(0, 0, "nouvelle valeur");
    store.save("Semaine 1", &second).expect("Second save should succeed");

    let loaded = store.load("Semaine 1").expect("Load should succeed");
    assert_eq!(loaded, second);
}

#[test]
fn week_names_are_case_sensitive() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let mut grid = WeekGrid::blank();
    grid.set_cell(0, 0, "TD");
    store.save("Semaine 1", &grid).expect("Save should succeed");

    // A differently-cased name is a different week: blank, not the saved one
    let other = store.load("semaine 1").expect("Load should succeed");
    assert_eq!(other, WeekGrid::blank());
}

#[test]
fn load_preserves_stored_row_and_column_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    let contents = ",Mardi,Lundi\n20h-21h,soirée,\n08h-09h,,matinée\n";
    std::fs::write(store.week_path("Désordre"), contents).expect("Failed to write fixture");

    let grid = store.load("Désordre").expect("Load should succeed");
    assert_eq!(
        grid.day_labels().to_vec(),
        vec!["Mardi".to_string(), "Lundi".to_string()]
    );
    assert_eq!(
        grid.slot_labels().to_vec(),
        vec!["20h-21h".to_string(), "08h-09h".to_string()]
    );
    assert_eq!(grid.cell(0, 0), "soirée");
    assert_eq!(grid.cell(1, 1), "matinée");
}

#[test]
fn malformed_file_is_a_load_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    // Data row has fewer fields than the header
    let contents = ",Lundi,Mardi\n08h-09h,seul\n";
    std::fs::write(store.week_path("Corrompue"), contents).expect("Failed to write fixture");

    let result = store.load("Corrompue");
    assert!(result.is_err(), "Malformed file must not load as blank");
}

#[test]
fn empty_file_is_a_load_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    std::fs::write(store.week_path("Vide"), "").expect("Failed to write fixture");

    assert!(store.load("Vide").is_err());
}

#[test]
fn header_only_file_is_a_load_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path());

    std::fs::write(store.week_path("Sans lignes"), ",Lundi,Mardi\n")
        .expect("Failed to write fixture");

    assert!(store.load("Sans lignes").is_err());
}

#[test]
fn save_creates_the_data_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = WeekStore::new(dir.path().join("nested").join("data"));

    store
        .save("Semaine 1", &WeekGrid::blank())
        .expect("Save should create missing directories");
    assert!(store.week_path("Semaine 1").exists());
}
