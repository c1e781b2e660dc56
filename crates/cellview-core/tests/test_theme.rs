use cellview_core::consts::THEME_KEY;
use cellview_core::prefs::{FileStore, MemoryStore, PreferenceStore};
use cellview_core::theme::Theme;
use tempfile::TempDir;

#[test]
fn test_default_is_light() {
    let store = MemoryStore::default();
    assert_eq!(Theme::restore(&store), Theme::Light);
}

#[test]
fn test_only_dark_value_restores_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn test_toggle_persists_each_state() {
    let mut store = MemoryStore::default();
    let mut theme = Theme::restore(&store);

    theme.toggle(&mut store).unwrap();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    theme.toggle(&mut store).unwrap();
    assert_eq!(theme, Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn test_double_toggle_round_trips_from_dark() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "dark").unwrap();
    let mut theme = Theme::restore(&store);

    theme.toggle(&mut store).unwrap();
    theme.toggle(&mut store).unwrap();

    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("prefs.toml");

    let mut store = FileStore::open(&path);
    let mut theme = Theme::restore(&store);
    theme.toggle(&mut store).unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(Theme::restore(&reopened), Theme::Dark);
}

#[test]
fn test_corrupt_file_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();
    let store = FileStore::open(&path);
    assert_eq!(store.get(THEME_KEY), None);
}
