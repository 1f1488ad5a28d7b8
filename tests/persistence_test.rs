use staff_roster::{
    file_exists, load_roster, save_roster, JsonRosterStore, LocalStorage, Roster, RosterError,
    RosterStore,
};
use tempfile::TempDir;

fn sample_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add("Ivanov Ivan", "Engineer", 3.5);
    roster.add("Petrova Anna", "Manager", 10.0);
    roster.add("", "", -1.25);
    roster.add("Ivanov Ivan", "Intern", 0.0);
    roster
}

#[tokio::test]
async fn test_save_then_load_reproduces_roster() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");
    let path = path.to_str().unwrap();

    let roster = sample_roster();
    save_roster(path, &roster).await.unwrap();

    assert!(file_exists(path).await);
    let loaded = load_roster(path).await.unwrap();
    assert_eq!(loaded, roster);
}

#[tokio::test]
async fn test_compact_and_pretty_both_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let roster = sample_roster();

    for pretty in [true, false] {
        let store =
            JsonRosterStore::new(LocalStorage::new(temp_dir.path()), "roster.json").with_pretty(pretty);
        store.save(&roster).await.unwrap();
        assert_eq!(store.load().await.unwrap(), roster);
    }
}

#[tokio::test]
async fn test_file_written_by_legacy_tool_loads() {
    let temp_dir = TempDir::new().unwrap();
    let legacy = "[{\"fullname\":\"Сидоров Петр\",\"position\":\"Бухгалтер\",\"experience\":4}]\n";
    std::fs::write(temp_dir.path().join("employees.json"), legacy).unwrap();

    let store = JsonRosterStore::new(LocalStorage::new(temp_dir.path()), "employees.json");
    let roster = store.load().await.unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.as_slice()[0].name, "Сидоров Петр");
    assert_eq!(roster.as_slice()[0].tenure, 4.0);
}

#[tokio::test]
async fn test_malformed_file_reports_decode_failure() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("employees.json"), "{not json").unwrap();

    let store = JsonRosterStore::new(LocalStorage::new(temp_dir.path()), "employees.json");
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, RosterError::Decode { .. }));
    assert!(err.to_string().starts_with("decode failed: "));
}

#[tokio::test]
async fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonRosterStore::new(LocalStorage::new(temp_dir.path()), "employees.json");

    assert!(!store.exists().await);
    assert!(matches!(store.load().await, Err(RosterError::IoError(_))));
}

#[tokio::test]
async fn test_clear_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonRosterStore::new(LocalStorage::new(temp_dir.path()), "employees.json");
    store.save(&sample_roster()).await.unwrap();

    store.clear().await.unwrap();

    assert!(!store.exists().await);
}

#[tokio::test]
async fn test_non_finite_tenure_is_not_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");
    let path = path.to_str().unwrap();

    let mut roster = sample_roster();
    roster.add("Broken", "Dev", "inf".parse().unwrap());

    let err = save_roster(path, &roster).await.unwrap_err();

    assert!(matches!(err, RosterError::UnsupportedValue { .. }));
    assert!(!file_exists(path).await);
}

#[tokio::test]
async fn test_failed_save_keeps_previous_file_loadable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");
    let path = path.to_str().unwrap();
    let roster = sample_roster();
    save_roster(path, &roster).await.unwrap();

    let mut broken = roster.clone();
    broken.add("Broken", "Dev", f64::NAN);
    assert!(save_roster(path, &broken).await.is_err());

    assert_eq!(load_roster(path).await.unwrap(), roster);
}
