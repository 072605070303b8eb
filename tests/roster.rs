use std::io::Write;
use std::path::PathBuf;

use activity_signup::config::ServerConfig;
use activity_signup::error::ConfigError;
use activity_signup::load_directory;

fn config(activities_file: Option<PathBuf>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: PathBuf::from("static"),
        activities_file,
    }
}

#[test]
fn builtin_roster_is_used_by_default() {
    let directory = load_directory(&config(None)).unwrap();
    let listing = directory.list();
    assert!(listing.get("Chess Club").is_some());
    assert!(listing.get("Programming Class").is_some());
    assert!(listing.get("Gym Class").is_some());
}

#[test]
fn roster_file_replaces_builtin_activities() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Robotics", "description": "Build robots", "schedule": "Mondays", "max_participants": 8}}]"#
    )
    .unwrap();

    let directory = load_directory(&config(Some(file.path().to_path_buf()))).unwrap();
    assert_eq!(directory.len(), 1);
    assert!(directory.get("Robotics").is_some());
    assert!(directory.get("Chess Club").is_none());
}

#[test]
fn duplicate_names_in_roster_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Choir", "description": "Sing", "schedule": "Fridays", "max_participants": 40}},
            {{"name": "Choir", "description": "Sing again", "schedule": "Mondays", "max_participants": 40}}
        ]"#
    )
    .unwrap();

    let err = load_directory(&config(Some(file.path().to_path_buf())))
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::DuplicateActivity(name) if name == "Choir"));
}
