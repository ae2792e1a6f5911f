//! Configuration loaded from the real process environment.

use std::env;
use std::path::PathBuf;

use henhouse::auth::Role;
use henhouse::config::{Config, Overrides, DATA_DIR_VAR, ROLE_VAR, SHEET_VAR, USER_VAR};
use henhouse::error::ConfigError;
use serial_test::serial;

fn clear() {
    for var in [DATA_DIR_VAR, SHEET_VAR, USER_VAR, ROLE_VAR] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn load_reads_environment() {
    clear();
    env::set_var(DATA_DIR_VAR, "/srv/farm");
    env::set_var(USER_VAR, "ann");
    env::set_var(ROLE_VAR, "simple");

    let config = Config::load().unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/farm"));
    assert_eq!(config.sheet_path(), PathBuf::from("/srv/farm/eggs.csv"));
    assert_eq!(config.role, Some(Role::Staff));

    let session = config.session().unwrap().unwrap();
    assert_eq!(session.user, "ann");
    assert_eq!(session.role, Role::Staff);
    clear();
}

#[test]
#[serial]
fn overrides_win_over_environment() {
    clear();
    env::set_var(SHEET_VAR, "/srv/farm/old.csv");
    env::set_var(USER_VAR, "ann");

    let config = Config::load()
        .unwrap()
        .with_overrides(Overrides {
            sheet: Some(PathBuf::from("/tmp/values.json")),
            role: Some("admin".to_string()),
            ..Overrides::default()
        })
        .unwrap();
    assert_eq!(config.sheet_path(), PathBuf::from("/tmp/values.json"));
    assert_eq!(config.session().unwrap().unwrap().role, Role::Admin);
    clear();
}

#[test]
#[serial]
fn bad_role_in_environment_fails() {
    clear();
    env::set_var(ROLE_VAR, "owner");
    assert_eq!(
        Config::load().unwrap_err(),
        ConfigError::InvalidRole("owner".to_string())
    );
    clear();
}

#[test]
#[serial]
fn role_without_user_has_no_session() {
    clear();
    env::set_var(ROLE_VAR, "admin");
    let config = Config::load().unwrap();
    assert_eq!(config.session().unwrap_err(), ConfigError::RoleWithoutUser);
    clear();
}

#[test]
#[serial]
fn blank_variables_fall_back_to_defaults() {
    clear();
    env::set_var(DATA_DIR_VAR, "  ");
    env::set_var(USER_VAR, "");
    let config = Config::load().unwrap();
    assert_eq!(config.user, None);
    assert_ne!(config.data_dir, PathBuf::from("  "));
    clear();
}
