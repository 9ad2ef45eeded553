use crate::config::{Config, StorageBackend};
use crate::domain::checklist::DEFAULT_STATE_KEY;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 7] = [
    "LFPM_STORAGE_BACKEND",
    "LFPM_DATA_DIR",
    "LFPM_STATE_KEY",
    "DATABASE_URL",
    "LFPM_WINDOW_WIDTH",
    "LFPM_WINDOW_HEIGHT",
    "LFPM_LOG_LINES",
];

fn clear_vars() {
    for var in VARS {
        // SAFETY: tests touching the environment hold ENV_LOCK
        unsafe { env::remove_var(var) };
    }
}

fn set_var(key: &str, value: &str) {
    // SAFETY: tests touching the environment hold ENV_LOCK
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    set_var("LFPM_DATA_DIR", "/tmp/lfpm-config-test");

    let config = Config::from_env().unwrap();

    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.state_key, DEFAULT_STATE_KEY);
    assert_eq!(
        config.storage.database_url,
        "sqlite:///tmp/lfpm-config-test/lfpm.db"
    );
    assert_eq!(config.ui.log_lines, 200);
    assert!((config.ui.window_width - 1100.0).abs() < f32::EPSILON);

    clear_vars();
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    set_var("LFPM_STORAGE_BACKEND", "sqlite");
    set_var("LFPM_DATA_DIR", "/tmp/lfpm-config-test");
    set_var("LFPM_STATE_KEY", "desk-2");
    set_var("DATABASE_URL", "sqlite::memory:");
    set_var("LFPM_LOG_LINES", "50");

    let config = Config::from_env().unwrap();

    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.state_key, "desk-2");
    assert_eq!(config.storage.database_url, "sqlite::memory:");
    assert_eq!(config.ui.log_lines, 50);

    clear_vars();
}

#[test]
fn test_invalid_backend_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    set_var("LFPM_DATA_DIR", "/tmp/lfpm-config-test");
    set_var("LFPM_STORAGE_BACKEND", "cloud");

    assert!(Config::from_env().is_err());

    clear_vars();
}

#[test]
fn test_invalid_numbers_fall_back() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    set_var("LFPM_DATA_DIR", "/tmp/lfpm-config-test");
    set_var("LFPM_WINDOW_WIDTH", "wide");
    set_var("LFPM_WINDOW_HEIGHT", "-5");

    let config = Config::from_env().unwrap();
    assert!((config.ui.window_width - 1100.0).abs() < f32::EPSILON);
    assert!((config.ui.window_height - 820.0).abs() < f32::EPSILON);

    clear_vars();
}
