//! Edit-unlock password resolution.
//!
//! Resolved once at session start, in priority order: the secrets file in
//! the application config directory, the `APP_PASSWORD` environment
//! variable, then a built-in default. Empty values count as absent.

use std::fs;
use std::path::PathBuf;

#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use serde::Deserialize;

pub const PASSWORD_ENV_VAR: &str = "APP_PASSWORD";

const SECRETS_FILE_NAME: &str = "secrets.toml";
const DEFAULT_PASSWORD: &str = "edt2025";

#[derive(Debug, Deserialize)]
struct SecretsFile {
    app_password: Option<String>,
}

fn secrets_path() -> Option<PathBuf> {
    #[cfg(debug_assertions)]
    {
        Some(PathBuf::from(SECRETS_FILE_NAME))
    }

    #[cfg(not(debug_assertions))]
    {
        ProjectDirs::from("org", "Semainier", "Semainier")
            .map(|proj_dirs| proj_dirs.config_dir().join(SECRETS_FILE_NAME))
    }
}

fn password_from_secrets_file() -> Option<String> {
    let path = secrets_path()?;
    let raw = fs::read_to_string(&path).ok()?;
    match toml::from_str::<SecretsFile>(&raw) {
        Ok(secrets) => secrets.app_password,
        Err(err) => {
            log::warn!("Ignoring unreadable secrets file {}: {}", path.display(), err);
            None
        }
    }
}

/// The password the session gate compares submissions against.
pub fn resolve_app_password() -> String {
    choose_password(
        password_from_secrets_file(),
        std::env::var(PASSWORD_ENV_VAR).ok(),
    )
}

/// First non-empty candidate wins; otherwise the built-in default.
fn choose_password(file_value: Option<String>, env_value: Option<String>) -> String {
    file_value
        .filter(|p| !p.is_empty())
        .or_else(|| env_value.filter(|p| !p.is_empty()))
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string())
}
