use std::{fs, path::Path};

use kaprekar_core::DEFAULT_MAX_STEPS;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATH: &str = "kaprekar.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_steps: usize,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            color: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    max_steps: Option<usize>,
    color: Option<bool>,
}

/// Defaults, then the TOML file at `path` if present, then the environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    apply_file(&mut settings, path);
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, path: &Path) {
    let Ok(raw) = fs::read_to_string(path) else {
        debug!(path = %path.display(), "no settings file, using defaults");
        return;
    };

    match toml::from_str::<FileSettings>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.max_steps {
                settings.max_steps = v;
            }
            if let Some(v) = file_cfg.color {
                settings.color = v;
            }
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "ignoring unreadable settings file");
        }
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("KAPREKAR_MAX_STEPS") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.max_steps = parsed,
            Err(_) => warn!(value = %v, "ignoring non-numeric KAPREKAR_MAX_STEPS"),
        }
    }

    if let Some(v) = lookup("KAPREKAR_COLOR") {
        match parse_flag(&v) {
            Some(parsed) => settings.color = parsed,
            None => warn!(value = %v, "ignoring unrecognised KAPREKAR_COLOR"),
        }
    }

    // https://no-color.org: any non-empty value disables color.
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        settings.color = false;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
