use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub theme: Option<PaletteType>,
    #[serde(default)]
    pub time_12h: bool,
    pub city: Option<String>,
    pub focus: Option<String>,
    /// Opt-out switch for the IP-based locator. With this off and no city
    /// set, the weather card reports geolocation as unavailable.
    #[serde(default = "default_geolocation")]
    pub geolocation: bool,
}

fn default_geolocation() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: None,
            time_12h: false,
            city: None,
            focus: None,
            geolocation: true,
        }
    }
}

pub fn preferences_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("daybreak");
        path.push("preferences.toml");
        path
    })
}

#[must_use]
pub fn load_from(path: &Path) -> Preferences {
    if let Ok(content) = std::fs::read_to_string(path) {
        if let Ok(prefs) = toml::from_str::<Preferences>(&content) {
            return prefs;
        }
    }
    Preferences::default()
}

pub fn load() -> Preferences {
    preferences_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

/// Best-effort whole-file write; a failed save is not worth interrupting
/// the session over.
pub fn save_to(path: &Path, prefs: &Preferences) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(content) = toml::to_string(prefs) {
        let _ = std::fs::write(path, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.toml");

        let prefs = Preferences {
            theme: Some(PaletteType::Light),
            time_12h: true,
            city: Some("Paris".to_string()),
            focus: Some("ship the release".to_string()),
            geolocation: false,
        };
        save_to(&path, &prefs);

        assert_eq!(load_from(&path), prefs);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_from(&dir.path().join("nope.toml"));
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.geolocation);
    }

    #[test]
    fn garbage_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert_eq!(load_from(&path), Preferences::default());
    }

    #[test]
    fn geolocation_defaults_on_when_absent_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "time_12h = true\n").unwrap();
        let prefs = load_from(&path);
        assert!(prefs.time_12h);
        assert!(prefs.geolocation);
    }
}
