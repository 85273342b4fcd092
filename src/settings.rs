//! Player preferences
//!
//! Persisted separately from the best score. On the web they live in
//! LocalStorage; the native build reads environment overrides.

use serde::{Deserialize, Serialize};

/// Environment variable muting the native build (`1`, `true`, `yes`, `on`)
pub const MUTED_ENV: &str = "SIMON_MUTED";
/// Environment variable setting the native volume (0.0 - 1.0)
pub const VOLUME_ENV: &str = "SIMON_VOLUME";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all tones
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Volume tones should actually play at
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }

    /// Apply textual overrides; unparseable values are logged and skipped
    pub fn with_overrides(mut self, muted: Option<&str>, volume: Option<&str>) -> Self {
        if let Some(raw) = muted {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.muted = true,
                "0" | "false" | "no" | "off" => self.muted = false,
                other => log::warn!("Ignoring {}={:?}", MUTED_ENV, other),
            }
        }
        if let Some(raw) = volume {
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => self.master_volume = v.clamp(0.0, 1.0),
                _ => log::warn!("Ignoring {}={:?}", VOLUME_ENV, raw),
            }
        }
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "simon-settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Defaults with `SIMON_MUTED`/`SIMON_VOLUME` applied
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let muted = std::env::var(MUTED_ENV).ok();
        let volume = std::env::var(VOLUME_ENV).ok();
        Self::default().with_overrides(muted.as_deref(), volume.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_means_silent() {
        let settings = Settings {
            master_volume: 1.0,
            muted: true,
        };
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings::default().with_overrides(None, Some("3.5"));
        assert_eq!(settings.master_volume, 1.0);
        let settings = Settings::default().with_overrides(None, Some("-1"));
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(Some("Yes"), Some(" 0.25 "));
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.25);
    }

    #[test]
    fn test_bad_overrides_keep_defaults() {
        let settings = Settings::default().with_overrides(Some("maybe"), Some("loud"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"master_volume":0.8,"muted":false}"#);
    }
}
