//! The two preference objects persisted in `localStorage`. Stored as
//! plain JSON under fixed keys, no schema versioning; anything that
//! fails to parse is replaced by the defaults.

use serde::{Deserialize, Serialize};

pub const COOKIE_CONSENT_KEY: &str = "cookie-consent";
pub const ACCESSIBILITY_KEY: &str = "accessibility-settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self { necessary: true, analytics: false, marketing: false }
    }
}

impl CookiePreferences {
    pub fn all_accepted() -> Self {
        Self { necessary: true, analytics: true, marketing: true }
    }

    pub fn only_necessary() -> Self {
        Self::default()
    }
}

pub const FONT_SIZE_MIN: u32 = 80;
pub const FONT_SIZE_MAX: u32 = 150;
pub const FONT_SIZE_STEP: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Root font size as a percentage, 100 = browser default.
    pub font_size: u32,
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self { font_size: 100, reduced_motion: false, high_contrast: false }
    }
}

impl AccessibilitySettings {
    pub fn increase_font(&mut self) {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(FONT_SIZE_MAX);
    }

    pub fn decrease_font(&mut self) {
        self.font_size = self.font_size.saturating_sub(FONT_SIZE_STEP).max(FONT_SIZE_MIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let parsed: CookiePreferences = serde_json::from_str("{not json")
            .unwrap_or_default();
        assert_eq!(parsed, CookiePreferences::default());
    }

    #[test]
    fn accessibility_settings_round_trip_in_camel_case() {
        let settings = AccessibilitySettings { font_size: 120, reduced_motion: true, high_contrast: false };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"fontSize\":120"));
        assert!(json.contains("\"reducedMotion\":true"));
        assert_eq!(serde_json::from_str::<AccessibilitySettings>(&json).unwrap(), settings);
    }

    #[test]
    fn font_size_stays_inside_the_supported_range() {
        let mut settings = AccessibilitySettings { font_size: 140, ..Default::default() };
        settings.increase_font();
        settings.increase_font();
        assert_eq!(settings.font_size, FONT_SIZE_MAX);

        let mut settings = AccessibilitySettings { font_size: 90, ..Default::default() };
        settings.decrease_font();
        settings.decrease_font();
        assert_eq!(settings.font_size, FONT_SIZE_MIN);
    }
}
