//! Fade configuration with TOML preset support.
//!
//! All tweakable settings of the effect live in [`FadeOptions`]. Options
//! serialize to/from TOML for presets; `#[serde(default)]` means partial
//! files (e.g. only overriding `smooth_time`) fill the rest from defaults.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FadeError;

/// Smallest allowed fade band, in world units. Matches the floor applied
/// when a configured band is zero or negative.
pub const MIN_FADE_BAND: f32 = 1e-4;

/// Tweakable fade parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Proximity Fade", inline)]
#[serde(default)]
pub struct FadeOptions {
    /// At this distance or less the effect is fully visible (factor 1).
    #[schemars(title = "Show Distance", range(min = 0.0, max = 50.0), extend("step" = 0.1))]
    pub show_distance: f32,
    /// Width of the transition band, in world units. Larger is softer.
    #[schemars(title = "Fade Band", range(min = 0.001, max = 10.0), extend("step" = 0.05))]
    pub fade_band: f32,
    /// Approximate seconds to reach a new factor. 0 disables temporal
    /// smoothing.
    #[schemars(title = "Smooth Time", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub smooth_time: f32,
    /// Maximum factor change rate, per second. 0 or less means unlimited.
    #[schemars(title = "Max Speed", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Shader-parameter name the factor is written under.
    #[schemars(skip)]
    pub property: String,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            show_distance: 2.0,
            fade_band: 0.75,
            smooth_time: 0.15,
            max_speed: 0.0,
            property: "_Alpha".to_owned(),
        }
    }
}

impl FadeOptions {
    /// Clamp fields to their documented domains: `show_distance` to >= 0
    /// and `fade_band` to at least [`MIN_FADE_BAND`].
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.show_distance < 0.0 {
            self.show_distance = 0.0;
        }
        if self.fade_band < MIN_FADE_BAND {
            log::warn!(
                "fade_band {} below minimum, clamping to {MIN_FADE_BAND}",
                self.fade_band
            );
            self.fade_band = MIN_FADE_BAND;
        }
        self
    }

    /// Far edge of the transition band (`show_distance + fade_band`, band
    /// floored).
    #[must_use]
    pub fn hide_distance(&self) -> f32 {
        self.show_distance + self.fade_band.max(MIN_FADE_BAND)
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(FadeOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FadeError> {
        let content = std::fs::read_to_string(path).map_err(FadeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FadeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FadeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FadeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FadeError::Io)?;
        }
        std::fs::write(path, content).map_err(FadeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = FadeOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: FadeOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
smooth_time = 0.0
";
        let opts: FadeOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.smooth_time, 0.0);
        // Everything else should be default
        assert_eq!(opts.show_distance, 2.0);
        assert_eq!(opts.fade_band, 0.75);
        assert_eq!(opts.property, "_Alpha");
    }

    #[test]
    fn validated_floors_fade_band() {
        let opts = FadeOptions {
            fade_band: 0.0,
            ..FadeOptions::default()
        }
        .validated();
        assert_eq!(opts.fade_band, MIN_FADE_BAND);

        let opts = FadeOptions {
            fade_band: -1.0,
            ..FadeOptions::default()
        }
        .validated();
        assert_eq!(opts.fade_band, MIN_FADE_BAND);
    }

    #[test]
    fn validated_clamps_negative_show_distance() {
        let opts = FadeOptions {
            show_distance: -3.0,
            ..FadeOptions::default()
        }
        .validated();
        assert_eq!(opts.show_distance, 0.0);
    }

    #[test]
    fn hide_distance_uses_floored_band() {
        let opts = FadeOptions {
            show_distance: 2.0,
            fade_band: 0.0,
            ..FadeOptions::default()
        };
        assert_eq!(opts.hide_distance(), 2.0 + MIN_FADE_BAND);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(FadeOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("show_distance"));
        assert!(props.contains_key("fade_band"));
        assert!(props.contains_key("smooth_time"));
        assert!(props.contains_key("max_speed"));
        // Not a UI slider.
        assert!(!props.contains_key("property"));
    }
}
