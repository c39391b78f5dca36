//! Construction options for [`RingIndicator`](super::RingIndicator).

use derive_setters::Setters;
use ringlet_ui::CssColor;
use serde::Deserialize;

use super::RingIndicatorError;

/// Ring indicator defaults.
pub struct RingIndicatorDefaults;

impl RingIndicatorDefaults {
    /// Default outer diameter.
    pub const SIZE: f64 = 120.0;
    /// Default stroke width.
    pub const THICKNESS: f64 = 10.0;
    /// Default indicator color.
    pub const PRIMARY_COLOR: &'static str = "blue";
    /// Default track color.
    pub const SECONDARY_COLOR: &'static str = "#f0f0f0";
}

/// Configuration of a ring indicator, fixed at construction.
///
/// Missing options fall back to [`RingIndicatorDefaults`].
#[derive(Clone, Debug, PartialEq, Setters, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RingIndicatorConfig {
    /// Outer diameter of the drawing area.
    pub size: f64,

    /// Stroke width of both rings.
    pub thickness: f64,

    /// Color of the indicator ring.
    #[setters(into)]
    pub primary_color: CssColor,

    /// Color of the track ring.
    #[setters(into)]
    pub secondary_color: CssColor,
}

impl Default for RingIndicatorConfig {
    fn default() -> Self {
        Self {
            size: RingIndicatorDefaults::SIZE,
            thickness: RingIndicatorDefaults::THICKNESS,
            primary_color: RingIndicatorDefaults::PRIMARY_COLOR.into(),
            secondary_color: RingIndicatorDefaults::SECONDARY_COLOR.into(),
        }
    }
}

impl RingIndicatorConfig {
    /// Parses a JSON options object such as `{"size": 80, "primaryColor": "red"}`.
    ///
    /// `null` yields the defaults; unknown keys are ignored.
    pub fn from_json(options: &str) -> Result<Self, RingIndicatorError> {
        let options: Option<Self> = serde_json::from_str(options)?;
        Ok(options.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use ringlet_ui::Color;

    use super::*;

    #[test]
    fn setters_override_defaults() {
        let config = RingIndicatorConfig::default()
            .size(80.0)
            .primary_color(Color::RED);
        assert_eq!(config.size, 80.0);
        assert_eq!(config.thickness, RingIndicatorDefaults::THICKNESS);
        assert_eq!(config.primary_color.as_str(), "#ff0000");
        assert_eq!(config.secondary_color.as_str(), "#f0f0f0");
    }

    #[test]
    fn json_merges_with_defaults_and_ignores_unknown_keys() {
        let config = RingIndicatorConfig::from_json(
            r#"{"size": 200, "secondaryColor": "rgb(1 2 3)", "label": "loading"}"#,
        )
        .expect("valid options");
        assert_eq!(
            config,
            RingIndicatorConfig::default()
                .size(200.0)
                .secondary_color("rgb(1 2 3)")
        );
    }

    #[test]
    fn json_null_and_empty_object_are_defaults() {
        for options in ["null", "{}"] {
            let config = RingIndicatorConfig::from_json(options).expect("valid options");
            assert_eq!(config, RingIndicatorConfig::default());
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            RingIndicatorConfig::from_json(r#"{"size": "big"}"#),
            Err(RingIndicatorError::Config(_))
        ));
    }
}
