// Settings module
// Day view geometry settings, persisted as TOML

use serde::{Deserialize, Serialize};

/// Geometry and label settings for the day view.
///
/// Margins live here rather than in the renderer so the packer only ever sees
/// the usable event-area width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayViewSettings {
    pub start_hour: u32,
    pub end_hour: u32,
    pub hour_height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub format_24h: bool,
    pub line_half: bool,
    pub text_line_height: f32,
}

impl Default for DayViewSettings {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            hour_height: 100.0,
            left_margin: 49.0,
            right_margin: 20.0,
            format_24h: false,
            line_half: false,
            text_line_height: 17.0,
        }
    }
}

impl DayViewSettings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour > 24 {
            return Err(format!("end_hour must be at most 24, got {}", self.end_hour));
        }

        if self.end_hour <= self.start_hour {
            return Err(format!(
                "end_hour ({}) must be after start_hour ({})",
                self.end_hour, self.start_hour
            ));
        }

        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err("hour_height must be a positive number".to_string());
        }

        if !(self.text_line_height.is_finite() && self.text_line_height > 0.0) {
            return Err("text_line_height must be a positive number".to_string());
        }

        if !(self.left_margin >= 0.0 && self.right_margin >= 0.0) {
            return Err("Margins cannot be negative".to_string());
        }

        Ok(())
    }

    /// Number of hours shown by the view.
    pub fn visible_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = DayViewSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.visible_hours(), 24);
    }

    #[test]
    fn test_reversed_hours_rejected() {
        let settings = DayViewSettings {
            start_hour: 18,
            end_hour: 8,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().contains("must be after"));
    }

    #[test]
    fn test_end_hour_past_midnight_rejected() {
        let settings = DayViewSettings {
            end_hour: 25,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_hour_height_rejected() {
        let settings = DayViewSettings {
            hour_height: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_margin_rejected() {
        let settings = DayViewSettings {
            left_margin: -1.0,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err(), "Margins cannot be negative");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: DayViewSettings = toml::from_str("start_hour = 7\nformat_24h = true\n").unwrap();
        assert_eq!(settings.start_hour, 7);
        assert!(settings.format_24h);
        assert_eq!(settings.end_hour, 24);
        assert_eq!(settings.hour_height, 100.0);
    }
}
