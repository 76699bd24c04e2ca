use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_CREATION_SPAN_DAYS, TimelineScale};
use crate::error::{TimelineError, TimelineResult};

/// One value per timeline scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerScale<T> {
    pub day: T,
    pub week: T,
    pub month: T,
}

impl<T: Copy> PerScale<T> {
    #[must_use]
    pub fn get(&self, scale: TimelineScale) -> T {
        match scale {
            TimelineScale::Day => self.day,
            TimelineScale::Week => self.week,
            TimelineScale::Month => self.month,
        }
    }
}

/// Window opened around today by scale changes and jump-to-today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleWindow {
    pub back_units: u32,
    pub forward_units: u32,
}

impl ScaleWindow {
    #[must_use]
    pub const fn new(back_units: u32, forward_units: u32) -> Self {
        Self {
            back_units,
            forward_units,
        }
    }
}

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can persist board setup; every field falls back to
/// the product defaults when missing from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_initial_scale")]
    pub initial_scale: TimelineScale,
    #[serde(default = "default_column_width_px")]
    pub column_width_px: f64,
    #[serde(default = "default_min_bar_width_px")]
    pub min_bar_width_px: f64,
    #[serde(default = "default_creation_span_days")]
    pub creation_span_days: u32,
    #[serde(default = "default_windows")]
    pub default_windows: PerScale<ScaleWindow>,
    #[serde(default = "default_extend_by")]
    pub extend_by: PerScale<u32>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_scale: default_initial_scale(),
            column_width_px: default_column_width_px(),
            min_bar_width_px: default_min_bar_width_px(),
            creation_span_days: default_creation_span_days(),
            default_windows: default_windows(),
            extend_by: default_extend_by(),
        }
    }

    #[must_use]
    pub fn with_initial_scale(mut self, scale: TimelineScale) -> Self {
        self.initial_scale = scale;
        self
    }

    #[must_use]
    pub fn with_column_width_px(mut self, column_width_px: f64) -> Self {
        self.column_width_px = column_width_px;
        self
    }

    #[must_use]
    pub fn with_min_bar_width_px(mut self, min_bar_width_px: f64) -> Self {
        self.min_bar_width_px = min_bar_width_px;
        self
    }

    #[must_use]
    pub fn with_creation_span_days(mut self, days: u32) -> Self {
        self.creation_span_days = days;
        self
    }

    #[must_use]
    pub fn with_default_window(mut self, scale: TimelineScale, window: ScaleWindow) -> Self {
        match scale {
            TimelineScale::Day => self.default_windows.day = window,
            TimelineScale::Week => self.default_windows.week = window,
            TimelineScale::Month => self.default_windows.month = window,
        }
        self
    }

    #[must_use]
    pub fn with_extend_by(mut self, scale: TimelineScale, units: u32) -> Self {
        match scale {
            TimelineScale::Day => self.extend_by.day = units,
            TimelineScale::Week => self.extend_by.week = units,
            TimelineScale::Month => self.extend_by.month = units,
        }
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.column_width_px.is_finite() || self.column_width_px <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "column width must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_bar_width_px.is_finite() || self.min_bar_width_px < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "min bar width must be finite and >= 0".to_owned(),
            ));
        }
        if self.creation_span_days == 0 {
            return Err(TimelineError::InvalidConfig(
                "creation span must be at least one day".to_owned(),
            ));
        }
        if let Some(scale) = TimelineScale::ALL
            .into_iter()
            .find(|scale| self.extend_by.get(*scale) == 0)
        {
            return Err(TimelineError::InvalidConfig(format!(
                "extend-by for {} scale must be >= 1",
                scale.label().to_lowercase()
            )));
        }

        Ok(self)
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_initial_scale() -> TimelineScale {
    TimelineScale::Month
}

fn default_column_width_px() -> f64 {
    113.0
}

fn default_min_bar_width_px() -> f64 {
    4.0
}

fn default_creation_span_days() -> u32 {
    DEFAULT_CREATION_SPAN_DAYS
}

fn default_windows() -> PerScale<ScaleWindow> {
    PerScale {
        day: ScaleWindow::new(32, 26),
        week: ScaleWindow::new(8, 8),
        month: ScaleWindow::new(12, 12),
    }
}

fn default_extend_by() -> PerScale<u32> {
    PerScale {
        day: 30,
        week: 8,
        month: 6,
    }
}
