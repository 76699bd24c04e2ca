use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar period represented by one timeline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineScale {
    Day,
    Week,
    Month,
}

impl TimelineScale {
    pub const ALL: [TimelineScale; 3] = [Self::Day, Self::Week, Self::Month];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }

    /// Scale choices in toolbar order, paired with their display labels.
    #[must_use]
    pub fn scale_options() -> [(TimelineScale, &'static str); 3] {
        Self::ALL.map(|scale| (scale, scale.label()))
    }
}

/// Visible window: `anchor_date` plus whole periods before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub anchor_date: NaiveDate,
    pub back_units: u32,
    pub forward_units: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(anchor_date: NaiveDate, back_units: u32, forward_units: u32) -> Self {
        Self {
            anchor_date,
            back_units,
            forward_units,
        }
    }

    /// Builds a viewport from raw host numbers, truncating fractions and
    /// flooring negative or non-finite values at zero.
    #[must_use]
    pub fn from_raw(anchor_date: NaiveDate, back_units: f64, forward_units: f64) -> Self {
        Self::new(
            anchor_date,
            normalize_units(back_units),
            normalize_units(forward_units),
        )
    }

    /// Number of columns this viewport produces.
    #[must_use]
    pub fn total_units(self) -> u64 {
        u64::from(self.back_units) + u64::from(self.forward_units) + 1
    }

    #[must_use]
    pub fn extended_back(self, units: u32) -> Self {
        Self {
            back_units: self.back_units.saturating_add(units),
            ..self
        }
    }

    #[must_use]
    pub fn extended_forward(self, units: u32) -> Self {
        Self {
            forward_units: self.forward_units.saturating_add(units),
            ..self
        }
    }
}

/// Truncates a raw unit count to a non-negative integer.
///
/// Non-finite and negative values map to 0; values beyond `u32::MAX` saturate.
#[must_use]
pub fn normalize_units(units: f64) -> u32 {
    if !units.is_finite() {
        return 0;
    }
    let truncated = units.trunc();
    if truncated <= 0.0 {
        0
    } else {
        // `as` saturates for out-of-range floats.
        truncated as u32
    }
}
