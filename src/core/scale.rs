use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Horizontal placement of a work-order bar inside its row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

/// Linear mapping between unit coordinates and pixels: one unit is one
/// column of `column_width_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    column_width_px: f64,
}

impl UnitScale {
    pub fn new(column_width_px: f64) -> TimelineResult<Self> {
        if !column_width_px.is_finite() || column_width_px <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "column width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self { column_width_px })
    }

    #[must_use]
    pub fn column_width_px(self) -> f64 {
        self.column_width_px
    }

    #[must_use]
    pub fn unit_to_px(self, unit: f64) -> f64 {
        unit * self.column_width_px
    }

    /// Converts a pointer offset, relative to the row's left edge, to units.
    #[must_use]
    pub fn px_to_unit(self, px: f64) -> f64 {
        px / self.column_width_px
    }

    #[must_use]
    pub fn total_width_px(self, total_units: usize) -> f64 {
        self.unit_to_px(total_units as f64)
    }

    /// Bar placement with a floor on width so very short orders stay visible.
    #[must_use]
    pub fn bar_geometry(self, start_unit: f64, end_unit: f64, min_width_px: f64) -> BarGeometry {
        BarGeometry {
            left_px: self.unit_to_px(start_unit),
            width_px: self.unit_to_px(end_unit - start_unit).max(min_width_px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_width() {
        assert!(UnitScale::new(0.0).is_err());
        assert!(UnitScale::new(f64::NAN).is_err());
    }

    #[test]
    fn pixel_round_trip_within_tolerance() {
        let scale = UnitScale::new(113.0).expect("valid scale");
        let px = scale.unit_to_px(2.75);
        assert!((scale.px_to_unit(px) - 2.75).abs() <= 1e-12);
    }

    #[test]
    fn bar_width_has_a_floor() {
        let scale = UnitScale::new(10.0).expect("valid scale");
        let bar = scale.bar_geometry(-1.0, -0.9, 4.0);
        assert_eq!(bar.left_px, -10.0);
        assert_eq!(bar.width_px, 4.0);
    }
}
