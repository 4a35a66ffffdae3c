/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of tyre-ledger.
 *
 * tyre-ledger is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * tyre-ledger is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with tyre-ledger. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::TyreSize;

/// Largest overall diameter deviation that keeps speedometer, ABS and
/// drivetrain calibration within industry tolerance.
pub const FITMENT_TOLERANCE_PERCENT: f64 = 3.0;

/// Derived measurements for a replacement tyre against the currently fitted
/// one. All lengths in millimetres, all percentages relative to the old tyre.
#[derive(Debug, Clone, PartialEq)]
pub struct TyreComparison {
    pub old_diameter: f64,
    pub new_diameter: f64,
    pub diameter_change: f64,
    pub diameter_change_percent: f64,
    pub speedometer_error: f64,
    pub height_difference: f64,
    pub width_difference: i32,
    pub fitment_compatible: bool
}

impl TyreComparison {
    /// The speed actually travelled when the speedometer shows
    /// `indicated_kmh`. The readout scales linearly with rolling diameter.
    pub fn actual_speed_kmh(&self, indicated_kmh: f64) -> f64 {
        indicated_kmh * (1.0 + (self.speedometer_error / 100.0))
    }
}

pub fn compare(old: &TyreSize, new: &TyreSize) -> TyreComparison {
    let old_diameter = old.overall_diameter_mm();
    let new_diameter = new.overall_diameter_mm();
    let diameter_change = new_diameter - old_diameter;
    let diameter_change_percent = (diameter_change / old_diameter) * 100.0;
    let speedometer_error = diameter_change_percent;
    let height_difference = new.sidewall_height_mm() - old.sidewall_height_mm();
    let width_difference = new.width as i32 - old.width as i32;
    let fitment_compatible = diameter_change_percent.abs() <= FITMENT_TOLERANCE_PERCENT;

    TyreComparison {
        old_diameter,
        new_diameter,
        diameter_change,
        diameter_change_percent,
        speedometer_error,
        height_difference,
        width_difference,
        fitment_compatible
    }
}
