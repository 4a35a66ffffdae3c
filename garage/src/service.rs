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

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Vehicle;

/// Wheel alignment is due again after this much driving
pub const ALIGNMENT_INTERVAL_KMS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    WheelAlignment,
    WheelBalancing,
    TyreRotation,
    NitrogenFilling,
    AirPressureCheck
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::WheelAlignment => "wheel_alignment",
            ServiceType::WheelBalancing => "wheel_balancing",
            ServiceType::TyreRotation => "tyre_rotation",
            ServiceType::NitrogenFilling => "nitrogen_filling",
            ServiceType::AirPressureCheck => "air_pressure_check"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::WheelAlignment => "Wheel Alignment",
            ServiceType::WheelBalancing => "Wheel Balancing",
            ServiceType::TyreRotation => "Tyre Rotation",
            ServiceType::NitrogenFilling => "Nitrogen Filling",
            ServiceType::AirPressureCheck => "Air Pressure Check"
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type: ServiceType,
    pub current_kms: u32,
    pub service_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>
}

impl ServiceRecord {
    pub fn new(vehicle_id: Uuid,
               service_type: ServiceType,
               current_kms: u32,
               service_date: NaiveDate,
               notes: Option<&str>) -> ServiceRecord {
        ServiceRecord {
            id: Uuid::new_v4(),
            vehicle_id,
            service_type,
            current_kms,
            service_date,
            notes: notes.map(|n| n.to_string())
        }
    }
}

fn last_alignment<'a>(vehicle: &Vehicle, services: &'a [ServiceRecord]) -> Option<&'a ServiceRecord> {
    services.iter()
        .filter(|service| service.vehicle_id == vehicle.id)
        .filter(|service| service.service_type == ServiceType::WheelAlignment)
        .max_by_key(|service| (service.service_date, service.current_kms))
}

/// Distance driven since the vehicle's most recent wheel alignment. None when
/// no alignment is on file
pub fn kms_since_last_alignment(vehicle: &Vehicle, services: &[ServiceRecord]) -> Option<u32> {
    let alignment = last_alignment(vehicle, services)?;
    Some(vehicle.current_kms.saturating_sub(alignment.current_kms))
}

/// A vehicle is due for alignment once it has covered ALIGNMENT_INTERVAL_KMS
/// since the last one. Vehicles with no alignment history are never flagged.
pub fn needs_alignment(vehicle: &Vehicle, services: &[ServiceRecord]) -> bool {
    match kms_since_last_alignment(vehicle, services) {
        Some(kms) => kms >= ALIGNMENT_INTERVAL_KMS,
        None => false
    }
}

/// Odometer reading at which the next alignment falls due
pub fn next_alignment_due_kms(vehicle: &Vehicle, services: &[ServiceRecord]) -> Option<u32> {
    let alignment = last_alignment(vehicle, services)?;
    Some(alignment.current_kms + ALIGNMENT_INTERVAL_KMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle_at(current_kms: u32) -> Vehicle {
        Vehicle::new("Honda", "City", None, 2019, "KA01AB1234", current_kms)
    }

    fn alignment_at(vehicle: &Vehicle, kms: u32, date: NaiveDate) -> ServiceRecord {
        ServiceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            service_type: ServiceType::WheelAlignment,
            current_kms: kms,
            service_date: date,
            notes: None
        }
    }

    #[test]
    fn no_alignment_history_is_never_due() {
        let vehicle = vehicle_at(80000);
        assert_eq!(kms_since_last_alignment(&vehicle, &[]), None);
        assert!(!needs_alignment(&vehicle, &[]));
        assert_eq!(next_alignment_due_kms(&vehicle, &[]), None);
    }

    #[test]
    fn due_at_exactly_the_interval() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut vehicle = vehicle_at(44999);
        let services = vec![alignment_at(&vehicle, 40000, date)];

        assert_eq!(kms_since_last_alignment(&vehicle, &services), Some(4999));
        assert!(!needs_alignment(&vehicle, &services));

        vehicle.current_kms = 45000;
        assert!(needs_alignment(&vehicle, &services));
        assert_eq!(next_alignment_due_kms(&vehicle, &services), Some(45000));
    }

    #[test]
    fn only_the_latest_alignment_counts() {
        let vehicle = vehicle_at(52000);
        let services = vec![
            alignment_at(&vehicle, 40000, NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()),
            alignment_at(&vehicle, 50000, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
        ];
        assert_eq!(kms_since_last_alignment(&vehicle, &services), Some(2000));
        assert!(!needs_alignment(&vehicle, &services));
        assert_eq!(next_alignment_due_kms(&vehicle, &services), Some(55000));
    }

    #[test]
    fn other_vehicles_and_services_are_ignored() {
        let vehicle = vehicle_at(52000);
        let other = vehicle_at(90000);
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let mut rotation = alignment_at(&vehicle, 30000, date);
        rotation.service_type = ServiceType::TyreRotation;
        let services = vec![rotation, alignment_at(&other, 30000, date)];
        assert_eq!(kms_since_last_alignment(&vehicle, &services), None);
    }

    #[test]
    fn corrected_odometer_is_not_flagged() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let vehicle = vehicle_at(30000);
        let services = vec![alignment_at(&vehicle, 35000, date)];
        assert_eq!(kms_since_last_alignment(&vehicle, &services), Some(0));
        assert!(!needs_alignment(&vehicle, &services));
        assert_eq!(next_alignment_due_kms(&vehicle, &services), Some(40000));
    }

    #[test]
    fn wire_names_match_the_database_enum() {
        assert_eq!(serde_json::to_string(&ServiceType::WheelAlignment).unwrap(),
                   "\"wheel_alignment\"");
        assert_eq!(serde_json::to_string(&ServiceType::AirPressureCheck).unwrap(),
                   "\"air_pressure_check\"");
        let parsed: ServiceType = serde_json::from_str("\"tyre_rotation\"").unwrap();
        assert_eq!(parsed, ServiceType::TyreRotation);
        for service_type in [ServiceType::WheelAlignment, ServiceType::WheelBalancing,
                             ServiceType::TyreRotation, ServiceType::NitrogenFilling,
                             ServiceType::AirPressureCheck] {
            assert_eq!(serde_json::to_string(&service_type).unwrap(),
                       format!("\"{}\"", service_type.as_str()));
        }
    }
}
