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

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub vehicle_brand: String,
    pub vehicle_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_variant: Option<String>,
    pub vehicle_year: i32,
    pub registration_number: String,
    #[serde(default)]
    pub current_kms: u32
}

impl Vehicle {
    pub fn new(brand: &str,
               model: &str,
               variant: Option<&str>,
               year: i32,
               registration_number: &str,
               current_kms: u32) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            vehicle_brand: brand.to_string(),
            vehicle_model: model.to_string(),
            vehicle_variant: variant.map(|v| v.to_string()),
            vehicle_year: year,
            // Registrations are always stored upper-case
            registration_number: registration_number.to_uppercase(),
            current_kms
        }
    }

    pub fn description(&self) -> String {
        format!("{} {} ({})", self.vehicle_brand, self.vehicle_model, self.registration_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_stored_upper_case() {
        let vehicle = Vehicle::new("Honda", "City", None, 2019, "ka01ab1234", 42000);
        assert_eq!(vehicle.registration_number, "KA01AB1234");
        assert_eq!(vehicle.description(), "Honda City (KA01AB1234)");
    }
}
