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

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: Uuid,
    pub dealer_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<NaiveTime>,
    #[serde(default = "default_active")]
    pub is_active: bool
}

fn default_active() -> bool {
    true
}

impl Dealer {
    pub fn new(dealer_name: &str,
               address: &str,
               city: &str,
               state: &str,
               pincode: &str,
               contact_number: &str) -> Dealer {
        Dealer {
            id: Uuid::new_v4(),
            dealer_name: dealer_name.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            pincode: pincode.to_string(),
            contact_number: contact_number.to_string(),
            opening_time: None,
            closing_time: None,
            is_active: true
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.pincode)
    }
}
