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

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ServiceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled"
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub dealer_id: Uuid,
    pub service_type: ServiceType,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>
}

impl Booking {
    pub fn new(vehicle_id: Uuid,
               dealer_id: Uuid,
               service_type: ServiceType,
               booking_date: NaiveDate,
               booking_time: NaiveTime,
               notes: Option<&str>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            vehicle_id,
            dealer_id,
            service_type,
            booking_date,
            booking_time,
            status: BookingStatus::default(),
            notes: notes.map(|n| n.to_string())
        }
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self.status {
            BookingStatus::Pending | BookingStatus::Confirmed => self.booking_date >= today,
            BookingStatus::Completed | BookingStatus::Cancelled => false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bookings_start_pending() {
        let booking = Booking::new(Uuid::new_v4(),
                                   Uuid::new_v4(),
                                   ServiceType::WheelBalancing,
                                   NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
                                   NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                                   None);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn upcoming_depends_on_status_and_date() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        let mut booking = Booking::new(Uuid::new_v4(),
                                       Uuid::new_v4(),
                                       ServiceType::TyreRotation,
                                       NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
                                       NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                                       Some("front-left pulls right"));
        assert!(booking.is_upcoming(today));

        booking.status = BookingStatus::Cancelled;
        assert!(!booking.is_upcoming(today));

        booking.status = BookingStatus::Confirmed;
        booking.booking_date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert!(!booking.is_upcoming(today));
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(serde_json::to_string(&BookingStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"cancelled\"");
        let parsed: BookingStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(parsed, BookingStatus::Confirmed);
    }
}
