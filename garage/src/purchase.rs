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

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Warranties flip from active to expiring-soon this many days before the
/// end date
pub const WARRANTY_EXPIRY_WARNING_DAYS: i64 = 30;

/// Age at which a set of tyres earns a condition-check reminder
pub const TYRE_CHECK_AGE_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyrePurchase {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub tyre_brand: String,
    pub number_of_tyres: u32,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_at_purchase: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tyre_serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_end_date: Option<NaiveDate>
}

impl TyrePurchase {
    pub fn new(vehicle_id: Uuid,
               tyre_brand: &str,
               number_of_tyres: u32,
               purchase_date: NaiveDate) -> TyrePurchase {
        TyrePurchase {
            id: Uuid::new_v4(),
            vehicle_id,
            tyre_brand: tyre_brand.to_string(),
            number_of_tyres,
            purchase_date,
            kms_at_purchase: None,
            tyre_serial_number: None,
            warranty_start_date: None,
            warranty_end_date: None
        }
    }

    /// Where this purchase sits in its warranty window on the given day.
    /// Purchases logged without an end date have no trackable status.
    pub fn warranty_status(&self, today: NaiveDate) -> Option<WarrantyStatus> {
        let end_date = self.warranty_end_date?;
        let days_remaining = (end_date - today).num_days();
        if days_remaining < 0 {
            Some(WarrantyStatus::Expired { days_ago: days_remaining.unsigned_abs() })
        } else if days_remaining < WARRANTY_EXPIRY_WARNING_DAYS {
            Some(WarrantyStatus::ExpiringSoon { days_remaining: days_remaining as u64 })
        } else {
            Some(WarrantyStatus::Active { days_remaining: days_remaining as u64 })
        }
    }

    /// Tyres three or more calendar months old are due a condition check
    pub fn needs_condition_check(&self, today: NaiveDate) -> bool {
        match self.purchase_date.checked_add_months(Months::new(TYRE_CHECK_AGE_MONTHS)) {
            Some(check_due_from) => today >= check_due_from,
            None => false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyStatus {
    Active { days_remaining: u64 },
    ExpiringSoon { days_remaining: u64 },
    Expired { days_ago: u64 }
}

impl WarrantyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyStatus::Active { .. } => "active",
            WarrantyStatus::ExpiringSoon { .. } => "expiring",
            WarrantyStatus::Expired { .. } => "expired"
        }
    }
}

impl Display for WarrantyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WarrantyStatus::Active { days_remaining } => {
                write!(f, "{} days remaining", days_remaining)
            }
            WarrantyStatus::ExpiringSoon { days_remaining } => {
                write!(f, "Expires in {} days", days_remaining)
            }
            WarrantyStatus::Expired { days_ago } => {
                write!(f, "Expired {} days ago", days_ago)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase_with_warranty_end(end_date: Option<NaiveDate>) -> TyrePurchase {
        TyrePurchase {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            tyre_brand: "Michelin".to_string(),
            number_of_tyres: 4,
            purchase_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            kms_at_purchase: Some(38000),
            tyre_serial_number: None,
            warranty_start_date: end_date.map(|_| NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            warranty_end_date: end_date
        }
    }

    #[test]
    fn warranty_status_thresholds() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = |y, m, d| Some(NaiveDate::from_ymd_opt(y, m, d).unwrap());

        let expired = purchase_with_warranty_end(end(2025, 5, 31));
        assert_eq!(expired.warranty_status(today),
                   Some(WarrantyStatus::Expired { days_ago: 1 }));

        let expiring = purchase_with_warranty_end(end(2025, 6, 30));
        assert_eq!(expiring.warranty_status(today),
                   Some(WarrantyStatus::ExpiringSoon { days_remaining: 29 }));

        let expiring_today = purchase_with_warranty_end(end(2025, 6, 1));
        assert_eq!(expiring_today.warranty_status(today),
                   Some(WarrantyStatus::ExpiringSoon { days_remaining: 0 }));

        let active = purchase_with_warranty_end(end(2025, 7, 1));
        assert_eq!(active.warranty_status(today),
                   Some(WarrantyStatus::Active { days_remaining: 30 }));
    }

    #[test]
    fn no_end_date_has_no_status() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(purchase_with_warranty_end(None).warranty_status(today), None);
    }

    #[test]
    fn condition_check_after_three_months() {
        let purchase = purchase_with_warranty_end(None);
        let bought = purchase.purchase_date;
        assert!(!purchase.needs_condition_check(bought));
        assert!(!purchase.needs_condition_check(NaiveDate::from_ymd_opt(2025, 4, 9).unwrap()));
        assert!(purchase.needs_condition_check(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()));
        assert!(purchase.needs_condition_check(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn status_labels() {
        assert_eq!(WarrantyStatus::Active { days_remaining: 90 }.as_str(), "active");
        assert_eq!(WarrantyStatus::ExpiringSoon { days_remaining: 5 }.to_string(),
                   "Expires in 5 days");
        assert_eq!(WarrantyStatus::Expired { days_ago: 12 }.to_string(),
                   "Expired 12 days ago");
    }
}
