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

mod alerts;
mod booking;
mod dealer;
mod purchase;
mod service;
mod store;
mod vehicle;

pub use alerts::{gather_alerts, GarageAlert};
pub use booking::{Booking, BookingStatus};
pub use dealer::Dealer;
pub use purchase::{TyrePurchase, WarrantyStatus, WARRANTY_EXPIRY_WARNING_DAYS, TYRE_CHECK_AGE_MONTHS};
pub use service::{kms_since_last_alignment, needs_alignment, next_alignment_due_kms,
                  ServiceRecord, ServiceType, ALIGNMENT_INTERVAL_KMS};
pub use store::{Garage, GarageStore, JsonFileStore, StoreError};
pub use vehicle::Vehicle;
