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
use tracing::debug;

use crate::{needs_alignment, kms_since_last_alignment, Garage, WarrantyStatus};

/// A maintenance reminder raised while scanning the garage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarageAlert {
    TyreConditionCheck {
        vehicle: String,
        tyre_brand: String,
        purchase_date: NaiveDate
    },
    WarrantyExpiring {
        vehicle: String,
        tyre_brand: String,
        days_remaining: u64
    },
    WarrantyExpired {
        vehicle: String,
        tyre_brand: String,
        days_ago: u64
    },
    AlignmentDue {
        vehicle: String,
        kms_since_alignment: u32
    }
}

impl Display for GarageAlert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GarageAlert::TyreConditionCheck { vehicle, tyre_brand, purchase_date } => {
                write!(f, "{} ({}) - Purchased on {} - Check tyre condition",
                       vehicle, tyre_brand, purchase_date.format("%d %b %Y"))
            }
            GarageAlert::WarrantyExpiring { vehicle, tyre_brand, days_remaining } => {
                write!(f, "{} ({}) - Warranty expires in {} days",
                       vehicle, tyre_brand, days_remaining)
            }
            GarageAlert::WarrantyExpired { vehicle, tyre_brand, days_ago } => {
                write!(f, "{} ({}) - Warranty expired {} days ago",
                       vehicle, tyre_brand, days_ago)
            }
            GarageAlert::AlignmentDue { vehicle, kms_since_alignment } => {
                write!(f, "{} - Due for wheel alignment ({} km since last)",
                       vehicle, kms_since_alignment)
            }
        }
    }
}

/// Scan every purchase and vehicle for reminders worth surfacing on the
/// dashboard. Purchases attached to an unknown vehicle still alert, labelled
/// as such.
pub fn gather_alerts(garage: &Garage, today: NaiveDate) -> Vec<GarageAlert> {
    let mut alerts = Vec::new();

    for purchase in &garage.tyre_purchases {
        let vehicle = match garage.vehicle_by_id(purchase.vehicle_id) {
            Some(vehicle) => vehicle.description(),
            None => "Unknown vehicle".to_string()
        };
        if purchase.needs_condition_check(today) {
            alerts.push(GarageAlert::TyreConditionCheck {
                vehicle: vehicle.clone(),
                tyre_brand: purchase.tyre_brand.clone(),
                purchase_date: purchase.purchase_date
            });
        }
        match purchase.warranty_status(today) {
            Some(WarrantyStatus::ExpiringSoon { days_remaining }) => {
                alerts.push(GarageAlert::WarrantyExpiring {
                    vehicle,
                    tyre_brand: purchase.tyre_brand.clone(),
                    days_remaining
                });
            }
            Some(WarrantyStatus::Expired { days_ago }) => {
                alerts.push(GarageAlert::WarrantyExpired {
                    vehicle,
                    tyre_brand: purchase.tyre_brand.clone(),
                    days_ago
                });
            }
            Some(WarrantyStatus::Active { .. }) | None => {}
        }
    }

    for vehicle in &garage.vehicles {
        if needs_alignment(vehicle, &garage.services) {
            let kms_since_alignment =
                kms_since_last_alignment(vehicle, &garage.services).unwrap_or(0);
            alerts.push(GarageAlert::AlignmentDue {
                vehicle: vehicle.description(),
                kms_since_alignment
            });
        }
    }

    debug!("Gathered {} alert(s) for {}", alerts.len(), today);
    alerts
}
