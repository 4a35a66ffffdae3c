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

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{Booking, Dealer, ServiceRecord, TyrePurchase, Vehicle};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error")]
    IoError {
        #[from]
        source: std::io::Error
    },
    #[error("encoding error")]
    EncodingError {
        #[from]
        source: serde_json::Error
    }
}

/// Every table of the tyre-management schema in one serializable aggregate
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garage {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub tyre_purchases: Vec<TyrePurchase>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub dealers: Vec<Dealer>
}

impl Garage {
    pub fn deserialize_from(reader: &mut impl Read) -> StoreResult<Garage> {
        let garage: Garage = serde_json::from_reader(reader)?;
        debug!("Loaded garage with {} vehicle(s), {} purchase(s), {} service record(s)",
               garage.vehicles.len(), garage.tyre_purchases.len(), garage.services.len());
        Ok(garage)
    }

    pub fn serialize_to(&self, writer: &mut impl Write) -> StoreResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn vehicle_by_id(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn vehicle_by_registration(&self, registration_number: &str) -> Option<&Vehicle> {
        self.vehicles.iter()
            .find(|vehicle| vehicle.registration_number.eq_ignore_ascii_case(registration_number))
    }

    pub fn dealer_by_name(&self, dealer_name: &str) -> Option<&Dealer> {
        self.dealers.iter()
            .find(|dealer| dealer.dealer_name.eq_ignore_ascii_case(dealer_name))
    }

    pub fn dealer_by_id(&self, id: Uuid) -> Option<&Dealer> {
        self.dealers.iter().find(|dealer| dealer.id == id)
    }

    pub fn purchases_for(&self, vehicle_id: Uuid) -> Vec<&TyrePurchase> {
        self.tyre_purchases.iter()
            .filter(|purchase| purchase.vehicle_id == vehicle_id)
            .collect()
    }

    pub fn services_for(&self, vehicle_id: Uuid) -> Vec<&ServiceRecord> {
        self.services.iter()
            .filter(|service| service.vehicle_id == vehicle_id)
            .collect()
    }
}

/// Seam between the domain and whatever holds the records. The CLI ships a
/// JSON file implementation; a hosted deployment would put its backend client
/// behind the same pair of calls.
pub trait GarageStore {
    fn load(&self) -> StoreResult<Garage>;
    fn save(&self, garage: &Garage) -> StoreResult<()>;
}

#[derive(Debug)]
pub struct JsonFileStore {
    garage_path: PathBuf
}

impl JsonFileStore {
    pub fn new(garage_path: &Path) -> JsonFileStore {
        JsonFileStore { garage_path: garage_path.to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.garage_path
    }
}

impl GarageStore for JsonFileStore {
    fn load(&self) -> StoreResult<Garage> {
        if !self.garage_path.is_file() {
            info!("No garage file at {}. Starting empty", self.garage_path.display());
            return Ok(Garage::default());
        }
        let mut file = File::open(&self.garage_path)?;
        Garage::deserialize_from(&mut file)
    }

    fn save(&self, garage: &Garage) -> StoreResult<()> {
        if let Some(parent) = self.garage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(&self.garage_path)?;
        garage.serialize_to(&mut file)
    }
}
