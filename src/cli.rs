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

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use tracing::{error, info};

use fitment::{compare, TyreSize};
use garage::{gather_alerts, next_alignment_due_kms, Booking, Dealer, Garage, GarageStore,
             JsonFileStore, ServiceRecord, ServiceType, TyrePurchase, Vehicle};
use utils::numeric::{signed_float_str, signed_int_str};

use crate::settings::GlobalSettings;

#[derive(thiserror::Error, Debug)]
enum CommandError {
    #[error("no vehicle with registration `{0}` in the garage")]
    UnknownVehicle(String),
    #[error("no dealer named `{0}` in the garage")]
    UnknownDealer(String),
    #[error(transparent)]
    Store(#[from] garage::StoreError),
    #[error(transparent)]
    Settings(#[from] config::ConfigError)
}

#[derive(Parser)]
#[command(name = "tyre-ledger")]
#[command(about = "Vehicle and tyre maintenance ledger with a size comparison calculator")]
pub struct Cli {
    /// Garage store file to use instead of the configured one
    #[arg(long, global = true)]
    garage_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two tyre sizes for diameter, speedometer error and fitment
    Compare {
        /// Currently fitted size, e.g. "185/65 R15"
        old_size: String,
        /// Replacement size, e.g. "195/60 R15"
        new_size: String
    },
    /// Manage registered vehicles
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand
    },
    /// Manage tyre purchases and their warranties
    Purchase {
        #[command(subcommand)]
        command: PurchaseCommand
    },
    /// Manage maintenance service records
    Service {
        #[command(subcommand)]
        command: ServiceCommand
    },
    /// Manage service bookings with dealers
    Booking {
        #[command(subcommand)]
        command: BookingCommand
    },
    /// Manage tyre dealers
    Dealer {
        #[command(subcommand)]
        command: DealerCommand
    },
    /// Show warranty status for every tracked purchase
    Warranty,
    /// Show maintenance reminders across the garage
    Alerts
}

#[derive(Subcommand)]
enum VehicleCommand {
    Add {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        variant: Option<String>,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        registration: String,
        #[arg(long, default_value_t = 0)]
        kms: u32
    },
    List
}

#[derive(Subcommand)]
enum PurchaseCommand {
    Add {
        /// Registration of the vehicle the tyres were fitted to
        #[arg(long)]
        registration: String,
        #[arg(long)]
        brand: String,
        #[arg(long, default_value_t = 4)]
        tyres: u32,
        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        kms: Option<u32>,
        #[arg(long)]
        serial: Option<String>,
        #[arg(long)]
        warranty_start: Option<NaiveDate>,
        #[arg(long)]
        warranty_end: Option<NaiveDate>
    },
    List
}

#[derive(Subcommand)]
enum ServiceCommand {
    Add {
        #[arg(long)]
        registration: String,
        #[arg(long, value_enum)]
        service_type: ServiceTypeArg,
        /// Odometer reading at the time of service
        #[arg(long)]
        kms: u32,
        /// Service date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>
    },
    List
}

#[derive(Subcommand)]
enum BookingCommand {
    Add {
        #[arg(long)]
        registration: String,
        /// Name of a dealer already in the garage
        #[arg(long)]
        dealer: String,
        #[arg(long, value_enum)]
        service_type: ServiceTypeArg,
        /// Booking date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Booking time (HH:MM)
        #[arg(long, value_parser = parse_time_arg)]
        time: NaiveTime,
        #[arg(long)]
        notes: Option<String>
    },
    List
}

#[derive(Subcommand)]
enum DealerCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        pincode: String,
        #[arg(long)]
        contact: String,
        #[arg(long, value_parser = parse_time_arg)]
        opens: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time_arg)]
        closes: Option<NaiveTime>
    },
    List
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ServiceTypeArg {
    WheelAlignment,
    WheelBalancing,
    TyreRotation,
    NitrogenFilling,
    AirPressureCheck
}

impl From<ServiceTypeArg> for ServiceType {
    fn from(arg: ServiceTypeArg) -> ServiceType {
        match arg {
            ServiceTypeArg::WheelAlignment => ServiceType::WheelAlignment,
            ServiceTypeArg::WheelBalancing => ServiceType::WheelBalancing,
            ServiceTypeArg::TyreRotation => ServiceType::TyreRotation,
            ServiceTypeArg::NitrogenFilling => ServiceType::NitrogenFilling,
            ServiceTypeArg::AirPressureCheck => ServiceType::AirPressureCheck
        }
    }
}

fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("invalid time `{}`. Use HH:MM", value))
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compare { old_size, new_size } => run_compare(&old_size, &new_size),
        command => {
            let result = resolve_garage_path(cli.garage_file)
                .and_then(|path| run_garage_command(command, &JsonFileStore::new(&path)));
            match result {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("Command failed. {}", e.to_string());
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn resolve_garage_path(override_path: Option<PathBuf>) -> Result<PathBuf, CommandError> {
    match override_path {
        Some(path) => Ok(path),
        None => Ok(GlobalSettings::load()?.garage_path())
    }
}

fn run_compare(old_input: &str, new_input: &str) -> ExitCode {
    let (old, new) = match (TyreSize::parse(old_input), TyreSize::parse(new_input)) {
        (Ok(old), Ok(new)) => (old, new),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let result = compare(&old, &new);
    info!("Compared {} -> {}. Diameter change {}%", old, new, result.diameter_change_percent);

    if result.fitment_compatible {
        println!("Compatible fitment - diameter change is within acceptable range (±3%)");
    } else {
        println!("Incompatible fitment - diameter change exceeds recommended range (±3%)");
    }
    println!();
    println!("Overall diameter");
    println!("  Current ({}): {:.1} mm", old, result.old_diameter);
    println!("  New     ({}): {:.1} mm", new, result.new_diameter);
    println!("  Change: {} mm ({}%)",
             signed_float_str(result.diameter_change, 1),
             signed_float_str(result.diameter_change_percent, 2));
    println!();
    println!("Speedometer error: {}%", signed_float_str(result.speedometer_error, 2));
    println!("  At 100 km/h indicated speed, actual speed will be approximately {:.1} km/h",
             result.actual_speed_kmh(100.0));
    println!();
    println!("Dimensional differences");
    println!("  Width difference: {} mm", signed_int_str(result.width_difference));
    println!("  Sidewall height difference: {} mm",
             signed_float_str(result.height_difference, 1));
    ExitCode::SUCCESS
}

fn run_garage_command(command: Commands, store: &JsonFileStore) -> Result<(), CommandError> {
    let mut garage = store.load()?;
    let today = Local::now().date_naive();
    match command {
        Commands::Compare { .. } => unreachable!("compare does not touch the garage store"),
        Commands::Vehicle { command } => match command {
            VehicleCommand::Add { brand, model, variant, year, registration, kms } => {
                let vehicle = Vehicle::new(&brand, &model, variant.as_deref(), year,
                                           &registration, kms);
                info!("Registering vehicle {}", vehicle.description());
                println!("Registered {} {}", vehicle.vehicle_year, vehicle.description());
                garage.vehicles.push(vehicle);
                store.save(&garage)?;
            }
            VehicleCommand::List => list_vehicles(&garage)
        },
        Commands::Purchase { command } => match command {
            PurchaseCommand::Add { registration, brand, tyres, date, kms, serial,
                                   warranty_start, warranty_end } => {
                let vehicle_id = lookup_vehicle(&garage, &registration)?.id;
                let mut purchase = TyrePurchase::new(vehicle_id, &brand, tyres, date);
                purchase.kms_at_purchase = kms;
                purchase.tyre_serial_number = serial;
                purchase.warranty_start_date = warranty_start;
                purchase.warranty_end_date = warranty_end;
                info!("Recording purchase of {} {} tyre(s)", tyres, brand);
                println!("Recorded purchase of {} {} tyre(s) for {}",
                         tyres, brand, registration.to_uppercase());
                garage.tyre_purchases.push(purchase);
                store.save(&garage)?;
            }
            PurchaseCommand::List => list_purchases(&garage)
        },
        Commands::Service { command } => match command {
            ServiceCommand::Add { registration, service_type, kms, date, notes } => {
                let vehicle_id = lookup_vehicle(&garage, &registration)?.id;
                let service_type = ServiceType::from(service_type);
                let record = ServiceRecord::new(vehicle_id, service_type, kms,
                                                date.unwrap_or(today), notes.as_deref());
                info!("Recording {} at {} km", service_type.as_str(), kms);
                println!("Recorded {} for {} at {} km",
                         service_type, registration.to_uppercase(), kms);
                garage.services.push(record);
                // A service visit is also the freshest odometer reading we have
                if let Some(vehicle) = garage.vehicles.iter_mut().find(|v| v.id == vehicle_id) {
                    vehicle.current_kms = kms;
                }
                store.save(&garage)?;
            }
            ServiceCommand::List => list_services(&garage)
        },
        Commands::Booking { command } => match command {
            BookingCommand::Add { registration, dealer, service_type, date, time, notes } => {
                let vehicle_id = lookup_vehicle(&garage, &registration)?.id;
                let dealer = garage.dealer_by_name(&dealer)
                    .ok_or_else(|| CommandError::UnknownDealer(dealer.clone()))?;
                let booking = Booking::new(vehicle_id, dealer.id, ServiceType::from(service_type),
                                           date, time, notes.as_deref());
                info!("Booking {} at {}", booking.service_type.as_str(), dealer.dealer_name);
                println!("Booked {} at {} on {} {} ({})",
                         booking.service_type, dealer.dealer_name,
                         date.format("%d %b %Y"), time.format("%H:%M"), booking.status);
                garage.bookings.push(booking);
                store.save(&garage)?;
            }
            BookingCommand::List => list_bookings(&garage)
        },
        Commands::Dealer { command } => match command {
            DealerCommand::Add { name, address, city, state, pincode, contact, opens, closes } => {
                let mut dealer = Dealer::new(&name, &address, &city, &state, &pincode, &contact);
                dealer.opening_time = opens;
                dealer.closing_time = closes;
                info!("Adding dealer {}", dealer.dealer_name);
                println!("Added dealer {} at {}", dealer.dealer_name, dealer.location());
                garage.dealers.push(dealer);
                store.save(&garage)?;
            }
            DealerCommand::List => list_dealers(&garage)
        },
        Commands::Warranty => list_warranties(&garage, today),
        Commands::Alerts => list_alerts(&garage, today)
    }
    Ok(())
}

fn lookup_vehicle<'a>(garage: &'a Garage, registration: &str) -> Result<&'a Vehicle, CommandError> {
    garage.vehicle_by_registration(registration)
        .ok_or_else(|| CommandError::UnknownVehicle(registration.to_uppercase()))
}

fn list_vehicles(garage: &Garage) {
    if garage.vehicles.is_empty() {
        println!("No vehicles registered");
        return;
    }
    for vehicle in garage.vehicles.iter()
        .sorted_by(|a, b| a.registration_number.cmp(&b.registration_number)) {
        println!("{} {} - {} km", vehicle.vehicle_year, vehicle.description(),
                 vehicle.current_kms);
    }
}

fn list_purchases(garage: &Garage) {
    if garage.tyre_purchases.is_empty() {
        println!("No tyre purchases recorded");
        return;
    }
    for purchase in garage.tyre_purchases.iter()
        .sorted_by_key(|p| p.purchase_date)
        .rev() {
        let vehicle = garage.vehicle_by_id(purchase.vehicle_id)
            .map(|v| v.description())
            .unwrap_or_else(|| "Unknown vehicle".to_string());
        let mut line = format!("{} - {} x{} - {}",
                               purchase.purchase_date.format("%d %b %Y"),
                               purchase.tyre_brand, purchase.number_of_tyres, vehicle);
        if let Some(serial) = &purchase.tyre_serial_number {
            line.push_str(&format!(" - serial {}", serial));
        }
        if let Some(end_date) = purchase.warranty_end_date {
            line.push_str(&format!(" - warranty until {}", end_date.format("%d %b %Y")));
        }
        println!("{}", line);
    }
}

fn list_services(garage: &Garage) {
    if garage.services.is_empty() {
        println!("No service records yet");
        return;
    }
    for service in garage.services.iter()
        .sorted_by_key(|s| s.service_date)
        .rev() {
        let vehicle = garage.vehicle_by_id(service.vehicle_id)
            .map(|v| v.description())
            .unwrap_or_else(|| "Unknown vehicle".to_string());
        let mut line = format!("{} - {} - {} - {} km",
                               service.service_date.format("%d %b %Y"),
                               service.service_type, vehicle, service.current_kms);
        if let Some(notes) = &service.notes {
            line.push_str(&format!(" - {}", notes));
        }
        println!("{}", line);
    }
    for vehicle in garage.vehicles.iter()
        .sorted_by(|a, b| a.registration_number.cmp(&b.registration_number)) {
        if let Some(due_kms) = next_alignment_due_kms(vehicle, &garage.services) {
            println!("{}: next wheel alignment due at {} km", vehicle.description(), due_kms);
        }
    }
}

fn list_bookings(garage: &Garage) {
    if garage.bookings.is_empty() {
        println!("No bookings yet");
        return;
    }
    for booking in garage.bookings.iter()
        .sorted_by_key(|b| (b.booking_date, b.booking_time)) {
        let vehicle = garage.vehicle_by_id(booking.vehicle_id)
            .map(|v| v.description())
            .unwrap_or_else(|| "Unknown vehicle".to_string());
        let dealer = garage.dealer_by_id(booking.dealer_id)
            .map(|d| d.dealer_name.clone())
            .unwrap_or_else(|| "Unknown dealer".to_string());
        println!("{} {} - {} - {} at {} [{}]",
                 booking.booking_date.format("%d %b %Y"),
                 booking.booking_time.format("%H:%M"),
                 booking.service_type, vehicle, dealer, booking.status);
    }
}

fn list_dealers(garage: &Garage) {
    if garage.dealers.is_empty() {
        println!("No dealers on file");
        return;
    }
    for dealer in garage.dealers.iter()
        .sorted_by(|a, b| a.dealer_name.cmp(&b.dealer_name)) {
        let mut line = format!("{} - {} - {}",
                               dealer.dealer_name, dealer.location(), dealer.contact_number);
        if let (Some(opens), Some(closes)) = (dealer.opening_time, dealer.closing_time) {
            line.push_str(&format!(" - open {} to {}",
                                   opens.format("%H:%M"), closes.format("%H:%M")));
        }
        if !dealer.is_active {
            line.push_str(" [inactive]");
        }
        println!("{}", line);
    }
}

fn list_warranties(garage: &Garage, today: NaiveDate) {
    let tracked = garage.tyre_purchases.iter()
        .filter_map(|purchase| {
            purchase.warranty_status(today).map(|status| (purchase, status))
        })
        .sorted_by_key(|(purchase, _)| purchase.warranty_end_date)
        .collect::<Vec<_>>();
    if tracked.is_empty() {
        println!("No warranties to track");
        return;
    }
    for (purchase, status) in tracked {
        let vehicle = garage.vehicle_by_id(purchase.vehicle_id)
            .map(|v| v.description())
            .unwrap_or_else(|| "Unknown vehicle".to_string());
        println!("[{}] {} x{} - {} - {}",
                 status.as_str(), purchase.tyre_brand, purchase.number_of_tyres,
                 vehicle, status);
    }
}

fn list_alerts(garage: &Garage, today: NaiveDate) {
    let alerts = gather_alerts(garage, today);
    if alerts.is_empty() {
        println!("No maintenance reminders");
        return;
    }
    println!("Maintenance reminders");
    for alert in alerts {
        println!("  - {}", alert);
    }
}
