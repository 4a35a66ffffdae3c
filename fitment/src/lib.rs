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

mod comparison;
mod size;

pub use comparison::{compare, TyreComparison, FITMENT_TOLERANCE_PERCENT};
pub use size::TyreSize;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitmentError {
    #[error("Invalid tyre size format. Use format: 185/65 R15")]
    InvalidSizeFormat
}
