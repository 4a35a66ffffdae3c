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
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use utils::units::inches_to_mm;

use crate::FitmentError;

// Sidewall notation: a three digit section width, a two digit aspect ratio and
// a two digit rim diameter. The separator letter accepts either case and any
// amount of surrounding whitespace.
const SIZE_PATTERN: &'static str = r"^(\d{3})/(\d{2})\s*[Rr]\s*(\d{2})$";

fn size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SIZE_PATTERN).expect("sidewall notation pattern is valid"))
}

/// A tyre size as printed on the sidewall, e.g. "185/65 R15".
///
/// `width` is the section width in millimetres, `aspect_ratio` the sidewall
/// height as a percentage of the width and `rim_diameter` the rim size in
/// inches. The fields hold the literal integers taken from the input string;
/// no further range checks are applied, so physically meaningless sizes are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TyreSize {
    pub width: u32,
    pub aspect_ratio: u32,
    pub rim_diameter: u32
}

impl TyreSize {
    pub fn parse(input: &str) -> Result<TyreSize, FitmentError> {
        let trimmed = input.trim();
        let captures = match size_pattern().captures(trimmed) {
            Some(captures) => captures,
            None => {
                warn!("Rejected tyre size string '{}'", trimmed);
                return Err(FitmentError::InvalidSizeFormat);
            }
        };
        Ok(TyreSize {
            width: captures[1].parse().map_err(|_| FitmentError::InvalidSizeFormat)?,
            aspect_ratio: captures[2].parse().map_err(|_| FitmentError::InvalidSizeFormat)?,
            rim_diameter: captures[3].parse().map_err(|_| FitmentError::InvalidSizeFormat)?
        })
    }

    pub fn sidewall_height_mm(&self) -> f64 {
        (self.width * self.aspect_ratio) as f64 / 100.0
    }

    pub fn overall_diameter_mm(&self) -> f64 {
        (2.0 * self.sidewall_height_mm()) + inches_to_mm(self.rim_diameter as f64)
    }
}

impl Display for TyreSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}/{:02} R{:02}", self.width, self.aspect_ratio, self.rim_diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::numeric::round_float_to;

    #[test]
    fn parses_canonical_form() {
        let size = TyreSize::parse("185/65 R15").unwrap();
        assert_eq!(size, TyreSize { width: 185, aspect_ratio: 65, rim_diameter: 15 });
    }

    #[test]
    fn parses_separator_variants() {
        let expected = TyreSize { width: 185, aspect_ratio: 65, rim_diameter: 15 };
        assert_eq!(TyreSize::parse("185/65R15").unwrap(), expected);
        assert_eq!(TyreSize::parse("185/65 r15").unwrap(), expected);
        assert_eq!(TyreSize::parse("185/65r15").unwrap(), expected);
        assert_eq!(TyreSize::parse("185/65  R  15").unwrap(), expected);
        assert_eq!(TyreSize::parse("185/65 R 15").unwrap(), expected);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let expected = TyreSize { width: 195, aspect_ratio: 60, rim_diameter: 15 };
        assert_eq!(TyreSize::parse("  195/60 R15  ").unwrap(), expected);
        assert_eq!(TyreSize::parse("\t195/60 R15\n").unwrap(), expected);
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert_eq!(TyreSize::parse("1850/65R15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("85/65R15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/6R15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/655R15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/65R5"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/65R155"), Err(FitmentError::InvalidSizeFormat));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(TyreSize::parse("invalid"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse(""), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185-65R15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/65X15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/65 15"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("185/65R15 extra"), Err(FitmentError::InvalidSizeFormat));
        assert_eq!(TyreSize::parse("R15 185/65"), Err(FitmentError::InvalidSizeFormat));
    }

    #[test]
    fn unchecked_numeric_ranges_parse() {
        let size = TyreSize::parse("000/00 R00").unwrap();
        assert_eq!(size, TyreSize { width: 0, aspect_ratio: 0, rim_diameter: 0 });
    }

    #[test]
    fn display_round_trips() {
        for (width, aspect_ratio, rim_diameter) in [(185, 65, 15), (195, 60, 15), (215, 45, 17), (305, 30, 20)] {
            let size = TyreSize { width, aspect_ratio, rim_diameter };
            assert_eq!(TyreSize::parse(&size.to_string()).unwrap(), size);
            assert_eq!(TyreSize::parse(&size.to_string().to_lowercase()).unwrap(), size);
            assert_eq!(TyreSize::parse(&size.to_string().replace(' ', "")).unwrap(), size);
        }
    }

    #[test]
    fn geometry_for_reference_size() {
        let size = TyreSize::parse("185/65 R15").unwrap();
        assert_eq!(round_float_to(size.sidewall_height_mm(), 2), 120.25);
        assert_eq!(round_float_to(size.overall_diameter_mm(), 1), 621.5);
    }
}
