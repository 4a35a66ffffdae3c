/*
 * Copyright (c):
 * 2024 zephyrj
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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Renders with an explicit '+' on positive values; zero and negative values
/// render as-is
pub fn signed_float_str(val: f64, decimal_places: usize) -> String {
    if val > 0.0 {
        format!("+{:.*}", decimal_places, val)
    } else {
        format!("{:.*}", decimal_places, val)
    }
}

pub fn signed_int_str(val: i32) -> String {
    if val > 0 {
        format!("+{}", val)
    } else {
        format!("{}", val)
    }
}

#[cfg(test)]
mod tests {
    use crate::numeric::{round_float_to, signed_float_str, signed_int_str};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(622.3000000001, 1), 622.3);
        assert_eq!(round_float_to(-1.274999, 2), -1.27);
        assert_eq!(round_float_to(1.275001, 2), 1.28);
        assert_eq!(round_float_to(0.0, 2), 0.0);
    }

    #[test]
    fn signed_float_str_tests() {
        assert_eq!(signed_float_str(7.94, 1), "+7.9");
        assert_eq!(signed_float_str(-7.94, 1), "-7.9");
        assert_eq!(signed_float_str(0.0, 1), "0.0");
        assert_eq!(signed_float_str(1.266, 2), "+1.27");
    }

    #[test]
    fn signed_int_str_tests() {
        assert_eq!(signed_int_str(10), "+10");
        assert_eq!(signed_int_str(0), "0");
        assert_eq!(signed_int_str(-30), "-30");
    }
}
