//! Room assignment and nightly pricing
//!
//! The rate card is fixed: three room types with per-night prices and a
//! fallback rate for anything unrecognized. Rooms are drawn at random from
//! floors 1-3, rooms 1-8 per floor, with no occupancy check.

use chrono::NaiveDate;
use rand::Rng;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-night fallback for room types missing from the rate card
pub const DEFAULT_NIGHTLY_RATE: i64 = 3000;

/// Per-night rate for a room type
pub fn nightly_rate(room_type: &str) -> i64 {
    match room_type {
        "AC Deluxe" => 5000,
        "AC Standard" => 3500,
        "Non-AC" => 2500,
        _ => DEFAULT_NIGHTLY_RATE,
    }
}

/// Number of nights between two `YYYY-MM-DD` dates
///
/// A same-day stay counts as one night. No further range checks: the
/// difference is taken as-is.
pub fn nights(check_in: &str, check_out: &str) -> Result<i64, chrono::ParseError> {
    let d1 = NaiveDate::parse_from_str(check_in, DATE_FORMAT)?;
    let d2 = NaiveDate::parse_from_str(check_out, DATE_FORMAT)?;
    let days = (d2 - d1).num_days();
    Ok(if days == 0 { 1 } else { days })
}

/// Total price for a stay: nightly rate times night count
pub fn total_price(
    room_type: &str,
    check_in: &str,
    check_out: &str,
) -> Result<i64, chrono::ParseError> {
    Ok(nightly_rate(room_type) * nights(check_in, check_out)?)
}

/// Pick a room at random: `"{floor}0{room}"`, floor 1-3, room 1-8
///
/// Assignment is blind to current occupancy; collisions are possible and
/// resolved only at checkout (all colliding bookings leave together).
pub fn assign_room() -> String {
    let mut rng = rand::thread_rng();
    let floor: u8 = rng.gen_range(1..=3);
    let room: u8 = rng.gen_range(1..=8);
    format!("{floor}0{room}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_card_matches_room_types() {
        assert_eq!(nightly_rate("AC Deluxe"), 5000);
        assert_eq!(nightly_rate("AC Standard"), 3500);
        assert_eq!(nightly_rate("Non-AC"), 2500);
    }

    #[test]
    fn unknown_room_type_uses_fallback_rate() {
        assert_eq!(nightly_rate("Penthouse"), DEFAULT_NIGHTLY_RATE);
        assert_eq!(nightly_rate(""), DEFAULT_NIGHTLY_RATE);
    }

    #[test]
    fn multi_night_stay_multiplies_rate() {
        let price = total_price("AC Standard", "2024-03-01", "2024-03-04").unwrap();
        assert_eq!(price, 3500 * 3);
    }

    #[test]
    fn same_day_stay_counts_as_one_night() {
        assert_eq!(nights("2024-03-01", "2024-03-01").unwrap(), 1);
        let price = total_price("Non-AC", "2024-03-01", "2024-03-01").unwrap();
        assert_eq!(price, 2500);
    }

    #[test]
    fn unparsable_dates_are_rejected() {
        assert!(nights("01/03/2024", "2024-03-04").is_err());
        assert!(nights("2024-03-01", "tomorrow").is_err());
        assert!(total_price("Non-AC", "", "2024-03-04").is_err());
    }

    #[test]
    fn assigned_rooms_stay_within_the_hotel() {
        for _ in 0..100 {
            let room = assign_room();
            assert_eq!(room.len(), 3);
            let floor = room.chars().next().unwrap();
            assert!(('1'..='3').contains(&floor));
            assert_eq!(room.chars().nth(1).unwrap(), '0');
            let number = room.chars().nth(2).unwrap();
            assert!(('1'..='8').contains(&number));
        }
    }
}
