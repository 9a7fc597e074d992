//! Countdown arithmetic: target selection and remaining-time decomposition.
//!
//! The decomposition and padding are pure functions so the display math can
//! be tested without a browser clock.

use js_sys::Date;

/// Milliseconds per whole second.
const MS_PER_SEC: f64 = 1000.0;

/// Remaining time split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeParts {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl TimeParts {
	/// The all-zero display shown once the target instant has passed.
	pub const ZERO: Self = Self {
		days: 0,
		hours: 0,
		minutes: 0,
		seconds: 0,
	};
}

/// Next Dec 25, 00:00:00 local time, that has not yet passed.
///
/// At or after the instant itself the target rolls over to the following
/// year. Computed once at mount; a session that crosses the instant keeps
/// the old target and displays zeros.
pub fn next_target(now: &Date) -> Date {
	let year = now.get_full_year();
	// Month index 11 = December.
	let candidate = Date::new_with_year_month_day_hr_min_sec(year, 11, 25, 0, 0, 0);
	if now.get_time() >= candidate.get_time() {
		Date::new_with_year_month_day_hr_min_sec(year + 1, 11, 25, 0, 0, 0)
	} else {
		candidate
	}
}

/// Splits a remaining duration in milliseconds into whole days, hours,
/// minutes, and seconds by successive division. Non-positive durations
/// collapse to all zeros.
pub fn decompose(diff_ms: f64) -> TimeParts {
	if diff_ms <= 0.0 {
		return TimeParts::ZERO;
	}
	let total = (diff_ms / MS_PER_SEC) as u64;
	TimeParts {
		days: total / 86_400,
		hours: total % 86_400 / 3_600,
		minutes: total % 3_600 / 60,
		seconds: total % 60,
	}
}

/// Zero-pads a unit value to at least two digits. Values of 100 or more
/// (long day counts) keep their full width.
pub fn pad(value: u64) -> String {
	format!("{value:02}")
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn elapsed_renders_zeros() {
		assert_eq!(decompose(0.0), TimeParts::ZERO);
		assert_eq!(decompose(-5_000.0), TimeParts::ZERO);
	}

	#[test]
	fn one_of_each_unit() {
		// 90 061 s = 1 day, 1 hour, 1 minute, 1 second.
		let parts = decompose(90_061_000.0);
		assert_eq!(
			parts,
			TimeParts {
				days: 1,
				hours: 1,
				minutes: 1,
				seconds: 1,
			}
		);
	}

	#[test]
	fn sub_second_remainder_is_dropped() {
		assert_eq!(decompose(999.0), TimeParts::ZERO);
		assert_eq!(decompose(1_000.0).seconds, 1);
		assert_eq!(decompose(1_999.0).seconds, 1);
	}

	#[test]
	fn units_roll_at_their_bounds() {
		let just_under_a_day = decompose(86_400_000.0 - 1_000.0);
		assert_eq!(just_under_a_day.days, 0);
		assert_eq!(just_under_a_day.hours, 23);
		assert_eq!(just_under_a_day.minutes, 59);
		assert_eq!(just_under_a_day.seconds, 59);

		let a_day = decompose(86_400_000.0);
		assert_eq!(a_day.days, 1);
		assert_eq!(a_day.hours, 0);
	}

	#[test]
	fn long_countdowns_keep_full_day_count() {
		let parts = decompose(364.0 * 86_400_000.0 + 23.0 * 3_600_000.0);
		assert_eq!(parts.days, 364);
		assert_eq!(parts.hours, 23);
	}

	#[test]
	fn padding_is_two_digit_minimum() {
		assert_eq!(pad(0), "00");
		assert_eq!(pad(9), "09");
		assert_eq!(pad(10), "10");
		assert_eq!(pad(59), "59");
		assert_eq!(pad(123), "123");
	}
}
