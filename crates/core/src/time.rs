//! Decomposition of a wall-clock time into hand positions.

use chrono::{NaiveTime, Timelike};

use crate::config::SecondMotion;
use crate::error::TimeComponentError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A time of day, kept as seconds since midnight with the sub-second part
/// retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialTime {
    seconds_of_day: f64,
}

impl DialTime {
    /// Build from raw seconds since midnight. Values outside one day wrap.
    pub fn from_seconds_of_day(seconds: f64) -> Self {
        let wrapped = seconds.rem_euclid(SECONDS_PER_DAY);
        // Tiny negative inputs round up to exactly one full day.
        let seconds_of_day = if wrapped >= SECONDS_PER_DAY { 0.0 } else { wrapped };
        Self { seconds_of_day }
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self::from_seconds_of_day(
            f64::from(hour) * SECONDS_PER_HOUR
                + f64::from(minute) * SECONDS_PER_MINUTE
                + f64::from(second),
        )
    }

    pub fn seconds_of_day(&self) -> f64 {
        self.seconds_of_day
    }

    /// Whole seconds within the current minute.
    pub fn seconds(&self) -> u32 {
        (self.seconds_of_day % SECONDS_PER_MINUTE).floor() as u32
    }

    /// Minutes within the current hour, with the seconds as a fraction.
    pub fn minutes(&self) -> f64 {
        (self.seconds_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Hours since midnight (24-hour), with minutes and seconds as a fraction.
    pub fn hours(&self) -> f64 {
        self.seconds_of_day / SECONDS_PER_HOUR
    }

    /// Position of the second hand around the dial.
    ///
    /// With [`SecondMotion::Tick`] the hand jumps once per whole second;
    /// [`SecondMotion::Sweep`] keeps the sub-second part.
    pub fn second_fraction(&self, motion: SecondMotion) -> Result<f64, TimeComponentError> {
        let seconds = self.seconds();
        if seconds > 59 {
            return Err(TimeComponentError::Seconds(seconds));
        }
        Ok(match motion {
            SecondMotion::Tick => f64::from(seconds) / SECONDS_PER_MINUTE,
            SecondMotion::Sweep => (self.seconds_of_day % SECONDS_PER_MINUTE) / SECONDS_PER_MINUTE,
        })
    }

    pub fn minute_fraction(&self) -> Result<f64, TimeComponentError> {
        let minutes = self.minutes();
        if !(0.0..60.0).contains(&minutes) {
            return Err(TimeComponentError::Minutes(minutes));
        }
        Ok(minutes / 60.0)
    }

    /// Position of the hour hand; wraps every 12 hours.
    pub fn hour_fraction(&self) -> Result<f64, TimeComponentError> {
        let hours = self.hours();
        if !(0.0..24.0).contains(&hours) {
            return Err(TimeComponentError::Hours(hours));
        }
        Ok((hours % 12.0) / 12.0)
    }
}

impl From<NaiveTime> for DialTime {
    fn from(t: NaiveTime) -> Self {
        // A leap second is shown as :59 held for two seconds.
        let nanos = t.nanosecond().min(999_999_999);
        Self::from_seconds_of_day(
            f64::from(t.num_seconds_from_midnight()) + f64::from(nanos) / 1e9,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn midnight_is_straight_up() {
        let t = DialTime::from_hms(0, 0, 0);
        assert_eq!(t.second_fraction(SecondMotion::Tick), Ok(0.0));
        assert_eq!(t.minute_fraction(), Ok(0.0));
        assert_eq!(t.hour_fraction(), Ok(0.0));
    }

    #[test]
    fn half_minute_points_down() {
        let t = DialTime::from_hms(0, 0, 30);
        assert_eq!(t.second_fraction(SecondMotion::Tick), Ok(0.5));
    }

    #[test]
    fn noon_wraps_to_zero() {
        let t = DialTime::from_hms(12, 0, 0);
        assert_eq!(t.hour_fraction(), Ok(0.0));
    }

    #[test]
    fn minute_fraction_stays_below_one() {
        let t = DialTime::from_seconds_of_day(3_599.999);
        let f = t.minute_fraction().unwrap_or(1.0);
        assert!(f < 1.0);
        assert!((f * 60.0 - 59.999_983_333).abs() < 1e-6, "f={f}");
    }

    #[test]
    fn tick_truncates_but_sweep_does_not() {
        let t = DialTime::from_seconds_of_day(15.75);
        assert_eq!(t.second_fraction(SecondMotion::Tick), Ok(0.25));
        let sweep = t.second_fraction(SecondMotion::Sweep).unwrap_or(0.0);
        assert!((sweep - 15.75 / 60.0).abs() < EPS);
    }

    #[test]
    fn minute_and_hour_hands_move_continuously() {
        let t = DialTime::from_hms(3, 30, 0);
        assert!((t.minute_fraction().unwrap_or(0.0) - 0.5).abs() < EPS);
        assert!((t.hour_fraction().unwrap_or(0.0) - 3.5 / 12.0).abs() < EPS);
    }

    #[test]
    fn out_of_day_values_wrap() {
        let t = DialTime::from_seconds_of_day(86_400.0 + 61.0);
        assert_eq!(t.seconds(), 1);
        let t = DialTime::from_seconds_of_day(-1.0);
        assert_eq!(t.seconds(), 59);
        assert!(t.hour_fraction().is_ok());
    }

    #[test]
    fn tiny_negative_wraps_to_midnight() {
        let t = DialTime::from_seconds_of_day(-1e-12);
        assert!(t.seconds_of_day() < SECONDS_PER_DAY);
        assert_eq!(t.hour_fraction(), Ok(0.0));
        assert!(t.minute_fraction().is_ok());
    }

    #[test]
    fn non_finite_input_is_reported() {
        let t = DialTime::from_seconds_of_day(f64::NAN);
        assert!(t.minute_fraction().is_err());
        assert!(t.hour_fraction().is_err());
    }

    #[test]
    fn from_naive_time_keeps_subseconds() {
        let nt = NaiveTime::from_hms_milli_opt(10, 15, 30, 500).unwrap_or_default();
        let t = DialTime::from(nt);
        assert!((t.seconds_of_day() - 36_930.5).abs() < EPS);
        assert_eq!(t.seconds(), 30);
    }

    #[test]
    fn leap_second_holds_at_fifty_nine() {
        let nt = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap_or_default();
        let t = DialTime::from(nt);
        assert_eq!(t.seconds(), 59);
        assert!(t.hour_fraction().is_ok());
    }
}
