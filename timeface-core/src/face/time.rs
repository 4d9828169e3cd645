//! Clock time and gaze angles

use crate::geometry::TRIG_MAX_ANGLE;

/// Minutes in a 12-hour dial
const DIAL_MINUTES: i32 = 12 * 60;

/// Wall-clock time at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time
    ///
    /// Out-of-range fields are clamped (hour to 23, minute to 59).
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    /// Hour, 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0-59
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed on a 12-hour dial (0-719)
    pub fn dial_minutes(&self) -> i32 {
        (self.hour % 12) as i32 * 60 + self.minute as i32
    }

    /// Gaze angle for the hour eye
    ///
    /// A 12-hour dial treated as a 720-minute circle.
    pub fn hour_angle(&self) -> i32 {
        self.dial_minutes() * TRIG_MAX_ANGLE / DIAL_MINUTES
    }

    /// Gaze angle for the minute eye
    pub fn minute_angle(&self) -> i32 {
        self.minute as i32 * TRIG_MAX_ANGLE / 60
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveTime> for ClockTime {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self::new(time.hour() as u8, time.minute() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamps_fields() {
        let time = ClockTime::new(30, 75);
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);
    }

    #[test]
    fn test_three_oclock_is_quarter_turn() {
        assert_eq!(ClockTime::new(3, 0).hour_angle(), TRIG_MAX_ANGLE / 4);
        assert_eq!(ClockTime::new(15, 0).hour_angle(), TRIG_MAX_ANGLE / 4);
    }

    #[test]
    fn test_midnight_and_noon_point_up() {
        assert_eq!(ClockTime::new(0, 0).hour_angle(), 0);
        assert_eq!(ClockTime::new(12, 0).hour_angle(), 0);
        assert_eq!(ClockTime::new(12, 0).minute_angle(), 0);
    }

    #[test]
    fn test_half_past_six() {
        let time = ClockTime::new(6, 30);
        assert_eq!(time.hour_angle(), 390 * TRIG_MAX_ANGLE / 720);
        assert_eq!(time.minute_angle(), TRIG_MAX_ANGLE / 2);
    }

    #[test]
    fn test_hour_angle_advances_with_minutes() {
        assert!(ClockTime::new(3, 30).hour_angle() > ClockTime::new(3, 0).hour_angle());
        assert!(ClockTime::new(3, 30).hour_angle() < ClockTime::new(4, 0).hour_angle());
    }

    proptest! {
        #[test]
        fn prop_hour_angle_period_12h(hour in 0u8..12, minute in 0u8..60) {
            let morning = ClockTime::new(hour, minute);
            let evening = ClockTime::new(hour + 12, minute);
            prop_assert_eq!(morning.hour_angle(), evening.hour_angle());
        }

        #[test]
        fn prop_minute_angle_ignores_hour(a in 0u8..24, b in 0u8..24, minute in 0u8..60) {
            prop_assert_eq!(
                ClockTime::new(a, minute).minute_angle(),
                ClockTime::new(b, minute).minute_angle()
            );
        }

        #[test]
        fn prop_angles_in_range(hour in 0u8..24, minute in 0u8..60) {
            let time = ClockTime::new(hour, minute);
            prop_assert!((0..TRIG_MAX_ANGLE).contains(&time.hour_angle()));
            prop_assert!((0..TRIG_MAX_ANGLE).contains(&time.minute_angle()));
        }
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_naive_time() {
        let naive = chrono::NaiveTime::from_hms_opt(18, 42, 7).unwrap();
        assert_eq!(ClockTime::from(naive), ClockTime::new(18, 42));
    }
}
