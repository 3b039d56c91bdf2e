//! Time of day for the day/night cycle

/// Hour within a 24-hour cycle plus elapsed day count.
#[derive(Clone, Debug)]
pub struct TimeOfDay {
    /// Current hour, in the range `[0.0, 24.0)`.
    hour: f32,
    /// Number of full days that have elapsed.
    day_count: u32,
}

impl TimeOfDay {
    /// Start at the given hour (clamped to `[0, 24)`, 24 wraps to 0).
    pub fn new(start_hour: f32) -> Self {
        let mut t = Self { hour: 0.0, day_count: 0 };
        t.set(start_hour);
        t
    }

    /// Advance by `dt_seconds` of real time, where `day_length_seconds` real
    /// seconds make one in-game day. A non-positive day length freezes time.
    pub fn advance(&mut self, dt_seconds: f32, day_length_seconds: f32) {
        if day_length_seconds <= 0.0 || dt_seconds <= 0.0 {
            return;
        }
        let total = self.hour + dt_seconds * 24.0 / day_length_seconds;
        self.day_count += (total / 24.0).floor() as u32;
        self.hour = total.rem_euclid(24.0);
    }

    /// Set the hour directly.
    pub fn set(&mut self, hour: f32) {
        self.hour = hour.clamp(0.0, 24.0);
        if self.hour >= 24.0 {
            self.hour = 0.0;
        }
    }

    #[inline]
    pub fn hour(&self) -> f32 {
        self.hour
    }

    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Sun below the horizon
    #[inline]
    pub fn is_night(&self) -> bool {
        self.hour < 6.0 || self.hour >= 19.0
    }
}
