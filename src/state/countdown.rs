//! Launch countdown shown on the landing page

/// Remaining time until launch, decremented once per second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Countdown {
    /// Starting value of the landing page clock
    pub const INITIAL: Countdown = Countdown::new(7, 24, 54, 11);

    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Advance by one second, borrowing from the next larger unit on
    /// underflow. Stays at zero once finished. Returns whether it changed.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            self.days -= 1;
            self.hours = 23;
            self.minutes = 59;
            self.seconds = 59;
        }
        true
    }

    /// Units in display order with their labels
    pub fn units(&self) -> [(u32, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}
