//! Weekly store schedule and the open/closed evaluation.
//!
//! Times are 24-hour `HHMM` integers (`700` = 07:00, `2300` = 23:00). A
//! closing time of `0` means the store stays open past midnight and closes at
//! 01:00 the next calendar day.

/// Closing time used by days whose `close` is the midnight marker.
pub const AFTER_MIDNIGHT_CLOSE: u16 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Map a `Date.getDay()` index (0 = Sunday) to a weekday.
    #[inline]
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayHours {
    pub open: u16,
    pub close: u16,
}

impl DayHours {
    pub const fn new(open: u16, close: u16) -> Self {
        Self { open, close }
    }

    #[inline]
    pub fn closes_after_midnight(self) -> bool {
        self.close == 0
    }

    pub fn is_open_at(self, time: u16) -> bool {
        if self.closes_after_midnight() {
            return time >= self.open || time < AFTER_MIDNIGHT_CLOSE;
        }
        time >= self.open && time < self.close
    }
}

pub type Schedule = [(Weekday, DayHours)];

pub const STORE_HOURS: [(Weekday, DayHours); 7] = [
    (Weekday::Monday, DayHours::new(700, 2300)),
    (Weekday::Tuesday, DayHours::new(700, 2300)),
    (Weekday::Wednesday, DayHours::new(700, 2300)),
    (Weekday::Thursday, DayHours::new(700, 2300)),
    (Weekday::Friday, DayHours::new(700, 0)),
    (Weekday::Saturday, DayHours::new(700, 0)),
    (Weekday::Sunday, DayHours::new(700, 0)),
];

/// Convert a wall-clock hour and minute to `HHMM`.
#[inline]
pub fn hhmm(hours: u32, minutes: u32) -> u16 {
    (hours.min(23) * 100 + minutes.min(59)) as u16
}

pub fn hours_for(schedule: &Schedule, day: Weekday) -> Option<DayHours> {
    schedule
        .iter()
        .find(|(d, _)| *d == day)
        .map(|(_, hours)| *hours)
}

/// Whether the store is open on `day` at `time`; a day without an entry is closed.
pub fn is_open_at(schedule: &Schedule, day: Weekday, time: u16) -> bool {
    hours_for(schedule, day).is_some_and(|hours| hours.is_open_at(time))
}

#[inline]
pub fn is_store_open_at(day: Weekday, time: u16) -> bool {
    is_open_at(&STORE_HOURS, day, time)
}
