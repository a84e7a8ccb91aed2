//! UTC time-of-day and calendar date as carried by NMEA fields.
//!
//! Both types use `-1` in every component to mark a field that was empty in the
//! sentence, so a scanned record never holds an uninitialized value.

/// Time of day, `hhmmss` with any sub-second digits dropped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
}

impl Time {
    /// Value written for an empty time field.
    pub const EMPTY: Self = Self {
        hour: -1,
        minute: -1,
        second: -1,
    };

    /// Returns `true` if every component is within its clock range.
    pub fn is_valid(&self) -> bool {
        (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..61).contains(&self.second)
    }

    /// Converts to a [`time::Time`], or `None` for an empty or out-of-range time.
    #[cfg(feature = "time")]
    pub fn to_time(&self) -> Option<time::Time> {
        let hour = u8::try_from(self.hour).ok()?;
        let minute = u8::try_from(self.minute).ok()?;
        let second = u8::try_from(self.second).ok()?;
        time::Time::from_hms(hour, minute, second).ok()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Calendar date.
///
/// Dates scanned from a `ddmmyy` field carry the year offset by 2000.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    /// Value written for an empty date field.
    pub const EMPTY: Self = Self {
        year: -1,
        month: -1,
        day: -1,
    };

    /// Returns `true` if month and day are within calendar range.
    ///
    /// The day is not checked against the length of the month.
    pub fn is_valid(&self) -> bool {
        self.year >= 0 && (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }

    /// Converts to a [`time::Date`], or `None` for an empty or impossible date.
    #[cfg(feature = "time")]
    pub fn to_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(u8::try_from(self.month).ok()?).ok()?;
        let day = u8::try_from(self.day).ok()?;
        time::Date::from_calendar_date(self.year, month, day).ok()
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::EMPTY
    }
}
