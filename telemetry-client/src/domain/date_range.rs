use time::{macros::format_description, Date, OffsetDateTime};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date range: {0}")]
pub struct InvalidDateRange(pub String);

/// Inclusive range of UTC calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

fn parse_day(s: &str) -> Result<Date, InvalidDateRange> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| InvalidDateRange(format!("'{s}' is not a YYYY-MM-DD date: {e}")))
}

impl DateRange {
    /// Parse ISO `YYYY-MM-DD` bounds. A missing end defaults to the start day.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, InvalidDateRange> {
        let start = parse_day(start)?;
        let end = match end {
            Some(e) => parse_day(e)?,
            None => start,
        };

        if end < start {
            return Err(InvalidDateRange(format!("end {end} is before start {start}")));
        }

        Ok(Self { start, end })
    }

    /// Start of the first day, inclusive.
    pub fn start_ts(&self) -> OffsetDateTime {
        self.start.midnight().assume_utc()
    }

    /// Start of the day after `end`, exclusive. Covers `end` through 23:59:59.999...
    pub fn end_ts_exclusive(&self) -> OffsetDateTime {
        match self.end.next_day() {
            Some(next) => next.midnight().assume_utc(),
            None => self.end.with_hms_nano(23, 59, 59, 999_999_999).map_or_else(
                |_| self.end.midnight().assume_utc(),
                |dt| dt.assume_utc(),
            ),
        }
    }

    pub fn contains(&self, ts: OffsetDateTime) -> bool {
        ts >= self.start_ts() && ts < self.end_ts_exclusive()
    }
}
