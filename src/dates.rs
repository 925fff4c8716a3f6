use std::fmt;

use chrono::{Days, NaiveDate};

use crate::error::{CalResult, CalendarError};

/// Length of the range, in days, when no end date is given.
pub const DEFAULT_SPAN_DAYS: u64 = 365 * 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date. Used directly as a clap value parser.
///
/// The year must be exactly four digits; month and day take one or two.
pub fn parse_date(value: &str) -> CalResult<NaiveDate> {
    if !is_well_formed(value) {
        return Err(CalendarError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

// chrono's `%Y` also takes signs, short years and leading whitespace.
fn is_well_formed(value: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

/// Inclusive range of calendar dates.
///
/// A range whose start lies after its end is kept as given and simply
/// yields no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Resolves the optional command line dates into a concrete range.
    ///
    /// * no dates: `today` through `today + DEFAULT_SPAN_DAYS`
    /// * start only: `start` through `start + DEFAULT_SPAN_DAYS`
    /// * both: used as given, never reordered
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> CalResult<Self> {
        let start = start.unwrap_or(today);
        let end = match end {
            Some(end) => end,
            None => start
                .checked_add_days(Days::new(DEFAULT_SPAN_DAYS))
                .ok_or(CalendarError::DateOutOfRange(start, DEFAULT_SPAN_DAYS))?,
        };

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every date of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.end.signed_duration_since(self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
