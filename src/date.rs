use chrono::{Datelike, Local};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Zero-based index of the month within the year.
    pub fn ord(&self) -> u32 {
        match *self {
            Month::January => 0,
            Month::February => 1,
            Month::March => 2,
            Month::April => 3,
            Month::May => 4,
            Month::June => 5,
            Month::July => 6,
            Month::August => 7,
            Month::September => 8,
            Month::October => 9,
            Month::November => 10,
            Month::December => 11,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn succ(&self) -> Month {
        Month::try_from((self.ord() + 1) % 12).expect("month index is taken modulo 12")
    }

    pub fn pred(&self) -> Month {
        Month::try_from((self.ord() + 11) % 12).expect("month index is taken modulo 12")
    }
}

impl TryFrom<u32> for Month {
    type Error = InvalidDate;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Month::January),
            1 => Ok(Month::February),
            2 => Ok(Month::March),
            3 => Ok(Month::April),
            4 => Ok(Month::May),
            5 => Ok(Month::June),
            6 => Ok(Month::July),
            7 => Ok(Month::August),
            8 => Ok(Month::September),
            9 => Ok(Month::October),
            10 => Ok(Month::November),
            11 => Ok(Month::December),
            _ => Err(InvalidDate::MonthIndex(value)),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDate {
    MonthIndex(u32),
    Day { year: i32, month: Month, day: u32 },
    Format(String),
}

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDate::MonthIndex(index) => {
                write!(f, "no month with index {} (expected 0..=11)", index)
            }
            InvalidDate::Day { year, month, day } => {
                write!(f, "no day {} in {} {}", day, month.name(), year)
            }
            InvalidDate::Format(input) => write!(f, "could not parse '{}' as a date", input),
        }
    }
}

impl Error for InvalidDate {}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Weekday of (year, month, day), 0 = Sunday .. 6 = Saturday.
///
/// Sakamoto's congruence with euclidean division, valid for any
/// representable year.
pub fn weekday_of(year: i32, month: Month, day: u32) -> u32 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let y = if month.ord() < 2 { year - 1 } else { year };

    (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + T[month.ord() as usize]
        + day as i32)
        .rem_euclid(7) as u32
}

/// A specific day, compared at day granularity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Result<CalendarDate, InvalidDate> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(InvalidDate::Day { year, month, day });
        }

        Ok(CalendarDate { year, month, day })
    }

    /// Like `new` but taking the zero-based month index.
    pub fn from_ymd(year: i32, month_index: u32, day: u32) -> Result<CalendarDate, InvalidDate> {
        CalendarDate::new(year, Month::try_from(month_index)?, day)
    }

    /// Internal constructor for dates that are valid by construction.
    pub(crate) fn from_parts(year: i32, month: Month, day: u32) -> CalendarDate {
        debug_assert!(day >= 1 && day <= days_in_month(year, month));
        CalendarDate { year, month, day }
    }

    /// The current date according to the host's local clock.
    pub fn today() -> CalendarDate {
        let now = Local::now();
        CalendarDate {
            year: now.year(),
            month: Month::try_from(now.month0()).expect("chrono month0 is in 0..=11"),
            day: now.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> u32 {
        weekday_of(self.year, self.month, self.day)
    }

    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self == other
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for CalendarDate {
    /// Long human-readable form, e.g. "Monday, January 15, 2024".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            WEEKDAY_NAMES[self.weekday() as usize],
            self.month.name(),
            self.day,
            self.year
        )
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDate;

    /// Parses "YYYY-MM-DD" with a one-based month number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidDate::Format(s.to_owned());

        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(err)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(err)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(err)?;

        if month == 0 || month > 12 {
            return Err(err());
        }

        CalendarDate::from_ymd(year, month - 1, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_day_counts() {
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
    }

    #[test]
    fn fixed_day_counts() {
        assert_eq!(days_in_month(2024, Month::January), 31);
        assert_eq!(days_in_month(2024, Month::April), 30);
        assert_eq!(days_in_month(2024, Month::December), 31);
    }

    #[test]
    fn weekdays_of_known_dates() {
        // 2024-01-01 was a Monday.
        assert_eq!(weekday_of(2024, Month::January, 1), 1);
        // 2024-01-06 was a Saturday.
        assert_eq!(weekday_of(2024, Month::January, 6), 6);
        // 2000-01-01 was a Saturday.
        assert_eq!(weekday_of(2000, Month::January, 1), 6);
        // 1900-01-01 was a Monday.
        assert_eq!(weekday_of(1900, Month::January, 1), 1);
        // 2015-02-01 was a Sunday.
        assert_eq!(weekday_of(2015, Month::February, 1), 0);
    }

    #[test]
    fn month_wrapping() {
        assert_eq!(Month::December.succ(), Month::January);
        assert_eq!(Month::January.pred(), Month::December);
        assert_eq!(Month::June.succ(), Month::July);
        assert_eq!(Month::June.pred(), Month::May);
    }

    #[test]
    fn month_index_bounds() {
        assert_eq!(Month::try_from(0), Ok(Month::January));
        assert_eq!(Month::try_from(11), Ok(Month::December));
        assert_eq!(Month::try_from(12), Err(InvalidDate::MonthIndex(12)));
    }

    #[test]
    fn construction_rejects_invalid_days() {
        assert!(CalendarDate::new(2024, Month::February, 29).is_ok());
        assert!(CalendarDate::new(2023, Month::February, 29).is_err());
        assert!(CalendarDate::new(2023, Month::April, 31).is_err());
        assert!(CalendarDate::new(2023, Month::April, 0).is_err());
    }

    #[test]
    fn day_granularity_equality() {
        let a = CalendarDate::new(2024, Month::January, 15).unwrap();
        let b = CalendarDate::from_ymd(2024, 0, 15).unwrap();
        let c = CalendarDate::new(2024, Month::January, 16).unwrap();
        let d = CalendarDate::new(2023, Month::January, 15).unwrap();

        assert!(a.is_same_day(&b));
        assert!(!a.is_same_day(&c));
        assert!(!a.is_same_day(&d));
    }

    #[test]
    fn long_form_display() {
        let date = CalendarDate::new(2024, Month::January, 15).unwrap();
        assert_eq!(date.to_string(), "Monday, January 15, 2024");
    }

    #[test]
    fn parse_iso_like_input() {
        let date: CalendarDate = "2024-01-15".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2024, Month::January, 15).unwrap());

        assert!("2024-13-01".parse::<CalendarDate>().is_err());
        assert!("2023-02-29".parse::<CalendarDate>().is_err());
        assert!("yesterday".parse::<CalendarDate>().is_err());
    }
}
