use crate::date::{days_in_month, weekday_of, CalendarDate, Month};

/// A single slot of the month grid: either alignment padding or a day
/// of the rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(CalendarDate),
}

impl Cell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            Cell::Blank => None,
            Cell::Day(date) => Some(*date),
        }
    }
}

/// Exactly 7 cells, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week([Cell; 7]);

impl Week {
    pub fn cells(&self) -> &[Cell; 7] {
        &self.0
    }
}

/// One calendar month, partitioned into Sunday-first weeks with blank
/// padding at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid for (year, month).
    ///
    /// The first week is padded with one blank per weekday preceding
    /// day 1; the last week is padded to a full 7 cells. Total for any
    /// month: 4 to 6 weeks.
    pub fn build(year: i32, month: Month) -> MonthGrid {
        let leading = weekday_of(year, month, 1) as usize;
        let total_days = days_in_month(year, month);

        let mut weeks = Vec::with_capacity(6);
        let mut week = [Cell::Blank; 7];
        let mut column = leading;

        for day in 1..=total_days {
            week[column] = Cell::Day(CalendarDate::from_parts(year, month, day));
            column += 1;
            if column == 7 {
                weeks.push(Week(week));
                week = [Cell::Blank; 7];
                column = 0;
            }
        }

        if column != 0 {
            weeks.push(Week(week));
        }

        MonthGrid { year, month, weeks }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All day cells of the month in ascending date order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.weeks
            .iter()
            .flat_map(|week| week.cells().iter())
            .filter_map(Cell::date)
    }
}
