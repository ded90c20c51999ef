use crate::date::{CalendarDate, Month};
use crate::grid::{Cell, MonthGrid};

/// Rendering classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Blank,
    Normal,
    Today,
    Selected,
    TodaySelected,
}

/// The date-picker state machine: the viewed month and the selection.
///
/// All transitions are synchronous and total; none of them can fail
/// for well-formed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    viewed_year: i32,
    viewed_month: Month,
    selected: Option<CalendarDate>,
}

impl PickerState {
    /// A picker viewing (year, month) with nothing selected.
    pub fn viewing(year: i32, month: Month) -> PickerState {
        PickerState {
            viewed_year: year,
            viewed_month: month,
            selected: None,
        }
    }

    pub fn viewed_year(&self) -> i32 {
        self.viewed_year
    }

    pub fn viewed_month(&self) -> Month {
        self.viewed_month
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Navigates one month back, borrowing a year on underflow. The
    /// selection is untouched.
    pub fn prev_month(&mut self) {
        if self.viewed_month == Month::January {
            self.viewed_year -= 1;
        }
        self.viewed_month = self.viewed_month.pred();
        log::debug!("viewing {} {}", self.viewed_month, self.viewed_year);
    }

    /// Navigates one month forward, carrying into the next year on
    /// overflow. The selection is untouched.
    pub fn next_month(&mut self) {
        if self.viewed_month == Month::December {
            self.viewed_year += 1;
        }
        self.viewed_month = self.viewed_month.succ();
        log::debug!("viewing {} {}", self.viewed_month, self.viewed_year);
    }

    /// Jumps the view to today's month AND selects today, replacing
    /// any prior selection.
    pub fn go_to_today(&mut self, today: CalendarDate) {
        self.viewed_year = today.year();
        self.viewed_month = today.month();
        self.selected = Some(today);
        log::debug!("jumped to today, {}", today);
    }

    /// Selects `date` without moving the view. Idempotent.
    pub fn select(&mut self, date: CalendarDate) {
        self.selected = Some(date);
        log::debug!("selected {}", date);
    }

    /// The grid for the currently viewed month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.viewed_year, self.viewed_month)
    }

    /// Classifies a cell against `today` and the current selection.
    pub fn classify(&self, cell: Cell, today: CalendarDate) -> CellKind {
        match cell {
            Cell::Blank => CellKind::Blank,
            Cell::Day(date) => {
                let is_today = date.is_same_day(&today);
                let is_selected = self.selected.map_or(false, |s| s.is_same_day(&date));
                match (is_today, is_selected) {
                    (true, true) => CellKind::TodaySelected,
                    (true, false) => CellKind::Today,
                    (false, true) => CellKind::Selected,
                    (false, false) => CellKind::Normal,
                }
            }
        }
    }

    /// Header label, e.g. "January 2024".
    pub fn header_label(&self) -> String {
        format!("{} {}", self.viewed_month.name(), self.viewed_year)
    }

    /// Footer line reflecting the selection.
    pub fn footer_text(&self) -> String {
        match self.selected {
            Some(date) => format!("Selected: {}", date),
            None => "No date selected.".to_owned(),
        }
    }
}

impl Default for PickerState {
    fn default() -> Self {
        let today = CalendarDate::today();
        PickerState::viewing(today.year(), today.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: Month, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn prev_month_wraps_into_previous_year() {
        let mut state = PickerState::viewing(2024, Month::January);
        state.prev_month();

        assert_eq!(state.viewed_year(), 2023);
        assert_eq!(state.viewed_month(), Month::December);
    }

    #[test]
    fn next_month_wraps_into_next_year() {
        let mut state = PickerState::viewing(2024, Month::December);
        state.next_month();

        assert_eq!(state.viewed_year(), 2025);
        assert_eq!(state.viewed_month(), Month::January);
    }

    #[test]
    fn navigation_keeps_selection() {
        let mut state = PickerState::viewing(2024, Month::June);
        state.select(date(2024, Month::June, 10));

        state.next_month();
        state.prev_month();
        state.prev_month();

        assert_eq!(state.selected(), Some(date(2024, Month::June, 10)));
    }

    #[test]
    fn today_jump_couples_view_and_selection() {
        let today = date(2024, Month::March, 7);
        let mut state = PickerState::viewing(2022, Month::November);
        state.select(date(2022, Month::November, 3));

        state.go_to_today(today);

        assert_eq!(state.viewed_year(), 2024);
        assert_eq!(state.viewed_month(), Month::March);
        assert_eq!(state.selected(), Some(today));
    }

    #[test]
    fn select_never_moves_the_view() {
        let mut state = PickerState::viewing(2024, Month::June);
        state.select(date(1999, Month::December, 31));

        assert_eq!(state.viewed_year(), 2024);
        assert_eq!(state.viewed_month(), Month::June);
    }

    #[test]
    fn select_is_idempotent() {
        let mut once = PickerState::viewing(2024, Month::June);
        once.select(date(2024, Month::June, 21));

        let mut twice = PickerState::viewing(2024, Month::June);
        twice.select(date(2024, Month::June, 21));
        twice.select(date(2024, Month::June, 21));

        assert_eq!(once, twice);
    }

    #[test]
    fn cell_classification() {
        let today = date(2024, Month::June, 15);
        let mut state = PickerState::viewing(2024, Month::June);

        assert_eq!(state.classify(Cell::Blank, today), CellKind::Blank);
        assert_eq!(
            state.classify(Cell::Day(today), today),
            CellKind::Today
        );
        assert_eq!(
            state.classify(Cell::Day(date(2024, Month::June, 1)), today),
            CellKind::Normal
        );

        state.select(date(2024, Month::June, 1));
        assert_eq!(
            state.classify(Cell::Day(date(2024, Month::June, 1)), today),
            CellKind::Selected
        );

        state.select(today);
        assert_eq!(
            state.classify(Cell::Day(today), today),
            CellKind::TodaySelected
        );
    }

    #[test]
    fn header_and_footer_labels() {
        let mut state = PickerState::viewing(2024, Month::January);
        assert_eq!(state.header_label(), "January 2024");
        assert_eq!(state.footer_text(), "No date selected.");

        state.select(date(2024, Month::January, 15));
        assert_eq!(state.footer_text(), "Selected: Monday, January 15, 2024");
    }
}
