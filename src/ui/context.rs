use chrono::{DateTime, Datelike, Local};
use std::convert::TryFrom;

use unsegen::base::style::*;

use crate::config::Config;
use crate::date::{days_in_month, CalendarDate, Month};
use crate::picker::PickerState;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub focus_day_style: StyleModifier,
    pub focus_day_text_style: TextFormatModifier,
    pub focus_day_char: Option<char>,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub selected_day_style: StyleModifier,
    pub selected_day_text_style: TextFormatModifier,
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
    pub weekday_header_style: StyleModifier,
    pub footer_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            focus_day_style: StyleModifier::default().invert(true),
            focus_day_text_style: TextFormatModifier::default(),
            focus_day_char: None,
            today_day_style: StyleModifier::default().fg_color(Color::Cyan),
            today_day_text_style: TextFormatModifier::default().italic(true),
            today_day_char: Some('*'),
            selected_day_style: StyleModifier::default().bg_color(Color::Blue),
            selected_day_text_style: TextFormatModifier::default().bold(true),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default(),
            weekday_header_style: StyleModifier::default().fg_color(Color::Yellow),
            footer_style: StyleModifier::default(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &Config) -> Theme {
        let mut theme = Theme::default();
        theme.today_day_char = config.today_char;
        theme.focus_day_char = config.focus_char;
        theme
    }
}

/// Per-session state of the interactive picker: the state machine, the
/// keyboard focus within the viewed month, and the cached wall clock.
pub struct Context {
    pub theme: Theme,
    picker: PickerState,
    focus_day: u32,
    now: DateTime<Local>,
}

impl Context {
    pub fn new(config: &Config) -> Self {
        let today = CalendarDate::today();
        Context {
            theme: Theme::from_config(config),
            picker: PickerState::viewing(today.year(), today.month()),
            focus_day: today.day(),
            now: Local::now(),
        }
    }

    /// Starts the session viewing `date`'s month with `date` selected
    /// and focused.
    pub fn with_date(mut self, date: CalendarDate) -> Self {
        self.picker = PickerState::viewing(date.year(), date.month());
        self.picker.select(date);
        self.focus_day = date.day();
        self
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn focus_day(&self) -> u32 {
        self.focus_day
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn today(&self) -> CalendarDate {
        CalendarDate::from_parts(
            self.now.year(),
            Month::try_from(self.now.month0()).expect("chrono month0 is in 0..=11"),
            self.now.day(),
        )
    }

    pub fn update(&mut self) {
        self.now = Local::now();
    }

    /// Moves the focus by `delta` days, clamped to the viewed month.
    pub fn move_focus(&mut self, delta: i32) {
        let last = days_in_month(self.picker.viewed_year(), self.picker.viewed_month()) as i32;
        let day = (self.focus_day as i32 + delta).max(1).min(last);
        self.focus_day = day as u32;
    }

    pub fn prev_month(&mut self) {
        self.picker.prev_month();
        self.clamp_focus();
    }

    pub fn next_month(&mut self) {
        self.picker.next_month();
        self.clamp_focus();
    }

    pub fn go_to_today(&mut self) {
        let today = self.today();
        self.picker.go_to_today(today);
        self.focus_day = today.day();
    }

    /// Selects the focused day of the viewed month.
    pub fn select_focused(&mut self) {
        let date = CalendarDate::from_parts(
            self.picker.viewed_year(),
            self.picker.viewed_month(),
            self.focus_day,
        );
        self.picker.select(date);
    }

    fn clamp_focus(&mut self) {
        let last = days_in_month(self.picker.viewed_year(), self.picker.viewed_month());
        if self.focus_day > last {
            self.focus_day = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_stays_within_the_month() {
        let mut context = Context::new(&Config::default());

        context.move_focus(-40);
        assert_eq!(context.focus_day(), 1);

        context.move_focus(40);
        let last = days_in_month(
            context.picker().viewed_year(),
            context.picker().viewed_month(),
        );
        assert_eq!(context.focus_day(), last);
    }

    #[test]
    fn select_focused_picks_a_day_of_the_viewed_month() {
        let mut context = Context::new(&Config::default());
        context.move_focus(-40);
        context.select_focused();

        let selected = context.picker().selected().unwrap();
        assert_eq!(selected.year(), context.picker().viewed_year());
        assert_eq!(selected.month(), context.picker().viewed_month());
        assert_eq!(selected.day(), 1);
    }

    #[test]
    fn today_jump_focuses_today() {
        let mut context = Context::new(&Config::default());
        context.next_month();
        context.next_month();

        context.go_to_today();

        let today = context.today();
        assert_eq!(context.picker().viewed_month(), today.month());
        assert_eq!(context.picker().viewed_year(), today.year());
        assert_eq!(context.focus_day(), today.day());
        assert_eq!(context.picker().selected(), Some(today));
    }
}
