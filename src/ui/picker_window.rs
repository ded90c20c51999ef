use std::fmt::{self, Display, Write};

use unsegen::base::style::StyleModifier;
use unsegen::base::*;
use unsegen::widget::*;

use crate::date::WEEKDAY_SHORT_NAMES;
use crate::grid::Cell;
use crate::picker::CellKind;

use super::{Context, Theme};

pub struct DayCell<'a> {
    day_num: u32,
    kind: CellKind,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    const CELL_HEIGHT: usize = 1;
    const CELL_WIDTH: usize = 4;

    fn new(day_num: u32, kind: CellKind, focused: bool, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            kind,
            focused,
            theme,
        }
    }

    fn style_modifier(&self) -> StyleModifier {
        if self.focused {
            return self
                .theme
                .focus_day_style
                .format(self.theme.focus_day_text_style);
        }

        match self.kind {
            CellKind::Selected | CellKind::TodaySelected => self
                .theme
                .selected_day_style
                .format(self.theme.selected_day_text_style),
            CellKind::Today => self
                .theme
                .today_day_style
                .format(self.theme.today_day_text_style),
            _ => self.theme.day_style.format(self.theme.day_text_style),
        }
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = match self.kind {
            CellKind::Today | CellKind::TodaySelected => {
                self.theme.today_day_char.unwrap_or(' ')
            }
            _ => ' ',
        };

        let arg_focus = if self.focused {
            self.theme.focus_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_focus, self.day_num)
    }
}

/// Renders the header label, the Sun..Sat weekday row and the cell
/// grid of the viewed month.
pub struct MonthPane<'a> {
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const COLUMNS: usize = 7;
    const ROWS: usize = 6;
    const HEADER_ROWS: usize = 2;

    pub fn new(context: &'a Context) -> Self {
        MonthPane { context }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::COLUMNS * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + Self::ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let state = self.context.picker();
        let today = self.context.today();
        let grid = state.grid();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        cursor.set_style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );
        write!(
            &mut cursor,
            "{:^width$}",
            state.header_label(),
            width = Self::COLUMNS * DayCell::CELL_WIDTH
        )
        .unwrap();

        cursor.set_style_modifier(theme.weekday_header_style);
        for &head in &WEEKDAY_SHORT_NAMES {
            write!(
                &mut cursor,
                "{:>width$}",
                head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }

        for week in grid.weeks() {
            for &cell in week.cells() {
                match cell {
                    Cell::Blank => {
                        cursor.set_style_modifier(theme.day_style.format(theme.day_text_style));
                        write!(&mut cursor, "{:width$}", "", width = DayCell::CELL_WIDTH)
                            .unwrap();
                    }
                    Cell::Day(date) => {
                        let day_cell = DayCell::new(
                            date.day(),
                            state.classify(cell, today),
                            date.day() == self.context.focus_day(),
                            theme,
                        );
                        cursor.set_style_modifier(day_cell.style_modifier());
                        write!(&mut cursor, "{}", day_cell).unwrap();
                    }
                }
            }
        }
    }
}

/// One line reflecting the current selection.
pub struct FooterBar<'a> {
    context: &'a Context,
}

impl<'a> FooterBar<'a> {
    pub fn new(context: &'a Context) -> Self {
        FooterBar { context }
    }
}

impl Widget for FooterBar<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);
        cursor.set_style_modifier(self.context.theme.footer_style);
        write!(&mut cursor, "{}", self.context.picker().footer_text()).unwrap();
    }
}
