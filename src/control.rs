use crate::cmds::{Cmd, CmdResult};
use crate::ui::Context;

pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult;
}

/// Applies picker commands to the session context.
///
/// Focus movement stays clamped to the viewed month, so a `Select`
/// can only ever hit a rendered day cell.
#[derive(Default)]
pub struct PickerController {}

impl Control for PickerController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::FocusNextDay => {
                context.move_focus(1);
                Ok(Cmd::Noop)
            }
            Cmd::FocusPrevDay => {
                context.move_focus(-1);
                Ok(Cmd::Noop)
            }
            Cmd::FocusNextWeek => {
                context.move_focus(7);
                Ok(Cmd::Noop)
            }
            Cmd::FocusPrevWeek => {
                context.move_focus(-7);
                Ok(Cmd::Noop)
            }
            Cmd::NextMonth => {
                context.next_month();
                Ok(Cmd::Noop)
            }
            Cmd::PrevMonth => {
                context.prev_month();
                Ok(Cmd::Noop)
            }
            Cmd::Today => {
                context.go_to_today();
                Ok(Cmd::Noop)
            }
            Cmd::Select => {
                context.select_focused();
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}
