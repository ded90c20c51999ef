use crate::cmds::Cmd;
use crate::config::Config;
use crate::control::{Control, PickerController};
use crate::events::{Dispatcher, Event};

use super::{Context, FooterBar, MonthPane};

use termion::event::Event as TermionEvent;
use unsegen::base::Terminal;
use unsegen::widget::*;

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    controller: PickerController,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, context: Context) -> App<'a> {
        App {
            config,
            context,
            controller: PickerController::default(),
        }
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(MonthPane::new(&self.context))
            .widget(FooterBar::new(&self.context))
    }

    fn draw(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    /// Renders a single frame, for non-interactive use.
    pub fn show(&mut self, term: &mut Terminal) {
        self.context.update();
        self.draw(term);
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            self.draw(&mut term);

            match dispatcher.next()? {
                Event::Update => self.context.update(),
                Event::Input(input) => {
                    if let TermionEvent::Key(key) = input.event {
                        match self.config.key_map.get(&key) {
                            Some(Cmd::Exit) => run = false,
                            Some(cmd) => {
                                if let Err(err) =
                                    self.controller.send_cmd(cmd, &mut self.context)
                                {
                                    log::warn!("{}", err);
                                }
                            }
                            None => log::debug!("no command bound to {:?}", key),
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
