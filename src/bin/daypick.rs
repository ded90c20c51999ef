extern crate daypick as lib;

use flexi_logger::{FileSpec, Logger};
use lib::date::CalendarDate;
use lib::events::Dispatcher;
use lib::ui::{App, Context};
use nix::sys::termios;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "daypick", about = "A TUI date picker.")]
pub struct Args {
    #[structopt(name = "DATE", help = "date to view and preselect (YYYY-MM-DD)")]
    pub date: Option<CalendarDate>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const TTY: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(TTY).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(TTY, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("daypick ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let mut context = Context::new(&config);
    if let Some(date) = args.date {
        context = context.with_date(date);
    }

    let mut app = App::new(&config, context);

    let stdout = stdout();

    if args.show {
        let mut term = Terminal::new(stdout.lock())?;
        app.show(&mut term);
        Ok(())
    } else {
        let dispatcher = Dispatcher::from_config(&config);
        let term = Terminal::new(stdout.lock())?;

        app.run(dispatcher, term)
    }
}
