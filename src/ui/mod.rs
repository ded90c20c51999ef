pub mod app;
pub mod context;
pub mod picker_window;

pub use app::App;
pub use context::{Context, Theme};
pub use picker_window::{FooterBar, MonthPane};
