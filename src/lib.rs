pub mod cmds;
pub mod config;
pub mod control;
pub mod date;
pub mod events;
pub mod grid;
pub mod picker;
pub mod ui;
