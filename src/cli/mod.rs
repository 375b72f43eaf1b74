//! Command line entry point and the interactive menu

pub mod commands;
pub mod menu;
pub mod render;

pub use commands::{Cli, Commands, run};
pub use menu::{Menu, MenuChoice};
pub use render::Painter;
