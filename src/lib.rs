#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod common;
mod config;
mod game;
mod grid;
pub mod placement;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use placement::{commit_run, place_fleet, random_run};
pub use ship::*;
#[cfg(feature = "std")]
pub use cli::{parse_cell, Console};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use session::{play_guess, run_session, SessionEnd, SessionOptions};
#[cfg(feature = "std")]
pub use ui::{render_grid, show_grid};
