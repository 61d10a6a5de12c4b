#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod ui;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::{Grid, GridError};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use ui::*;
