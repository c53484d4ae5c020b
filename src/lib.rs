//! Top-down room-clearing shooter.
//!
//! The library holds every piece of game logic so it can be driven and tested
//! without a terminal; the binary only wires crossterm input and rendering
//! around [`compute::tick`].

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod highscore;
pub mod input;
pub mod room;
pub mod viewport;
