//! A toy robot simulator.
//!
//! A robot moves on a rectangular table (5x5 unless configured otherwise)
//! driven by a small text command language: `PLACE x,y,DIRECTION`, `MOVE`,
//! `LEFT`, `RIGHT`, `REPORT` and `EXIT`. Commands that would put the robot
//! off the table, that arrive before it has been placed, or that do not parse
//! are dropped without any output.
//!
//! The main entry point is [`Simulator`], which turns one line of text into
//! an optional [`Output`]. The [`session`] module wraps it in an interactive
//! prompt and a command-file runner.

pub mod cli;
pub mod command;
pub mod config;
pub mod geometry;
pub mod io_adapters;
pub mod logging;
pub mod robot;
pub mod session;
pub mod simulator;
pub mod table;

pub use config::{BatchExit, Config};
pub use geometry::{Direction, Point};
pub use robot::Robot;
pub use simulator::{Output, Signal, Simulator};
pub use table::Table;
