//! Command dispatch: turns parsed lines into robot actions and reports.

use crate::command::{Command, CommandParser, PlaceArgs};
use crate::config::{BatchExit, Config};
use crate::geometry::Point;
use crate::robot::{Robot, RobotError};
use crate::table::{Table, TableError};
use tracing::{debug, trace};

/// A control action returned instead of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Exit,
}

/// Result of processing one line that did something visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Report(String),
    Signal(Signal),
}

/// Drives one [`Robot`] around one [`Table`].
///
/// Every rejected command (bad syntax, off-table target, robot not yet
/// placed) is silently dropped: [`Simulator::process_line`] never fails.
///
/// Example
/// ```
/// use toy_robot::Simulator;
/// let mut sim = Simulator::default();
/// let out = sim.process_lines(["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
/// assert_eq!(out.as_deref(), Some("0,1,NORTH"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    robot: Robot,
    table: Table,
    batch_exit: BatchExit,
}

impl Simulator {
    pub fn new(robot: Robot, table: Table) -> Self {
        Self {
            robot,
            table,
            batch_exit: BatchExit::default(),
        }
    }

    /// Build a simulator with an unplaced robot on the table described by `config`.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidDimensions`] if the configured table is degenerate.
    pub fn from_config(config: &Config) -> Result<Self, TableError> {
        Ok(Self {
            robot: Robot::new(),
            table: config.table()?,
            batch_exit: config.batch_exit,
        })
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Process one command line, with or without its line terminator.
    pub fn process_line(&mut self, line: &str) -> Option<Output> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, place_args) = match CommandParser::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "ignoring line");
                return None;
            }
        };
        trace!(?command, ?place_args, "dispatching");

        match self.execute(command, place_args) {
            Ok(output) => output,
            Err(e) => {
                debug!(?command, error = %e, "ignoring command");
                None
            }
        }
    }

    /// Process every line in order and join the reports with newlines.
    ///
    /// Returns `None` when nothing was reported. How an `EXIT` line is
    /// treated depends on the configured [`BatchExit`].
    pub fn process_lines<I, S>(&mut self, lines: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports = Vec::new();
        for line in lines {
            match self.process_line(line.as_ref()) {
                Some(Output::Report(text)) => reports.push(text),
                Some(Output::Signal(Signal::Exit)) if self.batch_exit == BatchExit::Stop => {
                    debug!("EXIT in batch, skipping remaining lines");
                    break;
                }
                Some(Output::Signal(_)) | None => {}
            }
        }
        if reports.is_empty() {
            None
        } else {
            Some(reports.join("\n"))
        }
    }

    fn execute(
        &mut self,
        command: Command,
        place_args: Option<PlaceArgs>,
    ) -> Result<Option<Output>, RobotError> {
        match command {
            Command::Place => {
                if let Some(args) = place_args {
                    self.handle_place(args);
                }
            }
            Command::Move => self.handle_move()?,
            Command::Left => self.robot.turn_left()?,
            Command::Right => self.robot.turn_right()?,
            Command::Report => {
                if !self.robot.is_placed() {
                    return Err(RobotError::NotPlaced);
                }
                return Ok(Some(Output::Report(self.robot.describe())));
            }
            Command::Exit => return Ok(Some(Output::Signal(Signal::Exit))),
        }
        Ok(None)
    }

    fn handle_place(&mut self, args: PlaceArgs) {
        let target = Point::new(args.x, args.y);
        if self.table.is_valid_position(target) {
            self.robot.place(target, args.facing);
        } else {
            debug!(?target, "PLACE target is off the table");
        }
    }

    fn handle_move(&mut self) -> Result<(), RobotError> {
        let next = self.robot.next_position()?;
        if self.table.is_valid_position(next) {
            self.robot.move_forward()
        } else {
            debug!(?next, "MOVE would leave the table");
            Ok(())
        }
    }
}
