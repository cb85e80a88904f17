//! Robot position and orientation as a two-state machine.

use crate::geometry::{Direction, Point};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("robot has not been placed on the table")]
    NotPlaced,
}

/// Either the robot is off the table, or it has both a position and a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed {
        position: Point,
        direction: Direction,
    },
}

/// A toy robot. It trusts whatever it is told to do; keeping it on the
/// table is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct Robot {
    state: RobotState,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed { .. })
    }

    pub fn position(&self) -> Option<Point> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            RobotState::Placed { direction, .. } => Some(direction),
            RobotState::Unplaced => None,
        }
    }

    /// Put the robot at `position` facing `direction`, replacing any previous placement.
    pub fn place(&mut self, position: Point, direction: Direction) {
        self.state = RobotState::Placed {
            position,
            direction,
        };
    }

    pub fn turn_left(&mut self) -> Result<(), RobotError> {
        self.rotate(Direction::anticlockwise)
    }

    pub fn turn_right(&mut self) -> Result<(), RobotError> {
        self.rotate(Direction::clockwise)
    }

    /// The point one step ahead. Does not move the robot.
    pub fn next_position(&self) -> Result<Point, RobotError> {
        match self.state {
            RobotState::Placed {
                position,
                direction,
            } => Ok(position + direction.delta()),
            RobotState::Unplaced => Err(RobotError::NotPlaced),
        }
    }

    pub fn move_forward(&mut self) -> Result<(), RobotError> {
        let next = self.next_position()?;
        if let RobotState::Placed { position, .. } = &mut self.state {
            *position = next;
        }
        Ok(())
    }

    /// `"x,y,DIRECTION"` when placed, `"Unplaced Robot"` otherwise.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn rotate(&mut self, turn: fn(Direction) -> Direction) -> Result<(), RobotError> {
        match &mut self.state {
            RobotState::Placed { direction, .. } => {
                *direction = turn(*direction);
                Ok(())
            }
            RobotState::Unplaced => Err(RobotError::NotPlaced),
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            RobotState::Placed {
                position,
                direction,
            } => write!(f, "{},{},{}", position.x, position.y, direction),
            RobotState::Unplaced => f.write_str("Unplaced Robot"),
        }
    }
}
