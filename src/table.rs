//! The rectangular tabletop the robot moves on.

use crate::geometry::Point;
use thiserror::Error;

pub const DEFAULT_WIDTH: i32 = 5;
pub const DEFAULT_HEIGHT: i32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// A table surface with its origin `(0, 0)` at the south-west corner.
///
/// Valid points satisfy `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    width: i32,
    height: i32,
}

impl Table {
    /// Create a table, rejecting zero or negative dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, TableError> {
        if width <= 0 || height <= 0 {
            return Err(TableError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_valid_position(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
