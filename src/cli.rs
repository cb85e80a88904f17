//! Command-line arguments.

use crate::config::{BatchExit, Config};
use argh::FromArgs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(FromArgs, Debug, PartialEq)]
/// Toy Robot Simulator: drive a robot around a 5x5 table.
#[argh(note = r"Available commands:
  PLACE <x>,<y>,<DIRECTION>  e.g. PLACE 0,0,NORTH : Place the robot at the specified position.
  LEFT                       : Turn the robot 90 degrees to the left.
  RIGHT                      : Turn the robot 90 degrees to the right.
  MOVE                       : Move the robot forward one place in the current direction of the robot.
  REPORT                     : Display the current state of the robot, i.e. its current x,y position and direction.
  EXIT                       : Exit the simulator")]
pub struct Args {
    #[argh(option, short = 'f')]
    /// path to file containing commands
    pub file: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// log debug output to stderr
    pub verbose: bool,

    #[argh(switch)]
    /// stop reading a command file at the first EXIT
    pub stop_on_exit: bool,

    #[argh(switch)]
    /// print version information and exit
    pub version: bool,
}

impl Args {
    /// Overlay the command-line flags on `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.verbose {
            config = config.with_log_level(LevelFilter::DEBUG);
        }
        if self.stop_on_exit {
            config = config.with_batch_exit(BatchExit::Stop);
        }
        config
    }
}
