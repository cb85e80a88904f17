//! The outer loops that feed text into a [`Simulator`]: an interactive
//! prompt and a one-shot command file.

use crate::io_adapters::{LineSource, ReadLine};
use crate::simulator::{Output, Signal, Simulator};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

pub const PROMPT: &str = "> ";

pub fn banner() -> String {
    format!(
        "Welcome to the Robot Simulator v{}\n\n\
         All commands should be in uppercase\n\
         Type EXIT or ctrl+c when you are done\n\
         Full command list can be seen by exiting and running this tool with the --help flag\n\
         Enter a PLACE command to start:",
        env!("CARGO_PKG_VERSION")
    )
}

/// Read commands one at a time until `EXIT`, Ctrl-C or end of input,
/// printing each report as soon as it is produced.
///
/// # Errors
///
/// Fails only on I/O errors from `source` or `out`.
pub fn run_interactive(
    simulator: &mut Simulator,
    source: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{}", banner())?;
    out.flush()?;

    loop {
        let line = match source.read_line(PROMPT)? {
            ReadLine::Line(line) => line,
            ReadLine::Interrupted => {
                info!("interrupted");
                break;
            }
            ReadLine::Eof => {
                debug!("end of input");
                break;
            }
        };
        if !line.trim().is_empty() {
            source.add_history(line.trim_end())?;
        }

        match simulator.process_line(&line) {
            Some(Output::Report(text)) => {
                writeln!(out, "{text}")?;
                out.flush()?;
            }
            Some(Output::Signal(Signal::Exit)) => {
                info!("EXIT received");
                break;
            }
            None => {}
        }
    }
    Ok(())
}

/// Run every line from `reader` and print the joined reports, if any.
///
/// # Errors
///
/// Fails if `reader` cannot be read or `out` cannot be written.
pub fn run_batch(
    simulator: &mut Simulator,
    reader: impl BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("failed to read commands")?;
    debug!(count = lines.len(), "processing batch");

    if let Some(output) = simulator.process_lines(&lines) {
        writeln!(out, "{output}")?;
    }
    out.flush()?;
    Ok(())
}

/// [`run_batch`] over the contents of the file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened or read.
pub fn run_file(simulator: &mut Simulator, path: &Path, out: &mut dyn Write) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("can't open command file {}", path.display()))?;
    info!(path = %path.display(), "running command file");
    run_batch(simulator, BufReader::new(file), out)
        .with_context(|| format!("while running {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BatchExit, Config};
    use crate::io_adapters::ReaderSource;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn write_temp_file(contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "toy_robot_test_{}_{}.txt",
            std::process::id(),
            nanos
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn interactive(input: &str) -> String {
        let mut sim = Simulator::default();
        let mut source = ReaderSource::from_text(input);
        let mut out = Vec::new();
        run_interactive(&mut sim, &mut source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn batch(input: &str, config: &Config) -> String {
        let mut sim = Simulator::from_config(config).unwrap();
        let mut out = Vec::new();
        run_batch(&mut sim, Cursor::new(input.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_prints_banner_and_reports() {
        let out = interactive("PLACE 1,2,NORTH\nMOVE\nREPORT\nEXIT\n");
        assert!(out.starts_with("Welcome to the Robot Simulator v"));
        assert!(out.ends_with("Enter a PLACE command to start:\n1,3,NORTH\n"));
    }

    #[test]
    fn test_interactive_stops_at_exit() {
        let out = interactive("PLACE 0,0,NORTH\nEXIT\nREPORT\n");
        assert!(!out.contains("0,0,NORTH"));
    }

    #[test]
    fn test_interactive_stops_at_eof() {
        let out = interactive("PLACE 0,0,NORTH\nREPORT\nMOVE\nREPORT");
        assert!(out.ends_with("0,0,NORTH\n0,1,NORTH\n"));
    }

    #[test]
    fn test_interactive_ignores_bad_lines() {
        let out =
            interactive("FOO\n\nREPORT\nPLACE 9,9,NORTH\nREPORT\nPLACE 0,0,EAST\nREPORT\n");
        assert_eq!(out, format!("{}\n0,0,EAST\n", banner()));
    }

    #[test]
    fn test_interactive_interrupt_stops_cleanly() {
        struct Scripted(Vec<ReadLine>);
        impl LineSource for Scripted {
            fn read_line(&mut self, _prompt: &str) -> Result<ReadLine> {
                Ok(if self.0.is_empty() {
                    ReadLine::Eof
                } else {
                    self.0.remove(0)
                })
            }
        }

        let mut sim = Simulator::default();
        let mut source = Scripted(vec![
            ReadLine::Line("PLACE 0,0,NORTH".to_string()),
            ReadLine::Interrupted,
            ReadLine::Line("REPORT".to_string()),
        ]);
        let mut out = Vec::new();
        run_interactive(&mut sim, &mut source, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", banner()));
        assert!(sim.robot().is_placed());
    }

    #[test]
    fn test_batch_outputs_joined_reports() {
        let out = batch("PLACE 0,0,NORTH\nREPORT\nMOVE\nREPORT\n", &Config::default());
        assert_eq!(out, "0,0,NORTH\n0,1,NORTH\n");
    }

    #[test]
    fn test_batch_handles_crlf() {
        let out = batch("PLACE 2,3,WEST\r\nMOVE\r\nREPORT\r\n", &Config::default());
        assert_eq!(out, "1,3,WEST\n");
    }

    #[test]
    fn test_batch_without_reports_prints_nothing() {
        assert_eq!(batch("PLACE 0,0,NORTH\nMOVE\n", &Config::default()), "");
    }

    #[test]
    fn test_batch_exit_policy() {
        let input = "PLACE 0,0,NORTH\nEXIT\nREPORT\n";
        assert_eq!(batch(input, &Config::default()), "0,0,NORTH\n");
        let stop = Config::default().with_batch_exit(BatchExit::Stop);
        assert_eq!(batch(input, &stop), "");
    }

    #[test]
    fn test_run_file() {
        let path = write_temp_file("PLACE 0,0,NORTH\nFOO\nBAR\nREPORT\n");
        let mut sim = Simulator::default();
        let mut out = Vec::new();
        run_file(&mut sim, &path, &mut out).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0,0,NORTH\n");
    }

    #[test]
    fn test_run_file_missing() {
        let path =
            std::env::temp_dir().join(format!("toy_robot_missing_{}.txt", std::process::id()));
        let mut sim = Simulator::default();
        let mut out = Vec::new();
        let err = run_file(&mut sim, &path, &mut out).unwrap_err();
        assert!(err.to_string().contains("can't open command file"));
        assert!(out.is_empty());
    }
}
