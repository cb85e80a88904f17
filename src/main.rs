use anyhow::Result;
use std::io::{self, IsTerminal};
use toy_robot::cli::Args;
use toy_robot::io_adapters::{EditorSource, ReaderSource};
use toy_robot::{Config, Simulator, logging, session};

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    if args.version {
        println!("toy_robot {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = args.apply(Config::from_env());
    logging::init(config.log_level);

    let mut simulator = Simulator::from_config(&config)?;
    let mut stdout = io::stdout();

    match &args.file {
        Some(path) => session::run_file(&mut simulator, path, &mut stdout),
        None if io::stdin().is_terminal() => {
            let mut source = EditorSource::new()?;
            session::run_interactive(&mut simulator, &mut source, &mut stdout)
        }
        None => {
            let mut source = ReaderSource::new(io::stdin().lock());
            session::run_interactive(&mut simulator, &mut source, &mut stdout)
        }
    }
}
