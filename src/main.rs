mod config;
mod consts;
mod controls;
mod game;
use crate::config::Config;
use crate::controls::Controls;
use crate::game::Game;
use anyhow::Context;
use lexopt::{Arg, Parser};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

static USAGE: &str = "\
Usage: linesnake [-c|--config <FILE>]

Play snake one move at a time.  Enter w, a, s, or d to move up, left, down,
or right, then press Enter.

Options:
  -c, --config <FILE>   Read configuration from <FILE>
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Play { config: Option<PathBuf> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Play { config })
    }

    fn run(self) -> ExitCode {
        match self {
            Command::Play { config } => anyhow_exit(play(config)),
            Command::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    match Command::from_parser(Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("linesnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) => Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        Err(e) => {
            tracing::warn!(error = %e, "Using default configuration");
            Ok(Config::default())
        }
    }
}

fn play(config: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut controls = Controls::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let score = Game::new(config.board, rng).run(&mut controls, &mut out)?;
    tracing::debug!(score, "Session finished");
    Ok(())
}

fn anyhow_exit(r: anyhow::Result<()>) -> ExitCode {
    let status = exit_status(&r);
    if let Err(e) = r {
        if status != 0 {
            eprintln!("linesnake: {e:?}");
        }
    }
    ExitCode::from(status)
}

/// Exit status for the outcome of a session.  A closed stdout is not a
/// failure.
fn exit_status(r: &anyhow::Result<()>) -> u8 {
    match r {
        Ok(()) => 0,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            0
        }
        Err(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use rstest::rstest;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[rstest]
    #[case(&[], Command::Play { config: None })]
    #[case(&["-c", "snake.toml"], Command::Play { config: Some(PathBuf::from("snake.toml")) })]
    #[case(&["--config=snake.toml"], Command::Play { config: Some(PathBuf::from("snake.toml")) })]
    #[case(&["--help"], Command::Help)]
    #[case(&["-c", "snake.toml", "-h"], Command::Help)]
    #[case(&["-V"], Command::Version)]
    fn parse_args(#[case] args: &[&str], #[case] cmd: Command) {
        assert_eq!(parse(args).expect("arguments should parse"), cmd);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn parse_bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[rstest]
    #[case(Ok(()), 0)]
    #[case(Err(io::Error::from(ErrorKind::BrokenPipe).into()), 0)]
    #[case(Err(io::Error::from(ErrorKind::PermissionDenied).into()), 2)]
    #[case(Err(anyhow::Error::new(ConfigError::NoPath).context("failed to load configuration")), 2)]
    #[case(Err(anyhow::Error::new(ConfigError::Read(io::Error::from(ErrorKind::BrokenPipe)))), 2)]
    fn test_exit_status(#[case] r: anyhow::Result<()>, #[case] status: u8) {
        assert_eq!(exit_status(&r), status);
    }

    #[test]
    fn load_given_config() {
        let mut file = tempfile::NamedTempFile::new().expect("creating a temporary file");
        file.write_all(b"seed = 7\n\n[board]\nwidth = 9\n")
            .expect("writing to a temporary file");
        let cfg = load_config(Some(file.path().to_path_buf())).expect("config should load");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.board.size(), ratatui::layout::Size::new(9, 11));
    }

    #[test]
    fn load_missing_given_config() {
        let dir = tempfile::tempdir().expect("creating a temporary directory");
        let e = load_config(Some(dir.path().join("nope.toml")))
            .expect_err("an explicit config file must exist");
        assert!(matches!(
            e.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read(_))
        ));
        assert_eq!(exit_status(&Err(e)), 2);
    }
}
