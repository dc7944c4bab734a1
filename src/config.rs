//! Command-line configuration

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The 5×5 maze shown when no file is given
pub const DEFAULT_MAZE: &str = "3 13 8 8 14 \n5 10 3 5 10 \n9 6 5 14 3 \n3 9 10 9 2 \n5 6 5 6 3 \n";

pub const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File to load the initial maze text from
    pub maze_file: Option<PathBuf>,
    /// Start with cell values overlaid on the maze
    pub show_values: bool,
    pub fps: u32,
    /// Where to write logs; logging is off without it
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            maze_file: None,
            show_values: false,
            fps: DEFAULT_FPS,
            log_file: None,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidFps(String),
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidFps(value) => {
                write!(f, "Invalid frame rate '{}' (expected 1-{})", value, MAX_FPS)
            }
            ConfigError::UnexpectedArgument(arg) => {
                write!(f, "Unexpected argument '{}' (only one maze file allowed)", arg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--values" => config.show_values = true,
                "--fps" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--fps"))?;
                    config.fps = match value.parse::<u32>() {
                        Ok(fps) if (1..=MAX_FPS).contains(&fps) => fps,
                        _ => return Err(ConfigError::InvalidFps(value)),
                    };
                }
                "--log" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                    config.log_file = Some(PathBuf::from(value));
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
                _ => {
                    if config.maze_file.is_some() {
                        return Err(ConfigError::UnexpectedArgument(arg));
                    }
                    config.maze_file = Some(PathBuf::from(arg));
                }
            }
        }

        Ok(Command::Run(config))
    }

    /// Time budget of one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [FILE] [--values] [--fps N] [--log PATH]\n\
         \n\
         Options:\n  \
           FILE        Maze text to start with (default: a 5x5 demo maze)\n  \
           --values    Show cell values on top of the maze\n  \
           --fps N     Redraw rate, 1-{} (default {})\n  \
           --log PATH  Write logs to PATH (filter with RUST_LOG)\n  \
           -h, --help  Show this message",
        program_name, MAX_FPS, DEFAULT_FPS
    )
}
