//! Argument parsing and result rendering for the `backlight` binary.

use backlight::{BacklightResult, Command, TracingConfig, TracingFormat, Transition};
use clap::{ArgAction, Parser, ValueEnum};

/// Toggle or step the gmux display backlight
///
/// Without a direction the backlight toggles: it goes to the high level,
/// or to the low level when it is already exactly high.
#[derive(Parser, Debug)]
#[command(name = "backlight", disable_version_flag = true)]
pub struct Cli {
    /// Step direction (up, down)
    #[arg(value_name = "DIRECTION", allow_negative_numbers = true)]
    pub direction: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Print version and build information
    #[arg(short = 'V', long)]
    pub version: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for TracingFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => TracingFormat::Pretty,
            LogFormat::Compact => TracingFormat::Compact,
            LogFormat::Json => TracingFormat::Json,
        }
    }
}

impl Cli {
    pub fn command(&self) -> Command {
        Command::from_arg(self.direction.as_deref())
    }

    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format.into(),
            ..Default::default()
        }
        .with_verbosity(self.verbose)
    }
}

/// What to print and how to exit
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    /// 0 on success, 1 on any failure
    pub exit_code: i32,
    pub output: Output,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    /// Printed to stdout
    Stdout(String),
    /// Printed to stderr
    Stderr(String),
}

impl Response {
    pub fn from_result(result: BacklightResult<Transition>) -> Self {
        match result {
            Ok(transition) => Self {
                exit_code: 0,
                output: Output::Stdout(transition.to_string()),
            },
            Err(e) => Self {
                exit_code: 1,
                output: Output::Stderr(format!("Unable to set brightness: {}", e)),
            },
        }
    }

    pub fn print(&self) {
        match &self.output {
            Output::Stdout(s) => println!("{}", s),
            Output::Stderr(s) => eprintln!("{}", s),
        }
    }
}
