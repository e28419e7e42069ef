//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use tracing::Level;

/// Port the React TodoList component to Angular.
#[derive(Parser, Debug)]
#[command(
    name = "ngport",
    version,
    about = "Port a React TodoList component to an Angular component and template",
    long_about = "Reads ../react/TodoList.jsx, extracts the initial todo list from its \
                  useState([...]) call and writes TodoList.component.ts and \
                  TodoList.component.html into ../generated.\n\n\
                  When no list can be extracted the generated component starts with \
                  a default list."
)]
pub struct Cli {
    /// Explicit log level (overrides -v/-q and NGPORT_LOG_LEVEL).
    #[arg(long = "log-level", value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Debug logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable ANSI colors in log output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}
