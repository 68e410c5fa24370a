//! Centralized shell output.
//!
//! Status lines go to stderr as `{status:>12} {message}`, the same way
//! cargo prints them. Stdout is reserved for machine-consumable output such
//! as the rendered document in dry-run mode.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: only actions the operator must take
    Quiet,
    #[default]
    Normal,
    /// --verbose: also debug logging
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Detected,
    Wrote,
    Opened,

    // In-progress statuses (cyan)
    Scanning,
    Publishing,

    // Warning statuses (yellow)
    Warning,
    Action,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Detected => "Detected",
            Status::Wrote => "Wrote",
            Status::Opened => "Opened",
            Status::Scanning => "Scanning",
            Status::Publishing => "Publishing",
            Status::Warning => "Warning",
            Status::Action => "Action",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Detected | Status::Wrote | Status::Opened => "\x1b[1;32m",
            Status::Scanning | Status::Publishing => "\x1b[1;36m",
            Status::Warning | Status::Action => "\x1b[1;33m",
        }
    }
}

const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a status message.
    ///
    /// In quiet mode, only Action status is printed.
    pub fn status(&self, status: Status, msg: impl Display) {
        if !self.shows(status) {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    fn shows(&self, status: Status) -> bool {
        !self.is_quiet() || status == Status::Action
    }

    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    /// Print a step the operator has to finish by hand.
    pub fn action(&self, msg: impl Display) {
        self.status(Status::Action, msg);
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}
