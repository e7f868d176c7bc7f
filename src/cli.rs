//! Command-line argument parser and argument access.

use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::Parser;

use crate::clap::RustBacktrace;
use crate::excision::DEFAULT_END;
use crate::excision::DEFAULT_START;
use crate::lines::LineMode;
use crate::target_path::TargetPath;

/// The file containing the duplicated `calculateTotals` function.
pub const DEFAULT_PATH: &str = r"c:\Users\User\Documents\Vinnx\loja ecommerce\pages\Cash.tsx";

/// Remove a range of lines from a source file and splice a replacement fragment in its place.
///
/// With no arguments, removes the duplicated `calculateTotals` function from `Cash.tsx`. The file
/// is overwritten in place and no backup is kept.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// The file to rewrite in place.
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: TargetPath,

    /// The first line to remove, counting from zero.
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: usize,

    /// The line after the last line to remove, counting from zero.
    ///
    /// Bounds past the end of the file are clamped to its length.
    #[arg(long, default_value_t = DEFAULT_END)]
    pub end: usize,

    /// How to split the file into lines.
    #[arg(long, value_enum, default_value_t = LineMode::KeepEndings)]
    pub line_mode: LineMode,

    /// Options to modify logging and error-handling behavior.
    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// Options to modify logging and error-handling behavior.
#[derive(Debug, Clone, clap::Args)]
#[clap(next_help_heading = "Logging options")]
pub struct LoggingOpts {
    #[allow(rustdoc::bare_urls)]
    /// Tracing filter.
    ///
    /// Can be any of "error", "warn", "info", "debug", or
    /// "trace". Supports more granular filtering, as well.
    /// See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    ///
    /// A nice value is "excise=debug".
    #[arg(long, default_value = "excise=info")]
    pub tracing_filter: String,

    /// How to display backtraces in error messages.
    #[arg(long, env = "RUST_BACKTRACE", value_enum, default_value_t = RustBacktrace::Off)]
    pub backtrace: RustBacktrace,
}

impl Opts {
    /// Check arguments that depend on each other and perform late initialization. Must be called
    /// before the arguments are used.
    pub fn init(&mut self) -> Result<(), clap::Error> {
        if self.end < self.start {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "`--end` ({}) must not be less than `--start` ({})",
                    self.end, self.start
                ),
            ));
        }

        // Lets `miette` see the backtrace setting.
        std::env::set_var("RUST_BACKTRACE", self.logging.backtrace.to_string());

        Ok(())
    }
}
