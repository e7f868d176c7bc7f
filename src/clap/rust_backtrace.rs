//! The `$RUST_BACKTRACE` setting, as a [`clap::ValueEnum`].

use std::fmt::Display;

/// Whether to display backtraces in errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RustBacktrace {
    /// Hide backtraces in errors
    #[default]
    #[value(name = "0")]
    Off,
    /// Display backtraces in errors
    #[value(name = "1")]
    On,
    /// Display backtraces with all stack frames in errors
    #[value(name = "full")]
    Full,
}

impl Display for RustBacktrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RustBacktrace::Off => write!(f, "0"),
            RustBacktrace::On => write!(f, "1"),
            RustBacktrace::Full => write!(f, "full"),
        }
    }
}
