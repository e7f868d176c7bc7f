//! Adapters for parsing [`clap`] arguments to various types.

mod error_message;
mod rust_backtrace;

pub use error_message::value_validation_error;
pub use rust_backtrace::RustBacktrace;
