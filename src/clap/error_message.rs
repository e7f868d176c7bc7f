//! Argument errors formatted like `clap`'s own.

use std::fmt::Display;

use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Construct a [`clap::Error`] for a value that parsed but failed validation, worded like the
/// builtin messages.
pub fn value_validation_error(
    arg: Option<&clap::Arg>,
    bad_value: &str,
    message: impl Display,
) -> clap::Error {
    let arg = arg
        .map(ToString::to_string)
        .unwrap_or_else(|| "...".to_owned());
    clap::Error::raw(
        ErrorKind::ValueValidation,
        format!(
            "invalid value '{}' for '{}': {message}\n",
            bad_value.if_supports_color(Stderr, |text| text.yellow()),
            arg.if_supports_color(Stderr, |text| text.bold()),
        ),
    )
}
