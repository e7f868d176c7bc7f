//! Logging setup with the [`tracing`] crate.

use miette::IntoDiagnostic;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

use crate::cli::Opts;

mod format;

/// Options for installing the logging framework.
#[derive(Debug, Clone)]
pub struct TracingOpts<'opts> {
    /// Filter directives, like `excise=debug`.
    pub filter_directives: &'opts str,
}

impl<'opts> TracingOpts<'opts> {
    /// Extract the logging options from parsed command-line arguments.
    pub fn from_cli(opts: &'opts Opts) -> Self {
        Self {
            filter_directives: &opts.logging.tracing_filter,
        }
    }

    /// Install a global [`tracing`] subscriber writing formatted events to stderr.
    ///
    /// If the filter directives don't parse, `$RUST_LOG` is used instead, and then `info`.
    pub fn install(&self) -> miette::Result<()> {
        let env_filter = EnvFilter::try_new(self.filter_directives)
            .or_else(|_| EnvFilter::try_from_default_env())
            .or_else(|_| EnvFilter::try_new("info"))
            .into_diagnostic()?;

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .event_format(format::EventFormatter)
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .into_diagnostic()?;

        Ok(())
    }
}
