//! Rewriting a file in place with an [`Excision`].

use std::fs;

use miette::Context;
use miette::IntoDiagnostic;
use tracing::instrument;

use crate::cli::Opts;
use crate::excision::Excision;
use crate::excision::CALCULATIONS_FRAGMENT;
use crate::lines::LineMode;
use crate::target_path::TargetPath;

/// Printed to stdout after a successful rewrite.
pub const SUCCESS_MESSAGE: &str = "✅ Função calculateTotals duplicada removida!";

/// Options for [`rewrite_file`].
#[derive(Debug, Clone)]
pub struct RewriteOpts {
    /// The file to rewrite in place.
    pub path: TargetPath,
    /// The lines to remove and what to put in their place.
    pub excision: Excision,
    /// How to split the file into lines.
    pub line_mode: LineMode,
}

impl RewriteOpts {
    /// Construct options for [`rewrite_file`] from parsed command-line arguments.
    ///
    /// The replacement is always [`CALCULATIONS_FRAGMENT`].
    pub fn from_cli(opts: &Opts) -> miette::Result<Self> {
        Ok(Self {
            path: opts.path.clone(),
            excision: Excision::new(opts.start..opts.end, CALCULATIONS_FRAGMENT)?,
            line_mode: opts.line_mode,
        })
    }
}

/// What a rewrite did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Lines in the original contents.
    pub lines_before: usize,
    /// Original lines removed.
    pub lines_removed: usize,
    /// Lines in the new contents.
    pub lines_after: usize,
    /// Whether the original contents ended before the excised range did.
    pub clamped: bool,
}

/// Apply `excision` to `contents`, returning the new contents.
pub fn rewrite_contents(
    contents: &str,
    excision: &Excision,
    line_mode: LineMode,
) -> (String, RewriteSummary) {
    let lines = line_mode.split(contents);
    let spliced = excision.apply(&lines, line_mode);
    let summary = RewriteSummary {
        lines_before: lines.len(),
        lines_removed: spliced.removed,
        lines_after: spliced.lines.len(),
        clamped: spliced.clamped,
    };
    (line_mode.join(&spliced.lines), summary)
}

/// Read the file at `opts.path`, apply the excision, and overwrite the file with the result.
///
/// The original contents aren't kept anywhere. Running this twice removes a different range the
/// second time.
#[instrument(level = "debug", skip_all, fields(path = %opts.path))]
pub fn rewrite_file(opts: &RewriteOpts) -> miette::Result<RewriteSummary> {
    let contents = fs::read_to_string(&opts.path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", opts.path))?;

    let (contents, summary) = rewrite_contents(&contents, &opts.excision, opts.line_mode);

    if summary.clamped {
        let range = opts.excision.range();
        tracing::debug!(
            lines = summary.lines_before,
            start = range.start,
            end = range.end,
            "File ends before the excised range does"
        );
    }

    fs::write(&opts.path, contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", opts.path))?;

    tracing::debug!(
        lines_before = summary.lines_before,
        lines_removed = summary.lines_removed,
        lines_after = summary.lines_after,
        "Rewrote file"
    );

    Ok(summary)
}
