//! Splitting file contents into lines and joining them back together.

use std::borrow::Cow;

use clap::builder::PossibleValue;
use itertools::Itertools;
use line_span::LineSpanExt;

/// How file contents are broken into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Each line keeps its terminator (`\n` or `\r\n`) and lines are joined by concatenation.
    ///
    /// An empty file has no lines, and a missing final newline stays missing.
    #[default]
    KeepEndings,
    /// Contents are split on `\n` and joined with `\n`, so lines carry no terminators.
    ///
    /// A trailing newline produces a final empty line, and an empty file is one empty line.
    NewlineJoined,
}

impl LineMode {
    /// Split `contents` into lines.
    pub fn split(self, contents: &str) -> Vec<&str> {
        match self {
            LineMode::KeepEndings => contents
                .line_spans()
                .map(|span| span.as_str_with_ending())
                .collect(),
            LineMode::NewlineJoined => contents.split('\n').collect(),
        }
    }

    /// Format an inserted line, given without a terminator, so it can be joined with lines from
    /// [`LineMode::split`].
    pub fn inserted_line(self, text: &str) -> Cow<'_, str> {
        match self {
            LineMode::KeepEndings => Cow::Owned(format!("{text}\n")),
            LineMode::NewlineJoined => Cow::Borrowed(text),
        }
    }

    /// Join lines back into file contents. The inverse of [`LineMode::split`].
    pub fn join<S: AsRef<str>>(self, lines: &[S]) -> String {
        match self {
            LineMode::KeepEndings => lines.iter().map(AsRef::as_ref).collect(),
            LineMode::NewlineJoined => lines.iter().map(AsRef::as_ref).join("\n"),
        }
    }
}

impl clap::ValueEnum for LineMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::KeepEndings, Self::NewlineJoined]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            LineMode::KeepEndings => PossibleValue::new("keep-endings")
                .help("Keep each line's terminator and join lines by concatenation"),
            LineMode::NewlineJoined => PossibleValue::new("newline-joined")
                .help("Split on newlines and join lines with a newline"),
        })
    }
}
