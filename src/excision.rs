//! Splicing a replacement fragment over a range of lines.

use std::borrow::Cow;
use std::ops::Range;

use miette::miette;

use crate::lines::LineMode;

/// The first excised line (zero-based, inclusive) of the duplicated `calculateTotals` function.
pub const DEFAULT_START: usize = 56;

/// The line after the duplicated `calculateTotals` function (zero-based, exclusive).
pub const DEFAULT_END: usize = 91;

/// Lines inserted where the duplicated function used to be.
pub const CALCULATIONS_FRAGMENT: [&str; 3] = [
    "    // --- CALCULATIONS (from hook) ---",
    "    const totals = calculateTotals();",
    "",
];

/// A range of lines to remove and the lines to put in their place.
///
/// Bounds past the end of a file clamp to its length, like slicing in most scripting languages:
/// applying an [`Excision`] never fails, it just removes fewer lines (or none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excision {
    range: Range<usize>,
    replacement: Vec<String>,
}

impl Excision {
    /// Construct a new excision. Fails if `range` ends before it starts.
    pub fn new(
        range: Range<usize>,
        replacement: impl IntoIterator<Item = impl Into<String>>,
    ) -> miette::Result<Self> {
        if range.end < range.start {
            return Err(miette!(
                "Excised range ends at line {} before it starts at line {}",
                range.end,
                range.start
            ));
        }

        Ok(Self {
            range,
            replacement: replacement.into_iter().map(Into::into).collect(),
        })
    }

    /// The zero-based, half-open range of lines to remove.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The lines inserted in place of the range, without terminators.
    pub fn replacement(&self) -> &[String] {
        &self.replacement
    }

    /// Splice the replacement over the excised range of `lines`.
    ///
    /// Returns `lines[..start]`, then the replacement, then `lines[end..]`, with both bounds
    /// clamped to `lines.len()`.
    pub fn apply<'a>(&'a self, lines: &[&'a str], mode: LineMode) -> Spliced<'a> {
        let start = self.range.start.min(lines.len());
        let end = self.range.end.min(lines.len());

        let lines = lines[..start]
            .iter()
            .map(|line| Cow::Borrowed(*line))
            .chain(self.replacement.iter().map(|line| mode.inserted_line(line)))
            .chain(lines[end..].iter().map(|line| Cow::Borrowed(*line)))
            .collect();

        Spliced {
            lines,
            removed: end - start,
            clamped: end < self.range.end,
        }
    }
}

impl Default for Excision {
    fn default() -> Self {
        Self {
            range: DEFAULT_START..DEFAULT_END,
            replacement: CALCULATIONS_FRAGMENT.map(String::from).to_vec(),
        }
    }
}

/// The result of [`Excision::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced<'a> {
    /// The new lines, in [`LineMode`] form.
    pub lines: Vec<Cow<'a, str>>,
    /// How many of the original lines were removed.
    pub removed: usize,
    /// Whether the input was shorter than the excised range's end.
    pub clamped: bool,
}
