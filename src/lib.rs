//! `excise` removes a range of lines from a source file and splices a fixed replacement fragment
//! in their place, overwriting the file.
//!
//! With no arguments it removes a duplicated `calculateTotals` function: lines 56 up to (but not
//! including) 91, counting from zero, are replaced with a short comment and a call to the hook's
//! `calculateTotals`. Nothing is parsed or checked; the line numbers are trusted as given.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clap;
pub mod cli;
mod excision;
mod lines;
mod rewrite;
mod target_path;
mod tracing;

pub use excision::Excision;
pub use excision::Spliced;
pub use excision::CALCULATIONS_FRAGMENT;
pub use excision::DEFAULT_END;
pub use excision::DEFAULT_START;
pub use lines::LineMode;
pub use rewrite::rewrite_contents;
pub use rewrite::rewrite_file;
pub use rewrite::RewriteOpts;
pub use rewrite::RewriteSummary;
pub use rewrite::SUCCESS_MESSAGE;
pub use target_path::TargetPath;
pub use self::tracing::TracingOpts;
