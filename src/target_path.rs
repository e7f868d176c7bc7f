//! The path of the file being rewritten.

use std::fmt::Display;
use std::path::Path;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use clap::builder::PathBufValueParser;
use clap::builder::TypedValueParser;
use clap::builder::ValueParserFactory;
use miette::miette;
use miette::Context;
use miette::IntoDiagnostic;
use path_absolutize::Absolutize;

/// A file to rewrite, as an absolute path with dots removed (see [`path_absolutize`]) along with
/// a path relative to the directory it was resolved from.
///
/// [`Display`]ed as the relative path, so log messages stay short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    absolute: Utf8PathBuf,
    relative: Option<Utf8PathBuf>,
}

impl TargetPath {
    /// Resolve `path` against the `base` directory.
    pub fn new(path: impl AsRef<Path>, base: impl AsRef<Path>) -> miette::Result<Self> {
        let base = base.as_ref();
        let absolute: Utf8PathBuf = path
            .as_ref()
            .absolutize_from(base)
            .into_diagnostic()?
            .into_owned()
            .try_into()
            .map_err(|err| miette!("{err}"))?;
        let relative = pathdiff::diff_paths(&absolute, base)
            .map(Utf8PathBuf::try_from)
            .transpose()
            .map_err(|err| miette!("{err}"))?;
        Ok(Self { absolute, relative })
    }

    /// Resolve `path` against the current working directory.
    pub fn from_cwd(path: impl AsRef<Path>) -> miette::Result<Self> {
        Self::new(
            path,
            std::env::current_dir()
                .into_diagnostic()
                .wrap_err("Failed to get current directory")?,
        )
    }

    /// The absolute path.
    pub fn absolute(&self) -> &Utf8Path {
        &self.absolute
    }

    /// The relative path, or the absolute path if the two share no common base.
    pub fn relative(&self) -> &Utf8Path {
        self.relative.as_deref().unwrap_or(&self.absolute)
    }
}

impl Display for TargetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.relative(), f)
    }
}

impl AsRef<Utf8Path> for TargetPath {
    fn as_ref(&self) -> &Utf8Path {
        &self.absolute
    }
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        self.absolute.as_std_path()
    }
}

/// [`clap`] parser for [`TargetPath`] values, resolved against the current working directory.
#[derive(Default, Clone)]
pub struct TargetPathValueParser {
    inner: PathBufValueParser,
}

impl TypedValueParser for TargetPathValueParser {
    type Value = TargetPath;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let path = self.inner.parse_ref(cmd, arg, value)?;
        TargetPath::from_cwd(path).map_err(|err| {
            crate::clap::value_validation_error(arg, &value.to_string_lossy(), err).with_cmd(cmd)
        })
    }
}

impl ValueParserFactory for TargetPath {
    type Parser = TargetPathValueParser;

    fn value_parser() -> Self::Parser {
        Self::Parser::default()
    }
}
