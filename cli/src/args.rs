use boardtables::{
    Feature, Layout, OutputKind, ParseFeatureError,
    emit::{self, Block, EmitOptions},
};
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;

pub const USAGE: &str = "\
usage: boardtables [options]

options:
  -f, --feature NAME  emit only this feature (repeatable)
      --array         emit square index lists
      --bitboard      emit bitboard literals
      --inline        keep each bitboard literal on one line
  -o, --output PATH   write to PATH instead of stdout
      --blob DIR      also write raw little endian tables to DIR
      --check         decode and verify every literal before writing
  -q, --quiet         no progress output
  -h, --help          show this message";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Args {
    pub features: Vec<Feature>,
    pub kinds: Vec<OutputKind>,
    pub layout: Layout,
    pub output: Option<PathBuf>,
    pub blob_dir: Option<PathBuf>,
    pub check: bool,
    pub quiet: bool,
    pub help: bool,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("invalid argument: '{0}'")]
    InvalidArgument(String),
    #[error("expected value for '{0}'")]
    ExpectedValue(String),
    #[error(transparent)]
    UnknownFeature(#[from] ParseFeatureError),
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Args, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut parsed = Args::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-f" | "--feature" => {
                    let feature = Self::parse_value::<Feature>(&arg, args.next())?;
                    if !parsed.features.contains(&feature) {
                        parsed.features.push(feature);
                    }
                }
                "--array" => parsed.add_kind(OutputKind::Array),
                "--bitboard" => parsed.add_kind(OutputKind::Bitboard),
                "--inline" => parsed.layout = Layout::Inline,
                "-o" | "--output" => {
                    parsed.output = Some(Self::parse_value(&arg, args.next())?)
                }
                "--blob" => parsed.blob_dir = Some(Self::parse_value(&arg, args.next())?),
                "--check" => parsed.check = true,
                "-q" | "--quiet" => parsed.quiet = true,
                "-h" | "--help" => parsed.help = true,
                _ => return Err(ArgsError::InvalidArgument(arg)),
            }
        }

        Ok(parsed)
    }

    fn parse_value<T>(flag: &str, value: Option<String>) -> Result<T, ArgsError>
    where
        T: FromStr,
        ArgsError: From<T::Err>,
    {
        let value = value.ok_or_else(|| ArgsError::ExpectedValue(flag.to_owned()))?;
        Ok(value.parse::<T>()?)
    }

    fn add_kind(&mut self, kind: OutputKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Features that were asked for, or all of them.
    pub fn selected_features(&self) -> &[Feature] {
        if self.features.is_empty() {
            &Feature::ALL
        } else {
            &self.features
        }
    }

    pub fn blocks(&self) -> Vec<Block> {
        match (self.kinds.is_empty(), self.features.is_empty()) {
            (true, true) => emit::default_batch(),
            (true, false) => emit::batch(&[OutputKind::Bitboard], &self.features),
            (false, _) => emit::batch(&self.kinds, self.selected_features()),
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_layout(self.layout)
            .with_check(self.check)
    }
}

impl From<std::convert::Infallible> for ArgsError {
    fn from(error: std::convert::Infallible) -> Self {
        match error {}
    }
}
