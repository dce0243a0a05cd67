// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use derive_builder::Builder;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use text_stats_domain::DEFAULT_TOP_N;
use text_stats_infra::{FileTextSource, ReaderTextSource};
use text_stats_ports::TextSource;
use text_stats_shared_kernel::PresentationError;

/// Where the text to analyze is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` is the conventional spelling of standard input.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn open(&self) -> Box<dyn TextSource> {
        match self {
            Self::Stdin => Box::new(ReaderTextSource::stdin()),
            Self::File(path) => Box::new(FileTextSource::new(path)),
        }
    }
}

/// Missing builder fields fall back to [`Config::default`].
#[derive(Debug, Clone, Builder)]
#[builder(default, setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
    pub show_frequencies: bool,
    pub top_n: usize,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            format: OutputFormat::default(),
            show_frequencies: false,
            top_n: DEFAULT_TOP_N,
            log_level: LevelFilter::Warn,
        }
    }
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.input {
            Some(InputSource::File(path)) if path.as_os_str().is_empty() => {
                Err("input path must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl From<ConfigBuilderError> for PresentationError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::ConfigBuildFailed(err.to_string())
    }
}

/// `-v` の回数からログレベルを決める
pub const fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .input(InputSource::from_path(args.file))
            .format(args.output.format)
            .show_frequencies(args.output.freq)
            .top_n(args.output.top)
            .log_level(level_from_verbosity(args.behavior.verbose))
            .build()
            .map_err(PresentationError::from)
    }
}
