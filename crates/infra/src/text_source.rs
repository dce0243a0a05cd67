// crates/infra/src/text_source.rs
use std::io::{Read, Stdin};
use std::path::{Path, PathBuf};

use text_stats_ports::TextSource;
use text_stats_shared_kernel::Result;

use crate::persistence::{FileReader, decode_utf8};

/// Reads the text from a file on disk.
#[derive(Debug, Clone)]
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileTextSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&mut self) -> Result<String> {
        let bytes = FileReader::read_to_end(&self.path)?;
        log::debug!("read {} bytes from {}", bytes.len(), self.path.display());
        Ok(decode_utf8(bytes, &self.origin())?)
    }
}

/// Reads the text from any byte stream, e.g. standard input.
#[derive(Debug)]
pub struct ReaderTextSource<R> {
    reader: R,
    label: String,
}

impl<R: Read> ReaderTextSource<R> {
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self { reader, label: label.into() }
    }
}

impl ReaderTextSource<Stdin> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin(), "<stdin>")
    }
}

impl<R: Read> TextSource for ReaderTextSource<R> {
    fn origin(&self) -> String {
        self.label.clone()
    }

    fn read_text(&mut self) -> Result<String> {
        let bytes = FileReader::drain(&mut self.reader, &self.label)?;
        log::debug!("read {} bytes from {}", bytes.len(), self.label);
        Ok(decode_utf8(bytes, &self.label)?)
    }
}
