use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use text_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading whole inputs with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::FileRead`] when the file cannot be opened or read.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let file_read = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };

        let mut reader = Self::open_buffered(path).map_err(file_read)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(file_read)?;
        Ok(buf)
    }

    /// Drain `reader` into memory.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::StreamRead`] labelled with `origin`.
    pub fn drain<R: Read>(reader: &mut R, origin: &str) -> InfraResult<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| InfrastructureError::StreamRead {
            origin: origin.to_string(),
            source,
        })?;
        Ok(buf)
    }
}

/// Strict UTF-8 decoding; malformed input is rejected rather than replaced.
///
/// # Errors
/// Returns [`InfrastructureError::InvalidEncoding`] pointing at the first bad byte.
pub fn decode_utf8(bytes: Vec<u8>, origin: &str) -> InfraResult<String> {
    String::from_utf8(bytes).map_err(|source| InfrastructureError::InvalidEncoding {
        origin: origin.to_string(),
        valid_up_to: source.utf8_error().valid_up_to(),
        source,
    })
}
