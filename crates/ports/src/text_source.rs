// crates/ports/src/text_source.rs
use text_stats_shared_kernel::Result;

/// Port supplying one complete text to analyze.
///
/// Implementations decode their input as UTF-8; malformed bytes and I/O
/// failures are reported here, never inside the analyzer.
pub trait TextSource {
    /// Human readable label of the input, used in diagnostics and logs.
    fn origin(&self) -> String;

    /// Read the whole input.
    ///
    /// # Errors
    /// Returns an infrastructure error when the input cannot be read or is
    /// not valid UTF-8.
    fn read_text(&mut self) -> Result<String>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn origin(&self) -> String {
        (**self).origin()
    }

    fn read_text(&mut self) -> Result<String> {
        (**self).read_text()
    }
}
