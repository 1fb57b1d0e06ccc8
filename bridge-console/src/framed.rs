//! Framed Console Implementation

use bridge_traits::{
    error::{BridgeError, Result},
    DisplayImpl,
};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Separator line written around every block of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub fill: char,
    pub width: usize,
}

impl Frame {
    pub fn new(fill: char, width: usize) -> Self {
        Self { fill, width }
    }

    /// Render the separator line (without line terminator).
    pub fn line(&self) -> String {
        std::iter::repeat(self.fill).take(self.width).collect()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            fill: '=',
            width: 8,
        }
    }
}

/// Line-oriented backend that brackets every block with a separator line.
///
/// Works on any [`Write`] sink:
/// - `FramedConsole::stdout()` for the terminal
/// - `FramedConsole::create_file(path)` for a file
/// - `FramedConsole::new(Vec::new())` for an in-memory buffer
///
/// The writer sits behind a mutex so one instance can be shared by several
/// displays through an `Arc`.
pub struct FramedConsole<W> {
    writer: Mutex<W>,
    frame: Frame,
}

impl FramedConsole<Stdout> {
    /// Framed console on the process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl FramedConsole<BufWriter<File>> {
    /// Framed console writing to a newly created (or truncated) file
    pub fn create_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl FramedConsole<Vec<u8>> {
    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> Result<String> {
        let buffer = self.lock()?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl<W: Write> FramedConsole<W> {
    pub fn new(writer: W) -> Self {
        Self::with_frame(writer, Frame::default())
    }

    pub fn with_frame(writer: W, frame: Frame) -> Self {
        Self {
            writer: Mutex::new(writer),
            frame,
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Write one unframed line on the same sink (e.g. a banner).
    pub fn write_line(&self, text: &str) -> Result<()> {
        let mut writer = self.lock()?;
        writeln!(writer, "{}", text)?;
        writer.flush()?;
        Ok(())
    }

    /// Consume the console and hand back its writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| BridgeError::OperationFailed("console writer lock poisoned".into()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, W>> {
        self.writer
            .lock()
            .map_err(|_| BridgeError::OperationFailed("console writer lock poisoned".into()))
    }

    fn print_separator(&self) -> Result<()> {
        let mut writer = self.lock()?;
        writeln!(writer, "{}", self.frame.line())?;
        Ok(())
    }
}

impl<W: Write + Send> DisplayImpl for FramedConsole<W> {
    fn raw_open(&self) -> Result<()> {
        trace!("raw_open");
        self.print_separator()
    }

    fn raw_print(&self, text: &str) -> Result<()> {
        trace!(len = text.len(), "raw_print");
        let mut writer = self.lock()?;
        writeln!(writer, "{}", text)?;
        Ok(())
    }

    fn raw_close(&self) -> Result<()> {
        trace!("raw_close");
        self.print_separator()?;
        self.lock()?.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// Writer that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_frame() {
        assert_eq!(Frame::default().line(), "========");
        assert_eq!(Frame::new('-', 3).line(), "---");
        assert_eq!(Frame::new('*', 0).line(), "");
    }

    #[test]
    fn test_open_print_close() {
        let console = FramedConsole::new(Vec::new());
        console.raw_open().unwrap();
        console.raw_print("HogeHoge").unwrap();
        console.raw_close().unwrap();

        assert_eq!(console.contents().unwrap(), "========\nHogeHoge\n========\n");
    }

    #[test]
    fn test_custom_frame() {
        let console = FramedConsole::with_frame(Vec::new(), Frame::new('#', 4));
        assert_eq!(console.frame(), Frame::new('#', 4));
        assert_eq!(FramedConsole::new(Vec::new()).frame(), Frame::default());

        console.raw_open().unwrap();
        console.raw_close().unwrap();

        assert_eq!(console.contents().unwrap(), "####\n####\n");
    }

    #[test]
    fn test_write_line_is_unframed() {
        let console = FramedConsole::new(Vec::new());
        console.write_line("banner").unwrap();
        console.raw_print("body").unwrap();

        assert_eq!(console.into_inner().unwrap(), b"banner\nbody\n".to_vec());
    }

    #[test]
    fn test_empty_fragment_still_terminates_line() {
        let console = FramedConsole::new(Vec::new());
        console.raw_print("").unwrap();
        assert_eq!(console.contents().unwrap(), "\n");
    }

    #[test]
    fn test_writer_failure_surfaces_as_io_error() {
        let console = FramedConsole::new(BrokenPipe);
        let err = console.raw_open().unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }

    #[test]
    fn test_file_backed_console() {
        let path = env::temp_dir().join("bridge-console-framed-test.txt");
        let _ = std::fs::remove_file(&path);

        let console = FramedConsole::create_file(&path).unwrap();
        console.raw_open().unwrap();
        console.raw_print("on disk").unwrap();
        console.raw_close().unwrap();
        drop(console);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "========\non disk\n========\n");

        let _ = std::fs::remove_file(&path);
    }
}
