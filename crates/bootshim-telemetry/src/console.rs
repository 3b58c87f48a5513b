//! Browser console writer for the fmt layer.
//!
//! The fmt layer asks for one writer per event and drops it once the event is
//! formatted, so each writer buffers exactly one line and emits it on drop.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub(crate) fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}

/// `tracing_subscriber` writer factory targeting the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

pub(crate) struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.buffer.clear();
        Some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    match method {
        ConsoleMethod::Error => gloo::console::error!(line),
        ConsoleMethod::Warn => gloo::console::warn!(line),
        ConsoleMethod::Info => gloo::console::info!(line),
        ConsoleMethod::Debug => gloo::console::debug!(line),
    }
}

// Host test builds have no console to write to.
#[cfg(not(target_arch = "wasm32"))]
const fn emit(_method: ConsoleMethod, _line: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn writer_emits_one_line_per_event() -> io::Result<()> {
        let mut writer = ConsoleMakeWriter.make_writer();
        writer.write_all(b" WARN bootshim_core::loader: application module failed")?;
        writer.write_all(b" reason=network down\r\n")?;
        assert_eq!(
            writer.take_line().as_deref(),
            Some(" WARN bootshim_core::loader: application module failed reason=network down")
        );
        assert_eq!(writer.take_line(), None);
        Ok(())
    }

    #[test]
    fn multi_line_messages_stay_in_one_entry() -> io::Result<()> {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Error);
        writer.write_all(b"panicked at src/lib.rs:42:9:\nindex out of bounds\n")?;
        assert_eq!(
            writer.take_line().as_deref(),
            Some("panicked at src/lib.rs:42:9:\nindex out of bounds")
        );
        Ok(())
    }
}
