//! `tracing` output for the browser console.
//!
//! The fmt subscriber formats each event as one line; [`ConsoleWriter`]
//! buffers it and hands the finished line to `console.log`.

use std::io::{self, Write};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

fn console_log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}

/// Line-buffered writer that forwards complete lines to a sink.
pub struct ConsoleWriter {
    buf: Vec<u8>,
    sink: fn(&str),
}

impl ConsoleWriter {
    pub fn new(sink: fn(&str)) -> Self {
        Self { buf: Vec::new(), sink }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let text = String::from_utf8_lossy(&self.buf);
            (self.sink)(text.trim_end_matches('\n'));
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Hands out a fresh [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug)]
pub struct MakeConsoleWriter {
    sink: fn(&str),
}

impl Default for MakeConsoleWriter {
    fn default() -> Self {
        Self { sink: console_log }
    }
}

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.sink)
    }
}

/// Install the global subscriber. A second call is reported and ignored.
pub fn init(level: LevelFilter) {
    let result = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter::default())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "logging already initialised: {err}"
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(line: &str) {
        LINES.with(|lines| lines.borrow_mut().push(line.to_string()));
    }

    #[test]
    fn writer_emits_one_line_per_event() {
        {
            let mut writer = ConsoleWriter::new(capture);
            writer.write_all(b" INFO page ").unwrap();
            writer.write_all(b"mounted\n").unwrap();
        }
        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(lines, vec![" INFO page mounted".to_string()]);
    }

    #[test]
    fn empty_writer_emits_nothing() {
        LINES.with(|lines| lines.borrow_mut().clear());
        drop(ConsoleWriter::new(capture));
        assert!(LINES.with(|lines| lines.borrow().is_empty()));
    }
}
