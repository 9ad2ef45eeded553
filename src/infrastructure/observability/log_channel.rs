//! Log capture for the diagnostics strip.
//!
//! A `tracing_subscriber` writer that forwards formatted lines over a
//! crossbeam channel, and a bounded feed the UI drains every frame.

use crossbeam_channel::{Receiver, Sender};
use std::collections::VecDeque;

// A writer that sends logs to the UI via a crossbeam channel
pub struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        // Dropped silently when the UI is gone
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl ChannelWriterFactory {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

/// Severity parsed back out of a formatted line, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogSeverity {
    pub fn of(line: &str) -> Self {
        if line.contains("ERROR") {
            LogSeverity::Error
        } else if line.contains("WARN") {
            LogSeverity::Warn
        } else if line.contains("DEBUG") || line.contains("TRACE") {
            LogSeverity::Debug
        } else {
            LogSeverity::Info
        }
    }
}

/// Most recent log lines, oldest first.
pub struct LogFeed {
    rx: Receiver<String>,
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogFeed {
    pub fn new(rx: Receiver<String>, capacity: usize) -> Self {
        Self {
            rx,
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    /// Pulls everything currently queued. Returns the number of new lines.
    pub fn drain(&mut self) -> usize {
        let mut received = 0;
        while let Ok(msg) = self.rx.try_recv() {
            for line in msg.lines().filter(|l| !l.trim().is_empty()) {
                if self.lines.len() == self.capacity {
                    self.lines.pop_front();
                }
                self.lines.push_back(line.to_string());
                received += 1;
            }
        }
        received
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_forwards_bytes() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut writer = ChannelWriter { sender: tx };

        writer.write_all(b" INFO saved\n").unwrap();
        assert_eq!(rx.try_recv().unwrap(), " INFO saved\n");
    }

    #[test]
    fn test_feed_keeps_latest_lines() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut feed = LogFeed::new(rx, 2);
        assert!(feed.is_empty());

        tx.send("one\ntwo\n".to_string()).unwrap();
        tx.send("three\n\n".to_string()).unwrap();

        assert_eq!(feed.drain(), 3);
        assert_eq!(feed.lines().collect::<Vec<_>>(), vec!["two", "three"]);
        assert_eq!(feed.drain(), 0);
        assert_eq!(feed.len(), 2);

        feed.clear();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_severity_detection() {
        assert_eq!(LogSeverity::of("ERROR Persistence write failed"), LogSeverity::Error);
        assert_eq!(LogSeverity::of(" WARN Starting fresh"), LogSeverity::Warn);
        assert_eq!(LogSeverity::of(" INFO Autosave started"), LogSeverity::Info);
        assert_eq!(LogSeverity::of("DEBUG Autosave command"), LogSeverity::Debug);
    }
}
