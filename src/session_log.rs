//! JSON-lines session log.
//!
//! The terminal is in raw mode while playing, so nothing is printed. When a log
//! path is configured, each record is appended as one JSON object per line.
//! Write failures are remembered and reported after the terminal is restored;
//! they never interrupt the game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        seed: u32,
        grid_width: u16,
        grid_height: u16,
        fall_interval_ms: u32,
    },
    Lock {
        kind: &'static str,
        x: i16,
        y: i16,
        rows_cleared: u32,
    },
    GameOver {
        pieces: u32,
        rows: u32,
    },
    /// Intents discarded because one frame queued more than the batch holds.
    InputOverflow {
        dropped: u32,
    },
    SessionEnd {
        pieces: u32,
        rows: u32,
    },
}

impl From<LockEvent> for LogRecord {
    fn from(event: LockEvent) -> Self {
        LogRecord::Lock {
            kind: event.kind.as_str(),
            x: event.x,
            y: event.y,
            rows_cleared: event.rows_cleared,
        }
    }
}

/// Optional sink for [`LogRecord`]s. Disabled sinks accept and drop everything.
#[derive(Debug, Default)]
pub struct SessionLog {
    out: Option<BufWriter<File>>,
    first_error: Option<String>,
}

impl SessionLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening session log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            first_error: None,
        })
    }

    /// Open the configured path, or return a disabled log.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = write_line(out, record) {
            // Stop logging after the first failure; keep the message for the exit report.
            self.first_error.get_or_insert_with(|| e.to_string());
            self.out = None;
        }
    }

    /// Flush buffered records. Returns the first write error seen, if any.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush().context("flushing session log")?;
        }
        match self.first_error.take() {
            Some(e) => Err(anyhow::anyhow!("session log disabled after error: {e}")),
            None => Ok(()),
        }
    }
}

fn write_line(out: &mut impl Write, record: &LogRecord) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}
