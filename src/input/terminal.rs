//! Host input source backed by crossterm
//!
//! Puts the terminal in raw mode on setup and turns crossterm key events
//! into curses key codes. Focus changes, mouse reports, resizes and key
//! releases are swallowed here and never reach `read_key`.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::{debug, trace};

use super::keys::{decode_key, Key};
use super::{InputSource, WAIT_FOREVER};

/// Keyboard input from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalInput {
    raw_mode: bool,
    /// Remaining codes of a press that decoded to several (UTF-8, Alt+char)
    pending: VecDeque<Key>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_event(deadline: Option<Instant>) -> io::Result<Option<Event>> {
        match deadline {
            None => event::read().map(Some),
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if event::poll(remaining)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn setup(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        debug!("raw mode enabled");
        Ok(())
    }

    fn poll_key(&mut self, timeout_ms: u32) -> io::Result<Option<Key>> {
        if let Some(key) = self.pending.pop_front() {
            return Ok(Some(key));
        }

        let deadline = (timeout_ms != WAIT_FOREVER)
            .then(|| Instant::now() + Duration::from_millis(timeout_ms.into()));

        while let Some(event) = Self::next_event(deadline)? {
            match event {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let mut codes = decode_key(&key).into_iter();
                    if let Some(first) = codes.next() {
                        self.pending.extend(codes);
                        return Ok(Some(first));
                    }
                    trace!(?key, "key has no curses code");
                }
                other => trace!(event = ?other, "discarding input event"),
            }
        }
        Ok(None)
    }

    fn teardown(&mut self) -> io::Result<()> {
        if self.raw_mode {
            self.raw_mode = false;
            terminal::disable_raw_mode()?;
            debug!("raw mode disabled");
        }
        Ok(())
    }
}
