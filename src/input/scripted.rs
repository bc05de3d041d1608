//! Canned input source
//!
//! Replays a fixed list of poll results and records every timeout it was
//! asked to wait for. Once the script runs out every poll reports no input.

use std::collections::VecDeque;
use std::io;

use super::keys::Key;
use super::InputSource;

#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<Key>>,
    polls: Vec<u32>,
    setup_calls: usize,
    teardown_calls: usize,
    setup_error: Option<io::ErrorKind>,
}

impl ScriptedInput {
    /// Poll results in order; `None` entries simulate a timeout
    pub fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A script where every poll yields a key
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(Some))
    }

    /// Make `setup` fail with the given error kind
    pub fn with_setup_error(mut self, kind: io::ErrorKind) -> Self {
        self.setup_error = Some(kind);
        self
    }

    /// Timeouts passed to each poll so far
    pub fn polls(&self) -> &[u32] {
        &self.polls
    }

    pub fn setup_calls(&self) -> usize {
        self.setup_calls
    }

    pub fn teardown_calls(&self) -> usize {
        self.teardown_calls
    }
}

impl InputSource for ScriptedInput {
    fn setup(&mut self) -> io::Result<()> {
        self.setup_calls += 1;
        match self.setup_error {
            Some(kind) => Err(io::Error::new(kind, "scripted setup failure")),
            None => Ok(()),
        }
    }

    fn poll_key(&mut self, timeout_ms: u32) -> io::Result<Option<Key>> {
        self.polls.push(timeout_ms);
        Ok(self.script.pop_front().flatten())
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.teardown_calls += 1;
        Ok(())
    }
}
