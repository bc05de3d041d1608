//! Input emulation.
//!
//! Curses programs read keys with a single call whose waiting behavior is
//! configured separately: block forever, wait a bounded number of tenths of
//! a second ("half-delay"), or return at once ("nodelay"). The host only
//! offers a poll with a millisecond timeout, so this module folds the mode
//! into that timeout.
//!
//! - **keys**: curses key codes and crossterm event decoding
//! - **terminal**: the crossterm-backed host input source
//! - **scripted**: a canned input source for tests and headless runs

pub mod keys;
pub mod scripted;
pub mod terminal;

use std::io;

pub use keys::Key;
pub use scripted::ScriptedInput;
pub use terminal::TerminalInput;

/// Timeout value telling the host to wait until a key arrives
pub const WAIT_FOREVER: u32 = 0;

/// Timeout used for nodelay reads; the smallest non-zero wait
pub const NONBLOCKING_TIMEOUT_MS: u32 = 1;

/// Host input primitive.
///
/// `poll_key` must not block longer than a non-zero `timeout_ms`, and may
/// block indefinitely when given [`WAIT_FOREVER`]. `None` means no key
/// arrived in time.
pub trait InputSource {
    /// Prepare input handling. Called once when the screen is initialized.
    fn setup(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn poll_key(&mut self, timeout_ms: u32) -> io::Result<Option<Key>>;

    /// Undo whatever `setup` changed. Called on screen shutdown.
    fn teardown(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn setup(&mut self) -> io::Result<()> {
        (**self).setup()
    }

    fn poll_key(&mut self, timeout_ms: u32) -> io::Result<Option<Key>> {
        (**self).poll_key(timeout_ms)
    }

    fn teardown(&mut self) -> io::Result<()> {
        (**self).teardown()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn setup(&mut self) -> io::Result<()> {
        (**self).setup()
    }

    fn poll_key(&mut self, timeout_ms: u32) -> io::Result<Option<Key>> {
        (**self).poll_key(timeout_ms)
    }

    fn teardown(&mut self) -> io::Result<()> {
        (**self).teardown()
    }
}

/// How `read_key` waits. Exactly one mode is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Wait until a key arrives
    #[default]
    Blocking,
    /// Wait up to n tenths of a second
    TimedTenths(u32),
    /// Return immediately
    NonBlocking,
}

impl InputMode {
    /// Timeout handed to the host for one poll
    pub fn timeout_ms(self) -> u32 {
        match self {
            InputMode::Blocking => WAIT_FOREVER,
            InputMode::TimedTenths(tenths) => tenths.saturating_mul(100),
            InputMode::NonBlocking => NONBLOCKING_TIMEOUT_MS,
        }
    }
}

/// Issue exactly one host poll for `mode`. Nothing is retried or buffered.
pub fn read_key<I>(input: &mut I, mode: InputMode) -> io::Result<Option<Key>>
where
    I: InputSource + ?Sized,
{
    input.poll_key(mode.timeout_ms())
}
