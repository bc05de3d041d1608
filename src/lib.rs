//! vtcurses - a curses-style character-cell API over plain ANSI/VT output
//!
//! Programs written against the classic cursor-addressable, attribute-aware
//! grid API (move, add a character, turn on bold, register a color pair,
//! read a key) run against any ANSI-capable terminal without a native
//! terminal library. Every call writes escape sequences immediately; there is
//! no off-screen buffer and no diffing.
//!
//! # Layers
//!
//! - **core::escape**: pure encoder from attribute state and coordinates to
//!   escape sequences
//! - **core::screen**: the session state machine (`Screen`)
//! - **input**: folds blocking / half-delay / nodelay reads into one timed
//!   host poll
//!
//! # Example
//!
//! ```no_run
//! use vtcurses::{Attr, Color, Dimensions, Screen, TerminalInput};
//!
//! # fn main() -> vtcurses::Result<()> {
//! let mut screen = Screen::init(std::io::stdout(), TerminalInput::new(), Dimensions::from_env())?;
//! screen.init_pair(1, Some(Color::Red), Some(Color::Black));
//! screen.attr_on(Attr::color_pair(1) | Attr::BOLD);
//! screen.mv_add_str(0, 0, "HP")?;
//! screen.refresh()?;
//! screen.read_key()?;
//! screen.shutdown()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod input;

pub use crate::config::{Config, Dimensions};
pub use crate::core::{acs, Attr, Color, ColorPair, Position, Screen};
pub use crate::error::{CursesError, Result};
pub use crate::input::{InputMode, InputSource, Key, ScriptedInput, TerminalInput};
