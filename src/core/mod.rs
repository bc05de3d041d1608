//! Core curses emulation.
//!
//! - **attr**: attribute flags, colors and the color-pair table
//! - **escape**: stateless escape-sequence encoder
//! - **screen**: the session state machine that draws through the encoder
//! - **acs**: ASCII fallbacks for the line-drawing character set
//! - **mouse**: mouse types; mouse input is never reported
//!
//! # Architecture
//!
//! ```text
//! Screen
//! ├── output stream (any io::Write)
//! ├── InputSource (host key poll)
//! └── session state
//!     ├── cursor + visibility
//!     ├── standing Attr
//!     ├── ColorPairs (64 slots)
//!     └── InputMode
//! ```

pub mod acs;
pub mod attr;
pub mod escape;
pub mod mouse;
pub mod screen;

pub use attr::{Attr, Color, ColorPair, ColorPairs, MAX_COLOR_PAIRS};
pub use screen::{nap_ms, Position, Screen};
