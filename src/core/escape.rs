//! Escape-sequence encoder
//!
//! Stateless translation from attribute/color snapshots and grid coordinates
//! to ANSI/VT text. Fixed sequences come from crossterm's commands; the
//! basic 8-color SGR codes (`30+n` / `40+n`) are written directly because
//! crossterm encodes its named colors as 256-color indices.

use std::fmt::Write;

use crossterm::{
    cursor::{Hide, Show},
    event::DisableFocusChange,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    Command,
};

use super::attr::{Attr, ColorPairs};

/// Move to the top-left cell
pub const HOME: &str = "\x1b[H";

/// Audible bell
pub const BELL: &str = "\x07";

fn push_command(buf: &mut String, command: impl Command) {
    // Formatting into a String cannot fail
    let _ = command.write_ansi(buf);
}

fn command_text(command: impl Command) -> String {
    let mut buf = String::new();
    push_command(&mut buf, command);
    buf
}

/// Cursor-positioning sequence for a zero-based (row, col).
///
/// Coordinates are passed through unchecked; the terminal clamps.
pub fn encode_move(row: i32, col: i32) -> String {
    format!("\x1b[{};{}H", row.saturating_add(1), col.saturating_add(1))
}

/// "All attributes off"
pub fn encode_reset() -> String {
    command_text(SetAttribute(Attribute::Reset))
}

/// Full SGR sequence for `attrs`: reset, pair colors, then style flags.
///
/// The order reset, color, bold, dim, underline, reverse, standout is fixed.
/// Standout has no rendering of its own and is written as reverse.
pub fn encode_attributes(attrs: Attr, pairs: &ColorPairs) -> String {
    let mut buf = encode_reset();

    if let Some(pair) = pairs.lookup(attrs.pair()) {
        if let Some(fg) = pair.fg {
            let _ = write!(buf, "\x1b[{}m", fg.fg_code());
        }
        if let Some(bg) = pair.bg {
            let _ = write!(buf, "\x1b[{}m", bg.bg_code());
        }
    }

    if attrs.contains(Attr::BOLD) {
        push_command(&mut buf, SetAttribute(Attribute::Bold));
    }
    if attrs.contains(Attr::DIM) {
        push_command(&mut buf, SetAttribute(Attribute::Dim));
    }
    if attrs.contains(Attr::UNDERLINE) {
        push_command(&mut buf, SetAttribute(Attribute::Underlined));
    }
    if attrs.contains(Attr::REVERSE) {
        push_command(&mut buf, SetAttribute(Attribute::Reverse));
    }
    if attrs.contains(Attr::STANDOUT) {
        push_command(&mut buf, SetAttribute(Attribute::Reverse));
    }

    buf
}

/// Sequence written after an attributed payload: the standing attributes
/// when there are any, otherwise a plain reset. Re-applying begins with a
/// reset of its own, so the two cases share the leading `ESC[0m`.
pub fn encode_restore(standing: Attr, pairs: &ColorPairs) -> String {
    if standing.is_normal() {
        encode_reset()
    } else {
        encode_attributes(standing, pairs)
    }
}

/// Clear the whole grid and home the cursor
pub fn encode_erase() -> String {
    let mut buf = command_text(Clear(ClearType::All));
    buf.push_str(HOME);
    buf
}

/// Session start: alternate screen, focus reporting off, clear, home
pub fn encode_enter() -> String {
    let mut buf = command_text(EnterAlternateScreen);
    // Focus reports would otherwise arrive as stray `ESC [ I` / `ESC [ O` input
    push_command(&mut buf, DisableFocusChange);
    buf.push_str(&encode_erase());
    buf
}

/// Session end: reset attributes, show cursor, leave the alternate screen
pub fn encode_leave() -> String {
    let mut buf = encode_reset();
    push_command(&mut buf, Show);
    push_command(&mut buf, LeaveAlternateScreen);
    buf
}

/// Show or hide the cursor
pub fn encode_cursor_visible(visible: bool) -> String {
    if visible {
        command_text(Show)
    } else {
        command_text(Hide)
    }
}
