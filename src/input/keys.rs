//! Curses key codes
//!
//! Plain characters arrive as their byte value; special keys use the
//! classic curses numbering (`KEY_UP` = 0x103 and so on).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key code as returned by `read_key`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key(pub i32);

impl Key {
    /// Raw "no key" integer used by curses' `getch`. A plain `i32`, not a
    /// `Key`: `read_key` reports no key as `None`.
    pub const ERR_CODE: i32 = -1;

    pub const DOWN: Key = Key(0x102);
    pub const UP: Key = Key(0x103);
    pub const LEFT: Key = Key(0x104);
    pub const RIGHT: Key = Key(0x105);
    pub const HOME: Key = Key(0x106);
    pub const DC: Key = Key(0x14a);
    pub const IC: Key = Key(0x14b);
    pub const NPAGE: Key = Key(0x152);
    pub const PPAGE: Key = Key(0x153);
    pub const ENTER: Key = Key(0x157);
    pub const BTAB: Key = Key(0x161);
    pub const END: Key = Key(0x168);
    pub const MOUSE: Key = Key(0x199);

    pub const NEWLINE: Key = Key(0x0a);
    pub const TAB: Key = Key(0x09);
    pub const ESCAPE: Key = Key(0x1b);
    pub const BACKSPACE: Key = Key(0x7f);

    /// Function key `n` (`KEY_F(n)`)
    pub const fn f(n: u8) -> Key {
        Key(0x109 + n as i32)
    }

    /// Key code of a character. Meant for ASCII; the terminal source
    /// delivers other characters as their UTF-8 bytes.
    pub const fn from_char(ch: char) -> Key {
        Key(ch as i32)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    /// The ASCII character this key stands for, if any
    pub fn as_char(self) -> Option<char> {
        u8::try_from(self.0)
            .ok()
            .filter(u8::is_ascii)
            .map(char::from)
    }

    /// Collapse an optional key into a curses-style integer (`ERR_CODE` for none)
    pub fn code_or_err(key: Option<Key>) -> i32 {
        key.map_or(Key::ERR_CODE, Key::code)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::from_char(ch)
    }
}

/// Translate a crossterm key press into curses key codes.
///
/// Most presses give one code. Alt+char yields ESC followed by the char and
/// non-ASCII characters yield one code per UTF-8 byte. Keys with no curses
/// counterpart give an empty list.
pub fn decode_key(event: &KeyEvent) -> Vec<Key> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        KeyCode::Char(ch) if ctrl && !alt => control_char(ch).into_iter().collect(),
        KeyCode::Char(ch) => {
            let mut keys = Vec::with_capacity(ch.len_utf8() + 1);
            if alt {
                keys.push(Key::ESCAPE);
            }
            let mut buf = [0u8; 4];
            keys.extend(ch.encode_utf8(&mut buf).bytes().map(|b| Key(b.into())));
            keys
        }

        // Raw-mode terminals send CR for Enter; curses programs expect LF
        KeyCode::Enter => vec![Key::NEWLINE],
        KeyCode::Backspace => vec![Key::BACKSPACE],
        KeyCode::Tab => vec![Key::TAB],
        KeyCode::BackTab => vec![Key::BTAB],
        KeyCode::Esc => vec![Key::ESCAPE],

        KeyCode::Up => vec![Key::UP],
        KeyCode::Down => vec![Key::DOWN],
        KeyCode::Left => vec![Key::LEFT],
        KeyCode::Right => vec![Key::RIGHT],

        KeyCode::Home => vec![Key::HOME],
        KeyCode::End => vec![Key::END],
        KeyCode::PageUp => vec![Key::PPAGE],
        KeyCode::PageDown => vec![Key::NPAGE],
        KeyCode::Insert => vec![Key::IC],
        KeyCode::Delete => vec![Key::DC],

        KeyCode::F(n) => vec![Key::f(n)],

        _ => Vec::new(),
    }
}

/// Ctrl+char as a C0 control code
fn control_char(ch: char) -> Option<Key> {
    let code = match ch {
        'a'..='z' => ch as u8 - b'a' + 1,
        'A'..='Z' => ch as u8 - b'A' + 1,
        '@' | '`' | ' ' | '2' => 0x00,
        '[' | '3' => 0x1b,
        '\\' | '4' => 0x1c,
        ']' | '5' => 0x1d,
        '^' | '6' => 0x1e,
        '_' | '7' | '/' => 0x1f,
        '8' | '?' => 0x7f,
        _ => return None,
    };
    Some(Key(code.into()))
}
