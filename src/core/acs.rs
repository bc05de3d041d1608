//! Line-drawing characters
//!
//! Plain ASCII stand-ins so boxes render the same on every terminal.

pub const VLINE: char = '|';
pub const HLINE: char = '-';
pub const ULCORNER: char = '+';
pub const URCORNER: char = '+';
pub const LLCORNER: char = '+';
pub const LRCORNER: char = '+';
pub const PLUS: char = '+';
pub const LTEE: char = '+';
pub const RTEE: char = '+';
pub const TTEE: char = '+';
pub const BTEE: char = '+';
pub const BLOCK: char = '#';
