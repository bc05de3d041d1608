//! Attributes, colors and the color-pair table
//!
//! Attributes use the classic curses bit layout: style flags live in the high
//! bits and the color-pair index is embedded in bits 8..16, so a pair can be
//! OR-ed into a flag set just like `COLOR_PAIR(n) | A_BOLD`.

use bitflags::bitflags;

/// Number of slots in the color-pair table
pub const MAX_COLOR_PAIRS: usize = 64;

bitflags! {
    /// Style flags plus an embedded color-pair index
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attr: u32 {
        const STANDOUT  = 0x0001_0000;
        const UNDERLINE = 0x0002_0000;
        const REVERSE   = 0x0004_0000;
        const DIM       = 0x0010_0000;
        const BOLD      = 0x0020_0000;
        /// Mask covering the embedded color-pair index
        const COLOR     = 0x0000_FF00;
    }
}

impl Attr {
    /// No styling, no color pair
    pub const NORMAL: Attr = Attr::empty();

    /// Attribute value selecting color pair `n`
    pub const fn color_pair(n: u8) -> Attr {
        Attr::from_bits_retain((n as u32) << 8)
    }

    /// The embedded color-pair index
    pub fn pair(self) -> u8 {
        ((self.bits() & Attr::COLOR.bits()) >> 8) as u8
    }

    /// Style flags only, with the pair index stripped
    pub fn style(self) -> Attr {
        self.difference(Attr::COLOR)
    }

    /// True when neither a style flag nor a color pair is set
    pub fn is_normal(self) -> bool {
        self.is_empty()
    }

    /// Merge per-call attributes over the standing ones.
    ///
    /// Style flags are OR-ed. A non-zero inline pair replaces the standing
    /// pair instead of being OR-ed into it.
    pub fn combine(self, inline: Attr) -> Attr {
        let pair = if inline.pair() != 0 { inline.pair() } else { self.pair() };
        (self.style() | inline.style()) | Attr::color_pair(pair)
    }
}

/// The eight basic ANSI colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Convert a curses color number. `-1` (terminal default) and anything
    /// outside 0..=7 map to `None`.
    pub fn from_curses(n: i16) -> Option<Color> {
        match n {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// SGR parameter for this color as a foreground
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// SGR parameter for this color as a background
    pub fn bg_code(self) -> u8 {
        40 + self as u8
    }
}

/// A registered (foreground, background) pair. `None` means "use the
/// terminal default" for that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// Fixed-size pair table indexed by the pair number embedded in `Attr`
#[derive(Clone, Debug)]
pub struct ColorPairs {
    slots: [ColorPair; MAX_COLOR_PAIRS],
}

impl Default for ColorPairs {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPairs {
    pub fn new() -> Self {
        Self {
            slots: [ColorPair::default(); MAX_COLOR_PAIRS],
        }
    }

    /// Store a pair. Returns false (and changes nothing) when `index` is
    /// outside the table.
    pub fn set(&mut self, index: i16, fg: Option<Color>, bg: Option<Color>) -> bool {
        match usize::try_from(index) {
            Ok(i) if i < MAX_COLOR_PAIRS => {
                self.slots[i] = ColorPair { fg, bg };
                true
            }
            _ => false,
        }
    }

    /// Colors to emit for pair `index`. Pair 0 and out-of-range indices
    /// carry no color.
    pub fn lookup(&self, index: u8) -> Option<ColorPair> {
        let i = index as usize;
        if i == 0 || i >= MAX_COLOR_PAIRS {
            return None;
        }
        Some(self.slots[i])
    }
}
