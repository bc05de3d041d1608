//! Terminal state machine
//!
//! `Screen` owns the whole session: cursor, standing attributes, the
//! color-pair table, cursor visibility and the input mode. Every drawing call
//! writes its escape sequences straight to the output stream; nothing is
//! buffered or diffed. Callers flush with [`Screen::refresh`].

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::attr::{Attr, Color, ColorPairs};
use super::escape;
use super::mouse::MouseEvent;
use crate::config::Dimensions;
use crate::error::{CursesError, Result};
use crate::input::{self, InputMode, InputSource, Key};

/// Zero-based grid position. Off-grid values are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Sleep for `ms` milliseconds (curses `napms`)
pub fn nap_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

/// Blank cell for the null character
fn glyph(ch: char) -> char {
    if ch == '\0' {
        ' '
    } else {
        ch
    }
}

/// A curses-style screen session over an output stream and a host input
pub struct Screen<W: Write, I: InputSource> {
    out: W,
    input: I,
    dims: Dimensions,
    cursor: Position,
    attrs: Attr,
    pairs: ColorPairs,
    cursor_visible: bool,
    input_mode: InputMode,
    initialized: bool,
}

impl<W: Write, I: InputSource> Screen<W, I> {
    /// Start a session: prepare host input, switch to the alternate screen,
    /// disable focus reporting, clear and home the cursor.
    ///
    /// A failing host setup is returned as is and nothing is written.
    pub fn init(out: W, input: I, dims: Dimensions) -> Result<Self> {
        let mut screen = Self {
            out,
            input,
            dims,
            cursor: Position::ORIGIN,
            attrs: Attr::NORMAL,
            pairs: ColorPairs::new(),
            cursor_visible: true,
            input_mode: InputMode::Blocking,
            initialized: false,
        };

        screen.input.setup()?;
        screen.initialized = true;
        screen.emit(&escape::encode_enter())?;
        screen.out.flush()?;

        debug!("screen initialized ({}x{})", dims.cols, dims.rows);
        Ok(screen)
    }

    /// End the session: reset attributes, show the cursor and leave the
    /// alternate screen. Calling it again does nothing; dropping the screen
    /// calls it too.
    pub fn shutdown(&mut self) -> Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        // Input teardown runs even when the terminal can no longer be written
        let written = self.write_leave();
        self.cursor_visible = true;
        let torn_down = self.input.teardown();
        written?;
        torn_down?;

        debug!("screen shut down");
        Ok(())
    }

    fn write_leave(&mut self) -> Result<()> {
        self.emit(&escape::encode_leave())?;
        self.out.flush()?;
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn advance(&mut self, cells: usize) {
        let cells = i32::try_from(cells).unwrap_or(i32::MAX);
        self.cursor.col = self.cursor.col.saturating_add(cells);
    }


    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of rows (curses `LINES`)
    pub fn rows(&self) -> u16 {
        self.dims.rows
    }

    /// Number of columns (curses `COLS`)
    pub fn cols(&self) -> u16 {
        self.dims.cols
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn attributes(&self) -> Attr {
        self.attrs
    }

    pub fn color_pairs(&self) -> &ColorPairs {
        &self.pairs
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The terminal always claims color support
    pub fn has_colors(&self) -> bool {
        true
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }


    /// Clear the whole grid and home the cursor
    pub fn erase(&mut self) -> Result<()> {
        self.emit(&escape::encode_erase())?;
        self.cursor = Position::ORIGIN;
        self.out.flush()?;
        Ok(())
    }

    /// Same as [`Screen::erase`]
    pub fn clear(&mut self) -> Result<()> {
        self.erase()
    }

    /// Flush everything written so far to the terminal
    pub fn refresh(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Position the cursor. No clamping is done.
    pub fn move_cursor(&mut self, row: i32, col: i32) -> Result<()> {
        self.emit(&escape::encode_move(row, col))?;
        self.cursor = Position { row, col };
        Ok(())
    }

    /// Show or hide the cursor, returning the previous visibility
    pub fn curs_set(&mut self, visible: bool) -> Result<bool> {
        let previous = self.cursor_visible;
        self.cursor_visible = visible;
        self.emit(&escape::encode_cursor_visible(visible))?;
        self.out.flush()?;
        Ok(previous)
    }

    /// Ring the terminal bell
    pub fn beep(&mut self) -> Result<()> {
        self.emit(escape::BELL)?;
        self.out.flush()?;
        Ok(())
    }


    /// Turn attributes on for subsequent draws. Nothing is written.
    pub fn attr_on(&mut self, attrs: Attr) {
        self.attrs.insert(attrs);
    }

    /// Turn attributes off for subsequent draws. Nothing is written.
    pub fn attr_off(&mut self, attrs: Attr) {
        self.attrs.remove(attrs);
    }

    /// Register color pair `index`. `None` leaves that axis at the terminal
    /// default. Indices outside the table are ignored.
    pub fn init_pair(&mut self, index: i16, fg: Option<Color>, bg: Option<Color>) {
        if !self.pairs.set(index, fg, bg) {
            trace!("ignoring color pair {} outside the table", index);
        }
    }


    /// Write one character at the cursor, styled with the standing
    /// attributes merged with `inline`. `'\0'` draws a blank cell.
    pub fn add_ch(&mut self, ch: char, inline: Attr) -> Result<()> {
        let combined = self.attrs.combine(inline);
        let ch = glyph(ch);

        if combined.is_normal() {
            let mut buf = [0u8; 4];
            self.emit(ch.encode_utf8(&mut buf))?;
        } else {
            let mut seq = escape::encode_attributes(combined, &self.pairs);
            seq.push(ch);
            seq.push_str(&escape::encode_restore(self.attrs, &self.pairs));
            self.emit(&seq)?;
        }

        self.advance(1);
        Ok(())
    }

    pub fn mv_add_ch(&mut self, row: i32, col: i32, ch: char, inline: Attr) -> Result<()> {
        self.move_cursor(row, col)?;
        self.add_ch(ch, inline)
    }

    /// Write a string at the cursor. The standing attributes are applied
    /// once around the whole string rather than per character.
    pub fn add_str(&mut self, text: &str) -> Result<()> {
        let text = if text.contains('\0') {
            Cow::Owned(text.replace('\0', " "))
        } else {
            Cow::Borrowed(text)
        };

        if self.attrs.is_normal() {
            self.emit(&text)?;
        } else {
            let mut seq = escape::encode_attributes(self.attrs, &self.pairs);
            seq.push_str(&text);
            seq.push_str(&escape::encode_restore(self.attrs, &self.pairs));
            self.emit(&seq)?;
        }

        self.advance(text.chars().count());
        Ok(())
    }

    pub fn mv_add_str(&mut self, row: i32, col: i32, text: &str) -> Result<()> {
        self.move_cursor(row, col)?;
        self.add_str(text)
    }

    /// Formatted draw, e.g. `screen.print_fmt(format_args!("HP {}", hp))`
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        match args.as_str() {
            Some(text) => self.add_str(text),
            None => self.add_str(&fmt::format(args)),
        }
    }

    pub fn mv_print_fmt(&mut self, row: i32, col: i32, args: fmt::Arguments<'_>) -> Result<()> {
        self.move_cursor(row, col)?;
        self.print_fmt(args)
    }

    /// Horizontal run of `len` cells starting at (row, col). `'\0'` draws
    /// `-`. No attributes are applied.
    pub fn mv_hline(&mut self, row: i32, col: i32, ch: char, len: i32) -> Result<()> {
        self.move_cursor(row, col)?;
        let fill = if ch == '\0' { '-' } else { ch };
        let count = usize::try_from(len).unwrap_or(0);
        let run: String = std::iter::repeat(fill).take(count).collect();
        self.emit(&run)?;
        self.advance(count);
        Ok(())
    }

    /// Vertical run of `len` cells going down from (row, col). `'\0'` draws
    /// `|`. No attributes are applied. The cursor is left on the last cell's
    /// column, not one past it.
    pub fn mv_vline(&mut self, row: i32, col: i32, ch: char, len: i32) -> Result<()> {
        let fill = if ch == '\0' { '|' } else { ch };
        let mut buf = [0u8; 4];
        let fill: &str = fill.encode_utf8(&mut buf);
        for i in 0..len.max(0) {
            self.move_cursor(row.saturating_add(i), col)?;
            self.emit(fill)?;
        }
        Ok(())
    }


    /// Wait up to `tenths` tenths of a second per read (curses `halfdelay`).
    /// Clears nodelay. Zero tenths selects blocking reads.
    pub fn half_delay(&mut self, tenths: u32) {
        self.input_mode = if tenths == 0 {
            InputMode::Blocking
        } else {
            InputMode::TimedTenths(tenths)
        };
        debug!(mode = ?self.input_mode, "input mode changed");
    }

    /// Make reads return immediately, or go back to blocking reads.
    /// Clears any half-delay.
    pub fn nodelay(&mut self, enabled: bool) {
        self.input_mode = if enabled {
            InputMode::NonBlocking
        } else {
            InputMode::Blocking
        };
        debug!(mode = ?self.input_mode, "input mode changed");
    }

    /// Read one key according to the input mode. `None` means nothing
    /// arrived in time. Each call polls the host exactly once.
    pub fn read_key(&mut self) -> Result<Option<Key>> {
        Ok(input::read_key(&mut self.input, self.input_mode)?)
    }


    /// Request mouse events. None are ever reported, so the granted mask
    /// is always empty.
    pub fn mouse_mask(&mut self, mask: u64) -> u64 {
        trace!("mouse mask {:#x} requested, mouse is unsupported", mask);
        0
    }

    /// Fetch a pending mouse event. Always fails.
    pub fn get_mouse(&mut self) -> Result<MouseEvent> {
        Err(CursesError::MouseUnsupported)
    }
}

impl<W: Write, I: InputSource> Drop for Screen<W, I> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::input::ScriptedInput;

    /// Output stream that starts failing once `broken` is set
    #[derive(Default)]
    struct FlakyWriter {
        buf: Vec<u8>,
        broken: bool,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(())
        }
    }

    const ENTER_SEQ: &str = "\x1b[?1049h\x1b[?1004l\x1b[2J\x1b[H";

    fn screen_with(input: ScriptedInput) -> Screen<Vec<u8>, ScriptedInput> {
        let mut screen = Screen::init(Vec::new(), input, Dimensions::default()).unwrap();
        screen.output_mut().clear();
        screen
    }

    fn screen() -> Screen<Vec<u8>, ScriptedInput> {
        screen_with(ScriptedInput::default())
    }

    fn take_output(screen: &mut Screen<Vec<u8>, ScriptedInput>) -> String {
        String::from_utf8(std::mem::take(screen.output_mut())).unwrap()
    }

    #[test]
    fn test_init() {
        let screen = Screen::init(Vec::new(), ScriptedInput::default(), Dimensions::default()).unwrap();
        assert_eq!(String::from_utf8(screen.output().clone()).unwrap(), ENTER_SEQ);
        assert_eq!(screen.input().setup_calls(), 1);
        assert_eq!(screen.rows(), 24);
        assert_eq!(screen.cols(), 80);
        assert_eq!(screen.cursor(), Position::ORIGIN);
        assert!(screen.cursor_visible());
        assert_eq!(screen.input_mode(), InputMode::Blocking);
        assert!(screen.has_colors());
    }

    #[test]
    fn test_init_setup_failure_propagates() {
        let input = ScriptedInput::default().with_setup_error(io::ErrorKind::PermissionDenied);
        match Screen::init(Vec::new(), input, Dimensions::default()) {
            Err(CursesError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("init should fail"),
        }
    }

    #[test]
    fn test_shutdown() {
        let mut screen = screen();
        screen.shutdown().unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[?25h\x1b[?1049l");
        assert_eq!(screen.input().teardown_calls(), 1);
        assert!(!screen.is_initialized());

        // Second call is a no-op
        screen.shutdown().unwrap();
        assert_eq!(take_output(&mut screen), "");
        assert_eq!(screen.input().teardown_calls(), 1);
    }

    #[test]
    fn test_shutdown_tears_down_input_when_write_fails() {
        let mut screen =
            Screen::init(FlakyWriter::default(), ScriptedInput::default(), Dimensions::default()).unwrap();
        screen.output_mut().broken = true;

        match screen.shutdown() {
            Err(CursesError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected a write error, got {:?}", other.err()),
        }
        assert_eq!(screen.input().teardown_calls(), 1);
        assert!(!screen.is_initialized());

        // Retrying does not tear down twice
        screen.shutdown().unwrap();
        assert_eq!(screen.input().teardown_calls(), 1);
    }

    #[test]
    fn test_failed_init_write_tears_down_input() {
        let mut input = ScriptedInput::default();
        let writer = FlakyWriter {
            buf: Vec::new(),
            broken: true,
        };
        assert!(Screen::init(writer, &mut input, Dimensions::default()).is_err());
        assert_eq!(input.setup_calls(), 1);
        assert_eq!(input.teardown_calls(), 1);
    }

    #[test]
    fn test_drop_shuts_down() {
        let mut out = Vec::new();
        {
            let _screen = Screen::init(&mut out, ScriptedInput::default(), Dimensions::default()).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{ENTER_SEQ}\x1b[0m\x1b[?25h\x1b[?1049l"));
    }

    #[test]
    fn test_erase_homes_cursor() {
        let mut screen = screen();
        screen.move_cursor(10, 30).unwrap();
        screen.add_str("abc").unwrap();
        take_output(&mut screen);

        screen.erase().unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[2J\x1b[H");
        assert_eq!(screen.cursor(), Position::ORIGIN);

        screen.move_cursor(3, 3).unwrap();
        screen.clear().unwrap();
        assert_eq!(screen.cursor(), Position::ORIGIN);
    }

    #[test]
    fn test_move_and_advance() {
        let mut screen = screen();
        screen.move_cursor(5, 10).unwrap();
        screen.add_ch('x', Attr::NORMAL).unwrap();
        assert_eq!(screen.cursor(), Position::new(5, 11));
        assert_eq!(take_output(&mut screen), "\x1b[6;11Hx");

        screen.move_cursor(0, 0).unwrap();
        screen.move_cursor(5, 11).unwrap();
        assert_eq!(screen.cursor(), Position::new(5, 11));
    }

    #[test]
    fn test_no_wrap_at_right_edge() {
        let mut screen = screen();
        screen.mv_add_str(0, 78, "abcd").unwrap();
        assert_eq!(screen.cursor(), Position::new(0, 82));

        // Off-grid positions are passed through
        screen.move_cursor(-1, 200).unwrap();
        assert_eq!(screen.cursor(), Position::new(-1, 200));
    }

    #[test]
    fn test_null_char_is_blank() {
        let mut screen = screen();
        screen.add_ch('\0', Attr::NORMAL).unwrap();
        assert_eq!(take_output(&mut screen), " ");

        screen.add_ch('\0', Attr::BOLD).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[1m \x1b[0m");

        screen.attr_on(Attr::UNDERLINE);
        screen.add_ch('\0', Attr::NORMAL).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[4m \x1b[0m\x1b[4m");

        screen.add_str("a\0b").unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[4ma b\x1b[0m\x1b[4m");
    }

    #[test]
    fn test_add_ch_inline_attributes() {
        let mut screen = screen();
        screen.init_pair(1, Some(Color::Red), Some(Color::Black));
        screen.init_pair(2, Some(Color::Green), None);

        // No standing attributes: apply, char, reset
        screen.add_ch('@', Attr::color_pair(2) | Attr::BOLD).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[32m\x1b[1m@\x1b[0m");

        // Standing pair is restored after the inline one
        screen.attr_on(Attr::color_pair(1));
        screen.add_ch('@', Attr::color_pair(2)).unwrap();
        assert_eq!(
            take_output(&mut screen),
            "\x1b[0m\x1b[32m@\x1b[0m\x1b[31m\x1b[40m"
        );
        assert_eq!(screen.attributes(), Attr::color_pair(1));
        assert_eq!(screen.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_attr_on_off() {
        let mut screen = screen();
        screen.attr_on(Attr::BOLD | Attr::REVERSE);
        assert_eq!(take_output(&mut screen), "");
        screen.attr_off(Attr::BOLD);
        assert_eq!(screen.attributes(), Attr::REVERSE);
        screen.attr_off(Attr::REVERSE);
        assert!(screen.attributes().is_normal());

        screen.add_str("plain").unwrap();
        assert_eq!(take_output(&mut screen), "plain");
    }

    #[test]
    fn test_end_to_end_colored_string() {
        let mut out = Vec::new();
        {
            let mut screen = Screen::init(&mut out, ScriptedInput::default(), Dimensions::default()).unwrap();
            screen.init_pair(1, Some(Color::Red), Some(Color::Black));
            screen.attr_on(Attr::color_pair(1) | Attr::BOLD);
            screen.mv_add_str(0, 0, "HP").unwrap();
            assert_eq!(screen.cursor(), Position::new(0, 2));
        }
        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "{ENTER_SEQ}\x1b[1;1H\x1b[0m\x1b[31m\x1b[40m\x1b[1mHP\x1b[0m\x1b[31m\x1b[40m\x1b[1m{}",
            "\x1b[0m\x1b[?25h\x1b[?1049l"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_registered_pairs_render_their_colors() {
        let mut screen = screen();
        screen.init_pair(3, Some(Color::Cyan), None);
        screen.init_pair(4, None, Some(Color::Magenta));
        screen.init_pair(5, None, None);

        screen.add_ch('a', Attr::color_pair(3)).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[36ma\x1b[0m");
        screen.add_ch('b', Attr::color_pair(4)).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0m\x1b[45mb\x1b[0m");
        screen.add_ch('c', Attr::color_pair(5)).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0mc\x1b[0m");
    }

    #[test]
    fn test_init_pair_out_of_range_is_ignored() {
        let mut screen = screen();
        screen.init_pair(64, Some(Color::Red), Some(Color::Red));
        screen.init_pair(-3, Some(Color::Red), Some(Color::Red));
        screen.add_ch('z', Attr::color_pair(64)).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[0mz\x1b[0m");
    }

    #[test]
    fn test_add_str_counts_chars() {
        let mut screen = screen();
        screen.add_str("héllo").unwrap();
        assert_eq!(screen.cursor(), Position::new(0, 5));
        assert_eq!(take_output(&mut screen), "héllo");
    }

    #[test]
    fn test_print_fmt() {
        let mut screen = screen();
        screen.attr_on(Attr::DIM);
        screen.mv_print_fmt(2, 4, format_args!("Score: {}", 42)).unwrap();
        assert_eq!(
            take_output(&mut screen),
            "\x1b[3;5H\x1b[0m\x1b[2mScore: 42\x1b[0m\x1b[2m"
        );
        assert_eq!(screen.cursor(), Position::new(2, 13));

        screen.attr_off(Attr::DIM);
        screen.print_fmt(format_args!("!")).unwrap();
        assert_eq!(take_output(&mut screen), "!");
    }

    #[test]
    fn test_hline() {
        let mut screen = screen();
        screen.attr_on(Attr::BOLD);
        screen.mv_hline(1, 2, '\0', 4).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[2;3H----");
        assert_eq!(screen.cursor(), Position::new(1, 6));

        screen.mv_hline(0, 0, '=', 2).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[1;1H==");

        screen.mv_hline(3, 3, '=', -5).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[4;4H");
        assert_eq!(screen.cursor(), Position::new(3, 3));
    }

    #[test]
    fn test_vline() {
        let mut screen = screen();
        screen.mv_vline(1, 0, '\0', 3).unwrap();
        assert_eq!(take_output(&mut screen), "\x1b[2;1H|\x1b[3;1H|\x1b[4;1H|");
        assert_eq!(screen.cursor(), Position::new(3, 0));

        screen.mv_vline(0, 0, '#', 0).unwrap();
        screen.mv_vline(0, 0, '#', -1).unwrap();
        assert_eq!(take_output(&mut screen), "");
    }

    #[test]
    fn test_curs_set_returns_previous() {
        let mut screen = screen();
        assert!(screen.curs_set(false).unwrap());
        assert_eq!(take_output(&mut screen), "\x1b[?25l");
        assert!(!screen.curs_set(true).unwrap());
        assert_eq!(take_output(&mut screen), "\x1b[?25h");
        assert!(screen.cursor_visible());
    }

    #[test]
    fn test_input_modes_are_exclusive() {
        let mut screen = screen();
        screen.half_delay(5);
        assert_eq!(screen.input_mode(), InputMode::TimedTenths(5));
        screen.nodelay(true);
        assert_eq!(screen.input_mode(), InputMode::NonBlocking);
        screen.half_delay(2);
        assert_eq!(screen.input_mode(), InputMode::TimedTenths(2));
        screen.nodelay(false);
        assert_eq!(screen.input_mode(), InputMode::Blocking);
        screen.half_delay(0);
        assert_eq!(screen.input_mode(), InputMode::Blocking);
    }

    #[test]
    fn test_read_key_per_mode() {
        let script = [Some(Key::from_char('a')), None, None, Some(Key::UP)];
        let mut screen = screen_with(ScriptedInput::new(script));

        assert_eq!(screen.read_key().unwrap(), Some(Key::from_char('a')));

        screen.half_delay(5);
        assert_eq!(screen.read_key().unwrap(), None);

        screen.nodelay(true);
        assert_eq!(screen.read_key().unwrap(), None);
        assert_eq!(screen.read_key().unwrap(), Some(Key::UP));

        assert_eq!(screen.input().polls(), &[0, 500, 1, 1]);
    }

    #[test]
    fn test_beep_and_mouse() {
        let mut screen = screen();
        screen.beep().unwrap();
        assert_eq!(take_output(&mut screen), "\x07");

        assert_eq!(screen.mouse_mask(0x1FFF_FFFF), 0);
        assert!(matches!(screen.get_mouse(), Err(CursesError::MouseUnsupported)));
    }
}
