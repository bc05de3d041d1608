//! vtcurses-demo - exercise the curses emulation on a real terminal
//!
//! Draws a framed playfield with a few color pairs and moves a marker with
//! the arrow keys. The status line ticks every half second while no key is
//! pressed (half-delay input). `q` quits, `b` rings the bell.
//!
//! # Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | LINES | Screen rows (default 24) |
//! | COLS | Screen columns (default 80) |

use std::env;
use std::io::{self, BufWriter, Stdout, Write};

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vtcurses::{acs, Attr, Color, Config, Key, Screen, TerminalInput};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const PAIR_TITLE: u8 = 1;
const PAIR_FRAME: u8 = 2;
const PAIR_MARKER: u8 = 3;
const PAIR_STATUS: u8 = 4;

type DemoScreen = Screen<BufWriter<Stdout>, TerminalInput>;

fn print_help() {
    eprintln!("vtcurses-demo {} - curses emulation over ANSI escape sequences", VERSION);
    eprintln!();
    eprintln!("Usage: vtcurses-demo [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Arrow keys            Move the marker");
    eprintln!("  b                     Ring the bell");
    eprintln!("  q                     Quit");
    eprintln!();
    eprintln!("Screen size comes from LINES / COLS (default 24x80).");
    eprintln!("Configuration: ~/.vtcurses/config.toml");
}

fn init_logging(config: &Config) {
    let log_path = config.log_path();

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    // stdout is the drawing surface, so logs only ever go to the file
    if let Some(file) = log_file {
        let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-v" | "--version" => {
                eprintln!("vtcurses-demo {}", VERSION);
                return Ok(());
            }
            other => {
                eprintln!("Error: unknown option: {}", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    let config = Config::load();
    init_logging(&config);
    info!("vtcurses-demo starting...");

    let dims = config.dimensions();
    info!("Screen size: {}x{}", dims.cols, dims.rows);

    let out = BufWriter::with_capacity(65536, io::stdout());
    let mut screen = Screen::init(out, TerminalInput::new(), dims)?;

    let result = run_demo(&mut screen);
    screen.shutdown()?;

    if let Err(e) = &result {
        warn!("demo ended with error: {}", e);
    }
    result
}

/// Playfield bounds inside the frame, inclusive
struct Field {
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl Field {
    fn for_screen(screen: &DemoScreen) -> Self {
        let rows = i32::from(screen.rows());
        let cols = i32::from(screen.cols());
        Self {
            top: 2,
            left: 1,
            bottom: (rows - 3).max(2),
            right: (cols - 2).max(1),
        }
    }

    fn center(&self) -> (i32, i32) {
        ((self.top + self.bottom) / 2, (self.left + self.right) / 2)
    }

    fn clamp(&self, row: i32, col: i32) -> (i32, i32) {
        (row.clamp(self.top, self.bottom), col.clamp(self.left, self.right))
    }
}

fn draw_frame(screen: &mut DemoScreen, field: &Field) -> vtcurses::Result<()> {
    let (top, left) = (field.top - 1, field.left - 1);
    let (bottom, right) = (field.bottom + 1, field.right + 1);
    let width = right - left - 1;
    let height = bottom - top - 1;

    screen.attr_on(Attr::color_pair(PAIR_FRAME));
    screen.mv_add_ch(top, left, acs::ULCORNER, Attr::NORMAL)?;
    screen.mv_add_ch(top, right, acs::URCORNER, Attr::NORMAL)?;
    screen.mv_add_ch(bottom, left, acs::LLCORNER, Attr::NORMAL)?;
    screen.mv_add_ch(bottom, right, acs::LRCORNER, Attr::NORMAL)?;
    screen.attr_off(Attr::color_pair(PAIR_FRAME));

    screen.mv_hline(top, left + 1, acs::HLINE, width)?;
    screen.mv_hline(bottom, left + 1, acs::HLINE, width)?;
    screen.mv_vline(top + 1, left, acs::VLINE, height)?;
    screen.mv_vline(top + 1, right, acs::VLINE, height)?;
    Ok(())
}

fn draw_status(screen: &mut DemoScreen, ticks: u64, last_key: Option<Key>) -> vtcurses::Result<()> {
    let row = i32::from(screen.rows()) - 1;
    let key = last_key.map_or_else(|| "-".to_string(), |k| format!("{:#x}", k.code()));

    screen.attr_on(Attr::color_pair(PAIR_STATUS));
    screen.mv_print_fmt(row, 0, format_args!(" ticks: {:<8} last key: {:<8}", ticks, key))?;
    screen.attr_off(Attr::color_pair(PAIR_STATUS));
    Ok(())
}

fn run_demo(screen: &mut DemoScreen) -> anyhow::Result<()> {
    screen.init_pair(i16::from(PAIR_TITLE), Some(Color::Yellow), Some(Color::Blue));
    screen.init_pair(i16::from(PAIR_FRAME), Some(Color::Cyan), None);
    screen.init_pair(i16::from(PAIR_MARKER), Some(Color::Red), None);
    screen.init_pair(i16::from(PAIR_STATUS), Some(Color::Black), Some(Color::White));

    let cursor_was_visible = screen.curs_set(false)?;
    screen.erase()?;

    screen.attr_on(Attr::color_pair(PAIR_TITLE) | Attr::BOLD);
    screen.mv_add_str(0, 0, " vtcurses demo ")?;
    screen.attr_off(Attr::color_pair(PAIR_TITLE) | Attr::BOLD);
    screen.add_str("  arrows: move  b: bell  q: quit")?;

    let field = Field::for_screen(screen);
    draw_frame(screen, &field)?;

    let (mut row, mut col) = field.center();
    let mut ticks = 0u64;
    let mut last_key = None;

    screen.half_delay(5);
    loop {
        screen.mv_add_ch(row, col, '@', Attr::color_pair(PAIR_MARKER) | Attr::BOLD)?;
        draw_status(screen, ticks, last_key)?;
        screen.refresh()?;

        let Some(key) = screen.read_key()? else {
            ticks += 1;
            continue;
        };
        last_key = Some(key);

        let (next_row, next_col) = match key {
            Key::UP => (row - 1, col),
            Key::DOWN => (row + 1, col),
            Key::LEFT => (row, col - 1),
            Key::RIGHT => (row, col + 1),
            _ => {
                match key.as_char() {
                    Some('q') | Some('Q') => break,
                    Some('b') => screen.beep()?,
                    _ => {}
                }
                continue;
            }
        };

        // Blank the old marker cell before moving
        screen.mv_add_ch(row, col, '\0', Attr::NORMAL)?;
        (row, col) = field.clamp(next_row, next_col);
    }

    screen.curs_set(cursor_was_visible)?;
    screen.refresh()?;
    Ok(())
}
