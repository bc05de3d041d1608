//! Mouse types
//!
//! Kept so mouse-aware programs compile; `Screen::get_mouse` always fails
//! with `CursesError::MouseUnsupported`.

/// Mask requesting every mouse event
pub const ALL_MOUSE_EVENTS: u64 = 0x1FFF_FFFF;
/// Button 1 click bit
pub const BUTTON1_CLICKED: u64 = 0x04;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub id: i16,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub bstate: u64,
}
