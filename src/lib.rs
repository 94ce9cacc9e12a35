#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod host;
pub mod line_number;

mod surface;

pub use host::LineSource;

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!

    pub use rat_event::*;
    use ratatui_crossterm::crossterm::event::Event;

    /// Does this event, sent to the host text widget, possibly change
    /// its line count?
    ///
    /// Covers all the editing keys of rat-text's TextArea plus paste.
    /// Plain characters count too, typing replaces the selection, and
    /// that can span any number of lines.
    ///
    /// Call [request_sync](crate::line_number::LineNumberState::request_sync)
    /// when this is true and let the next render do the work. If the host
    /// reports text changes itself (e.g. `TextOutcome::TextChanged`),
    /// use that instead.
    pub fn may_change_lines(event: &Event) -> bool {
        if let ct_event!(paste _text) = event {
            return true;
        }
        matches!(
            event,
            ct_event!(key press _)
                | ct_event!(key press SHIFT-_)
                | ct_event!(key press CONTROL_ALT-_)
                | ct_event!(keycode press Tab)
                | ct_event!(keycode press SHIFT-BackTab)
                | ct_event!(keycode press Enter)
                | ct_event!(keycode press Backspace)
                | ct_event!(keycode press Delete)
                | ct_event!(keycode press CONTROL-Backspace)
                | ct_event!(keycode press ALT-Backspace)
                | ct_event!(keycode press CONTROL-Delete)
                | ct_event!(keycode press ALT-Delete)
                | ct_event!(key press CONTROL-'x')
                | ct_event!(key press CONTROL-'v')
                | ct_event!(key press CONTROL-'d')
                | ct_event!(key press CONTROL-'y')
                | ct_event!(key press CONTROL-'z')
                | ct_event!(key press CONTROL_SHIFT-'Z')
        )
    }
}

#[derive(Debug, PartialEq)]
pub enum GutterError {
    /// The line-number surface was changed outside of synchronize.
    ReadOnly,
    /// The number pattern could not be parsed.
    InvalidFormat(String),
}

impl Display for GutterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for GutterError {}

/// Row/Column type.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
