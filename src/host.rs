//!
//! Access to the host text widget.
//!
//! The gutter never owns its host. Every operation that needs
//! the host gets it passed in as a [LineSource].
//!

use crate::upos_type;
use ratatui_core::style::Style;
use ropey::Rope;

/// What the line-numbers need to know about the text they
/// are numbering.
pub trait LineSource {
    /// Current number of lines. A trailing line-break
    /// starts a new, empty line.
    fn line_count(&self) -> upos_type;

    /// Base style of the host. Used for the gutter if
    /// it has no explicit style.
    fn style(&self) -> Option<Style> {
        None
    }

    /// First line visible at the top of the host.
    fn vertical_offset(&self) -> upos_type {
        0
    }

    /// Line of the text-cursor, if there is one.
    fn cursor_line(&self) -> Option<upos_type> {
        None
    }
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn line_count(&self) -> upos_type {
        (**self).line_count()
    }

    fn style(&self) -> Option<Style> {
        (**self).style()
    }

    fn vertical_offset(&self) -> upos_type {
        (**self).vertical_offset()
    }

    fn cursor_line(&self) -> Option<upos_type> {
        (**self).cursor_line()
    }
}

/// Counts '\n' only.
impl LineSource for str {
    fn line_count(&self) -> upos_type {
        self.bytes().filter(|b| *b == b'\n').count() as upos_type + 1
    }
}

impl LineSource for String {
    fn line_count(&self) -> upos_type {
        self.as_str().line_count()
    }
}

impl LineSource for Rope {
    fn line_count(&self) -> upos_type {
        self.len_lines() as upos_type
    }
}

#[cfg(feature = "rat-text")]
mod text_area {
    use crate::host::LineSource;
    use crate::upos_type;
    use rat_text::text_area::TextAreaState;

    impl LineSource for TextAreaState {
        fn line_count(&self) -> upos_type {
            self.len_lines()
        }

        fn vertical_offset(&self) -> upos_type {
            self.vertical_offset() as upos_type
        }

        fn cursor_line(&self) -> Option<upos_type> {
            Some(self.cursor().y)
        }
    }
}
