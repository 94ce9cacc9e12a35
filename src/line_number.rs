//!
//! Line numbers widget.
//!
//! Renders the line numbers of a host text widget.
//! ```
//! # use ratatui_core::buffer::Buffer;
//! # use ratatui_core::layout::Rect;
//! # use ratatui_core::widgets::StatefulWidget;
//! use rat_gutter::line_number::{LineNumberState, LineNumbers};
//!
//! let text = String::from("one\ntwo\nthree");
//! let mut state = LineNumberState::with_source(&text);
//! # let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
//! # let buf = &mut buf;
//! # let area = Rect::new(0, 0, 6, 4);
//!
//! LineNumbers::new()
//!     .with_source(&text)
//!     .render(area, buf, &mut state);
//!
//! assert_eq!(state.line_count(), 3);
//! ```

use crate::_private::NonExhaustive;
use crate::event::{HandleEvent, MouseOnly, Outcome, Regular, ct_event};
use crate::host::LineSource;
use crate::surface::Surface;
use crate::{GutterError, upos_type};
use format_num_pattern::NumberFormat;
use log::debug;
use ratatui_core::buffer::Buffer;
use ratatui_core::layout::Rect;
use ratatui_core::style::Style;
use ratatui_core::widgets::{StatefulWidget, Widget};
use ratatui_crossterm::crossterm::event::{Event, MouseEventKind};
use ratatui_widgets::block::{Block, BlockExt};
use std::cmp::max;
use unicode_width::UnicodeWidthStr;

/// Width of the column if nothing else is requested.
pub const DEFAULT_WIDTH: u16 = 6;

/// Renders line-numbers.
///
/// # Stateful
/// This widget implements [`StatefulWidget`], you can use it with
/// [`LineNumberState`] to handle common actions.
#[derive(Debug, Default, Clone)]
pub struct LineNumbers<'a> {
    cursor: Option<upos_type>,

    width: Option<u16>,
    margin: (u16, u16),

    style: Option<Style>,
    host_style: Option<Style>,
    cursor_style: Option<Style>,

    block: Option<Block<'a>>,
}

/// Styles as a package.
#[derive(Debug, Clone)]
pub struct LineNumberStyle {
    pub width: Option<u16>,
    pub margin: Option<(u16, u16)>,
    pub format: Option<NumberFormat>,
    pub style: Style,
    pub cursor: Option<Style>,
    pub block: Option<Block<'static>>,

    pub non_exhaustive: NonExhaustive,
}

/// State
#[derive(Debug, Clone)]
pub struct LineNumberState {
    pub area: Rect,
    pub inner: Rect,

    /// Line count at the last synchronize.
    line_count: upos_type,
    /// First rendered line.
    offset: upos_type,
    /// Synchronize before the next render.
    pending: bool,
    format: Option<NumberFormat>,
    surface: Surface,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> LineNumbers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take style and cursor from the host.
    ///
    /// An explicit [style](LineNumbers::style) still wins.
    pub fn with_source(mut self, source: &impl LineSource) -> Self {
        self.host_style = source.style();
        if self.cursor.is_none() {
            self.cursor = source.cursor_line();
        }
        self
    }

    /// Current line for highlighting.
    pub fn cursor(mut self, cursor: upos_type) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Fixed width for the whole column.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Extra margin left/right of the numbers.
    pub fn margin(mut self, margin: (u16, u16)) -> Self {
        self.margin = margin;
        self
    }

    /// Complete set of styles.
    ///
    /// The format is part of the state and must be set with
    /// [LineNumberState::set_format].
    pub fn styles(mut self, styles: LineNumberStyle) -> Self {
        if let Some(width) = styles.width {
            self.width = Some(width);
        }
        if let Some(margin) = styles.margin {
            self.margin = margin;
        }
        self.style = Some(styles.style);
        if let Some(cursor) = styles.cursor {
            self.cursor_style = Some(cursor);
        }
        if let Some(block) = styles.block {
            self.block = Some(block);
        }
        self
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Style for current line.
    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = Some(style);
        self
    }

    /// Block.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Calculates the necessary width for the current labels.
    ///
    /// Returns the fixed width if one is set. Otherwise, it's never
    /// less than [DEFAULT_WIDTH].
    pub fn width_for(&self, state: &LineNumberState) -> u16 {
        if let Some(width) = self.width {
            return width;
        }
        let block_width = {
            let area = self.block.inner_if_some(Rect::new(0, 0, 2, 2));
            2 - area.width
        };
        max(
            DEFAULT_WIDTH,
            state.label_width() + self.margin.0 + self.margin.1 + block_width,
        )
    }
}

impl Default for LineNumberStyle {
    fn default() -> Self {
        Self {
            width: None,
            margin: None,
            format: None,
            style: Default::default(),
            cursor: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl<'a> StatefulWidget for LineNumbers<'a> {
    type State = LineNumberState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.inner = self.block.inner_if_some(area);

        let style = self.style.or(self.host_style).unwrap_or_default();
        let cursor_style = if let Some(cursor_style) = self.cursor_style {
            style.patch(cursor_style)
        } else {
            style
        };
        let nr_width = state.label_width();

        if let Some(block) = self.block {
            block.render(area, buf);
        }
        // set base style
        for y in state.inner.top()..state.inner.bottom() {
            for x in state.inner.left()..state.inner.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(style);
                }
            }
        }

        for y in state.inner.top()..state.inner.bottom() {
            let row = state.offset.saturating_add((y - state.inner.y) as upos_type);
            let Some(label) = state.surface.labels().get(row as usize) else {
                break;
            };

            let nr_area = Rect::new(
                state.inner.x + self.margin.0, //
                y,
                nr_width,
                1,
            )
            .intersection(state.inner);
            if nr_area.is_empty() {
                continue;
            }

            if Some(row) == self.cursor {
                for x in nr_area.left()..nr_area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(cursor_style);
                    }
                }
            }

            // right aligned
            let pad = nr_width.saturating_sub(label.width() as u16);
            if pad < nr_area.width {
                buf.set_stringn(
                    nr_area.x + pad,
                    y,
                    label,
                    (nr_area.width - pad) as usize,
                    Style::default(),
                );
            }
        }
    }
}

impl Default for LineNumberState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            line_count: 1,
            offset: 0,
            pending: false,
            format: None,
            surface: Surface::new(None),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl LineNumberState {
    /// Shows "1", the first line always exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// New and synchronized with the host.
    pub fn with_source(source: &impl LineSource) -> Self {
        let mut s = Self::default();
        s.synchronize(source);
        s
    }

    /// Reconcile the labels with the line count of the host.
    ///
    /// Appends the missing numbers if the host grew, drops the
    /// trailing ones if it shrank. The vertical offset of the
    /// host is taken over too.
    ///
    /// Returns true if anything visible changed.
    pub fn synchronize(&mut self, source: &impl LineSource) -> bool {
        self.pending = false;

        let mut changed = false;

        let offset = source.vertical_offset();
        if offset != self.offset {
            self.offset = offset;
            changed = true;
        }

        let line_count = max(source.line_count(), 1);
        if line_count == self.line_count {
            return changed;
        }

        debug!("line-numbers {} -> {}", self.line_count, line_count);

        let format = self.format.as_ref();
        let r = self.surface.edit(|s| {
            if line_count > s.len() {
                s.append_to(line_count, format)
            } else {
                s.truncate(line_count)
            }
        });
        if let Err(e) = r {
            debug!("line-numbers sync failed {:?}", e);
        }
        // the labels are the truth.
        let old = self.line_count;
        self.line_count = self.surface.len();

        changed || self.line_count != old
    }

    /// Synchronize at the next opportunity.
    ///
    /// Lots of keystrokes can request a synchronize, but only
    /// the next [sync_if_pending](LineNumberState::sync_if_pending)
    /// does any work.
    pub fn request_sync(&mut self) {
        self.pending = true;
    }

    /// A synchronize has been requested.
    pub fn is_sync_pending(&self) -> bool {
        self.pending
    }

    /// Run a requested synchronize.
    pub fn sync_if_pending(&mut self, source: &impl LineSource) -> bool {
        if self.pending {
            self.synchronize(source)
        } else {
            false
        }
    }

    /// Line count at the last synchronize.
    pub fn line_count(&self) -> upos_type {
        self.line_count
    }

    /// All labels, the first one is line 1.
    pub fn labels(&self) -> &[String] {
        self.surface.labels()
    }

    /// Label for the 0-based row.
    pub fn label(&self, row: upos_type) -> Option<&str> {
        self.surface.labels().get(row as usize).map(|v| v.as_str())
    }

    /// Width of the widest label.
    pub fn label_width(&self) -> u16 {
        self.surface.label_width()
    }

    /// First rendered line.
    pub fn offset(&self) -> upos_type {
        self.offset
    }

    /// First rendered line.
    ///
    /// Will be overwritten by the next synchronize.
    pub fn set_offset(&mut self, offset: upos_type) -> bool {
        let old = self.offset;
        self.offset = offset;
        old != offset
    }

    /// Number format.
    pub fn format(&self) -> Option<&NumberFormat> {
        self.format.as_ref()
    }

    /// Change the number format. Relabels all lines.
    pub fn set_format(&mut self, format: Option<NumberFormat>) {
        self.format = format;
        let line_count = self.line_count;
        let format = self.format.as_ref();
        let r = self.surface.edit(|s| s.rebuild(line_count, format));
        if let Err(e) = r {
            debug!("line-numbers relabel failed {:?}", e);
        }
    }

    /// Change the number format from a pattern.
    /// See [format_num_pattern](https://docs.rs/format_num_pattern)
    pub fn set_format_str(&mut self, pattern: &str) -> Result<(), GutterError> {
        let format =
            NumberFormat::new(pattern).map_err(|e| GutterError::InvalidFormat(format!("{:?}", e)))?;
        self.set_format(Some(format));
        Ok(())
    }

    /// Apply the format from a style package.
    pub fn set_styles(&mut self, styles: &LineNumberStyle) {
        if let Some(format) = &styles.format {
            self.set_format(Some(format.clone()));
        }
    }
}

impl HandleEvent<Event, Regular, Outcome> for LineNumberState {
    fn handle(&mut self, event: &Event, _qualifier: Regular) -> Outcome {
        // no key-bindings, the keys belong to the host.
        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<Event, MouseOnly, Outcome> for LineNumberState {
    fn handle(&mut self, event: &Event, _qualifier: MouseOnly) -> Outcome {
        match event {
            ct_event!(mouse any for m) if self.area.contains((m.column, m.row).into()) => {
                match m.kind {
                    MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Drag(_) => {
                        debug!("line-numbers are read-only, click ignored");
                        Outcome::Unchanged
                    }
                    _ => Outcome::Continue,
                }
            }
            _ => Outcome::Continue,
        }
    }
}

/// Handle all events.
///
/// The line-numbers never take keyboard input, so this only
/// swallows the clicks on the line-numbers.
pub fn handle_events(state: &mut LineNumberState, event: &Event) -> Outcome {
    state.handle(event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(state: &mut LineNumberState, event: &Event) -> Outcome {
    state.handle(event, MouseOnly)
}
