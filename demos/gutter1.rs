//!
//! Line-numbers next to a rat-text TextArea.
//!
//! cargo run --example gutter1 --features rat-text
//!

use rat_gutter::event::{Outcome, ct_event};
use rat_gutter::line_number::{self, LineNumberState, LineNumbers};
use rat_text::HasScreenCursor;
use rat_text::event::TextOutcome;
use rat_text::text_area::{self, TextArea, TextAreaState};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::widgets::{Block, Borders, StatefulWidget};
use ratatui::{DefaultTerminal, Frame};
use ratatui_crossterm::crossterm::event::{Event, read};
use std::fs;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        textarea: TextAreaState::new(),
        line_numbers: LineNumberState::new(),
    };
    state
        .textarea
        .set_text("Line numbers\nfor a\nTextArea.\n\nCtrl-Q to quit.");
    state.line_numbers.synchronize(&state.textarea);

    let terminal = ratatui::init();
    let r = run(terminal, &mut state);
    ratatui::restore();
    r
}

struct State {
    textarea: TextAreaState,
    line_numbers: LineNumberState,
}

fn run(mut terminal: DefaultTerminal, state: &mut State) -> Result<(), anyhow::Error> {
    loop {
        terminal.draw(|frame| render(frame, state))?;

        let event = read()?;
        if let ct_event!(key press CONTROL-'q') = event {
            break Ok(());
        }
        handle(&event, state);
    }
}

fn render(frame: &mut Frame<'_>, state: &mut State) {
    state.line_numbers.sync_if_pending(&state.textarea);

    let gutter = LineNumbers::new()
        .margin((1, 1))
        .with_source(&state.textarea)
        .style(Style::new().dark_gray())
        .cursor_style(Style::new().white().bold())
        .block(Block::new().borders(Borders::TOP | Borders::BOTTOM));

    let l = Layout::horizontal([
        Constraint::Length(gutter.width_for(&state.line_numbers)),
        Constraint::Fill(1),
    ])
    .split(frame.area());

    TextArea::new()
        .block(Block::bordered())
        .render(l[1], frame.buffer_mut(), &mut state.textarea);
    if let Some((cx, cy)) = state.textarea.screen_cursor() {
        frame.set_cursor_position((cx, cy));
    }

    // the textarea may have scrolled while rendering.
    state
        .line_numbers
        .set_offset(state.textarea.vertical_offset() as u32);
    gutter.render(l[0], frame.buffer_mut(), &mut state.line_numbers);
}

fn handle(event: &Event, state: &mut State) {
    if line_number::handle_events(&mut state.line_numbers, event) != Outcome::Continue {
        return;
    }

    // any text change can add or remove lines.
    let r = text_area::handle_events(&mut state.textarea, true, event);
    if r == TextOutcome::TextChanged {
        state.line_numbers.request_sync();
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    _ = fs::remove_file("log.log");
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}
