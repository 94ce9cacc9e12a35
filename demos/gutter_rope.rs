//!
//! Line-numbers for a rope edited by a very small line editor.
//!
//! Typing appends, Enter adds a line, Backspace deletes the
//! last char. Ctrl-Q quits.
//!

use rat_gutter::event::{Outcome, ct_event, may_change_lines};
use rat_gutter::line_number::{LineNumberState, LineNumbers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::widgets::{Paragraph, StatefulWidget, Widget};
use ratatui::{DefaultTerminal, Frame};
use ratatui_crossterm::crossterm::event::{Event, read};
use ropey::Rope;
use std::fs;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        text: Rope::from_str("fn main() {\n    println!(\"hello\");\n}"),
        line_numbers: Default::default(),
    };
    state.line_numbers.synchronize(&state.text);

    let terminal = ratatui::init();
    let r = run(terminal, &mut state);
    ratatui::restore();
    r
}

struct State {
    text: Rope,
    line_numbers: LineNumberState,
}

fn run(mut terminal: DefaultTerminal, state: &mut State) -> Result<(), anyhow::Error> {
    loop {
        terminal.draw(|frame| render(frame, state))?;

        let event = read()?;
        if let ct_event!(key press CONTROL-'q') = event {
            break Ok(());
        }
        if handle(&event, state) == Outcome::Continue {
            log::debug!("unused {:?}", event);
        }
    }
}

fn render(frame: &mut Frame<'_>, state: &mut State) {
    // all the edits since the last frame at once.
    state.line_numbers.sync_if_pending(&state.text);

    let l = Layout::horizontal([
        Constraint::Length(LineNumbers::new().margin((1, 1)).width_for(&state.line_numbers)),
        Constraint::Fill(1),
    ])
    .split(frame.area());

    LineNumbers::new()
        .margin((1, 1))
        .cursor(state.text.len_lines().saturating_sub(1) as u32)
        .style(Style::new().dark_gray())
        .cursor_style(Style::new().white())
        .render(l[0], frame.buffer_mut(), &mut state.line_numbers);

    Paragraph::new(state.text.to_string()).render(l[1], frame.buffer_mut());
}

fn handle(event: &Event, state: &mut State) -> Outcome {
    let r = match event {
        ct_event!(key press c) | ct_event!(key press SHIFT-c) => {
            state.text.insert_char(state.text.len_chars(), *c);
            Outcome::Changed
        }
        ct_event!(keycode press Enter) => {
            state.text.insert_char(state.text.len_chars(), '\n');
            Outcome::Changed
        }
        ct_event!(keycode press Backspace) => {
            let len = state.text.len_chars();
            if len > 0 {
                state.text.remove(len - 1..len);
                Outcome::Changed
            } else {
                Outcome::Unchanged
            }
        }
        ct_event!(paste p) => {
            state.text.insert(state.text.len_chars(), p);
            Outcome::Changed
        }
        _ => Outcome::Continue,
    };

    if may_change_lines(event) {
        state.line_numbers.request_sync();
    }

    r
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
