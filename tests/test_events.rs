use rat_gutter::event::{Outcome, may_change_lines};
use rat_gutter::line_number::{LineNumberState, handle_events, handle_mouse_events};
use ratatui_core::layout::Rect;
use ratatui_crossterm::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn scroll(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_keys_pass_through() {
    let mut s = LineNumberState::with_source(&"a\nb");
    s.area = Rect::new(0, 0, 4, 10);
    let before = s.labels().to_vec();

    for event in [
        key(KeyCode::Char('x'), KeyModifiers::NONE),
        key(KeyCode::Enter, KeyModifiers::NONE),
        key(KeyCode::Backspace, KeyModifiers::NONE),
        key(KeyCode::Char('v'), KeyModifiers::CONTROL),
        Event::Paste("1\n2\n3".into()),
    ] {
        assert_eq!(handle_events(&mut s, &event), Outcome::Continue);
    }

    assert_eq!(s.labels(), before.as_slice());
    assert_eq!(s.line_count(), 2);
}

#[test]
fn test_key_release_ignored() {
    let mut s = LineNumberState::new();
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(
        handle_events(&mut s, &Event::Key(release)),
        Outcome::Continue
    );
}

#[test]
fn test_mouse() {
    let mut s = LineNumberState::with_source(&"a\nb");
    s.area = Rect::new(0, 0, 4, 10);

    assert_eq!(handle_events(&mut s, &click(1, 3)), Outcome::Unchanged);
    assert_eq!(handle_mouse_events(&mut s, &click(1, 3)), Outcome::Unchanged);
    assert_eq!(handle_events(&mut s, &click(4, 3)), Outcome::Continue);
    assert_eq!(handle_events(&mut s, &click(1, 10)), Outcome::Continue);
    assert_eq!(handle_events(&mut s, &scroll(1, 3)), Outcome::Continue);
    assert_eq!(s.labels(), &["1", "2"]);
}

#[test]
fn test_may_change_lines() {
    assert!(may_change_lines(&key(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(may_change_lines(&key(KeyCode::Backspace, KeyModifiers::NONE)));
    assert!(may_change_lines(&key(KeyCode::Delete, KeyModifiers::NONE)));
    assert!(may_change_lines(&key(
        KeyCode::Char('z'),
        KeyModifiers::CONTROL
    )));
    assert!(may_change_lines(&Event::Paste("x".into())));

    assert!(may_change_lines(&key(KeyCode::Tab, KeyModifiers::NONE)));
    // typing replaces the selection
    assert!(may_change_lines(&key(KeyCode::Char('a'), KeyModifiers::NONE)));
    assert!(may_change_lines(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)));

    assert!(!may_change_lines(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
    assert!(!may_change_lines(&key(KeyCode::Left, KeyModifiers::NONE)));
    assert!(!may_change_lines(&click(0, 0)));
}

#[test]
fn test_request_on_edit() {
    let mut text = String::from("a");
    let mut s = LineNumberState::with_source(&text);

    let enter = key(KeyCode::Enter, KeyModifiers::NONE);
    // the host handles the key
    text.push('\n');
    if may_change_lines(&enter) {
        s.request_sync();
    }
    assert!(s.sync_if_pending(&text));
    assert_eq!(s.labels(), &["1", "2"]);
}
