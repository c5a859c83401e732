mod common;

use common::abc;
use cookie_consent::ui::dialog::{
    render_consent_dialog, ConsentDialogState, ConsentIntent, ConsentReducer, DialogText,
};
use cookie_consent::ui::mvi::Reducer;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn text() -> DialogText<'static> {
    DialogText {
        collapsed: "We use cookies to improve the site",
        expanded: "Pick the cookies you are happy with",
        image: Some("cookie.png"),
        privacy_policy_url: Some("https://example.com/privacy"),
    }
}

fn render(state: &ConsentDialogState, progress: f64) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_consent_dialog(frame, area, state, &text(), progress);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn collapsed_shows_accept_all_and_settings() {
    let screen = render(&ConsentDialogState::new(abc()), 1.0);
    assert!(screen.contains("Accept All Cookies"));
    assert!(screen.contains("Cookie Settings"));
    assert!(screen.contains("We use cookies"));
    assert!(screen.contains("cookie.png"));
    assert!(!screen.contains("Privacy Settings"));
}

#[test]
fn expanded_shows_rows_and_actions() {
    let state =
        ConsentReducer::reduce(ConsentDialogState::new(abc()), ConsentIntent::OpenSettings);
    let state = ConsentReducer::reduce(
        state,
        ConsentIntent::Toggle {
            id: "B".into(),
            agree: true,
        },
    );
    let screen = render(&state, 1.0);
    assert!(screen.contains("Privacy Settings"));
    assert!(screen.contains("[ ] Category A"));
    assert!(screen.contains("[x] Category B"));
    assert!(screen.contains("Third category"));
    assert!(screen.contains("Add custom category"));
    assert!(screen.contains("Confirm Choices"));
    assert!(screen.contains("Close"));
    assert!(!screen.contains("Accept All Cookies"));
}

#[test]
fn inactive_dialog_renders_nothing() {
    let screen = render(&ConsentDialogState::mounted(abc(), false), 1.0);
    assert!(screen.trim().is_empty());
}

#[test]
fn transition_start_is_off_screen() {
    let screen = render(&ConsentDialogState::new(abc()), 0.0);
    assert!(!screen.contains("Accept All Cookies"));
}
