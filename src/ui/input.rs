use crate::consent::DialogView;
use crate::ui::app::App;
use crate::ui::dialog::ConsentIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.view() {
        Some(DialogView::Collapsed) => match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter => {
                app.accept_all();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                app.dispatch(ConsentIntent::OpenSettings);
            }
            _ => {}
        },
        Some(DialogView::Expanded) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch(ConsentIntent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch(ConsentIntent::MoveDown),
            KeyCode::Char(' ') => app.toggle_focused(),
            KeyCode::Char('y') => app.set_focused(true),
            KeyCode::Char('n') => app.set_focused(false),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => {
                app.confirm_selection();
            }
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => {
                app.dispatch(ConsentIntent::CloseSettings);
            }
            _ => {}
        },
        None => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.request_quit();
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
