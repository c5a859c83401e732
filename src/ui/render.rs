use crate::ui::app::App;
use crate::ui::dialog::render_consent_dialog;
use crate::ui::theme::MUTED_TEXT;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    let hint = Line::from(vec![
        Span::styled(format!(" {} ", app.app_id()), Style::default().fg(MUTED_TEXT)),
        Span::styled("│ Ctrl+Q: Quit without choosing", Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(hint), area);

    if let Some(state) = app.dialog() {
        render_consent_dialog(
            frame,
            area,
            state,
            &app.dialog_text(),
            app.transition_progress(),
        );
    }
}
