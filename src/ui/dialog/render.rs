//! Dialog rendering.
//!
//! Pure projection of [`ConsentDialogState`]: nothing here mutates state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::DialogConfig;
use crate::consent::DialogView;
use crate::ui::dialog::rows::DialogRow;
use crate::ui::dialog::state::ConsentDialogState;
use crate::ui::layout::{anchored_rect, MARGIN_Y};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, AGREED, BUTTON_PRIMARY, DIALOG_BORDER, DIALOG_TEXT, MUTED_TEXT,
};

/// Width of the dialog, borders included.
pub const DIALOG_WIDTH: u16 = 50;

/// Text and assets the dialog displays.
#[derive(Debug, Clone, Copy)]
pub struct DialogText<'a> {
    pub collapsed: &'a str,
    pub expanded: &'a str,
    pub image: Option<&'a str>,
    pub privacy_policy_url: Option<&'a str>,
}

impl<'a> From<&'a DialogConfig> for DialogText<'a> {
    fn from(config: &'a DialogConfig) -> Self {
        Self {
            collapsed: config.collapsed_text(),
            expanded: config.expanded_text(),
            image: config.image.as_deref(),
            privacy_policy_url: config.privacy_policy_url.as_deref(),
        }
    }
}

/// Resting height of the dialog inside `area`. Zero when nothing renders.
pub fn dialog_height(state: &ConsentDialogState, text: &DialogText<'_>, area: Rect) -> u16 {
    match state.view() {
        None => 0,
        Some(DialogView::Collapsed) => {
            let lines = collapsed_lines(text, inner_width(area)).len() as u16;
            (lines + 2).min(area.height)
        }
        Some(DialogView::Expanded) => area.height.saturating_sub(MARGIN_Y * 2),
    }
}

/// Draw the dialog into `area`.
///
/// `progress` is the entrance transition in `[0.0, 1.0]`; at `1.0` the
/// dialog sits at its resting position.
pub fn render_consent_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &ConsentDialogState,
    text: &DialogText<'_>,
    progress: f64,
) {
    let Some(view) = state.view() else {
        return;
    };

    let height = dialog_height(state, text, area);
    let rect = anchored_rect(area, DIALOG_WIDTH, height, progress);
    if rect.height == 0 || rect.width == 0 {
        return;
    }

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    match view {
        DialogView::Collapsed => {
            let lines = collapsed_lines(text, inner.width as usize);
            frame.render_widget(Paragraph::new(lines), inner);
        }
        DialogView::Expanded => render_expanded(frame, inner, state, text),
    }
}

fn collapsed_lines(text: &DialogText<'_>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(image) = text.image {
        lines.push(Line::from(Span::styled(
            format!(" 🍪 {}", image),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));
    for row in wrap_text(text.collapsed, width.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(
            format!(" {}", row),
            Style::default().fg(DIALOG_TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(buttons("[A] Accept All Cookies", "[S] Cookie Settings"));
    lines
}

fn render_expanded(
    frame: &mut Frame,
    area: Rect,
    state: &ConsentDialogState,
    text: &DialogText<'_>,
) {
    let [body, actions] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let mut lines = vec![
        Line::from(Span::styled(
            " Privacy Settings",
            Style::default().fg(DIALOG_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for row in wrap_text(text.expanded, (area.width as usize).saturating_sub(2)) {
        lines.push(Line::from(Span::styled(
            format!(" {}", row),
            Style::default().fg(DIALOG_TEXT),
        )));
    }
    lines.push(Line::from(""));

    let mut focus_line = 0;
    for row in state.rows() {
        if matches!(row, DialogRow::CategoryRow { focused: true, .. }) {
            focus_line = lines.len();
        }
        lines.extend(row_lines(&row));
    }

    if let Some(url) = text.privacy_policy_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" Privacy policy: {}", url),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    // Keep the focused row on screen; actions stay pinned below.
    let scroll = (focus_line + 2).saturating_sub(body.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
    frame.render_widget(
        Paragraph::new(buttons("[C] Confirm Choices", "[X] Close")).alignment(Alignment::Left),
        actions,
    );
}

fn row_lines(row: &DialogRow<'_>) -> Vec<Line<'static>> {
    match row {
        DialogRow::CategoryRow {
            category,
            agreed,
            focused,
        } => {
            let marker = if *focused { "›" } else { " " };
            let (checkbox, check_style) = if *agreed {
                ("[x]", Style::default().fg(AGREED))
            } else {
                ("[ ]", Style::default().fg(MUTED_TEXT))
            };
            let label_style = if *focused {
                Style::default()
                    .fg(DIALOG_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DIALOG_TEXT)
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(BUTTON_PRIMARY)),
                Span::styled(checkbox, check_style),
                Span::raw(" "),
                Span::styled(category.label.clone(), label_style),
            ])];
            if let Some(description) = &category.description {
                lines.push(Line::from(Span::styled(
                    format!("       {}", description),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            lines
        }
        DialogRow::AddCustomCategoryPrompt => vec![Line::from(Span::styled(
            "   + Add custom category",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))],
    }
}

fn buttons(primary: &'static str, secondary: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", primary),
            Style::default()
                .fg(ACCENT)
                .bg(BUTTON_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", secondary),
            Style::default().fg(DIALOG_TEXT).bg(ACTIVE_HIGHLIGHT),
        ),
    ])
}

fn inner_width(area: Rect) -> usize {
    DIALOG_WIDTH.min(area.width).saturating_sub(2) as usize
}

/// Greedy word wrap by char count. Words longer than `width` get their own line.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::CookieCategory;

    #[test]
    fn wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("please accept our cookie policy", 12),
            vec!["please", "accept our", "cookie", "policy"]
        );
    }

    #[test]
    fn wrap_text_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("ok", 10), vec!["ok"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn collapsed_height_grows_with_image() {
        let state = ConsentDialogState::new(Vec::<CookieCategory>::new());
        let area = Rect::new(0, 0, 80, 24);
        let plain = DialogText {
            collapsed: "Please accept our cookie policy",
            expanded: "x",
            image: None,
            privacy_policy_url: None,
        };
        let with_image = DialogText {
            image: Some("banner.png"),
            ..plain
        };
        assert_eq!(
            dialog_height(&state, &with_image, area),
            dialog_height(&state, &plain, area) + 1
        );
    }
}
